//!
//! Turns a finished [`Graph`] into graphviz dot text.
//!
//! Nodes are written sorted by qualified id so output diffs cleanly between runs;
//! edges are written in the order the traversal found them.

/// low-level dot text helpers
mod dot;
pub use dot::{escape_quoted, escape_record_field, sanitize_id, DotWriter};

/// resource type colors
mod palette;
pub use palette::{hsv_to_rgb, Palette, PaletteStrategy, KELLY_COLORS};

use dot::quoted;
use traverse::{Graph, ResourceNode};

/// Prefix of the name given to every rendered digraph.
pub const GRAPH_NAME_PREFIX: &str = "heat_stack_";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No color assigned for resource type '{0}'")]
    NoColor(String),
}

/// What each node looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Label with the resource name only.
    #[default]
    Plain,
    /// Name label, filled with the resource type's color.
    Colored,
    /// Record with name, resource type, and physical id.
    Detailed,
}

impl DisplayMode {
    /// Pick a mode from the `--colors` and `--detailed` flags.
    /// Detailed wins if both are given.
    pub fn from_flags(colors: bool, detailed: bool) -> Self {
        if detailed {
            Self::Detailed
        } else if colors {
            Self::Colored
        } else {
            Self::Plain
        }
    }
}

/// Name of the digraph for a stack with the given display name.
pub fn graph_name(stack_name: &str) -> String {
    format!("{GRAPH_NAME_PREFIX}{}", sanitize_id(stack_name))
}

/// Render `graph` as a dot digraph.
pub fn render(graph: &Graph, palette: &Palette, mode: DisplayMode) -> Result<String, Error> {
    let mut dot = DotWriter::new(&graph_name(&graph.root.name));
    dot.attr("rankdir", "LR");

    for node in graph.sorted_nodes() {
        write_node(&mut dot, node, palette, mode)?;
    }

    for edge in graph.edges() {
        dot.edge(&edge.from, &edge.to);
    }

    Ok(dot.finish())
}

fn write_node(
    dot: &mut DotWriter,
    node: &ResourceNode,
    palette: &Palette,
    mode: DisplayMode,
) -> Result<(), Error> {
    match mode {
        DisplayMode::Plain => {
            let label = quoted(&node.display_name);
            dot.node(&node.qualified_id, &[("label", label.as_str())]);
        }
        DisplayMode::Colored => {
            let color = palette
                .get(&node.resource_type)
                .ok_or_else(|| Error::NoColor(node.resource_type.clone()))?;
            let label = quoted(&node.display_name);
            let color = quoted(color);
            dot.node(
                &node.qualified_id,
                &[("label", label.as_str()), ("style", "filled"), ("color", color.as_str())],
            );
        }
        DisplayMode::Detailed => {
            let label = format!(
                "\"{} | {} | {}\"",
                escape_record_field(&node.display_name),
                escape_record_field(&node.resource_type),
                escape_record_field(node.physical_id.as_deref().unwrap_or_default()),
            );
            dot.node(
                &node.qualified_id,
                &[("label", label.as_str()), ("shape", "\"record\"")],
            );
        }
    }
    Ok(())
}
