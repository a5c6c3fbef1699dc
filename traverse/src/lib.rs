//!
//! The functions in this mod walk a stack and (optionally) its nested stacks,
//! collecting every resource as a node and every `required_by` link as an edge.
//!
//! The walk is depth-first and pre-order: a resource is recorded before any
//! nested stack behind it is entered. Node ids are qualified with the id of the
//! owning stack, so resources that share a local name in different stacks stay distinct.
//! Edges are recorded by id as soon as they are seen, so an edge may point at a
//! node that is never discovered; this is allowed.

/// `Graph`, `ResourceNode`, and `Edge`
mod graph;
pub use graph::{Edge, Graph, ResourceNode};

/// depth-first walk over a `DataSource`
mod builder;
pub use builder::GraphBuilder;

/// Separates a stack id from a resource name in a qualified id, e.g. "a1b2:web".
pub const QUALIFIED_ID_DELIM: char = ':';

/// Make the globally unique id of resource `name` in stack `stack_id`.
pub fn qualified_id(stack_id: &str, name: &str) -> String {
    let mut id = String::with_capacity(stack_id.len() + name.len() + 1);
    id.push_str(stack_id);
    id.push(QUALIFIED_ID_DELIM);
    id.push_str(name);
    id
}

/// Build the resource graph of `root`, descending into nested stacks if `recursive`.
pub fn build<S: stack::DataSource + ?Sized>(
    source: &S,
    root: stack::Stack,
    recursive: bool,
) -> anyhow::Result<Graph> {
    GraphBuilder::new(source, recursive).build(root)
}
