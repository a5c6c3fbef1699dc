use anyhow::{Context, Result};
use colored::Colorize;

use stack::{DataSource, Stack};
use util::HashSet;

use crate::{qualified_id, Graph, ResourceNode};

/// Depth-first traversal strategy
pub struct GraphBuilder<'a, S: ?Sized> {
    /// where stacks and resources come from
    source: &'a S,
    /// whether to descend into nested stacks
    recursive: bool,
    /// ids of stacks already walked, so nested stack cycles terminate
    visited: HashSet<String>,
}

impl<'a, S: DataSource + ?Sized> GraphBuilder<'a, S> {
    /// Create a new GraphBuilder reading from `source`.
    pub fn new(source: &'a S, recursive: bool) -> Self {
        Self {
            source,
            recursive,
            visited: HashSet::default(),
        }
    }

    /// Consume this builder and return the graph of `root` and,
    /// if recursive, every stack nested below it.
    pub fn build(mut self, root: Stack) -> Result<Graph> {
        let mut graph = Graph::new(root.clone());
        self.visit(&root, &mut graph)?;
        log::debug!(
            "built graph with {} nodes and {} edges from {} stacks",
            graph.len(),
            graph.edges().len(),
            self.visited.len(),
        );
        Ok(graph)
    }

    /// Add all resources of a single stack, recursing into nested stacks as we go.
    fn visit(&mut self, stack: &Stack, graph: &mut Graph) -> Result<()> {
        self.visited.insert(stack.id.clone());
        log::info!("Visiting stack {} ({})", stack.name.cyan(), stack.id);

        let resources = self
            .source
            .list_resources(&stack.id)
            .with_context(|| format!("while listing resources of stack '{}'", stack.name))?;

        for rsrc in resources {
            let id = qualified_id(&stack.id, &rsrc.name);

            for req in &rsrc.required_by {
                graph.add_edge(id.clone(), qualified_id(&stack.id, req));
            }

            let physical_id = if self.recursive {
                rsrc.physical_id.clone()
            } else {
                None
            };

            graph.add_node(ResourceNode {
                qualified_id: id,
                display_name: rsrc.name,
                resource_type: rsrc.resource_type,
                physical_id: rsrc.physical_id,
            });

            if let Some(physical_id) = physical_id {
                if let Some(nested) = self.nested_stack(&physical_id)? {
                    self.descend(nested, graph)?;
                }
            }
        }
        Ok(())
    }

    fn descend(&mut self, nested: Stack, graph: &mut Graph) -> Result<()> {
        if self.visited.contains(&nested.id) {
            log::warn!(
                "Stack {} ({}) was already visited; not descending into it again",
                nested.name,
                nested.id,
            );
            return Ok(());
        }
        self.visit(&nested, graph)
    }

    /// Look up the nested stack behind a resource. Most resources aren't stacks,
    /// so not found is normal and gives `None`.
    fn nested_stack(&self, physical_id: &str) -> Result<Option<Stack>> {
        match self.source.get_nested_stack(physical_id) {
            Ok(stack) => Ok(Some(stack)),
            Err(e) if e.is_not_found() => {
                log::trace!("no nested stack for physical id {physical_id}");
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| {
                format!("while looking up nested stack with id '{physical_id}'")
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::build;
    use stack::{Resource, Snapshot};

    fn ids(graph: &Graph) -> Vec<&str> {
        graph.nodes().map(|n| n.qualified_id.as_str()).collect()
    }

    fn edges(graph: &Graph) -> Vec<(&str, &str)> {
        graph
            .edges()
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }

    fn two_level() -> Result<Snapshot> {
        let mut snapshot = Snapshot::default();
        snapshot.add_stack(
            Stack::new("s1", "S1"),
            vec![
                Resource::new("web", "Server")
                    .with_physical_id("s2")
                    .with_required_by("db"),
                Resource::new("db", "Server").with_physical_id("i-db"),
            ],
        )?;
        snapshot.add_stack(
            Stack::new("s2", "S2"),
            vec![Resource::new("vol", "Volume").with_physical_id("v-1")],
        )?;
        Ok(snapshot)
    }

    #[test]
    fn test_flat() -> Result<()> {
        let source = two_level()?;
        let graph = GraphBuilder::new(&source, false).build(Stack::new("s1", "S1"))?;
        assert_eq!(ids(&graph), ["s1:web", "s1:db"]);
        assert_eq!(edges(&graph), [("s1:web", "s1:db")]);
        Ok(())
    }

    #[test]
    fn test_recursive_preorder() -> Result<()> {
        let source = two_level()?;
        let graph = GraphBuilder::new(&source, true).build(Stack::new("s1", "S1"))?;
        // nested stack is walked right after the resource that owns it:
        assert_eq!(ids(&graph), ["s1:web", "s2:vol", "s1:db"]);
        assert_eq!(edges(&graph), [("s1:web", "s1:db")]);
        assert_eq!(graph.get("s2:vol").map(|n| n.display_name.as_str()), Some("vol"));
        Ok(())
    }

    #[test]
    fn test_same_name_different_stacks() -> Result<()> {
        let mut source = Snapshot::default();
        source.add_stack(
            Stack::new("outer", "Outer"),
            vec![
                Resource::new("server", "Server").with_required_by("inner"),
                Resource::new("inner", "Stack").with_physical_id("nested"),
            ],
        )?;
        source.add_stack(
            Stack::new("nested", "Nested"),
            vec![Resource::new("server", "Server")],
        )?;
        let graph = GraphBuilder::new(&source, true).build(Stack::new("outer", "Outer"))?;
        assert_eq!(ids(&graph), ["outer:server", "outer:inner", "nested:server"]);
        assert_eq!(edges(&graph), [("outer:server", "outer:inner")]);
        Ok(())
    }

    #[test]
    fn test_cycle_terminates() -> Result<()> {
        let mut source = Snapshot::default();
        source.add_stack(
            Stack::new("a", "A"),
            vec![Resource::new("child", "Stack").with_physical_id("b")],
        )?;
        source.add_stack(
            Stack::new("b", "B"),
            vec![Resource::new("parent", "Stack").with_physical_id("a")],
        )?;
        let graph = build(&source, Stack::new("a", "A"), true)?;
        assert_eq!(ids(&graph), ["a:child", "b:parent"]);
        Ok(())
    }

    #[test]
    fn test_empty_stack() -> Result<()> {
        let mut source = Snapshot::default();
        source.add_stack(Stack::new("e", "Empty"), Vec::new())?;
        let graph = build(&source, Stack::new("e", "Empty"), true)?;
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_resources_is_fatal() {
        let source = Snapshot::default();
        let res = build(&source, Stack::new("gone", "Gone"), false);
        assert!(res.is_err());
    }
}
