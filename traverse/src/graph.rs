use std::collections::BTreeSet;

use stack::Stack;
use util::HashMap;

/// One resource, as a node in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNode {
    /// `<stack id>:<resource name>`, unique across the whole graph.
    pub qualified_id: String,
    /// Resource name local to its stack; used as the node label.
    pub display_name: String,
    pub resource_type: String,
    pub physical_id: Option<String>,
}

/// Directed link from a resource to a resource that requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// Resources and dependencies discovered by a single traversal.
#[derive(Debug)]
pub struct Graph {
    /// Stack the traversal started from.
    pub root: Stack,
    /// qualified ids in discovery order, without repeats
    order: Vec<String>,
    /// qualified id -> node
    nodes: HashMap<String, ResourceNode>,
    /// edges in discovery order
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(root: Stack) -> Self {
        Self {
            root,
            order: Vec::with_capacity(32),
            nodes: HashMap::default(),
            edges: Vec::with_capacity(32),
        }
    }

    /// Add a node. A node with the same qualified id replaces the old one
    /// but keeps its original discovery position.
    pub fn add_node(&mut self, node: ResourceNode) {
        let id = node.qualified_id.clone();
        if self.nodes.insert(id.clone(), node).is_some() {
            log::debug!("replacing node with duplicate id {id}");
        } else {
            self.order.push(id);
        }
    }

    pub fn add_edge(&mut self, from: String, to: String) {
        self.edges.push(Edge { from, to });
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, qualified_id: &str) -> Option<&ResourceNode> {
        self.nodes.get(qualified_id)
    }

    /// Nodes in the order the traversal found them.
    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Nodes sorted by qualified id.
    pub fn sorted_nodes(&self) -> Vec<&ResourceNode> {
        let mut nodes: Vec<_> = self.nodes.values().collect();
        nodes.sort_unstable_by(|a, b| a.qualified_id.cmp(&b.qualified_id));
        nodes
    }

    /// Edges in the order the traversal found them.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges with at least one endpoint that isn't a known node.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| !self.nodes.contains_key(&e.from) || !self.nodes.contains_key(&e.to))
    }

    /// Distinct resource types of all nodes, sorted.
    pub fn resource_types(&self) -> BTreeSet<&str> {
        self.nodes.values().map(|n| n.resource_type.as_str()).collect()
    }
}
