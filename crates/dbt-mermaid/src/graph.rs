//! Dependency graph built from the manifest's parent and child maps.
//!
//! Edges point from **upstream to downstream**: an edge `a -> b` means `b`
//! selects from (depends on) `a`. Only single-hop neighbor lookups are
//! exposed; no traversal beyond a node's direct parents and children.

use crate::domain::NodeId;
use crate::error::{Error, Result};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed dependency graph of dbt nodes.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Nodes hold their `NodeId`; edges carry no weight.
    graph: DiGraph<NodeId, ()>,

    /// Mapping from NodeId to graph NodeIndex.
    ///
    /// Every node in `graph` has exactly one entry here.
    node_map: HashMap<NodeId, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from manifest-style adjacency maps.
    ///
    /// `parent_map` maps a node to its parents and `child_map` maps a node to
    /// its children. Both maps contribute edges; an edge listed in both is
    /// stored once.
    pub fn from_maps(
        parent_map: &HashMap<NodeId, Vec<NodeId>>,
        child_map: &HashMap<NodeId, Vec<NodeId>>,
    ) -> Self {
        let mut graph = Self::new();

        for (node, parents) in parent_map {
            graph.add_node(node.clone());
            for parent in parents {
                graph.add_edge(parent.clone(), node.clone());
            }
        }

        for (node, children) in child_map {
            graph.add_node(node.clone());
            for child in children {
                graph.add_edge(node.clone(), child.clone());
            }
        }

        graph
    }

    /// Insert a node if it is not already present, returning its index.
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&id) {
            return index;
        }
        let index = self.graph.add_node(id.clone());
        self.node_map.insert(id, index);
        index
    }

    /// Add an edge `from -> to`, inserting either endpoint if needed.
    ///
    /// Adding an existing edge again is a no-op.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.graph.update_edge(from, to, ());
    }

    /// Whether the graph contains `id`
    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Direct parents of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotInGraph`] if `id` is unknown.
    pub fn predecessors(&self, id: &NodeId) -> Result<Vec<&NodeId>> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Direct children of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotInGraph`] if `id` is unknown.
    pub fn successors(&self, id: &NodeId) -> Result<Vec<&NodeId>> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn neighbors(&self, id: &NodeId, direction: Direction) -> Result<Vec<&NodeId>> {
        let node = self
            .node_map
            .get(id)
            .ok_or_else(|| Error::NodeNotInGraph(id.clone()))?;

        Ok(self
            .graph
            .neighbors_directed(*node, direction)
            .map(|neighbor| &self.graph[neighbor])
            .collect())
    }
}
