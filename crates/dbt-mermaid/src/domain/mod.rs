//! Domain types for dbt artifacts.
//!
//! This module contains the node identifiers, node types and run result
//! records shared by the loader, the walker and the diagram builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Run status that renders a node as succeeded.
///
/// Any other status value renders as failed.
pub const SUCCESS_STATUS: &str = "success";

/// Unique identifier for a dbt node (e.g. `model.jaffle_shop.orders`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type of dbt node, taken from the leading tag of its unique ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// SQL or Python model
    Model,

    /// External source table
    Source,

    /// CSV seed
    Seed,

    /// Snapshot table
    Snapshot,

    /// Data test
    Test,
}

impl NodeType {
    /// All node types, in declaration order.
    pub const ALL: [NodeType; 5] = [
        NodeType::Model,
        NodeType::Source,
        NodeType::Seed,
        NodeType::Snapshot,
        NodeType::Test,
    ];

    /// The unique ID prefix for this type, including the `.` separator.
    pub fn prefix(self) -> &'static str {
        match self {
            NodeType::Model => "model.",
            NodeType::Source => "source.",
            NodeType::Seed => "seed.",
            NodeType::Snapshot => "snapshot.",
            NodeType::Test => "test.",
        }
    }

    /// Whether `id` belongs to this node type.
    pub fn matches(self, id: &str) -> bool {
        id.starts_with(self.prefix())
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Model => write!(f, "model"),
            NodeType::Source => write!(f, "source"),
            NodeType::Seed => write!(f, "seed"),
            NodeType::Snapshot => write!(f, "snapshot"),
            NodeType::Test => write!(f, "test"),
        }
    }
}

/// Allow-list of node types used to select nodes and edges.
///
/// An empty filter matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    types: BTreeSet<NodeType>,
}

impl NodeFilter {
    /// Create a filter allowing the given node types
    pub fn new(types: impl IntoIterator<Item = NodeType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// Whether no node type is allowed
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Allowed node types, in sorted order
    pub fn types(&self) -> impl Iterator<Item = NodeType> + '_ {
        self.types.iter().copied()
    }

    /// Whether `id` starts with at least one allowed prefix.
    pub fn matches(&self, id: &str) -> bool {
        self.types.iter().any(|t| t.matches(id))
    }
}

/// Result of executing a single node in a dbt run.
///
/// Only the fields the diagram needs are kept; the remaining keys of a
/// `run_results.json` entry are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Node that was executed
    pub unique_id: NodeId,

    /// Execution status (`success`, `error`, `fail`, `skipped`, ...)
    pub status: String,
}

impl RunResult {
    /// Create a run result
    pub fn new(unique_id: impl Into<NodeId>, status: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            status: status.into(),
        }
    }

    /// Whether the node ran successfully (exact, case-sensitive match).
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Top-level structure of `run_results.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResults {
    /// Per-node results in execution order
    pub results: Vec<RunResult>,
}
