//! Render configuration.
//!
//! [`RenderConfig`] is the library-side view of the command line: which node
//! types to include, how many nodes to process, and how to lay out the output.

use crate::domain::{NodeFilter, NodeType};
use crate::mermaid::Direction;

/// Output format of the rendered diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fenced Mermaid flowchart
    #[default]
    Mermaid,
}

/// Configuration for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Node types whose nodes and edges are included
    pub filter: NodeFilter,

    /// Maximum number of qualifying nodes to process (`None` for no limit)
    pub max_nodes: Option<usize>,

    /// Flowchart direction
    pub direction: Direction,

    /// Output format
    pub format: OutputFormat,
}

impl RenderConfig {
    /// Create a configuration including the given node types
    pub fn new(include: impl IntoIterator<Item = NodeType>) -> Self {
        Self {
            filter: NodeFilter::new(include),
            ..Self::default()
        }
    }

    /// Limit the number of processed nodes
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Set the flowchart direction
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}
