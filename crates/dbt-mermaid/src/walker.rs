//! Selection of run results and their one-hop neighborhoods.
//!
//! The walker filters run results by node type, honors an optional node cap,
//! and feeds each selected node's parent and child edges plus its status color
//! into a [`MermaidDiagram`].

use crate::domain::{NodeFilter, RunResult};
use crate::error::Result;
use crate::graph::DependencyGraph;
use crate::mermaid::{FillColor, MermaidDiagram};
use tracing::debug;

/// Counts collected while walking run results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Nodes whose edges and style were added
    pub processed: usize,
    /// Processed nodes with status `success`
    pub succeeded: usize,
    /// Processed nodes with any other status
    pub failed: usize,
    /// Qualifying nodes left out because the cap was reached
    pub capped: usize,
}

/// Walk `results` in order and populate `diagram`.
///
/// Only results whose ID matches `filter` are considered. When `max_nodes` is
/// `Some(n)`, at most `n` of them are processed. Neighbors are added as edges
/// only when they also match `filter`; the style of a processed node is added
/// regardless of its neighbors.
///
/// # Errors
///
/// Returns [`crate::error::Error::NodeNotInGraph`] for the first selected
/// result whose node is missing from `graph`.
pub fn walk<'a>(
    graph: &DependencyGraph,
    results: impl IntoIterator<Item = &'a RunResult>,
    filter: &NodeFilter,
    max_nodes: Option<usize>,
    diagram: &mut MermaidDiagram,
) -> Result<WalkSummary> {
    let mut summary = WalkSummary::default();
    let selected = results
        .into_iter()
        .filter(|result| filter.matches(result.unique_id.as_str()));

    for result in selected {
        if max_nodes.is_some_and(|max| summary.processed >= max) {
            summary.capped += 1;
            continue;
        }

        let node = &result.unique_id;

        for parent in graph.predecessors(node)? {
            if filter.matches(parent.as_str()) {
                diagram.add_edge(parent.as_str(), node.as_str());
            }
        }

        for child in graph.successors(node)? {
            if filter.matches(child.as_str()) {
                diagram.add_edge(node.as_str(), child.as_str());
            }
        }

        let color = FillColor::for_status(&result.status);
        debug!(node = %node, status = %result.status, %color, "Added node");
        diagram.add_fill(node.as_str(), color);

        summary.processed += 1;
        if result.is_success() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
    }

    Ok(summary)
}
