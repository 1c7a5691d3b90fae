//! dbt-mermaid - Render dbt run results as a Mermaid flowchart.
//!
//! This crate provides both a CLI application and a library that reads the
//! `manifest.json` and `run_results.json` artifacts of a dbt run, selects nodes
//! by type, and renders their direct dependencies as a Mermaid diagram with
//! nodes colored by run status.
//!
//! # Example
//!
//! ```no_run
//! use dbt_mermaid::config::RenderConfig;
//! use dbt_mermaid::domain::NodeType;
//! use std::path::Path;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> dbt_mermaid::error::Result<()> {
//! let config = RenderConfig::new([NodeType::Model, NodeType::Seed]);
//! let diagram = dbt_mermaid::render_artifacts(Path::new("target"), &config).await?;
//! print!("{diagram}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod artifacts;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod mermaid;
pub mod walker;

// Public CLI module (needed by binary)
pub mod cli;

use artifacts::Artifacts;
use config::{OutputFormat, RenderConfig};
use domain::RunResults;
use error::Result;
use graph::DependencyGraph;
use mermaid::MermaidDiagram;
use std::path::Path;
use tracing::{info, warn};

/// Build the diagram for already-loaded artifacts.
///
/// # Errors
///
/// Propagates [`error::Error::NodeNotInGraph`] from the walk.
pub fn build_diagram(
    graph: &DependencyGraph,
    run_results: &RunResults,
    config: &RenderConfig,
) -> Result<MermaidDiagram> {
    if config.filter.is_empty() {
        warn!("No node types included; the diagram will be empty");
    }

    let mut diagram = match config.format {
        OutputFormat::Mermaid => MermaidDiagram::with_direction(config.direction),
    };

    let summary = walker::walk(
        graph,
        &run_results.results,
        &config.filter,
        config.max_nodes,
        &mut diagram,
    )?;

    if summary.capped > 0 {
        warn!(
            "Node limit reached: {} node(s) left out of the diagram",
            summary.capped
        );
    }
    info!(
        processed = summary.processed,
        succeeded = summary.succeeded,
        failed = summary.failed,
        edges = diagram.edges().count(),
        "Built diagram"
    );

    Ok(diagram)
}

/// Load the artifacts in `dir` and render them into diagram text.
///
/// # Errors
///
/// Returns an error if either artifact is missing or malformed, or if a run
/// result names a node that the manifest does not contain.
pub async fn render_artifacts(dir: &Path, config: &RenderConfig) -> Result<String> {
    let artifacts = Artifacts::load(dir).await?;
    let diagram = build_diagram(&artifacts.graph, &artifacts.run_results, config)?;
    Ok(diagram.render())
}
