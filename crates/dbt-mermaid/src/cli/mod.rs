//! CLI argument parsing and execution.
//!
//! This module provides the command-line interface for dbt-mermaid using
//! clap's derive API.
//!
//! # Example
//!
//! ```bash
//! dbt-mermaid target/ -i model -i seed
//! dbt-mermaid target/ --include model --base-nodes 20 --direction TD
//! ```

mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Re-export types
pub use types::{DirectionArg, FormatArg, NodeTypeArg};

// Re-export validators for external use
pub use validators::validate_base_nodes;

use crate::config::RenderConfig;

/// Render dbt run results as a Mermaid flowchart
///
/// Reads `manifest.json` and `run_results.json` from a dbt artifact (target)
/// directory and prints the selected nodes, their direct dependencies and
/// their run status as a Mermaid diagram.
#[derive(Parser, Debug)]
#[command(name = "dbt-mermaid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the dbt artifacts (target folder)
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "mermaid")]
    pub format: FormatArg,

    /// Maximum number of base nodes to render
    #[arg(long, value_parser = validate_base_nodes)]
    pub base_nodes: Option<usize>,

    /// Node types to include (repeatable)
    ///
    /// Nodes and edges of other types are left out. Without any include,
    /// the diagram is empty.
    #[arg(short, long, value_enum)]
    pub include: Vec<NodeTypeArg>,

    /// Flowchart direction
    #[arg(long, value_enum, default_value = "LR")]
    pub direction: DirectionArg,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Render configuration described by the arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            filter: crate::domain::NodeFilter::new(self.include.iter().map(|&t| t.into())),
            max_nodes: self.base_nodes,
            direction: self.direction.into(),
            format: self.format.into(),
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        execute::execute_render(self).await
    }
}
