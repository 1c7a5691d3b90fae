//! dbt-mermaid CLI binary.

use anyhow::Result;
use dbt_mermaid::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the dbt-mermaid CLI.
///
/// Uses tokio's current_thread runtime; the only I/O is reading two artifact
/// files before rendering.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the diagram.
    // Example: RUST_LOG=dbt_mermaid=debug dbt-mermaid target -i model
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dbt_mermaid=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting dbt-mermaid CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("dbt-mermaid CLI completed successfully");
    Ok(())
}
