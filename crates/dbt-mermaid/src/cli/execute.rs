//! Command execution logic.

use anyhow::{Context, Result};
use std::io::Write;

use super::Cli;

/// Render the artifacts named by `cli` and print the diagram to stdout.
///
/// Nothing is written to stdout unless the whole diagram was built.
pub async fn execute_render(cli: &Cli) -> Result<()> {
    let config = cli.render_config();

    tracing::debug!(
        dir = %cli.dir.display(),
        include = ?cli.include,
        base_nodes = ?cli.base_nodes,
        "Rendering diagram"
    );

    let diagram = crate::render_artifacts(&cli.dir, &config).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(diagram.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write diagram to stdout")?;

    Ok(())
}
