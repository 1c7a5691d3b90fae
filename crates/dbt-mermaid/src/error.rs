//! Error types for dbt-mermaid operations.

use crate::domain::NodeId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for loading artifacts and building diagrams.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading an artifact.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error in an artifact file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The artifact directory does not exist.
    #[error("Artifact directory {} does not exist", .0.display())]
    ArtifactDirNotFound(PathBuf),

    /// The manifest file is missing from the artifact directory.
    #[error("dbt manifest {} does not exist", .0.display())]
    ManifestNotFound(PathBuf),

    /// The run results file is missing from the artifact directory.
    #[error("dbt run results {} does not exist", .0.display())]
    RunResultsNotFound(PathBuf),

    /// The manifest parsed as JSON but carries no dependency maps.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// A style color outside the supported set.
    #[error("Color {0} not supported")]
    UnsupportedColor(String),

    /// A run result names a node the dependency graph does not contain.
    #[error("Node {0} appears in run results but not in the dependency graph")]
    NodeNotInGraph(NodeId),
}

/// A specialized Result type for dbt-mermaid operations.
pub type Result<T> = std::result::Result<T, Error>;
