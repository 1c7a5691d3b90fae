//! Loading of dbt artifacts from a target directory.
//!
//! Two files are read:
//!
//! - `manifest.json`, whose `parent_map` and `child_map` give the dependency
//!   graph
//! - `run_results.json`, whose `results` array gives per-node statuses
//!
//! All paths are checked before anything is parsed, so a missing file is
//! reported without reading the others.

use crate::domain::{NodeId, RunResults};
use crate::error::{Error, Result};
use crate::graph::DependencyGraph;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Name of the manifest file inside the artifact directory
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Name of the run results file inside the artifact directory
pub const RUN_RESULTS_FILE_NAME: &str = "run_results.json";

/// The dependency maps of `manifest.json`. Every other key is ignored.
#[derive(Debug, Deserialize)]
struct ManifestMaps {
    parent_map: Option<HashMap<NodeId, Vec<NodeId>>>,
    child_map: Option<HashMap<NodeId, Vec<NodeId>>>,
}

/// Validated locations of the artifacts inside a target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// The artifact directory itself
    pub dir: PathBuf,
    /// Path to `manifest.json`
    pub manifest: PathBuf,
    /// Path to `run_results.json`
    pub run_results: PathBuf,
}

impl ArtifactPaths {
    /// Resolve and check the artifact paths under `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtifactDirNotFound`], [`Error::ManifestNotFound`] or
    /// [`Error::RunResultsNotFound`], checked in that order.
    pub async fn resolve(dir: &Path) -> Result<Self> {
        if !is_dir(dir).await {
            return Err(Error::ArtifactDirNotFound(dir.to_path_buf()));
        }

        let manifest = dir.join(MANIFEST_FILE_NAME);
        if !is_file(&manifest).await {
            return Err(Error::ManifestNotFound(manifest));
        }

        let run_results = dir.join(RUN_RESULTS_FILE_NAME);
        if !is_file(&run_results).await {
            return Err(Error::RunResultsNotFound(run_results));
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            manifest,
            run_results,
        })
    }
}

/// Artifacts loaded into memory.
#[derive(Debug)]
pub struct Artifacts {
    /// Dependency graph from the manifest
    pub graph: DependencyGraph,
    /// Run results in execution order
    pub run_results: RunResults,
}

impl Artifacts {
    /// Resolve, read and parse both artifacts under `dir`.
    pub async fn load(dir: &Path) -> Result<Self> {
        let paths = ArtifactPaths::resolve(dir).await?;
        let graph = load_manifest_graph(&paths.manifest).await?;
        let run_results = load_run_results(&paths.run_results).await?;

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            results = run_results.results.len(),
            "Loaded artifacts from {}",
            paths.dir.display()
        );

        Ok(Self { graph, run_results })
    }
}

/// Build the dependency graph from a `manifest.json` file.
///
/// # Errors
///
/// Returns [`Error::InvalidManifest`] if neither `parent_map` nor `child_map`
/// is present.
pub async fn load_manifest_graph(path: &Path) -> Result<DependencyGraph> {
    let content = fs::read_to_string(path).await?;
    parse_manifest_graph(&content)
}

/// Parse the dependency graph from manifest JSON text.
pub fn parse_manifest_graph(content: &str) -> Result<DependencyGraph> {
    let maps: ManifestMaps = serde_json::from_str(content)?;

    if maps.parent_map.is_none() && maps.child_map.is_none() {
        return Err(Error::InvalidManifest(
            "missing both parent_map and child_map".to_string(),
        ));
    }

    Ok(DependencyGraph::from_maps(
        &maps.parent_map.unwrap_or_default(),
        &maps.child_map.unwrap_or_default(),
    ))
}

/// Read and parse a `run_results.json` file.
pub async fn load_run_results(path: &Path) -> Result<RunResults> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_file())
}
