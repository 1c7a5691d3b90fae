//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/dbt-mermaid to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "dbt-mermaid", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build dbt-mermaid");

    assert!(status.success(), "Failed to build dbt-mermaid binary");

    workspace.join("target/debug/dbt-mermaid")
}

/// Run the dbt-mermaid binary with the given arguments
pub fn run_dbt_mermaid(args: &[&str]) -> Output {
    let binary = get_binary();

    Command::new(&binary)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute dbt-mermaid binary")
}

/// Build a `manifest.json` value from `(parent, child)` edges.
///
/// Every node named in `nodes` or in an edge appears in both maps, the way
/// dbt writes them.
pub fn manifest_json(nodes: &[&str], edges: &[(&str, &str)]) -> Value {
    let mut parent_map = serde_json::Map::new();
    let mut child_map = serde_json::Map::new();

    let all_nodes = nodes
        .iter()
        .copied()
        .chain(edges.iter().flat_map(|(from, to)| [*from, *to]));
    for node in all_nodes {
        parent_map.entry(node).or_insert_with(|| json!([]));
        child_map.entry(node).or_insert_with(|| json!([]));
    }

    for (from, to) in edges {
        if let Some(Value::Array(parents)) = parent_map.get_mut(*to) {
            parents.push(json!(from));
        }
        if let Some(Value::Array(children)) = child_map.get_mut(*from) {
            children.push(json!(to));
        }
    }

    json!({
        "metadata": {"dbt_version": "1.7.4"},
        "nodes": {},
        "parent_map": parent_map,
        "child_map": child_map,
    })
}

/// Build a `run_results.json` value from `(unique_id, status)` pairs.
pub fn run_results_json(results: &[(&str, &str)]) -> Value {
    let results: Vec<Value> = results
        .iter()
        .map(|(id, status)| {
            json!({
                "unique_id": id,
                "status": status,
                "execution_time": 0.1,
                "message": null,
            })
        })
        .collect();

    json!({ "results": results, "elapsed_time": 1.0 })
}

/// Write both artifacts into `dir`
pub fn write_artifacts(dir: &Path, manifest: &Value, run_results: &Value) {
    std::fs::write(dir.join("manifest.json"), manifest.to_string())
        .expect("Failed to write manifest.json");
    std::fs::write(dir.join("run_results.json"), run_results.to_string())
        .expect("Failed to write run_results.json");
}
