//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate the `--base-nodes` limit.
///
/// Must be a positive integer: the value is the maximum number of nodes
/// rendered, so zero would always produce an empty diagram.
pub fn validate_base_nodes(s: &str) -> Result<usize, String> {
    let s = s.trim();

    let value: usize = s
        .parse()
        .map_err(|_| format!("Invalid node count '{s}'. Expected a positive integer"))?;

    if value == 0 {
        return Err("Node count must be at least 1".to_string());
    }

    Ok(value)
}
