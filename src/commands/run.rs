//! `clickup-lookup run` command.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::pipeline::{execute, ExecutionOptions};
use crate::ports::clickup::ClickUpApi;

/// Execute the `run` command.
///
/// Reads an array of item parameters (a single object counts as one item)
/// and returns the output items. Files ending in `.yaml` or `.yml` are read
/// as YAML, everything else as JSON.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if the file cannot be read,
/// [`Error::InvalidJson`] if it does not parse, and any item failure when
/// `continue_on_fail` is off.
pub async fn run(api: &dyn ClickUpApi, params: &Path, continue_on_fail: bool) -> Result<Value> {
    let items = match load_items(params)? {
        Value::Array(items) => items,
        item => vec![item],
    };
    tracing::info!(items = items.len(), continue_on_fail, "running items");

    let output = execute(api, &items, ExecutionOptions { continue_on_fail }).await?;
    serde_json::to_value(output).map_err(|e| Error::InvalidJson(e.to_string()))
}

fn load_items(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::InvalidParameters(format!("failed to read {}: {e}", path.display()))
    })?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if is_yaml {
        serde_yaml::from_str(&text)
            .map_err(|e| Error::InvalidJson(format!("{}: {e}", path.display())))
    } else {
        serde_json::from_str(&text)
            .map_err(|e| Error::InvalidJson(format!("{}: {e}", path.display())))
    }
}
