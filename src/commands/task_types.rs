//! `clickup-lookup task-types` command.

use serde_json::Value;

use crate::error::Result;
use crate::ports::clickup::ClickUpApi;

/// Execute the `task-types` command.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn run(api: &dyn ClickUpApi, team_id: &str) -> Result<Value> {
    Ok(Value::Array(api.custom_task_types(team_id).await?))
}
