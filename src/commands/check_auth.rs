//! `clickup-lookup check-auth` command.

use serde_json::{json, Value};

use crate::error::Result;
use crate::ports::clickup::ClickUpApi;

/// Execute the `check-auth` command.
///
/// Succeeds when `GET /team` accepts the credentials and reports how many
/// workspaces they can see.
///
/// # Errors
///
/// Returns the API error when the credentials are rejected.
pub async fn run(api: &dyn ClickUpApi) -> Result<Value> {
    let teams = api.teams().await?;
    tracing::info!(teams = teams.len(), "credentials accepted");
    Ok(json!({ "ok": true, "teams": teams.len() }))
}
