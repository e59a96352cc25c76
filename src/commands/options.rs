//! `clickup-lookup options` command.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::field_select_values;
use crate::ports::clickup::ClickUpApi;

/// Execute the `options` command.
///
/// # Errors
///
/// Returns an error if the schema cannot be fetched, the token is malformed,
/// or the list has no such field.
pub async fn run(api: &dyn ClickUpApi, list_id: &str, token: &str) -> Result<Value> {
    let fields = api.list_fields(list_id).await?;
    let options = field_select_values(&fields, token, list_id)?;
    serde_json::to_value(options).map_err(|e| Error::InvalidJson(e.to_string()))
}
