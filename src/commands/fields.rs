//! `clickup-lookup fields` command.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::choice_field_references;
use crate::ports::clickup::ClickUpApi;

/// Execute the `fields` command.
///
/// # Errors
///
/// Returns an error if the field schema cannot be fetched.
pub async fn run(api: &dyn ClickUpApi, list_id: &str) -> Result<Value> {
    let fields = api.list_fields(list_id).await?;
    serde_json::to_value(choice_field_references(&fields)).map_err(|e| Error::InvalidJson(e.to_string()))
}
