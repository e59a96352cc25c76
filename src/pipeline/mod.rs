//! Runs pipeline items through the lookup and mapping engine.
//!
//! Items are processed one after another. Each item fetches whatever it
//! needs from ClickUp afresh; nothing is shared between items. A failing
//! item either becomes an error record (continue-on-failure) or aborts the
//! run.

pub mod params;

use serde_json::{json, Value};
use tracing::Instrument;

use crate::error::{Error, Result};
use crate::field::find_by_id;
use crate::lookup::resolve;
use crate::mapping::{build_mutations, parse_mutations_json, CustomFieldMutation};
use crate::ports::clickup::ClickUpApi;
use crate::record::{assemble, LookupRecord, OutputItem};

pub use params::{LookupEntry, NodeParameters, Operation, Resource};

/// How failures are handled across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionOptions {
    /// Record failing items as error items and keep going.
    pub continue_on_fail: bool,
}

/// Executes every item in order and collects the output items.
///
/// # Errors
///
/// Returns the first item failure unless `options.continue_on_fail` is set.
pub async fn execute(
    api: &dyn ClickUpApi,
    items: &[Value],
    options: ExecutionOptions,
) -> Result<Vec<OutputItem>> {
    let mut output = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let span = tracing::info_span!("item", index, operation = tracing::field::Empty);
        match run_item(api, item.clone()).instrument(span).await {
            Ok(response) => output.extend(assemble(index, response)),
            Err(err) if options.continue_on_fail => {
                tracing::warn!(index, error = %err, "item failed, continuing");
                output.push(OutputItem::failure(index, err.to_string()));
            }
            Err(err) => {
                tracing::error!(index, error = %err, "item failed, aborting run");
                return Err(err);
            }
        }
    }
    Ok(output)
}

/// Runs a single item and returns its raw response.
///
/// # Errors
///
/// Returns any configuration, schema, or transport error for the item.
pub async fn run_item(api: &dyn ClickUpApi, item: Value) -> Result<Value> {
    let params = NodeParameters::from_value(item)?;
    tracing::Span::current().record("operation", params.operation.name());
    tracing::debug!(resource = ?params.resource, "running item");
    match &params.operation {
        Operation::Lookup { list, lookups } => match lookups {
            Some(entries) => lookup(api, list, entries).await,
            None => Ok(Value::Null),
        },
        Operation::CustomTaskType { team } => {
            Ok(Value::Array(api.custom_task_types(team).await?))
        }
        Operation::UpdateTaskWithType { task_id, task_type } => {
            api.update_task(task_id, &json!({ "custom_item_id": task_type })).await
        }
        Operation::SetCustomFields {
            task_id,
            list,
            selector,
            custom_fields,
            json_parameters,
            custom_fields_json,
        } => {
            let mutations = if *json_parameters {
                parse_mutations_json(custom_fields_json.as_deref().unwrap_or_default())?
            } else {
                build_mutations(custom_fields, selector.as_deref())?
            };
            set_custom_fields(api, task_id, list.as_deref(), &mutations).await
        }
    }
}

/// Resolves every lookup entry against one fresh fetch of the list schema.
///
/// # Errors
///
/// Fails on transport errors, malformed references, and fields missing from
/// the schema. Lookups that find nothing are records, not errors.
pub async fn lookup(api: &dyn ClickUpApi, list_id: &str, entries: &[LookupEntry]) -> Result<Value> {
    let fields = api.list_fields(list_id).await?;
    tracing::debug!(list_id, fields = fields.len(), "fetched field schema");

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let request = entry.to_request()?;
        let field = find_by_id(&fields, &request.reference.field_id, list_id)?;
        let outcome = resolve(field, &request);
        tracing::debug!(
            field = %field.tag(),
            lookup_value = %request.lookup_value,
            outcome = outcome.label(),
            "resolved lookup"
        );
        records.push(LookupRecord::new(&request, field, &outcome));
    }
    serde_json::to_value(records).map_err(|e| Error::InvalidJson(e.to_string()))
}

/// Writes each mutation with `POST /task/{task_id}/field/{field_id}`.
///
/// When `list_id` is given, every field id is first checked against that
/// list's current schema.
///
/// # Errors
///
/// Fails on the first unknown field or rejected write.
pub async fn set_custom_fields(
    api: &dyn ClickUpApi,
    task_id: &str,
    list_id: Option<&str>,
    mutations: &[CustomFieldMutation],
) -> Result<Value> {
    if let Some(list_id) = list_id {
        let fields = api.list_fields(list_id).await?;
        for mutation in mutations {
            find_by_id(&fields, &mutation.id, list_id)?;
        }
    }
    for mutation in mutations {
        tracing::debug!(task_id, field_id = %mutation.id, value = %mutation.value, "setting custom field");
        api.set_field_value(task_id, &mutation.id, &mutation.value).await?;
    }
    Ok(json!({ "taskId": task_id, "customFields": mutations }))
}
