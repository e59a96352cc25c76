//! Builds custom field values to write back to ClickUp.
//!
//! This is the reverse of [`crate::lookup`]: configured rules and raw values
//! become `{ id, value }` mutation entries shaped for the field's kind.

pub mod date;
pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::field::{reference, ChoiceKind, FieldKind, FieldReference};

pub use date::to_epoch_millis;
pub use rules::{map_choice, LookupRule, RuleValue};

/// One configured field write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// `fieldId|fieldType` reference token.
    pub field_key: String,
    /// Selector for this field; falls back to the item's selector.
    #[serde(
        default,
        deserialize_with = "crate::field::optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub selector: Option<String>,
    /// Rules consulted for choice fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<LookupRule>,
    /// Raw value for non-choice fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// How a mapped value was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingMode {
    /// First matching rule of a single-select field.
    SingleSelect,
    /// All matching rules of a multi-select field.
    MultiSelect,
    /// Date converted to epoch milliseconds.
    EpochMillis,
    /// Field kind without mapping support; raw value written as given.
    PassThrough,
}

/// A value ready to be written to one custom field.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedValue {
    /// Field the value belongs to.
    pub reference: FieldReference,
    /// How the value was produced.
    pub mode: MappingMode,
    /// The value in ClickUp's shape.
    pub value: Value,
}

/// A `{ id, value }` entry of a custom field mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldMutation {
    /// Custom field id.
    pub id: String,
    /// Value to write.
    pub value: Value,
}

impl From<MappedValue> for CustomFieldMutation {
    fn from(mapped: MappedValue) -> Self {
        Self { id: mapped.reference.field_id, value: mapped.value }
    }
}

/// Maps one configured field to the value ClickUp expects.
///
/// # Errors
///
/// Returns [`Error::MalformedReference`] for a bad token and
/// [`Error::InvalidDate`] when a date value cannot be converted.
pub fn map_field(mapping: &FieldMapping, item_selector: Option<&str>) -> Result<MappedValue> {
    let reference = reference::decode(&mapping.field_key)?;
    let raw = mapping.value.clone().unwrap_or(Value::Null);

    let (mode, value) = if let Some(choice) = reference.kind.choice() {
        let selector = mapping.selector.as_deref().or(item_selector).unwrap_or_default();
        let mode = match choice {
            ChoiceKind::SingleSelect => MappingMode::SingleSelect,
            ChoiceKind::MultiSelect => MappingMode::MultiSelect,
        };
        (mode, map_choice(choice, &mapping.rules, selector))
    } else if reference.kind == FieldKind::Date && !raw.is_null() {
        (MappingMode::EpochMillis, Value::from(to_epoch_millis(&raw)?))
    } else {
        tracing::debug!(field = %reference, "no mapping for field kind, writing raw value");
        (MappingMode::PassThrough, raw)
    };

    Ok(MappedValue { reference, mode, value })
}

/// Maps every configured field, in configuration order.
///
/// # Errors
///
/// Fails on the first field [`map_field`] rejects.
pub fn build_mutations(
    mappings: &[FieldMapping],
    item_selector: Option<&str>,
) -> Result<Vec<CustomFieldMutation>> {
    mappings
        .iter()
        .map(|mapping| map_field(mapping, item_selector).map(CustomFieldMutation::from))
        .collect()
}

/// Parses a raw JSON mutation array, as supplied with `jsonParameters`.
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] when the text is not a JSON array of
/// `{ id, value }` objects.
pub fn parse_mutations_json(text: &str) -> Result<Vec<CustomFieldMutation>> {
    serde_json::from_str(text).map_err(|e| Error::InvalidJson(e.to_string()))
}
