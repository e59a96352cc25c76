//! Selectable values a host UI offers for lookup and mapping parameters.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{find_by_id, reference, scalar_text, FieldDescriptor};

/// One `{name, value}` entry of a selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOption {
    /// Text shown to the user.
    pub name: String,
    /// Value stored in the parameter.
    pub value: String,
}

/// The choice fields of a list, offered as reference tokens.
///
/// Names read `"<type> - <field name>"`. The result is sorted by name,
/// ignoring case.
#[must_use]
pub fn choice_field_references(fields: &[FieldDescriptor]) -> Vec<PropertyOption> {
    let mut options: Vec<PropertyOption> = fields
        .iter()
        .filter(|field| field.kind.choice().is_some())
        .map(|field| PropertyOption {
            name: format!("{} - {}", field.kind, field.name),
            value: reference::encode(&field.id, &field.kind),
        })
        .collect();
    options.sort_by_key(|option| option.name.to_lowercase());
    options
}

/// The options of the field a reference token points at.
///
/// Each entry shows the option's label (or name) and stores its order index,
/// or its id when the option has no order index.
///
/// # Errors
///
/// Returns [`crate::error::Error::MalformedReference`] for a bad token and
/// [`crate::error::Error::FieldNotFound`] when the list has no such field.
pub fn field_select_values(
    fields: &[FieldDescriptor],
    token: &str,
    list_id: &str,
) -> Result<Vec<PropertyOption>> {
    let reference = reference::decode(token)?;
    let field = find_by_id(fields, &reference.field_id, list_id)?;
    Ok(field
        .options
        .iter()
        .map(|option| PropertyOption {
            name: option.display_text().to_string(),
            value: option
                .orderindex
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or_else(|| option.id.clone()),
        })
        .collect())
}
