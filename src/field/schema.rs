//! Custom field descriptors as returned by `GET /list/{list_id}/field`.

use serde::{Deserialize, Serialize};

use super::kind::FieldKind;
use super::option::FieldOption;
use crate::error::{Error, Result};

/// One custom field on a list, snapshotted from the live schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireField", into = "WireField")]
pub struct FieldDescriptor {
    /// Field id.
    pub id: String,
    /// Field name shown in ClickUp.
    pub name: String,
    /// Field type tag.
    pub kind: FieldKind,
    /// Options in the order ClickUp returned them (choice kinds only).
    pub options: Vec<FieldOption>,
}

impl FieldDescriptor {
    /// `"<name> - <id>"`, used to tag lookup results.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{} - {}", self.name, self.id)
    }
}

/// Body of the list field endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldList {
    /// Fields in response order.
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Serialize, Deserialize)]
struct WireField {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_config: Option<WireTypeConfig>,
}

#[derive(Serialize, Deserialize)]
struct WireTypeConfig {
    #[serde(default)]
    options: Vec<FieldOption>,
}

impl From<WireField> for FieldDescriptor {
    fn from(wire: WireField) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            kind: wire.kind,
            options: wire.type_config.map(|config| config.options).unwrap_or_default(),
        }
    }
}

impl From<FieldDescriptor> for WireField {
    fn from(field: FieldDescriptor) -> Self {
        let type_config =
            (!field.options.is_empty()).then_some(WireTypeConfig { options: field.options });
        Self { id: field.id, name: field.name, kind: field.kind, type_config }
    }
}

/// Finds a field by id.
///
/// Ids are compared as trimmed strings; ClickUp field ids are UUIDs, but
/// configured ids often arrive through expressions with stray whitespace.
///
/// # Errors
///
/// Returns [`Error::FieldNotFound`] when no field has the id.
pub fn find_by_id<'a>(
    fields: &'a [FieldDescriptor],
    field_id: &str,
    list_id: &str,
) -> Result<&'a FieldDescriptor> {
    let wanted = field_id.trim();
    fields.iter().find(|field| field.id.trim() == wanted).ok_or_else(|| Error::FieldNotFound {
        field_id: field_id.to_string(),
        list_id: list_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_list() -> FieldList {
        serde_json::from_value(json!({
            "fields": [
                {
                    "id": "f1",
                    "name": "Colour",
                    "type": "drop_down",
                    "type_config": {
                        "default": 0,
                        "placeholder": null,
                        "options": [
                            {"id": "1", "name": "Red", "color": "#f00", "orderindex": 0},
                            {"id": "2", "name": "Blue", "color": "#00f", "orderindex": 1}
                        ]
                    },
                    "date_created": "1700000000000",
                    "required": false
                },
                {
                    "id": "f2",
                    "name": "Notes",
                    "type": "text",
                    "type_config": {}
                },
                {
                    "id": "f3",
                    "name": "Due",
                    "type": "date"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn parses_wire_shape() {
        let list = sample_list();
        assert_eq!(list.fields.len(), 3);
        let colour = &list.fields[0];
        assert_eq!(colour.kind, FieldKind::DropDown);
        assert_eq!(colour.options.len(), 2);
        assert_eq!(colour.options[1].name.as_deref(), Some("Blue"));
        assert!(list.fields[1].options.is_empty());
        assert!(list.fields[2].options.is_empty());
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let list = sample_list();
        let value = serde_json::to_value(&list.fields[0]).unwrap();
        assert_eq!(value["type"], json!("drop_down"));
        assert_eq!(value["type_config"]["options"][0]["name"], json!("Red"));
        let text = serde_json::to_value(&list.fields[1]).unwrap();
        assert!(text.get("type_config").is_none());
    }

    #[test]
    fn finds_field_by_trimmed_id() {
        let list = sample_list();
        let field = find_by_id(&list.fields, " f2 ", "900").unwrap();
        assert_eq!(field.name, "Notes");
    }

    #[test]
    fn missing_field_is_an_error() {
        let list = sample_list();
        let err = find_by_id(&list.fields, "nope", "900").unwrap_err();
        assert_eq!(err, Error::FieldNotFound { field_id: "nope".into(), list_id: "900".into() });
    }

    #[test]
    fn tag_joins_name_and_id() {
        let list = sample_list();
        assert_eq!(list.fields[0].tag(), "Colour - f1");
    }
}
