//! Per-item parameters supplied by the host pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::field::{reference, scalar_text, OptionAttribute};
use crate::lookup::{MatchRequest, OutputKey};
use crate::mapping::FieldMapping;

/// Resource selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    /// Lookups and writes on tasks and their fields.
    #[default]
    Task,
    /// Custom task type changes.
    CustomTaskType,
}

/// Operation selector with its operation-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Operation {
    /// Resolve lookup values against a list's custom field options.
    Lookup {
        /// List whose field schema is fetched.
        list: String,
        /// Configured lookups. Absent means "nothing configured".
        #[serde(default, alias = "customFieldsValues")]
        lookups: Option<Vec<LookupEntry>>,
    },
    /// List the custom task types of a team.
    CustomTaskType {
        /// Team (workspace) id.
        team: String,
    },
    /// Change a task's custom task type.
    UpdateTaskWithType {
        /// Task to update.
        task_id: String,
        /// Custom task type id.
        task_type: Value,
    },
    /// Map configured rules to custom field values and write them to a task.
    SetCustomFields {
        /// Task to write to.
        task_id: String,
        /// When set, every mapped field id is checked against this list's schema.
        #[serde(default)]
        list: Option<String>,
        /// Item-level selector consulted by choice-field rules.
        #[serde(default, deserialize_with = "crate::field::optional_scalar_string")]
        selector: Option<String>,
        /// Configured field mappings.
        #[serde(default)]
        custom_fields: Vec<FieldMapping>,
        /// Take the mutation array verbatim from `custom_fields_json`.
        #[serde(default)]
        json_parameters: bool,
        /// Raw JSON mutation array.
        #[serde(default)]
        custom_fields_json: Option<String>,
    },
}

impl Operation {
    /// The operation's wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lookup { .. } => "lookup",
            Self::CustomTaskType { .. } => "customTaskType",
            Self::UpdateTaskWithType { .. } => "updateTaskWithType",
            Self::SetCustomFields { .. } => "setCustomFields",
        }
    }
}

/// Everything one pipeline item asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeParameters {
    /// Resource selector.
    #[serde(default)]
    pub resource: Resource,
    /// Operation and its parameters.
    #[serde(flatten)]
    pub operation: Operation,
}

impl NodeParameters {
    /// Parses one item's parameters and checks the resource/operation pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] when the value does not describe
    /// a known operation or the operation does not belong to the resource.
    pub fn from_value(value: Value) -> Result<Self> {
        let params: Self =
            serde_json::from_value(value).map_err(|e| Error::InvalidParameters(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that the operation belongs to the resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] on a mismatch.
    pub fn validate(&self) -> Result<()> {
        let allowed = match self.operation {
            Operation::Lookup { .. }
            | Operation::CustomTaskType { .. }
            | Operation::SetCustomFields { .. } => self.resource == Resource::Task,
            Operation::UpdateTaskWithType { .. } => self.resource == Resource::CustomTaskType,
        };
        if allowed {
            Ok(())
        } else {
            Err(Error::InvalidParameters(format!(
                "operation '{}' is not available for resource '{:?}'",
                self.operation.name(),
                self.resource
            )))
        }
    }
}

/// One configured lookup, as the host supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupEntry {
    /// `fieldId|fieldType` reference token.
    pub field_key: String,
    /// Value to look up; a string or number. Missing means every option.
    #[serde(default)]
    pub value: Option<Value>,
    /// Option attribute to match against; defaults to `id`.
    #[serde(default)]
    pub match_to: Option<String>,
    /// Option attribute to output, or `object`; defaults to `id`.
    #[serde(default)]
    pub output: Option<String>,
}

impl LookupEntry {
    /// Decodes the entry into a match request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedReference`] for a bad token and
    /// [`Error::InvalidParameters`] for an unknown match attribute or a
    /// non-scalar lookup value.
    pub fn to_request(&self) -> Result<MatchRequest> {
        let reference = reference::decode(&self.field_key)?;
        let match_key = match self.match_to.as_deref() {
            None | Some("") => OptionAttribute::Id,
            Some(name) => OptionAttribute::parse(name).ok_or_else(|| {
                Error::InvalidParameters(format!("unknown match attribute '{name}'"))
            })?,
        };
        let lookup_value = match &self.value {
            None | Some(Value::Null) => String::new(),
            Some(value) => scalar_text(value).ok_or_else(|| {
                Error::InvalidParameters(format!("lookup value must be a string or number, got {value}"))
            })?,
        };
        Ok(MatchRequest {
            reference,
            lookup_value,
            match_key,
            output_key: OutputKey::parse(self.output.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use serde_json::json;

    #[test]
    fn parses_lookup_item() {
        let params = NodeParameters::from_value(json!({
            "resource": "task",
            "operation": "lookup",
            "list": "900",
            "lookups": [{"fieldKey": "f1|drop_down", "value": "Blue", "matchTo": "name", "output": "id"}]
        }))
        .unwrap();
        let Operation::Lookup { list, lookups } = params.operation else {
            panic!("expected lookup");
        };
        assert_eq!(list, "900");
        assert_eq!(lookups.unwrap()[0].match_to.as_deref(), Some("name"));
    }

    #[test]
    fn resource_defaults_to_task() {
        let params = NodeParameters::from_value(json!({"operation": "customTaskType", "team": "1"})).unwrap();
        assert_eq!(params.resource, Resource::Task);
    }

    #[test]
    fn parses_set_custom_fields_item() {
        let params = NodeParameters::from_value(json!({
            "operation": "setCustomFields",
            "taskId": "t1",
            "selector": "A",
            "customFields": [{"fieldKey": "f2|labels", "rules": [{"selector": "A", "value": "x"}]}]
        }))
        .unwrap();
        assert_eq!(params.operation.name(), "setCustomFields");
    }

    #[test]
    fn numeric_selectors_become_text() {
        let params = NodeParameters::from_value(json!({
            "operation": "setCustomFields",
            "taskId": "t1",
            "selector": 1,
            "customFields": [{"fieldKey": "f2|labels", "selector": 2, "rules": [{"selector": 1, "value": "x"}]}]
        }))
        .unwrap();
        let Operation::SetCustomFields { selector, custom_fields, .. } = params.operation else {
            panic!("expected setCustomFields");
        };
        assert_eq!(selector.as_deref(), Some("1"));
        assert_eq!(custom_fields[0].selector.as_deref(), Some("2"));
        assert_eq!(custom_fields[0].rules[0].selector, "1");
    }

        #[test]
    fn rejects_operation_on_wrong_resource() {
        let err = NodeParameters::from_value(json!({
            "resource": "task",
            "operation": "updateTaskWithType",
            "taskId": "t1",
            "taskType": 1
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn rejects_unknown_operation() {
        let err = NodeParameters::from_value(json!({"operation": "delete"})).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn entry_defaults_to_wildcard_by_id() {
        let entry = LookupEntry { field_key: "f1|labels".into(), value: None, match_to: None, output: None };
        let request = entry.to_request().unwrap();
        assert!(request.is_wildcard());
        assert_eq!(request.match_key, OptionAttribute::Id);
        assert_eq!(request.output_key, OutputKey::Attribute(OptionAttribute::Id));
        assert_eq!(request.reference.kind, FieldKind::Labels);
    }

    #[test]
    fn numeric_lookup_value_becomes_text() {
        let entry = LookupEntry {
            field_key: "f1|drop_down".into(),
            value: Some(json!(2)),
            match_to: Some("orderindex".into()),
            output: Some("object".into()),
        };
        let request = entry.to_request().unwrap();
        assert_eq!(request.lookup_value, "2");
        assert_eq!(request.output_key, OutputKey::Object);
    }

    #[test]
    fn unknown_match_attribute_is_rejected() {
        let entry = LookupEntry {
            field_key: "f1|drop_down".into(),
            value: Some(json!("x")),
            match_to: Some("colour".into()),
            output: None,
        };
        assert!(matches!(entry.to_request(), Err(Error::InvalidParameters(_))));
    }
}
