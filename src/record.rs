//! Per-item output records handed back to the pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::FieldDescriptor;
use crate::lookup::{MatchOutcome, MatchRequest};

/// One lookup result, tagged with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRecord {
    /// The configured lookup value.
    pub lookup_value: String,
    /// Option attribute compared against.
    pub match_to: String,
    /// `"<field name> - <field id>"`.
    pub match_against: String,
    /// Output key used.
    pub output_type: String,
    /// `match`, `all`, `no_match` or `unsupported`.
    pub outcome: String,
    /// The looked-up value(s), or a sentinel text.
    pub result: Value,
}

impl LookupRecord {
    /// Wraps an outcome with its request and field.
    #[must_use]
    pub fn new(request: &MatchRequest, field: &FieldDescriptor, outcome: &MatchOutcome) -> Self {
        Self {
            lookup_value: request.lookup_value.clone(),
            match_to: request.match_key.as_str().to_string(),
            match_against: field.tag(),
            output_type: request.output_key.as_str().to_string(),
            outcome: outcome.label().to_string(),
            result: outcome.to_value(),
        }
    }
}

/// Index of the input item an output item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    /// Zero-based input item index.
    pub item: usize,
}

/// One record emitted to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputItem {
    /// Record payload.
    pub json: Value,
    /// Source input item.
    pub paired_item: PairedItem,
    /// Failure message for items that failed under continue-on-failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutputItem {
    /// An error record for a failed item.
    #[must_use]
    pub fn failure(item: usize, message: impl Into<String>) -> Self {
        Self {
            json: Value::Object(Map::new()),
            paired_item: PairedItem { item },
            error: Some(message.into()),
        }
    }
}

/// Turns an operation response into output items for input `item`.
///
/// Arrays fan out to one output item per element. An empty array or `null`
/// becomes a single empty object, so every input item yields at least one
/// output item. Non-object elements are
/// wrapped as `{ "value": ... }`.
#[must_use]
pub fn assemble(item: usize, response: Value) -> Vec<OutputItem> {
    let paired_item = PairedItem { item };
    let to_item = |json: Value| OutputItem { json: as_object(json), paired_item, error: None };
    match response {
        Value::Array(values) if !values.is_empty() => values.into_iter().map(to_item).collect(),
        Value::Array(_) | Value::Null => vec![to_item(Value::Object(Map::new()))],
        other => vec![to_item(other)],
    }
}

fn as_object(value: Value) -> Value {
    if value.is_object() {
        value
    } else {
        let mut map = Map::new();
        map.insert("value".to_string(), value);
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, FieldReference, OptionAttribute};
    use crate::lookup::OutputKey;
    use serde_json::json;

    fn field() -> FieldDescriptor {
        FieldDescriptor {
            id: "f1".into(),
            name: "Colour".into(),
            kind: FieldKind::DropDown,
            options: vec![],
        }
    }

    fn request() -> MatchRequest {
        MatchRequest {
            reference: FieldReference::new("f1", FieldKind::DropDown),
            lookup_value: "Green".into(),
            match_key: OptionAttribute::Name,
            output_key: OutputKey::Attribute(OptionAttribute::Id),
        }
    }

    #[test]
    fn record_carries_provenance_for_no_match() {
        let record = LookupRecord::new(&request(), &field(), &MatchOutcome::NoMatch);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "lookupValue": "Green",
                "matchTo": "name",
                "matchAgainst": "Colour - f1",
                "outputType": "id",
                "outcome": "no_match",
                "result": "no match found"
            })
        );
    }

    #[test]
    fn arrays_fan_out_per_element() {
        let items = assemble(3, json!([{"a": 1}, {"a": 2}]));
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.paired_item.item == 3));
        assert_eq!(items[1].json, json!({"a": 2}));
    }

    #[test]
    fn empty_array_and_null_emit_one_empty_object() {
        let items = assemble(4, json!([]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].json, json!({}));
        assert_eq!(items[0].paired_item.item, 4);
        assert_eq!(assemble(0, Value::Null)[0].json, json!({}));
    }

    #[test]
    fn scalars_are_wrapped() {
        assert_eq!(assemble(0, json!("ok"))[0].json, json!({"value": "ok"}));
    }

    #[test]
    fn failure_item_serializes_error() {
        let value = serde_json::to_value(OutputItem::failure(2, "boom")).unwrap();
        assert_eq!(value, json!({"json": {}, "pairedItem": {"item": 2}, "error": "boom"}));
    }
}
