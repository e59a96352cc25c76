//! Options of choice-type custom fields.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An option attribute usable as a match key or output key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionAttribute {
    /// The option id (present on every option).
    Id,
    /// Display name of a `drop_down` option.
    Name,
    /// Display text of a `labels` option.
    Label,
    /// Hex color, may be absent.
    Color,
    /// Position within a `drop_down` field.
    #[serde(alias = "orderIndex", alias = "order_index")]
    OrderIndex,
}

impl OptionAttribute {
    /// Parses an attribute name, returning `None` for anything unknown.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "label" => Some(Self::Label),
            "color" => Some(Self::Color),
            "orderindex" | "orderIndex" | "order_index" => Some(Self::OrderIndex),
            _ => None,
        }
    }

    /// The wire name of the attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Label => "label",
            Self::Color => "color",
            Self::OrderIndex => "orderindex",
        }
    }
}

/// One selectable choice of a `drop_down` or `labels` field.
///
/// Attributes the crate does not model are kept in `extra` so an option can
/// be handed back exactly as ClickUp returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Option id.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name (`drop_down`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display text (`labels`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Hex color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Position (`drop_down` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<Value>,
    /// Any other attributes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldOption {
    /// Returns the value of `attribute`, or `None` when the option lacks it.
    ///
    /// `name` and `label` are the same concept on the two choice kinds, so
    /// each falls back to the other.
    #[must_use]
    pub fn attribute(&self, attribute: OptionAttribute) -> Option<Value> {
        let text = |s: &String| Value::String(s.clone());
        match attribute {
            OptionAttribute::Id => Some(Value::String(self.id.clone())),
            OptionAttribute::Name => self.name.as_ref().or(self.label.as_ref()).map(text),
            OptionAttribute::Label => self.label.as_ref().or(self.name.as_ref()).map(text),
            OptionAttribute::Color => self.color.as_ref().map(text),
            OptionAttribute::OrderIndex => {
                self.orderindex.as_ref().filter(|v| !v.is_null()).cloned()
            }
        }
    }

    /// Projects the option through `attribute`, falling back to its id.
    #[must_use]
    pub fn project(&self, attribute: OptionAttribute) -> Value {
        self.attribute(attribute).unwrap_or_else(|| Value::String(self.id.clone()))
    }

    /// Display text, whichever of name or label is present.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.label.as_deref().or(self.name.as_deref()).unwrap_or(&self.id)
    }
}

/// Renders a JSON scalar as the string used for comparisons.
///
/// Strings compare verbatim, numbers by their JSON text, booleans as
/// `true`/`false`. Arrays, objects and `null` have no comparable form.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserializes any JSON scalar into its comparison text.
///
/// Used for selectors, which hosts fill from expressions that may produce
/// numbers or booleans as well as strings.
///
/// # Errors
///
/// Fails on arrays, objects and `null`.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_text(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a string, number or boolean, got {value}")))
}

/// Like [`scalar_string`], but `null` becomes `None`.
///
/// # Errors
///
/// Fails on arrays and objects.
pub fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => scalar_text(&value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a string, number or boolean, got {value}"))
        }),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::String(_) | Value::Number(_) => {
            scalar_text(&value).ok_or_else(|| serde::de::Error::custom("expected string id"))
        }
        other => Err(serde::de::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
