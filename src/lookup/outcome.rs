//! Lookup outcomes and output key selection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{FieldKind, FieldOption, OptionAttribute};

/// Result text reported when no option matches.
pub const NO_MATCH: &str = "no match found";

/// What a lookup hands back for a matched option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputKey {
    /// One attribute of the option.
    Attribute(OptionAttribute),
    /// The whole option.
    Object,
}

impl OutputKey {
    /// Parses an output key name. Unknown names and `None` select `id`.
    #[must_use]
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("object") => Self::Object,
            Some(other) => {
                Self::Attribute(OptionAttribute::parse(other).unwrap_or(OptionAttribute::Id))
            }
            None => Self::Attribute(OptionAttribute::Id),
        }
    }

    /// Wire name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attribute(attribute) => attribute.as_str(),
            Self::Object => "object",
        }
    }
}

impl Default for OutputKey {
    fn default() -> Self {
        Self::Attribute(OptionAttribute::Id)
    }
}

impl From<String> for OutputKey {
    fn from(name: String) -> Self {
        Self::parse(Some(&name))
    }
}

impl From<OutputKey> for String {
    fn from(key: OutputKey) -> Self {
        key.as_str().to_string()
    }
}

/// Outcome of resolving a lookup value against a field's options.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// No option carried the lookup value.
    NoMatch,
    /// The matched option projected through the output key.
    Single(Value),
    /// The matched option itself.
    Object(FieldOption),
    /// Every option projected through the output key (wildcard lookup).
    All(Vec<Value>),
    /// Every option, unprojected (wildcard lookup with `object` output).
    AllObjects(Vec<FieldOption>),
    /// The field kind has no option set to look up against.
    Unsupported(FieldKind),
}

impl MatchOutcome {
    /// Short machine-readable name of the outcome.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoMatch => "no_match",
            Self::Single(_) | Self::Object(_) => "match",
            Self::All(_) | Self::AllObjects(_) => "all",
            Self::Unsupported(_) => "unsupported",
        }
    }

    /// The outcome as the `result` value of a lookup record.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::NoMatch => Value::String(NO_MATCH.to_string()),
            Self::Single(value) => value.clone(),
            Self::Object(option) => serde_json::to_value(option).unwrap_or(Value::Null),
            Self::All(values) => Value::Array(values.clone()),
            Self::AllObjects(options) => serde_json::to_value(options).unwrap_or(Value::Null),
            Self::Unsupported(kind) => Value::String(format!("unsupported field type: {kind}")),
        }
    }
}
