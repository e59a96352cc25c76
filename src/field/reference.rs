//! `fieldId|fieldType` reference tokens.
//!
//! A reference is how a configured lookup or mapping names a custom field:
//! the field id plus the type tag seen when the reference was created, joined
//! with `|`. Ids and tags containing `|` cannot be represented; decoding
//! splits on the first separator only.

use std::fmt;

use super::kind::FieldKind;
use crate::error::{Error, Result};

const SEPARATOR: char = '|';

/// A decoded field reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReference {
    /// The custom field id.
    pub field_id: String,
    /// The field type recorded in the token.
    pub kind: FieldKind,
}

impl FieldReference {
    /// Creates a reference from its parts.
    pub fn new(field_id: impl Into<String>, kind: FieldKind) -> Self {
        Self { field_id: field_id.into(), kind }
    }

    /// Serializes the reference into its token form.
    #[must_use]
    pub fn encode(&self) -> String {
        encode(&self.field_id, &self.kind)
    }
}

impl fmt::Display for FieldReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.field_id, self.kind)
    }
}

/// Joins a field id and type tag into a reference token.
#[must_use]
pub fn encode(field_id: &str, kind: &FieldKind) -> String {
    format!("{field_id}{SEPARATOR}{kind}")
}

/// Splits a reference token into field id and type.
///
/// # Errors
///
/// Returns [`Error::MalformedReference`] when the token has no separator or
/// either side of it is empty.
pub fn decode(token: &str) -> Result<FieldReference> {
    match token.split_once(SEPARATOR) {
        Some((id, tag)) if !id.is_empty() && !tag.is_empty() => {
            Ok(FieldReference::new(id, FieldKind::parse(tag)))
        }
        _ => Err(Error::MalformedReference(token.to_string())),
    }
}
