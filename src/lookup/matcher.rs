//! Resolves a lookup value against a field's live option set.

use crate::field::{scalar_text, FieldDescriptor, FieldReference, OptionAttribute};

use super::outcome::{MatchOutcome, OutputKey};

/// Lookup value that selects every option.
pub const WILDCARD: &str = "*";

/// A single configured lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRequest {
    /// Which field to look in. Its kind decides whether lookup applies.
    pub reference: FieldReference,
    /// Value to find. Empty or [`WILDCARD`] returns every option.
    pub lookup_value: String,
    /// Option attribute compared with the lookup value.
    pub match_key: OptionAttribute,
    /// What to return for a matched option.
    pub output_key: OutputKey,
}

impl MatchRequest {
    /// Whether the request asks for every option.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.lookup_value.is_empty() || self.lookup_value == WILDCARD
    }
}

/// Runs `request` against the options of `field`.
///
/// The first option, in schema order, whose match-key attribute renders to
/// the same string as the lookup value wins. An option lacking the
/// match-key attribute never matches. A projected attribute the option
/// lacks is replaced by the option id.
#[must_use]
pub fn resolve(field: &FieldDescriptor, request: &MatchRequest) -> MatchOutcome {
    if request.reference.kind.choice().is_none() {
        return MatchOutcome::Unsupported(request.reference.kind.clone());
    }

    if request.is_wildcard() {
        return match request.output_key {
            OutputKey::Object => MatchOutcome::AllObjects(field.options.clone()),
            OutputKey::Attribute(attribute) => {
                MatchOutcome::All(field.options.iter().map(|o| o.project(attribute)).collect())
            }
        };
    }

    let found = field.options.iter().find(|option| {
        option
            .attribute(request.match_key)
            .and_then(|value| scalar_text(&value))
            .is_some_and(|text| text == request.lookup_value)
    });

    match (found, request.output_key) {
        (None, _) => MatchOutcome::NoMatch,
        (Some(option), OutputKey::Object) => MatchOutcome::Object(option.clone()),
        (Some(option), OutputKey::Attribute(attribute)) => {
            MatchOutcome::Single(option.project(attribute))
        }
    }
}
