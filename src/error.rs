//! Error taxonomy for field resolution, mapping, and transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that fail a single pipeline item (or the whole run, when not
/// continuing on failure).
///
/// A lookup that finds no option is not an error; it is reported as
/// [`crate::lookup::MatchOutcome::NoMatch`]. Errors serialize so recorded
/// API failures replay as the same variant.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Error {
    /// A field reference token could not be split into id and type.
    #[error("malformed field reference '{0}', expected <field id>|<field type>")]
    MalformedReference(String),

    /// The referenced field is not part of the list's live schema.
    #[error("custom field '{field_id}' not found on list '{list_id}'")]
    FieldNotFound {
        /// Field id decoded from the reference.
        field_id: String,
        /// List whose schema was searched.
        list_id: String,
    },

    /// A caller-supplied raw JSON value did not parse.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A date field value could not be converted to epoch milliseconds.
    #[error("invalid date value '{0}', expected epoch millis, RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),

    /// The item parameters do not describe a runnable operation.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The request never produced a usable HTTP response.
    #[error("ClickUp request failed: {0}")]
    Transport(String),

    /// ClickUp answered with a non-success status.
    #[error("ClickUp API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error text reported by ClickUp, or the raw body.
        message: String,
    },

    /// Missing or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A cassette file could not be read, parsed, or written.
    #[error("cassette error: {0}")]
    Cassette(String),
}
