//! Cassette data structures for recording and replaying interactions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "clickup").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// API root the interactions were recorded against.
    pub base_url: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Cassette(format!("failed to read cassette file {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::Cassette(format!("failed to parse cassette file {}: {e}", path.display()))
        })
    }

    /// Writes the cassette as YAML, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the cassette cannot be serialized or
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::Cassette(format!("failed to serialize cassette: {e}")))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Cassette(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        std::fs::write(path, yaml).map_err(|e| {
            Error::Cassette(format!("failed to write cassette file {}: {e}", path.display()))
        })
    }
}
