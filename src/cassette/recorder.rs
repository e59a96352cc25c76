//! Collects ClickUp interactions during a live run.

use std::path::PathBuf;

use chrono::Utc;
use serde_json::Value;

use super::format::{Cassette, Interaction};
use crate::error::Result;

/// Accumulates interactions in call order until [`Self::finish`] saves them.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    base_url: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// A recorder that saves to `path`, labelling the cassette with `name`
    /// and the API root the calls go to.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            base_url: base_url.into(),
            interactions: Vec::new(),
        }
    }

    /// Appends one call and returns its sequence number.
    pub fn record(&mut self, port: &str, method: &str, input: Value, output: Value) -> u64 {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
        seq
    }

    /// The cassette as it would be saved now.
    #[must_use]
    pub fn snapshot(&self) -> Cassette {
        Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            base_url: self.base_url.clone(),
            interactions: self.interactions.clone(),
        }
    }

    /// Saves the cassette and returns where it went.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Cassette`] if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf> {
        self.snapshot().save(&self.path)?;
        tracing::debug!(path = %self.path.display(), interactions = self.interactions.len(), "cassette saved");
        Ok(self.path)
    }
}
