//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveClickUpClient;
use crate::adapters::recording::clickup::RecordingClickUpApi;
use crate::adapters::replaying::ReplayingClickUpApi;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::ports::clickup::ClickUpApi;

/// Bundles the ClickUp port with an optional cassette recorder.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// ClickUp API access.
    pub api: Box<dyn ClickUpApi>,
    /// Recorder shared with the recording adapter; written by [`Self::finish`].
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Wraps an arbitrary adapter, such as a test fake.
    #[must_use]
    pub fn with_api(api: Box<dyn ClickUpApi>) -> Self {
        Self { api, recorder: None }
    }

    /// Creates a live context talking to ClickUp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when credentials are missing.
    pub fn live(settings: &Settings) -> Result<Self> {
        Ok(Self::with_api(Box::new(LiveClickUpClient::new(settings)?)))
    }

    /// Creates a live context that records every interaction to `path`.
    ///
    /// The cassette is written by [`Self::finish`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when credentials are missing.
    pub fn recording(settings: &Settings, path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .map_or_else(|| "clickup-lookup-session".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, name, &settings.base_url)));
        let live = LiveClickUpClient::new(settings)?;
        Ok(Self {
            api: Box::new(RecordingClickUpApi::new(Box::new(live), Arc::clone(&recorder))),
            recorder: Some(recorder),
        })
    }

    /// Creates a context that serves ClickUp responses from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self> {
        Ok(Self::with_api(Box::new(ReplayingClickUpApi::from_file(path)?)))
    }

    /// Picks replaying, recording, or live mode from settings, in that order.
    ///
    /// # Errors
    ///
    /// Propagates the selected constructor's error.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        if let Some(path) = &settings.replay_path {
            tracing::info!(path = %path.display(), "replaying ClickUp interactions");
            Self::replaying(path)
        } else if let Some(path) = &settings.record_path {
            tracing::info!(path = %path.display(), "recording ClickUp interactions");
            Self::recording(settings, path)
        } else {
            Self::live(settings)
        }
    }

    /// Releases the adapters and writes the cassette when recording.
    ///
    /// Returns the cassette path if one was written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>> {
        let Self { api, recorder } = self;
        // The recording adapter holds the other reference.
        drop(api);
        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| Error::Cassette("recording adapter still has references".to_string()))?
            .into_inner()
            .map_err(|e| Error::Cassette(format!("recorder lock poisoned: {e}")))?;
        recorder.finish().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            base_url: "http://localhost".into(),
            interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[tokio::test]
    async fn replaying_context_serves_cassette() {
        let dir = std::env::temp_dir().join("clickup_lookup_ctx_test_replay");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("teams.cassette.yaml");
        write_cassette(
            &path,
            vec![Interaction {
                seq: 0,
                port: "clickup".into(),
                method: "teams".into(),
                input: json!(null),
                output: json!({"ok": [{"id": "9", "name": "Acme"}]}),
            }],
        );

        let settings = Settings { replay_path: Some(path.clone()), ..Settings::default() };
        let ctx = ServiceContext::from_settings(&settings).unwrap();
        let teams = ctx.api.teams().await.unwrap();
        assert_eq!(teams, vec![json!({"id": "9", "name": "Acme"})]);
        assert_eq!(ctx.finish().unwrap(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn live_context_needs_token() {
        assert!(matches!(ServiceContext::from_settings(&Settings::default()), Err(Error::Config(_))));
    }

    #[test]
    fn recording_context_writes_cassette_on_finish() {
        let dir = std::env::temp_dir().join("clickup_lookup_ctx_test_record");
        let path = dir.join("session.cassette.yaml");
        let settings = Settings {
            access_token: Some("pk_test".into()),
            record_path: Some(path.clone()),
            ..Settings::default()
        };

        let ctx = ServiceContext::from_settings(&settings).unwrap();
        let written = ctx.finish().unwrap();
        assert_eq!(written, Some(path.clone()));

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "session.cassette");
        assert!(cassette.interactions.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
