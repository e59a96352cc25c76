//! Replaying adapter for the `ClickUpApi` port.

use std::path::Path;
use std::sync::Mutex;

use serde_json::Value;

use super::replay_result;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::{Error, Result};
use crate::field::FieldDescriptor;
use crate::ports::clickup::{ApiFuture, ClickUpApi};

const PORT: &str = "clickup";

/// Serves recorded ClickUp responses from a cassette.
///
/// Interactions are served in recorded order per method; request arguments
/// are not compared.
pub struct ReplayingClickUpApi {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClickUpApi {
    /// Creates a replaying client from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    /// Loads a cassette file and replays it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let cassette = Cassette::load(path)?;
        Ok(Self::new(CassetteReplayer::new(&cassette)))
    }

    fn next_output(&self, method: &str) -> Result<Value> {
        let mut replayer =
            self.replayer.lock().map_err(|e| Error::Cassette(format!("replayer lock poisoned: {e}")))?;
        Ok(replayer.next_interaction(PORT, method)?.output.clone())
    }
}

impl ClickUpApi for ReplayingClickUpApi {
    fn list_fields(&self, _list_id: &str) -> ApiFuture<'_, Vec<FieldDescriptor>> {
        let output = self.next_output("list_fields");
        Box::pin(async move { replay_result(output?) })
    }

    fn teams(&self) -> ApiFuture<'_, Vec<Value>> {
        let output = self.next_output("teams");
        Box::pin(async move { replay_result(output?) })
    }

    fn custom_task_types(&self, _team_id: &str) -> ApiFuture<'_, Vec<Value>> {
        let output = self.next_output("custom_task_types");
        Box::pin(async move { replay_result(output?) })
    }

    fn update_task(&self, _task_id: &str, _body: &Value) -> ApiFuture<'_, Value> {
        let output = self.next_output("update_task");
        Box::pin(async move { replay_result(output?) })
    }

    fn set_field_value(
        &self,
        _task_id: &str,
        _field_id: &str,
        _value: &Value,
    ) -> ApiFuture<'_, Value> {
        let output = self.next_output("set_field_value");
        Box::pin(async move { replay_result(output?) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Interaction;
    use crate::field::FieldKind;
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            base_url: "http://localhost".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    fn interaction(seq: u64, method: &str, output: Value) -> Interaction {
        Interaction { seq, port: PORT.into(), method: method.into(), input: json!({}), output }
    }

    #[tokio::test]
    async fn serves_recorded_fields() {
        let api = ReplayingClickUpApi::new(make_replayer(vec![interaction(
            0,
            "list_fields",
            json!({"ok": [{"id": "f1", "name": "Tags", "type": "labels",
                           "type_config": {"options": [{"id": "a", "label": "urgent"}]}}]}),
        )]));
        let fields = api.list_fields("900").await.unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].kind, FieldKind::Labels);
        assert_eq!(fields[0].options[0].label.as_deref(), Some("urgent"));
    }

    #[tokio::test]
    async fn serves_recorded_errors() {
        let api = ReplayingClickUpApi::new(make_replayer(vec![interaction(
            0,
            "teams",
            json!({"err": {"kind": "api", "detail": {"status": 401, "message": "Token invalid"}}}),
        )]));
        let err = api.teams().await.unwrap_err();
        assert_eq!(err, Error::Api { status: 401, message: "Token invalid".into() });
    }

    #[tokio::test]
    async fn missing_interaction_is_a_cassette_error() {
        let api = ReplayingClickUpApi::new(make_replayer(vec![]));
        let err = api.update_task("t1", &json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Cassette(_)));
    }
}
