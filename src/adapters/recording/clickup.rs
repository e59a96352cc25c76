//! Recording adapter for the `ClickUpApi` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::field::FieldDescriptor;
use crate::ports::clickup::{ApiFuture, ClickUpApi};

const PORT: &str = "clickup";

/// Records ClickUp interactions while delegating to an inner implementation.
pub struct RecordingClickUpApi {
    inner: Box<dyn ClickUpApi>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClickUpApi {
    /// Creates a new recording client wrapping the given implementation.
    pub fn new(inner: Box<dyn ClickUpApi>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct ListInput {
    list_id: String,
}

#[derive(Serialize)]
struct TeamInput {
    team_id: String,
}

#[derive(Serialize)]
struct UpdateTaskInput {
    task_id: String,
    body: Value,
}

#[derive(Serialize)]
struct SetFieldInput {
    task_id: String,
    field_id: String,
    value: Value,
}

impl ClickUpApi for RecordingClickUpApi {
    fn list_fields(&self, list_id: &str) -> ApiFuture<'_, Vec<FieldDescriptor>> {
        let input = ListInput { list_id: list_id.to_string() };
        Box::pin(async move {
            let result = self.inner.list_fields(&input.list_id).await;
            record_result(&self.recorder, PORT, "list_fields", &input, &result);
            result
        })
    }

    fn teams(&self) -> ApiFuture<'_, Vec<Value>> {
        Box::pin(async move {
            let result = self.inner.teams().await;
            record_result(&self.recorder, PORT, "teams", &(), &result);
            result
        })
    }

    fn custom_task_types(&self, team_id: &str) -> ApiFuture<'_, Vec<Value>> {
        let input = TeamInput { team_id: team_id.to_string() };
        Box::pin(async move {
            let result = self.inner.custom_task_types(&input.team_id).await;
            record_result(&self.recorder, PORT, "custom_task_types", &input, &result);
            result
        })
    }

    fn update_task(&self, task_id: &str, body: &Value) -> ApiFuture<'_, Value> {
        let input = UpdateTaskInput { task_id: task_id.to_string(), body: body.clone() };
        Box::pin(async move {
            let result = self.inner.update_task(&input.task_id, &input.body).await;
            record_result(&self.recorder, PORT, "update_task", &input, &result);
            result
        })
    }

    fn set_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        value: &Value,
    ) -> ApiFuture<'_, Value> {
        let input = SetFieldInput {
            task_id: task_id.to_string(),
            field_id: field_id.to_string(),
            value: value.clone(),
        };
        Box::pin(async move {
            let result =
                self.inner.set_field_value(&input.task_id, &input.field_id, &input.value).await;
            record_result(&self.recorder, PORT, "set_field_value", &input, &result);
            result
        })
    }
}
