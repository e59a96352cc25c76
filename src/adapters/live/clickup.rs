//! Live adapter for the `ClickUpApi` port using the ClickUp v2 REST API.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::field::{FieldDescriptor, FieldList};
use crate::ports::clickup::{ApiFuture, ClickUpApi};

/// Live ClickUp client.
pub struct LiveClickUpClient {
    client: Client,
    base_url: String,
    authorization: String,
}

impl LiveClickUpClient {
    /// Creates a client from settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no access token is configured or the
    /// HTTP client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self> {
        let authorization = settings.authorization()?;
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url: settings.base_url.clone(), authorization })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "ClickUp request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response =
            request.send().await.map_err(|e| Error::Transport(format!("{url}: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response from {url}: {e}")))?;

        if !status.is_success() {
            let message =
                serde_json::from_str::<ClickUpError>(&text).map(|e| e.message()).unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %url, %message, "ClickUp request rejected");
            return Err(Error::Api { status: status.as_u16(), message });
        }

        // Some mutation endpoints answer with an empty body.
        let text = if text.trim().is_empty() { "{}".to_string() } else { text };
        serde_json::from_str(&text).map_err(|e| {
            Error::Transport(format!("failed to parse ClickUp response from {url}: {e}"))
        })
    }
}

/// Error body ClickUp returns with non-success statuses.
#[derive(Deserialize)]
struct ClickUpError {
    err: String,
    #[serde(rename = "ECODE")]
    ecode: Option<String>,
}

impl ClickUpError {
    fn message(self) -> String {
        match self.ecode {
            Some(code) => format!("{} [{code}]", self.err),
            None => self.err,
        }
    }
}

#[derive(Deserialize)]
struct Teams {
    teams: Vec<Value>,
}

#[derive(Deserialize)]
struct CustomItems {
    custom_items: Vec<Value>,
}

impl ClickUpApi for LiveClickUpClient {
    fn list_fields(&self, list_id: &str) -> ApiFuture<'_, Vec<FieldDescriptor>> {
        let path = format!("/list/{list_id}/field");
        Box::pin(async move {
            let list: FieldList = self.request(Method::GET, path, None).await?;
            Ok(list.fields)
        })
    }

    fn teams(&self) -> ApiFuture<'_, Vec<Value>> {
        Box::pin(async move {
            let teams: Teams = self.request(Method::GET, "/team".to_string(), None).await?;
            Ok(teams.teams)
        })
    }

    fn custom_task_types(&self, team_id: &str) -> ApiFuture<'_, Vec<Value>> {
        let path = format!("/team/{team_id}/custom_item");
        Box::pin(async move {
            let items: CustomItems = self.request(Method::GET, path, None).await?;
            Ok(items.custom_items)
        })
    }

    fn update_task(&self, task_id: &str, body: &Value) -> ApiFuture<'_, Value> {
        let path = format!("/task/{task_id}");
        let body = body.clone();
        Box::pin(async move { self.request(Method::PUT, path, Some(body)).await })
    }

    fn set_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        value: &Value,
    ) -> ApiFuture<'_, Value> {
        let path = format!("/task/{task_id}/field/{field_id}");
        let body = json!({ "value": value });
        Box::pin(async move { self.request(Method::POST, path, Some(body)).await })
    }
}
