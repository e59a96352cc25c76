//! ClickUp API port.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::error::Result;
use crate::field::FieldDescriptor;

/// Boxed future type alias used by [`ClickUpApi`] to keep the trait dyn-compatible.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// The ClickUp calls the engine and its host operations need.
///
/// Arguments are copied into the returned future, so only `self` is
/// borrowed for its lifetime.
pub trait ClickUpApi: Send + Sync {
    /// `GET /list/{list_id}/field`: every custom field of a list, in response order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a field list.
    fn list_fields(&self, list_id: &str) -> ApiFuture<'_, Vec<FieldDescriptor>>;

    /// `GET /team`: the workspaces visible to the credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (bad token, network).
    fn teams(&self) -> ApiFuture<'_, Vec<Value>>;

    /// `GET /team/{team_id}/custom_item`: the team's custom task types.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn custom_task_types(&self, team_id: &str) -> ApiFuture<'_, Vec<Value>>;

    /// `PUT /task/{task_id}` with `body`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn update_task(&self, task_id: &str, body: &Value) -> ApiFuture<'_, Value>;

    /// `POST /task/{task_id}/field/{field_id}` with `{"value": value}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn set_field_value(&self, task_id: &str, field_id: &str, value: &Value)
        -> ApiFuture<'_, Value>;
}
