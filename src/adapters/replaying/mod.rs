//! Replaying adapters that replay recorded interactions.

pub mod clickup;

pub use clickup::ReplayingClickUpApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Decode a recorded `{"ok": v}` / `{"err": e}` output.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(output: Value) -> Result<T> {
    let Value::Object(mut map) = output else {
        return Err(Error::Cassette(format!("expected ok/err object, got {output}")));
    };
    if let Some(ok) = map.remove("ok") {
        return serde_json::from_value(ok)
            .map_err(|e| Error::Cassette(format!("failed to decode recorded value: {e}")));
    }
    if let Some(err) = map.remove("err") {
        let recorded: Error = serde_json::from_value(err)
            .map_err(|e| Error::Cassette(format!("failed to decode recorded error: {e}")))?;
        return Err(recorded);
    }
    Err(Error::Cassette("recorded output has neither ok nor err".to_string()))
}
