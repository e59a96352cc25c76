//! Recording adapters that capture interactions to cassettes.

pub mod clickup;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, Error>` interaction using the ok/err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e}` (the tagged error)
///
/// Values that fail to serialize are recorded as `null` with a warning
/// rather than aborting the call being recorded.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &crate::error::Result<T>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = to_json(input, port, method);
    let output_json = match result {
        Ok(v) => serde_json::json!({ "ok": to_json(v, port, method) }),
        Err(e) => serde_json::json!({ "err": to_json(e, port, method) }),
    };

    match recorder.lock() {
        Ok(mut guard) => {
            guard.record(port, method, input_json, output_json);
        }
        Err(e) => tracing::warn!(port, method, "recorder lock poisoned, dropping interaction: {e}"),
    }
}

fn to_json<V: Serialize>(value: &V, port: &str, method: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!(port, method, "failed to serialize recorded value: {e}");
        serde_json::Value::Null
    })
}
