//! Date field values, which ClickUp stores as epoch milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::error::{Error, Result};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Converts a date value to epoch milliseconds.
///
/// Integers are taken as milliseconds already. Strings may be integer
/// millis, RFC 3339 timestamps, naive `YYYY-MM-DD[T ]HH:MM:SS` timestamps
/// (read as UTC) or plain `YYYY-MM-DD` dates (UTC midnight).
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] for anything else.
pub fn to_epoch_millis(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| Error::InvalidDate(n.to_string())),
        Value::String(s) => parse_text(s.trim()).ok_or_else(|| Error::InvalidDate(s.clone())),
        other => Err(Error::InvalidDate(other.to_string())),
    }
}

fn parse_text(text: &str) -> Option<i64> {
    if let Ok(millis) = text.parse::<i64>() {
        return Some(millis);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.timestamp_millis());
    }
    if let Some(ts) =
        NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(ts.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_millis_pass_through() {
        assert_eq!(to_epoch_millis(&json!(1_700_000_000_000_i64)).unwrap(), 1_700_000_000_000);
        assert_eq!(to_epoch_millis(&json!("1700000000000")).unwrap(), 1_700_000_000_000);
    }

    #[test]
    fn rfc3339_with_offset() {
        assert_eq!(to_epoch_millis(&json!("2024-01-01T01:00:00+01:00")).unwrap(), 1_704_067_200_000);
    }

    #[test]
    fn plain_date_is_utc_midnight() {
        assert_eq!(to_epoch_millis(&json!("2024-01-01")).unwrap(), 1_704_067_200_000);
    }

    #[test]
    fn naive_timestamp_is_utc() {
        assert_eq!(to_epoch_millis(&json!("2024-01-01T00:00:01")).unwrap(), 1_704_067_201_000);
        assert_eq!(to_epoch_millis(&json!("2024-01-01 00:00:01")).unwrap(), 1_704_067_201_000);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(to_epoch_millis(&json!("next tuesday")), Err(Error::InvalidDate("next tuesday".into())));
        assert!(to_epoch_millis(&json!(true)).is_err());
        assert!(to_epoch_millis(&json!(1.5)).is_err());
    }
}
