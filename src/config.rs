//! Runtime settings read from the environment (and `.env`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default ClickUp API root.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How the access token is presented to ClickUp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// Personal API token, sent as-is.
    #[default]
    AccessToken,
    /// OAuth2 access token, sent as a bearer token.
    OAuth2,
}

impl AuthMethod {
    /// Parses `accessToken` or `oAuth2` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for any other value.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "accesstoken" | "access_token" | "token" => Ok(Self::AccessToken),
            "oauth2" | "oauth" => Ok(Self::OAuth2),
            other => Err(Error::Config(format!(
                "unknown CLICKUP_AUTH '{other}', expected accessToken or oAuth2"
            ))),
        }
    }

    /// The `Authorization` header value for `token`.
    #[must_use]
    pub fn authorization(self, token: &str) -> String {
        match self {
            Self::AccessToken => token.to_string(),
            Self::OAuth2 => format!("Bearer {token}"),
        }
    }
}

/// Settings for talking to ClickUp and for recording or replaying sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `CLICKUP_ACCESS_TOKEN`.
    pub access_token: Option<String>,
    /// `CLICKUP_AUTH`.
    pub auth: AuthMethod,
    /// `CLICKUP_BASE_URL`, without trailing slash.
    pub base_url: String,
    /// `CLICKUP_TIMEOUT_SECS`.
    pub timeout: Duration,
    /// `CLICKUP_LOOKUP_RECORD`: cassette file to record API calls into.
    pub record_path: Option<PathBuf>,
    /// `CLICKUP_LOOKUP_REPLAY`: cassette file to serve API calls from.
    pub replay_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            access_token: None,
            auth: AuthMethod::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            record_path: None,
            replay_path: None,
        }
    }
}

impl Settings {
    /// Loads settings from the process environment after reading `.env`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is present but invalid.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads settings through `lookup`, which maps variable names to values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let auth = non_empty("CLICKUP_AUTH").map(|v| AuthMethod::parse(&v)).transpose()?;
        let timeout = non_empty("CLICKUP_TIMEOUT_SECS")
            .map(|v| {
                v.trim().parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    Error::Config(format!("CLICKUP_TIMEOUT_SECS '{v}' is not a number: {e}"))
                })
            })
            .transpose()?;

        let defaults = Self::default();
        Ok(Self {
            access_token: non_empty("CLICKUP_ACCESS_TOKEN"),
            auth: auth.unwrap_or(defaults.auth),
            base_url: non_empty("CLICKUP_BASE_URL")
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_string()),
            timeout: timeout.unwrap_or(defaults.timeout),
            record_path: non_empty("CLICKUP_LOOKUP_RECORD").map(PathBuf::from),
            replay_path: non_empty("CLICKUP_LOOKUP_REPLAY").map(PathBuf::from),
        })
    }

    /// The `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no access token is configured.
    pub fn authorization(&self) -> Result<String> {
        self.access_token
            .as_deref()
            .map(|token| self.auth.authorization(token))
            .ok_or_else(|| Error::Config("CLICKUP_ACCESS_TOKEN is not set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = settings(&[]).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.base_url, "https://api.clickup.com/api/v2");
    }

    #[test]
    fn reads_all_variables() {
        let s = settings(&[
            ("CLICKUP_ACCESS_TOKEN", "pk_123"),
            ("CLICKUP_AUTH", "oAuth2"),
            ("CLICKUP_BASE_URL", "http://localhost:9000/api/v2/"),
            ("CLICKUP_TIMEOUT_SECS", "5"),
            ("CLICKUP_LOOKUP_REPLAY", "/tmp/session.cassette.yaml"),
        ])
        .unwrap();
        assert_eq!(s.auth, AuthMethod::OAuth2);
        assert_eq!(s.base_url, "http://localhost:9000/api/v2");
        assert_eq!(s.timeout, Duration::from_secs(5));
        assert_eq!(s.replay_path, Some(PathBuf::from("/tmp/session.cassette.yaml")));
        assert_eq!(s.authorization().unwrap(), "Bearer pk_123");
    }

    #[test]
    fn personal_token_is_sent_verbatim() {
        let s = settings(&[("CLICKUP_ACCESS_TOKEN", "pk_123")]).unwrap();
        assert_eq!(s.authorization().unwrap(), "pk_123");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let s = settings(&[("CLICKUP_ACCESS_TOKEN", "  ")]).unwrap();
        assert!(matches!(s.authorization(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(settings(&[("CLICKUP_AUTH", "basic")]).is_err());
        assert!(settings(&[("CLICKUP_TIMEOUT_SECS", "soon")]).is_err());
    }
}
