//! Client configuration

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the analysis service; `/analyze` is appended
    pub base_url: String,

    /// Upper bound on one request. `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            user_agent: "PgnTactics/1.0".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load overrides from `ANALYZER_BASE_URL` and `ANALYZER_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from a key lookup. A timeout that is unparsable or zero is
    /// ignored and the client waits indefinitely.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: get("ANALYZER_BASE_URL").unwrap_or(defaults.base_url),
            request_timeout: get("ANALYZER_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .map(Duration::from_secs),
            user_agent: defaults.user_agent,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
