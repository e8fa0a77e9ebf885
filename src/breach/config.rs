//! Breach check configuration.

use std::time::Duration;

/// Environment variable overriding the range endpoint.
pub const BREACH_ENDPOINT_ENV: &str = "PWD_BREACH_ENDPOINT";

/// Environment variable overriding the request timeout, in milliseconds.
pub const BREACH_TIMEOUT_ENV: &str = "PWD_BREACH_TIMEOUT_MS";

/// Environment variable enabling response padding (`1` or `true`).
pub const BREACH_PADDING_ENV: &str = "PWD_BREACH_PADDING";

pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    /// Range endpoint; the prefix is appended as the last path segment.
    pub endpoint: String,
    /// Upper bound on a single range query.
    pub timeout: Duration,
    /// Ask the service to pad responses with zero-count decoys.
    pub padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            padding: false,
        }
    }
}

impl BreachConfig {
    /// Reads `PWD_BREACH_ENDPOINT`, `PWD_BREACH_TIMEOUT_MS` and
    /// `PWD_BREACH_PADDING`, falling back to defaults for anything unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let endpoint = std::env::var(BREACH_ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.endpoint);

        let timeout = std::env::var(BREACH_TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);

        let padding = std::env::var(BREACH_PADDING_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(defaults.padding);

        Self { endpoint, timeout, padding }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }
}
