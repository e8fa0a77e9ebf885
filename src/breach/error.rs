use std::time::Duration;

/// Reasons a breach check is indeterminate.
///
/// Messages carry at most the 5-character hash prefix, which the range
/// endpoint sees anyway.
#[derive(Debug, thiserror::Error)]
pub enum BreachError {
    #[error("HTTP {status} for prefix {prefix}")]
    Status { prefix: String, status: u16 },

    #[error("Range request failed for prefix {prefix}: {source}")]
    Transport {
        prefix: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Range request for prefix {prefix} timed out after {after:?}")]
    Timeout { prefix: String, after: Duration },

    #[error("Breach check cancelled")]
    Cancelled,

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl BreachError {
    /// Whether the failure came from the remote side rather than the caller.
    pub fn is_service_unavailable(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}
