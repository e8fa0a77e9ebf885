//! Breach exposure check over a k-anonymity range query.
//!
//! The password is hashed with SHA-1 and only the first 5 hex characters of
//! the digest are handed to the [`RangeSource`]. The remaining 35 characters
//! are compared locally against every candidate the source returns.

mod config;
mod error;
mod hash;
#[cfg(feature = "http")]
mod http;
mod range;
mod source;

pub use config::{
    BreachConfig, BREACH_ENDPOINT_ENV, BREACH_PADDING_ENV, BREACH_TIMEOUT_ENV, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT,
};
pub use error::BreachError;
pub use hash::{split_hash, HashPrefix, HashSuffix, PREFIX_LEN, SUFFIX_LEN};
#[cfg(feature = "http")]
pub use http::HttpRangeSource;
pub use range::{BreachCandidateEntry, RangeResponse};
pub use source::{RangeSource, StaticRangeSource};

use std::time::Duration;

use secrecy::SecretString;
use tokio_util::sync::CancellationToken;

/// Occurrence count (`Ok(0)` = not found) or the reason the check was
/// inconclusive.
pub type BreachResult = Result<u64, BreachError>;

/// Checks passwords against a range source. Never retries.
#[derive(Debug, Clone)]
pub struct BreachChecker<S> {
    source: S,
    timeout: Duration,
}

#[cfg(feature = "http")]
impl BreachChecker<HttpRangeSource> {
    /// HTTP checker configured from `config`.
    pub fn from_config(config: &BreachConfig) -> Result<Self, BreachError> {
        Ok(Self::new(HttpRangeSource::new(config)?).with_timeout(config.timeout))
    }

    /// HTTP checker configured from the environment, see [`BreachConfig::from_env`].
    pub fn from_env() -> Result<Self, BreachError> {
        Self::from_config(&BreachConfig::from_env())
    }
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns how many times the password appears in the breach corpus.
    ///
    /// # Errors
    ///
    /// Any source failure, or the query outliving the configured timeout,
    /// yields an error. A response without a matching suffix is `Ok(0)`.
    pub async fn check_breach(&self, password: &SecretString) -> BreachResult {
        let (prefix, suffix) = split_hash(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("Querying breach range for prefix {}", prefix);

        let body = match tokio::time::timeout(self.timeout, self.source.fetch_range(&prefix)).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach check failed: {}", e);
                return Err(e);
            }
            Err(_elapsed) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach check timed out after {:?}", self.timeout);
                return Err(BreachError::Timeout {
                    prefix: prefix.to_string(),
                    after: self.timeout,
                });
            }
        };

        Ok(RangeResponse::parse(&body).count_for(&suffix))
    }

    /// Same as [`check_breach`](Self::check_breach), abandoned with
    /// [`BreachError::Cancelled`] once `token` is cancelled.
    pub async fn check_breach_with_cancel(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> BreachResult {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(BreachError::Cancelled),
            result = self.check_breach(password) => result,
        }
    }
}
