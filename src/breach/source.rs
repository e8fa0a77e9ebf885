//! Range query transport seam.

use std::collections::HashMap;
use std::future::Future;

use super::error::BreachError;
use super::hash::HashPrefix;

/// Answers a k-anonymity range query.
///
/// Implementations receive only the 5-character prefix and return the raw
/// response body (`SUFFIX:COUNT` lines). A non-success answer must be
/// reported as an error, never as an empty body.
pub trait RangeSource {
    fn fetch_range(&self, prefix: &HashPrefix) -> impl Future<Output = Result<String, BreachError>> + Send;
}

impl<S: RangeSource> RangeSource for &S {
    fn fetch_range(&self, prefix: &HashPrefix) -> impl Future<Output = Result<String, BreachError>> + Send {
        (**self).fetch_range(prefix)
    }
}

/// Fixed in-memory range table.
///
/// Prefixes missing from the table answer with an empty body.
#[derive(Debug, Clone, Default)]
pub struct StaticRangeSource {
    ranges: HashMap<HashPrefix, String>,
}

impl StaticRangeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the body served for `prefix`.
    pub fn with_range(mut self, prefix: HashPrefix, body: impl Into<String>) -> Self {
        self.ranges.insert(prefix, body.into());
        self
    }
}

impl RangeSource for StaticRangeSource {
    fn fetch_range(&self, prefix: &HashPrefix) -> impl Future<Output = Result<String, BreachError>> + Send {
        let body = self.ranges.get(prefix).cloned().unwrap_or_default();
        std::future::ready(Ok(body))
    }
}
