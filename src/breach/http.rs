//! HTTPS range source backed by reqwest.

use std::future::Future;

use super::config::BreachConfig;
use super::error::BreachError;
use super::hash::HashPrefix;
use super::source::RangeSource;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Queries `{endpoint}/{prefix}` over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    endpoint: String,
    padding: bool,
}

impl HttpRangeSource {
    pub fn new(config: &BreachConfig) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(BreachError::Client)?;
        Ok(Self::with_client(client, config))
    }

    /// Uses an existing client, e.g. one shared with the rest of an application.
    pub fn with_client(client: reqwest::Client, config: &BreachConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            padding: config.padding,
        }
    }

    /// Request URL for `prefix`. Nothing but the prefix is appended.
    pub fn range_url(&self, prefix: &HashPrefix) -> String {
        format!("{}/{}", self.endpoint, prefix)
    }

    async fn get(&self, prefix: &HashPrefix) -> Result<String, BreachError> {
        let transport = |e: reqwest::Error| BreachError::Transport {
            prefix: prefix.to_string(),
            source: Box::new(e),
        };

        let mut request = self.client.get(self.range_url(prefix));
        if self.padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(BreachError::Status {
                prefix: prefix.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}

impl RangeSource for HttpRangeSource {
    fn fetch_range(&self, prefix: &HashPrefix) -> impl Future<Output = Result<String, BreachError>> + Send {
        self.get(prefix)
    }
}
