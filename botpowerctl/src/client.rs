//! HTTP client for the PDU's query-string API

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};

use crate::config::PduConfig;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Outcome of a single PDU request.
///
/// A non-success HTTP status is returned as data rather than as an error so
/// the caller can render the diagnostic block; only transport failures
/// (connect, timeout) surface as errors.
#[derive(Debug)]
pub struct PduResponse {
    /// Full request URL, for diagnostics
    pub url: String,
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers, for diagnostics
    pub headers: HeaderMap,
    /// Raw response body text
    pub body: String,
}

impl PduResponse {
    /// Whether the device answered with a success status
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP client bound to one PDU.
///
/// Issues exactly one GET with basic authentication per call; there is no
/// retry logic and no state beyond the connection settings.
#[derive(Debug, Clone)]
pub struct PduClient {
    client: Client,
    config: PduConfig,
}

impl PduClient {
    /// Create a client with the default timeout
    pub fn new(config: PduConfig) -> Result<Self> {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(config: PduConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("botpower/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Full request URL for a query string.
    ///
    /// The query is spliced into the URL verbatim instead of going through a
    /// query-parameter encoder: the device requires its literal `+`
    /// separators, and percent-encoding them breaks its parser.
    pub fn url_for(&self, query: &str) -> String {
        format!(
            "http://{}{}{}",
            self.config.hostname, self.config.api_url, query
        )
    }

    /// Issue one GET with basic authentication for the given query string
    pub async fn send(&self, query: &str) -> Result<PduResponse> {
        let url = self.url_for(query);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body from {}", url))?;

        Ok(PduResponse {
            url,
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PduConfig {
        PduConfig {
            hostname: "192.168.1.50".to_string(),
            api_url: "/set.cmd?".to_string(),
            username: "admin".to_string(),
            password: "12345678".to_string(),
        }
    }

    #[test]
    fn test_url_is_composed_verbatim() {
        let client = PduClient::new(test_config()).unwrap();
        assert_eq!(
            client.url_for("cmd=setpower+p61=1"),
            "http://192.168.1.50/set.cmd?cmd=setpower+p61=1"
        );
        assert_eq!(
            client.url_for("cmd=getpower"),
            "http://192.168.1.50/set.cmd?cmd=getpower"
        );
    }
}
