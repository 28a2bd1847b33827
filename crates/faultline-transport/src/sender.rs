//! HTTP sender for encoded payloads
//!
//! Wraps `reqwest::Client` with the collector endpoint, access-token
//! header, and a request timeout. The payload bytes are sent verbatim;
//! truncation has already happened by the time a payload reaches here.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use faultline_core::{Sender, TelemetryConfig};

/// Default request timeout for collector calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the project access token.
const ACCESS_TOKEN_HEADER: &str = "X-Faultline-Access-Token";

/// Delivers payloads to the collector over HTTPS.
pub struct HttpSender {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpSender {
    /// Create a sender for the configured collector.
    pub fn new(config: &TelemetryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// The collector endpoint this sender posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Sender for HttpSender {
    async fn send(&self, payload: &[u8]) -> Result<()> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(payload.to_vec());

        if let Some(token) = &self.access_token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("failed to reach collector at {}", self.endpoint))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, bytes = payload.len(), "payload delivered");
            Ok(())
        } else {
            warn!(status = %status, bytes = payload.len(), "collector rejected payload");
            bail!("collector returned {status}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_uses_configured_endpoint() {
        let config = TelemetryConfig {
            endpoint: "https://collector.example.com/api/1/item/".to_string(),
            ..Default::default()
        };
        let sender = HttpSender::new(&config).unwrap();
        assert_eq!(sender.endpoint(), "https://collector.example.com/api/1/item/");
    }

    #[tokio::test]
    async fn test_send_fails_against_unreachable_collector() {
        let config = TelemetryConfig {
            // Nothing listens on this loopback port; connection is refused.
            endpoint: "http://127.0.0.1:1/api/1/item/".to_string(),
            ..Default::default()
        };
        let sender = HttpSender::new(&config).unwrap();
        assert!(sender.send(b"{}").await.is_err());
    }
}
