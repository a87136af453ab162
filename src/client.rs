//! HTTP client for a running highlights server.

use highlights_common::{Error, Result, SearchParams, VideoItem};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct HighlightsClient {
    client: Client,
    base_url: String,
}

impl HighlightsClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/search`. Non-2xx responses become errors carrying the
    /// server's `message`.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<VideoItem>> {
        let response = self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("league", &params.league), ("query", &params.query)])
            .send()
            .await
            .map_err(|e| Error::Http(format!("Failed to reach {}: {e}", self.base_url)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| Error::Http(format!("Malformed search response: {e}")));
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(match status.as_u16() {
            400 => Error::validation(message),
            code => Error::Http(format!("Server responded {code}: {message}")),
        })
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Http(format!("Failed to reach {}: {e}", self.base_url)))?;

        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "Health check failed with status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Malformed health response: {e}")))
    }
}
