use super::VideoSearchProvider;
use crate::config::ProviderConfig;
use chrono::{DateTime, Months, SecondsFormat, Utc};
use highlights_common::{Error, Result};
use reqwest::Client;
use serde_json::Value;

/// YouTube Data API v3 `search` client.
pub struct YouTubeProvider {
    client: Client,
    base_url: String,
    api_key: String,
    max_results: u32,
    lookback_months: u32,
    language: String,
    video_duration: String,
    order: String,
}

impl YouTubeProvider {
    pub fn new(config: &ProviderConfig, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_results: config.max_results,
            lookback_months: config.lookback_months,
            language: config.language.clone(),
            video_duration: config.video_duration.clone(),
            order: config.order.clone(),
        }
    }

    fn url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    /// Query string for one search.
    pub fn query_params(&self, phrase: &str, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        vec![
            ("part", "snippet".to_string()),
            ("maxResults", self.max_results.to_string()),
            ("q", phrase.to_string()),
            ("type", "video".to_string()),
            ("videoEmbeddable", "true".to_string()),
            ("key", self.api_key.clone()),
            ("order", self.order.clone()),
            ("relevanceLanguage", self.language.clone()),
            ("videoDuration", self.video_duration.clone()),
            ("publishedAfter", published_after(now, self.lookback_months)),
        ]
    }
}

/// Cutoff timestamp `months` before `now`, e.g. `2024-03-15T12:00:00.000Z`.
///
/// Day-of-month overflow clamps to the end of the target month.
pub fn published_after(now: DateTime<Utc>, months: u32) -> String {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(now)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait::async_trait]
impl VideoSearchProvider for YouTubeProvider {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn search(&self, phrase: &str) -> Result<Value> {
        let params = self.query_params(phrase, Utc::now());

        tracing::debug!(phrase, "Querying YouTube search");

        let response = self
            .client
            .get(self.url())
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Http(format!("YouTube request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "YouTube search returned an error");
            return Err(Error::upstream(status.as_u16(), text));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Http(format!("YouTube response was not JSON: {e}")))
    }
}
