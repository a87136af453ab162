//! The search pipeline behind `GET /api/search` and the local CLI search.

use crate::provider::VideoSearchProvider;
use highlights_common::{Error, Result, SearchParams, VideoItem};
use highlights_curation::{build_query, transform_response, HighlightFilter};
use std::sync::Arc;

/// Runs validate → build query → provider → schema check → transform → filter.
#[derive(Clone)]
pub struct HighlightsService {
    provider: Arc<dyn VideoSearchProvider>,
    filter: Option<HighlightFilter>,
}

impl HighlightsService {
    pub fn new(provider: Arc<dyn VideoSearchProvider>, filter: Option<HighlightFilter>) -> Self {
        Self { provider, filter }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Search for highlights.
    ///
    /// A blank query is rejected before the provider is contacted.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<VideoItem>> {
        let params = SearchParams::new(&params.league, &params.query);
        if !params.has_query() {
            return Err(Error::validation("Query parameter is required"));
        }

        let phrase = build_query(&params.league, &params.query);
        let payload = self.provider.search(&phrase).await?;
        let videos = transform_response(&payload)?;
        let received = videos.len();

        let videos = match &self.filter {
            Some(filter) => filter.apply(videos),
            None => videos,
        };

        tracing::info!(
            provider = self.provider.name(),
            phrase = %phrase,
            received,
            returned = videos.len(),
            "Highlights search complete"
        );

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct RecordingProvider {
        phrases: Mutex<Vec<String>>,
        response: Value,
    }

    #[async_trait::async_trait]
    impl VideoSearchProvider for RecordingProvider {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn search(&self, phrase: &str) -> Result<Value> {
            self.phrases.lock().unwrap().push(phrase.to_string());
            Ok(self.response.clone())
        }
    }

    fn item(id: &str, title: &str) -> Value {
        json!({
            "id": { "videoId": id },
            "snippet": {
                "title": title,
                "thumbnails": { "high": { "url": "http://x/y.jpg" } },
                "publishedAt": "2024-01-01T00:00:00Z",
                "channelTitle": "ESPN"
            }
        })
    }

    fn service(response: Value, filter: Option<HighlightFilter>) -> (HighlightsService, Arc<RecordingProvider>) {
        let provider = Arc::new(RecordingProvider {
            phrases: Mutex::new(Vec::new()),
            response,
        });
        (HighlightsService::new(provider.clone(), filter), provider)
    }

    #[tokio::test]
    async fn blank_query_never_reaches_provider() {
        let (service, provider) = service(json!({ "items": [] }), None);

        let err = service.search(&SearchParams::new("NHL", "   ")).await.unwrap_err();
        assert_matches!(err, Error::Validation(ref msg) if msg == "Query parameter is required");
        assert!(provider.phrases.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sends_league_tuned_phrase() {
        let (service, provider) = service(json!({ "items": [] }), None);

        service.search(&SearchParams::new(" NHL ", " Bruins ")).await.unwrap();
        assert_eq!(
            *provider.phrases.lock().unwrap(),
            vec!["NHL Bruins hockey highlights goals".to_string()]
        );
    }

    #[tokio::test]
    async fn applies_filter_when_enough_match() {
        let response = json!({
            "items": [
                item("1", "Top 10 goals"),
                item("2", "Press conference"),
                item("3", "Game recap"),
                item("4", "Overtime winner vs Leafs"),
            ]
        });
        let (service, _) = service(response, Some(HighlightFilter::default()));

        let ids: Vec<String> = service
            .search(&SearchParams::new("", "Bruins"))
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[tokio::test]
    async fn disabled_filter_returns_everything() {
        let response = json!({
            "items": [item("1", "goal"), item("2", "interview"), item("3", "game"), item("4", "save")]
        });
        let (service, _) = service(response, None);

        let videos = service.search(&SearchParams::new("", "Bruins")).await.unwrap();
        assert_eq!(videos.len(), 4);
    }

    #[tokio::test]
    async fn schema_mismatch_is_a_schema_error() {
        let (service, _) = service(json!({ "items": [{ "id": {} }] }), None);

        let err = service.search(&SearchParams::new("", "Bruins")).await.unwrap_err();
        assert_matches!(err, Error::Schema { .. });
        assert_eq!(err.http_status(), 500);
    }
}
