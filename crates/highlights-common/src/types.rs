//! Core record types shared by the server, the curation pipeline, and UIs.
//!
//! Field names serialize in camelCase to match the JSON the web client
//! consumes from `GET /api/search`.

use serde::{Deserialize, Serialize};

use crate::ids::VideoId;

/// A search request as captured from the search form.
///
/// Immutable once captured; every submission starts a new fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// League or sport name (may be empty).
    #[serde(default)]
    pub league: String,
    /// Free-text team or player query.
    #[serde(default)]
    pub query: String,
}

impl SearchParams {
    /// Capture a search, trimming surrounding whitespace from both inputs.
    pub fn new(league: impl AsRef<str>, query: impl AsRef<str>) -> Self {
        Self {
            league: league.as_ref().trim().to_string(),
            query: query.as_ref().trim().to_string(),
        }
    }

    /// Returns `true` when a non-blank query was supplied.
    ///
    /// Searches must not be issued without one.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// A single highlight video, in the shape the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// Provider video id.
    pub id: VideoId,
    /// Video title as published.
    pub title: String,
    /// URL of the high-resolution thumbnail.
    pub thumbnail: String,
    /// ISO-8601 publication timestamp, passed through verbatim.
    pub published_at: String,
    /// Name of the publishing channel.
    pub channel_title: String,
    /// View count, when known. Search results do not carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_trim_inputs() {
        let params = SearchParams::new("  NHL ", " Bruins\t");
        assert_eq!(params.league, "NHL");
        assert_eq!(params.query, "Bruins");
        assert!(params.has_query());
    }

    #[test]
    fn blank_query_is_not_a_query() {
        assert!(!SearchParams::new("NBA", "   ").has_query());
        assert!(!SearchParams::default().has_query());
    }

    #[test]
    fn video_item_uses_camel_case() {
        let item = VideoItem {
            id: VideoId::from("abc123"),
            title: "Great Goal".into(),
            thumbnail: "http://x/y.jpg".into(),
            published_at: "2024-01-01T00:00:00Z".into(),
            channel_title: "ESPN".into(),
            view_count: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["publishedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["channelTitle"], "ESPN");
        assert!(json.get("viewCount").is_none());
    }

    #[test]
    fn video_item_accepts_view_count() {
        let json = r#"{
            "id": "v1",
            "title": "t",
            "thumbnail": "u",
            "publishedAt": "2024-01-01T00:00:00Z",
            "channelTitle": "c",
            "viewCount": "1200"
        }"#;
        let item: VideoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.view_count.as_deref(), Some("1200"));
    }
}
