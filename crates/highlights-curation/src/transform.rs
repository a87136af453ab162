//! Mapping from the provider wire shape to [`VideoItem`].

use highlights_common::{Result, VideoId, VideoItem};
use serde_json::Value;

use crate::schema::{parse_search_result, RawSearchItem, RawSearchResult};

impl From<RawSearchItem> for VideoItem {
    fn from(raw: RawSearchItem) -> Self {
        VideoItem {
            id: VideoId::from(raw.id.video_id),
            title: raw.snippet.title,
            thumbnail: raw.snippet.thumbnails.high.url,
            published_at: raw.snippet.published_at,
            channel_title: raw.snippet.channel_title,
            view_count: None,
        }
    }
}

/// Map each raw item 1:1 to a [`VideoItem`], keeping provider order and
/// duplicates.
pub fn to_video_items(raw: RawSearchResult) -> Vec<VideoItem> {
    raw.items.into_iter().map(VideoItem::from).collect()
}

/// Validate a provider payload and map it, failing on any schema mismatch.
pub fn transform_response(value: &Value) -> Result<Vec<VideoItem>> {
    parse_search_result(value).map(to_video_items)
}
