//! Video search providers.
//!
//! A provider turns a search phrase into the raw provider payload. Payload
//! validation and mapping to [`highlights_common::VideoItem`] happen in the
//! search service so every provider is held to the same schema.

mod youtube;

pub use youtube::{published_after, YouTubeProvider};

use highlights_common::Result;
use serde_json::Value;

/// Anything that can run a video search.
#[async_trait::async_trait]
pub trait VideoSearchProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Run one search and return the provider's JSON body.
    ///
    /// Non-2xx responses become [`highlights_common::Error::Upstream`] carrying
    /// the provider status and body text; transport failures become
    /// [`highlights_common::Error::Http`].
    async fn search(&self, phrase: &str) -> Result<Value>;
}
