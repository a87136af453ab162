//! Embedded player handles and viewport geometry.

use highlights_common::{Result, VideoId};

/// Bounding box of an embed in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Visible window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when every edge of `rect` lies inside the viewport.
    pub fn fully_contains(&self, rect: &Rect) -> bool {
        rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= self.height && rect.right <= self.width
    }
}

/// A live embedded player the coordinator can command.
///
/// Implementations bridge to whatever UI toolkit renders the player. Sending
/// may fail, e.g. when the player has not finished loading.
pub trait EmbedHandle: Send + Sync {
    fn video_id(&self) -> &VideoId;

    /// Post a raw iframe API message to the player.
    fn post_message(&self, message: &str) -> Result<()>;

    /// Current position on screen, or `None` if the embed is not laid out.
    fn bounds(&self) -> Option<Rect>;
}
