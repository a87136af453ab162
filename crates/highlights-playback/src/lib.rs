//! Highlights-Playback: "watch all" coordination for embedded players.
//!
//! The UI registers one [`EmbedHandle`] per rendered video and forwards three
//! inputs: the watch button, the fullscreen toggle, and scroll events. The
//! [`PlaybackCoordinator`] turns those into per-embed play/pause commands:
//!
//! - **watch** enters fullscreen, waits for the layout to settle, then plays
//!   every embed; pressed again it pauses them all
//! - **leaving fullscreen** while playing pauses everything
//! - **scrolling** in the grid view pauses embeds that are no longer fully
//!   visible, without resuming them later
//!
//! Commands are fire-and-forget. A failing embed is logged and reported on
//! the event stream but never stops the others.
//!
//! ```no_run
//! use highlights_playback::{PlaybackConfig, PlaybackCoordinator, WatchAction};
//!
//! # async fn demo() {
//! let coordinator = PlaybackCoordinator::new(PlaybackConfig::default());
//! let mut events = coordinator.subscribe();
//!
//! // coordinator.replace_embeds(handles_for_current_results);
//! if coordinator.watch() == WatchAction::Ignored {
//!     println!("nothing to play yet");
//! }
//! # let _ = events.recv().await;
//! # }
//! ```

pub mod command;
pub mod coordinator;
pub mod embed;
pub mod events;

pub use command::{CommandMessage, PlayerCommand};
pub use coordinator::{
    PlaybackConfig, PlaybackCoordinator, PlaybackStatus, WatchAction, DEFAULT_SCROLL_DEBOUNCE,
    DEFAULT_SETTLE_DELAY,
};
pub use embed::{EmbedHandle, Rect, Viewport};
pub use events::{PlaybackEvent, PlaybackEventBus, PlaybackEventKind, HISTORY_LEN};
