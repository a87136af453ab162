//! Playback event stream.
//!
//! [`PlaybackEventBus`] fans coordinator state changes out to any number of
//! UI observers over a `tokio::sync::broadcast` channel and keeps a short
//! history so an observer attached late can render the current state.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use highlights_common::VideoId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::command::PlayerCommand;

/// Events retained for observers that attach late.
pub const HISTORY_LEN: usize = 64;

/// What changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEventKind {
    FullscreenEntered,
    FullscreenExited,
    /// Play was broadcast to every embed.
    PlaybackStarted { embeds: usize },
    /// Pause was broadcast to every embed.
    PlaybackStopped { embeds: usize },
    /// A deferred play woke up after a newer transition and did nothing.
    DeferredPlaySkipped,
    /// An embed left the viewport and was paused on its own.
    EmbedPaused { video_id: VideoId },
    CommandFailed {
        video_id: VideoId,
        command: PlayerCommand,
        error: String,
    },
    /// The embed set was rebuilt for a new result set.
    EmbedsReplaced { embeds: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: PlaybackEventKind,
}

impl PlaybackEvent {
    pub fn new(kind: PlaybackEventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Fans coordinator changes out to UI observers.
///
/// The last [`HISTORY_LEN`] events are also kept, so a view attached after
/// playback began can tell from [`last_where`](Self::last_where) whether the
/// grid is playing or fullscreen without asking the coordinator.
pub struct PlaybackEventBus {
    sender: broadcast::Sender<PlaybackEvent>,
    history: RwLock<VecDeque<PlaybackEvent>>,
}

impl PlaybackEventBus {
    /// `lag` bounds how far a slow subscriber may fall behind before it
    /// starts missing events.
    pub fn new(lag: usize) -> Self {
        Self {
            sender: broadcast::channel(lag).0,
            history: RwLock::new(VecDeque::with_capacity(HISTORY_LEN)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.sender.subscribe()
    }

    /// Record `kind` and deliver it to whoever is listening.
    pub fn publish(&self, kind: PlaybackEventKind) {
        let event = PlaybackEvent::new(kind);

        {
            let mut history = self.history.write();
            if history.len() == HISTORY_LEN {
                history.pop_front();
            }
            history.push_back(event.clone());
        }

        // Nobody watching the grid.
        let _ = self.sender.send(event);
    }

    /// Up to `n` events, newest first.
    pub fn recent_events(&self, n: usize) -> Vec<PlaybackEvent> {
        self.history.read().iter().rev().take(n).cloned().collect()
    }

    /// Newest event whose kind satisfies `pred`.
    pub fn last_where(&self, pred: impl Fn(&PlaybackEventKind) -> bool) -> Option<PlaybackEvent> {
        self.history.read().iter().rev().find(|e| pred(&e.kind)).cloned()
    }
}

impl Default for PlaybackEventBus {
    fn default() -> Self {
        Self::new(128)
    }
}
