//! Synchronized playback across every embed in the result grid.
//!
//! The coordinator is a cheaply clonable handle. State lives behind a
//! `parking_lot::Mutex` that is never held while commanding embeds or across
//! an `.await`. Deferred work (the settle delay before "watch" starts playing,
//! and the trailing scroll debounce) runs in Tokio tasks that only hold a
//! `Weak` reference and stop as soon as the coordinator is shut down or the
//! last handle is dropped.

use std::sync::{Arc, Weak};
use std::time::Duration;

use highlights_common::VideoId;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;

use crate::command::PlayerCommand;
use crate::embed::{EmbedHandle, Viewport};
use crate::events::{PlaybackEvent, PlaybackEventBus, PlaybackEventKind};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_SCROLL_DEBOUNCE: Duration = Duration::from_millis(200);

/// Timing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Wait between entering fullscreen and broadcasting play.
    pub settle_delay: Duration,
    /// Quiet period after the last scroll before visibility is checked.
    pub scroll_debounce: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            scroll_debounce: DEFAULT_SCROLL_DEBOUNCE,
        }
    }
}

/// What a press of the watch button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    /// Playback was running and has been paused everywhere.
    Stopped,
    /// Play will be broadcast after the settle delay.
    PlayScheduled { entered_fullscreen: bool },
    /// Nothing to play.
    Ignored,
}

/// Snapshot of coordinator state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStatus {
    pub playing: bool,
    pub fullscreen: bool,
    pub play_pending: bool,
    pub embeds: usize,
}

type Embed = Arc<dyn EmbedHandle>;

#[derive(Default)]
struct State {
    embeds: Vec<Embed>,
    playing: bool,
    fullscreen: bool,
    /// Bumped on every play/pause/fullscreen transition. A deferred play only
    /// fires if this has not moved since it was scheduled.
    transition: u64,
    /// Latest deferred play and the transition it was scheduled at.
    pending_play: Option<(u64, CancellationToken)>,
    scroll_task: Option<AbortHandle>,
}

struct Shared {
    state: Mutex<State>,
    config: PlaybackConfig,
    events: PlaybackEventBus,
    shutdown: CancellationToken,
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.state.get_mut().scroll_task.take() {
            task.abort();
        }
    }
}

#[derive(Clone)]
pub struct PlaybackCoordinator {
    shared: Arc<Shared>,
}

impl PlaybackCoordinator {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::default()),
                config,
                events: PlaybackEventBus::default(),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    fn from_shared(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    fn downgrade(&self) -> Weak<Shared> {
        Arc::downgrade(&self.shared)
    }

    pub fn config(&self) -> PlaybackConfig {
        self.shared.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.shared.events.subscribe()
    }

    pub fn events(&self) -> &PlaybackEventBus {
        &self.shared.events
    }

    pub fn status(&self) -> PlaybackStatus {
        let state = self.shared.state.lock();
        PlaybackStatus {
            playing: state.playing,
            fullscreen: state.fullscreen,
            play_pending: state
                .pending_play
                .as_ref()
                .is_some_and(|(ticket, _)| *ticket == state.transition),
            embeds: state.embeds.len(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.shared.state.lock().playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.shared.state.lock().fullscreen
    }

    /// Swap in the embeds rendered for a new result set.
    ///
    /// Any pending deferred play is cancelled and playback resets to stopped.
    /// The display mode is kept.
    pub fn replace_embeds(&self, embeds: Vec<Arc<dyn EmbedHandle>>) {
        let count = embeds.len();
        {
            let mut state = self.shared.state.lock();
            state.transition += 1;
            if let Some((_, pending)) = state.pending_play.take() {
                pending.cancel();
            }
            state.playing = false;
            state.embeds = embeds;
        }

        tracing::debug!(embeds = count, "Embed set replaced");
        self.shared
            .events
            .publish(PlaybackEventKind::EmbedsReplaced { embeds: count });
    }

    /// The watch/stop button.
    ///
    /// While playing, pauses every embed. Otherwise enters fullscreen if
    /// needed and schedules play after the settle delay. After
    /// [`shutdown`](Self::shutdown) it can still stop playback but never
    /// starts it. Must be called from within a Tokio runtime.
    pub fn watch(&self) -> WatchAction {
        let mut state = self.shared.state.lock();

        if state.playing {
            state.playing = false;
            state.transition += 1;
            let embeds = state.embeds.clone();
            drop(state);

            let delivered = self.broadcast(PlayerCommand::Pause, &embeds);
            tracing::info!(embeds = embeds.len(), delivered, "Playback stopped");
            self.shared
                .events
                .publish(PlaybackEventKind::PlaybackStopped { embeds: embeds.len() });
            return WatchAction::Stopped;
        }

        if self.shared.shutdown.is_cancelled() {
            tracing::debug!("Watch pressed after shutdown");
            return WatchAction::Ignored;
        }

        if state.embeds.is_empty() {
            tracing::debug!("Watch pressed with no embeds");
            return WatchAction::Ignored;
        }

        let entered_fullscreen = !state.fullscreen;
        state.fullscreen = true;
        state.transition += 1;
        let ticket = state.transition;

        // A superseded deferred play still wakes and re-checks on its own.
        let token = self.shared.shutdown.child_token();
        state.pending_play = Some((ticket, token.clone()));
        drop(state);

        if entered_fullscreen {
            self.shared.events.publish(PlaybackEventKind::FullscreenEntered);
        }

        let weak = self.downgrade();
        let delay = self.shared.config.settle_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Deferred play cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if let Some(shared) = weak.upgrade() {
                        PlaybackCoordinator::from_shared(shared).finish_deferred_play(ticket);
                    }
                }
            }
        });

        WatchAction::PlayScheduled { entered_fullscreen }
    }

    fn finish_deferred_play(&self, ticket: u64) {
        let mut state = self.shared.state.lock();
        if state.transition != ticket {
            drop(state);
            tracing::debug!(ticket, "Deferred play superseded; skipping");
            self.shared.events.publish(PlaybackEventKind::DeferredPlaySkipped);
            return;
        }

        state.playing = true;
        state.pending_play = None;
        let embeds = state.embeds.clone();
        drop(state);

        let delivered = self.broadcast(PlayerCommand::Play, &embeds);
        tracing::info!(embeds = embeds.len(), delivered, "Playback started");
        self.shared
            .events
            .publish(PlaybackEventKind::PlaybackStarted { embeds: embeds.len() });
    }

    /// Enter or leave fullscreen. Returns the new fullscreen flag.
    ///
    /// Leaving fullscreen while playing pauses everything. Entering never
    /// starts playback.
    pub fn toggle_fullscreen(&self) -> bool {
        let mut state = self.shared.state.lock();
        state.transition += 1;

        if !state.fullscreen {
            state.fullscreen = true;
            drop(state);
            self.shared.events.publish(PlaybackEventKind::FullscreenEntered);
            return true;
        }

        state.fullscreen = false;
        let was_playing = std::mem::replace(&mut state.playing, false);
        let embeds = state.embeds.clone();
        drop(state);

        self.shared.events.publish(PlaybackEventKind::FullscreenExited);
        if was_playing {
            self.broadcast(PlayerCommand::Pause, &embeds);
            tracing::info!(embeds = embeds.len(), "Fullscreen exited; playback stopped");
            self.shared
                .events
                .publish(PlaybackEventKind::PlaybackStopped { embeds: embeds.len() });
        }
        false
    }

    /// Report a scroll. The visibility check runs once scrolling has been
    /// quiet for the debounce interval. Must be called from within a Tokio
    /// runtime.
    pub fn on_scroll(&self, viewport: Viewport) {
        let weak = self.downgrade();
        let shutdown = self.shared.shutdown.clone();
        let debounce = self.shared.config.scroll_debounce;

        let mut state = self.shared.state.lock();
        if let Some(previous) = state.scroll_task.take() {
            previous.abort();
        }

        let task = tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                _ = tokio::time::sleep(debounce) => {
                    if let Some(shared) = weak.upgrade() {
                        PlaybackCoordinator::from_shared(shared).pause_offscreen(viewport);
                    }
                }
            }
        });
        state.scroll_task = Some(task.abort_handle());
    }

    /// Pause each embed not fully inside `viewport`, leaving the global
    /// playing flag alone. Only applies while playing in the grid view.
    /// Embeds without a layout are left untouched. Paused embeds are not
    /// resumed when they scroll back into view.
    pub fn pause_offscreen(&self, viewport: Viewport) -> Vec<VideoId> {
        let embeds = {
            let state = self.shared.state.lock();
            if !state.playing || state.fullscreen {
                return Vec::new();
            }
            state.embeds.clone()
        };

        let mut paused = Vec::new();
        for embed in &embeds {
            let offscreen = embed
                .bounds()
                .is_some_and(|rect| !viewport.fully_contains(&rect));
            if offscreen && self.send(embed, PlayerCommand::Pause) {
                paused.push(embed.video_id().clone());
                self.shared.events.publish(PlaybackEventKind::EmbedPaused {
                    video_id: embed.video_id().clone(),
                });
            }
        }

        if !paused.is_empty() {
            tracing::debug!(paused = paused.len(), "Paused off-screen embeds");
        }
        paused
    }

    /// Stop all deferred work. Commands already sent are not undone.
    pub fn shutdown(&self) {
        self.shared.shutdown.cancel();
        let mut state = self.shared.state.lock();
        state.pending_play = None;
        if let Some(task) = state.scroll_task.take() {
            task.abort();
        }
    }

    /// Send `command` to every embed independently. Returns how many accepted it.
    fn broadcast(&self, command: PlayerCommand, embeds: &[Embed]) -> usize {
        embeds
            .iter()
            .filter(|embed| self.send(embed, command))
            .count()
    }

    fn send(&self, embed: &Embed, command: PlayerCommand) -> bool {
        match embed.post_message(&command.to_message()) {
            Ok(()) => {
                tracing::trace!(video_id = %embed.video_id(), %command, "Player command sent");
                true
            }
            Err(e) => {
                tracing::warn!(
                    video_id = %embed.video_id(),
                    %command,
                    error = %e,
                    "Player command failed"
                );
                self.shared.events.publish(PlaybackEventKind::CommandFailed {
                    video_id: embed.video_id().clone(),
                    command,
                    error: e.to_string(),
                });
                false
            }
        }
    }
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
