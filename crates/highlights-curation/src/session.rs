//! Client-side search lifecycle.
//!
//! A [`SearchSession`] owns the facts the view state is derived from: the
//! submitted params, whether a request is in flight, and the last applied
//! outcome. Every request is tagged with a generation; only the answer to
//! the most recent request may be applied, so a slow stale response can never
//! overwrite a newer one.

use highlights_common::{SearchParams, VideoId, VideoItem};

use crate::display::result_title;
use crate::view_state::{derive_view_state, ViewInputs, ViewState};

/// Handle for one issued search. Pass it back to [`SearchSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    params: SearchParams,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Params the search must be issued with.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

/// Result of the latest applied search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Videos(Vec<VideoItem>),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct SearchSession {
    params: SearchParams,
    generation: u64,
    in_flight: bool,
    outcome: Option<SearchOutcome>,
    selected: Option<VideoId>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a form submission.
    ///
    /// Returns `None` without touching state when the query is blank; no
    /// search may be issued in that case.
    pub fn submit(&mut self, params: SearchParams) -> Option<SearchTicket> {
        let params = SearchParams::new(&params.league, &params.query);
        if !params.has_query() {
            tracing::debug!("Ignoring search submission without a query");
            return None;
        }

        self.params = params;
        Some(self.issue())
    }

    /// Re-issue the current search, e.g. from the error view's retry button.
    pub fn retry(&mut self) -> Option<SearchTicket> {
        if !self.params.has_query() {
            return None;
        }
        Some(self.issue())
    }

    fn issue(&mut self) -> SearchTicket {
        self.generation += 1;
        self.in_flight = true;
        self.selected = None;

        tracing::debug!(
            generation = self.generation,
            league = %self.params.league,
            query = %self.params.query,
            "Search issued"
        );

        SearchTicket {
            generation: self.generation,
            params: self.params.clone(),
        }
    }

    /// Apply the answer to a search.
    ///
    /// Returns `false` and leaves state untouched if the ticket has been
    /// superseded by a later submission or retry.
    pub fn complete(&mut self, ticket: SearchTicket, outcome: Result<Vec<VideoItem>, String>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded search response"
            );
            return false;
        }

        self.in_flight = false;
        self.outcome = Some(match outcome {
            Ok(videos) => SearchOutcome::Videos(videos),
            Err(message) => SearchOutcome::Failed(message),
        });
        true
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Facts for [`derive_view_state`].
    pub fn view_inputs(&self) -> ViewInputs {
        ViewInputs {
            query_submitted: self.params.has_query(),
            loading: self.in_flight,
            failed: matches!(self.outcome, Some(SearchOutcome::Failed(_))),
            empty: self.videos().is_empty(),
        }
    }

    pub fn view_state(&self) -> ViewState {
        derive_view_state(self.view_inputs())
    }

    /// Videos of the last successful search; empty while loading or failed.
    pub fn videos(&self) -> &[VideoItem] {
        if self.in_flight {
            return &[];
        }
        match &self.outcome {
            Some(SearchOutcome::Videos(videos)) => videos,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Some(SearchOutcome::Failed(message)) if !self.in_flight => Some(message),
            _ => None,
        }
    }

    pub fn result_title(&self) -> String {
        result_title(&self.params)
    }

    /// Highlight a video from the title sidebar.
    ///
    /// Ids not in the current result set are ignored.
    pub fn select_video(&mut self, id: &VideoId) -> bool {
        if self.videos().iter().any(|v| &v.id == id) {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn selected_video(&self) -> Option<&VideoId> {
        self.selected.as_ref()
    }
}
