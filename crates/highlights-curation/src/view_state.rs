//! UI view-state derivation.
//!
//! The view state is never stored. It is recomputed from independent facts
//! about the current search so the facts can change in any order without the
//! UI falling out of sync.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the results area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    /// Nothing searched yet.
    Initial,
    /// A search is in flight.
    Loading,
    /// Results are available.
    Results,
    /// The search succeeded with nothing to show.
    NoResults,
    /// The search failed.
    Error,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Loading => write!(f, "loading"),
            Self::Results => write!(f, "results"),
            Self::NoResults => write!(f, "noResults"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Facts the view state is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewInputs {
    /// A non-empty query has been submitted.
    pub query_submitted: bool,
    /// The latest search has not answered yet.
    pub loading: bool,
    /// The latest search failed.
    pub failed: bool,
    /// The (filtered) result list is empty.
    pub empty: bool,
}

/// Derive the view state. First matching rule wins:
/// no query, in flight, failed, empty, otherwise results.
///
/// Failure is checked before emptiness so stale success data never masks a
/// newer error.
pub fn derive_view_state(inputs: ViewInputs) -> ViewState {
    if !inputs.query_submitted {
        ViewState::Initial
    } else if inputs.loading {
        ViewState::Loading
    } else if inputs.failed {
        ViewState::Error
    } else if inputs.empty {
        ViewState::NoResults
    } else {
        ViewState::Results
    }
}
