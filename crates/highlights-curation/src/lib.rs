//! # highlights-curation
//!
//! The query-construction and result-curation pipeline behind the highlights
//! search, plus the view-state machine the UI derives from it.
//!
//! Everything here is pure and synchronous: the HTTP client, server, and UI
//! live elsewhere and call into these functions.
//!
//! ## Quick Start
//!
//! ```
//! use highlights_curation::{build_query, derive_view_state, ViewInputs, ViewState};
//!
//! let phrase = build_query("NHL", "Bruins");
//! assert_eq!(phrase, "NHL Bruins hockey highlights goals");
//!
//! let state = derive_view_state(ViewInputs {
//!     query_submitted: true,
//!     loading: true,
//!     failed: false,
//!     empty: true,
//! });
//! assert_eq!(state, ViewState::Loading);
//! ```
//!
//! ## Pipeline
//!
//! provider JSON → [`schema::parse_search_result`] → [`to_video_items`] →
//! [`filter_highlights`] → result list → [`SearchSession`] / [`derive_view_state`].

pub mod display;
pub mod filter;
pub mod query;
pub mod schema;
pub mod session;
pub mod transform;
pub mod view_state;

pub use display::{embed_url, format_relative_time, format_view_count, result_title, GridSize};
pub use filter::{filter_highlights, HighlightFilter, Titled, DEFAULT_KEYWORDS, MIN_FILTERED_RESULTS};
pub use query::{build_query, League};
pub use schema::{parse_search_result, RawSearchItem, RawSearchResult};
pub use session::{SearchOutcome, SearchSession, SearchTicket};
pub use transform::{to_video_items, transform_response};
pub use view_state::{derive_view_state, ViewInputs, ViewState};
