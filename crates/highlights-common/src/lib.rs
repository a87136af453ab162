//! Highlights-Common: Shared types and errors.
//!
//! This crate provides the vocabulary used across highlights-hub:
//!
//! - **Typed IDs**: [`VideoId`] wraps a provider video identifier
//! - **Core Types**: [`SearchParams`] and [`VideoItem`], the records that flow
//!   from the provider to the UI
//! - **Error Handling**: a unified [`Error`] with HTTP status mapping
//!
//! # Examples
//!
//! ```
//! use highlights_common::{Error, SearchParams, VideoId};
//!
//! let params = SearchParams::new("NHL", "Bruins");
//! assert!(params.has_query());
//!
//! let id = VideoId::from("abc123");
//! assert_eq!(id.as_str(), "abc123");
//!
//! let err = Error::validation("Query parameter is required");
//! assert_eq!(err.http_status(), 400);
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result, SchemaIssue};
pub use ids::VideoId;
pub use types::{SearchParams, VideoItem};
