//! Unified error type for highlights-hub.
//!
//! All crates funnel their failures into [`Error`], which carries enough
//! context for the HTTP layer to pick a status code via [`Error::http_status`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One structural problem found while validating a provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    /// Dotted path to the offending value, e.g. `items.0.snippet.title`.
    pub path: String,
    /// What was expected at that path.
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Unified error type covering all failure modes in highlights-hub.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request data failed validation (e.g. missing query).
    #[error("{0}")]
    Validation(String),

    /// The provider answered with a non-success status.
    #[error("YouTube API error: {message}")]
    Upstream {
        /// HTTP status returned by the provider.
        status: u16,
        /// Provider error text.
        message: String,
    },

    /// The provider payload did not match the expected shape.
    #[error("Invalid response from YouTube API")]
    Schema {
        /// Every mismatch found; never empty.
        issues: Vec<SchemaIssue>,
    },

    /// The outbound request could not be completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sending a command to one embedded player failed.
    #[error("Playback error [{video_id}]: {message}")]
    Playback {
        /// Embed that rejected the command.
        video_id: String,
        /// Human-readable error description.
        message: String,
    },

    /// Catch-all for unexpected internal errors.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    ///
    /// Upstream failures proxy the provider's status when it is a valid
    /// error status; anything else becomes a 500.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::Upstream { status, .. } if (400..600).contains(status) => *status,
            Error::Upstream { .. } => 500,
            Error::Schema { .. } => 500,
            Error::Http(_) => 500,
            Error::Config(_) => 500,
            Error::Playback { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Convenience constructor for [`Error::Upstream`].
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Error::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Playback`].
    pub fn playback(video_id: impl fmt::Display, message: impl Into<String>) -> Self {
        Error::Playback {
            video_id: video_id.to_string(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Schema issues carried by this error, if any.
    pub fn schema_issues(&self) -> Option<&[SchemaIssue]> {
        match self {
            Error::Schema { issues } => Some(issues),
            _ => None,
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_client_error() {
        let err = Error::validation("Query parameter is required");
        assert_eq!(err.to_string(), "Query parameter is required");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn upstream_proxies_status() {
        let err = Error::upstream(403, "quotaExceeded");
        assert_eq!(err.to_string(), "YouTube API error: quotaExceeded");
        assert_eq!(err.http_status(), 403);
    }

    #[test]
    fn upstream_with_odd_status_is_500() {
        assert_eq!(Error::upstream(302, "moved").http_status(), 500);
        assert_eq!(Error::upstream(0, "?").http_status(), 500);
    }

    #[test]
    fn schema_error_carries_issues() {
        let err = Error::Schema {
            issues: vec![SchemaIssue::new("items.0.id.videoId", "expected string")],
        };
        assert_eq!(err.to_string(), "Invalid response from YouTube API");
        assert_eq!(err.http_status(), 500);
        assert_eq!(err.schema_issues().map(<[_]>::len), Some(1));
    }

    #[test]
    fn playback_display() {
        let err = Error::playback("abc", "player not ready");
        assert_eq!(err.to_string(), "Playback error [abc]: player not ready");
        assert!(err.schema_issues().is_none());
    }

    #[test]
    fn schema_issue_display() {
        assert_eq!(
            SchemaIssue::new("items", "expected array").to_string(),
            "items: expected array"
        );
        assert_eq!(SchemaIssue::new("", "expected object").to_string(), "expected object");
    }

    #[test]
    fn result_alias() {
        fn ok_fn() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(ok_fn().unwrap(), 42);

        fn err_fn() -> Result<i32> {
            Err(Error::internal("boom"))
        }
        assert!(err_fn().is_err());
    }
}
