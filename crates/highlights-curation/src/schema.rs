//! Provider wire format and strict validation.
//!
//! The YouTube `search` endpoint returns far more than we use. Only the
//! fields below are required, but each one must be present with the right
//! type; a single mismatch rejects the whole payload. Validation walks the
//! JSON tree first so the error can list every problem, not just the first
//! one `serde` trips over.

use highlights_common::{Error, Result, SchemaIssue};
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSearchResult {
    pub items: Vec<RawSearchItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSearchItem {
    pub id: RawVideoRef,
    pub snippet: RawSnippet,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoRef {
    pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnippet {
    pub title: String,
    pub thumbnails: RawThumbnails,
    pub published_at: String,
    pub channel_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawThumbnails {
    pub high: RawThumbnail,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawThumbnail {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate and decode a provider search payload.
///
/// Returns [`Error::Schema`] listing every structural problem when the shape
/// does not match.
pub fn parse_search_result(value: &Value) -> Result<RawSearchResult> {
    let issues = validate(value);
    if !issues.is_empty() {
        tracing::warn!(issues = issues.len(), "Provider payload failed validation");
        return Err(Error::Schema { issues });
    }

    RawSearchResult::deserialize(value).map_err(|e| Error::Schema {
        issues: vec![SchemaIssue::new("", e.to_string())],
    })
}

/// Collect every structural problem in a search payload.
pub fn validate(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    let Some(root) = expect_object(value, "", &mut issues) else {
        return issues;
    };

    let items = root.get("items").unwrap_or(&Value::Null);
    let Some(items) = expect_array(items, "items", &mut issues) else {
        return issues;
    };

    for (index, item) in items.iter().enumerate() {
        let path = format!("items.{index}");
        let Some(item) = expect_object(item, &path, &mut issues) else {
            continue;
        };

        let id_path = format!("{path}.id");
        if let Some(id) = expect_object(field(item, "id"), &id_path, &mut issues) {
            expect_string(field(id, "videoId"), &format!("{id_path}.videoId"), &mut issues);
        }

        let snippet_path = format!("{path}.snippet");
        if let Some(snippet) = expect_object(field(item, "snippet"), &snippet_path, &mut issues) {
            expect_string(field(snippet, "title"), &format!("{snippet_path}.title"), &mut issues);

            let thumbs_path = format!("{snippet_path}.thumbnails");
            if let Some(thumbs) =
                expect_object(field(snippet, "thumbnails"), &thumbs_path, &mut issues)
            {
                let high_path = format!("{thumbs_path}.high");
                if let Some(high) = expect_object(field(thumbs, "high"), &high_path, &mut issues) {
                    expect_string(field(high, "url"), &format!("{high_path}.url"), &mut issues);
                }
            }

            expect_string(
                field(snippet, "publishedAt"),
                &format!("{snippet_path}.publishedAt"),
                &mut issues,
            );
            expect_string(
                field(snippet, "channelTitle"),
                &format!("{snippet_path}.channelTitle"),
                &mut issues,
            );
        }
    }

    issues
}

type Object = serde_json::Map<String, Value>;

fn field<'a>(obj: &'a Object, key: &str) -> &'a Value {
    obj.get(key).unwrap_or(&Value::Null)
}

fn expect_object<'a>(value: &'a Value, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<&'a Object> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            issues.push(mismatch(path, "object", other));
            None
        }
    }
}

fn expect_array<'a>(value: &'a Value, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<&'a Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        other => {
            issues.push(mismatch(path, "array", other));
            None
        }
    }
}

fn expect_string(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    if !value.is_string() {
        issues.push(mismatch(path, "string", value));
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> SchemaIssue {
    let received = match found {
        Value::Null => "missing or null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    SchemaIssue::new(path, format!("expected {expected}, received {received}"))
}
