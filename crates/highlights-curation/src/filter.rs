//! Highlight keyword filter.
//!
//! The provider's relevance ranking is usually good, but a search for a team
//! also turns up press conferences, podcasts and fan vlogs. Titles that
//! mention none of the highlight keywords are dropped, unless that would
//! leave too little to show.

use highlights_common::VideoItem;

use crate::schema::RawSearchItem;

/// Title fragments that indicate a genuine highlight clip.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "highlight",
    "play",
    "score",
    "goal",
    "dunk",
    "touchdown",
    "slam",
    "shot",
    "save",
    "match",
    "game",
    "vs",
];

/// Below this many matches the filter is discarded and the provider's list
/// is returned untouched.
pub const MIN_FILTERED_RESULTS: usize = 3;

/// Anything with a display title the filter can inspect.
pub trait Titled {
    fn title(&self) -> &str;
}

impl Titled for VideoItem {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for RawSearchItem {
    fn title(&self) -> &str {
        &self.snippet.title
    }
}

/// Keyword filter with a fallback threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightFilter {
    keywords: Vec<String>,
    min_results: usize,
}

impl HighlightFilter {
    /// Build a filter from custom keywords and threshold.
    ///
    /// Keywords are lower-cased; blank ones are ignored.
    pub fn new<I, S>(keywords: I, min_results: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            keywords,
            min_results,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn min_results(&self) -> usize {
        self.min_results
    }

    /// Returns `true` if the title contains at least one keyword.
    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.keywords.iter().any(|k| title.contains(k.as_str()))
    }

    /// Keep the items whose titles match, preserving order.
    ///
    /// When fewer than `min_results` items match, the input is returned
    /// unchanged instead.
    pub fn apply<T: Titled>(&self, items: Vec<T>) -> Vec<T> {
        let matching = items.iter().filter(|i| self.matches(i.title())).count();

        if matching < self.min_results {
            tracing::debug!(
                matching,
                total = items.len(),
                threshold = self.min_results,
                "Highlight filter too aggressive, keeping provider order"
            );
            return items;
        }

        items
            .into_iter()
            .filter(|i| self.matches(i.title()))
            .collect()
    }
}

impl Default for HighlightFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied(), MIN_FILTERED_RESULTS)
    }
}

/// Apply the default [`HighlightFilter`].
pub fn filter_highlights<T: Titled>(items: Vec<T>) -> Vec<T> {
    HighlightFilter::default().apply(items)
}
