//! Provider query construction.
//!
//! A league name and a free-text query become one search phrase with a
//! sport-specific vocabulary suffix appended, so the provider's relevance
//! ranking leans towards actual highlight clips.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix used when the league is empty or unrecognised.
const GENERIC_SUFFIX: &str = "sports highlights recent";

/// Sports with a tuned highlight vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Hockey,
    Basketball,
    Football,
    Baseball,
}

impl League {
    /// Detection order. The first sport with a matching alias wins.
    pub const ALL: [League; 4] = [
        League::Hockey,
        League::Basketball,
        League::Football,
        League::Baseball,
    ];

    /// Lower-case names that identify this sport.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            League::Hockey => &["nhl", "hockey"],
            League::Basketball => &["nba", "basketball"],
            League::Football => &["nfl", "football"],
            League::Baseball => &["mlb", "baseball"],
        }
    }

    /// Vocabulary appended to queries for this sport.
    pub fn suffix(self) -> &'static str {
        match self {
            League::Hockey => "hockey highlights goals",
            League::Basketball => "basketball highlights dunks",
            League::Football => "football highlights touchdowns",
            League::Baseball => "baseball highlights home runs",
        }
    }

    /// Detect a sport from free-form league text.
    ///
    /// Matching is case-insensitive and accepts substrings, so
    /// `"NHL Playoffs"` and `"College Football"` are both recognised.
    pub fn detect(league: &str) -> Option<League> {
        let lowered = league.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        League::ALL
            .into_iter()
            .find(|l| l.aliases().iter().any(|alias| lowered.contains(alias)))
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hockey => write!(f, "hockey"),
            Self::Basketball => write!(f, "basketball"),
            Self::Football => write!(f, "football"),
            Self::Baseball => write!(f, "baseball"),
        }
    }
}

/// Build the provider search phrase for a league and free-text query.
///
/// Both inputs are trimmed. The result is `league query suffix` with empty
/// parts left out. An empty query still produces a phrase; callers are
/// responsible for not searching without one.
///
/// ```
/// use highlights_curation::build_query;
///
/// assert_eq!(build_query("", "Bruins"), "Bruins sports highlights recent");
/// assert_eq!(
///     build_query("nba", "Celtics"),
///     "nba Celtics basketball highlights dunks"
/// );
/// ```
pub fn build_query(league: &str, query: &str) -> String {
    let league = league.trim();
    let query = query.trim();

    let suffix = League::detect(league)
        .map(League::suffix)
        .unwrap_or(GENERIC_SUFFIX);

    [league, query, suffix]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
