//! Presentation helpers shared by every front end.
//!
//! These format provider data for display; none of them affect which videos
//! are shown.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use highlights_common::{SearchParams, VideoId};
use serde::{Deserialize, Serialize};

/// Number of grid columns on wide screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    Two,
    #[default]
    Three,
    Four,
}

impl GridSize {
    pub fn columns(self) -> u8 {
        match self {
            GridSize::Two => 2,
            GridSize::Three => 3,
            GridSize::Four => 4,
        }
    }
}

impl TryFrom<u8> for GridSize {
    type Error = String;

    fn try_from(columns: u8) -> Result<Self, Self::Error> {
        match columns {
            2 => Ok(GridSize::Two),
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            other => Err(format!("unsupported grid size {other}, expected 2, 3 or 4")),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.columns()
    }
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let columns: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid grid size: {s:?}"))?;
        GridSize::try_from(columns)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns())
    }
}

/// Compact view count: `1.2K`, `3.4M`, `1.0B`, or `N/A` when unknown.
pub fn format_view_count(view_count: Option<&str>) -> String {
    let Some(raw) = view_count else {
        return "N/A".to_string();
    };

    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    let Ok(count) = digits.parse::<u64>() else {
        return "N/A".to_string();
    };

    let count_f = count as f64;
    if count >= 1_000_000_000 {
        format!("{:.1}B", count_f / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.1}M", count_f / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count_f / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Human-readable age of a publication timestamp relative to `now`.
///
/// Months are 30 days and years 365 days. Future timestamps read as
/// "Just now".
pub fn format_relative_time(published_at: &str, now: DateTime<Utc>) -> String {
    let Ok(published) = DateTime::parse_from_rfc3339(published_at) else {
        return "Unknown date".to_string();
    };

    let minutes = (now - published.with_timezone(&Utc)).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "Just now".to_string()
    }
}

/// Heading above the results grid.
pub fn result_title(params: &SearchParams) -> String {
    let league = params.league.trim();
    let query = params.query.trim();

    if league.is_empty() && query.is_empty() {
        return "Recent Highlights".to_string();
    }

    let title = if league.is_empty() {
        "Sports Highlights".to_string()
    } else {
        format!("{} Highlights", league.to_uppercase())
    };

    if query.is_empty() {
        title
    } else {
        format!("{title} - \"{query}\"")
    }
}

/// Embed URL for a player that accepts iframe API commands.
///
/// The grid view starts muted; fullscreen mode plays with sound.
pub fn embed_url(video_id: &VideoId, muted: bool, origin: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{video_id}?enablejsapi=1&mute={}&origin={origin}&rel=0&showinfo=0&player_id={video_id}&controls=1",
        u8::from(muted)
    )
}
