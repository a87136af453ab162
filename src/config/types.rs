use highlights_curation::{HighlightFilter, DEFAULT_KEYWORDS, MIN_FILTERED_RESULTS};
use highlights_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub curation: CurationConfig,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built UI to serve, with SPA fallback to `index.html`
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Resolved from `api_key_env` at load time; never read from or written to
    /// the file.
    #[serde(skip)]
    pub api_key: Option<String>,

    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Only videos published within this many months are returned
    #[serde(default = "default_lookback_months")]
    pub lookback_months: u32,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_video_duration")]
    pub video_duration: String,

    #[serde(default = "default_order")]
    pub order: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}
fn default_api_key_env() -> String {
    "YOUTUBE_API_KEY".to_string()
}
fn default_max_results() -> u32 {
    10
}
fn default_lookback_months() -> u32 {
    3
}
fn default_language() -> String {
    "en".to_string()
}
fn default_video_duration() -> String {
    "short".to_string()
}
fn default_order() -> String {
    "relevance".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            api_key: None,
            max_results: default_max_results(),
            lookback_months: default_lookback_months(),
            language: default_language(),
            video_duration: default_video_duration(),
            order: default_order(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurationConfig {
    /// Apply the highlight keyword filter to provider results
    #[serde(default = "default_filter_enabled")]
    pub filter_enabled: bool,

    /// Below this many keyword matches the unfiltered list is returned
    #[serde(default = "default_min_filtered_results")]
    pub min_filtered_results: usize,

    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_filter_enabled() -> bool {
    true
}
fn default_min_filtered_results() -> usize {
    MIN_FILTERED_RESULTS
}
fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            filter_enabled: default_filter_enabled(),
            min_filtered_results: default_min_filtered_results(),
            keywords: default_keywords(),
        }
    }
}

impl CurationConfig {
    /// Filter built from these settings, or `None` when filtering is off.
    pub fn filter(&self) -> Option<HighlightFilter> {
        self.filter_enabled
            .then(|| HighlightFilter::new(self.keywords.clone(), self.min_filtered_results))
    }
}

/// Playback timing for a UI that embeds the results grid. The server never
/// plays video; it only loads and validates these.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
}

fn default_settle_delay_ms() -> u64 {
    500
}
fn default_scroll_debounce_ms() -> u64 {
    200
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
        }
    }
}

impl From<&PlaybackSettings> for PlaybackConfig {
    fn from(settings: &PlaybackSettings) -> Self {
        PlaybackConfig {
            settle_delay: Duration::from_millis(settings.settle_delay_ms),
            scroll_debounce: Duration::from_millis(settings.scroll_debounce_ms),
        }
    }
}
