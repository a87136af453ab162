mod types;

pub use types::*;

use anyhow::{Context, Result};
use highlights_playback::PlaybackConfig;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    resolve_api_key(&mut config.provider);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./highlights.toml",
        "~/.config/highlights-hub/config.toml",
        "/etc/highlights-hub/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    let mut config = Config::default();
    resolve_api_key(&mut config.provider);
    Ok(config)
}

/// Read the API key from the configured environment variable. Blank values
/// count as unset.
fn resolve_api_key(provider: &mut ProviderConfig) {
    provider.api_key = std::env::var(&provider.api_key_env)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());
}

impl Config {
    /// The provider API key, or an error naming the variable to set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.provider.api_key.as_deref().with_context(|| {
            format!(
                "{} environment variable is not set",
                self.provider.api_key_env
            )
        })
    }

    /// Coordinator timing for a UI embedding the results grid.
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig::from(&self.playback)
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if let Some(dir) = &config.server.static_dir {
        if !dir.exists() {
            tracing::warn!("Static directory does not exist: {:?}", dir);
        }
    }

    let provider = &config.provider;
    if provider.base_url.trim().is_empty() {
        anyhow::bail!("Provider base_url cannot be empty");
    }
    if provider.api_key_env.trim().is_empty() {
        anyhow::bail!("Provider api_key_env cannot be empty");
    }
    if !(1..=50).contains(&provider.max_results) {
        anyhow::bail!(
            "Provider max_results must be between 1 and 50, got {}",
            provider.max_results
        );
    }
    if provider.lookback_months == 0 {
        anyhow::bail!("Provider lookback_months cannot be 0");
    }
    if provider.timeout_secs == 0 {
        anyhow::bail!("Provider timeout_secs cannot be 0");
    }

    if config.curation.min_filtered_results == 0 {
        anyhow::bail!("Curation min_filtered_results cannot be 0");
    }
    if config.curation.filter_enabled && config.curation.keywords.is_empty() {
        tracing::warn!("Highlight filter is enabled with no keywords; results will never be filtered");
    }

    if config.playback.scroll_debounce_ms == 0 {
        anyhow::bail!("Playback scroll_debounce_ms cannot be 0");
    }

    Ok(())
}
