use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_WORD_LIMIT: u32 = 500;

pub const THUMBNAIL_URL_TEMPLATE: &str = "https://img.youtube.com/vi/{video_id}/0.jpg";

/// Optional values read from ~/.config/ytsum/config.toml
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_lang: Option<String>,
    pub default_model: Option<String>,
    pub api_key_env: Option<String>,
    pub word_limit: Option<u32>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

/// Immutable runtime settings, resolved once at startup from CLI flags over
/// config-file values over built-in defaults, and passed by reference to each
/// component.
#[derive(Debug, Clone)]
pub struct Settings {
    pub model: String,
    pub api_key_env: String,
    pub word_limit: u32,
    pub preselected_lang: Option<String>,
}

impl Settings {
    pub fn resolve(
        config: &Config,
        cli_model: Option<String>,
        cli_word_limit: Option<u32>,
        cli_lang: Option<String>,
    ) -> Self {
        Settings {
            model: cli_model
                .or_else(|| config.default_model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key_env: config
                .api_key_env
                .clone()
                .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
            word_limit: cli_word_limit.or(config.word_limit).unwrap_or(DEFAULT_WORD_LIMIT),
            preselected_lang: cli_lang.or_else(|| config.default_lang.clone()),
        }
    }
}

/// Thumbnail URL for a resolved video ID
pub fn thumbnail_url(video_id: &str) -> String {
    THUMBNAIL_URL_TEMPLATE.replace("{video_id}", video_id)
}
