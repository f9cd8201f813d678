//! User configuration stored in settings.json

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Paths;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const USE_MOCK_DATA_ENV: &str = "MOODMUSE_USE_MOCK_DATA";

/// User configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Gemini API key; empty means generation is unavailable
    #[serde(default)]
    pub gemini_api_key: String,

    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Always serve offline content even when a key is present
    #[serde(default)]
    pub use_mock_data: bool,

    /// Generator request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Simulated delay before serving offline content, in milliseconds
    #[serde(default = "default_offline_delay_ms")]
    pub offline_delay_ms: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            use_mock_data: false,
            request_timeout_secs: default_request_timeout_secs(),
            offline_delay_ms: default_offline_delay_ms(),
        }
    }
}

impl UserConfig {
    /// Load configuration from the settings file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let paths = Paths::get()?;
        let mut config = Self::load_from(&paths.settings_path())?;
        config.apply_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(USE_MOCK_DATA_ENV).ok(),
        );
        Ok(config)
    }

    /// Load configuration from a file, creating it with defaults when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read settings file")?;
            serde_json::from_str(&content).context("Failed to parse settings file")
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the given settings file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Apply environment values. A blank key is ignored; mock data is forced only by "true".
    pub fn apply_overrides(&mut self, api_key: Option<String>, use_mock_data: Option<String>) {
        if let Some(key) = api_key {
            if !key.trim().is_empty() {
                self.gemini_api_key = key.trim().to_string();
            }
        }

        if let Some(flag) = use_mock_data {
            if flag.trim() == "true" {
                self.use_mock_data = true;
            }
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }

    /// Whether the generator path should be attempted at all
    pub fn generation_enabled(&self) -> bool {
        self.has_api_key() && !self.use_mock_data
    }
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_offline_delay_ms() -> u64 {
    1000
}
