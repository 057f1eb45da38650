// src/config.rs
//! Client configuration: optional YAML file, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::polling::PollingConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://sharpapi.com/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;
const DEFAULT_CONFIG_FILE: &str = "sharpapi.yaml";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub polling: PollingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_key: Option<String>,
    api_base_url: Option<String>,
    user_agent: Option<String>,
    timeout_seconds: Option<u64>,
    polling: Option<PollingConfig>,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            polling: PollingConfig::default(),
        }
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout_seconds(mut self, secs: u64) -> Self {
        self.timeout_seconds = secs;
        self
    }

    pub fn with_polling(mut self, polling: PollingConfig) -> Self {
        self.polling = polling;
        self
    }

    /// Load from `SHARPAPI_CONFIG` (or `sharpapi.yaml` when present), then
    /// apply `SHARP_API_*` environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("SHARPAPI_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(|| {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            });

        Self::load_from(path.as_deref())
    }

    /// Same as [`ClientConfig::load`] with an explicit file path.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                info!("Loading SharpAPI configuration from {}", path.display());
                Self::read_file(path)?
            }
            None => ConfigFile::default(),
        };

        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        let timeout_seconds = match env("SHARP_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("SHARP_API_TIMEOUT_SECS must be a number of seconds")?,
            None => file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        Self::from_parts(
            env("SHARP_API_KEY").or(file.api_key),
            env("SHARP_API_BASE_URL").or(file.api_base_url),
            file.user_agent,
            timeout_seconds,
            file.polling.unwrap_or_default(),
        )
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn from_parts(
        api_key: Option<String>,
        api_base_url: Option<String>,
        user_agent: Option<String>,
        timeout_seconds: u64,
        polling: PollingConfig,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .context("SharpAPI key not configured: set SHARP_API_KEY or api_key in the config file")?;

        anyhow::ensure!(
            polling.interval_secs > 0,
            "polling.interval_secs must be at least 1 second"
        );

        let mut config = Self::new(&api_key)
            .with_timeout_seconds(timeout_seconds)
            .with_polling(polling);

        if let Some(url) = api_base_url {
            config = config.with_api_base_url(&url);
        }
        if let Some(user_agent) = user_agent {
            config = config.with_user_agent(&user_agent);
        }

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!(
        "sharpapi-rust-related-job-positions/{}",
        env!("CARGO_PKG_VERSION")
    )
}
