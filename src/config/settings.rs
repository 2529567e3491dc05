// src/config/settings.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Serialize, Deserialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.openbrewerydb.org/v1";

// The API refuses larger `per_page` values
pub const MAX_PAGE_SIZE: usize = 200;

const ENV_PREFIX: &str = "BREWERY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub page_size: usize,
    pub top_states: usize,
    pub log_level: String,
    pub request_timeout_secs: Option<u64>,
    pub start_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 10,
            top_states: 10,
            log_level: "info".to_string(),
            request_timeout_secs: None,
            start_path: "/".to_string(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("brewery-dashboard").join("settings.ron"))
    }

    // Defaults, then the settings file, then BREWERY_* environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path().as_deref(), true)
    }

    pub fn load_from(path: Option<&Path>, with_env: bool) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Ron)
                    .required(false),
            );
        }
        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")
    }

    pub fn normalized(mut self) -> Self {
        let clamped = self.page_size.clamp(1, MAX_PAGE_SIZE);
        if clamped != self.page_size {
            tracing::warn!(requested = self.page_size, used = clamped, "page_size out of range");
            self.page_size = clamped;
        }
        if self.top_states == 0 {
            tracing::warn!("top_states must be at least 1, using 1");
            self.top_states = 1;
        }
        self
    }

    pub fn api_url(&self) -> Result<reqwest::Url> {
        reqwest::Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid api_base_url: {}", self.api_base_url))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
