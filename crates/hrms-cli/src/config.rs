//! Configuration management for HRMS CLI
//!
//! Stores the API base URL in ~/.config/hrms/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "hrms";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the configured base URL
const API_URL_ENV: &str = "HRMS_API_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// `~/.config/hrms/config.toml`, or the platform equivalent
    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        Self::read(&Self::path()?)
    }

    /// Write the config file, creating its directory as needed
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.write(&path)?;
        Ok(path)
    }

    fn read(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {:?}", path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read config from {:?}", path)),
        }
    }

    fn write(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Base URL in effect for this run, honoring `--url` and `HRMS_API_URL`
    pub fn effective_base_url(&self, flag: Option<&str>) -> String {
        self.resolve_base_url(flag, std::env::var(API_URL_ENV).ok())
    }

    /// Set base URL
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Base URL to use: `--url` flag, then environment, then config file
    fn resolve_base_url(&self, flag: Option<&str>, env: Option<String>) -> String {
        flag.map(str::to_string)
            .or(env.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| self.base_url.clone())
    }
}
