// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration file support.
//!
//! Loads `.unerg-search.toml` from the current directory, or
//! `<config dir>/unerg-search/config.toml`, then applies environment overrides
//! (`UNERG_API_URL`, `UNERG_API_TOKEN`). Command-line flags win over both.

use crate::options::SearchOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".unerg-search.toml";

/// Environment variable overriding `remote.base_url`.
pub const API_URL_ENV: &str = "UNERG_API_URL";

/// Environment variable overriding `remote.token`.
pub const API_TOKEN_ENV: &str = "UNERG_API_TOKEN";

/// Remote search endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// API root, e.g. `http://localhost:3000/api`.
    pub base_url: String,
    /// Path of the search endpoint below `base_url`.
    pub search_path: String,
    /// URL parameter carrying the query.
    pub query_param: String,
    pub timeout_secs: u64,
    /// Bearer token sent with every request.
    pub token: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            search_path: "trabajos/search".to_string(),
            query_param: "query".to_string(),
            timeout_secs: 10,
            token: None,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Live search bar settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Quiet period after the last keystroke before a search is issued.
    pub debounce_ms: u64,
    /// Local indexes larger than this are searched on the blocking pool.
    pub offload_threshold: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1500,
            offload_threshold: 5_000,
        }
    }
}

impl ControllerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Everything the binary and the controller need, with defaults for all of it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub controller: ControllerConfig,
    pub search: SearchOptions,
}

impl Config {
    /// Load configuration from files, then the environment.
    ///
    /// Precedence (highest to lowest):
    /// 1. `UNERG_API_URL` / `UNERG_API_TOKEN`
    /// 2. `.unerg-search.toml` in the current directory
    /// 3. `<config dir>/unerg-search/config.toml`
    pub fn load() -> Self {
        let mut config = Self::load_files();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn load_files() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(LOCAL_CONFIG_FILE)) {
            return config;
        }

        if let Some(path) = Self::user_config_path() {
            if let Some(config) = Self::load_from_path(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// `<config dir>/unerg-search/config.toml`, when the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("unerg-search").join("config.toml"))
    }

    /// Parse one file. Missing files are silent; broken ones warn and are skipped.
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match Self::from_toml_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                None
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.remote.base_url = url;
        }
        if let Some(token) = lookup(API_TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            self.remote.token = Some(token);
        }
    }
}
