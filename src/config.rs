//! Layered application settings.
//!
//! Sources, lowest priority first: built-in defaults, the optional
//! `~/.library-admin/config.toml`, a `.env` file in the working directory, and
//! `LIBRARY_ADMIN_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use tracing::Level;

use crate::ui::Route;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".library-admin";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "library-admin.log";
const ENV_PREFIX: &str = "LIBRARY_ADMIN";

/// The mock backend the dashboard was built against.
pub const DEFAULT_API_BASE_URL: &str = "https://67dfdb827635238f9aab65a2.mockapi.io/api";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_api_base_url")]
    pub api_base_url: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "Settings::default_log_level")]
    pub log_level: String,
    /// Screen opened at startup, in route form (`/`, `/create`, `/edit/books/1`).
    #[serde(default = "Settings::default_start_route")]
    pub start_route: String,
}

impl Settings {
    /// Load settings from every source.
    pub fn load() -> Result<Self> {
        // A missing `.env` is the common case.
        let _ = dotenvy::dotenv();
        Self::load_from(&config_path()?)
    }

    /// Load settings with `path` as the (optional) config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        cfg.try_deserialize()
            .context("failed to deserialize configuration")
    }

    pub fn start_route(&self) -> Result<Route> {
        self.start_route
            .parse()
            .with_context(|| format!("invalid start_route '{}'", self.start_route))
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("invalid log_level '{}'", self.log_level))
    }

    fn default_api_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    fn default_log_level() -> String {
        "info".to_string()
    }

    fn default_start_route() -> String {
        "/".to_string()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: Self::default_api_base_url(),
            log_level: Self::default_log_level(),
            start_route: Self::default_start_route(),
        }
    }
}

/// Resolve the application data directory inside the user's home.
pub fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(CONFIG_FILE_NAME))
}

pub fn log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}
