//! Runtime configuration: built-in defaults, an optional JSON file, the
//! `HOUSE_ESTIMATOR_URL` environment variable, and command-line flags,
//! in increasing order of precedence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "house-estimator";

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Base URL of the prediction service.
    #[arg(long, env = "HOUSE_ESTIMATOR_URL")]
    pub url: Option<String>,

    /// Path to a JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for [`ConfigFile`].
    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL is not an `http://` or `https://` URL.
    #[error("base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Contents of the optional JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Log destination; `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Resolves configuration from all sources.
    ///
    /// A missing file at the default location is ignored; a missing file
    /// passed with `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => Some(read_config_file(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(read_config_file(&path)?),
                _ => None,
            },
        };
        Self::resolve(file.unwrap_or_default(), cli)
    }

    /// Layers `cli` over `file` over the defaults.
    pub fn resolve(file: ConfigFile, cli: &Cli) -> Result<Self, ConfigError> {
        let base_url = cli
            .url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;
        let log_file = cli
            .log_file
            .clone()
            .or(file.log_file)
            .or_else(default_log_path);
        Ok(Self { base_url, log_file })
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(url.to_string()))
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// `<config_dir>/house-estimator/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
}

/// `<data_dir>/house-estimator/house-estimator.log`, if the platform has a data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("house-estimator.log"))
}
