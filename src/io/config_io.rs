use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::config::GamifyConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Default config location: `<config dir>/gamify/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamify").join("config.toml"))
}

/// Load the config from an explicit path, or from the default location.
///
/// An explicit path must exist. A missing file at the default location is not
/// an error and yields the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<GamifyConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(GamifyConfig::default())
            }
        },
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<GamifyConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: GamifyConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    if config.daily.day_start_hour > 23 {
        warn!(
            day_start_hour = config.daily.day_start_hour,
            "day_start_hour out of range, clamping to 23"
        );
    }
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Render the effective config as TOML
pub fn render_config(config: &GamifyConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}
