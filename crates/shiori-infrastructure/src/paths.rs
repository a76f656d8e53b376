//! Path management for shiori configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/shiori/            # Config directory (platform config dir)
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── shiori.log.YYYY-MM-DD
//! ```
//!
//! Setting `SHIORI_CONFIG` points at another config file; logs then live in
//! a `logs/` directory next to it.

use std::ffi::OsString;
use std::path::PathBuf;

use shiori_core::{Result, ShioriError};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SHIORI_CONFIG";

const APP_DIR: &str = "shiori";
const CONFIG_FILE: &str = "config.toml";
const LOGS_DIR: &str = "logs";

pub struct ShioriPaths;

impl ShioriPaths {
    /// Returns the default shiori configuration directory
    /// (e.g., `~/.config/shiori/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ShioriError::config("cannot determine the config directory"))
    }

    /// Returns the path to the configuration file, honoring `SHIORI_CONFIG`.
    pub fn config_file() -> Result<PathBuf> {
        Self::config_file_from(std::env::var_os(CONFIG_ENV))
    }

    /// Returns the directory for rolling log files.
    pub fn logs_dir() -> Result<PathBuf> {
        let config_file = Self::config_file()?;
        let base = match config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(base.join(LOGS_DIR))
    }

    fn config_file_from(override_path: Option<OsString>) -> Result<PathBuf> {
        match override_path {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::config_dir()?.join(CONFIG_FILE)),
        }
    }
}
