//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/shiori/config.toml).

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use shiori_core::config::RootConfig;
use shiori_core::{Result, ShioriError};

use crate::paths::ShioriPaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file is not an error: the defaults are used. A file that exists
/// but does not parse is reported and not cached, so a fixed file is picked up
/// by the next call.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ShioriPaths::config_file()?))
    }

    /// Creates a service reading from an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = Self::load_from(&self.path)?;

        let mut cache = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cache = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cache = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cache = None;
    }

    /// Reads and parses a config file without caching.
    pub fn load_from(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                path.display()
            );
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ShioriError::io(format!("{}: {}", path.display(), e)))?;
        let config: RootConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] Loaded {}", path.display());
        Ok(config)
    }
}
