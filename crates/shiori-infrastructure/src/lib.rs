//! Filesystem side of shiori: config file location and loading.

pub mod config_service;
pub mod paths;

pub use config_service::ConfigService;
pub use paths::ShioriPaths;
