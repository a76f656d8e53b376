//! Application configuration model (`config.toml`).
//!
//! Every section and key is optional; missing values fall back to defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::DomainId;
use crate::session::Stage;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated latency per processing stage, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DispatcherConfig {
    pub searching_ms: u64,
    pub generating_ms: u64,
    pub loading_ms: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            searching_ms: 800,
            generating_ms: 700,
            loading_ms: 1200,
        }
    }
}

impl DispatcherConfig {
    /// Configuration with every delay set to zero.
    pub fn immediate() -> Self {
        Self {
            searching_ms: 0,
            generating_ms: 0,
            loading_ms: 0,
        }
    }

    /// Delay spent in `stage`. Idle has none.
    pub fn stage_delay(&self, stage: Stage) -> Duration {
        let ms = match stage {
            Stage::Idle => 0,
            Stage::Searching => self.searching_ms,
            Stage::Generating => self.generating_ms,
            Stage::Loading => self.loading_ms,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Domain a new session starts in.
    pub default_domain: DomainId,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [dispatcher]
            loading_ms = 50

            [session]
            default_domain = "sales"
            "#,
        )
        .unwrap();
        assert_eq!(config.dispatcher.loading_ms, 50);
        assert_eq!(config.dispatcher.searching_ms, 800);
        assert_eq!(config.session.default_domain, DomainId::Sales);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_stage_delay() {
        let config = DispatcherConfig::default();
        assert_eq!(config.stage_delay(Stage::Searching), Duration::from_millis(800));
        assert_eq!(config.stage_delay(Stage::Generating), Duration::from_millis(700));
        assert_eq!(config.stage_delay(Stage::Loading), Duration::from_millis(1200));
        assert_eq!(config.stage_delay(Stage::Idle), Duration::ZERO);
        assert_eq!(
            DispatcherConfig::immediate().stage_delay(Stage::Loading),
            Duration::ZERO
        );
    }
}
