//! Configuration module for ScoreSight.
//!
//! Structured configuration loaded from environment variables, organized by
//! concern: Artifacts, Server, and Observability.

mod artifact_config;
mod observability_config;
mod server_config;

pub use artifact_config::ArtifactEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub artifacts: ArtifactEnvConfig,
    pub server: ServerEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?;

        Ok(Self {
            artifacts: ArtifactEnvConfig::from_lookup(&lookup),
            server,
            observability: ObservabilityEnvConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = Config::from_lookup(|_| None).expect("Should parse with defaults");
        assert_eq!(config.server.port, 8000);
        assert!(config.artifacts.artifacts_dir.is_none());
        assert!(config.observability.enabled);
    }

    #[test]
    fn test_config_from_map() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SCORESIGHT_ARTIFACTS_DIR", "/tmp/models"),
            ("SCORESIGHT_PORT", "8080"),
            ("OBSERVABILITY_ENABLED", "false"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.artifacts.artifacts_dir.as_deref(),
            Some(std::path::Path::new("/tmp/models"))
        );
        assert!(!config.observability.enabled);
    }

    #[test]
    fn test_bad_port_fails_whole_config() {
        let err = Config::from_lookup(|key| (key == "SCORESIGHT_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("SCORESIGHT_PORT"));
    }
}
