//! HTTP listener configuration.

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("SCORESIGHT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid SCORESIGHT_PORT: {}", raw))?,
            None => 8000,
        };

        Ok(Self {
            bind_address: lookup("SCORESIGHT_BIND_ADDRESS")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
        })
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
