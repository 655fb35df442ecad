//! Server configuration loaded from defaults, config file, and environment

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Projectboard server configuration
///
/// Resolution order: built-in defaults, then the config file if present,
/// then `PROJECTBOARD_HOST` and `PROJECTBOARD_PORT` from the environment.
/// Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("PROJECTBOARD_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("projectboard")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file if it exists, then apply environment
    /// overrides
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(host) = env::var("PROJECTBOARD_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PROJECTBOARD_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid PROJECTBOARD_PORT value: {port}"))?;
        }

        Ok(config)
    }

    /// The bind address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };

        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let config: ServerConfig = toml::from_str("port = 4000").expect("Should parse");

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let config: ServerConfig =
            toml::from_str("host = \"192.168.0.7\"\nport = 9000").expect("Should parse");

        assert_eq!(config.host, "192.168.0.7");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        toml::from_str::<ServerConfig>("port = \"not a number\"")
            .expect_err("Should reject non-numeric port");
    }
}
