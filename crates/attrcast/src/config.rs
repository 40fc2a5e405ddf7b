//! Configuration loading and types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the attrcast agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Attribute store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Report cycle settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Agent process settings
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Attribute store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the attribute store
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Attribute path prefix all inventory attributes are written under
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            base_path: default_base_path(),
        }
    }
}

/// Report cycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Seconds between report cycles
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// Agent process settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_base_path() -> String {
    "/guestInventory".to_string()
}

fn default_interval_secs() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &PathBuf) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from default paths or use defaults
    pub fn load_default() -> eyre::Result<Self> {
        // Check environment variable
        if let Ok(path) = std::env::var("ATTRCAST_CONFIG") {
            return Self::load(&PathBuf::from(path));
        }

        // Try common paths
        let paths = [
            PathBuf::from("attrcast.toml"),
            PathBuf::from("/etc/attrcast/attrcast.toml"),
            dirs::config_dir()
                .map(|p| p.join("attrcast/attrcast.toml"))
                .unwrap_or_default(),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        // Return default config if no file found
        tracing::warn!("no config file found, using defaults");
        Ok(Config::default())
    }
}
