//! Configuration loading from pagetool.toml.

use policy::Policy;
use serde::Deserialize;
use std::path::Path;
use toolkit::{DEFAULT_ID_ATTRIBUTE, Resolver};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub log: LogConfig,

    /// Policy rules (allow/deny).
    #[serde(flatten)]
    pub policy: Policy,
}

/// Element locator settings.
#[derive(Debug, Deserialize)]
pub struct ResolverConfig {
    /// Attribute that carries logical element identifiers.
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            id_attribute: default_id_attribute(),
        }
    }
}

fn default_id_attribute() -> String {
    DEFAULT_ID_ATTRIBUTE.to_string()
}

/// Logging settings. `PAGETOOL_LOG` takes precedence.
#[derive(Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.resolver.id_attribute.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
