//! Graph configuration.
//!
//! Configuration is layered with figment: built-in defaults, then an
//! optional TOML file, then `ADJGRAPH_*` environment variables
//! (`__` separates nested keys, e.g. `ADJGRAPH_LIMITS__MAX_VERTICES=10000`).
//!
//! ```toml
//! [capacity]
//! vertices = 1024
//! edges = 4096
//!
//! [limits]
//! max_vertices = 100000
//! max_walk_length = 256
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ADJGRAPH_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider failed or a value could not be deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// The configuration was loaded but is not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level graph configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Pre-allocation hints.
    pub capacity: CapacityConfig,
    /// Resource limits.
    pub limits: LimitsConfig,
}

/// Pre-allocation hints for the vertex and edge tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Expected number of vertices.
    pub vertices: usize,
    /// Expected number of edge records.
    pub edges: usize,
}

/// Resource limits enforced by the graph engine. Both are unbounded by
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of vertices (`None` = unbounded).
    pub max_vertices: Option<usize>,
    /// Longest walk `exist_path_with_length` will evaluate (`None` = unbounded).
    pub max_walk_length: Option<usize>,
}

impl GraphConfig {
    /// Loads configuration from defaults, a TOML file and the environment.
    ///
    /// A missing file is not an error: figment treats it as an empty layer.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Toml::file(path.as_ref())).merge(Self::env()))
    }

    /// Loads configuration from defaults and the environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Self::env()))
    }

    /// Parses configuration from a TOML string layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Toml::string(toml)))
    }

    /// Checks the configuration for values the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_walk_length == Some(0) {
            return Err(ConfigError::Invalid(
                "limits.max_walk_length must be at least 1 when set".to_string(),
            ));
        }
        if self.limits.max_vertices == Some(0) {
            return Err(ConfigError::Invalid(
                "limits.max_vertices must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(GraphConfig::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: GraphConfig = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
