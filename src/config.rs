//! Runtime configuration.
//!
//! Settings live in an optional `factory.toml`:
//!
//! ```toml
//! sets_path = "data/battle_factory_pokemon.json"
//! base_stats_path = "data/base_stats.json"
//! cache_datasets = true
//! ```
//!
//! Every field is optional. Environment variables override the file:
//! - `FACTORY_CONFIG` - config file to read instead of `./factory.toml`
//! - `FACTORY_SETS_PATH` - combatant-set dataset
//! - `FACTORY_BASE_STATS_PATH` - base-stat dataset

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::store::{DEFAULT_BASE_STATS_PATH, DEFAULT_SETS_PATH};

const DEFAULT_CONFIG_FILE: &str = "factory.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub sets_path: PathBuf,
    pub base_stats_path: PathBuf,
    /// Reuse parsed datasets until their files change.
    pub cache_datasets: bool,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            sets_path: PathBuf::from(DEFAULT_SETS_PATH),
            base_stats_path: PathBuf::from(DEFAULT_BASE_STATS_PATH),
            cache_datasets: true,
        }
    }
}

impl FactoryConfig {
    /// Read a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file named by `FACTORY_CONFIG`, or `./factory.toml`.
    ///
    /// Missing or unreadable files fall back to defaults.
    pub fn discover() -> Self {
        let path = env::var_os("FACTORY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Apply `FACTORY_SETS_PATH` and `FACTORY_BASE_STATS_PATH`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = env::var_os("FACTORY_SETS_PATH") {
            self.sets_path = PathBuf::from(path);
        }
        if let Some(path) = env::var_os("FACTORY_BASE_STATS_PATH") {
            self.base_stats_path = PathBuf::from(path);
        }
        self
    }
}
