//! Configuration primitives for the profile registry.
//!
//! Stored in an optional TOML file at `<repo>/registry.toml`. Every field has
//! a default matching the standard repository layout, so a checkout without
//! the file behaves exactly like one with an empty file. Relative paths are
//! resolved against the repository root.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Tier;
use crate::error::{RegistryError, RegistryResult};

/// Environment variable naming the repository root.
pub const HOME_ENV_VAR: &str = "BIZREGISTRY_HOME";
/// Name of the optional configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = "registry.toml";

/// Root configuration for every registry utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory holding the tier subdirectories and the master index.
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    /// JSON Schema every profile document must satisfy.
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,
    /// Tiers scanned by the index builder, in processing order.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<Tier>,
    /// Reserved filename of generated index documents.
    #[serde(default = "default_index_file_name")]
    pub index_file_name: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            schema_path: default_schema_path(),
            tiers: default_tiers(),
            index_file_name: default_index_file_name(),
        }
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from("data")
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("schema").join("business-profile-v1.0.json")
}

fn default_tiers() -> Vec<Tier> {
    vec![Tier::Verified, Tier::Community, Tier::Enterprise]
}

fn default_index_file_name() -> String {
    "index.json".to_string()
}

impl RegistryConfig {
    /// Default configuration with every relative path anchored at `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self::default().anchored_at(root.as_ref())
    }

    /// Loads `<root>/registry.toml` when present, otherwise the defaults.
    pub fn load(root: impl AsRef<Path>) -> RegistryResult<Self> {
        let root = root.as_ref();
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::for_root(root));
        }
        let data = fs::read_to_string(&path).map_err(|source| RegistryError::Read {
            path: path.clone(),
            source,
        })?;
        let cfg: RegistryConfig = toml::from_str(&data).map_err(|err| RegistryError::Config {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        Ok(cfg.anchored_at(root))
    }

    fn anchored_at(mut self, root: &Path) -> Self {
        if self.data_root.is_relative() {
            self.data_root = root.join(&self.data_root);
        }
        if self.schema_path.is_relative() {
            self.schema_path = root.join(&self.schema_path);
        }
        self
    }
}

/// Returns the repository root the utilities operate on.
///
/// Order of precedence:
/// 1. An explicit override (the binaries' `--root` flag).
/// 2. `BIZREGISTRY_HOME` environment variable.
/// 3. The current working directory.
pub fn repository_root(explicit: Option<&Path>) -> RegistryResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    env::current_dir().map_err(|source| RegistryError::Read {
        path: PathBuf::from("."),
        source,
    })
}
