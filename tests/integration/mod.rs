use bizregistry::registry::{RegistryConfig, Tier};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary repository root with a `data/` tree and a copy of the schema.
pub struct RegistryHarness {
    workspace: TempDir,
}

impl RegistryHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        let schema_dir = workspace.path().join("schema");
        fs::create_dir_all(&schema_dir).expect("failed to create schema dir");
        fs::copy(repo_schema_path(), schema_dir.join("business-profile-v1.0.json"))
            .expect("failed to copy schema");
        fs::create_dir_all(workspace.path().join("data")).expect("failed to create data dir");
        Self { workspace }
    }

    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    pub fn config(&self) -> RegistryConfig {
        RegistryConfig::load(self.root()).expect("failed to load registry config")
    }

    pub fn tier_dir(&self, tier: Tier) -> PathBuf {
        self.config().data_root.join(tier.as_str())
    }

    /// Writes `value` at `<data>/<tier>/<relative>`.
    pub fn write_profile(&self, tier: Tier, relative: &str, value: &Value) -> PathBuf {
        let path = self.tier_dir(tier).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        path
    }

    pub fn write_raw(&self, tier: Tier, relative: &str, contents: &str) -> PathBuf {
        let path = self.tier_dir(tier).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_json(&self, path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }
}

pub fn repo_schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("schema")
        .join("business-profile-v1.0.json")
}

mod profile_synthesis;
mod profile_validation;
pub mod support;

#[test]
fn bundled_schema_exists() {
    assert!(
        repo_schema_path().exists(),
        "Expected schema to exist: {}",
        repo_schema_path().display()
    );
}
