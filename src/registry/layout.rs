//! Shared filesystem layout helpers for the registry data tree.
//!
//! Profiles live under `<data root>/<tier>/<category>/`. Centralizing the
//! path arithmetic here keeps the index builder and the binaries agreeing on
//! where generated index documents land.

use std::path::{Path, PathBuf};

use super::{RegistryConfig, Tier};

/// Category assigned to profiles stored directly in a tier root.
pub const FALLBACK_CATEGORY: &str = "other";

/// Convenience wrapper for locating registry paths from a configuration.
#[derive(Debug, Clone)]
pub struct RegistryLayout {
    pub data_root: PathBuf,
    pub index_file_name: String,
}

impl RegistryLayout {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            data_root: config.data_root.clone(),
            index_file_name: config.index_file_name.clone(),
        }
    }

    /// Root directory of a tier's subtree.
    pub fn tier_dir(&self, tier: Tier) -> PathBuf {
        self.data_root.join(tier.as_str())
    }

    /// Path of the generated index for one category of a tier.
    pub fn category_index_path(&self, tier: Tier, category: &str) -> PathBuf {
        self.tier_dir(tier)
            .join(category)
            .join(&self.index_file_name)
    }

    /// Path of the registry-wide master index.
    pub fn master_index_path(&self) -> PathBuf {
        self.data_root.join(&self.index_file_name)
    }

    /// True when `path` names a generated index document rather than a profile.
    pub fn is_index_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name == self.index_file_name)
            .unwrap_or(false)
    }
}

/// Derives the category of a profile from its path relative to the tier root.
///
/// A profile nested one or more directories deep belongs to the first
/// directory segment; one stored directly in the tier root falls into
/// [`FALLBACK_CATEGORY`].
pub fn derive_category(relative: &Path) -> String {
    let mut parts = relative.components();
    match (parts.next(), parts.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().to_string(),
        _ => FALLBACK_CATEGORY.to_string(),
    }
}

/// Renders a relative path with `/` separators regardless of platform.
pub fn posix_label(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
