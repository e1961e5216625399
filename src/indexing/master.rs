use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use super::builder::is_json;
use super::model::MasterIndex;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::{format_date, RegistryLayout};

/// Counts profiles per tier directory and collects every category name.
///
/// Every non-hidden directory under the data root counts as a tier, and
/// only profiles stored directly inside a category directory are counted.
pub fn build_master_index(layout: &RegistryLayout, date: NaiveDate) -> RegistryResult<MasterIndex> {
    let mut tiers = BTreeMap::new();
    let mut categories = BTreeSet::new();
    let mut total_profiles = 0;

    for tier_dir in subdirectories(&layout.data_root)? {
        let Some(tier_name) = dir_name(&tier_dir) else {
            continue;
        };
        if tier_name.starts_with('.') {
            continue;
        }
        let mut tier_count = 0;
        for category_dir in subdirectories(&tier_dir)? {
            let Some(category) = dir_name(&category_dir) else {
                continue;
            };
            tier_count += count_profiles(layout, &category_dir)?;
            categories.insert(category);
        }
        total_profiles += tier_count;
        tiers.insert(tier_name, tier_count);
    }

    Ok(MasterIndex {
        last_updated: format_date(date),
        tiers,
        total_profiles,
        categories: categories.into_iter().collect(),
    })
}

fn count_profiles(layout: &RegistryLayout, category_dir: &Path) -> RegistryResult<usize> {
    let mut count = 0;
    for entry in read_dir(category_dir)? {
        let path = entry.path();
        if path.is_file() && is_json(&path) && !layout.is_index_file(&path) {
            count += 1;
        }
    }
    Ok(count)
}

fn subdirectories(dir: &Path) -> RegistryResult<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = read_dir(dir)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn read_dir(dir: &Path) -> RegistryResult<Vec<fs::DirEntry>> {
    let read_err = |source| RegistryError::Read {
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
}
