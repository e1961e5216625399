use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::master::build_master_index;
use super::model::{sort_entries, CategoryIndex, IndexEntry, ProfileProjection};
use super::{IndexIssue, IndexIssueReason, IndexReport, MasterSummary, WrittenIndex};
use crate::error::{RegistryError, RegistryResult};
use crate::registry::layout::{derive_category, posix_label};
use crate::registry::{
    format_date, read_json_document, today, write_json_document, RegistryConfig, RegistryLayout,
    Tier,
};

/// Profiles of one tier grouped by category, plus the documents that could
/// not be read.
#[derive(Debug, Default)]
pub struct TierScan {
    pub groups: BTreeMap<String, Vec<IndexEntry>>,
    pub issues: Vec<IndexIssue>,
}

/// Regenerates every category index and the master index from the profile tree.
pub struct IndexBuilder {
    layout: RegistryLayout,
    tiers: Vec<Tier>,
    generated_on: NaiveDate,
}

impl IndexBuilder {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            layout: RegistryLayout::new(config),
            tiers: config.tiers.clone(),
            generated_on: today(),
        }
    }

    /// Overrides the date stamped into `lastUpdated`.
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    /// Runs every tier pass followed by the master pass.
    ///
    /// Individual unreadable profiles are skipped and reported; only
    /// failures to write an index abort the run.
    pub fn run(&self) -> RegistryResult<IndexReport> {
        if !self.layout.data_root.is_dir() {
            return Err(RegistryError::InputNotFound {
                path: self.layout.data_root.clone(),
            });
        }
        let mut report = IndexReport::default();
        for tier in &self.tiers {
            let tier_dir = self.layout.tier_dir(*tier);
            if !tier_dir.is_dir() {
                debug!(tier = %tier, path = %tier_dir.display(), "tier directory absent, skipping");
                continue;
            }
            info!(tier = %tier, "generating category indexes");
            let scan = self.scan_tier(*tier);
            let written = self.write_tier(*tier, scan.groups)?;
            let emptied = self.clear_stale_categories(*tier, &written)?;
            report.categories.extend(written);
            report.categories.extend(emptied);
            report.skipped.extend(scan.issues);
        }
        report.master = Some(self.write_master()?);
        Ok(report)
    }

    /// Reads every profile in the tier subtree and groups its projection by
    /// category. Groups are returned sorted.
    ///
    /// Symlinked profiles are followed. Walk errors (unreadable directories,
    /// dangling links, link cycles) are logged and reported like unreadable
    /// profiles.
    pub fn scan_tier(&self, tier: Tier) -> TierScan {
        let tier_dir = self.layout.tier_dir(tier);
        let mut scan = TierScan::default();
        for entry in WalkDir::new(&tier_dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(tier_dir.as_path()).to_path_buf();
                    warn!(path = %path.display(), error = %err, "skipping unreadable tree entry");
                    scan.issues.push(IndexIssue::new(
                        path,
                        IndexIssueReason::ReadFailure,
                        err.to_string(),
                    ));
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_json(path) || self.layout.is_index_file(path) {
                continue;
            }
            let relative = match path.strip_prefix(&tier_dir) {
                Ok(relative) => relative,
                Err(_) => continue,
            };
            match read_json_document::<ProfileProjection>(path) {
                Ok(projection) => {
                    let category = derive_category(relative);
                    scan.groups
                        .entry(category)
                        .or_default()
                        .push(projection.into_entry(posix_label(relative)));
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable profile");
                    scan.issues.push(IndexIssue::from_error(path.to_path_buf(), &err));
                }
            }
        }
        for entries in scan.groups.values_mut() {
            sort_entries(entries);
        }
        scan
    }

    fn write_tier(
        &self,
        tier: Tier,
        groups: BTreeMap<String, Vec<IndexEntry>>,
    ) -> RegistryResult<Vec<WrittenIndex>> {
        let last_updated = format_date(self.generated_on);
        let mut written = Vec::with_capacity(groups.len());
        for (category, profiles) in groups {
            let index = CategoryIndex::new(tier, category, last_updated.clone(), profiles);
            let path = self.layout.category_index_path(tier, &index.category);
            let outcome = write_json_document(&path, &index)?;
            info!(
                path = %outcome.path.display(),
                count = index.count,
                "generated category index"
            );
            written.push(WrittenIndex {
                tier,
                category: index.category,
                count: index.count,
                path: outcome.path,
                hash: outcome.hash,
            });
        }
        Ok(written)
    }

    /// Rewrites, with no profiles, any category index left over from an
    /// earlier run whose category has nothing indexable any more.
    fn clear_stale_categories(
        &self,
        tier: Tier,
        written: &[WrittenIndex],
    ) -> RegistryResult<Vec<WrittenIndex>> {
        let tier_dir = self.layout.tier_dir(tier);
        let entries = fs::read_dir(&tier_dir).map_err(|source| RegistryError::Read {
            path: tier_dir.clone(),
            source,
        })?;
        let mut stale = BTreeMap::new();
        for entry in entries.filter_map(Result::ok) {
            let category = entry.file_name().to_string_lossy().to_string();
            if written.iter().any(|w| w.category == category) {
                continue;
            }
            if self.layout.category_index_path(tier, &category).is_file() {
                stale.insert(category, Vec::new());
            }
        }
        for category in stale.keys() {
            info!(tier = %tier, category = %category, "category has no indexable profiles");
        }
        self.write_tier(tier, stale)
    }

    /// Recounts the whole tree and rewrites the master index.
    pub fn write_master(&self) -> RegistryResult<MasterSummary> {
        let master = build_master_index(&self.layout, self.generated_on)?;
        let outcome = write_json_document(&self.layout.master_index_path(), &master)?;
        info!(
            path = %outcome.path.display(),
            total = master.total_profiles,
            "generated master index"
        );
        Ok(MasterSummary {
            path: outcome.path,
            hash: outcome.hash,
            tiers: master.tiers,
            total_profiles: master.total_profiles,
            categories: master.categories,
        })
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("json")
    )
}

impl IndexIssue {
    fn from_error(path: std::path::PathBuf, err: &RegistryError) -> Self {
        let reason = match err {
            RegistryError::Malformed { .. } => IndexIssueReason::Malformed,
            _ => IndexIssueReason::ReadFailure,
        };
        IndexIssue::new(path, reason, err.to_string())
    }
}
