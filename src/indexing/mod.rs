//! Discovery index generation over the profile tree.

pub mod builder;
pub mod master;
pub mod model;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::registry::Tier;

pub use builder::{IndexBuilder, TierScan};
pub use master::build_master_index;
pub use model::{sort_entries, CategoryIndex, IndexEntry, MasterIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexIssueReason {
    ReadFailure,
    Malformed,
}

/// A profile document left out of the indexes.
#[derive(Debug, Clone)]
pub struct IndexIssue {
    pub path: PathBuf,
    pub reason: IndexIssueReason,
    pub message: String,
}

impl IndexIssue {
    pub fn new(path: PathBuf, reason: IndexIssueReason, message: impl Into<String>) -> Self {
        Self {
            path,
            reason,
            message: message.into(),
        }
    }
}

/// One category index written during a run.
#[derive(Debug, Clone)]
pub struct WrittenIndex {
    pub tier: Tier,
    pub category: String,
    pub count: usize,
    pub path: PathBuf,
    pub hash: String,
}

#[derive(Debug, Clone)]
pub struct MasterSummary {
    pub path: PathBuf,
    pub hash: String,
    pub tiers: BTreeMap<String, usize>,
    pub total_profiles: usize,
    pub categories: Vec<String>,
}

/// Result of a full index generation run.
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    pub categories: Vec<WrittenIndex>,
    pub skipped: Vec<IndexIssue>,
    pub master: Option<MasterSummary>,
}

impl IndexReport {
    /// Number of profiles listed across every written category index.
    pub fn indexed_profiles(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }

    /// Human-readable run summary, one line per written index.
    pub fn describe(&self) -> String {
        let mut lines: Vec<String> = self
            .categories
            .iter()
            .map(|c| format!("Generated index: {} ({} profiles)", c.path.display(), c.count))
            .collect();
        for issue in &self.skipped {
            lines.push(format!(
                "Skipped {} ({:?}): {}",
                issue.path.display(),
                issue.reason,
                issue.message
            ));
        }
        if let Some(master) = &self.master {
            lines.push(format!("Generated master index: {}", master.path.display()));
            lines.push(format!("Total profiles: {}", master.total_profiles));
        }
        lines.join("\n")
    }
}
