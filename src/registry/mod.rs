//! Registry-wide primitives: tiers, configuration, on-disk layout, and the
//! JSON storage helpers shared by every utility.

mod config;
pub mod layout;
pub mod storage;

pub use config::{repository_root, RegistryConfig, CONFIG_FILE_NAME, HOME_ENV_VAR};
pub use layout::RegistryLayout;
pub use storage::{read_json_document, write_json_document, DocumentWriteOutcome};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renders a date the way every registry document stores it (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The local calendar date used to stamp generated documents.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Trust/verification bucket a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Verified,
    Community,
    Enterprise,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Verified => "verified",
            Tier::Community => "community",
            Tier::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
