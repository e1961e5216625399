//! Wire shapes of the generated index documents and the profile projection
//! they are built from.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use tracing::warn;

use crate::registry::Tier;

/// Discovery index for one category of one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIndex {
    pub tier: Tier,
    pub last_updated: String,
    pub count: usize,
    pub category: String,
    pub profiles: Vec<IndexEntry>,
}

impl CategoryIndex {
    pub fn new(
        tier: Tier,
        category: String,
        last_updated: String,
        profiles: Vec<IndexEntry>,
    ) -> Self {
        Self {
            tier,
            last_updated,
            count: profiles.len(),
            category,
            profiles,
        }
    }
}

/// Summary of one profile as listed in a category index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub file: String,
    pub domain: String,
    pub common_name: String,
    pub legal_name: String,
    pub last_verified: String,
    pub quality_score: Option<Number>,
}

/// Registry-wide counts across every tier directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterIndex {
    pub last_updated: String,
    pub tiers: BTreeMap<String, usize>,
    pub total_profiles: usize,
    pub categories: Vec<String>,
}

/// The subset of a profile document the index needs. Deserialization fails
/// when any required field is missing, which marks the document as skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileProjection {
    business_identifier: IdentifierProjection,
    verification: VerificationProjection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentifierProjection {
    primary_domain: String,
    common_name: String,
    legal_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerificationProjection {
    last_verified: String,
    #[serde(default)]
    quality_score: Option<Value>,
}

impl ProfileProjection {
    /// A `qualityScore` that is not a number is listed as `null` rather than
    /// dropping the profile from its index.
    pub(crate) fn into_entry(self, file: String) -> IndexEntry {
        let quality_score = match self.verification.quality_score {
            Some(Value::Number(score)) => Some(score),
            None | Some(Value::Null) => None,
            Some(other) => {
                warn!(file = %file, value = %other, "ignoring non-numeric qualityScore");
                None
            }
        };
        IndexEntry {
            file,
            domain: self.business_identifier.primary_domain,
            common_name: self.business_identifier.common_name,
            legal_name: self.business_identifier.legal_name,
            last_verified: self.verification.last_verified,
            quality_score,
        }
    }
}

/// Orders entries by common name, ignoring case. Equal names keep their
/// enumeration order.
pub fn sort_entries(entries: &mut [IndexEntry]) {
    entries.sort_by_key(|entry| entry.common_name.to_lowercase());
}
