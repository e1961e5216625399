//! Typed shape of a business profile document.
//!
//! Optional sections are `Option`s skipped during serialization, so a
//! document never carries `null` placeholders for data it does not have.
//! Sections whose inner structure is owned by the schema rather than by
//! this crate (identifiers, headquarters, offerings) stay opaque JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::Tier;

/// Schema version stamped on every synthesized profile.
pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub schema_version: String,
    pub business_identifier: BusinessIdentifier,
    pub description: Description,
    pub verification: Verification,
    pub metadata: ProfileMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offerings: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdentifier {
    pub legal_name: String,
    pub common_name: String,
    pub primary_domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_founded: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founding: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub status: Tier,
    pub tier: Tier,
    pub method: String,
    pub last_verified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    pub date_added: String,
    pub last_updated: String,
    pub submitted_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub headquarters: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Evidence backing a profile. Keys beyond the four known ones are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
