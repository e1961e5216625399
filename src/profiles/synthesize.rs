//! Builds a profile document from a loosely-structured community submission.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

use super::model::{
    BusinessIdentifier, Contact, Description, Location, ProfileDocument, ProfileMetadata, Source,
    Verification, SCHEMA_VERSION,
};
use crate::error::{RegistryError, RegistryResult};
use crate::registry::{format_date, read_json_document, Tier};

const SELF_REPORTED_METHOD: &str = "self-reported";
const DEFAULT_SUBMITTER: &str = "Community";
const DEFAULT_SOURCE_KIND: &str = "official-website";
const DEFAULT_SOURCE_DESCRIPTION: &str = "Company website";

/// Raw submission record: arbitrary string keys mapped to JSON values.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    fields: Map<String, Value>,
}

impl Submission {
    pub fn from_value(value: Value) -> RegistryResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RegistryError::InvalidField {
                field: "submission".into(),
                reason: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
        }
    }

    /// Reads a submission document from disk.
    pub fn load(path: &Path) -> RegistryResult<Self> {
        Self::from_value(read_json_document(path)?)
    }

    /// Returns the value for `key` only when it is present and non-empty.
    ///
    /// `null`, `false`, zero, and empty strings, lists, or objects all count
    /// as absent.
    pub fn present(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| is_present(value))
    }

    fn string(&self, key: &str) -> RegistryResult<Option<String>> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(RegistryError::InvalidField {
                field: key.into(),
                reason: format!("expected a string, found {}", kind_of(other)),
            }),
        }
    }

    fn required_string(&self, key: &str) -> RegistryResult<String> {
        self.string(key)?
            .ok_or_else(|| RegistryError::MissingField { field: key.into() })
    }

    fn typed<T: DeserializeOwned>(&self, key: &str) -> RegistryResult<Option<T>> {
        self.present(key)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|err| RegistryError::InvalidField {
                    field: key.into(),
                    reason: err.to_string(),
                })
            })
            .transpose()
    }
}

/// Synthesizes an unverified community profile dated `today`.
///
/// Fails fast when `legalName` or `primaryDomain` is missing, when
/// `yearFounded` is not numeric, or when a known field has the wrong shape.
pub fn synthesize_profile(
    submission: &Submission,
    today: NaiveDate,
) -> RegistryResult<ProfileDocument> {
    let today = format_date(today);
    let legal_name = submission.required_string("legalName")?;
    let primary_domain = submission.required_string("primaryDomain")?;
    let common_name = submission
        .string("commonName")?
        .unwrap_or_else(|| legal_name.clone());

    let business_identifier = BusinessIdentifier {
        legal_name,
        common_name,
        primary_domain: primary_domain.clone(),
        aliases: submission.typed("aliases")?,
        identifiers: submission.present("identifiers").cloned(),
    };

    let description = Description {
        elevator: submission.string("elevator")?,
        detailed: submission.string("detailed")?,
        year_founded: submission
            .present("yearFounded")
            .map(|value| coerce_integer("yearFounded", value))
            .transpose()?,
        founding: submission.present("founding").cloned(),
    };

    let contact = Contact {
        email: submission.string("email")?,
        phone: submission.string("phone")?,
    };
    let contact = (contact.email.is_some() || contact.phone.is_some()).then_some(contact);

    let sources = match submission.typed::<Vec<Source>>("sources")? {
        Some(sources) => sources,
        None => vec![default_source(&primary_domain, &today)],
    };

    Ok(ProfileDocument {
        schema_version: SCHEMA_VERSION.to_string(),
        business_identifier,
        description,
        verification: Verification {
            status: Tier::Community,
            tier: Tier::Community,
            method: SELF_REPORTED_METHOD.to_string(),
            last_verified: today.clone(),
            quality_score: None,
        },
        metadata: ProfileMetadata {
            date_added: today.clone(),
            last_updated: today,
            submitted_by: submission
                .string("submittedBy")?
                .unwrap_or_else(|| DEFAULT_SUBMITTER.to_string()),
        },
        location: submission
            .present("headquarters")
            .cloned()
            .map(|headquarters| Location { headquarters }),
        contact,
        offerings: submission.present("offerings").cloned(),
        sources: Some(sources),
    })
}

fn default_source(primary_domain: &str, today: &str) -> Source {
    Source {
        kind: DEFAULT_SOURCE_KIND.to_string(),
        url: format!("https://{primary_domain}"),
        accessed: Some(today.to_string()),
        description: Some(DEFAULT_SOURCE_DESCRIPTION.to_string()),
        extra: Map::new(),
    }
}

/// Integers pass through, floats truncate toward zero, numeric strings parse.
fn coerce_integer(field: &str, value: &Value) -> RegistryResult<i64> {
    let failure = || RegistryError::TypeCoercion {
        field: field.into(),
        value: value.to_string(),
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })
            .ok_or_else(failure),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| failure()),
        _ => Err(failure()),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
