//! JSON Schema gate for profile documents.
//!
//! The schema is compiled once per [`ProfileValidator`] and reused for every
//! document checked with it. Only the first violation is reported.

use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use serde_json::Value;
use std::path::Path;

use crate::error::{RegistryError, RegistryResult};
use crate::registry::read_json_document;

/// Process exit status for a conformant document.
pub const EXIT_VALID: i32 = 0;
/// Process exit status for a document that violates the schema.
pub const EXIT_INVALID: i32 = 1;
/// Process exit status when the document or schema could not be loaded.
pub const EXIT_INPUT_ERROR: i32 = 2;

/// First schema violation found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the offending value as path segments. For a missing
    /// required property the last segment is the property itself.
    pub path: Vec<String>,
    pub message: String,
}

impl Violation {
    /// Segments joined with ` -> `, empty for the document root.
    pub fn display_path(&self) -> String {
        self.path.join(" -> ")
    }

    /// RFC 6901 pointer to the offending location.
    pub fn pointer(&self) -> String {
        self.path
            .iter()
            .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Violation),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ValidationOutcome::Valid => EXIT_VALID,
            ValidationOutcome::Invalid(_) => EXIT_INVALID,
        }
    }

    /// Operator-facing report for `subject` (usually the document path).
    pub fn report(&self, subject: &str) -> String {
        match self {
            ValidationOutcome::Valid => format!("[VALID] {subject} is valid!"),
            ValidationOutcome::Invalid(violation) => format!(
                "[INVALID] {subject} is invalid:\n  Error: {}\n  Path: {}",
                violation.message,
                violation.display_path()
            ),
        }
    }
}

/// Compiled profile schema.
pub struct ProfileValidator {
    validator: Validator,
}

impl ProfileValidator {
    /// Loads and compiles the schema at `schema_path`.
    pub fn load(schema_path: &Path) -> RegistryResult<Self> {
        let schema: Value = read_json_document(schema_path)?;
        Self::from_schema(schema_path, &schema)
    }

    /// Compiles an in-memory schema; `origin` only labels errors.
    pub fn from_schema(origin: &Path, schema: &Value) -> RegistryResult<Self> {
        let validator =
            jsonschema::validator_for(schema).map_err(|err| RegistryError::SchemaLoad {
                path: origin.to_path_buf(),
                reason: err.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Checks a parsed document, stopping at the first violation.
    pub fn validate(&self, document: &Value) -> ValidationOutcome {
        match self.validator.iter_errors(document).next() {
            None => ValidationOutcome::Valid,
            Some(err) => {
                let mut path = pointer_segments(&err.instance_path.to_string());
                if let ValidationErrorKind::Required {
                    property: Value::String(property),
                } = &err.kind
                {
                    path.push(property.clone());
                }
                ValidationOutcome::Invalid(Violation {
                    path,
                    message: err.to_string(),
                })
            }
        }
    }

    /// Loads the document at `path` and checks it.
    ///
    /// A missing, unreadable, or unparseable document is an `Err`, kept apart
    /// from a document that parses but violates the schema.
    pub fn validate_file(&self, path: &Path) -> RegistryResult<ValidationOutcome> {
        let document: Value = read_json_document(path)?;
        Ok(self.validate(&document))
    }
}

fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}
