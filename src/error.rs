use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the registry utilities.
///
/// Each variant carries enough context (path, field, cause) for an operator
/// to fix the offending input.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("input file {} does not exist", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("required field `{field}` is missing or empty")]
    MissingField { field: String },

    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("field `{field}` cannot be converted to an integer (got {value})")]
    TypeCoercion { field: String, value: String },

    #[error("failed to load schema {}: {reason}", path.display())]
    SchemaLoad { path: PathBuf, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load configuration {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
