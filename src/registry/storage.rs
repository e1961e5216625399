//! Filesystem helpers for reading and writing registry JSON documents.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{RegistryError, RegistryResult};

/// Result returned after writing a document.
#[derive(Debug, Clone)]
pub struct DocumentWriteOutcome {
    pub path: PathBuf,
    pub hash: String,
}

/// Loads and parses a JSON document, distinguishing a missing file from an
/// unreadable or unparseable one.
pub fn read_json_document<T: DeserializeOwned>(path: &Path) -> RegistryResult<T> {
    if !path.exists() {
        return Err(RegistryError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let data = fs::read(path).map_err(|source| RegistryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| RegistryError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a pretty-printed JSON document and returns its SHA-256 digest.
///
/// The payload is staged in a temporary file next to the destination and
/// renamed into place, so a failed write never leaves a truncated document.
/// Missing parent directories are created.
pub fn write_json_document<T: Serialize>(
    path: &Path,
    value: &T,
) -> RegistryResult<DocumentWriteOutcome> {
    let write_err = |source: io::Error| RegistryError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(write_err)?;
    let payload = serde_json::to_vec_pretty(value).map_err(|err| write_err(io::Error::other(err)))?;
    let mut staged = NamedTempFile::new_in(&parent).map_err(write_err)?;
    staged.write_all(&payload).map_err(write_err)?;
    staged.flush().map_err(write_err)?;
    staged.persist(path).map_err(|err| write_err(err.error))?;
    Ok(DocumentWriteOutcome {
        path: path.to_path_buf(),
        hash: compute_hash(&payload),
    })
}

fn compute_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
