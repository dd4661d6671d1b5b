//! Contact list persistence
//!
//! The store is the boundary between the contact list and its JSON file.
//! Loads validate every element against the schema before any record is
//! handed to the caller; a single nonconforming element fails the whole
//! load. Saves overwrite the file in full with indented JSON.
//!
//! There is no locking: concurrent invocations against the same file race
//! and the last writer wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::record::{ContactList, Record};
use crate::schema::SchemaValidator;

/// Failures while loading or saving the contact file
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Contact file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to access contact file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Contact file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Contact file {path} must contain a top-level JSON array")]
    NotAnArray { path: PathBuf },

    #[error("Record {index} in {path} does not conform to the contact schema")]
    InvalidRecord { path: PathBuf, index: usize },

    #[error("Failed to serialize contact list: {source}")]
    Serialize { source: serde_json::Error },
}

/// The load/save boundary for one contact file
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the full contact list, validating every record.
    ///
    /// A single nonconforming element rejects the whole file; no partial
    /// list is ever returned.
    pub fn load(&self, validator: &SchemaValidator) -> Result<ContactList, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(self.path.clone())
            } else {
                StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        let elements = document.as_array().ok_or_else(|| StoreError::NotAnArray {
            path: self.path.clone(),
        })?;

        let mut records = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if !validator.is_valid(element) {
                return Err(StoreError::InvalidRecord {
                    path: self.path.clone(),
                    index,
                });
            }

            let record: Record = serde_json::from_value(element.clone()).map_err(|_| {
                StoreError::InvalidRecord {
                    path: self.path.clone(),
                    index,
                }
            })?;
            records.push(record);
        }

        Ok(ContactList::from_records(records))
    }

    /// Write the full contact list back to the file.
    ///
    /// Overwrites in place with indented JSON; non-ASCII values are written
    /// literally. The list is assumed valid, nothing is re-checked here.
    pub fn save(&self, list: &ContactList) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(list)
            .map_err(|e| StoreError::Serialize { source: e })?;

        fs::write(&self.path, content).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}
