//! Contact schema validation
//!
//! The record shape lives in an external JSON Schema document rather than
//! in code. The document is read and compiled once per invocation; the
//! compiled validator is reused for every check.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::record::Record;

/// Fixed name of the schema resource, resolved against the working directory
pub const SCHEMA_FILE: &str = "schema.json";

/// Failures around the schema resource itself. No record can be validated
/// without a usable schema, so all of these abort the invocation.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Schema file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Schema file {path} is not a usable JSON Schema: {message}")]
    Compile { path: PathBuf, message: String },
}

/// A candidate record rejected by the schema
#[derive(Error, Debug)]
#[error("Record does not conform to the contact schema: {0}")]
pub struct SchemaViolation(pub String);

/// Compiled contact schema
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Load and compile a schema document
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SchemaError::NotFound(path.to_path_buf())
            } else {
                SchemaError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| SchemaError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let validator =
            jsonschema::validator_for(&document).map_err(|e| SchemaError::Compile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self { validator })
    }

    /// Load the schema from its conventional location
    pub fn open_default() -> Result<Self, SchemaError> {
        Self::load(Path::new(SCHEMA_FILE))
    }

    /// Check whether a candidate value conforms to the schema
    pub fn is_valid(&self, candidate: &Value) -> bool {
        self.validator.is_valid(candidate)
    }

    /// Validate a record before it enters the list
    pub fn validate_record(&self, record: &Record) -> Result<(), SchemaViolation> {
        let value =
            serde_json::to_value(record).map_err(|e| SchemaViolation(e.to_string()))?;

        let violations: Vec<String> = self
            .validator
            .iter_errors(&value)
            .map(|e| e.to_string())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolation(violations.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const CONTACT_SCHEMA: &str = r#"{
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "lastname": { "type": "string" },
            "phone": { "type": "string" },
            "birthdate": { "type": "string" }
        },
        "required": ["name", "lastname", "phone", "birthdate"],
        "additionalProperties": false
    }"#;

    fn write_schema(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("schema.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_conforming_record_is_valid() {
        let dir = TempDir::new().unwrap();
        let validator = SchemaValidator::load(&write_schema(&dir, CONTACT_SCHEMA)).unwrap();

        let candidate = json!({
            "name": "Ann",
            "lastname": "Lee",
            "phone": "111",
            "birthdate": "2000-01-01"
        });
        assert!(validator.is_valid(&candidate));
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let dir = TempDir::new().unwrap();
        let validator = SchemaValidator::load(&write_schema(&dir, CONTACT_SCHEMA)).unwrap();

        let candidate = json!({
            "name": "Ann",
            "lastname": "Lee",
            "birthdate": "2000-01-01"
        });
        assert!(!validator.is_valid(&candidate));
    }

    #[test]
    fn test_wrong_type_is_invalid() {
        let dir = TempDir::new().unwrap();
        let validator = SchemaValidator::load(&write_schema(&dir, CONTACT_SCHEMA)).unwrap();

        let candidate = json!({
            "name": "Ann",
            "lastname": "Lee",
            "phone": 111,
            "birthdate": "2000-01-01"
        });
        assert!(!validator.is_valid(&candidate));
    }

    #[test]
    fn test_misspelled_birthdate_key_is_invalid() {
        let dir = TempDir::new().unwrap();
        let validator = SchemaValidator::load(&write_schema(&dir, CONTACT_SCHEMA)).unwrap();

        let candidate = json!({
            "name": "Ann",
            "lastname": "Lee",
            "phone": "111",
            "bitrhdate": "2000-01-01"
        });
        assert!(!validator.is_valid(&candidate));
    }

    #[test]
    fn test_missing_schema_file() {
        let dir = TempDir::new().unwrap();
        let err = SchemaValidator::load(&dir.path().join("schema.json")).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(_)));
    }

    #[test]
    fn test_malformed_schema_json() {
        let dir = TempDir::new().unwrap();
        let err = SchemaValidator::load(&write_schema(&dir, "not json")).unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn test_uncompilable_schema() {
        let dir = TempDir::new().unwrap();
        let err =
            SchemaValidator::load(&write_schema(&dir, r#"{"type": "nope"}"#)).unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }));
    }

    #[test]
    fn test_validate_record_accepts_conforming() {
        let dir = TempDir::new().unwrap();
        let validator = SchemaValidator::load(&write_schema(&dir, CONTACT_SCHEMA)).unwrap();

        let record = Record::new("Ann", "Lee", "111", "2000-01-01");
        assert!(validator.validate_record(&record).is_ok());
    }

    #[test]
    fn test_validate_record_reports_violations() {
        // Stricter schema than the shipped one: phone must be digits
        let strict = r#"{
            "type": "object",
            "properties": {
                "phone": { "type": "string", "pattern": "^[0-9]+$" }
            },
            "required": ["phone"]
        }"#;
        let dir = TempDir::new().unwrap();
        let validator = SchemaValidator::load(&write_schema(&dir, strict)).unwrap();

        let record = Record::new("Ann", "Lee", "abc", "2000-01-01");
        let err = validator.validate_record(&record).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
