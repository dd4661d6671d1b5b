//! Contact record model
//!
//! A `Record` is one person: name, lastname, phone, and a free-form birth
//! date. The `ContactList` preserves insertion order, which doubles as the
//! 1-based display index.

use serde::{Deserialize, Serialize};

/// One contact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub lastname: String,
    /// Opaque identifying string, not guaranteed unique across the list
    pub phone: String,
    /// Free-form text, no date parsing is applied
    pub birthdate: String,
}

impl Record {
    /// Create a record from the four field values
    pub fn new(name: &str, lastname: &str, phone: &str, birthdate: &str) -> Self {
        Self {
            name: name.to_string(),
            lastname: lastname.to_string(),
            phone: phone.to_string(),
            birthdate: birthdate.to_string(),
        }
    }
}

/// The full persisted unit: an ordered list of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactList {
    records: Vec<Record>,
}

impl ContactList {
    /// Create an empty contact list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end of the list
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Find a record by exact phone number match.
    ///
    /// Scans the whole list; when duplicate phone numbers exist the record
    /// added last wins.
    pub fn select(&self, phone: &str) -> Option<&Record> {
        let mut selected = None;
        for record in &self.records {
            if record.phone == phone {
                selected = Some(record);
            }
        }
        selected
    }
}
