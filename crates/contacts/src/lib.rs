//! contacts - File-backed contact list
//!
//! A single JSON document holds an ordered list of contact records. Every
//! load validates each record against an external JSON Schema; a file with
//! any nonconforming record is refused wholesale. The list is rebuilt from
//! disk for each command and written back only after a mutation.

pub mod record;
pub mod schema;
pub mod store;
pub mod table;

pub use record::{ContactList, Record};
pub use schema::{SchemaError, SchemaValidator, SchemaViolation};
pub use store::{ContactStore, StoreError};
pub use table::render_table;
