//! Directory Store
//!
//! Holds the immutable, ordered set of person records for the life of the
//! process. A directory is written once (loaded from a JSON source or built
//! from records) and only read afterwards.
//!
//! # Source format
//!
//! A JSON array of objects with `name`, `email`, `role`, `department` and a
//! numeric `compensation` (also accepted as `salary`):
//!
//! ```rust
//! use staffdex_core::directory::Directory;
//!
//! let directory = Directory::from_json_str(
//!     r#"[{"name": "Alice Smith", "email": "alice@example.com",
//!          "role": "Engineer", "department": "Platform", "salary": 120000}]"#,
//! )
//! .unwrap();
//! assert_eq!(directory.names(), vec!["Alice Smith"]);
//! ```

mod error;
mod record;

pub use error::{LoadError, Result};
pub use record::{PersonRecord, PublicPersonView};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

/// Ordered, write-once collection of person records (insertion order = source order)
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<PersonRecord>,
}

impl Directory {
    /// Build a directory from records already in memory
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        Self { records }
    }

    /// Load a directory from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let directory = Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            // Read failures surface through serde_json; report them against the path
            LoadError::Malformed(err) if err.is_io() => LoadError::Io {
                path: path.to_path_buf(),
                source: err.into(),
            },
            err => err,
        })?;
        info!(
            records = directory.len(),
            path = %path.display(),
            "Loaded directory"
        );
        Ok(directory)
    }

    /// Load a directory from any JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<PersonRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Load a directory from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<PersonRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// All records, in source order
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    /// Display names in source order, one per record (duplicates included)
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(PersonRecord::name).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Short listing for assistant prompts: the first `limit` names and the total.
    ///
    /// `"Alice Smith, Bob Lee... (12 total)"`
    pub fn summary(&self, limit: usize) -> String {
        let names = self.names();
        let shown: Vec<&str> = names.iter().take(limit).copied().collect();
        format!("{}... ({} total)", shown.join(", "), names.len())
    }
}
