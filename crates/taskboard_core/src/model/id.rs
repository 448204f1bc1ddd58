//! Record identity.
//!
//! # Responsibility
//! - Provide one identifier type shared by every entity collection.
//! - Generate timestamp-derived ids for records created at runtime.
//!
//! # Invariants
//! - Generated ids are unique within a process even when several records are
//!   created in the same millisecond.
//! - Seeded records keep their literal ids (`"1"`, `"1-1"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a record inside one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an existing id, e.g. from seed data.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id from the current timestamp.
    ///
    /// Uses UUIDv7, whose leading bits are the Unix epoch milliseconds, so
    /// ids still sort by creation time.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    /// Generates an id for the `index`-th record of a batch create.
    pub fn generate_indexed(index: usize) -> Self {
        Self(format!("{}-{index}", Uuid::now_v7().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
