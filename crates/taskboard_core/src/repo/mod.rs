//! Repository contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define one CRUD contract (`Repository<T>`) shared by every collection.
//! - Keep storage layout behind the contract so services never touch it.
//!
//! # Invariants
//! - Record ids are unique within one repository.
//! - `update` touches exactly one record; `delete` keeps the relative order
//!   of the remaining records.
//! - Failed operations leave the collection unchanged.

pub mod memory_repo;
pub mod task_tree;

use crate::model::id::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record lookup and structural constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No record with this id exists.
    NotFound(RecordId),
    /// A record with this id already exists.
    DuplicateId(RecordId),
    /// Parent referenced by a new child record does not exist.
    ParentNotFound(RecordId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
            Self::ParentNotFound(id) => write!(f, "parent record not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// A flat record stored in a repository.
pub trait Record: Clone {
    /// Partial update applied by `Repository::update`.
    type Patch;

    fn id(&self) -> &RecordId;

    /// Shallow-merges `patch` into this record. Never changes the id.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// A record that may hang below another record of the same collection.
pub trait TreeRecord: Record {
    fn parent_id(&self) -> Option<&RecordId>;
}

/// CRUD contract for one entity collection.
pub trait Repository<T: Record> {
    /// Returns all records in collection order.
    fn list(&self) -> RepoResult<Vec<T>>;
    fn get(&self, id: &RecordId) -> RepoResult<Option<T>>;
    /// Appends one record and returns its id.
    fn create(&mut self, record: T) -> RepoResult<RecordId>;
    /// Patches one record by id and returns the updated copy.
    fn update(&mut self, id: &RecordId, patch: T::Patch) -> RepoResult<T>;
    /// Removes one record by id and returns it.
    fn delete(&mut self, id: &RecordId) -> RepoResult<T>;
    fn count(&self) -> usize;
}
