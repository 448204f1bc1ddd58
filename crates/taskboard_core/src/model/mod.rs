//! Domain model for requirement, task, roadmap and board data.
//!
//! # Responsibility
//! - Define the flat records held by repositories.
//! - Define create drafts and the presence rules they enforce.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` unique within its collection.
//! - Nested tasks reference their parent by id; records never embed children.

pub mod finance;
pub mod id;
pub mod milestone;
pub mod project;
pub mod report;
pub mod requirement;
pub mod task;
pub mod validation;
