//! Client-side list filtering and ordering.
//!
//! # Responsibility
//! - Provide substring search over task lists.
//! - Provide the fixed status-priority ordering used by list views.
//!
//! # Invariants
//! - Source collections are never mutated; results are fresh vectors.

pub mod task_filter;
