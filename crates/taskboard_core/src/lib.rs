//! Core domain logic for taskboard.
//! Tasks, requirements, roadmap costs and their derived metrics live here;
//! front ends only render what this crate computes.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::id::RecordId;
pub use model::requirement::{Requirement, RequirementStatus, VersionLabel};
pub use model::task::{Task, TaskDraft, TaskKind, TaskStatus};
pub use model::validation::{FormKind, ValidationError};
pub use repo::memory_repo::InMemoryRepository;
pub use repo::task_tree::TaskTree;
pub use repo::{Record, RepoError, RepoResult, Repository};
pub use search::task_filter::{filter_tasks, sort_by_status, TaskQuery};
pub use service::notify::{Notice, NoticeLevel, NoticeLog, Notifier};
pub use service::task_service::TaskService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
