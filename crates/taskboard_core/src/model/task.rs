//! Task domain model.
//!
//! # Responsibility
//! - Define the single task record shared by development, department and
//!   personal task lists.
//! - Provide create drafts with per-form presence validation.
//!
//! # Invariants
//! - `status` is free-standing: any value may be set at any time.
//! - `effective_status` derives `Overdue` from the deadline but never writes
//!   it back to the record.
//! - Projection-specific fields default to empty/zero when not provided.

use crate::model::id::RecordId;
use crate::model::validation::{parse_date, FormKind, Presence, ValidationError};
use crate::repo::{Record, TreeRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which list a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Implementation work under one requirement.
    Development,
    /// Department work item, possibly split into subtasks.
    Department,
    /// Work assigned to the current user.
    Personal,
}

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// Display priority used by list sorting; lower sorts first.
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::Overdue => 0,
            Self::InProgress => 1,
            Self::Pending => 2,
            Self::Completed => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub kind: TaskKind,
    pub title: String,
    pub description: String,
    pub assignee: String,
    /// Person who raised the task. Department tasks only.
    pub initiator: String,
    /// Person who handed the task over. Personal tasks only.
    pub assigned_by: String,
    pub project: String,
    pub deadline: NaiveDate,
    pub created_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub priority: Option<Priority>,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    /// Owning requirement for development tasks.
    pub requirement_id: Option<RecordId>,
    /// Parent task for department subtasks.
    pub parent_id: Option<RecordId>,
}

impl Task {
    /// Creates a pending task with all optional fields empty.
    pub fn new(
        id: RecordId,
        kind: TaskKind,
        title: impl Into<String>,
        assignee: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: String::new(),
            assignee: assignee.into(),
            initiator: String::new(),
            assigned_by: String::new(),
            project: String::new(),
            deadline,
            created_date: None,
            status: TaskStatus::Pending,
            priority: None,
            progress: 0,
            requirement_id: None,
            parent_id: None,
        }
    }

    /// Status as it should be shown on `today`.
    ///
    /// A task past its deadline that is not completed reads as `Overdue`;
    /// everything else keeps the stored status.
    pub fn effective_status(&self, today: NaiveDate) -> TaskStatus {
        if self.status != TaskStatus::Completed && self.deadline < today {
            TaskStatus::Overdue
        } else {
            self.status
        }
    }

    /// Whether stored status and deadline disagree on `today`.
    ///
    /// Flags both directions: an open task past its deadline not marked
    /// overdue, and an `Overdue` task whose deadline is still ahead.
    pub fn status_conflicts_with_deadline(&self, today: NaiveDate) -> bool {
        match self.status {
            TaskStatus::Completed => false,
            TaskStatus::Overdue => self.deadline >= today,
            TaskStatus::Pending | TaskStatus::InProgress => self.deadline < today,
        }
    }
}

/// Shallow patch for one task. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub project: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<u8>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn assignee(assignee: impl Into<String>) -> Self {
        Self {
            assignee: Some(assignee.into()),
            ..Self::default()
        }
    }
}

impl Record for Task {
    type Patch = TaskPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(project) = patch.project {
            self.project = project;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = Some(priority);
        }
        if let Some(progress) = patch.progress {
            self.progress = progress.min(100);
        }
    }
}

impl TreeRecord for Task {
    fn parent_id(&self) -> Option<&RecordId> {
        self.parent_id.as_ref()
    }
}

/// Raw create-form input for a task.
///
/// Text fields mirror form inputs; `deadline` is the `YYYY-MM-DD` string
/// typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub initiator: String,
    pub project: String,
    pub deadline: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        assignee: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            assignee: assignee.into(),
            deadline: deadline.into(),
            ..Self::default()
        }
    }

    /// Validates required fields for `kind` and builds a pending task.
    ///
    /// Development and department forms both require title, assignee and
    /// deadline.
    pub fn into_task(self, id: RecordId, kind: TaskKind) -> Result<Task, ValidationError> {
        let form = match kind {
            TaskKind::Department => FormKind::DepartmentTask,
            TaskKind::Development | TaskKind::Personal => FormKind::DevelopmentTask,
        };
        Presence::new(form)
            .text("title", &self.title)
            .text("assignee", &self.assignee)
            .text("deadline", &self.deadline)
            .finish()?;
        let deadline = parse_date("deadline", &self.deadline)?;

        let mut task = Task::new(id, kind, self.title.trim(), self.assignee.trim(), deadline);
        task.description = self.description;
        task.initiator = self.initiator;
        task.project = self.project;
        Ok(task)
    }
}

/// One suggested task from the batch-create assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSuggestion {
    pub title: String,
    pub description: String,
    pub estimated_days: u32,
}
