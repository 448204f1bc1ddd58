//! Task use-case service.
//!
//! # Responsibility
//! - Create, update, reassign and delete tasks behind form validation.
//! - Batch-create tasks from assistant suggestions.
//! - Serve filtered/sorted list views and per-list metrics.
//!
//! # Invariants
//! - A rejected create leaves the repository untouched and emits exactly one
//!   failure notice.
//! - Status updates are unconstrained; any status may replace any other.
//! - List views never reorder the stored collection.

use crate::metrics::{task_completion_ratio, TaskStats};
use crate::model::id::RecordId;
use crate::model::task::{Task, TaskDraft, TaskKind, TaskPatch, TaskStatus, TaskSuggestion};
use crate::model::validation::{FormKind, Presence};
use crate::repo::Repository;
use crate::search::task_filter::{run_query, TaskQuery};
use crate::service::notify::{Notice, Notifier};
use crate::service::{reject, ServiceError, ServiceResult};
use chrono::{Days, NaiveDate};
use log::info;

/// Task service facade over one task collection.
pub struct TaskService<R: Repository<Task>, N: Notifier> {
    repo: R,
    notifier: N,
    kind: TaskKind,
}

impl<R: Repository<Task>, N: Notifier> TaskService<R, N> {
    /// Creates a service for the collection of `kind` tasks held by `repo`.
    pub fn new(kind: TaskKind, repo: R, notifier: N) -> Self {
        Self {
            repo,
            notifier,
            kind,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// All tasks in collection order.
    pub fn list(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.repo.list()?)
    }

    pub fn get(&self, id: &RecordId) -> ServiceResult<Option<Task>> {
        Ok(self.repo.get(id)?)
    }

    /// Filtered (and optionally status-sorted) copy of the collection.
    pub fn view(&self, query: &TaskQuery) -> ServiceResult<Vec<Task>> {
        let tasks = self.repo.list()?;
        Ok(run_query(&tasks, query))
    }

    pub fn stats(&self) -> ServiceResult<TaskStats> {
        Ok(TaskStats::from_tasks(&self.repo.list()?))
    }

    pub fn completion_ratio(&self) -> ServiceResult<f64> {
        Ok(task_completion_ratio(&self.repo.list()?))
    }

    /// Creates one root-level task from form input.
    pub fn create(&mut self, draft: TaskDraft) -> ServiceResult<Task> {
        self.create_with(draft, |_| {})
    }

    /// Creates one development task owned by `requirement_id`.
    pub fn create_for_requirement(
        &mut self,
        requirement_id: &RecordId,
        draft: TaskDraft,
    ) -> ServiceResult<Task> {
        self.create_with(draft, |task| task.requirement_id = Some(requirement_id.clone()))
    }

    /// Splits off a subtask below `parent_id`.
    ///
    /// The subtask inherits the parent's initiator when none is given.
    pub fn create_subtask(
        &mut self,
        parent_id: &RecordId,
        draft: TaskDraft,
    ) -> ServiceResult<Task> {
        let parent = self
            .repo
            .get(parent_id)?
            .ok_or_else(|| ServiceError::NotFound(parent_id.clone()))?;
        self.create_with(draft, |task| {
            task.parent_id = Some(parent.id.clone());
            if task.initiator.trim().is_empty() {
                task.initiator = parent.initiator.clone();
            }
        })
    }

    /// Batch-creates one task per suggestion.
    ///
    /// Each deadline is `today + estimated_days`. Ids are timestamp-derived
    /// and carry the suggestion index as suffix.
    pub fn create_from_suggestions(
        &mut self,
        suggestions: &[TaskSuggestion],
        today: NaiveDate,
    ) -> ServiceResult<Vec<Task>> {
        let mut created = Vec::with_capacity(suggestions.len());
        for (index, suggestion) in suggestions.iter().enumerate() {
            let deadline = today
                .checked_add_days(Days::new(u64::from(suggestion.estimated_days)))
                .unwrap_or(NaiveDate::MAX);
            let mut task = Task::new(
                RecordId::generate_indexed(index),
                self.kind,
                suggestion.title.clone(),
                String::new(),
                deadline,
            );
            task.description = suggestion.description.clone();
            self.repo.create(task.clone())?;
            created.push(task);
        }

        info!(
            "event=task_batch_create module=service status=ok kind={:?} count={}",
            self.kind,
            created.len()
        );
        self.notifier
            .notify(Notice::success(format!("Created {} tasks", created.len())));
        Ok(created)
    }

    /// Applies a shallow patch to one task.
    pub fn update(&mut self, id: &RecordId, patch: TaskPatch) -> ServiceResult<Task> {
        let task = self.repo.update(id, patch)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(task)
    }

    /// Sets any status on one task.
    pub fn set_status(&mut self, id: &RecordId, status: TaskStatus) -> ServiceResult<Task> {
        let task = self.repo.update(id, TaskPatch::status(status))?;
        info!(
            "event=task_status module=service status=ok id={id} task_status={}",
            status.as_str()
        );
        self.notifier
            .notify(Notice::success("Task status updated"));
        Ok(task)
    }

    /// Hands one task over to another assignee.
    pub fn reassign(&mut self, id: &RecordId, assignee: &str) -> ServiceResult<Task> {
        if let Err(err) = Presence::new(FormKind::DepartmentTask)
            .text("assignee", assignee)
            .finish()
        {
            return Err(reject(&mut self.notifier, "task_reassign", err));
        }
        let task = self.repo.update(id, TaskPatch::assignee(assignee.trim()))?;
        info!("event=task_reassign module=service status=ok id={id}");
        self.notifier.notify(Notice::success("Task transferred"));
        Ok(task)
    }

    /// Deletes one task (and its subtasks, for tree-backed collections).
    pub fn remove(&mut self, id: &RecordId) -> ServiceResult<Task> {
        let task = self.repo.delete(id)?;
        info!("event=task_delete module=service status=ok id={id}");
        self.notifier.notify(Notice::success("Task deleted"));
        Ok(task)
    }

    fn create_with(
        &mut self,
        draft: TaskDraft,
        finish: impl FnOnce(&mut Task),
    ) -> ServiceResult<Task> {
        let mut task = match draft.into_task(RecordId::generate(), self.kind) {
            Ok(task) => task,
            Err(err) => return Err(reject(&mut self.notifier, "task_create", err)),
        };
        finish(&mut task);
        self.repo.create(task.clone())?;

        info!(
            "event=task_create module=service status=ok kind={:?} id={}",
            self.kind, task.id
        );
        self.notifier.notify(Notice::success("Task added"));
        Ok(task)
    }
}
