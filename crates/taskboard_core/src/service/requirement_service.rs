//! Requirement use-case service.
//!
//! # Responsibility
//! - Register saved report drafts as new requirements.
//! - Record revisions: bump the minor version and grow the history.
//!
//! # Invariants
//! - A revision never rewrites earlier history entries.
//! - A revision sets `last_modified` to its own date.

use crate::metrics::{requirement_progress, RequirementProgress};
use crate::model::id::RecordId;
use crate::model::report::ReportDraft;
use crate::model::requirement::{
    Requirement, RequirementPatch, RequirementStatus, RequirementVersion,
};
use crate::model::task::Task;
use crate::model::validation::{FormKind, Presence};
use crate::repo::Repository;
use crate::service::notify::{Notice, Notifier};
use crate::service::{reject, ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::info;

/// Revision request for one requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub author: String,
    pub changes: String,
    pub date: NaiveDate,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Requirement service facade.
pub struct RequirementService<R: Repository<Requirement>, N: Notifier> {
    repo: R,
    notifier: N,
}

impl<R: Repository<Requirement>, N: Notifier> RequirementService<R, N> {
    pub fn new(repo: R, notifier: N) -> Self {
        Self { repo, notifier }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn list(&self) -> ServiceResult<Vec<Requirement>> {
        Ok(self.repo.list()?)
    }

    pub fn get(&self, id: &RecordId) -> ServiceResult<Option<Requirement>> {
        Ok(self.repo.get(id)?)
    }

    /// Saves a report draft as a new `v1.0` requirement.
    ///
    /// Only the title is required; the background becomes the description.
    pub fn submit_report(
        &mut self,
        draft: &ReportDraft,
        author: &str,
        today: NaiveDate,
    ) -> ServiceResult<Requirement> {
        if let Err(err) = Presence::new(FormKind::Report)
            .text("title", &draft.title)
            .finish()
        {
            return Err(reject(&mut self.notifier, "report_submit", err));
        }

        let mut requirement =
            Requirement::new(RecordId::generate(), draft.title.trim(), author, today);
        requirement.description = draft.background.clone();
        self.repo.create(requirement.clone())?;

        info!(
            "event=report_submit module=service status=ok id={} steps={} solutions={}",
            requirement.id,
            draft.process_steps.len(),
            draft.solutions.len()
        );
        self.notifier
            .notify(Notice::success("Requirement report saved"));
        Ok(requirement)
    }

    /// Records one revision and returns the updated requirement.
    pub fn revise(&mut self, id: &RecordId, revision: Revision) -> ServiceResult<Requirement> {
        let current = self
            .repo
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;

        let entry = RequirementVersion {
            version: current.version.next_minor(),
            date: revision.date,
            author: revision.author,
            changes: revision.changes,
        };
        let requirement = self.repo.update(
            id,
            RequirementPatch {
                title: revision.title,
                description: revision.description,
                status: None,
                revision: Some(entry),
            },
        )?;

        info!(
            "event=requirement_revise module=service status=ok id={id} version={}",
            requirement.version
        );
        self.notifier
            .notify(Notice::success(format!("Saved as {}", requirement.version)));
        Ok(requirement)
    }

    pub fn set_status(
        &mut self,
        id: &RecordId,
        status: RequirementStatus,
    ) -> ServiceResult<Requirement> {
        let requirement = self.repo.update(
            id,
            RequirementPatch {
                status: Some(status),
                ..RequirementPatch::default()
            },
        )?;
        info!("event=requirement_status module=service status=ok id={id}");
        Ok(requirement)
    }

    /// Development-task progress for one requirement.
    pub fn progress(&self, id: &RecordId, tasks: &[Task]) -> RequirementProgress {
        requirement_progress(tasks, id)
    }
}
