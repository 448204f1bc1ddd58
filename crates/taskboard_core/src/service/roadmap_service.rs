//! Roadmap use-case service.
//!
//! # Responsibility
//! - Add, update and remove milestones.
//! - Manage the cost line items owned by each milestone.
//! - Serve the roadmap roll-up.

use crate::metrics::RoadmapSummary;
use crate::model::finance::{CostDraft, CostItem};
use crate::model::id::RecordId;
use crate::model::milestone::{Milestone, MilestoneDraft, MilestonePatch};
use crate::repo::Repository;
use crate::service::notify::{Notice, Notifier};
use crate::service::{reject, ServiceError, ServiceResult};
use log::info;

/// Roadmap service facade over one project's milestones.
pub struct RoadmapService<R: Repository<Milestone>, N: Notifier> {
    repo: R,
    notifier: N,
}

impl<R: Repository<Milestone>, N: Notifier> RoadmapService<R, N> {
    pub fn new(repo: R, notifier: N) -> Self {
        Self { repo, notifier }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn milestones(&self) -> ServiceResult<Vec<Milestone>> {
        Ok(self.repo.list()?)
    }

    pub fn summary(&self) -> ServiceResult<RoadmapSummary> {
        Ok(RoadmapSummary::from_milestones(&self.repo.list()?))
    }

    pub fn add_milestone(&mut self, draft: MilestoneDraft) -> ServiceResult<Milestone> {
        let milestone = match draft.into_milestone(RecordId::generate()) {
            Ok(milestone) => milestone,
            Err(err) => return Err(reject(&mut self.notifier, "milestone_create", err)),
        };
        self.repo.create(milestone.clone())?;
        info!(
            "event=milestone_create module=service status=ok id={}",
            milestone.id
        );
        self.notifier.notify(Notice::success("Milestone added"));
        Ok(milestone)
    }

    pub fn update_milestone(
        &mut self,
        id: &RecordId,
        patch: MilestonePatch,
    ) -> ServiceResult<Milestone> {
        let milestone = self.repo.update(id, patch)?;
        info!("event=milestone_update module=service status=ok id={id}");
        Ok(milestone)
    }

    pub fn remove_milestone(&mut self, id: &RecordId) -> ServiceResult<Milestone> {
        let milestone = self.repo.delete(id)?;
        info!("event=milestone_delete module=service status=ok id={id}");
        self.notifier.notify(Notice::success("Milestone deleted"));
        Ok(milestone)
    }

    /// Appends one cost line item to a milestone.
    pub fn add_cost(&mut self, milestone_id: &RecordId, draft: CostDraft) -> ServiceResult<CostItem> {
        let milestone = self.require(milestone_id)?;
        let cost = match draft.into_cost(RecordId::generate()) {
            Ok(cost) => cost,
            Err(err) => return Err(reject(&mut self.notifier, "milestone_cost_create", err)),
        };

        let mut costs = milestone.costs;
        costs.push(cost.clone());
        self.repo.update(
            milestone_id,
            MilestonePatch {
                costs: Some(costs),
                ..MilestonePatch::default()
            },
        )?;
        info!(
            "event=milestone_cost_create module=service status=ok milestone={milestone_id} id={}",
            cost.id
        );
        self.notifier.notify(Notice::success("Cost item added"));
        Ok(cost)
    }

    /// Removes one cost line item from a milestone.
    pub fn remove_cost(
        &mut self,
        milestone_id: &RecordId,
        cost_id: &RecordId,
    ) -> ServiceResult<CostItem> {
        let milestone = self.require(milestone_id)?;
        let mut costs = milestone.costs;
        let index = costs
            .iter()
            .position(|cost| &cost.id == cost_id)
            .ok_or_else(|| ServiceError::NotFound(cost_id.clone()))?;
        let removed = costs.remove(index);

        self.repo.update(
            milestone_id,
            MilestonePatch {
                costs: Some(costs),
                ..MilestonePatch::default()
            },
        )?;
        info!(
            "event=milestone_cost_delete module=service status=ok milestone={milestone_id} id={cost_id}"
        );
        self.notifier.notify(Notice::success("Cost item deleted"));
        Ok(removed)
    }

    fn require(&self, id: &RecordId) -> ServiceResult<Milestone> {
        self.repo
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))
    }
}
