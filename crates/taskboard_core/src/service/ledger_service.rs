//! Project cost/output ledger.
//!
//! # Responsibility
//! - Keep the cost and output collections of one project.
//! - Serve the ROI roll-up over both.
//!
//! # Invariants
//! - Costs and outputs live in separate repositories; ROI is derived on
//!   every call and never stored.

use crate::metrics::RoiSummary;
use crate::model::finance::{CostDraft, CostItem, CostItemPatch, Output, OutputDraft, OutputPatch};
use crate::model::id::RecordId;
use crate::repo::Repository;
use crate::service::notify::{Notice, Notifier};
use crate::service::{reject, ServiceResult};
use log::info;

/// Ledger service facade.
pub struct LedgerService<C, O, N>
where
    C: Repository<CostItem>,
    O: Repository<Output>,
    N: Notifier,
{
    costs: C,
    outputs: O,
    notifier: N,
}

impl<C, O, N> LedgerService<C, O, N>
where
    C: Repository<CostItem>,
    O: Repository<Output>,
    N: Notifier,
{
    pub fn new(costs: C, outputs: O, notifier: N) -> Self {
        Self {
            costs,
            outputs,
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn costs(&self) -> ServiceResult<Vec<CostItem>> {
        Ok(self.costs.list()?)
    }

    pub fn outputs(&self) -> ServiceResult<Vec<Output>> {
        Ok(self.outputs.list()?)
    }

    /// Total cost, total output and ROI over the current collections.
    pub fn roi(&self) -> ServiceResult<RoiSummary> {
        Ok(RoiSummary::from_items(
            &self.costs.list()?,
            &self.outputs.list()?,
        ))
    }

    pub fn add_cost(&mut self, draft: CostDraft) -> ServiceResult<CostItem> {
        let cost = match draft.into_cost(RecordId::generate()) {
            Ok(cost) => cost,
            Err(err) => return Err(reject(&mut self.notifier, "cost_create", err)),
        };
        self.costs.create(cost.clone())?;
        info!("event=cost_create module=service status=ok id={}", cost.id);
        self.notifier.notify(Notice::success("Cost item added"));
        Ok(cost)
    }

    pub fn update_cost(&mut self, id: &RecordId, patch: CostItemPatch) -> ServiceResult<CostItem> {
        let cost = self.costs.update(id, patch)?;
        info!("event=cost_update module=service status=ok id={id}");
        Ok(cost)
    }

    pub fn remove_cost(&mut self, id: &RecordId) -> ServiceResult<CostItem> {
        let cost = self.costs.delete(id)?;
        info!("event=cost_delete module=service status=ok id={id}");
        self.notifier.notify(Notice::success("Cost item deleted"));
        Ok(cost)
    }

    pub fn add_output(&mut self, draft: OutputDraft) -> ServiceResult<Output> {
        let output = match draft.into_output(RecordId::generate()) {
            Ok(output) => output,
            Err(err) => return Err(reject(&mut self.notifier, "output_create", err)),
        };
        self.outputs.create(output.clone())?;
        info!("event=output_create module=service status=ok id={}", output.id);
        self.notifier.notify(Notice::success("Output added"));
        Ok(output)
    }

    pub fn update_output(&mut self, id: &RecordId, patch: OutputPatch) -> ServiceResult<Output> {
        let output = self.outputs.update(id, patch)?;
        info!("event=output_update module=service status=ok id={id}");
        Ok(output)
    }

    pub fn remove_output(&mut self, id: &RecordId) -> ServiceResult<Output> {
        let output = self.outputs.delete(id)?;
        info!("event=output_delete module=service status=ok id={id}");
        self.notifier.notify(Notice::success("Output deleted"));
        Ok(output)
    }
}
