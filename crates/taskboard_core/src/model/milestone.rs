//! Roadmap milestone model.
//!
//! # Invariants
//! - A milestone owns its cost line items; they are not shared with other
//!   milestones.
//! - Milestone status reuses `TaskStatus` and is never derived from `date`.

use crate::model::finance::CostItem;
use crate::model::id::RecordId;
use crate::model::task::TaskStatus;
use crate::model::validation::{parse_date, FormKind, Presence, ValidationError};
use crate::repo::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dated roadmap checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: RecordId,
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
    pub status: TaskStatus,
    pub costs: Vec<CostItem>,
    /// Illustration path, if any.
    pub image: Option<String>,
}

impl Milestone {
    pub fn new(id: RecordId, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            description: String::new(),
            status: TaskStatus::Pending,
            costs: Vec::new(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestonePatch {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    /// Replaces the whole cost list.
    pub costs: Option<Vec<CostItem>>,
}

impl Record for Milestone {
    type Patch = MilestonePatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: MilestonePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(costs) = patch.costs {
            self.costs = costs;
        }
    }
}

/// Create-form input for a milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneDraft {
    pub name: String,
    pub date: String,
    pub description: String,
}

impl MilestoneDraft {
    pub fn into_milestone(self, id: RecordId) -> Result<Milestone, ValidationError> {
        Presence::new(FormKind::Milestone)
            .text("name", &self.name)
            .text("date", &self.date)
            .finish()?;
        let date = parse_date("date", &self.date)?;
        let mut milestone = Milestone::new(id, self.name.trim(), date);
        milestone.description = self.description;
        Ok(milestone)
    }
}
