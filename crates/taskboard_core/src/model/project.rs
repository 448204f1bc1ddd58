//! Project roll-up records for the department dashboard and project board.

use crate::model::id::RecordId;
use crate::model::task::{Priority, TaskStatus};
use crate::repo::Record;
use serde::{Deserialize, Serialize};

/// Delivery phase of a dashboard project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectPhase {
    Design,
    InDevelopment,
    Completed,
}

/// One card on the department dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardProject {
    pub id: RecordId,
    pub title: String,
    pub department: String,
    /// Percent complete as reported by the team, `0..=100`.
    pub progress: u8,
    pub phase: ProjectPhase,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub remaining_days: u32,
    pub team: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardProjectPatch {
    pub progress: Option<u8>,
    pub phase: Option<ProjectPhase>,
    pub completed_tasks: Option<u32>,
    pub team: Option<Vec<String>>,
}

impl Record for DashboardProject {
    type Patch = DashboardProjectPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: DashboardProjectPatch) {
        if let Some(progress) = patch.progress {
            self.progress = progress.min(100);
        }
        if let Some(phase) = patch.phase {
            self.phase = phase;
        }
        if let Some(completed_tasks) = patch.completed_tasks {
            self.completed_tasks = completed_tasks;
        }
        if let Some(team) = patch.team {
            self.team = team;
        }
    }
}

/// Headline task on a board scenario card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTask {
    pub name: String,
    pub status: TaskStatus,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub team_members: u32,
    pub days_left: u32,
}

/// One vision/scenario lane inside a board project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub tasks: Vec<ScenarioTask>,
    pub metrics: ScenarioMetrics,
}

/// Cross-team project shown on the project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardProject {
    pub id: RecordId,
    pub name: String,
    pub scenarios: Vec<Scenario>,
}

/// Patching a board project replaces its scenario list.
impl Record for BoardProject {
    type Patch = Vec<Scenario>;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, scenarios: Vec<Scenario>) {
        self.scenarios = scenarios;
    }
}
