//! Derived dashboard metrics.
//!
//! # Responsibility
//! - Compute sums, ratios, percentages and ROI over in-memory collections.
//! - Shape roll-up figures for the roadmap, department dashboard and
//!   project board.
//!
//! # Invariants
//! - Every function is pure: inputs are borrowed and never mutated.
//! - Division by zero never happens; empty denominators yield `0`.

use crate::model::finance::{CostItem, Output};
use crate::model::id::RecordId;
use crate::model::milestone::Milestone;
use crate::model::project::{BoardProject, DashboardProject, ProjectPhase};
use crate::model::task::{Task, TaskKind, TaskStatus};
use std::collections::HashSet;

/// Sum of `amount` over cost items.
pub fn total_cost(costs: &[CostItem]) -> f64 {
    costs.iter().map(|cost| cost.amount).sum()
}

/// Sum of `value` over outputs.
pub fn total_output(outputs: &[Output]) -> f64 {
    outputs.iter().map(|output| output.value).sum()
}

/// Return on investment in percent.
///
/// Returns `0.0` when `total_cost` is not positive.
pub fn roi_percent(total_cost: f64, total_output: f64) -> f64 {
    if total_cost > 0.0 {
        (total_output - total_cost) / total_cost * 100.0
    } else {
        0.0
    }
}

/// ROI formatted to one decimal place, e.g. `"100.0"`.
pub fn format_roi(total_cost: f64, total_output: f64) -> String {
    format!("{:.1}", roi_percent(total_cost, total_output))
}

/// Cost/output/ROI figures for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiSummary {
    pub total_cost: f64,
    pub total_output: f64,
    pub roi_percent: f64,
}

impl RoiSummary {
    pub fn from_items(costs: &[CostItem], outputs: &[Output]) -> Self {
        let total_cost = total_cost(costs);
        let total_output = total_output(outputs);
        Self {
            total_cost,
            total_output,
            roi_percent: roi_percent(total_cost, total_output),
        }
    }

    /// `roi_percent` with one decimal place.
    pub fn roi_display(&self) -> String {
        format!("{:.1}", self.roi_percent)
    }
}

/// `completed / total` as a fraction; `0.0` when `total` is zero.
pub fn completion_ratio(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64
}

/// Completion ratio as a whole percentage, rounded half up.
pub fn completion_percent(completed: usize, total: usize) -> u32 {
    (completion_ratio(completed, total) * 100.0).round() as u32
}

/// Completion ratio over tasks by stored status.
pub fn task_completion_ratio(tasks: &[Task]) -> f64 {
    let completed = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count();
    completion_ratio(completed, tasks.len())
}

/// Number of distinct names across all teams, by exact string match.
pub fn unique_participants<'a, I, T>(teams: I) -> usize
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = &'a String>,
{
    teams
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len()
}

/// Per-status task tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub overdue: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskStats {
    /// Tallies stored statuses.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Overdue => stats.overdue += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            stats
        })
    }
}

/// Development-task progress of one requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementProgress {
    pub task_count: usize,
    pub completed_tasks: usize,
}

impl RequirementProgress {
    pub fn percent(&self) -> u32 {
        completion_percent(self.completed_tasks, self.task_count)
    }
}

/// Counts development tasks linked to `requirement_id`.
pub fn requirement_progress(tasks: &[Task], requirement_id: &RecordId) -> RequirementProgress {
    tasks
        .iter()
        .filter(|task| {
            task.kind == TaskKind::Development
                && task.requirement_id.as_ref() == Some(requirement_id)
        })
        .fold(RequirementProgress::default(), |mut progress, task| {
            progress.task_count += 1;
            if task.status == TaskStatus::Completed {
                progress.completed_tasks += 1;
            }
            progress
        })
}

/// Sum of a milestone's cost line items.
pub fn milestone_cost(milestone: &Milestone) -> f64 {
    total_cost(&milestone.costs)
}

/// Roadmap header figures.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapSummary {
    pub milestone_count: usize,
    pub completed_count: usize,
    pub total_cost: f64,
}

impl RoadmapSummary {
    pub fn from_milestones(milestones: &[Milestone]) -> Self {
        Self {
            milestone_count: milestones.len(),
            completed_count: milestones
                .iter()
                .filter(|milestone| milestone.status == TaskStatus::Completed)
                .count(),
            total_cost: milestones.iter().map(milestone_cost).sum(),
        }
    }

    /// Total cost in units of ten thousand, one decimal place (`"7.9"`).
    pub fn total_cost_in_ten_thousands(&self) -> String {
        format!("{:.1}", self.total_cost / 10_000.0)
    }
}

/// Department dashboard header figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub active_projects: usize,
    pub participants: usize,
}

impl DashboardSummary {
    pub fn from_projects(projects: &[DashboardProject]) -> Self {
        Self {
            total_tasks: projects.iter().map(|project| project.total_tasks).sum(),
            completed_tasks: projects.iter().map(|project| project.completed_tasks).sum(),
            active_projects: projects
                .iter()
                .filter(|project| project.phase != ProjectPhase::Completed)
                .count(),
            participants: unique_participants(projects.iter().map(|project| &project.team)),
        }
    }
}

/// Project board footer figures for one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSummary {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub team_members: u32,
    /// Rounded mean of scenario progress; `0` without scenarios.
    pub average_progress: u32,
}

impl BoardSummary {
    pub fn from_project(project: &BoardProject) -> Self {
        let scenarios = &project.scenarios;
        let progress_sum: u32 = scenarios
            .iter()
            .map(|scenario| u32::from(scenario.progress))
            .sum();
        let average_progress = if scenarios.is_empty() {
            0
        } else {
            (f64::from(progress_sum) / scenarios.len() as f64).round() as u32
        };

        Self {
            total_tasks: scenarios.iter().map(|s| s.metrics.total_tasks).sum(),
            completed_tasks: scenarios.iter().map(|s| s.metrics.completed_tasks).sum(),
            team_members: scenarios.iter().map(|s| s.metrics.team_members).sum(),
            average_progress,
        }
    }
}
