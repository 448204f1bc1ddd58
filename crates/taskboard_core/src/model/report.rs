//! Requirement-gathering report draft.
//!
//! # Responsibility
//! - Hold the free-text sections of a new report.
//! - Manage the four row sections (process steps, scenarios, solutions,
//!   resource plans) with add/update/remove-by-id.
//!
//! # Invariants
//! - Every row section keeps at least one row; removing the last row is a
//!   no-op.
//! - New process steps are numbered `len + 1`; new solutions are titled
//!   `Solution N`.

use crate::model::id::RecordId;
use crate::repo::memory_repo::InMemoryRepository;
use crate::repo::{Record, RepoResult, Repository};
use serde::{Deserialize, Serialize};

/// A row type that can be appended blank to its section.
pub trait SectionRow: Record {
    /// Blank row that will sit at zero-based `index`.
    fn blank(id: RecordId, index: usize) -> Self;
}

/// Ordered rows of one report section.
#[derive(Debug, Clone)]
pub struct SectionRows<T: SectionRow> {
    rows: InMemoryRepository<T>,
}

impl<T: SectionRow> Default for SectionRows<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SectionRow> SectionRows<T> {
    /// Starts with one blank row with id `"1"`.
    pub fn new() -> Self {
        Self {
            rows: InMemoryRepository::from_records(vec![T::blank(RecordId::from("1"), 0)]),
        }
    }

    pub fn rows(&self) -> &[T] {
        self.rows.records()
    }

    pub fn len(&self) -> usize {
        self.rows.count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.count() == 0
    }

    /// Appends a blank row and returns its id.
    pub fn add(&mut self) -> RepoResult<RecordId> {
        let row = T::blank(RecordId::generate(), self.rows.count());
        self.rows.create(row)
    }

    pub fn update(&mut self, id: &RecordId, patch: T::Patch) -> RepoResult<T> {
        self.rows.update(id, patch)
    }

    /// Removes a row unless it is the last one.
    ///
    /// Returns `Ok(None)` when the section holds a single row.
    pub fn remove(&mut self, id: &RecordId) -> RepoResult<Option<T>> {
        if self.rows.count() <= 1 {
            return Ok(None);
        }
        self.rows.delete(id).map(Some)
    }
}

/// Whether AI assistance makes a process step faster or slower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiEfficiency {
    Higher,
    Lower,
    #[default]
    Unset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: RecordId,
    pub sequence: u32,
    pub step: String,
    pub description: String,
    pub ai_efficiency: AiEfficiency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessStepField {
    Sequence(u32),
    Step(String),
    Description(String),
    AiEfficiency(AiEfficiency),
}

impl Record for ProcessStep {
    type Patch = ProcessStepField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: ProcessStepField) {
        match patch {
            ProcessStepField::Sequence(value) => self.sequence = value,
            ProcessStepField::Step(value) => self.step = value,
            ProcessStepField::Description(value) => self.description = value,
            ProcessStepField::AiEfficiency(value) => self.ai_efficiency = value,
        }
    }
}

impl SectionRow for ProcessStep {
    fn blank(id: RecordId, index: usize) -> Self {
        Self {
            id,
            sequence: u32::try_from(index + 1).unwrap_or(u32::MAX),
            step: String::new(),
            description: String::new(),
            ai_efficiency: AiEfficiency::Unset,
        }
    }
}

/// Before/after comparison for one business scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub id: RecordId,
    pub title: String,
    pub before_process: String,
    pub after_process: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioField {
    Title(String),
    BeforeProcess(String),
    AfterProcess(String),
}

impl Record for ScenarioRow {
    type Patch = ScenarioField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: ScenarioField) {
        match patch {
            ScenarioField::Title(value) => self.title = value,
            ScenarioField::BeforeProcess(value) => self.before_process = value,
            ScenarioField::AfterProcess(value) => self.after_process = value,
        }
    }
}

impl SectionRow for ScenarioRow {
    fn blank(id: RecordId, _index: usize) -> Self {
        Self {
            id,
            title: String::new(),
            before_process: String::new(),
            after_process: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub id: RecordId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionField {
    Title(String),
    Content(String),
}

impl Record for Solution {
    type Patch = SolutionField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: SolutionField) {
        match patch {
            SolutionField::Title(value) => self.title = value,
            SolutionField::Content(value) => self.content = value,
        }
    }
}

impl SectionRow for Solution {
    fn blank(id: RecordId, index: usize) -> Self {
        Self {
            id,
            title: format!("Solution {}", index + 1),
            content: String::new(),
        }
    }
}

/// Resource gap and the plan to close it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub id: RecordId,
    pub kind: String,
    pub current: String,
    pub gap: String,
    pub plan: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePlanField {
    Kind(String),
    Current(String),
    Gap(String),
    Plan(String),
}

impl Record for ResourcePlan {
    type Patch = ResourcePlanField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: ResourcePlanField) {
        match patch {
            ResourcePlanField::Kind(value) => self.kind = value,
            ResourcePlanField::Current(value) => self.current = value,
            ResourcePlanField::Gap(value) => self.gap = value,
            ResourcePlanField::Plan(value) => self.plan = value,
        }
    }
}

impl SectionRow for ResourcePlan {
    fn blank(id: RecordId, _index: usize) -> Self {
        Self {
            id,
            kind: String::new(),
            current: String::new(),
            gap: String::new(),
            plan: String::new(),
        }
    }
}

/// Current-state analysis block of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAnalysis {
    pub completed: String,
    pub uncompleted: String,
    pub pain_points: String,
}

/// Editable report draft.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub title: String,
    pub background: String,
    pub current_analysis: CurrentAnalysis,
    pub flowchart_description: String,
    pub process_steps: SectionRows<ProcessStep>,
    pub scenarios: SectionRows<ScenarioRow>,
    pub solutions: SectionRows<Solution>,
    pub resource_plans: SectionRows<ResourcePlan>,
    /// Cost, expected output and ROI notes.
    pub investment_output: String,
}

impl ReportDraft {
    pub fn new() -> Self {
        Self::default()
    }
}
