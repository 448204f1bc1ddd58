//! Cost and output line items used by ROI roll-ups.

use crate::model::id::RecordId;
use crate::model::validation::{FormKind, Presence, ValidationError};
use crate::repo::Record;
use serde::{Deserialize, Serialize};

/// One cost line item. Amounts are expected to be non-negative but are not
/// checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub id: RecordId,
    pub name: String,
    pub amount: f64,
}

impl CostItem {
    pub fn new(id: RecordId, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostItemPatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

impl Record for CostItem {
    type Patch = CostItemPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: CostItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
    }
}

/// One produced output with its estimated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub id: RecordId,
    pub name: String,
    pub value: f64,
    pub description: String,
}

impl Output {
    pub fn new(id: RecordId, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPatch {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub description: Option<String>,
}

impl Record for Output {
    type Patch = OutputPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: OutputPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Create-form input for a cost line item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostDraft {
    pub name: String,
    pub amount: f64,
}

impl CostDraft {
    pub fn into_cost(self, id: RecordId) -> Result<CostItem, ValidationError> {
        Presence::new(FormKind::CostItem)
            .text("name", &self.name)
            .amount("amount", self.amount)
            .finish()?;
        Ok(CostItem::new(id, self.name.trim(), self.amount))
    }
}

/// Create-form input for an output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputDraft {
    pub name: String,
    pub value: f64,
    pub description: String,
}

impl OutputDraft {
    pub fn into_output(self, id: RecordId) -> Result<Output, ValidationError> {
        Presence::new(FormKind::Output)
            .text("name", &self.name)
            .amount("value", self.value)
            .finish()?;
        let mut output = Output::new(id, self.name.trim(), self.value);
        output.description = self.description;
        Ok(output)
    }
}
