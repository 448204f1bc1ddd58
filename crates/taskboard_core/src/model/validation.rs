//! Presence validation for create forms.
//!
//! # Responsibility
//! - Check that the required fields of one form are filled in.
//! - Report every missing field at once, grouped under the form's category.
//!
//! # Invariants
//! - Text fields count as missing when blank after trim.
//! - Numeric fields count as missing when exactly zero.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date-only wire/input format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Create forms that enforce required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    DevelopmentTask,
    DepartmentTask,
    CostItem,
    Milestone,
    Output,
    Report,
}

impl FormKind {
    /// User-facing category used in failure notices.
    pub fn category(self) -> &'static str {
        match self {
            Self::DevelopmentTask | Self::DepartmentTask => "task information",
            Self::CostItem => "cost information",
            Self::Milestone => "milestone information",
            Self::Output => "output information",
            Self::Report => "report information",
        }
    }
}

/// Form validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty.
    MissingFields {
        form: FormKind,
        fields: Vec<&'static str>,
    },
    /// A date field is present but not `YYYY-MM-DD`.
    InvalidDate { field: &'static str, value: String },
}

impl ValidationError {
    /// Form the failing input belongs to, when known.
    pub fn form(&self) -> Option<FormKind> {
        match self {
            Self::MissingFields { form, .. } => Some(*form),
            Self::InvalidDate { .. } => None,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { form, fields } => write!(
                f,
                "{} is incomplete: missing {}",
                form.category(),
                fields.join(", ")
            ),
            Self::InvalidDate { field, value } => {
                write!(f, "`{field}` must be a YYYY-MM-DD date, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Collects missing required fields for one form.
#[derive(Debug)]
pub(crate) struct Presence {
    form: FormKind,
    missing: Vec<&'static str>,
}

impl Presence {
    pub(crate) fn new(form: FormKind) -> Self {
        Self {
            form,
            missing: Vec::new(),
        }
    }

    pub(crate) fn text(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
        self
    }

    pub(crate) fn amount(mut self, field: &'static str, value: f64) -> Self {
        if value == 0.0 {
            self.missing.push(field);
        }
        self
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(ValidationError::MissingFields {
            form: self.form,
            fields: self.missing,
        })
    }
}

/// Parses a date-only input field.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}
