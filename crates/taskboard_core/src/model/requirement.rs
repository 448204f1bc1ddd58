//! Requirement document model.
//!
//! # Responsibility
//! - Define versioned requirement records and their revision history.
//! - Parse and bump `v<major>.<minor>` version labels.
//!
//! # Invariants
//! - `history` is newest-first; its head matches `version` once the
//!   requirement has been revised at least once.
//! - Version labels round-trip through `Display` unchanged.

use crate::model::id::RecordId;
use crate::repo::Record;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static VERSION_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v(\d{1,9})\.(\d{1,9})$").expect("valid version label regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementStatus {
    PendingDevelopment,
    InDevelopment,
    Completed,
}

/// Malformed version label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLabelError(pub String);

impl Display for VersionLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid version label `{}`; expected v<major>.<minor>", self.0)
    }
}

impl Error for VersionLabelError {}

/// Document version such as `v1.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionLabel {
    pub major: u32,
    pub minor: u32,
}

impl VersionLabel {
    pub const INITIAL: Self = Self { major: 1, minor: 0 };

    pub fn next_minor(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor.saturating_add(1),
        }
    }
}

impl FromStr for VersionLabel {
    type Err = VersionLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_LABEL_RE
            .captures(value.trim())
            .ok_or_else(|| VersionLabelError(value.to_string()))?;
        let part = |index: usize| {
            caps[index]
                .parse::<u32>()
                .map_err(|_| VersionLabelError(value.to_string()))
        };
        Ok(Self {
            major: part(1)?,
            minor: part(2)?,
        })
    }
}

impl Display for VersionLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

impl Serialize for VersionLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of a requirement's revision history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementVersion {
    pub version: VersionLabel,
    pub date: NaiveDate,
    pub author: String,
    pub changes: String,
}

/// Versioned requirement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub status: RequirementStatus,
    pub author: String,
    pub version: VersionLabel,
    pub create_date: NaiveDate,
    pub last_modified: NaiveDate,
    /// Newest first.
    pub history: Vec<RequirementVersion>,
}

impl Requirement {
    /// Creates a `v1.0` requirement with one initial history entry.
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        author: impl Into<String>,
        create_date: NaiveDate,
    ) -> Self {
        let author = author.into();
        Self {
            id,
            title: title.into(),
            description: String::new(),
            status: RequirementStatus::PendingDevelopment,
            version: VersionLabel::INITIAL,
            create_date,
            last_modified: create_date,
            history: vec![RequirementVersion {
                version: VersionLabel::INITIAL,
                date: create_date,
                author: author.clone(),
                changes: "initial version".to_string(),
            }],
            author,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<RequirementStatus>,
    /// New head of the history; also sets `version` and `last_modified`.
    pub revision: Option<RequirementVersion>,
}

impl Record for Requirement {
    type Patch = RequirementPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: RequirementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(entry) = patch.revision {
            self.version = entry.version;
            self.last_modified = entry.date;
            self.history.insert(0, entry);
        }
    }
}
