//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into form-level create/update/delete use
//!   cases.
//! - Turn validation failures into one failure notice and an `Err`.
//! - Keep callers decoupled from the repository implementation.

pub mod ledger_service;
pub mod notify;
pub mod requirement_service;
pub mod roadmap_service;
pub mod task_service;

use crate::model::id::RecordId;
use crate::model::validation::ValidationError;
use crate::repo::RepoError;
use log::debug;
use notify::{Notice, Notifier};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service-level error for every use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Form input is incomplete or malformed.
    Validation(ValidationError),
    /// Target record does not exist.
    NotFound(RecordId),
    /// Other repository failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Logs and surfaces a rejected form, then hands back the error.
pub(crate) fn reject<N: Notifier>(
    notifier: &mut N,
    event: &str,
    err: ValidationError,
) -> ServiceError {
    debug!("event={event} module=service status=error reason=validation detail={err}");
    notifier.notify(Notice::incomplete(&err));
    ServiceError::Validation(err)
}
