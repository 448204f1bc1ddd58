//! Transient user notifications.
//!
//! # Responsibility
//! - Carry success/failure notices from services to whatever shows them.
//! - Provide an in-memory sink for tests and a log-backed sink for the CLI.
//!
//! # Invariants
//! - A rejected create emits exactly one `NoticeLevel::Error` notice.

use crate::model::validation::ValidationError;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    /// Failure notice naming the incomplete category of a form.
    pub fn incomplete(err: &ValidationError) -> Self {
        match err.form() {
            Some(form) => Self::error(format!("Please fill in complete {}", form.category())),
            None => Self::error(err.to_string()),
        }
    }
}

/// Sink for notices.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Records notices in memory.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices
            .iter()
            .filter(|notice| notice.level == level)
            .count()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Dismisses every notice.
    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Forwards notices to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(
                "event=notice module=service status=ok description={}",
                notice.description
            ),
            NoticeLevel::Error => warn!(
                "event=notice module=service status=error description={}",
                notice.description
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeLevel, NoticeLog, Notifier};
    use crate::model::validation::{FormKind, ValidationError};

    #[test]
    fn incomplete_notice_names_form_category() {
        let err = ValidationError::MissingFields {
            form: FormKind::CostItem,
            fields: vec!["amount"],
        };
        let notice = Notice::incomplete(&err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.description, "Please fill in complete cost information");
    }

    #[test]
    fn notice_log_counts_by_level() {
        let mut log = NoticeLog::new();
        log.notify(Notice::success("saved"));
        log.notify(Notice::error("missing"));
        assert_eq!(log.count(NoticeLevel::Error), 1);
        assert_eq!(log.count(NoticeLevel::Success), 1);
        log.clear();
        assert!(log.notices().is_empty());
    }
}
