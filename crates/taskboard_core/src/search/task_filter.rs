//! Task list filter and status sort.
//!
//! # Invariants
//! - Matching is case-insensitive and ORs across title, description and
//!   project.
//! - An empty term matches every task. Any other term, whitespace
//!   included, is matched as typed.
//! - Sorting is stable: tasks sharing a status keep their input order.

use crate::model::task::Task;

/// Search/sort options for one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Substring to look for; empty means "no filter".
    pub term: String,
    /// Order by status priority after filtering.
    pub sort_by_status: bool,
}

impl TaskQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            sort_by_status: true,
        }
    }
}

/// Whether `task` matches `term`.
pub fn matches_term(task: &Task, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&task.title, &task.description, &task.project]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Tasks matching `term`, in input order.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|task| matches_term(task, term)).collect()
}

/// Stable sort by status priority: overdue, in progress, pending, completed.
pub fn sort_by_status(tasks: &mut [&Task]) {
    tasks.sort_by_key(|task| task.status.sort_rank());
}

/// Applies `query` to `tasks` and returns owned copies.
pub fn run_query(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    let mut matched = filter_tasks(tasks, &query.term);
    if query.sort_by_status {
        sort_by_status(&mut matched);
    }
    matched.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_tasks, matches_term, run_query, TaskQuery};
    use crate::model::task::{Task, TaskKind, TaskStatus};
    use chrono::NaiveDate;

    fn task(id: &str, title: &str, project: &str, status: TaskStatus) -> Task {
        let deadline = NaiveDate::from_ymd_opt(2024, 6, 20).expect("valid date");
        let mut task = Task::new(id.into(), TaskKind::Personal, title, "me", deadline);
        task.project = project.to_string();
        task.status = status;
        task
    }

    #[test]
    fn term_is_case_insensitive_across_fields() {
        let mut t = task("1", "Design Review", "Portal", TaskStatus::Pending);
        t.description = "Check the MOCKUPS".to_string();
        assert!(matches_term(&t, "review"));
        assert!(matches_term(&t, "mockups"));
        assert!(matches_term(&t, "PORTAL"));
        assert!(!matches_term(&t, "budget"));
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        let tasks = vec![
            task("1", "a", "p", TaskStatus::Completed),
            task("2", "b", "p", TaskStatus::Overdue),
        ];
        let ids = filter_tasks(&tasks, "")
            .into_iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn whitespace_in_term_is_significant() {
        let t = task("1", "Design Review", "Portal", TaskStatus::Pending);
        assert!(!matches_term(&t, "review "));
        assert!(!matches_term(&t, "  "));
        assert!(matches_term(&t, "design review"));
        assert!(matches_term(&t, " "));
    }

    #[test]
    fn unsorted_query_preserves_input_order() {
        let tasks = vec![
            task("1", "a", "p", TaskStatus::Completed),
            task("2", "b", "p", TaskStatus::Overdue),
        ];
        let query = TaskQuery {
            term: String::new(),
            sort_by_status: false,
        };
        assert_eq!(run_query(&tasks, &query), tasks);
    }
}
