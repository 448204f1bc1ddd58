use chrono::NaiveDate;
use taskboard_core::search::task_filter::run_query;
use taskboard_core::{
    filter_tasks, seed, sort_by_status, InMemoryRepository, NoticeLog, RecordId, Task, TaskKind,
    TaskQuery, TaskService, TaskStatus,
};

fn task(id: &str, status: TaskStatus) -> Task {
    let deadline = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    let mut task = Task::new(RecordId::from(id), TaskKind::Personal, format!("Task {id}"), "me", deadline);
    task.status = status;
    task
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.to_string()).collect()
}

#[test]
fn project_only_term_returns_exactly_that_task() {
    let tasks = seed::personal_tasks();

    let hits = filter_tasks(&tasks, "MARKET research");

    assert_eq!(ids(&hits), vec!["3"]);
}

#[test]
fn empty_term_returns_everything_in_order() {
    let tasks = seed::personal_tasks();

    let hits = filter_tasks(&tasks, "");

    assert_eq!(ids(&hits), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn trailing_space_in_term_is_not_ignored() {
    let deadline = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    let tasks = vec![
        Task::new(RecordId::from("1"), TaskKind::Personal, "Design Review", "me", deadline),
        Task::new(RecordId::from("2"), TaskKind::Personal, "Budget", "me", deadline),
    ];

    assert!(filter_tasks(&tasks, "review ").is_empty());
    assert_eq!(ids(&filter_tasks(&tasks, "review")), vec!["1"]);
    assert_eq!(ids(&filter_tasks(&tasks, " ")), vec!["1"]);
}

#[test]
fn term_matches_description_case_insensitively() {
    let tasks = seed::personal_tasks();

    let hits = filter_tasks(&tasks, "FEASIBILITY");

    assert_eq!(ids(&hits), vec!["4"]);
    assert!(filter_tasks(&tasks, "no such words").is_empty());
}

#[test]
fn status_sort_orders_by_urgency() {
    let tasks = vec![
        task("a", TaskStatus::Completed),
        task("b", TaskStatus::Overdue),
        task("c", TaskStatus::Pending),
        task("d", TaskStatus::InProgress),
    ];
    let mut view: Vec<&Task> = tasks.iter().collect();

    sort_by_status(&mut view);

    let statuses: Vec<TaskStatus> = view.iter().map(|task| task.status).collect();
    assert_eq!(
        statuses,
        vec![
            TaskStatus::Overdue,
            TaskStatus::InProgress,
            TaskStatus::Pending,
            TaskStatus::Completed,
        ]
    );
}

#[test]
fn status_sort_is_stable_for_ties() {
    let tasks = vec![
        task("p1", TaskStatus::Pending),
        task("i1", TaskStatus::InProgress),
        task("p2", TaskStatus::Pending),
        task("i2", TaskStatus::InProgress),
        task("p3", TaskStatus::Pending),
    ];
    let mut view: Vec<&Task> = tasks.iter().collect();

    sort_by_status(&mut view);

    assert_eq!(ids(&view), vec!["i1", "i2", "p1", "p2", "p3"]);
}

#[test]
fn query_never_reorders_the_source() {
    let tasks = seed::personal_tasks();
    let snapshot = tasks.clone();

    let view = run_query(&tasks, &TaskQuery::search("design"));

    assert_eq!(tasks, snapshot);
    let view_ids: Vec<String> = view.iter().map(|task| task.id.to_string()).collect();
    assert_eq!(view_ids, vec!["1", "4", "5"]);
}

#[test]
fn service_view_filters_then_sorts() {
    let repo = InMemoryRepository::seeded(seed::personal_tasks()).unwrap();
    let mut service = TaskService::new(TaskKind::Personal, repo, NoticeLog::new());
    service
        .set_status(&RecordId::from("1"), TaskStatus::Completed)
        .unwrap();

    let sorted = service.view(&TaskQuery::search("")).unwrap();
    let sorted_ids: Vec<String> = sorted.iter().map(|task| task.id.to_string()).collect();
    assert_eq!(sorted_ids, vec!["2", "3", "4", "1", "5"]);
    let stored_ids: Vec<String> = service
        .list()
        .unwrap()
        .iter()
        .map(|task| task.id.to_string())
        .collect();
    assert_eq!(stored_ids, vec!["1", "2", "3", "4", "5"]);

    let unsorted = service
        .view(&TaskQuery {
            term: "analysis".to_string(),
            sort_by_status: false,
        })
        .unwrap();
    let unsorted_ids: Vec<String> = unsorted.iter().map(|task| task.id.to_string()).collect();
    assert_eq!(unsorted_ids, vec!["2", "3"]);
}
