use chrono::NaiveDate;
use taskboard_core::model::task::{TaskPatch, TaskSuggestion};
use taskboard_core::{
    seed, FormKind, InMemoryRepository, NoticeLevel, NoticeLog, RecordId, Repository,
    ServiceError, Task, TaskDraft, TaskKind, TaskService, TaskStatus, ValidationError,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn development_service() -> TaskService<InMemoryRepository<Task>, NoticeLog> {
    let repo = InMemoryRepository::seeded(seed::development_tasks()).unwrap();
    TaskService::new(TaskKind::Development, repo, NoticeLog::new())
}

#[test]
fn create_appends_pending_task_with_fresh_id() {
    let mut service = development_service();

    let task = service
        .create(TaskDraft::new("Password reset", "Zhao Liu", "2024-06-30"))
        .unwrap();

    let tasks = service.list().unwrap();
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks.last().unwrap(), &task);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.deadline, date("2024-06-30"));
    assert!(task.description.is_empty());
    assert_eq!(service.notifier().count(NoticeLevel::Success), 1);
    assert_eq!(service.notifier().last().unwrap().description, "Task added");
}

#[test]
fn create_with_empty_assignee_is_rejected_once() {
    let mut service = development_service();

    let err = service
        .create(TaskDraft::new("Password reset", "", "2024-06-30"))
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::MissingFields {
            form: FormKind::DevelopmentTask,
            fields: vec!["assignee"],
        })
    );
    assert_eq!(service.list().unwrap().len(), 3);
    assert_eq!(service.notifier().notices().len(), 1);
    let notice = service.notifier().last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.description, "Please fill in complete task information");
}

#[test]
fn create_with_blank_fields_and_bad_date_is_rejected() {
    let mut service = development_service();

    let blank = service
        .create(TaskDraft::new("   ", "Li Si", "2024-06-30"))
        .unwrap_err();
    assert!(matches!(blank, ServiceError::Validation(_)));

    let bad_date = service
        .create(TaskDraft::new("Audit log", "Li Si", "30/06/2024"))
        .unwrap_err();
    assert!(matches!(
        bad_date,
        ServiceError::Validation(ValidationError::InvalidDate { field: "deadline", .. })
    ));

    assert_eq!(service.list().unwrap().len(), 3);
    assert_eq!(service.notifier().count(NoticeLevel::Error), 2);
}

#[test]
fn create_for_requirement_links_task() {
    let mut service = development_service();
    let requirement = RecordId::from("2");

    let task = service
        .create_for_requirement(&requirement, TaskDraft::new("Order queue", "Qian Qi", "2024-07-01"))
        .unwrap();

    assert_eq!(task.requirement_id, Some(requirement));
}

#[test]
fn delete_unknown_id_leaves_collection_identical() {
    let mut service = development_service();
    let before = service.list().unwrap();

    let err = service.remove(&RecordId::from("missing")).unwrap_err();

    assert_eq!(err, ServiceError::NotFound(RecordId::from("missing")));
    assert_eq!(service.list().unwrap(), before);
    assert!(service.notifier().notices().is_empty());
}

#[test]
fn delete_preserves_order_of_remaining_tasks() {
    let mut service = development_service();

    let removed = service.remove(&RecordId::from("2")).unwrap();

    assert_eq!(removed.title, "User login");
    let ids: Vec<String> = service
        .list()
        .unwrap()
        .into_iter()
        .map(|task| task.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(service.notifier().last().unwrap().description, "Task deleted");
}

#[test]
fn update_touches_only_the_target_record() {
    let mut service = development_service();
    let before = service.list().unwrap();

    let patch = TaskPatch {
        title: Some("Login with SSO".to_string()),
        progress: Some(250),
        ..TaskPatch::default()
    };
    let updated = service.update(&RecordId::from("2"), patch).unwrap();

    assert_eq!(updated.title, "Login with SSO");
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.assignee, "Li Si");
    let after = service.list().unwrap();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
}

#[test]
fn set_status_accepts_any_transition() {
    let repo = InMemoryRepository::seeded(seed::personal_tasks()).unwrap();
    let mut service = TaskService::new(TaskKind::Personal, repo, NoticeLog::new());
    let id = RecordId::from("5");

    let reopened = service.set_status(&id, TaskStatus::Pending).unwrap();
    assert_eq!(reopened.status, TaskStatus::Pending);
    let overdue = service.set_status(&id, TaskStatus::Overdue).unwrap();
    assert_eq!(overdue.status, TaskStatus::Overdue);

    assert_eq!(service.notifier().count(NoticeLevel::Success), 2);
    assert_eq!(
        service.notifier().last().unwrap().description,
        "Task status updated"
    );
}

#[test]
fn batch_create_sets_deadlines_from_estimates() {
    let mut service = TaskService::new(
        TaskKind::Department,
        InMemoryRepository::new(),
        NoticeLog::new(),
    );
    let today = date("2024-06-28");

    let created = service
        .create_from_suggestions(&seed::default_suggestions(), today)
        .unwrap();

    let deadlines: Vec<NaiveDate> = created.iter().map(|task| task.deadline).collect();
    assert_eq!(
        deadlines,
        vec![date("2024-07-01"), date("2024-07-03"), date("2024-06-30")]
    );
    for (index, task) in created.iter().enumerate() {
        assert!(task.id.as_str().ends_with(&format!("-{index}")));
        assert_eq!(task.kind, TaskKind::Department);
    }
    assert_eq!(service.repo().count(), 3);
    assert_eq!(service.notifier().notices().len(), 1);
    assert_eq!(service.notifier().last().unwrap().description, "Created 3 tasks");
}

#[test]
fn batch_create_with_no_suggestions_creates_nothing() {
    let mut service = TaskService::new(
        TaskKind::Department,
        InMemoryRepository::new(),
        NoticeLog::new(),
    );

    let created: Vec<Task> = service
        .create_from_suggestions(&Vec::<TaskSuggestion>::new(), date("2024-06-28"))
        .unwrap();

    assert!(created.is_empty());
    assert_eq!(service.repo().count(), 0);
}

#[test]
fn reassign_requires_an_assignee() {
    let mut service = development_service();
    let id = RecordId::from("3");

    let err = service.reassign(&id, "  ").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(service.get(&id).unwrap().unwrap().assignee, "Wang Wu");

    let moved = service.reassign(&id, " Sun Ba ").unwrap();
    assert_eq!(moved.assignee, "Sun Ba");
    assert_eq!(service.notifier().last().unwrap().description, "Task transferred");
}
