use chrono::NaiveDate;
use taskboard_core::model::report::{ProcessStepField, ReportDraft, SolutionField};
use taskboard_core::service::requirement_service::{RequirementService, Revision};
use taskboard_core::{
    seed, InMemoryRepository, NoticeLevel, NoticeLog, RecordId, Repository, Requirement,
    RequirementStatus, ServiceError, VersionLabel,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn service() -> RequirementService<InMemoryRepository<Requirement>, NoticeLog> {
    let repo = InMemoryRepository::seeded(seed::requirements()).unwrap();
    RequirementService::new(repo, NoticeLog::new())
}

fn revision(changes: &str, day: &str) -> Revision {
    Revision {
        author: "Zhang San".to_string(),
        changes: changes.to_string(),
        date: date(day),
        title: None,
        description: None,
    }
}

#[test]
fn revision_bumps_minor_version_and_prepends_history() {
    let mut service = service();
    let id = RecordId::from("1");

    let revised = service
        .revise(&id, revision("Clarified login flow", "2024-06-20"))
        .unwrap();

    assert_eq!(revised.version.to_string(), "v1.3");
    assert_eq!(revised.history.len(), 4);
    assert_eq!(revised.history[0].version, VersionLabel { major: 1, minor: 3 });
    assert_eq!(revised.history[0].changes, "Clarified login flow");
    assert_eq!(revised.history[1].version.to_string(), "v1.2");
    assert_eq!(revised.last_modified, date("2024-06-20"));
    assert_eq!(
        service.notifier().last().unwrap().description,
        "Saved as v1.3"
    );
}

#[test]
fn revision_keeps_collection_order_and_other_records() {
    let mut service = service();
    let before = service.list().unwrap();

    service
        .revise(&RecordId::from("2"), revision("Added SLA section", "2024-06-21"))
        .unwrap();

    let after = service.list().unwrap();
    let ids: Vec<String> = after.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].version.to_string(), "v1.1");
}

#[test]
fn revision_can_rename_and_redescribe() {
    let mut service = service();
    let mut request = revision("Scope change", "2024-06-22");
    request.title = Some("Reporting platform".to_string());
    request.description = Some("Self-service dashboards".to_string());

    let revised = service.revise(&RecordId::from("3"), request).unwrap();

    assert_eq!(revised.title, "Reporting platform");
    assert_eq!(revised.description, "Self-service dashboards");
    assert_eq!(revised.version.to_string(), "v2.2");
}

#[test]
fn revising_unknown_requirement_is_not_found() {
    let mut service = service();

    let err = service
        .revise(&RecordId::from("42"), revision("nothing", "2024-06-22"))
        .unwrap_err();

    assert_eq!(err, ServiceError::NotFound(RecordId::from("42")));
    assert_eq!(service.repo().count(), 3);
}

#[test]
fn status_change_does_not_bump_version() {
    let mut service = service();

    let updated = service
        .set_status(&RecordId::from("2"), RequirementStatus::Completed)
        .unwrap();

    assert_eq!(updated.status, RequirementStatus::Completed);
    assert_eq!(updated.version.to_string(), "v1.0");
    assert_eq!(updated.history.len(), 1);
}

#[test]
fn progress_counts_linked_development_tasks() {
    let service = service();
    let tasks = seed::development_tasks();

    let linked = service.progress(&RecordId::from("1"), &tasks);
    assert_eq!(linked.task_count, 3);
    assert_eq!(linked.completed_tasks, 1);
    assert_eq!(linked.percent(), 33);

    let unlinked = service.progress(&RecordId::from("2"), &tasks);
    assert_eq!(unlinked.task_count, 0);
    assert_eq!(unlinked.percent(), 0);
}

#[test]
fn submitted_report_becomes_initial_requirement() {
    let mut service = service();
    let mut draft = ReportDraft::new();
    draft.title = "Invoice automation".to_string();
    draft.background = "Manual invoice matching takes two days per month".to_string();
    let step = draft.process_steps.rows()[0].id.clone();
    draft
        .process_steps
        .update(&step, ProcessStepField::Step("Collect invoices".to_string()))
        .unwrap();
    draft.solutions.add().unwrap();
    let second = draft.solutions.rows()[1].id.clone();
    draft
        .solutions
        .update(&second, SolutionField::Content("OCR pipeline".to_string()))
        .unwrap();

    let created = service
        .submit_report(&draft, "Chen", date("2024-06-30"))
        .unwrap();

    assert_eq!(created.version, VersionLabel::INITIAL);
    assert_eq!(created.status, RequirementStatus::PendingDevelopment);
    assert_eq!(created.description, draft.background);
    assert_eq!(created.history.len(), 1);
    assert_eq!(service.repo().count(), 4);
    assert_eq!(draft.solutions.rows()[1].title, "Solution 2");
    assert_eq!(service.notifier().count(NoticeLevel::Success), 1);
}

#[test]
fn report_without_title_is_rejected() {
    let mut service = service();
    let draft = ReportDraft::new();

    let err = service
        .submit_report(&draft, "Chen", date("2024-06-30"))
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(service.repo().count(), 3);
    assert_eq!(
        service.notifier().last().unwrap().description,
        "Please fill in complete report information"
    );
}
