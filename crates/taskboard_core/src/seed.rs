//! Literal mock data every collection starts from.
//!
//! # Responsibility
//! - Provide the initial records for each in-memory collection.
//!
//! # Invariants
//! - Ids are unique within each returned list.
//! - Department tasks are ordered parents-first so they load into a
//!   `TaskTree` as-is.

use crate::model::finance::{CostItem, Output};
use crate::model::id::RecordId;
use crate::model::milestone::Milestone;
use crate::model::project::{
    BoardProject, DashboardProject, ProjectPhase, Scenario, ScenarioMetrics, ScenarioTask,
};
use crate::model::requirement::{Requirement, RequirementStatus, RequirementVersion, VersionLabel};
use crate::model::task::{Priority, Task, TaskKind, TaskStatus, TaskSuggestion};
use chrono::NaiveDate;

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or(NaiveDate::MIN)
}

fn version(major: u32, minor: u32) -> VersionLabel {
    VersionLabel { major, minor }
}

fn entry(label: VersionLabel, date: NaiveDate, author: &str, changes: &str) -> RequirementVersion {
    RequirementVersion {
        version: label,
        date,
        author: author.to_string(),
        changes: changes.to_string(),
    }
}

pub fn requirements() -> Vec<Requirement> {
    vec![
        Requirement {
            id: RecordId::from("1"),
            title: "User management system".to_string(),
            description: "Build complete user registration, login and permission management"
                .to_string(),
            status: RequirementStatus::Completed,
            author: "Zhang San".to_string(),
            version: version(1, 2),
            create_date: day(2024, 6, 1),
            last_modified: day(2024, 6, 15),
            history: vec![
                entry(version(1, 2), day(2024, 6, 15), "Zhang San", "Updated solution description"),
                entry(version(1, 1), day(2024, 6, 10), "Zhang San", "Refined resource plan"),
                entry(version(1, 0), day(2024, 6, 1), "Zhang San", "initial version"),
            ],
        },
        Requirement {
            id: RecordId::from("2"),
            title: "Order processing optimization".to_string(),
            description: "Streamline the order handling flow to raise throughput".to_string(),
            status: RequirementStatus::InDevelopment,
            author: "Li Si".to_string(),
            version: version(1, 0),
            create_date: day(2024, 6, 2),
            last_modified: day(2024, 6, 10),
            history: vec![entry(version(1, 0), day(2024, 6, 2), "Li Si", "initial version")],
        },
        Requirement {
            id: RecordId::from("3"),
            title: "Data reporting system".to_string(),
            description: "Business statistics and report dashboards".to_string(),
            status: RequirementStatus::Completed,
            author: "Wang Wu".to_string(),
            version: version(2, 1),
            create_date: day(2024, 5, 28),
            last_modified: day(2024, 6, 12),
            history: vec![
                entry(version(2, 1), day(2024, 6, 12), "Wang Wu", "Added export formats"),
                entry(version(2, 0), day(2024, 6, 5), "Wang Wu", "Reworked report layout"),
                entry(version(1, 0), day(2024, 5, 28), "Wang Wu", "initial version"),
            ],
        },
    ]
}

/// Development tasks linked to requirement `1`.
pub fn development_tasks() -> Vec<Task> {
    let requirement = RecordId::from("1");
    [
        ("1", "User registration", "Zhang San", day(2024, 6, 15), TaskStatus::Completed),
        ("2", "User login", "Li Si", day(2024, 6, 20), TaskStatus::InProgress),
        ("3", "Permission management module", "Wang Wu", day(2024, 6, 25), TaskStatus::Pending),
    ]
    .into_iter()
    .map(|(id, title, assignee, deadline, status)| {
        let mut task = Task::new(RecordId::from(id), TaskKind::Development, title, assignee, deadline);
        task.status = status;
        task.requirement_id = Some(requirement.clone());
        task
    })
    .collect()
}

/// Department tasks, parents before children.
pub fn department_tasks() -> Vec<Task> {
    let department = |id: &str,
                      title: &str,
                      description: &str,
                      initiator: &str,
                      assignee: &str,
                      status: TaskStatus,
                      deadline: NaiveDate,
                      parent: Option<&str>| {
        let mut task = Task::new(RecordId::from(id), TaskKind::Department, title, assignee, deadline);
        task.description = description.to_string();
        task.initiator = initiator.to_string();
        task.status = status;
        task.parent_id = parent.map(RecordId::from);
        task
    };

    vec![
        department(
            "1",
            "E-commerce ad creative redesign",
            "Optimize existing ad creatives to lift conversion",
            "Zhang San",
            "Li Si",
            TaskStatus::InProgress,
            day(2024, 6, 20),
            None,
        ),
        department(
            "1-1",
            "Competitor analysis",
            "Review creatives of comparable products",
            "Zhang San",
            "Wang Wu",
            TaskStatus::Completed,
            day(2024, 6, 15),
            Some("1"),
        ),
        department(
            "1-2",
            "Design draft production",
            "Produce new drafts from the analysis",
            "Zhang San",
            "Li Si",
            TaskStatus::InProgress,
            day(2024, 6, 18),
            Some("1"),
        ),
        department(
            "2",
            "User research campaign",
            "Plan and run a user research campaign to collect feedback",
            "Li Si",
            "Zhao Liu",
            TaskStatus::Pending,
            day(2024, 6, 25),
            None,
        ),
    ]
}

pub fn personal_tasks() -> Vec<Task> {
    [
        (
            "1",
            "Revise e-commerce ad design",
            "Rework the ad design per client feedback: colors, typography and layout.",
            TaskStatus::Overdue,
            day(2024, 6, 10),
            Priority::High,
            "E-commerce ad optimization",
            65,
            "Manager Zhang",
            day(2024, 6, 1),
        ),
        (
            "2",
            "User research data analysis",
            "Analyze the collected survey data and write up behavior and pain points.",
            TaskStatus::InProgress,
            day(2024, 6, 18),
            Priority::High,
            "User research",
            40,
            "Director Li",
            day(2024, 6, 5),
        ),
        (
            "3",
            "Competitor analysis report",
            "Write the competitor report covering features, market strategy and feedback.",
            TaskStatus::InProgress,
            day(2024, 6, 20),
            Priority::Medium,
            "Market research",
            25,
            "Supervisor Wang",
            day(2024, 6, 8),
        ),
        (
            "4",
            "Prototype design review",
            "Join the prototype review and give feedback on feasibility.",
            TaskStatus::Pending,
            day(2024, 6, 22),
            Priority::Medium,
            "Product design",
            0,
            "Designer Chen",
            day(2024, 6, 12),
        ),
        (
            "5",
            "Project documentation cleanup",
            "Organize requirement, design and technical documents.",
            TaskStatus::Completed,
            day(2024, 6, 8),
            Priority::Low,
            "Documentation",
            100,
            "Manager Liu",
            day(2024, 5, 28),
        ),
    ]
    .into_iter()
    .map(
        |(id, title, description, status, deadline, priority, project, progress, by, created)| {
            let mut task = Task::new(RecordId::from(id), TaskKind::Personal, title, "me", deadline);
            task.description = description.to_string();
            task.status = status;
            task.priority = Some(priority);
            task.project = project.to_string();
            task.progress = progress;
            task.assigned_by = by.to_string();
            task.created_date = Some(created);
            task
        },
    )
    .collect()
}

pub fn milestones() -> Vec<Milestone> {
    let milestone = |id: &str,
                     name: &str,
                     date: NaiveDate,
                     description: &str,
                     status: TaskStatus,
                     costs: &[(&str, f64)]| {
        let mut milestone = Milestone::new(RecordId::from(id), name, date);
        milestone.description = description.to_string();
        milestone.status = status;
        milestone.image = Some("/api/placeholder/300/200".to_string());
        milestone.costs = costs
            .iter()
            .enumerate()
            .map(|(index, (name, amount))| {
                CostItem::new(RecordId::from(format!("{id}-{}", index + 1)), *name, *amount)
            })
            .collect();
        milestone
    };

    vec![
        milestone(
            "1",
            "Requirement analysis",
            day(2024, 5, 15),
            "Finish user research and fix scope and architecture.",
            TaskStatus::Completed,
            &[("Analyst salary", 8000.0), ("Research expenses", 2000.0)],
        ),
        milestone(
            "2",
            "System architecture design",
            day(2024, 6, 1),
            "Design database, API and front-end component structure.",
            TaskStatus::Completed,
            &[("Architect salary", 12000.0), ("Design tooling", 1000.0)],
        ),
        milestone(
            "3",
            "Core feature development",
            day(2024, 6, 15),
            "Build registration, login and permission modules.",
            TaskStatus::InProgress,
            &[
                ("Front-end salary", 15000.0),
                ("Back-end salary", 18000.0),
                ("Dev environment", 3000.0),
            ],
        ),
        milestone(
            "4",
            "System testing",
            day(2024, 6, 25),
            "Unit, integration and acceptance testing.",
            TaskStatus::Pending,
            &[("QA salary", 8000.0), ("Test tooling", 2000.0)],
        ),
        milestone(
            "5",
            "Deployment and launch",
            day(2024, 7, 5),
            "Configure production, go live and hand over runbooks.",
            TaskStatus::Pending,
            &[
                ("Ops salary", 6000.0),
                ("Servers", 5000.0),
                ("Domain and SSL", 500.0),
            ],
        ),
    ]
}

pub fn costs() -> Vec<CostItem> {
    vec![
        CostItem::new(RecordId::from("1"), "A", 50000.0),
        CostItem::new(RecordId::from("2"), "B", 5000.0),
    ]
}

pub fn outputs() -> Vec<Output> {
    vec![
        Output::new(RecordId::from("1"), "X", 100000.0),
        Output::new(RecordId::from("2"), "Y", 10000.0),
    ]
}

pub fn dashboard_projects() -> Vec<DashboardProject> {
    let project = |id: &str,
                   title: &str,
                   department: &str,
                   progress: u8,
                   phase: ProjectPhase,
                   (total_tasks, completed_tasks): (u32, u32),
                   remaining_days: u32,
                   team: &[&str]| DashboardProject {
        id: RecordId::from(id),
        title: title.to_string(),
        department: department.to_string(),
        progress,
        phase,
        total_tasks,
        completed_tasks,
        remaining_days,
        team: team.iter().map(|name| name.to_string()).collect(),
    };

    vec![
        project(
            "1",
            "User management system",
            "Engineering",
            85,
            ProjectPhase::InDevelopment,
            (12, 10),
            5,
            &["Zhang San", "Li Si", "Wang Wu"],
        ),
        project(
            "2",
            "Order processing optimization",
            "Product",
            60,
            ProjectPhase::Design,
            (8, 5),
            12,
            &["Zhao Liu", "Qian Qi"],
        ),
        project(
            "3",
            "Data reporting system",
            "Operations",
            100,
            ProjectPhase::Completed,
            (6, 6),
            0,
            &["Sun Ba", "Zhou Jiu", "Wu Shi"],
        ),
    ]
}

pub fn board_projects() -> Vec<BoardProject> {
    let task = |name: &str, status: TaskStatus, priority: Priority| ScenarioTask {
        name: name.to_string(),
        status,
        priority,
    };
    let scenario = |id: &str,
                    name: &str,
                    description: &str,
                    progress: u8,
                    tasks: Vec<ScenarioTask>,
                    (total_tasks, completed_tasks, team_members, days_left): (u32, u32, u32, u32)| {
        Scenario {
            id: RecordId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            progress,
            tasks,
            metrics: ScenarioMetrics {
                total_tasks,
                completed_tasks,
                team_members,
                days_left,
            },
        }
    };

    vec![
        BoardProject {
            id: RecordId::from("brand-tmall"),
            name: "Brand and Tmall co-creation".to_string(),
            scenarios: vec![
                scenario(
                    "brand",
                    "Brand vision",
                    "Integrate brand resources into a full-funnel digital marketing system.",
                    75,
                    vec![
                        task("Scenario strategy", TaskStatus::Completed, Priority::High),
                        task("Scenario flow breakdown", TaskStatus::InProgress, Priority::Medium),
                        task("Strategy write-up", TaskStatus::Pending, Priority::Low),
                        task("Presentation training", TaskStatus::Pending, Priority::Medium),
                    ],
                    (15, 8, 6, 12),
                ),
                scenario(
                    "tmall",
                    "Tmall vision",
                    "Use the Tmall ecosystem to drive efficient brand growth.",
                    60,
                    vec![
                        task("Research rollout", TaskStatus::Completed, Priority::High),
                        task("Scenario mapping", TaskStatus::InProgress, Priority::High),
                        task("Shared topic factory", TaskStatus::InProgress, Priority::Medium),
                        task("MVP demo", TaskStatus::Pending, Priority::High),
                        task("Game mechanics", TaskStatus::Pending, Priority::Medium),
                    ],
                    (12, 5, 8, 18),
                ),
            ],
        },
        BoardProject {
            id: RecordId::from("digital-marketing"),
            name: "Digital marketing innovation".to_string(),
            scenarios: vec![
                scenario(
                    "social",
                    "Social media matrix",
                    "Build a cross-platform social media presence.",
                    85,
                    vec![
                        task("Platform strategy", TaskStatus::Completed, Priority::High),
                        task("Content workflow", TaskStatus::Completed, Priority::Medium),
                        task("Analytics pipeline", TaskStatus::InProgress, Priority::High),
                    ],
                    (10, 7, 4, 5),
                ),
                scenario(
                    "ai-powered",
                    "AI marketing",
                    "Targeted marketing and personalized experiences.",
                    40,
                    vec![
                        task("Model design", TaskStatus::InProgress, Priority::High),
                        task("Data collection", TaskStatus::Pending, Priority::Medium),
                        task("Test environment", TaskStatus::Pending, Priority::Low),
                    ],
                    (8, 2, 5, 25),
                ),
            ],
        },
    ]
}

/// Canned batch-create suggestions.
pub fn default_suggestions() -> Vec<TaskSuggestion> {
    [
        ("Market research", "Analyze the target market and competitors", 3),
        ("User interviews", "Interview target users about their pain points", 5),
        ("Data synthesis", "Consolidate interview data into a report", 2),
    ]
    .into_iter()
    .map(|(title, description, estimated_days)| TaskSuggestion {
        title: title.to_string(),
        description: description.to_string(),
        estimated_days,
    })
    .collect()
}
