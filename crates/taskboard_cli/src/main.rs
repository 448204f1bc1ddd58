//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage and print seeded roll-ups.
//! - Keep output deterministic for quick local sanity checks.

use log::{error, info};
use std::process::ExitCode;
use taskboard_core::metrics::{BoardSummary, DashboardSummary, RoadmapSummary, TaskStats};
use taskboard_core::service::ledger_service::LedgerService;
use taskboard_core::service::notify::LogNotifier;
use taskboard_core::{seed, CoreConfig, InMemoryRepository, ServiceError};

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = config.apply_logging() {
        eprintln!("taskboard logging disabled: {err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error detail={err}");
            eprintln!("taskboard error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServiceError> {
    println!("taskboard_core version={}", taskboard_core::core_version());

    let ledger = LedgerService::new(
        InMemoryRepository::seeded(seed::costs())?,
        InMemoryRepository::seeded(seed::outputs())?,
        LogNotifier,
    );
    let roi = ledger.roi()?;
    println!(
        "ledger total_cost={} total_output={} roi={}",
        roi.total_cost,
        roi.total_output,
        roi.roi_display()
    );

    let roadmap = RoadmapSummary::from_milestones(&seed::milestones());
    println!(
        "roadmap milestones={} completed={} total_cost={} (x10k={})",
        roadmap.milestone_count,
        roadmap.completed_count,
        roadmap.total_cost,
        roadmap.total_cost_in_ten_thousands()
    );

    let dashboard = DashboardSummary::from_projects(&seed::dashboard_projects());
    println!(
        "dashboard total_tasks={} completed_tasks={} active_projects={} participants={}",
        dashboard.total_tasks,
        dashboard.completed_tasks,
        dashboard.active_projects,
        dashboard.participants
    );

    for project in seed::board_projects() {
        let board = BoardSummary::from_project(&project);
        println!(
            "board project={} total_tasks={} completed_tasks={} team_members={} avg_progress={}",
            project.id,
            board.total_tasks,
            board.completed_tasks,
            board.team_members,
            board.average_progress
        );
    }

    let personal = TaskStats::from_tasks(&seed::personal_tasks());
    println!(
        "personal total={} overdue={} in_progress={} pending={} completed={}",
        personal.total,
        personal.overdue,
        personal.in_progress,
        personal.pending,
        personal.completed
    );

    info!("event=cli_run module=cli status=ok");
    Ok(())
}
