// Progress engine contract tests against the public library API

use stagedash::models::{Dashboard, Stage, StageStatus, StatusTier, TaskItem};
use stagedash::progress::{
    apply_toggle, derive_status, percentage, sweep_angle, update_overall_progress,
    update_stage_progress,
};

fn stage(id: &str, status: StageStatus, flags: &[bool]) -> Stage {
    let mut s = Stage::new(id, format!("Stage {}", id));
    s.status = status;
    for (i, &completed) in flags.iter().enumerate() {
        s.tasks.push(TaskItem {
            label: format!("task {}", i + 1),
            assignee: None,
            completed,
        });
    }
    s
}

fn board(stages: Vec<Stage>) -> Dashboard {
    Dashboard {
        title: "Launch".to_string(),
        stages,
        stakeholders: Vec::new(),
        metrics: Vec::new(),
        overall_percentage: 0,
    }
}

#[test]
fn percentage_uses_round_half_up() {
    assert_eq!(percentage(1, 3), Some(33));
    assert_eq!(percentage(2, 3), Some(67));
    assert_eq!(percentage(3, 4), Some(75));
    assert_eq!(percentage(1, 2), Some(50));
}

#[test]
fn empty_stage_keeps_prior_percentage() {
    for prior in [0u8, 42, 100] {
        let mut s = stage("empty", StageStatus::InProgress, &[]);
        s.percentage = prior;
        update_stage_progress(&mut s);
        assert_eq!(s.percentage, prior);
    }
}

#[test]
fn status_derivation_matrix() {
    assert_eq!(
        derive_status(100, StageStatus::InProgress),
        StageStatus::Completed
    );
    assert_eq!(
        derive_status(50, StageStatus::Planning),
        StageStatus::InProgress
    );
    assert_eq!(
        derive_status(0, StageStatus::InProgress),
        StageStatus::Planning
    );
    assert_eq!(
        derive_status(75, StageStatus::NotStarted),
        StageStatus::NotStarted
    );
}

#[test]
fn overall_empty_board_is_noop_and_three_of_four_is_75() {
    let mut empty = board(vec![]);
    empty.overall_percentage = 33;
    update_overall_progress(&mut empty);
    assert_eq!(empty.overall_percentage, 33);

    let mut b = board(vec![
        stage("1", StageStatus::InProgress, &[true, true, true]),
        stage("2", StageStatus::InProgress, &[false]),
    ]);
    update_overall_progress(&mut b);
    assert_eq!(b.overall_percentage, 75);
}

#[test]
fn recomputation_is_idempotent() {
    let mut b = board(vec![stage("1", StageStatus::InProgress, &[true, false, false])]);
    update_stage_progress(&mut b.stages[0]);
    update_overall_progress(&mut b);
    let snapshot = (b.stages[0].percentage, b.stages[0].status, b.overall_percentage);

    update_stage_progress(&mut b.stages[0]);
    update_overall_progress(&mut b);
    assert_eq!(
        (b.stages[0].percentage, b.stages[0].status, b.overall_percentage),
        snapshot
    );
}

#[test]
fn end_to_end_toggle_sequence() {
    // Stage at [false,false,true] with "In Progress": 33%, warning tier
    let mut b = board(vec![stage(
        "1",
        StageStatus::InProgress,
        &[false, false, true],
    )]);
    update_stage_progress(&mut b.stages[0]);
    update_overall_progress(&mut b);
    assert_eq!(b.stages[0].percentage, 33);
    assert_eq!(b.stages[0].status, StageStatus::InProgress);
    assert_eq!(b.stages[0].status.tier(), StatusTier::Warning);

    // Toggle the two open items: 100%, success tier, overall follows
    assert_eq!(apply_toggle(&mut b, 0, 0), Some(true));
    assert_eq!(apply_toggle(&mut b, 0, 1), Some(true));
    assert_eq!(b.stages[0].percentage, 100);
    assert_eq!(b.stages[0].status, StageStatus::Completed);
    assert_eq!(b.stages[0].status.tier(), StatusTier::Success);
    assert_eq!(b.overall_percentage, 100);
}

#[test]
fn sweep_angle_is_proportional() {
    assert_eq!(sweep_angle(0), 0.0);
    assert_eq!(sweep_angle(50), 180.0);
    assert_eq!(sweep_angle(100), 360.0);
}

#[test]
fn not_started_stage_keeps_badge_through_toggles() {
    let mut b = board(vec![stage("1", StageStatus::NotStarted, &[false, false])]);
    apply_toggle(&mut b, 0, 0);
    assert_eq!(b.stages[0].percentage, 50);
    assert_eq!(b.stages[0].status, StageStatus::NotStarted);

    apply_toggle(&mut b, 0, 1);
    assert_eq!(b.stages[0].percentage, 100);
    assert_eq!(b.stages[0].status, StageStatus::NotStarted);
}
