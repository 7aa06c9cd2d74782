//! Progress engine
//!
//! Derives per-stage completion percentages and the overall figure from the
//! boolean task items, and maps percentages to status badges.
//!
//! # Contracts
//!
//! - Percentage arithmetic is round-half-up: `round(100 * completed / total)`.
//! - An empty item set (stage or whole board) is a deliberate no-op: the
//!   previously stored percentage is retained, never reset to zero.
//! - A stage whose badge reads "Not Started" is never auto-promoted; the
//!   sentinel only guards that one label, so a "Completed" stage demotes
//!   normally when an item is unchecked.
//! - Toggling one item recomputes the owning stage first, then the overall
//!   figure, so the overall number always reflects the just-updated stage.
//! - Every recomputation is a complete pass over the current item set;
//!   repeated calls with unchanged inputs yield identical results.

use log::debug;

use crate::models::{Dashboard, MetricValue, Stage, StageStatus};

/// Headline metric kept in sync with the overall figure
pub const OVERALL_METRIC_LABEL: &str = "Overall Progress";

/// Completion percentage over a set of boolean flags, round-half-up.
/// Returns `None` for an empty set (the caller retains its prior value).
pub fn percentage(completed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    Some((completed as f64 / total as f64 * 100.0).round() as u8)
}

/// Map a freshly computed percentage to a status badge.
///
/// Pure function of its two inputs. The "Not Started" sentinel is returned
/// unchanged: a stage explicitly marked not-started is never auto-promoted.
pub fn derive_status(percentage: u8, current: StageStatus) -> StageStatus {
    if current == StageStatus::NotStarted {
        return StageStatus::NotStarted;
    }
    match percentage {
        100 => StageStatus::Completed,
        0 => StageStatus::Planning,
        _ => StageStatus::InProgress,
    }
}

/// Recompute one stage's stored percentage and status badge.
/// No-op for a stage with zero task items.
pub fn update_stage_progress(stage: &mut Stage) {
    let Some(pct) = percentage(stage.completed(), stage.total()) else {
        debug!("stage '{}' has no tasks, keeping {}%", stage.id, stage.percentage);
        return;
    };
    stage.percentage = pct;
    stage.status = derive_status(pct, stage.status);
}

/// Recompute the board's stored overall percentage from the union of all
/// task items. No-op when the board has no task items at all.
pub fn update_overall_progress(dashboard: &mut Dashboard) {
    let Some(pct) = percentage(dashboard.completed_tasks(), dashboard.total_tasks()) else {
        debug!("board has no tasks, keeping overall {}%", dashboard.overall_percentage);
        return;
    };
    dashboard.overall_percentage = pct;

    // The quick-stat metric with the overall label mirrors the stored figure
    for metric in &mut dashboard.metrics {
        if metric.label == OVERALL_METRIC_LABEL {
            metric.value = MetricValue::Percent(pct);
        }
    }
}

/// Recompute every stage and then the overall figure, in that order.
/// Run once at board load so the displayed state reflects the seeded flags.
pub fn refresh_all(dashboard: &mut Dashboard) {
    for stage in &mut dashboard.stages {
        update_stage_progress(stage);
    }
    update_overall_progress(dashboard);
}

/// Toggle one task item and run the recomputation contract: the owning
/// stage first, then the overall figure.
///
/// Returns the item's new completed flag, or `None` when the reference is
/// out of range (absent input is a silent no-op; the board is untouched).
pub fn apply_toggle(dashboard: &mut Dashboard, stage: usize, task: usize) -> Option<bool> {
    let owning = dashboard.stages.get_mut(stage)?;
    let checked = owning.tasks.get_mut(task)?.toggle();
    debug!(
        "toggled {}.{} -> {}",
        owning.id,
        task + 1,
        if checked { "checked" } else { "unchecked" }
    );
    update_stage_progress(owning);
    update_overall_progress(dashboard);
    Some(checked)
}
