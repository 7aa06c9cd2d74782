// Output formatting utilities

use chrono::Local;

use crate::filter::TeamFilter;
use crate::models::{Dashboard, Metric, MetricValue, Stage, Stakeholder, StatusTier};
use crate::progress::{ring_glyph, sweep_angle};
use crate::ui::{SectionState, SECTION_OVERVIEW, SECTION_STAGES, SECTION_TEAM};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_STRIKE: &str = "\x1b[9m";
const ANSI_RESET: &str = "\x1b[0m";

// ANSI foreground colors (standard 16-color palette)
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// ANSI color for a status tier badge
fn tier_color(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Success => ANSI_FG_GREEN,
        StatusTier::Warning => ANSI_FG_YELLOW,
        StatusTier::Info => ANSI_FG_CYAN,
        StatusTier::Neutral => ANSI_FG_BRIGHT_BLACK,
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    100
}

fn color_if_tty(text: &str, color: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", color, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn bold_if_tty(text: &str, is_tty: bool) -> String {
    color_if_tty(text, ANSI_BOLD, is_tty)
}

/// Format a count with thousands separators (12500 -> "12,500")
pub fn format_count(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Status badge: `[In Progress]`, colored by tier on a TTY
pub fn format_status_badge(stage: &Stage, tty: bool) -> String {
    let badge = format!("[{}]", stage.status.as_str());
    color_if_tty(&badge, tier_color(stage.status.tier()), tty)
}

/// Horizontal progress bar: `[######------] 33%`-style with block glyphs
pub fn format_progress_bar(percentage: u8, width: usize) -> String {
    let filled = width * percentage as usize / 100;
    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    format!("{} {:>3}%", bar, percentage)
}

/// Textual ring for the overall figure: glyph, percentage, sweep angle
pub fn format_ring(percentage: u8, tty: bool) -> String {
    let line = format!(
        "{}  {}%  ({:.1}°)",
        ring_glyph(percentage),
        percentage,
        sweep_angle(percentage)
    );
    bold_if_tty(&line, tty)
}

/// One stage card. Collapsed cards render as a single summary line.
pub fn format_stage_card(stage: &Stage, open: bool, tty: bool) -> String {
    let summary = format!(
        "{} {} {}",
        bold_if_tty(&stage.name, tty),
        format_status_badge(stage, tty),
        format_progress_bar(stage.percentage, 20),
    );

    if !open {
        return format!("▸ {}  (collapsed)\n", summary);
    }

    let mut out = format!("▾ {}\n", summary);
    if stage.tasks.is_empty() {
        out.push_str("    no tasks\n");
        return out;
    }
    for (i, task) in stage.tasks.iter().enumerate() {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let assignee = task
            .assignee
            .as_deref()
            .map(|a| format!("  ({})", a))
            .unwrap_or_default();
        let line = format!("  {} {}. {}{}", mark, i + 1, task.label, assignee);
        if task.completed && tty {
            // Completed items render struck through and dimmed
            out.push_str(&format!(
                "{}{}{}{}\n",
                ANSI_STRIKE, ANSI_FG_BRIGHT_BLACK, line, ANSI_RESET
            ));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn format_metric(metric: &Metric) -> String {
    let value = match metric.value {
        MetricValue::Percent(p) => format!("{}%", p),
        MetricValue::Count(c) => format_count(c),
    };
    format!("  {:<24} {}", metric.label, value)
}

/// Metric lines as shown in the overview and by `watch`
pub fn format_metric_lines(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for metric in metrics {
        out.push_str(&format_metric(metric));
        out.push('\n');
    }
    out
}

/// Overview section body: headline metrics plus the overall ring
pub fn format_overview(dashboard: &Dashboard, tty: bool) -> String {
    let mut out = format_metric_lines(&dashboard.metrics);
    out.push_str(&format!(
        "  {}\n",
        format_ring(dashboard.overall_percentage, tty)
    ));
    out
}

/// Stakeholder directory table, pre-filtered rows, with the filter
/// feedback line when a concrete team is selected.
pub fn format_stakeholder_table(
    rows: &[&Stakeholder],
    filter: &TeamFilter,
    tty: bool,
) -> String {
    let mut out = String::new();
    if let Some(feedback) = filter.feedback(rows.len()) {
        out.push_str(&color_if_tty(&feedback, ANSI_FG_BRIGHT_BLACK, tty));
        out.push('\n');
    }
    if rows.is_empty() {
        out.push_str("  no stakeholders\n");
        return out;
    }

    let name_w = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    let role_w = rows.iter().map(|r| r.role.len()).max().unwrap_or(4).max(4);
    let team_w = rows
        .iter()
        .map(|r| r.team.trim().len())
        .max()
        .unwrap_or(4)
        .max(4);

    out.push_str(&bold_if_tty(
        &format!(
            "  {:<name_w$}  {:<role_w$}  {:<team_w$}  CONTACT",
            "NAME", "ROLE", "TEAM"
        ),
        tty,
    ));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "  {:<name_w$}  {:<role_w$}  {:<team_w$}  {}\n",
            row.name,
            row.role,
            row.team.trim(),
            row.contact.as_deref().unwrap_or("-")
        ));
    }
    out
}

fn section_header(title: &str, open: bool, tty: bool) -> String {
    let arrow = if open { "▾" } else { "▸" };
    bold_if_tty(&format!("{} {}", arrow, title), tty)
}

/// Full board view honoring section open/closed state
pub fn format_board(dashboard: &Dashboard, sections: &SectionState, tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty(
        &format!("STAGEDASH - {}", dashboard.title),
        tty,
    ));
    out.push_str(&format!(
        "  (as of {})\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&"─".repeat(get_terminal_width().min(60)));
    out.push_str("\n\n");

    out.push_str(&section_header(
        "OVERVIEW",
        sections.is_open(SECTION_OVERVIEW),
        tty,
    ));
    out.push('\n');
    if sections.is_open(SECTION_OVERVIEW) {
        out.push_str(&format_overview(dashboard, tty));
    }
    out.push('\n');

    out.push_str(&section_header("STAGES", sections.is_open(SECTION_STAGES), tty));
    out.push('\n');
    if sections.is_open(SECTION_STAGES) {
        for stage in &dashboard.stages {
            out.push_str(&format_stage_card(
                stage,
                sections.is_open(&stage.id),
                tty,
            ));
        }
    }
    out.push('\n');

    out.push_str(&section_header("TEAM", sections.is_open(SECTION_TEAM), tty));
    out.push('\n');
    if sections.is_open(SECTION_TEAM) {
        let filter = TeamFilter::AllTeams;
        let rows = filter.apply(&dashboard.stakeholders);
        out.push_str(&format_stakeholder_table(&rows, &filter, tty));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StageStatus, TaskItem};

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_500), "12,500");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-4_200), "-4,200");
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(format_progress_bar(0, 10), "[░░░░░░░░░░]   0%");
        assert_eq!(format_progress_bar(50, 10), "[█████░░░░░]  50%");
        assert_eq!(format_progress_bar(100, 10), "[██████████] 100%");
    }

    #[test]
    fn test_ring_line_plain() {
        let line = format_ring(75, false);
        assert_eq!(line, "◕  75%  (270.0°)");
    }

    #[test]
    fn test_stage_card_collapsed_is_one_line() {
        let mut stage = Stage::new("stage-2", "Stage 2: Build");
        stage.percentage = 50;
        stage.status = StageStatus::InProgress;
        stage.tasks.push(TaskItem::new("x"));

        let card = format_stage_card(&stage, false, false);
        assert!(card.starts_with("▸ "));
        assert!(card.ends_with("(collapsed)\n"));
        assert!(!card.contains("[ ] 1."));

        let open = format_stage_card(&stage, true, false);
        assert!(open.contains("[ ] 1. x"));
    }

    #[test]
    fn test_stakeholder_table_plain() {
        let rows = vec![Stakeholder {
            name: "Ana".to_string(),
            role: "Lead".to_string(),
            team: "Engineering".to_string(),
            contact: Some("ana@example.com".to_string()),
        }];
        let refs: Vec<&Stakeholder> = rows.iter().collect();
        let filter = TeamFilter::Team("Engineering".to_string());
        let table = format_stakeholder_table(&refs, &filter, false);
        assert!(table.contains("Showing 1 result(s) for: Engineering"));
        assert!(table.contains("NAME"));
        assert!(table.contains("ana@example.com"));
    }
}
