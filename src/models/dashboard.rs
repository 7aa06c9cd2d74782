use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Metric, Stage, Stakeholder};

/// Dashboard model
///
/// The board root: every stage (and through them every task item), the
/// stakeholder directory, and the headline metrics. Loaded once per session
/// from a JSON seed file; the seed is never written back. `overall_percentage`
/// is the stored overall figure the engine rewrites on every toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub overall_percentage: u8,
}

impl Dashboard {
    /// Load a board from a JSON seed file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file: {}", path.display()))?;
        let dashboard: Dashboard = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse board file: {}", path.display()))?;
        debug!(
            "loaded board '{}': {} stages, {} stakeholders, {} metrics",
            dashboard.title,
            dashboard.stages.len(),
            dashboard.stakeholders.len(),
            dashboard.metrics.len()
        );
        Ok(dashboard)
    }

    /// Total task items across all stages
    pub fn total_tasks(&self) -> usize {
        self.stages.iter().map(|s| s.total()).sum()
    }

    /// Completed task items across all stages
    pub fn completed_tasks(&self) -> usize {
        self.stages.iter().map(|s| s.completed()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StageStatus, TaskItem};
    use std::io::Write;

    fn sample_board() -> Dashboard {
        let mut d = Dashboard {
            title: "Launch".to_string(),
            stages: vec![
                Stage::new("stage-1", "Stage 1: Planning"),
                Stage::new("stage-2", "Stage 2: Build"),
            ],
            stakeholders: Vec::new(),
            metrics: Vec::new(),
            overall_percentage: 0,
        };
        d.stages[0].tasks.push(TaskItem {
            label: "Kickoff".to_string(),
            assignee: Some("Ana".to_string()),
            completed: true,
        });
        d.stages[0].tasks.push(TaskItem::new("Budget"));
        d.stages[1].tasks.push(TaskItem::new("Prototype"));
        d
    }

    #[test]
    fn test_task_counts_span_stages() {
        let d = sample_board();
        assert_eq!(d.total_tasks(), 3);
        assert_eq!(d.completed_tasks(), 1);
    }

    #[test]
    fn test_load_round_trip() {
        let d = sample_board();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&d).unwrap().as_bytes())
            .unwrap();

        let loaded = Dashboard::load(file.path()).unwrap();
        assert_eq!(loaded.title, "Launch");
        assert_eq!(loaded.stages.len(), 2);
        assert_eq!(loaded.stages[0].status, StageStatus::Planning);
        assert!(loaded.stages[0].tasks[0].completed);
    }

    #[test]
    fn test_load_missing_file_fails_with_context() {
        let err = Dashboard::load(Path::new("/nonexistent/board.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read board file"));
    }

    #[test]
    fn test_seed_defaults() {
        let json = r#"{
            "title": "Minimal",
            "stages": [{"id": "s1", "name": "S1"}]
        }"#;
        let d: Dashboard = serde_json::from_str(json).unwrap();
        assert_eq!(d.overall_percentage, 0);
        assert_eq!(d.stages[0].status, StageStatus::Planning);
        assert!(d.stages[0].tasks.is_empty());
        assert!(d.stakeholders.is_empty());
    }
}
