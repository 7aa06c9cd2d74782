use serde::{Deserialize, Serialize};

use crate::models::TaskItem;

/// Stage status label
///
/// Status model:
/// - NotStarted: sentinel set by the board author; never auto-promoted
/// - Planning: derived when nothing in the stage is checked
/// - InProgress: derived when the stage is partially complete
/// - Completed: derived when every item is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Presentation tier attached to a status badge (colors only, never logic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Success,
    Warning,
    Info,
    Neutral,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::NotStarted => "Not Started",
            StageStatus::Planning => "Planning",
            StageStatus::InProgress => "In Progress",
            StageStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Not Started" => Some(StageStatus::NotStarted),
            "Planning" => Some(StageStatus::Planning),
            "In Progress" => Some(StageStatus::InProgress),
            "Completed" => Some(StageStatus::Completed),
            _ => None,
        }
    }

    pub fn tier(&self) -> StatusTier {
        match self {
            StageStatus::Completed => StatusTier::Success,
            StageStatus::InProgress => StatusTier::Warning,
            StageStatus::Planning => StatusTier::Info,
            StageStatus::NotStarted => StatusTier::Neutral,
        }
    }
}

/// Stage model
///
/// A named collection of task items with an aggregate percentage and a status
/// badge. `percentage` is the stored (displayed) value; the progress engine
/// rewrites it on every member toggle, except for empty stages where the
/// seeded value is retained as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub name: String,
    #[serde(default = "default_status")]
    pub status: StageStatus,
    #[serde(default)]
    pub percentage: u8,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
}

fn default_status() -> StageStatus {
    StageStatus::Planning
}

impl Stage {
    /// Create a new, empty stage
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: StageStatus::Planning,
            percentage: 0,
            tasks: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
