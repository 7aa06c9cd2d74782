use serde::{Deserialize, Serialize};

/// Task item model
///
/// The atomic unit of completable work. Items are fixed for a session: they
/// are created when the board is loaded and only the `completed` flag mutates,
/// exclusively through a user toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TaskItem {
    /// Create a new, unchecked task item
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            assignee: None,
            completed: false,
        }
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
