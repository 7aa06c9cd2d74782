use serde::{Deserialize, Serialize};

/// Stakeholder directory row
///
/// One line of the team database table. Rows are read-only; the only
/// operation over them is team filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}
