//! Stakeholder directory filter
//!
//! Evaluates a team filter against directory rows to determine which rows
//! stay visible.
//!
//! # Filter terms
//!
//! - `All Teams` (or `all`) - match every row
//! - any other value - exact match against the row's team tag, after
//!   trimming surrounding whitespace on both sides

use crate::models::Stakeholder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamFilter {
    /// Match all rows
    AllTeams,
    Team(String),
}

impl TeamFilter {
    /// Parse a filter value as it arrives from the command line
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all teams")
            || trimmed.eq_ignore_ascii_case("all") {
            TeamFilter::AllTeams
        } else {
            TeamFilter::Team(trimmed.to_string())
        }
    }

    /// Evaluate the filter against a single row
    pub fn matches(&self, row: &Stakeholder) -> bool {
        match self {
            TeamFilter::AllTeams => true,
            TeamFilter::Team(team) => row.team.trim() == team,
        }
    }

    /// Linear scan returning the rows that stay visible
    pub fn apply<'a>(&self, rows: &'a [Stakeholder]) -> Vec<&'a Stakeholder> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }

    /// Feedback line shown above the table when a concrete team is selected.
    /// `None` for the all-teams filter (no feedback, mirrors an unfiltered
    /// table).
    pub fn feedback(&self, visible: usize) -> Option<String> {
        match self {
            TeamFilter::AllTeams => None,
            TeamFilter::Team(team) => {
                Some(format!("Showing {} result(s) for: {}", visible, team))
            }
        }
    }
}
