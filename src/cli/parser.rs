// CLI parsing for task references

use thiserror::Error;

use crate::models::Dashboard;

/// A resolved task reference: zero-based stage and task indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRef {
    pub stage: usize,
    pub task: usize,
}

/// Task reference parse/resolution error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefParseError {
    #[error("Invalid task reference '{token}'. Expected <stage>.<task>, e.g. '1.2' or 'planning.2'.")]
    Malformed { token: String },

    #[error("Invalid task number '{token}'. Task numbers start at 1.")]
    InvalidTaskNumber { token: String },

    #[error("Unknown stage '{stage}'{}", .suggestion.as_ref().map(|s| format!("\n  Did you mean '{}'?", s)).unwrap_or_default())]
    UnknownStage {
        stage: String,
        suggestion: Option<String>,
    },

    #[error("Stage '{stage}' is ambiguous; matches: {}", .matches.join(", "))]
    AmbiguousStage { stage: String, matches: Vec<String> },

    #[error("Stage '{stage}' has {total} task(s); there is no task {index}.")]
    TaskOutOfRange {
        stage: String,
        index: usize,
        total: usize,
    },
}

/// Parse and resolve a `<stage>.<task>` reference against a board.
///
/// The stage part is a 1-based stage number, a stage id, or a unique
/// case-insensitive prefix of a stage name. The task part is the 1-based
/// ordinal within the stage.
pub fn resolve_ref(dashboard: &Dashboard, token: &str) -> Result<TaskRef, RefParseError> {
    let Some((stage_part, task_part)) = token.rsplit_once('.') else {
        return Err(RefParseError::Malformed {
            token: token.to_string(),
        });
    };
    if stage_part.is_empty() || task_part.is_empty() {
        return Err(RefParseError::Malformed {
            token: token.to_string(),
        });
    }

    let stage = resolve_stage(dashboard, stage_part)?;

    let ordinal: usize = task_part
        .parse()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| RefParseError::InvalidTaskNumber {
            token: task_part.to_string(),
        })?;

    let total = dashboard.stages[stage].total();
    if ordinal > total {
        return Err(RefParseError::TaskOutOfRange {
            stage: dashboard.stages[stage].name.clone(),
            index: ordinal,
            total,
        });
    }

    Ok(TaskRef {
        stage,
        task: ordinal - 1,
    })
}

/// Resolve the stage part of a reference to a zero-based index
fn resolve_stage(dashboard: &Dashboard, part: &str) -> Result<usize, RefParseError> {
    // Numeric: 1-based stage position
    if let Ok(n) = part.parse::<usize>() {
        if n >= 1 && n <= dashboard.stages.len() {
            return Ok(n - 1);
        }
        return Err(RefParseError::UnknownStage {
            stage: part.to_string(),
            suggestion: None,
        });
    }

    // Exact id match
    if let Some(idx) = dashboard.stages.iter().position(|s| s.id == part) {
        return Ok(idx);
    }

    // Case-insensitive name prefix
    let lower = part.to_lowercase();
    let matches: Vec<usize> = dashboard
        .stages
        .iter()
        .enumerate()
        .filter(|(_, s)| s.name.to_lowercase().starts_with(&lower))
        .map(|(i, _)| i)
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(RefParseError::UnknownStage {
            stage: part.to_string(),
            suggestion: suggest_stage(dashboard, part),
        }),
        _ => Err(RefParseError::AmbiguousStage {
            stage: part.to_string(),
            matches: matches
                .into_iter()
                .map(|i| dashboard.stages[i].name.clone())
                .collect(),
        }),
    }
}

/// Find the most similar stage id for a typo'd stage token
fn suggest_stage(dashboard: &Dashboard, part: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for stage in &dashboard.stages {
        let distance = levenshtein(&part.to_lowercase(), &stage.id.to_lowercase());
        if distance <= 3 {
            match best {
                None => best = Some((stage.id.as_str(), distance)),
                Some((_, best_dist)) if distance < best_dist => {
                    best = Some((stage.id.as_str(), distance));
                }
                _ => {}
            }
        }
    }
    best.map(|(id, _)| id.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic program; full matrix not needed for suggestion-sized inputs
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
