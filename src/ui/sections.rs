use std::collections::BTreeMap;

use crate::models::Dashboard;

/// Section ids that start open: the overview, the stage list, and the first
/// stage card. Everything else starts collapsed.
const DEFAULT_OPEN: &[&str] = &["overview", "stages", "stage-1"];

pub const SECTION_OVERVIEW: &str = "overview";
pub const SECTION_STAGES: &str = "stages";
pub const SECTION_TEAM: &str = "team";

/// Open/closed state for every collapsible section of the rendered report
///
/// Section ids are fixed once built from a board; toggling an unknown id is
/// a no-op.
#[derive(Debug, Clone)]
pub struct SectionState {
    open: BTreeMap<String, bool>,
}

impl SectionState {
    /// Build section state for a board: the three top-level sections plus
    /// one per stage card, with defaults applied.
    pub fn for_dashboard(dashboard: &Dashboard) -> Self {
        let mut ids: Vec<String> = vec![
            SECTION_OVERVIEW.to_string(),
            SECTION_STAGES.to_string(),
            SECTION_TEAM.to_string(),
        ];
        ids.extend(dashboard.stages.iter().map(|s| s.id.clone()));

        let open = ids
            .into_iter()
            .map(|id| {
                let is_default_open = DEFAULT_OPEN.contains(&id.as_str());
                (id, is_default_open)
            })
            .collect();
        Self { open }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.get(id).copied().unwrap_or(false)
    }

    /// Flip one section. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if let Some(flag) = self.open.get_mut(id) {
            *flag = !*flag;
        }
    }

    /// Force one section open. Unknown ids are ignored.
    pub fn open(&mut self, id: &str) {
        if let Some(flag) = self.open.get_mut(id) {
            *flag = true;
        }
    }

    /// Open every section (the `show --all` view)
    pub fn open_all(&mut self) {
        for flag in self.open.values_mut() {
            *flag = true;
        }
    }

    /// Known section ids, in stable order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.open.keys().map(|s| s.as_str())
    }
}
