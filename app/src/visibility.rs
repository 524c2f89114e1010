//! Visibility state for occurrence detail panels.
//!
//! The trigger → panel association is held here as explicit data, seeded once
//! from the report when the results table mounts. The toggle operations never
//! enforce a target state: they flip whatever state each panel is in, one
//! panel at a time.

use std::collections::HashMap;

use crate::types::FindingsReport;

/// Shown/hidden state for every wired detail panel, grouped by finding.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMap {
    /// panel id → currently shown
    panels: HashMap<u64, bool>,
    /// finding id → panel ids belonging to that row
    rows: HashMap<u64, Vec<u64>>,
}

impl VisibilityMap {
    /// Seed the map from a report. Each panel starts in the state the
    /// renderer gave it.
    pub fn from_report(report: &FindingsReport) -> Self {
        let mut panels = HashMap::new();
        let mut rows: HashMap<u64, Vec<u64>> = HashMap::new();

        for finding in &report.findings {
            let ids = rows.entry(finding.id).or_default();
            for occ in &finding.occurrences {
                panels.insert(occ.id, occ.initially_shown);
                ids.push(occ.id);
            }
        }

        Self { panels, rows }
    }

    /// Flip every panel belonging to one finding, each independently of its
    /// siblings. Unknown finding ids are ignored.
    pub fn toggle_row(&mut self, finding_id: u64) {
        let Some(ids) = self.rows.get(&finding_id) else {
            return;
        };
        for id in ids {
            if let Some(shown) = self.panels.get_mut(id) {
                *shown = !*shown;
            }
        }
    }

    /// Flip every panel on the page, each independently of every other.
    pub fn toggle_all(&mut self) {
        for shown in self.panels.values_mut() {
            *shown = !*shown;
        }
    }

    /// Current state of a panel, or `None` if it was never wired (panels
    /// added after seeding keep whatever state the renderer gave them).
    pub fn is_shown(&self, panel_id: u64) -> Option<bool> {
        self.panels.get(&panel_id).copied()
    }

    /// Number of wired panels
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Number of panels currently shown
    pub fn shown_count(&self) -> usize {
        self.panels.values().filter(|shown| **shown).count()
    }
}
