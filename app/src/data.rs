//! Bundled findings report
//!
//! The report JSON is emitted ahead of time by the analysis run and bundled
//! into the page at compile time. Decoding it here stands in for the page
//! producer that renders the results region before the frontend attaches
//! behavior to it.

use crate::types::FindingsReport;

const BUNDLED_REPORT: &str = include_str!("../assets/findings.json");

/// Decode the bundled report. Runs once at startup.
pub fn load_report() -> Result<FindingsReport, serde_json::Error> {
    serde_json::from_str(BUNDLED_REPORT)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bundled_report_decodes() {
        let report = load_report().expect("bundled report must decode");
        assert!(!report.findings.is_empty());
        assert!(report.panel_count() > 0);
    }

    #[test]
    fn test_bundled_panel_ids_are_page_unique() {
        // Row and toggle-all wiring both rely on page-wide unique panel ids
        let report = load_report().unwrap();
        let ids: Vec<u64> = report
            .findings
            .iter()
            .flat_map(|f| f.occurrences.iter().map(|o| o.id))
            .collect();
        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_bundled_finding_ids_are_unique() {
        let report = load_report().unwrap();
        let ids: Vec<u64> = report.findings.iter().map(|f| f.id).collect();
        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }
}
