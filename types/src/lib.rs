//! Shared findings report types
//!
//! This crate contains the serializable report structure that is shared
//! between whatever produces a findings report (the analysis tool) and the
//! WASM frontend (app-ui) that renders it.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Report Types (shared between producer and frontend)
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of a finding, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

impl Severity {
    /// Display label for table badges
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    /// CSS class suffix used by the frontend badge styling
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// One detail panel: a single occurrence of a finding in the scanned source.
///
/// `id` is assigned by the report producer and is unique across the whole
/// report, not just within one finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: u64,
    pub file: String,
    pub line: u32,
    /// Source excerpt shown inside the panel
    pub excerpt: String,
    /// Visibility the renderer gave the panel at creation. The toggle logic
    /// never enforces a state, it only flips whatever it finds.
    #[serde(default)]
    pub initially_shown: bool,
}

/// One results-table row: a rule code plus the occurrences it groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: u64,
    /// Rule code rendered as the row's trigger link (e.g. "E501")
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
}

impl Finding {
    pub fn has_details(&self) -> bool {
        !self.occurrences.is_empty()
    }
}

/// The full results region of a rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingsReport {
    pub title: String,
    /// Name of the tool that produced the report
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    /// Whether the page carries the global expand-all control at all
    #[serde(default = "default_true")]
    pub show_expand_all: bool,
}

fn default_true() -> bool {
    true
}

impl FindingsReport {
    /// Total number of detail panels across all findings
    pub fn panel_count(&self) -> usize {
        self.findings.iter().map(|f| f.occurrences.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Error.label(), "Error");
        assert_eq!(Severity::Warning.css_class(), "warning");
        assert_eq!(Severity::default(), Severity::Warning);
    }

    #[test]
    fn test_panel_count_sums_all_findings() {
        let report = FindingsReport {
            title: "scan".into(),
            tool: None,
            findings: vec![
                Finding {
                    id: 1,
                    code: "A100".into(),
                    message: "first".into(),
                    severity: Severity::Error,
                    occurrences: vec![
                        Occurrence {
                            id: 10,
                            file: "a.rs".into(),
                            line: 1,
                            excerpt: String::new(),
                            initially_shown: false,
                        },
                        Occurrence {
                            id: 11,
                            file: "a.rs".into(),
                            line: 9,
                            excerpt: String::new(),
                            initially_shown: false,
                        },
                    ],
                },
                Finding {
                    id: 2,
                    code: "A200".into(),
                    message: "second".into(),
                    severity: Severity::Info,
                    occurrences: vec![],
                },
            ],
            show_expand_all: true,
        };
        assert_eq!(report.panel_count(), 2);
        assert!(report.findings[0].has_details());
        assert!(!report.findings[1].has_details());
    }

    #[test]
    fn test_occurrence_defaults_to_hidden() {
        let json = r#"{"id": 7, "file": "lib.rs", "line": 42, "excerpt": "let x = 1;"}"#;
        let occ: Occurrence = serde_json::from_str(json).unwrap();
        assert!(!occ.initially_shown);
    }

    #[test]
    fn test_report_defaults() {
        let json = r#"{"title": "empty run"}"#;
        let report: FindingsReport = serde_json::from_str(json).unwrap();
        assert!(report.findings.is_empty());
        assert!(report.show_expand_all);
        assert_eq!(report.panel_count(), 0);
    }
}
