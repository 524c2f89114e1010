//! Application root
//!
//! Decodes the bundled findings report, seeds the visibility state once the
//! page content is available, and renders the results region together with
//! the page-global expand-all control.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::components::FindingsTable;
use crate::data;
use crate::types::FindingsReport;
use crate::utils::format_count;
use crate::visibility::VisibilityMap;

static CSS: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    // Decoded once; the report stands in for the externally rendered page
    let report = use_memo(|| data::load_report().map_err(|err| err.to_string()));
    let loaded = report();

    rsx! {
        document::Link { rel: "stylesheet", href: CSS }
        main { class: "app-shell",
            if let Err(err) = &loaded {
                div { class: "error-message", "Failed to decode findings report: {err}" }
            }
            if let Ok(rep) = &loaded {
                ReportView { report: rep.clone() }
            }
        }
    }
}

#[component]
fn ReportView(report: FindingsReport) -> Element {
    // One-shot initialization gate: the map is seeded at mount, so rows
    // added to the page afterwards keep their renderer-given visibility.
    let mut visibility = use_signal({
        let report = report.clone();
        move || VisibilityMap::from_report(&report)
    });

    let finding_count = report.findings.len();
    let panel_total = report.panel_count();
    use_effect(move || {
        debug!(findings = finding_count, panels = panel_total, "results table wired");
    });

    let shown = visibility.read().shown_count();
    let status_line = format!(
        "{} · {shown}/{panel_total} details shown",
        format_count(finding_count, "finding")
    );

    rsx! {
        section { class: "results-panel",
            header { class: "results-header",
                div { class: "results-title",
                    h3 { "{report.title}" }
                    if let Some(tool) = &report.tool {
                        span { class: "report-tool", "{tool}" }
                    }
                }
                div { class: "results-controls",
                    span { class: "results-count", "{status_line}" }
                    if report.show_expand_all {
                        a {
                            class: "toggle-all-link",
                            href: "#toggle-all",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                visibility.write().toggle_all();
                            },
                            "Toggle all details"
                        }
                    }
                }
            }
            FindingsTable {
                findings: report.findings.clone(),
                visibility,
                on_toggle: move |finding_id| visibility.write().toggle_row(finding_id),
            }
        }
    }
}
