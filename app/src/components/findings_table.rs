//! Findings Table Component
//!
//! Renders the results table: one row per finding, with the rule code as the
//! row's trigger link and the finding's occurrences as detail panels inside
//! the same cell. Clicking the link flips each of that row's panels; the
//! link's default anchor activation is suppressed so the click never
//! navigates or scrolls.

use dioxus::prelude::*;

use crate::types::{Finding, Occurrence};
use crate::utils::{format_count, truncate_excerpt};
use crate::visibility::VisibilityMap;

/// Panels the map was never seeded with keep their renderer-given state.
fn panel_shown(map: &VisibilityMap, occ: &Occurrence) -> bool {
    map.is_shown(occ.id).unwrap_or(occ.initially_shown)
}

#[component]
pub fn FindingsTable(
    findings: Vec<Finding>,
    visibility: Signal<VisibilityMap>,
    on_toggle: EventHandler<u64>,
) -> Element {
    rsx! {
        if findings.is_empty() {
            div { class: "results-empty",
                i { class: "fa-solid fa-inbox" }
                p { "No findings" }
                p { class: "hint", "The last scan reported nothing for this page" }
            }
        } else {
            div { class: "results-table-container",
                table { class: "results-table",
                    thead {
                        tr {
                            th { class: "col-code", "Code" }
                            th { class: "col-severity", "Severity" }
                            th { class: "col-message", "Message" }
                            th { class: "col-count", "Occurrences" }
                        }
                    }
                    tbody {
                        for finding in findings.iter() {
                            FindingRow {
                                key: "{finding.id}",
                                finding: finding.clone(),
                                visibility,
                                on_toggle,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FindingRow(
    finding: Finding,
    visibility: Signal<VisibilityMap>,
    on_toggle: EventHandler<u64>,
) -> Element {
    let finding_id = finding.id;
    let any_shown = {
        let map = visibility.read();
        finding.occurrences.iter().any(|occ| panel_shown(&map, occ))
    };
    let chevron_class = if any_shown { "fa-chevron-down" } else { "fa-chevron-right" };
    let count_label = format_count(finding.occurrences.len(), "occurrence");

    rsx! {
        tr { class: "finding-row",
            td { class: "col-code",
                div { class: "code-cell",
                    a {
                        class: "code-link",
                        href: "#finding-{finding_id}",
                        onclick: move |evt: MouseEvent| {
                            // The click is fully handled here
                            evt.prevent_default();
                            on_toggle.call(finding_id);
                        },
                        i { class: "fa-solid {chevron_class} collapse-icon" }
                        " {finding.code}"
                    }
                    for occ in finding.occurrences.iter() {
                        OccurrencePanel { key: "{occ.id}", occurrence: occ.clone(), visibility }
                    }
                }
            }
            td { class: "col-severity",
                span { class: "severity-badge {finding.severity.css_class()}",
                    "{finding.severity.label()}"
                }
            }
            td { class: "col-message", "{finding.message}" }
            td { class: "col-count", "{count_label}" }
        }
    }
}

#[component]
fn OccurrencePanel(occurrence: Occurrence, visibility: Signal<VisibilityMap>) -> Element {
    let shown = panel_shown(&visibility.read(), &occurrence);
    let excerpt = truncate_excerpt(&occurrence.excerpt, 120);

    rsx! {
        div { class: if shown { "detail-panel" } else { "detail-panel hidden" },
            span { class: "occurrence-location", "{occurrence.file}:{occurrence.line}" }
            code { class: "occurrence-excerpt", "{excerpt}" }
        }
    }
}
