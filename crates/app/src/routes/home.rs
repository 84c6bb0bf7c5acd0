use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, Skeleton};

use super::report_dialog::ReportDialog;
use crate::api;

/// The statistics endpoint carries no volunteer count; that tile always
/// shows a placeholder.
const VOLUNTEER_PLACEHOLDER: &str = "--";

#[component]
pub fn HomePage() -> Element {
    let mut report_open = use_signal(|| false);

    // Load failures are log-only; the tiles fall back to placeholders.
    let stats = use_resource(|| async move {
        match api::public_statistics().await {
            Ok(stats) => Some(stats),
            Err(err) => {
                tracing::error!("failed to load statistics: {err}");
                None
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "hero",
            h1 { "Coordinated disaster response for your community" }
            p {
                "Report incidents, follow live alerts, and help responders reach the people who need them."
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| report_open.set(true),
                "Report a Disaster"
            }
        }

        div { class: "stats-grid",
            match &*stats.read() {
                Some(Some(s)) => rsx! {
                    StatTile { label: "Active Reports", value: s.disaster_stats.active_reports.to_string() }
                    StatTile { label: "Resolved Reports", value: s.disaster_stats.resolved_reports.to_string() }
                    StatTile { label: "Resources Available", value: s.resource_stats.available.to_string() }
                    StatTile { label: "Volunteers", value: VOLUNTEER_PLACEHOLDER.to_string() }
                },
                Some(None) => rsx! {
                    StatTile { label: "Active Reports", value: VOLUNTEER_PLACEHOLDER.to_string() }
                    StatTile { label: "Resolved Reports", value: VOLUNTEER_PLACEHOLDER.to_string() }
                    StatTile { label: "Resources Available", value: VOLUNTEER_PLACEHOLDER.to_string() }
                    StatTile { label: "Volunteers", value: VOLUNTEER_PLACEHOLDER.to_string() }
                },
                None => rsx! {
                    for _ in 0..4 {
                        Card {
                            CardContent {
                                Skeleton { style: "height: 2.5rem; width: 100%;" }
                            }
                        }
                    }
                },
            }
        }

        ReportDialog {
            open: report_open(),
            on_close: move |_| report_open.set(false),
            // Lists fetch on entry, so the next visit to Active Disasters
            // already includes the new report.
            on_saved: move |_| {},
        }
    }
}

/// A single statistics tile.
#[component]
fn StatTile(label: String, value: String) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-tile",
                    span { class: "stat-value", "{value}" }
                    span { class: "stat-label", "{label}" }
                }
            }
        }
    }
}
