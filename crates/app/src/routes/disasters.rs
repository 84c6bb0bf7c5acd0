use dioxus::prelude::*;
use shared_types::{Report, Severity};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, PageActions, PageHeader, PageTitle, Skeleton,
};

use super::report_dialog::ReportDialog;
use crate::api;
use crate::format_helpers::{description_preview, format_timestamp};

/// Badge color for a report's severity.
pub(crate) fn severity_badge(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Low => BadgeVariant::Secondary,
        Severity::Medium => BadgeVariant::Primary,
        Severity::High => BadgeVariant::Warning,
        Severity::Critical => BadgeVariant::Destructive,
    }
}

#[component]
pub fn DisastersPage() -> Element {
    let mut toast = use_toast();
    let mut report_open = use_signal(|| false);

    let mut disasters = use_resource(move || async move {
        match api::public_disasters().await {
            Ok(list) => Some(list),
            Err(err) => {
                tracing::error!("failed to load disasters: {err}");
                toast.error("Error loading disasters");
                None
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./disasters.css") }

        PageHeader {
            PageTitle { "Active Disasters" }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| report_open.set(true),
                    "Report a Disaster"
                }
            }
        }

        match &*disasters.read() {
            Some(Some(reports)) => rsx! {
                if reports.is_empty() {
                    p { class: "empty-state", "No active disasters reported" }
                } else {
                    div { class: "disaster-grid",
                        for report in reports.iter() {
                            DisasterCard { report: report.clone() }
                        }
                    }
                }
            },
            Some(None) => rsx! {},
            None => rsx! {
                div { class: "disaster-grid",
                    for _ in 0..3 {
                        Skeleton { style: "height: 10rem; width: 100%;" }
                    }
                }
            },
        }

        ReportDialog {
            open: report_open(),
            on_close: move |_| report_open.set(false),
            on_saved: move |_| disasters.restart(),
        }
    }
}

#[component]
fn DisasterCard(report: Report) -> Element {
    let severity_label = report.severity.label();
    let status_label = report.status.label();
    let preview = description_preview(&report.description);
    let reported = format_timestamp(&report.created_at);

    rsx! {
        Card { class: "disaster-card",
            CardHeader {
                CardTitle { "{report.title}" }
                Badge { variant: severity_badge(report.severity), "{severity_label}" }
            }
            CardContent {
                p {
                    strong { "Location: " }
                    "{report.location}"
                }
                p {
                    strong { "Description: " }
                    "{preview}"
                }
                p {
                    strong { "Status: " }
                    "{status_label}"
                }
                p {
                    strong { "Reported: " }
                    "{reported}"
                }
            }
        }
    }
}
