use dioxus::prelude::*;
use shared_types::Report;
use shared_ui::{Badge, Modal, ModalClose, ModalHeader, ModalTitle, Skeleton};

use super::admin::status_badge;
use crate::format_helpers::format_timestamp;
use crate::routes::disasters::severity_badge;
use crate::api;

/// Read-only detail overlay for a single report, fetched on open.
#[component]
pub fn DetailDialog(report_id: i64, on_close: EventHandler<()>) -> Element {
    let report = use_resource(move || async move {
        api::admin_report(report_id)
            .await
            .inspect_err(|err| tracing::error!("report {report_id} failed to load: {err}"))
    });

    rsx! {
        Modal { open: true, on_close: move |_| on_close.call(()),
            ModalHeader {
                ModalTitle { "Report Details" }
                ModalClose { on_close: move |_| on_close.call(()) }
            }

            match &*report.read() {
                Some(Ok(report)) => rsx! {
                    ReportDetail { report: report.clone() }
                },
                Some(Err(_)) => rsx! {
                    p { class: "dashboard-error", "Error loading report" }
                },
                None => rsx! {
                    Skeleton { style: "height: 12rem; width: 100%;" }
                },
            }
        }
    }
}

#[component]
fn ReportDetail(report: Report) -> Element {
    let severity_label = report.severity.label();
    let status_label = report.status.label();
    let created = format_timestamp(&report.created_at);

    rsx! {
        div { class: "report-detail",
            div { class: "detail-badges",
                Badge { variant: severity_badge(report.severity), "{severity_label}" }
                Badge { variant: status_badge(report.status), "{status_label}" }
            }

            h3 { "{report.title}" }
            p { class: "detail-description", "{report.description}" }

            dl { class: "detail-fields",
                dt { "Location" }
                dd { "{report.location}" }
                if let (Some(lat), Some(lon)) = (report.latitude, report.longitude) {
                    dt { "Coordinates" }
                    dd { "{lat}, {lon}" }
                }
                if let Some(reporter) = &report.reporter {
                    dt { "Reporter" }
                    dd {
                        "{reporter.name}"
                        if let Some(phone) = &reporter.phone {
                            " \u{00b7} {phone}"
                        }
                    }
                }
                dt { "Reported" }
                dd { "{created}" }
                if let Some(resolved_at) = &report.resolved_at {
                    dt { "Resolved" }
                    dd { {format_timestamp(resolved_at)} }
                }
            }

            if !report.volunteer_tasks.is_empty() {
                h4 { "Volunteer Tasks" }
                ul { class: "detail-tasks",
                    for task in report.volunteer_tasks.iter() {
                        li {
                            "{task.task_description}"
                            if let Some(volunteer) = &task.volunteer {
                                " \u{2014} {volunteer.name}"
                            }
                            if !task.status.is_empty() {
                                span { class: "task-status", " ({task.status})" }
                            }
                        }
                    }
                }
            }
        }
    }
}
