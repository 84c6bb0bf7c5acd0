use dioxus::prelude::*;
use shared_types::{AdminDashboardStats, ApiError, AuthUser, Report, ReportStatus};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, FormSelect, PageActions, PageHeader, PageTitle, Skeleton,
};

use super::assign_dialog::AssignDialog;
use super::detail_dialog::DetailDialog;
use super::DashboardWelcome;
use crate::format_helpers::description_preview;
use crate::routes::disasters::severity_badge;
use crate::{api, download};

/// How many reports the triage board pulls per load.
const REPORT_FETCH_LIMIT: u32 = 100;

/// Everything the admin board needs before it can render anything.
struct AdminData {
    stats: AdminDashboardStats,
    reports: Vec<Report>,
    roster: Vec<AuthUser>,
}

async fn load_admin_data() -> Result<AdminData, ApiError> {
    let stats = api::admin_dashboard().await?;
    let page = api::admin_reports(REPORT_FETCH_LIMIT).await?;
    let roster = api::volunteers().await?;
    Ok(AdminData {
        stats,
        reports: page.reports,
        roster,
    })
}

/// Group reports into the five fixed status buckets, in display order.
/// Every report lands in exactly one bucket.
fn partition_reports(reports: &[Report]) -> Vec<(ReportStatus, Vec<Report>)> {
    ReportStatus::ALL
        .iter()
        .map(|&status| {
            let bucket: Vec<Report> = reports
                .iter()
                .filter(|r| r.status == status)
                .cloned()
                .collect();
            (status, bucket)
        })
        .collect()
}

pub(crate) fn status_badge(status: ReportStatus) -> BadgeVariant {
    match status {
        ReportStatus::Pending => BadgeVariant::Warning,
        ReportStatus::Acknowledged => BadgeVariant::Secondary,
        ReportStatus::InProgress => BadgeVariant::Primary,
        ReportStatus::Resolved => BadgeVariant::Outline,
        ReportStatus::Cancelled => BadgeVariant::Destructive,
    }
}

/// Admin triage board.
///
/// The three backing requests (aggregate stats, report list, volunteer
/// roster) are an all-or-nothing unit: if any of them fails the board shows
/// a single error state and renders none of the partial data.
#[component]
pub fn AdminDashboard() -> Element {
    let mut toast = use_toast();

    let mut board = use_resource(|| async move {
        load_admin_data()
            .await
            .inspect_err(|err| tracing::error!("admin dashboard failed: {err}"))
    });

    // (report id, report title) while the assignment overlay is up.
    let mut assigning = use_signal(|| None::<(i64, String)>);
    // Report id while the detail overlay is up.
    let mut viewing = use_signal(|| None::<i64>);
    let mut exporting = use_signal(|| false);

    let handle_export = move |_| {
        if *exporting.read() {
            return;
        }
        spawn(async move {
            exporting.set(true);
            match api::export_reports().await {
                Ok(bytes) => {
                    let today = chrono::Local::now().date_naive();
                    download::save_file(&download::export_filename(today), &bytes);
                    toast.success("Disaster log exported");
                }
                Err(err) => toast.error(err.user_message("Export failed")),
            }
            exporting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        DashboardWelcome {}

        PageHeader {
            PageTitle { "Report Triage" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: *exporting.read(),
                    onclick: handle_export,
                    if *exporting.read() { "Exporting..." } else { "Export Disaster Log" }
                }
            }
        }

        match &*board.read() {
            Some(Ok(data)) => rsx! {
                div { class: "dashboard-stats",
                    AdminStatTile { label: "Total Reports", value: data.stats.total_reports }
                    AdminStatTile { label: "Pending Reports", value: data.stats.pending_reports }
                    AdminStatTile { label: "Active Volunteers", value: data.stats.active_volunteers }
                    AdminStatTile { label: "Total Resources", value: data.stats.total_resources }
                }

                p { class: "roster-note",
                    "{data.roster.len()} volunteers available for assignment"
                }

                for (status, bucket) in partition_reports(&data.reports) {
                    StatusBucket {
                        status,
                        reports: bucket,
                        on_assign: move |target| assigning.set(Some(target)),
                        on_view: move |id| viewing.set(Some(id)),
                        on_changed: move |_| board.restart(),
                    }
                }
            },
            Some(Err(_)) => rsx! {
                p { class: "dashboard-error", "Error loading dashboard" }
            },
            None => rsx! {
                div { class: "dashboard-loading",
                    for _ in 0..4 {
                        Skeleton { style: "height: 6rem; width: 100%;" }
                    }
                }
            },
        }

        if let Some((report_id, report_title)) = assigning() {
            AssignDialog {
                report_id,
                report_title,
                on_close: move |_| assigning.set(None),
                on_saved: move |_| {
                    assigning.set(None);
                    board.restart();
                },
            }
        }

        if let Some(report_id) = viewing() {
            DetailDialog {
                report_id,
                on_close: move |_| viewing.set(None),
            }
        }
    }
}

#[component]
fn AdminStatTile(label: String, value: i64) -> Element {
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

/// One status bucket: header with count, then either an empty-state line
/// or one card per report.
#[component]
fn StatusBucket(
    status: ReportStatus,
    reports: Vec<Report>,
    on_assign: EventHandler<(i64, String)>,
    on_view: EventHandler<i64>,
    on_changed: EventHandler<()>,
) -> Element {
    let label = status.label();
    let count = reports.len();

    rsx! {
        section { class: "status-bucket",
            div { class: "bucket-header",
                h3 { "{label}" }
                Badge { variant: status_badge(status), "{count}" }
            }
            if reports.is_empty() {
                p { class: "empty-state", "No {label.to_lowercase()} reports" }
            } else {
                div { class: "bucket-grid",
                    for report in reports {
                        AdminReportCard {
                            report,
                            on_assign: move |target| on_assign.call(target),
                            on_view: move |id| on_view.call(id),
                            on_changed: move |_| on_changed.call(()),
                        }
                    }
                }
            }
        }
    }
}

/// A report card on the triage board: summary fields, a status-change
/// selector, and assignment/detail actions.
#[component]
fn AdminReportCard(
    report: Report,
    on_assign: EventHandler<(i64, String)>,
    on_view: EventHandler<i64>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let mut in_flight = use_signal(|| false);

    let report_id = report.id;
    let report_title = report.title.clone();
    let severity_label = report.severity.label();
    let preview = description_preview(&report.description);
    let reporter = report.reporter.clone();
    let task_count = report.volunteer_tasks.len();

    let handle_status = move |evt: Event<FormData>| {
        // The placeholder row is selectable; picking it changes nothing.
        let Some(new_status) = ReportStatus::parse(&evt.value()) else {
            return;
        };
        if *in_flight.read() {
            return;
        }
        spawn(async move {
            in_flight.set(true);
            match api::update_report_status(report_id, new_status).await {
                Ok(()) => {
                    toast.success("Status updated");
                    on_changed.call(());
                }
                Err(err) => toast.error(err.user_message("Failed to update status")),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Card { class: "report-card",
            CardHeader {
                CardTitle { "{report.title}" }
                Badge { variant: severity_badge(report.severity), "{severity_label}" }
            }
            CardContent {
                p {
                    strong { "Location: " }
                    "{report.location}"
                }
                p { "{preview}" }
                if let Some(reporter) = reporter {
                    p { class: "reporter-line",
                        strong { "Reported by: " }
                        "{reporter.name}"
                        if let Some(phone) = &reporter.phone {
                            " ({phone})"
                        }
                    }
                }
                if task_count > 0 {
                    p { class: "task-count-line",
                        "{task_count} volunteer task(s) assigned"
                    }
                }
            }
            CardFooter {
                FormSelect {
                    value: "",
                    disabled: *in_flight.read(),
                    onchange: handle_status,
                    option { value: "", "Change status..." }
                    for status in ReportStatus::ALL {
                        if status != report.status {
                            option { value: status.as_str(), {status.label()} }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_assign.call((report_id, report_title.clone())),
                    "Assign Volunteer"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_view.call(report_id),
                    "Details"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(id: i64, status: ReportStatus) -> Report {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("report {id}"),
            "description": "d",
            "location": "l",
            "severity": "medium",
            "status": status.as_str(),
        }))
        .unwrap()
    }

    #[test]
    fn every_report_lands_in_exactly_one_bucket() {
        let reports = vec![
            report(1, ReportStatus::Pending),
            report(2, ReportStatus::Resolved),
            report(3, ReportStatus::Pending),
            report(4, ReportStatus::Cancelled),
            report(5, ReportStatus::InProgress),
        ];
        let buckets = partition_reports(&reports);

        let total: usize = buckets.iter().map(|(_, b)| b.len()).sum();
        assert_eq!(total, reports.len());

        for (status, bucket) in &buckets {
            for r in bucket {
                assert_eq!(r.status, *status);
            }
        }
    }

    #[test]
    fn buckets_keep_fixed_order_regardless_of_input_order() {
        let reports = vec![
            report(1, ReportStatus::Cancelled),
            report(2, ReportStatus::Pending),
        ];
        let order: Vec<ReportStatus> = partition_reports(&reports)
            .into_iter()
            .map(|(status, _)| status)
            .collect();
        assert_eq!(order, ReportStatus::ALL);
    }

    #[test]
    fn empty_input_still_yields_all_five_buckets() {
        let buckets = partition_reports(&[]);
        assert_eq!(buckets.len(), 5);
        assert!(buckets.iter().all(|(_, b)| b.is_empty()));
    }
}
