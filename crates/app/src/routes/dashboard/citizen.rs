use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::Skeleton;

use super::{DashboardWelcome, SummaryGrid};
use crate::api;

/// Citizen dashboard: the user's own reports, currently active disasters,
/// and recent alerts, as counts.
#[component]
pub fn CitizenDashboard() -> Element {
    let summary = use_resource(|| async move {
        api::role_dashboard(UserRole::Citizen)
            .await
            .inspect_err(|err| tracing::error!("citizen dashboard failed: {err}"))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        DashboardWelcome {}

        match &*summary.read() {
            Some(Ok(data)) => rsx! {
                SummaryGrid { data: data.clone() }
            },
            Some(Err(_)) => rsx! {
                p { class: "dashboard-error", "Error loading dashboard" }
            },
            None => rsx! {
                div { class: "dashboard-loading",
                    for _ in 0..3 {
                        Skeleton { style: "height: 6rem; width: 100%;" }
                    }
                }
            },
        }
    }
}
