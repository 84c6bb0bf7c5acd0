use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaCircleInfo};
use dioxus_free_icons::Icon;
use shared_types::{Alert, AlertLevel};
use shared_ui::{Card, CardContent, PageHeader, PageTitle, Skeleton};

use crate::api;
use crate::format_helpers::format_timestamp;

#[component]
pub fn AlertsPage() -> Element {
    // Alert load failures are log-only.
    let alerts = use_resource(|| async move {
        match api::public_alerts().await {
            Ok(list) => Some(list),
            Err(err) => {
                tracing::error!("failed to load alerts: {err}");
                None
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./alerts.css") }

        PageHeader {
            PageTitle { "Alerts" }
        }

        match &*alerts.read() {
            Some(Some(alerts)) => rsx! {
                if alerts.is_empty() {
                    p { class: "empty-state", "No alerts at the moment" }
                } else {
                    div { class: "alert-list",
                        for alert in alerts.iter() {
                            AlertCard { alert: alert.clone() }
                        }
                    }
                }
            },
            Some(None) => rsx! {},
            None => rsx! {
                div { class: "alert-list",
                    for _ in 0..3 {
                        Skeleton { style: "height: 4.5rem; width: 100%;" }
                    }
                }
            },
        }
    }
}

#[component]
fn AlertCard(alert: Alert) -> Element {
    let level_class = format!("alert-{}", alert.alert_level.as_str());
    let timestamp = format_timestamp(&alert.created_at);

    rsx! {
        Card { class: level_class,
            CardContent {
                div { class: "alert-row",
                    div { class: "alert-icon",
                        if alert.alert_level == AlertLevel::Critical {
                            Icon::<FaCircleExclamation> { icon: FaCircleExclamation, width: 20, height: 20 }
                        } else {
                            Icon::<FaCircleInfo> { icon: FaCircleInfo, width: 20, height: 20 }
                        }
                    }
                    div { class: "alert-body",
                        h4 { "{alert.title}" }
                        p { "{alert.message}" }
                        small { "{timestamp}" }
                    }
                }
            }
        }
    }
}
