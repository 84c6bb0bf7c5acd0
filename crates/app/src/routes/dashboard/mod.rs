pub mod admin;
pub mod assign_dialog;
pub mod citizen;
pub mod detail_dialog;
pub mod volunteer;

use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, Skeleton};

use super::Route;
use crate::format_helpers::format_snake_case_title;
use crate::session::use_session;

/// Role-adaptive dashboard — renders the dashboard matching the session's
/// role. Anonymous visitors are sent back to the home page.
#[component]
pub fn DashboardPage() -> Element {
    let session = use_session();

    // Hold the skeleton until the startup identity check has answered;
    // bouncing an already-logged-in user to home would be wrong.
    if !*session.resolved.read() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
            div { class: "dashboard-loading",
                for _ in 0..3 {
                    Skeleton { style: "height: 6rem; width: 100%;" }
                }
            }
        };
    }

    match session.role() {
        Some(UserRole::Admin) => rsx! { admin::AdminDashboard {} },
        Some(UserRole::Volunteer) => rsx! { volunteer::VolunteerDashboard {} },
        Some(UserRole::Citizen) => rsx! { citizen::CitizenDashboard {} },
        None => {
            navigator().push(Route::Home {});
            rsx! {
                div { class: "dashboard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Welcome banner shared by the role dashboards.
#[component]
pub(crate) fn DashboardWelcome() -> Element {
    let session = use_session();
    let Some(user) = session.current_user.read().clone() else {
        return rsx! {};
    };
    let role = user.role.as_str().to_uppercase();

    rsx! {
        div { class: "dashboard-welcome",
            h2 { "Welcome, {user.name}" }
            p { "Role: {role}" }
        }
    }
}

/// Flatten a role dashboard payload into display rows. The payload is an
/// opaque key-value set owned by the backend: scalars render verbatim,
/// lists and nested objects render as an item count.
pub(crate) fn summary_entries(data: &serde_json::Value) -> Vec<(String, String)> {
    let serde_json::Value::Object(map) = data else {
        return Vec::new();
    };
    map.iter()
        .map(|(key, value)| {
            let display = match value {
                serde_json::Value::Array(items) => items.len().to_string(),
                serde_json::Value::Object(fields) => fields.len().to_string(),
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (format_snake_case_title(key), display)
        })
        .collect()
}

/// Grid of key-value cards for a role dashboard payload.
#[component]
pub(crate) fn SummaryGrid(data: serde_json::Value) -> Element {
    let entries = summary_entries(&data);

    rsx! {
        div { class: "dashboard-stats",
            for (label, value) in entries {
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
    }
}
