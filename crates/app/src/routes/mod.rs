pub mod alerts;
pub mod auth_dialog;
pub mod dashboard;
pub mod disasters;
pub mod home;
pub mod not_found;
pub mod report_dialog;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleUser, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{use_toast, Badge, BadgeVariant, Navbar, NavbarBrand, NavbarNav, NavbarSpacer};

use crate::session::use_session;
use crate::{api, AuthOverlay};
use auth_dialog::AuthDialog;

/// Application routes. Exactly one renders at a time; anything the router
/// does not recognize falls through to NotFound.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/alerts")]
    Alerts {},
    #[route("/disasters")]
    Disasters {},
    #[route("/dashboard")]
    Dashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Badge color for a user's role in the navbar.
fn role_badge(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Destructive,
        UserRole::Volunteer => BadgeVariant::Warning,
        UserRole::Citizen => BadgeVariant::Secondary,
    }
}

/// App shell: navbar with the auth-aware cluster, the routed page body,
/// and the sign-in/sign-up overlay.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let mut auth_overlay = use_context::<AuthOverlay>();
    let mut toast = use_toast();

    let user = session.current_user.read().clone();

    let handle_logout = move |evt: MouseEvent| {
        evt.prevent_default();
        // The request is fire-and-forget: its outcome never blocks the
        // local state clear.
        spawn(async move {
            if let Err(err) = api::logout().await {
                tracing::warn!("logout request failed: {err}");
            }
        });
        session.clear();
        toast.info("Logged out");
        navigator().push(Route::Home {});
    };

    let auth_cluster = match user.as_ref() {
        Some(user) => {
            let role_label = user.role.as_str();
            rsx! {
                span { class: "navbar-user",
                    Icon::<FaCircleUser> { icon: FaCircleUser, width: 16, height: 16 }
                    "{user.name}"
                    Badge { variant: role_badge(user.role), "{role_label}" }
                }
                a {
                    class: "navbar-auth-link",
                    href: "#",
                    onclick: handle_logout,
                    "Logout"
                }
            }
        }
        None => rsx! {
            a {
                class: "navbar-auth-link",
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    auth_overlay.open.set(true);
                },
                "Sign In"
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        Navbar {
            NavbarBrand {
                Icon::<FaTriangleExclamation> { icon: FaTriangleExclamation, width: 18, height: 18 }
                "Disaster Response Network"
            }
            NavbarNav {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Alerts {}, "Alerts" }
                Link { to: Route::Disasters {}, "Active Disasters" }
                if user.is_some() {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
            }
            NavbarSpacer {}
            {auth_cluster}
        }
        main { class: "page-content",
            Outlet::<Route> {}
        }
        AuthDialog {
            open: (auth_overlay.open)(),
            on_close: move |_| auth_overlay.open.set(false),
        }
    }
}

// Route components

#[component]
fn Home() -> Element {
    home::HomePage()
}

#[component]
fn Alerts() -> Element {
    alerts::AlertsPage()
}

#[component]
fn Disasters() -> Element {
    disasters::DisastersPage()
}

#[component]
fn Dashboard() -> Element {
    dashboard::DashboardPage()
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        not_found::NotFoundPage { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn parse(path: &str) -> Route {
        Route::from_str(path).unwrap_or_else(|_| panic!("no route parsed for {path}"))
    }

    #[test]
    fn known_paths_parse_to_their_section() {
        assert_eq!(parse("/"), Route::Home {});
        assert_eq!(parse("/alerts"), Route::Alerts {});
        assert_eq!(parse("/disasters"), Route::Disasters {});
        assert_eq!(parse("/dashboard"), Route::Dashboard {});
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        match parse("/no-such-section") {
            Route::NotFound { segments } => {
                assert_eq!(segments, vec!["no-such-section".to_string()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn every_path_yields_exactly_one_route() {
        for path in ["/", "/alerts", "/disasters", "/dashboard", "/bogus/extra"] {
            assert!(Route::from_str(path).is_ok(), "no route for {path}");
        }
    }

    #[test]
    fn role_badge_mapping_is_total() {
        assert_eq!(role_badge(UserRole::Admin), BadgeVariant::Destructive);
        assert_eq!(role_badge(UserRole::Volunteer), BadgeVariant::Warning);
        assert_eq!(role_badge(UserRole::Citizen), BadgeVariant::Secondary);
    }
}
