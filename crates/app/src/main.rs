use dioxus::prelude::*;

mod api;
mod download;
mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::{use_session, SessionState};

const THEME: Asset = asset!("/assets/theme.css");

/// Controls the sign-in/sign-up overlay from anywhere in the app — the
/// navbar opens it, and the report form opens it when an anonymous user
/// tries to submit.
#[derive(Clone, Copy)]
pub struct AuthOverlay {
    pub open: Signal<bool>,
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_context_provider(|| AuthOverlay {
        open: Signal::new(false),
    });

    // Resolve the cookie session once at startup. Only the navbar region
    // re-renders when the answer lands; failure just means anonymous.
    let mut session = use_session();
    use_future(move || async move {
        match api::current_user().await {
            Ok(user) => session.set_user(user),
            Err(err) => tracing::debug!("no active session: {err}"),
        }
        session.resolved.set(true);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
