use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global session state.
///
/// Exactly one user is active at a time (or none). `resolved` flips once
/// the startup identity check has answered, so guarded pages can tell
/// "still checking" apart from "anonymous".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<AuthUser>>,
    pub resolved: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            resolved: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<UserRole> {
        self.current_user.read().as_ref().map(|u| u.role)
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthUser {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "A",
            "email": "a@b.com",
            "role": "admin",
        }))
        .unwrap()
    }

    #[component]
    fn ShowsSessionState(scenario: &'static str) -> Element {
        let mut session = use_context_provider(SessionState::new);
        use_hook(move || match scenario {
            "login" => session.set_user(test_user()),
            // The logout request failing never blocks the local clear, so
            // the state transition under test is simply set-then-clear.
            "failed_logout" => {
                session.set_user(test_user());
                session.clear();
            }
            _ => {}
        });

        let role = session.role().map(|r| r.as_str()).unwrap_or("none");
        rsx! {
            if session.is_authenticated() { "authenticated" } else { "anonymous" }
            " role={role}"
        }
    }

    #[test]
    fn login_sets_user_and_role() {
        let html = dioxus_ssr::render_element(rsx! {
            ShowsSessionState { scenario: "login" }
        });
        assert!(html.contains("authenticated"), "got: {html}");
        assert!(html.contains("role=admin"), "got: {html}");
    }

    #[test]
    fn session_starts_anonymous() {
        let html = dioxus_ssr::render_element(rsx! {
            ShowsSessionState { scenario: "fresh" }
        });
        assert!(html.contains("anonymous"), "got: {html}");
        assert!(html.contains("role=none"), "got: {html}");
    }

    #[test]
    fn clear_after_failed_logout_leaves_no_session() {
        let html = dioxus_ssr::render_element(rsx! {
            ShowsSessionState { scenario: "failed_logout" }
        });
        assert!(html.contains("anonymous"), "got: {html}");
        assert!(!html.contains("authenticated"), "got: {html}");
    }
}
