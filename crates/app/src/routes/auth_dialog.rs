use dioxus::prelude::*;
use shared_types::{LoginRequest, SignupRequest, UserRole};
use shared_ui::{use_toast, Form, FormSelect, Input, Modal, ModalClose, ModalHeader, ModalTitle};

use super::Route;
use crate::session::use_session;
use crate::api;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Signup,
}

/// Sign-in / sign-up overlay with two tabs.
///
/// A successful signup does not log in: it switches to the login tab and
/// clears the signup form, mirroring the backend's confirm-then-login flow.
#[component]
pub fn AuthDialog(open: bool, on_close: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let mut tab = use_signal(|| AuthTab::Login);

    // Login form
    let mut login_email = use_signal(String::new);
    let mut login_password = use_signal(String::new);
    let mut login_busy = use_signal(|| false);

    // Signup form
    let mut signup_name = use_signal(String::new);
    let mut signup_email = use_signal(String::new);
    let mut signup_password = use_signal(String::new);
    let mut signup_phone = use_signal(String::new);
    let mut signup_role = use_signal(|| UserRole::Citizen.as_str().to_string());
    let mut signup_busy = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        if *login_busy.read() {
            return;
        }
        let request = LoginRequest {
            email: login_email.read().clone(),
            password: login_password.read().clone(),
        };
        spawn(async move {
            login_busy.set(true);
            match api::login(request).await {
                Ok(user) => {
                    session.set_user(user);
                    on_close.call(());
                    toast.success("Login successful");
                    navigator().push(Route::Dashboard {});
                }
                Err(err) => toast.error(err.user_message("Login failed")),
            }
            login_busy.set(false);
        });
    };

    let handle_signup = move |_: FormEvent| {
        if *signup_busy.read() {
            return;
        }
        let request = SignupRequest {
            name: signup_name.read().clone(),
            email: signup_email.read().clone(),
            password: signup_password.read().clone(),
            phone: signup_phone.read().clone(),
            role: UserRole::from_str_or_default(&signup_role.read()),
        };
        spawn(async move {
            signup_busy.set(true);
            match api::signup(request).await {
                Ok(()) => {
                    toast.success("Signup successful! Please login");
                    tab.set(AuthTab::Login);
                    signup_name.set(String::new());
                    signup_email.set(String::new());
                    signup_password.set(String::new());
                    signup_phone.set(String::new());
                    signup_role.set(UserRole::Citizen.as_str().to_string());
                }
                Err(err) => toast.error(err.user_message("Signup failed")),
            }
            signup_busy.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        Modal { open, on_close: move |_| on_close.call(()),
            ModalHeader {
                ModalTitle {
                    if tab() == AuthTab::Login { "Sign In" } else { "Create Account" }
                }
                ModalClose { on_close: move |_| on_close.call(()) }
            }

            div { class: "auth-tabs",
                button {
                    class: "auth-tab",
                    r#type: "button",
                    "data-active": tab() == AuthTab::Login,
                    onclick: move |_| tab.set(AuthTab::Login),
                    "Login"
                }
                button {
                    class: "auth-tab",
                    r#type: "button",
                    "data-active": tab() == AuthTab::Signup,
                    onclick: move |_| tab.set(AuthTab::Signup),
                    "Sign Up"
                }
            }

            if tab() == AuthTab::Login {
                Form { onsubmit: handle_login,
                    Input {
                        label: "Email",
                        input_type: "email",
                        placeholder: "user@example.com",
                        value: login_email(),
                        on_input: move |evt: FormEvent| login_email.set(evt.value()),
                    }
                    Input {
                        label: "Password",
                        input_type: "password",
                        placeholder: "Enter your password",
                        value: login_password(),
                        on_input: move |evt: FormEvent| login_password.set(evt.value()),
                    }
                    button {
                        class: "button form-submit",
                        "data-style": "primary",
                        r#type: "submit",
                        disabled: *login_busy.read(),
                        if *login_busy.read() { "Signing in..." } else { "Sign In" }
                    }
                }
            } else {
                Form { onsubmit: handle_signup,
                    Input {
                        label: "Name",
                        placeholder: "Full name",
                        value: signup_name(),
                        on_input: move |evt: FormEvent| signup_name.set(evt.value()),
                    }
                    Input {
                        label: "Email",
                        input_type: "email",
                        placeholder: "user@example.com",
                        value: signup_email(),
                        on_input: move |evt: FormEvent| signup_email.set(evt.value()),
                    }
                    Input {
                        label: "Password",
                        input_type: "password",
                        placeholder: "Choose a password",
                        value: signup_password(),
                        on_input: move |evt: FormEvent| signup_password.set(evt.value()),
                    }
                    Input {
                        label: "Phone",
                        input_type: "tel",
                        placeholder: "Contact number",
                        value: signup_phone(),
                        on_input: move |evt: FormEvent| signup_phone.set(evt.value()),
                    }
                    FormSelect {
                        label: "I am a",
                        value: signup_role(),
                        onchange: move |evt: Event<FormData>| signup_role.set(evt.value()),
                        option { value: "citizen", "Citizen" }
                        option { value: "volunteer", "Volunteer" }
                    }
                    button {
                        class: "button form-submit",
                        "data-style": "primary",
                        r#type: "submit",
                        disabled: *signup_busy.read(),
                        if *signup_busy.read() { "Creating account..." } else { "Create Account" }
                    }
                }
            }
        }
    }
}
