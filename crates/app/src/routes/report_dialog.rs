use dioxus::prelude::*;
use shared_types::{NewReport, Severity};
use shared_ui::{
    use_toast, Form, FormSelect, Input, Modal, ModalClose, ModalHeader, ModalTitle, Textarea,
};

use crate::session::use_session;
use crate::{api, AuthOverlay};

/// Coordinate inputs are optional. Blank (or unparseable) input means the
/// coordinate is absent — it reaches the wire as `null`, never `0`.
fn parse_coordinate(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Report-a-disaster overlay.
///
/// Submission requires an active session: anonymous users get an error
/// toast and the sign-in overlay instead, and nothing is posted.
#[component]
pub fn ReportDialog(
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut auth_overlay = use_context::<AuthOverlay>();
    let mut toast = use_toast();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut severity = use_signal(|| Severity::default().as_str().to_string());
    let mut in_flight = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        if !session.is_authenticated() {
            toast.error("Please login to submit a report");
            on_close.call(());
            auth_overlay.open.set(true);
            return;
        }

        let report = NewReport {
            title: title.read().clone(),
            description: description.read().clone(),
            location: location.read().clone(),
            latitude: parse_coordinate(&latitude.read()),
            longitude: parse_coordinate(&longitude.read()),
            severity: Severity::from_str_or_default(&severity.read()),
        };

        spawn(async move {
            in_flight.set(true);
            match api::submit_report(report).await {
                Ok(()) => {
                    on_close.call(());
                    title.set(String::new());
                    description.set(String::new());
                    location.set(String::new());
                    latitude.set(String::new());
                    longitude.set(String::new());
                    severity.set(Severity::default().as_str().to_string());
                    toast.success("Report submitted successfully");
                    on_saved.call(());
                }
                Err(err) => toast.error(err.user_message("Failed to submit report")),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Modal { open, on_close: move |_| on_close.call(()),
            ModalHeader {
                ModalTitle { "Report a Disaster" }
                ModalClose { on_close: move |_| on_close.call(()) }
            }

            Form { onsubmit: handle_submit,
                Input {
                    label: "Title",
                    placeholder: "What happened?",
                    value: title(),
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                }
                Textarea {
                    label: "Description",
                    placeholder: "Describe the situation...",
                    value: description(),
                    on_input: move |evt: FormEvent| description.set(evt.value()),
                }
                Input {
                    label: "Location",
                    placeholder: "Street, landmark, or area",
                    value: location(),
                    on_input: move |evt: FormEvent| location.set(evt.value()),
                }
                div { class: "form-row",
                    Input {
                        label: "Latitude (optional)",
                        input_type: "number",
                        placeholder: "e.g. 40.7128",
                        value: latitude(),
                        on_input: move |evt: FormEvent| latitude.set(evt.value()),
                    }
                    Input {
                        label: "Longitude (optional)",
                        input_type: "number",
                        placeholder: "e.g. -74.0060",
                        value: longitude(),
                        on_input: move |evt: FormEvent| longitude.set(evt.value()),
                    }
                }
                FormSelect {
                    label: "Severity",
                    value: severity(),
                    onchange: move |evt: Event<FormData>| severity.set(evt.value()),
                    for level in Severity::ALL {
                        option { value: level.as_str(), {level.label()} }
                    }
                }
                button {
                    class: "button form-submit",
                    "data-style": "primary",
                    r#type: "submit",
                    disabled: *in_flight.read(),
                    if *in_flight.read() { "Submitting..." } else { "Submit Report" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_coordinates_are_absent_not_zero() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("   "), None);
    }

    #[test]
    fn numeric_coordinates_parse() {
        assert_eq!(parse_coordinate("40.7128"), Some(40.7128));
        assert_eq!(parse_coordinate(" -74.006 "), Some(-74.006));
    }

    #[test]
    fn garbage_coordinates_are_dropped() {
        assert_eq!(parse_coordinate("north-ish"), None);
    }
}
