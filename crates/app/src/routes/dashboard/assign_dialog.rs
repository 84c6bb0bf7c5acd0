use dioxus::prelude::*;
use shared_types::AssignVolunteer;
use shared_ui::{
    use_toast, Form, FormSelect, Modal, ModalClose, ModalHeader, ModalTitle, Skeleton, Textarea,
};

use crate::api;

/// Volunteer-assignment overlay for one report.
///
/// Mounted fresh each time it opens, so the roster is re-fetched per open
/// and stale form state cannot leak between reports.
#[component]
pub fn AssignDialog(
    report_id: i64,
    report_title: String,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();

    let roster = use_resource(|| async move {
        api::volunteers()
            .await
            .inspect_err(|err| tracing::error!("volunteer roster failed: {err}"))
    });

    let mut volunteer_id = use_signal(String::new);
    let mut task_description = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let handle_assign = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let Ok(volunteer) = volunteer_id.read().parse::<i64>() else {
            toast.error("Please select a volunteer");
            return;
        };
        let assignment = AssignVolunteer {
            volunteer_id: volunteer,
            task_description: task_description.read().clone(),
        };
        spawn(async move {
            in_flight.set(true);
            match api::assign_volunteer(report_id, assignment).await {
                Ok(()) => {
                    toast.success("Volunteer assigned successfully");
                    on_saved.call(());
                }
                Err(err) => toast.error(err.user_message("Failed to assign volunteer")),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Modal { open: true, on_close: move |_| on_close.call(()),
            ModalHeader {
                ModalTitle { "Assign Volunteer" }
                ModalClose { on_close: move |_| on_close.call(()) }
            }

            p { class: "assign-report-line", "Report: {report_title}" }

            match &*roster.read() {
                Some(Ok(volunteers)) => rsx! {
                    if volunteers.is_empty() {
                        p { class: "empty-state", "No volunteers registered" }
                    } else {
                        Form { onsubmit: handle_assign,
                            FormSelect {
                                label: "Volunteer",
                                value: volunteer_id(),
                                onchange: move |evt: Event<FormData>| volunteer_id.set(evt.value()),
                                option { value: "", "Select a volunteer..." }
                                for volunteer in volunteers.iter() {
                                    option {
                                        value: "{volunteer.id}",
                                        "{volunteer.name} ({volunteer.email})"
                                    }
                                }
                            }
                            Textarea {
                                label: "Task Description",
                                placeholder: "What should this volunteer do?",
                                value: task_description(),
                                on_input: move |evt: FormEvent| task_description.set(evt.value()),
                            }
                            button {
                                class: "button form-submit",
                                "data-style": "primary",
                                r#type: "submit",
                                disabled: *in_flight.read(),
                                if *in_flight.read() { "Assigning..." } else { "Assign" }
                            }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    p { class: "dashboard-error", "Error loading volunteers" }
                },
                None => rsx! {
                    Skeleton { style: "height: 8rem; width: 100%;" }
                },
            }
        }
    }
}
