use dioxus::prelude::*;

use super::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "No section at /{path}." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
