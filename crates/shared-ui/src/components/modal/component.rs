use dioxus::prelude::*;

/// Centered overlay panel.
///
/// Renders nothing while closed. Clicking the backdrop closes the modal;
/// clicks inside the panel are stopped so they never reach the backdrop.
#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Header section of a Modal.
#[component]
pub fn ModalHeader(children: Element) -> Element {
    rsx! {
        div { class: "modal-header", {children} }
    }
}

/// Title element within a ModalHeader.
#[component]
pub fn ModalTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "modal-title", {children} }
    }
}

/// Footer section of a Modal.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        div { class: "modal-footer", {children} }
    }
}

/// Close button for a Modal.
#[component]
pub fn ModalClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "modal-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render an rsx tree inside a VirtualDom so component props (including
    /// `EventHandler`s) are built within a live Dioxus runtime.
    fn render_app(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_app(|| rsx! {
            Modal { open: false, on_close: move |_| {}, "hidden body" }
        });
        assert!(!html.contains("hidden body"), "got: {html}");
        assert!(!html.contains("modal-overlay"), "got: {html}");
    }

    #[test]
    fn open_modal_renders_children_inside_panel() {
        let html = render_app(|| rsx! {
            Modal { open: true, on_close: move |_| {},
                ModalHeader {
                    ModalTitle { "Assign Volunteer" }
                    ModalClose { on_close: move |_| {} }
                }
                "visible body"
            }
        });
        assert!(html.contains("modal-overlay"), "got: {html}");
        assert!(html.contains("modal-panel"), "got: {html}");
        assert!(html.contains("Assign Volunteer"), "got: {html}");
        assert!(html.contains("visible body"), "got: {html}");
    }
}
