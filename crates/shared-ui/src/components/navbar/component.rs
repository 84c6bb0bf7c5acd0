use dioxus::prelude::*;

/// Top navigation bar.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar", {children} }
    }
}

/// Brand block at the left edge of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        span { class: "navbar-brand", {children} }
    }
}

/// Horizontal group of navigation links.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        div { class: "navbar-nav", {children} }
    }
}

/// Flexible spacer pushing subsequent items to the right edge.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
