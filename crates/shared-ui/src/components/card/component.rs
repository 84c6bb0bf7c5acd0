use dioxus::prelude::*;

/// Bordered content container.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class, {children} }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Supporting text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card, typically action buttons.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_sections() {
        let html = dioxus_ssr::render_element(rsx! {
            Card {
                CardHeader {
                    CardTitle { "Flooded underpass" }
                }
                CardContent { "Water rising fast" }
            }
        });
        assert!(html.contains(r#"class="card""#), "got: {html}");
        assert!(html.contains("card-title"), "got: {html}");
        assert!(html.contains("Flooded underpass"), "got: {html}");
    }

    #[test]
    fn extra_class_is_appended() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { class: "alert-critical", "body" }
        });
        assert!(html.contains(r#"class="card alert-critical""#), "got: {html}");
    }
}
