use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Click-action button. Form submit buttons stay plain `button` elements
/// with `type: "submit"` so the surrounding form handles them.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            class: "button",
            "data-style": variant.class(),
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render an rsx tree inside a VirtualDom so component props (including
    /// defaulted `EventHandler`s) are built within a live Dioxus runtime.
    fn render_app(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_variant_and_disabled_state() {
        let html = render_app(|| rsx! {
            Button { variant: ButtonVariant::Secondary, disabled: true, "Export" }
        });
        assert!(html.contains(r#"data-style="secondary""#), "got: {html}");
        assert!(html.contains("disabled"), "got: {html}");
        assert!(html.contains("Export"), "got: {html}");
    }
}
