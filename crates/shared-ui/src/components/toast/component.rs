use dioxus::prelude::*;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Flavor of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// The currently displayed toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
    /// Generation stamp — a dismiss timer only clears the toast it was
    /// armed for, so a replacement toast restarts the countdown.
    id: u64,
}

/// Handle for showing toasts. There is a single shared slot: each call
/// replaces whatever is on screen, no queueing.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    current: Signal<Option<ToastMessage>>,
    counter: Signal<u64>,
}

impl Toasts {
    pub fn info(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Info, text.into());
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<ToastMessage> {
        self.current.read().clone()
    }

    fn show(&mut self, kind: ToastKind, text: String) {
        let id = *self.counter.peek() + 1;
        self.counter.set(id);
        self.current.set(Some(ToastMessage { text, kind, id }));

        #[cfg(target_arch = "wasm32")]
        {
            let mut current = self.current;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                let still_mine = current.peek().as_ref().map(|t| t.id) == Some(id);
                if still_mine {
                    current.set(None);
                }
            });
        }
    }
}

/// Access the toast handle provided by [`ToastProvider`].
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast slot and renders it above the wrapped content.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        current: Signal::new(None),
        counter: Signal::new(0),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
        ToastViewport { toasts }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    match toasts.current() {
        Some(message) => rsx! {
            div {
                class: "toast",
                "data-kind": message.kind.class(),
                "data-open": "true",
                "{message.text}"
            }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn FiresTwoToasts() -> Element {
        let mut toast = use_toast();
        use_hook(move || {
            toast.success("first toast");
            toast.error("second toast");
        });
        rsx! {}
    }

    #[test]
    fn provider_renders_no_toast_initially() {
        let html = dioxus_ssr::render_element(rsx! {
            ToastProvider {
                div { "app body" }
            }
        });
        assert!(html.contains("app body"), "got: {html}");
        assert!(!html.contains(r#"class="toast""#), "got: {html}");
    }

    #[test]
    fn second_toast_replaces_first() {
        let html = dioxus_ssr::render_element(rsx! {
            ToastProvider {
                FiresTwoToasts {}
            }
        });
        assert!(html.contains("second toast"), "got: {html}");
        assert!(!html.contains("first toast"), "got: {html}");
        assert!(html.contains(r#"data-kind="error""#), "got: {html}");
    }

    #[test]
    fn kind_class_mapping_is_total() {
        assert_eq!(ToastKind::Info.class(), "info");
        assert_eq!(ToastKind::Success.class(), "success");
        assert_eq!(ToastKind::Error.class(), "error");
    }
}
