use dioxus::prelude::*;

/// How long a success toast stays up before it dismisses itself.
#[cfg(target_arch = "wasm32")]
const SUCCESS_TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

/// Queue of transient notifications shown in the bottom corner.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        let mut toasts = self.toasts;
        toasts.with_mut(|items| {
            items.push(Toast {
                id,
                title,
                body,
                kind,
            })
        });

        #[cfg(target_arch = "wasm32")]
        if kind == ToastKind::Success {
            let this = *self;
            spawn(async move {
                gloo_timers::future::sleep(SUCCESS_TOAST_TTL).await;
                this.dismiss(id);
            });
        }

        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Success);
    }

    /// Report a failed server call as "<title>" / "Details: <error>".
    pub fn server_error(&self, i18n: crate::I18n, title_key: &str, err: impl std::fmt::Display) {
        self.error(
            i18n.t(title_key),
            Some(format!("{} {err}", i18n.t("toast.details"))),
        );
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let i18n = crate::use_i18n();
    let items = (toasts.toasts)();
    let dismiss_label = i18n.t("toast.dismiss");

    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "{dismiss_label}"
                    }
                }
            }
        }
    }
}

/// Raise an error toast whenever `resource` settles on a new error.
pub fn use_load_error_toast<T: 'static>(
    resource: Resource<Result<T, ServerFnError>>,
    title_key: &'static str,
) {
    let toasts = use_toasts();
    let i18n = crate::use_i18n();
    let mut shown = use_signal(|| None::<String>);

    use_effect(move || {
        let err = resource
            .read()
            .as_ref()
            .and_then(|res| res.as_ref().err())
            .map(|e| e.to_string());
        if err != *shown.peek() {
            if let Some(message) = &err {
                toasts.server_error(i18n, title_key, message);
            }
            shown.set(err);
        }
    });
}
