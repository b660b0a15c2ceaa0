use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[component]
pub fn TestimonyPage() -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let testimonies = use_resource(|| async move { api::list_testimonies(50).await });
    crate::use_load_error_toast(testimonies, "toast.load_failed");

    let mut name = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let on_submit = move |_| {
        if [name(), title(), body()].iter().any(|v| v.trim().is_empty()) {
            toasts.error(i18n.t("common.required_fields"), None);
            return;
        }
        sending.set(true);
        spawn(async move {
            match api::submit_testimony(name(), title(), body()).await {
                // Nothing to refresh: new testimonies are hidden until approved.
                Ok(_) => {
                    toasts.success(i18n.t("testimonies.submitted"), None);
                    title.set(String::new());
                    body.set(String::new());
                }
                Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
            }
            sending.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {i18n.t("testimonies.title")} }
            }
            p { class: "hint", {i18n.t("testimonies.intro")} }

            match testimonies() {
                None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
                Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
                Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("testimonies.none_yet")} } },
                Some(Ok(items)) => rsx! {
                    for testimony in items {
                        article { key: "{testimony.id}", class: "card",
                            h3 { "{testimony.title}" }
                            p { class: "body", "{testimony.body}" }
                            p { class: "meta", "{testimony.name} · " {crate::format_date(testimony.created_at)} }
                        }
                    }
                },
            }

            div { class: "panel",
                label { {i18n.t("common.name")} }
                input { value: "{name}", oninput: move |e| name.set(e.value()) }
                label { {i18n.t("testimonies.form.title")} }
                input {
                    value: "{title}",
                    placeholder: i18n.t("testimonies.form.title_ph"),
                    oninput: move |e| title.set(e.value()),
                }
                label { {i18n.t("testimonies.form.body")} }
                textarea {
                    rows: 8,
                    value: "{body}",
                    placeholder: i18n.t("testimonies.form.body_ph"),
                    oninput: move |e| body.set(e.value()),
                }
                button {
                    class: "btn primary",
                    disabled: sending(),
                    onclick: on_submit,
                    if sending() { {i18n.t("common.submitting")} } else { {i18n.t("common.submit")} }
                }
            }
        }
    }
}
