use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Prayer request form followed by the public prayer wall.
#[component]
pub fn PrayerPage() -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let mut prayers = use_resource(|| async move { api::list_prayer_requests(50).await });
    crate::use_load_error_toast(prayers, "toast.load_failed");

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut request = use_signal(String::new);
    let mut is_private = use_signal(|| false);
    let mut sending = use_signal(|| false);

    let on_submit = move |_| {
        if name().trim().is_empty() || request().trim().is_empty() {
            toasts.error(i18n.t("common.required_fields"), None);
            return;
        }
        sending.set(true);
        spawn(async move {
            match api::submit_prayer_request(name(), email(), request(), is_private()).await {
                Ok(_) => {
                    toasts.success(i18n.t("prayers.submitted"), None);
                    request.set(String::new());
                    is_private.set(false);
                    prayers.restart();
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
                h1 { {i18n.t("prayers.title")} }
            }
            p { class: "hint", {i18n.t("prayers.intro")} }

            div { class: "panel",
                label { {i18n.t("common.name")} }
                input { value: "{name}", oninput: move |e| name.set(e.value()) }
                label { {i18n.t("common.email")} " " span { class: "hint", {i18n.t("common.optional")} } }
                input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
                label { {i18n.t("prayers.form.request")} }
                textarea {
                    rows: 5,
                    value: "{request}",
                    placeholder: i18n.t("prayers.form.request_ph"),
                    oninput: move |e| request.set(e.value()),
                }
                label { class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: is_private(),
                        onchange: move |e| is_private.set(e.checked()),
                    }
                    {i18n.t("prayers.form.private")}
                }
                button {
                    class: "btn primary",
                    disabled: sending(),
                    onclick: on_submit,
                    if sending() { {i18n.t("common.submitting")} } else { {i18n.t("common.submit")} }
                }
            }

            h2 { {i18n.t("prayers.wall_title")} }
            match prayers() {
                None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
                Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
                Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("prayers.none_yet")} } },
                Some(Ok(items)) => rsx! {
                    for prayer in items {
                        div { key: "{prayer.id}", class: "card",
                            div { class: "card_top",
                                h3 { "{prayer.name}" }
                                if prayer.status == api::types::PrayerStatus::Prayed {
                                    span { class: "badge", {i18n.t("prayers.prayed")} }
                                }
                            }
                            p { class: "body", "{prayer.request}" }
                            p { class: "meta", {crate::format_date(prayer.created_at)} }
                        }
                    }
                },
            }
        }
    }
}
