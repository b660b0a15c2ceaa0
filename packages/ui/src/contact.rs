use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[component]
pub fn ContactPage() -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let on_submit = move |_| {
        if [name(), email(), subject(), message()]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            toasts.error(i18n.t("common.required_fields"), None);
            return;
        }
        sending.set(true);
        spawn(async move {
            match api::submit_contact_message(name(), email(), subject(), message()).await {
                Ok(()) => {
                    toasts.success(i18n.t("contact.sent"), None);
                    subject.set(String::new());
                    message.set(String::new());
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
                h1 { {i18n.t("contact.title")} }
            }
            p { class: "hint", {i18n.t("contact.intro")} }

            div { class: "columns",
                div { class: "panel",
                    label { {i18n.t("common.name")} }
                    input { value: "{name}", oninput: move |e| name.set(e.value()) }
                    label { {i18n.t("common.email")} }
                    input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
                    label { {i18n.t("contact.form.subject")} }
                    input { value: "{subject}", oninput: move |e| subject.set(e.value()) }
                    label { {i18n.t("contact.form.message")} }
                    textarea { rows: 6, value: "{message}", oninput: move |e| message.set(e.value()) }
                    button {
                        class: "btn primary",
                        disabled: sending(),
                        onclick: on_submit,
                        if sending() { {i18n.t("common.submitting")} } else { {i18n.t("common.submit")} }
                    }
                }
                div { class: "panel",
                    h2 { {i18n.t("contact.address_title")} }
                    p { {i18n.t("contact.office_hours")} }
                }
            }
        }
    }
}
