use api::types::{PrayerStatus, TestimonyStatus};
use dioxus::prelude::*;
use serde::Deserialize;

const LIST_LIMIT: i64 = 200;
const GALLERY_FILE_INPUT: &str = "shrine_gallery_file";
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[component]
pub(super) fn PrayerModeration(token: String) -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let mut prayers = use_resource({
        let token = token.clone();
        move || {
            let token = token.clone();
            async move { api::admin_list_prayer_requests(token, LIST_LIMIT).await }
        }
    });
    crate::use_load_error_toast(prayers, "toast.load_failed");

    rsx! {
        match prayers() {
            None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
            Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
            Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("prayers.none_yet")} } },
            Some(Ok(items)) => rsx! {
                for prayer in items {
                    div { key: "{prayer.id}", class: "card",
                        div { class: "card_top",
                            h3 { "{prayer.name}" }
                            if prayer.is_private {
                                span { class: "badge", {i18n.t("prayers.private_badge")} }
                            }
                            if prayer.status == PrayerStatus::Prayed {
                                span { class: "badge done", {i18n.t("prayers.prayed")} }
                            }
                        }
                        p { class: "body", "{prayer.request}" }
                        p { class: "meta",
                            {crate::format_date(prayer.created_at)}
                            if let Some(email) = &prayer.email {
                                " · {email}"
                            }
                        }
                        div { class: "actions",
                            if prayer.status == PrayerStatus::Open {
                                button {
                                    class: "btn primary",
                                    onclick: {
                                        let token = token.clone();
                                        let id = prayer.id.to_string();
                                        move |_| {
                                            let token = token.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match api::mark_prayer_request_prayed(token, id).await {
                                                    Ok(_) => prayers.restart(),
                                                    Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                                                }
                                            });
                                        }
                                    },
                                    {i18n.t("prayers.mark_prayed")}
                                }
                            }
                            DeleteButton {
                                on_confirm: {
                                    let token = token.clone();
                                    let id = prayer.id.to_string();
                                    move |_| {
                                        let token = token.clone();
                                        let id = id.clone();
                                        spawn(async move {
                                            match api::delete_prayer_request(token, id).await {
                                                Ok(()) => prayers.restart(),
                                                Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
pub(super) fn TestimonyModeration(token: String) -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let mut testimonies = use_resource({
        let token = token.clone();
        move || {
            let token = token.clone();
            async move { api::admin_list_testimonies(token, LIST_LIMIT).await }
        }
    });
    crate::use_load_error_toast(testimonies, "toast.load_failed");

    let set_status = {
        let token = token.clone();
        move |id: String, status: TestimonyStatus| {
            let token = token.clone();
            spawn(async move {
                match api::set_testimony_status(token, id, status).await {
                    Ok(_) => testimonies.restart(),
                    Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                }
            });
        }
    };

    rsx! {
        match testimonies() {
            None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
            Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
            Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("testimonies.none_yet")} } },
            Some(Ok(items)) => rsx! {
                for testimony in items {
                    div { key: "{testimony.id}", class: "card",
                        div { class: "card_top",
                            h3 { "{testimony.title}" }
                            span { class: "badge", {i18n.t(status_key(testimony.status))} }
                        }
                        p { class: "body", "{testimony.body}" }
                        p { class: "meta", "{testimony.name} · " {crate::format_date(testimony.created_at)} }
                        div { class: "actions",
                            if testimony.status != TestimonyStatus::Approved {
                                button {
                                    class: "btn primary",
                                    onclick: {
                                        let set_status = set_status.clone();
                                        let id = testimony.id.to_string();
                                        move |_| set_status(id.clone(), TestimonyStatus::Approved)
                                    },
                                    {i18n.t("testimonies.approve")}
                                }
                            }
                            if testimony.status != TestimonyStatus::Rejected {
                                button {
                                    class: "btn",
                                    onclick: {
                                        let set_status = set_status.clone();
                                        let id = testimony.id.to_string();
                                        move |_| set_status(id.clone(), TestimonyStatus::Rejected)
                                    },
                                    {i18n.t("testimonies.reject")}
                                }
                            }
                            DeleteButton {
                                on_confirm: {
                                    let token = token.clone();
                                    let id = testimony.id.to_string();
                                    move |_| {
                                        let token = token.clone();
                                        let id = id.clone();
                                        spawn(async move {
                                            match api::delete_testimony(token, id).await {
                                                Ok(()) => testimonies.restart(),
                                                Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }
            },
        }
    }
}

fn status_key(status: TestimonyStatus) -> &'static str {
    match status {
        TestimonyStatus::Pending => "testimonies.pending",
        TestimonyStatus::Approved => "testimonies.approved",
        TestimonyStatus::Rejected => "testimonies.rejected",
    }
}

#[component]
pub(super) fn AnnouncementEditor(token: String) -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let mut announcements =
        use_resource(|| async move { api::list_announcements(LIST_LIMIT).await });
    crate::use_load_error_toast(announcements, "toast.load_failed");

    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut event_date = use_signal(String::new);

    let on_publish = {
        let token = token.clone();
        move |_| {
            let token = token.clone();
            spawn(async move {
                match api::create_announcement(token, title(), body(), event_date()).await {
                    Ok(_) => {
                        toasts.success(i18n.t("toast.saved"), None);
                        title.set(String::new());
                        body.set(String::new());
                        event_date.set(String::new());
                        announcements.restart();
                    }
                    Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                }
            });
        }
    };

    rsx! {
        div { class: "panel",
            label { {i18n.t("announcements.form.title")} }
            input { value: "{title}", oninput: move |e| title.set(e.value()) }
            label { {i18n.t("announcements.form.body")} }
            textarea { rows: 5, value: "{body}", oninput: move |e| body.set(e.value()) }
            label { {i18n.t("announcements.form.event_date")} " " span { class: "hint", {i18n.t("common.optional")} } }
            input { r#type: "date", value: "{event_date}", oninput: move |e| event_date.set(e.value()) }
            button { class: "btn primary", onclick: on_publish, {i18n.t("announcements.create")} }
        }

        match announcements() {
            None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
            Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
            Some(Ok(items)) => rsx! {
                for announcement in items {
                    crate::announcements::AnnouncementCard { key: "{announcement.id}", announcement: announcement.clone(),
                        div { class: "actions",
                            DeleteButton {
                                on_confirm: {
                                    let token = token.clone();
                                    let id = announcement.id.to_string();
                                    move |_| {
                                        let token = token.clone();
                                        let id = id.clone();
                                        spawn(async move {
                                            match api::delete_announcement(token, id).await {
                                                Ok(()) => announcements.restart(),
                                                Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }
            },
        }
    }
}

/// A file picked in the browser, as returned by [`READ_PICKED_FILE_JS`].
#[derive(Debug, Deserialize, PartialEq)]
struct PickedFile {
    name: String,
    #[serde(rename = "type")]
    content_type: String,
    bytes: Vec<u8>,
}

const READ_PICKED_FILE_JS: &str = r#"(async function(){
    const el = document.getElementById("shrine_gallery_file");
    if(!el || !el.files || !el.files[0]) return null;
    const f = el.files[0];
    const buf = new Uint8Array(await f.arrayBuffer());
    return { name: f.name, type: f.type || "", bytes: Array.from(buf) };
})()"#;

const CLEAR_PICKED_FILE_JS: &str = r#"(function(){
    const el = document.getElementById("shrine_gallery_file");
    if(el) el.value = "";
    return "";
})()"#;

fn parse_picked_file(value: serde_json::Value) -> Option<PickedFile> {
    if value.is_null() {
        return None;
    }
    serde_json::from_value(value).ok()
}

#[component]
pub(super) fn GalleryManager(token: String) -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let mut images = use_resource(|| async move { api::list_gallery(LIST_LIMIT).await });
    crate::use_load_error_toast(images, "toast.load_failed");

    let mut caption = use_signal(String::new);
    let mut uploading = use_signal(|| false);

    let on_upload = {
        let token = token.clone();
        move |_| {
            let token = token.clone();
            uploading.set(true);
            spawn(async move {
                let picked = document::eval(READ_PICKED_FILE_JS)
                    .await
                    .ok()
                    .and_then(parse_picked_file);
                let Some(file) = picked else {
                    toasts.error(i18n.t("gallery.no_file"), None);
                    uploading.set(false);
                    return;
                };
                if file.bytes.len() > MAX_UPLOAD_BYTES {
                    toasts.error(i18n.t("gallery.too_large"), None);
                    uploading.set(false);
                    return;
                }

                match api::upload_gallery_image(token, caption(), file.name, file.content_type, file.bytes)
                    .await
                {
                    Ok(_) => {
                        toasts.success(i18n.t("gallery.uploaded"), None);
                        caption.set(String::new());
                        let _ = document::eval(CLEAR_PICKED_FILE_JS).await;
                        images.restart();
                    }
                    Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                }
                uploading.set(false);
            });
        }
    };

    rsx! {
        div { class: "panel",
            label { {i18n.t("gallery.form.file")} }
            input {
                id: GALLERY_FILE_INPUT,
                r#type: "file",
                accept: "image/jpeg,image/png,image/webp,image/gif",
            }
            label { {i18n.t("gallery.form.caption")} " " span { class: "hint", {i18n.t("common.optional")} } }
            input { value: "{caption}", oninput: move |e| caption.set(e.value()) }
            button {
                class: "btn primary",
                disabled: uploading(),
                onclick: on_upload,
                if uploading() { {i18n.t("common.submitting")} } else { {i18n.t("gallery.upload")} }
            }
        }

        match images() {
            None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
            Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
            Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("gallery.none_yet")} } },
            Some(Ok(items)) => rsx! {
                div { class: "gallery_grid",
                    for image in items {
                        figure { key: "{image.id}", class: "gallery_item",
                            img { src: "{image.url}", alt: "{image.caption}", loading: "lazy" }
                            figcaption { "{image.caption}" }
                            DeleteButton {
                                on_confirm: {
                                    let token = token.clone();
                                    let id = image.id.to_string();
                                    move |_| {
                                        let token = token.clone();
                                        let id = id.clone();
                                        spawn(async move {
                                            match api::delete_gallery_image(token, id).await {
                                                Ok(()) => images.restart(),
                                                Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
pub(super) fn LivestreamEditor(token: String) -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let current = use_resource(|| async move { api::get_livestream().await });
    crate::use_load_error_toast(current, "toast.load_failed");

    let mut title = use_signal(String::new);
    let mut embed_url = use_signal(String::new);
    let mut is_live = use_signal(|| false);

    // Prefill the form once the saved stream arrives.
    use_effect(move || {
        if let Some(Ok(Some(stream))) = &*current.read() {
            title.set(stream.title.clone());
            embed_url.set(stream.embed_url.clone());
            is_live.set(stream.is_live);
        }
    });

    let on_save = {
        let token = token.clone();
        move |_| {
            let token = token.clone();
            spawn(async move {
                match api::set_livestream(token, title(), embed_url(), is_live()).await {
                    Ok(_) => toasts.success(i18n.t("toast.saved"), None),
                    Err(e) => toasts.server_error(i18n, "toast.submit_failed", e),
                }
            });
        }
    };

    rsx! {
        div { class: "panel",
            label { {i18n.t("livestream.form.title")} }
            input { value: "{title}", oninput: move |e| title.set(e.value()) }
            label { {i18n.t("livestream.form.url")} }
            input {
                r#type: "url",
                placeholder: "https://www.youtube.com/embed/…",
                value: "{embed_url}",
                oninput: move |e| embed_url.set(e.value()),
            }
            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: is_live(),
                    onchange: move |e| is_live.set(e.checked()),
                }
                {i18n.t("livestream.form.is_live")}
            }
            button { class: "btn primary", onclick: on_save, {i18n.t("livestream.save")} }
        }
    }
}

#[component]
pub(super) fn ContactInbox(token: String) -> Element {
    let i18n = crate::use_i18n();
    let messages = use_resource({
        let token = token.clone();
        move || {
            let token = token.clone();
            async move { api::list_contact_messages(token, LIST_LIMIT).await }
        }
    });
    crate::use_load_error_toast(messages, "toast.load_failed");

    rsx! {
        match messages() {
            None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
            Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
            Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("admin.no_messages")} } },
            Some(Ok(items)) => rsx! {
                for message in items {
                    div { key: "{message.id}", class: "card",
                        div { class: "card_top",
                            h3 { "{message.subject}" }
                            span { class: "meta", {crate::format_date(message.created_at)} }
                        }
                        p { class: "meta",
                            "{message.name} · "
                            a { href: "mailto:{message.email}", "{message.email}" }
                        }
                        p { class: "body", "{message.message}" }
                    }
                }
            },
        }
    }
}

/// Two-step delete: the first click arms the button.
#[component]
fn DeleteButton(on_confirm: EventHandler<()>) -> Element {
    let i18n = crate::use_i18n();
    let mut armed = use_signal(|| false);

    rsx! {
        button {
            class: if armed() { "btn danger armed" } else { "btn danger" },
            onclick: move |_| {
                if armed() {
                    armed.set(false);
                    on_confirm.call(());
                } else {
                    armed.set(true);
                }
            },
            if armed() { {i18n.t("common.confirm_delete")} } else { {i18n.t("common.delete")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picked_file_parses_browser_payload() {
        let value = json!({ "name": "crib.png", "type": "image/png", "bytes": [137, 80, 78, 71] });
        assert_eq!(
            parse_picked_file(value),
            Some(PickedFile {
                name: "crib.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![137, 80, 78, 71],
            })
        );
    }

    #[test]
    fn no_file_or_malformed_payload_is_none() {
        assert_eq!(parse_picked_file(serde_json::Value::Null), None);
        assert_eq!(parse_picked_file(json!({ "name": "x" })), None);
        assert_eq!(parse_picked_file(json!({ "name": "x", "type": "", "bytes": [300] })), None);
    }

    #[test]
    fn picked_file_script_targets_the_file_input() {
        assert!(READ_PICKED_FILE_JS.contains(GALLERY_FILE_INPUT));
        assert!(CLEAR_PICKED_FILE_JS.contains(GALLERY_FILE_INPUT));
    }
}
