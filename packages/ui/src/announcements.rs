use api::types::Announcement;
use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[component]
pub fn AnnouncementsPage() -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {i18n.t("announcements.title")} }
            }
            AnnouncementList { limit: 50 }
        }
    }
}

/// Newest announcements first; the home page shows a short version.
#[component]
pub fn AnnouncementList(limit: i64) -> Element {
    let i18n = crate::use_i18n();
    let announcements = use_resource(move || async move { api::list_announcements(limit).await });
    crate::use_load_error_toast(announcements, "toast.load_failed");

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        match announcements() {
            None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
            Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
            Some(Ok(items)) if items.is_empty() => rsx! { p { class: "hint", {i18n.t("announcements.none_yet")} } },
            Some(Ok(items)) => rsx! {
                for announcement in items {
                    AnnouncementCard { key: "{announcement.id}", announcement }
                }
            },
        }
    }
}

#[component]
pub(crate) fn AnnouncementCard(announcement: Announcement, children: Element) -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        article { class: "card",
            div { class: "card_top",
                h3 { "{announcement.title}" }
                if let Some(date) = announcement.event_date {
                    span { class: "badge", {i18n.t("announcements.event_date")} " {date}" }
                }
            }
            p { class: "body", "{announcement.body}" }
            {children}
        }
    }
}
