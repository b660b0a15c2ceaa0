use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Embedded player while the shrine is live, otherwise an offline notice.
#[component]
pub fn LivestreamPage() -> Element {
    let i18n = crate::use_i18n();
    let stream = use_resource(|| async move { api::get_livestream().await });
    crate::use_load_error_toast(stream, "toast.load_failed");

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {i18n.t("livestream.title")} }
            }
            match stream() {
                None => rsx! { p { class: "hint", {i18n.t("common.loading")} } },
                Some(Err(_)) => rsx! { p { class: "hint", {i18n.t("common.error_try_again")} } },
                Some(Ok(Some(stream))) if stream.is_live => rsx! {
                    div { class: "live_header",
                        span { class: "badge live", {i18n.t("livestream.live_now")} }
                        h2 { "{stream.title}" }
                    }
                    div { class: "video_frame",
                        iframe {
                            src: "{stream.embed_url}",
                            title: "{stream.title}",
                            allow: "autoplay; encrypted-media; picture-in-picture",
                            allowfullscreen: true,
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div { class: "panel",
                        p { {i18n.t("livestream.offline")} }
                    }
                    crate::MassTimes {}
                },
            }
        }
    }
}
