use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[component]
pub fn GalleryPage() -> Element {
    let i18n = crate::use_i18n();
    let images = use_resource(|| async move { api::list_gallery(100).await });
    crate::use_load_error_toast(images, "toast.load_failed");

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {i18n.t("gallery.title")} }
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
                                if !image.caption.is_empty() {
                                    figcaption { "{image.caption}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
