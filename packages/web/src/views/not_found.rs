use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = ui::use_i18n();
    let path = segments.join("/");

    rsx! {
        div { class: "not_found",
            h1 { "404" }
            p { class: "hint", {i18n.t("common.not_found")} }
            p { class: "meta", "/{path}" }
            a { class: "btn primary", href: "/", {i18n.t("common.back")} }
        }
    }
}
