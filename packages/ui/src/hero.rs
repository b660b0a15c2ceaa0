use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div { id: "hero",
            div { class: "hero_inner",
                p { class: "hero_tagline", {i18n.t("app.tagline")} }
                h1 { {i18n.t("home.welcome")} }
                p { {i18n.t("home.subtitle")} }

                div { class: "cta_row",
                    a { class: "btn primary", href: "/prayers", {i18n.t("home.cta.prayer")} }
                    a { class: "btn", href: "/livestream", {i18n.t("home.cta.livestream")} }
                }
            }
        }
    }
}

#[component]
pub fn MassTimes() -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        div { class: "panel",
            h2 { {i18n.t("home.mass_times_title")} }
            p { {i18n.t("home.mass_times_body")} }
        }
    }
}
