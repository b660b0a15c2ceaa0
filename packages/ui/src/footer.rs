use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        footer { class: "site_footer",
            span { {i18n.t("footer.copyright")} }
            a { href: "/contact", {i18n.t("nav.contact")} }
            a { href: "/admin", {i18n.t("nav.admin")} }
        }
    }
}
