use dioxus::prelude::*;
use ui::{AnnouncementList, Hero, MassTimes};

#[component]
pub fn Home() -> Element {
    let i18n = ui::use_i18n();

    rsx! {
        Hero {}
        div { class: "home_grid",
            section { class: "page",
                div { class: "page_header",
                    h2 { {i18n.t("home.latest_announcements")} }
                    a { class: "btn", href: "/announcements", {i18n.t("nav.announcements")} }
                }
                AnnouncementList { limit: 3 }
            }
            aside { MassTimes {} }
        }
    }
}
