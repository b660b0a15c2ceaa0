//! Route targets for the shared page components.

use dioxus::prelude::*;

#[component]
pub fn Prayers() -> Element {
    rsx! { ui::PrayerPage {} }
}

#[component]
pub fn Testimonies() -> Element {
    rsx! { ui::TestimonyPage {} }
}

#[component]
pub fn Announcements() -> Element {
    rsx! { ui::AnnouncementsPage {} }
}

#[component]
pub fn Gallery() -> Element {
    rsx! { ui::GalleryPage {} }
}

#[component]
pub fn Livestream() -> Element {
    rsx! { ui::LivestreamPage {} }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}

#[component]
pub fn Admin() -> Element {
    rsx! { ui::AdminPage {} }
}
