use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Site-wide colours, typography and the shared `.btn` / `.panel` / `.card` classes.
#[component]
pub fn ShrineTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}
