use dioxus::prelude::*;

use views::{
    Admin, Announcements, Contact, Gallery, Home, Livestream, NotFound, Prayers, Testimonies,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/prayers")]
    Prayers {},
    #[route("/testimonies")]
    Testimonies {},
    #[route("/announcements")]
    Announcements {},
    #[route("/gallery")]
    Gallery {},
    #[route("/livestream")]
    Livestream {},
    #[route("/contact")]
    Contact {},
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn main() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();
    server::log_runtime_config();

    dioxus::serve(|| async move {
        let state = api::state::AppState::global().await?;
        let api::config::StorageConfig::Filesystem {
            base_path,
            serve_url,
        } = &state.config.storage;
        tracing::info!(%base_path, %serve_url, "serving uploads");

        Ok::<_, anyhow::Error>(dioxus::server::router(App)
            .nest_service(serve_url, tower_http::services::ServeDir::new(base_path))
            .layer(tower_http::trace::TraceLayer::new_for_http()))
    });
}

#[cfg(feature = "server")]
mod server {
    use std::env;

    pub fn log_runtime_config() {
        let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let mode = api::config::AppMode::from_env();
        tracing::info!(%ip, %port, ?mode, "startup");

        if let Ok(url) = env::var("DATABASE_URL") {
            tracing::info!(database_url = %api::config::redact_db_url(&url), "startup");
        }

        log_missing_envs("admin", &["ADMIN_USERNAME", "ADMIN_PASSWORD"]);
        log_missing_envs(
            "email",
            &["SMTP_HOST", "SMTP_USERNAME", "SMTP_PASSWORD", "SMTP_FROM_EMAIL"],
        );
    }

    fn log_missing_envs(group: &str, keys: &[&str]) {
        let missing: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| env::var(key).ok().is_none())
            .collect();
        if missing.is_empty() {
            return;
        }

        tracing::warn!("missing {group} envs: {}", missing.join(", "));
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ShrineTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::AdminSessionProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Site chrome around every route: brand, navigation, language switcher and footer.
#[component]
fn WebNavbar() -> Element {
    let i18n = ui::use_i18n();

    rsx! {
        nav { class: "shrine_nav",
            div { class: "shrine_nav_inner",
                Link { class: "brand", to: Route::Home {}, {i18n.t("app.name")} }
                div { class: "nav_links",
                    Link { class: "nav_link", active_class: "active", to: Route::Home {}, {i18n.t("nav.home")} }
                    Link { class: "nav_link", active_class: "active", to: Route::Prayers {}, {i18n.t("nav.prayers")} }
                    Link { class: "nav_link", active_class: "active", to: Route::Testimonies {}, {i18n.t("nav.testimonies")} }
                    Link { class: "nav_link", active_class: "active", to: Route::Announcements {}, {i18n.t("nav.announcements")} }
                    Link { class: "nav_link", active_class: "active", to: Route::Gallery {}, {i18n.t("nav.gallery")} }
                    Link { class: "nav_link", active_class: "active", to: Route::Livestream {}, {i18n.t("nav.livestream")} }
                    Link { class: "nav_link", active_class: "active", to: Route::Contact {}, {i18n.t("nav.contact")} }
                }
                ui::LanguageSwitcher {}
            }
        }
        main { class: "shrine_container route_view", Outlet::<Route> {} }
        ui::SiteFooter {}
    }
}
