//! Admin sign-in and the moderation dashboard.

use dioxus::prelude::*;

mod panels;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");
const TOKEN_STORAGE_KEY: &str = "shrine_admin_token";

/// The signed-in admin's bearer token, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct AdminSession {
    token: Signal<Option<String>>,
}

impl AdminSession {
    pub fn token(&self) -> Option<String> {
        (self.token)()
    }

    pub fn sign_in(self, token: String) {
        let js = format!(
            r#"(function(){{ try {{ localStorage.setItem("{TOKEN_STORAGE_KEY}", "{}"); }} catch(e) {{}} return ""; }})()"#,
            js_escape(&token)
        );
        let mut slot = self.token;
        slot.set(Some(token));
        spawn(async move {
            let _ = document::eval(&js).await;
        });
    }

    pub fn sign_out(self) {
        let mut slot = self.token;
        slot.set(None);
        spawn(async move {
            let _ = document::eval(&format!(
                r#"(function(){{ try {{ localStorage.removeItem("{TOKEN_STORAGE_KEY}"); }} catch(e) {{}} return ""; }})()"#
            ))
            .await;
        });
    }
}

pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>()
}

/// Provides [`AdminSession`] and restores a saved token after mount.
#[component]
pub fn AdminSessionProvider(children: Element) -> Element {
    let mut token = use_signal(|| None::<String>);
    use_context_provider(|| AdminSession { token });

    // After mount so the server render and hydration agree.
    use_effect(move || {
        spawn(async move {
            let saved = document::eval(&format!(
                r#"(function(){{ try {{ return localStorage.getItem("{TOKEN_STORAGE_KEY}") || ""; }} catch(e) {{ return ""; }} }})()"#
            ))
            .await
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
            if !saved.trim().is_empty() {
                token.set(Some(saved));
            }
        });
    });

    rsx! { {children} }
}

#[component]
pub fn AdminPage() -> Element {
    let i18n = crate::use_i18n();
    let session = use_admin_session();

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }
        div { class: "page admin",
            div { class: "page_header",
                h1 { {i18n.t("admin.title")} }
            }
            match session.token() {
                None => rsx! { AdminSignIn {} },
                Some(token) => rsx! { AdminDashboard { token } },
            }
        }
    }
}

#[component]
fn AdminSignIn() -> Element {
    let i18n = crate::use_i18n();
    let toasts = crate::use_toasts();
    let session = use_admin_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_signin = move |_| {
        busy.set(true);
        spawn(async move {
            match api::admin_signin(username(), password()).await {
                Ok(token) => {
                    password.set(String::new());
                    session.sign_in(token);
                }
                Err(e) => toasts.server_error(i18n, "admin.signin_failed", e),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "panel narrow",
            label { {i18n.t("admin.username")} }
            input {
                autocomplete: "username",
                value: "{username}",
                oninput: move |e| username.set(e.value()),
            }
            label { {i18n.t("admin.password")} }
            input {
                r#type: "password",
                autocomplete: "current-password",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            button {
                class: "btn primary",
                disabled: busy(),
                onclick: on_signin,
                {i18n.t("admin.signin")}
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Prayers,
    Testimonies,
    Announcements,
    Gallery,
    Livestream,
    Messages,
}

impl Panel {
    const ALL: [Panel; 6] = [
        Panel::Prayers,
        Panel::Testimonies,
        Panel::Announcements,
        Panel::Gallery,
        Panel::Livestream,
        Panel::Messages,
    ];

    fn label_key(self) -> &'static str {
        match self {
            Panel::Prayers => "nav.prayers",
            Panel::Testimonies => "nav.testimonies",
            Panel::Announcements => "nav.announcements",
            Panel::Gallery => "nav.gallery",
            Panel::Livestream => "nav.livestream",
            Panel::Messages => "admin.messages",
        }
    }
}

#[component]
fn AdminDashboard(token: String) -> Element {
    let i18n = crate::use_i18n();
    let session = use_admin_session();
    let mut panel = use_signal(|| Panel::Prayers);

    let me = use_resource({
        let token = token.clone();
        move || {
            let token = token.clone();
            async move { api::admin_me(token).await }
        }
    });

    // A stale or revoked token drops back to the sign-in form.
    use_effect(move || {
        if matches!(&*me.read(), Some(Err(_))) {
            session.sign_out();
        }
    });

    rsx! {
        div { class: "admin_bar",
            match me() {
                Some(Ok(admin)) => rsx! {
                    span { class: "hint", {i18n.t("admin.signed_in_as")} " " strong { "{admin.username}" } }
                },
                _ => rsx! { span { class: "hint", {i18n.t("common.loading")} } },
            }
            button { class: "btn", onclick: move |_| session.sign_out(), {i18n.t("admin.signout")} }
        }

        nav { class: "admin_tabs",
            for tab in Panel::ALL {
                button {
                    key: "{tab:?}",
                    class: if panel() == tab { "tab active" } else { "tab" },
                    onclick: move |_| panel.set(tab),
                    {i18n.t(tab.label_key())}
                }
            }
        }

        match panel() {
            Panel::Prayers => rsx! { panels::PrayerModeration { token: token.clone() } },
            Panel::Testimonies => rsx! { panels::TestimonyModeration { token: token.clone() } },
            Panel::Announcements => rsx! { panels::AnnouncementEditor { token: token.clone() } },
            Panel::Gallery => rsx! { panels::GalleryManager { token: token.clone() } },
            Panel::Livestream => rsx! { panels::LivestreamEditor { token: token.clone() } },
            Panel::Messages => rsx! { panels::ContactInbox { token: token.clone() } },
        }
    }
}

fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_escape_quotes_and_backslashes() {
        assert_eq!(js_escape(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(js_escape("eyJ.abc.def"), "eyJ.abc.def");
    }

    #[test]
    fn every_panel_has_a_label() {
        let table = crate::TranslationTable::builtin();
        for panel in Panel::ALL {
            assert!(table.get(crate::Lang::En, panel.label_key()).is_some());
        }
    }
}
