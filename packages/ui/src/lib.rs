//! This crate contains all shared UI for the workspace.

use time::{macros::format_description, OffsetDateTime};

mod i18n;
pub use i18n::{
    try_use_i18n, use_i18n, use_language_state, use_language_storage_provider,
    CompletenessReport, I18n, I18nError, I18nProvider, Lang, LanguageSession, LanguageState,
    LanguageStorage, MemoryStorage, StorageError, TranslationTable,
};

mod language_switcher;
pub use language_switcher::LanguageSwitcher;

mod theme;
pub use theme::ShrineTheme;

mod toast;
pub use toast::{use_load_error_toast, use_toasts, Toast, ToastKind, ToastProvider, Toasts};

mod hero;
pub use hero::{Hero, MassTimes};

mod footer;
pub use footer::SiteFooter;

mod prayers;
pub use prayers::PrayerPage;

mod testimonies;
pub use testimonies::TestimonyPage;

mod announcements;
pub use announcements::{AnnouncementList, AnnouncementsPage};

mod gallery;
pub use gallery::GalleryPage;

mod livestream;
pub use livestream::LivestreamPage;

mod contact;
pub use contact::ContactPage;

mod admin;
pub use admin::{use_admin_session, AdminPage, AdminSession, AdminSessionProvider};

/// Calendar date of a server timestamp, e.g. `2024-12-25`.
pub(crate) fn format_date(at: OffsetDateTime) -> String {
    at.date()
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn format_date_drops_the_time() {
        assert_eq!(format_date(datetime!(2024-12-25 18:30 UTC)), "2024-12-25");
    }
}
