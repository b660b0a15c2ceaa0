use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, warn};

use super::{Lang, LanguageStorage, TranslationTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum I18nError {
    /// Language state was read from outside an `I18nProvider`.
    #[error("language state accessed outside an I18nProvider")]
    Uninitialized,
}

/// The active language of one UI session, plus where it is persisted.
///
/// A session always holds a supported language: it starts on
/// [`Lang::DEFAULT`] and only changes through [`restore`](Self::restore)
/// or [`set_language`](Self::set_language).
pub struct LanguageSession {
    current: Lang,
    table: &'static TranslationTable,
    storage: Rc<dyn LanguageStorage>,
}

impl std::fmt::Debug for LanguageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSession")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl LanguageSession {
    /// Open a session on the default language without touching storage.
    pub fn start(table: &'static TranslationTable, storage: Rc<dyn LanguageStorage>) -> Self {
        Self {
            current: Lang::DEFAULT,
            table,
            storage,
        }
    }

    /// [`start`](Self::start) followed by [`restore`](Self::restore).
    pub fn initialize(table: &'static TranslationTable, storage: Rc<dyn LanguageStorage>) -> Self {
        let mut session = Self::start(table, storage);
        session.restore();
        session
    }

    /// Adopt the persisted language, if storage holds a supported one.
    ///
    /// Empty slots, unknown codes and read failures all keep the current
    /// language. Returns the language that was restored.
    pub fn restore(&mut self) -> Option<Lang> {
        let stored = match self.storage.load() {
            Ok(stored) => stored?,
            Err(err) => {
                debug!("i18n.restore: storage read failed: {err}");
                return None;
            }
        };

        match Lang::from_code(&stored) {
            Some(lang) => {
                self.current = lang;
                Some(lang)
            }
            None => {
                debug!("i18n.restore: ignoring unsupported value len={}", stored.len());
                None
            }
        }
    }

    pub fn language(&self) -> Lang {
        self.current
    }

    /// Switch language and persist the choice.
    ///
    /// The in-memory switch always happens; a failed write is logged and
    /// otherwise ignored.
    pub fn set_language(&mut self, lang: Lang) {
        self.current = lang;
        if let Err(err) = self.storage.save(lang.code()) {
            warn!("i18n.set_language: could not persist {lang}: {err}");
        }
    }

    pub fn translate(&self, key: &str) -> String {
        self.table.resolve(self.current, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::table::Entries;
    use crate::i18n::MemoryStorage;
    use std::sync::OnceLock;

    const EN: Entries = &[("nav.home", "Home")];
    const TA: Entries = &[("nav.home", "முகப்பு")];

    fn table() -> &'static TranslationTable {
        static TABLE: OnceLock<TranslationTable> = OnceLock::new();
        TABLE.get_or_init(|| TranslationTable::from_entries([(Lang::En, EN), (Lang::Ta, TA)]))
    }

    fn session_with(storage: &Rc<MemoryStorage>) -> LanguageSession {
        LanguageSession::initialize(table(), storage.clone())
    }

    #[test]
    fn empty_storage_yields_default() {
        let storage = Rc::new(MemoryStorage::default());
        let session = session_with(&storage);
        assert_eq!(session.language(), Lang::DEFAULT);
    }

    #[test]
    fn unsupported_persisted_value_yields_default() {
        for bad in ["fr", "", "TA", "en-GB", "🙏"] {
            let storage = Rc::new(MemoryStorage::with_value(bad));
            assert_eq!(session_with(&storage).language(), Lang::DEFAULT, "{bad:?}");
        }
    }

    #[test]
    fn unreadable_storage_yields_default() {
        let storage = Rc::new(MemoryStorage::with_value("ta"));
        storage.set_fail_loads(true);
        assert_eq!(session_with(&storage).language(), Lang::DEFAULT);
    }

    #[test]
    fn start_does_not_read_storage() {
        let storage = Rc::new(MemoryStorage::with_value("ta"));
        let mut session = LanguageSession::start(table(), storage.clone());
        assert_eq!(session.language(), Lang::En);
        assert_eq!(session.restore(), Some(Lang::Ta));
        assert_eq!(session.language(), Lang::Ta);
    }

    #[test]
    fn set_then_read_round_trips() {
        let storage = Rc::new(MemoryStorage::default());
        let mut session = session_with(&storage);
        for lang in Lang::ALL {
            session.set_language(lang);
            assert_eq!(session.language(), lang);
            assert_eq!(storage.value().as_deref(), Some(lang.code()));
        }
    }

    #[test]
    fn choice_survives_into_a_new_session() {
        let storage = Rc::new(MemoryStorage::default());
        for lang in Lang::ALL {
            session_with(&storage).set_language(lang);
            assert_eq!(session_with(&storage).language(), lang);
        }
    }

    #[test]
    fn setting_twice_matches_setting_once() {
        let once_storage = Rc::new(MemoryStorage::default());
        let mut once = session_with(&once_storage);
        once.set_language(Lang::Ta);

        let twice_storage = Rc::new(MemoryStorage::default());
        let mut twice = session_with(&twice_storage);
        twice.set_language(Lang::Ta);
        twice.set_language(Lang::Ta);

        assert_eq!(once.language(), twice.language());
        assert_eq!(once_storage.value(), twice_storage.value());
        assert_eq!(once.translate("nav.home"), twice.translate("nav.home"));
    }

    #[test]
    fn failed_write_still_switches_language() {
        let storage = Rc::new(MemoryStorage::default());
        storage.set_fail_saves(true);
        let mut session = session_with(&storage);
        session.set_language(Lang::Ta);
        assert_eq!(session.language(), Lang::Ta);
        assert_eq!(storage.value(), None);
    }

    #[test]
    fn translate_follows_active_language() {
        let storage = Rc::new(MemoryStorage::default());
        let mut session = session_with(&storage);
        assert_eq!(session.translate("nav.home"), "Home");
        session.set_language(Lang::Ta);
        assert_eq!(session.translate("nav.home"), "முகப்பு");
        assert_eq!(session.translate("nav.missing"), "nav.missing");
    }
}
