//! UI localization: the static translation table and the per-session
//! language selection that every component reads through [`use_i18n`].

use std::rc::Rc;

use dioxus::prelude::*;

mod dictionary;
mod language;
mod session;
mod storage;
mod table;

pub use language::Lang;
pub use session::{I18nError, LanguageSession};
pub use storage::{platform_storage, LanguageStorage, MemoryStorage, StorageError, STORAGE_KEY};
pub use table::{CompletenessReport, Entries, TranslationTable};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;

/// Handle to the session's language, shared through the component tree.
///
/// Reading through the handle subscribes the calling component, so a
/// language switch re-renders everything that displayed translated text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct I18n {
    session: Signal<LanguageSession>,
}

impl I18n {
    pub fn lang(&self) -> Lang {
        self.session.read().language()
    }

    /// Switch the whole UI to `lang` and remember it for the next visit.
    pub fn set_lang(self, lang: Lang) {
        let mut session = self.session;
        session.write().set_language(lang);
    }

    pub fn t(&self, key: &str) -> String {
        self.session.read().translate(key)
    }
}

/// What a component finds when it looks for the language context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LanguageState {
    /// No `I18nProvider` above the caller.
    Uninitialized,
    Ready(I18n),
}

impl LanguageState {
    pub fn ready(self) -> Result<I18n, I18nError> {
        match self {
            LanguageState::Ready(i18n) => Ok(i18n),
            LanguageState::Uninitialized => Err(I18nError::Uninitialized),
        }
    }
}

/// Make every `I18nProvider` below the caller persist to `storage` instead
/// of [`platform_storage`].
pub fn use_language_storage_provider(storage: impl FnOnce() -> Rc<dyn LanguageStorage>) {
    use_context_provider(storage);
}

/// Owns the session's language state for everything rendered inside it.
///
/// The first render always uses [`Lang::DEFAULT`]; the persisted choice is
/// applied after mount so server and client produce the same initial HTML.
/// Storage comes from [`use_language_storage_provider`] when an ancestor set
/// one, otherwise from [`platform_storage`].
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let storage = try_use_context::<Rc<dyn LanguageStorage>>();
    let session = use_signal(move || {
        LanguageSession::start(
            TranslationTable::builtin(),
            storage.unwrap_or_else(platform_storage),
        )
    });
    use_context_provider(|| I18n { session });

    use_effect(move || {
        let mut session = session;
        if let Some(lang) = session.write().restore() {
            tracing::debug!("i18n: restored persisted language {lang}");
        };
    });

    rsx! { {children} }
}

pub fn use_language_state() -> LanguageState {
    match try_use_context::<I18n>() {
        Some(i18n) => LanguageState::Ready(i18n),
        None => LanguageState::Uninitialized,
    }
}

pub fn try_use_i18n() -> Result<I18n, I18nError> {
    use_language_state().ready()
}

/// The language context of the nearest `I18nProvider`.
///
/// # Panics
///
/// Panics when called from a component that is not inside an
/// `I18nProvider`.
pub fn use_i18n() -> I18n {
    match try_use_i18n() {
        Ok(i18n) => i18n,
        Err(err) => panic!("use_i18n: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static STORAGE: RefCell<Option<Rc<MemoryStorage>>> = const { RefCell::new(None) };
        static HANDLE: Cell<Option<I18n>> = const { Cell::new(None) };
        static RENDERS: RefCell<Vec<(Lang, String)>> = const { RefCell::new(Vec::new()) };
        static BARE_STATE: Cell<Option<LanguageState>> = const { Cell::new(None) };
        static BARE_ERROR: Cell<Option<I18nError>> = const { Cell::new(None) };
        static PAST_USE_I18N: Cell<bool> = const { Cell::new(false) };
    }

    fn renders() -> Vec<(Lang, String)> {
        RENDERS.with(|r| r.borrow().clone())
    }

    #[component]
    fn HomeLabel() -> Element {
        let i18n = use_i18n();
        let home = i18n.t("nav.home");
        HANDLE.with(|h| h.set(Some(i18n)));
        RENDERS.with(|r| r.borrow_mut().push((i18n.lang(), home.clone())));
        rsx! { "{home}" }
    }

    fn provided_app() -> Element {
        let storage = STORAGE.with(|s| s.borrow().clone()).unwrap_or_default();
        use_language_storage_provider(move || storage as Rc<dyn LanguageStorage>);
        rsx! {
            I18nProvider { HomeLabel {} }
        }
    }

    fn bare_app() -> Element {
        BARE_STATE.with(|s| s.set(Some(use_language_state())));
        BARE_ERROR.with(|e| e.set(try_use_i18n().err()));
        rsx! {}
    }

    #[component]
    fn UnprovidedLabel() -> Element {
        let i18n = use_i18n();
        PAST_USE_I18N.with(|p| p.set(true));
        rsx! { {i18n.t("nav.home")} }
    }

    fn unprovided_app() -> Element {
        rsx! {
            ErrorBoundary {
                handle_error: |_: ErrorContext| rsx! { "unavailable" },
                UnprovidedLabel {}
            }
        }
    }

    fn mount_with(storage: &Rc<MemoryStorage>) -> VirtualDom {
        STORAGE.with(|s| *s.borrow_mut() = Some(storage.clone()));
        let mut dom = VirtualDom::new(provided_app);
        dom.rebuild_in_place();
        dom
    }

    #[test]
    fn uninitialized_state_refuses_access() {
        assert_eq!(
            LanguageState::Uninitialized.ready(),
            Err(I18nError::Uninitialized)
        );
    }

    #[test]
    fn uninitialized_error_names_the_provider() {
        assert!(I18nError::Uninitialized
            .to_string()
            .contains("I18nProvider"));
    }

    #[test]
    fn consumer_without_provider_sees_uninitialized() {
        let mut dom = VirtualDom::new(bare_app);
        dom.rebuild_in_place();

        assert_eq!(
            BARE_STATE.with(Cell::get),
            Some(LanguageState::Uninitialized)
        );
        assert_eq!(BARE_ERROR.with(Cell::get), Some(I18nError::Uninitialized));
    }

    #[test]
    fn use_i18n_without_provider_does_not_return() {
        let mut dom = VirtualDom::new(unprovided_app);
        dom.rebuild_in_place();

        assert!(!PAST_USE_I18N.with(Cell::get));
    }

    #[test]
    fn first_render_uses_default_even_with_saved_choice() {
        let storage = Rc::new(MemoryStorage::with_value("ta"));
        let _dom = mount_with(&storage);

        assert_eq!(renders(), vec![(Lang::En, "Home".to_string())]);
    }

    #[test]
    fn saved_choice_is_restored_after_mount() {
        let storage = Rc::new(MemoryStorage::with_value("ta"));
        let mut dom = mount_with(&storage);
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(renders().last(), Some(&(Lang::Ta, "முகப்பு".to_string())));
    }

    #[test]
    fn unsupported_saved_value_keeps_default_after_mount() {
        let storage = Rc::new(MemoryStorage::with_value("fr"));
        let mut dom = mount_with(&storage);
        dom.render_immediate(&mut NoOpMutations);

        assert!(renders().iter().all(|(lang, _)| *lang == Lang::En));
    }

    #[test]
    fn set_lang_reaches_consumers_and_the_supplied_storage() {
        let storage = Rc::new(MemoryStorage::default());
        let mut dom = mount_with(&storage);
        dom.render_immediate(&mut NoOpMutations);

        let i18n = HANDLE.with(Cell::get).expect("consumer rendered");
        dom.in_runtime(|| i18n.set_lang(Lang::Ta));
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(renders().last(), Some(&(Lang::Ta, "முகப்பு".to_string())));
        assert_eq!(storage.value().as_deref(), Some("ta"));
    }

    #[test]
    fn choice_made_through_the_provider_survives_a_new_session() {
        let storage = Rc::new(MemoryStorage::default());
        {
            let mut dom = mount_with(&storage);
            dom.render_immediate(&mut NoOpMutations);
            let i18n = HANDLE.with(Cell::get).expect("consumer rendered");
            dom.in_runtime(|| i18n.set_lang(Lang::Ta));
        }

        RENDERS.with(|r| r.borrow_mut().clear());
        let mut dom = mount_with(&storage);
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(renders().first().map(|(lang, _)| *lang), Some(Lang::En));
        assert_eq!(renders().last().map(|(lang, _)| *lang), Some(Lang::Ta));
    }
}
