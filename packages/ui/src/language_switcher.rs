use crate::Lang;
use dioxus::prelude::*;

/// One button per supported language, labelled in that language.
#[component]
pub fn LanguageSwitcher() -> Element {
    let i18n = crate::use_i18n();
    let current = i18n.lang();
    let label = i18n.t("lang.label");

    rsx! {
        div { class: "lang_switcher", role: "group", "aria-label": "{label}",
            for lang in Lang::ALL {
                button {
                    key: "{lang}",
                    class: if lang == current { "lang_btn active" } else { "lang_btn" },
                    lang: lang.code(),
                    "aria-pressed": if lang == current { "true" } else { "false" },
                    onclick: move |_| i18n.set_lang(lang),
                    {lang.native_name()}
                }
            }
        }
    }
}
