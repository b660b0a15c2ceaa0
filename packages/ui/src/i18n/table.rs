use std::collections::HashMap;
use std::sync::OnceLock;

use super::{dictionary, Lang};

/// A flat `key -> text` dictionary as written in source.
pub type Entries = &'static [(&'static str, &'static str)];

/// Immutable mapping from language to its key/text dictionary.
///
/// Built once and only read afterwards. Lookups never fail: a key missing
/// from the active language's dictionary resolves to the key itself, which
/// keeps a half-translated page readable instead of broken.
#[derive(Debug, Default)]
pub struct TranslationTable {
    dictionaries: HashMap<Lang, HashMap<&'static str, &'static str>>,
}

static BUILTIN: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    pub fn from_entries(dictionaries: impl IntoIterator<Item = (Lang, Entries)>) -> Self {
        let dictionaries = dictionaries
            .into_iter()
            .map(|(lang, entries)| (lang, entries.iter().copied().collect()))
            .collect();
        Self { dictionaries }
    }

    /// The site's own dictionaries, shared by every session in the process.
    pub fn builtin() -> &'static TranslationTable {
        BUILTIN.get_or_init(|| {
            TranslationTable::from_entries([
                (Lang::En, dictionary::EN),
                (Lang::Ta, dictionary::TA),
            ])
        })
    }

    pub fn get(&self, lang: Lang, key: &str) -> Option<&'static str> {
        self.dictionaries
            .get(&lang)
            .and_then(|dict| dict.get(key))
            .copied()
    }

    /// Text for `key` in `lang`, or `key` unchanged when it has no entry.
    pub fn resolve(&self, lang: Lang, key: &str) -> String {
        self.get(lang, key).unwrap_or(key).to_string()
    }

    /// Compare every language against the English dictionary.
    ///
    /// Purely a report: `resolve` keeps falling back to the key no matter
    /// what this finds.
    pub fn completeness(&self) -> CompletenessReport {
        let reference = self.dictionaries.get(&Lang::DEFAULT);
        let mut report = CompletenessReport::default();

        for lang in Lang::ALL.into_iter().filter(|l| *l != Lang::DEFAULT) {
            let dict = self.dictionaries.get(&lang);

            if let Some(reference) = reference {
                for key in reference.keys() {
                    if !dict.is_some_and(|d| d.contains_key(key)) {
                        report.missing.push((lang, *key));
                    }
                }
            }
            if let Some(dict) = dict {
                for key in dict.keys() {
                    if !reference.is_some_and(|r| r.contains_key(key)) {
                        report.extra.push((lang, *key));
                    }
                }
            }
        }

        report.missing.sort_by_key(|(lang, key)| (lang.code(), *key));
        report.extra.sort_by_key(|(lang, key)| (lang.code(), *key));
        report
    }
}

/// Keys that break the "same keys in every language" rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletenessReport {
    /// Present in English, absent in the listed language.
    pub missing: Vec<(Lang, &'static str)>,
    /// Present in the listed language, absent in English.
    pub extra: Vec<(Lang, &'static str)>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}
