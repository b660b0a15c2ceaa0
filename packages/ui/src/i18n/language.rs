/// Supported UI languages.
///
/// The set is closed: a `Lang` value is always one of these variants, so
/// code holding one never needs to re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Ta,
}

impl Lang {
    /// Language used until a persisted choice is restored.
    pub const DEFAULT: Lang = Lang::En;

    /// Every supported language, in switcher order.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ta];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ta => "ta",
        }
    }

    /// Parse a persisted language code.
    ///
    /// Only the exact codes written by [`Lang::code`] are accepted; anything
    /// else (regional variants, stray whitespace, other languages) is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Lang::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language written in that language, for the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ta => "தமிழ்",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn from_code_rejects_unknown_and_near_misses() {
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code(" ta"), None);
        assert_eq!(Lang::from_code("en-US"), None);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Lang::default(), Lang::DEFAULT);
        assert_eq!(Lang::DEFAULT, Lang::En);
    }

    #[test]
    fn native_names() {
        assert_eq!(Lang::En.native_name(), "English");
        assert_eq!(Lang::Ta.native_name(), "தமிழ்");
        assert_eq!(Lang::Ta.to_string(), "ta");
    }
}
