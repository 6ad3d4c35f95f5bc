//! Languages and locales.
//!
//! Dialog files select their string table with `#ifdef`/`#elif` chains over
//! three fixed language macros. A locale is either one of those languages or
//! the master pseudo-locale shared by all of them.

use std::fmt;

/// The languages a dialog can carry string tables for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    English,
    German,
    French,
}

impl Language {
    /// Number of supported languages.
    pub const COUNT: usize = 3;

    /// All languages in their canonical order.
    pub const ALL: [Language; Language::COUNT] =
        [Language::English, Language::German, Language::French];

    /// The preprocessor macro that guards this language's string include.
    pub const fn macro_name(self) -> &'static str {
        match self {
            Language::English => "LANGUAGE_ENGLISH",
            Language::German => "LANGUAGE_GERMAN",
            Language::French => "LANGUAGE_FRENCH",
        }
    }

    /// Map an `#ifdef`/`#elif` identifier to its language.
    pub fn from_macro(name: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.macro_name() == name)
    }

    /// Dense index in `0..Language::COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
        })
    }
}

/// The locale a dialog is loaded for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// The language-independent master dialog.
    #[default]
    Master,
    Language(Language),
}

impl Locale {
    /// The concrete language, if this is not the master locale.
    pub fn language(self) -> Option<Language> {
        match self {
            Locale::Master => None,
            Locale::Language(language) => Some(language),
        }
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        Locale::Language(language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Master => f.write_str("master"),
            Locale::Language(language) => fmt::Display::fmt(language, f),
        }
    }
}
