//! Per-language string tables.
//!
//! Each string file defines texts for one language. A `StringMap` keeps one
//! slot per language for every identifier, so the tables of all languages of
//! a dialog can be merged into a single map.

use rustc_hash::FxHashMap;

use crate::Language;

/// All texts defined for one identifier.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringEntry {
    pub id: String,
    texts: [Option<String>; Language::COUNT],
}

impl StringEntry {
    fn new(id: String) -> Self {
        StringEntry {
            id,
            texts: Default::default(),
        }
    }

    pub fn text(&self, language: Language) -> Option<&str> {
        self.texts[language.index()].as_deref()
    }

    /// Languages that define this identifier.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|language| self.texts[language.index()].is_some())
    }
}

/// Identifier → text per language, in first-definition order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringMap {
    entries: Vec<StringEntry>,
    index: FxHashMap<String, usize>,
}

impl StringMap {
    pub fn new() -> Self {
        StringMap::default()
    }

    /// Set the text of `id` for `language`, returning the text it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        language: Language,
        text: impl Into<String>,
    ) -> Option<String> {
        let id = id.into();
        let slot = match self.index.get(&id) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(id.clone(), slot);
                self.entries.push(StringEntry::new(id));
                slot
            }
        };
        self.entries[slot].texts[language.index()].replace(text.into())
    }

    pub fn get(&self, id: &str, language: Language) -> Option<&str> {
        self.entry(id).and_then(|entry| entry.text(language))
    }

    pub fn entry(&self, id: &str) -> Option<&StringEntry> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of identifiers with a text for `language`.
    pub fn count_for(&self, language: Language) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.text(language).is_some())
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StringEntry> {
        self.entries.iter()
    }

    /// Copy every text of `other` into this map; texts in `other` win.
    pub fn merge(&mut self, other: StringMap) {
        for entry in other.entries {
            let StringEntry { id, texts } = entry;
            for (language, text) in Language::ALL.into_iter().zip(texts) {
                if let Some(text) = text {
                    self.insert(id.clone(), language, text);
                }
            }
        }
    }
}
