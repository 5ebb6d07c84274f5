// src/i18n/types.rs
use crate::i18n::error::TranslationError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Short locale tag used as the key into a [`TranslationTable`].
///
/// The code is kept exactly as given. `"FR"` and `"fr"` are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Accepts only non-empty tags made of ASCII letters, digits and `-`.
    pub fn parse(code: &str) -> Result<Self, TranslationError> {
        let valid = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');

        if valid {
            Ok(Self::new(code))
        } else {
            Err(TranslationError::InvalidLanguage(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Flat key/value translations for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Every dictionary the site ships, keyed by language.
///
/// The fallback language always has a dictionary; [`TranslationTable::new`]
/// refuses to build a table without one.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    fallback: LanguageCode,
    dictionaries: BTreeMap<LanguageCode, Dictionary>,
}

impl TranslationTable {
    pub fn new(
        fallback: LanguageCode,
        dictionaries: BTreeMap<LanguageCode, Dictionary>,
    ) -> Result<Self, TranslationError> {
        if !dictionaries.contains_key(&fallback) {
            return Err(TranslationError::MissingFallback(fallback.to_string()));
        }

        let table = Self {
            fallback,
            dictionaries,
        };

        for (lang, missing) in table.missing_keys() {
            log::warn!(
                "Dictionary '{}' is missing {} key(s): {}",
                lang,
                missing.len(),
                missing.join(", ")
            );
        }

        Ok(table)
    }

    /// Builds a table from raw JSON documents, one per language.
    pub fn from_json_map(
        fallback: &str,
        documents: HashMap<String, String>,
    ) -> Result<Self, TranslationError> {
        let mut dictionaries = BTreeMap::new();

        for (lang, content) in documents {
            let dictionary: Dictionary = serde_json::from_str(&content).map_err(|e| {
                TranslationError::LoadError(format!("{}.json: {}", lang, e))
            })?;
            dictionaries.insert(LanguageCode::new(&lang), dictionary);
        }

        Self::new(LanguageCode::new(fallback), dictionaries)
    }

    pub fn fallback(&self) -> &LanguageCode {
        &self.fallback
    }

    pub fn contains(&self, lang: &LanguageCode) -> bool {
        self.dictionaries.contains_key(lang)
    }

    pub fn dictionary(&self, lang: &LanguageCode) -> Option<&Dictionary> {
        self.dictionaries.get(lang)
    }

    pub fn fallback_dictionary(&self) -> &Dictionary {
        // checked in `new`
        &self.dictionaries[&self.fallback]
    }

    /// Resolves a requested code to one the table can serve.
    ///
    /// Returns the resolved code and whether the fallback was substituted.
    pub fn resolve(&self, requested: &str) -> (LanguageCode, bool) {
        let code = LanguageCode::new(requested);
        if self.contains(&code) {
            (code, false)
        } else {
            (self.fallback.clone(), true)
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.dictionaries.keys()
    }

    /// Keys present in the fallback dictionary but absent elsewhere.
    pub fn missing_keys(&self) -> Vec<(LanguageCode, Vec<String>)> {
        let reference = self.fallback_dictionary();

        self.dictionaries
            .iter()
            .filter(|(lang, _)| **lang != self.fallback)
            .filter_map(|(lang, dictionary)| {
                let missing: Vec<String> = reference
                    .keys()
                    .filter(|key| !dictionary.contains_key(key))
                    .map(str::to_string)
                    .collect();
                (!missing.is_empty()).then(|| (lang.clone(), missing))
            })
            .collect()
    }
}
