// src/i18n/langs/mod.rs
use crate::i18n::error::TranslationError;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Langs::iter()
        .filter_map(|f| f.as_ref().strip_suffix(".json").map(str::to_string))
        .collect();
    langs.sort();
    langs
}

pub fn get_language_file(lang: &str) -> Result<String, TranslationError> {
    let filename = format!("{}.json", lang.to_lowercase());
    let content = Langs::get(&filename)
        .ok_or_else(|| TranslationError::LoadError(format!("File not found: {}", filename)))?;

    std::str::from_utf8(content.data.as_ref())
        .map(str::to_string)
        .map_err(|e| TranslationError::LoadError(e.to_string()))
}

/// Every embedded language file, keyed by language code.
pub fn load_all() -> Result<HashMap<String, String>, TranslationError> {
    available_languages()
        .into_iter()
        .map(|lang| get_language_file(&lang).map(|content| (lang, content)))
        .collect()
}
