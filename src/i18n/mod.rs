// src/i18n/mod.rs
pub mod error;
pub mod keys;
pub mod langs;
pub mod types;

pub use error::TranslationError;
pub use keys::camel_to_kebab;
pub use types::{Dictionary, LanguageCode, TranslationTable};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Loads the dictionaries compiled into the binary.
pub fn load_embedded(fallback: &str) -> Result<TranslationTable, TranslationError> {
    let documents = langs::load_all()?;
    let table = TranslationTable::from_json_map(fallback, documents)?;

    log::debug!(
        "Loaded {} embedded language(s), fallback '{}'",
        table.languages().count(),
        table.fallback()
    );
    Ok(table)
}
