// src/i18n/error.rs

#[derive(Debug)]
pub enum TranslationError {
    InvalidLanguage(String),
    LoadError(String),
    MissingFallback(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLanguage(lang) => write!(f, "Invalid language: {}", lang),
            Self::LoadError(msg) => write!(f, "Load error: {}", msg),
            Self::MissingFallback(lang) => {
                write!(f, "No dictionary for fallback language '{}'", lang)
            }
        }
    }
}

impl std::error::Error for TranslationError {}
