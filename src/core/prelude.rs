// src/core/prelude.rs

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

pub use crate::i18n::{LanguageCode, TranslationError};

#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}
