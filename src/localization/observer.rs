// src/localization/observer.rs
use crate::core::error::AppError;
use crate::i18n::LanguageCode;
use crate::localization::synchronizer::SyncReport;
use std::sync::{Arc, Mutex};

/// Hooks for everything the synchronizer wants to report.
///
/// All methods default to no-ops.
pub trait LanguageObserver {
    /// `requested` was not in the table and `resolved` was used instead.
    fn fallback_substituted(&self, _requested: &str, _resolved: &LanguageCode) {}

    /// A stored preference could not be used at startup.
    fn preference_ignored(&self, _stored: Option<&str>, _error: Option<&AppError>) {}

    fn persist_failed(&self, _lang: &LanguageCode, _error: &AppError) {}

    fn language_changed(&self, _lang: &LanguageCode) {}

    fn synchronized(&self, _lang: &LanguageCode, _report: &SyncReport) {}
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LanguageObserver for LogObserver {
    fn fallback_substituted(&self, requested: &str, resolved: &LanguageCode) {
        log::warn!(
            "Language '{}' not found, defaulting to '{}'",
            requested,
            resolved
        );
    }

    fn preference_ignored(&self, stored: Option<&str>, error: Option<&AppError>) {
        match (stored, error) {
            (_, Some(e)) => log::warn!("Stored language preference unreadable: {}", e),
            (Some(lang), None) => log::info!("Stored language '{}' is not available", lang),
            (None, None) => log::debug!("No stored language preference"),
        }
    }

    fn persist_failed(&self, lang: &LanguageCode, error: &AppError) {
        log::error!("Failed to save language '{}': {}", lang, error);
    }

    fn language_changed(&self, lang: &LanguageCode) {
        log::info!("Language set to {}", lang.as_str().to_uppercase());
    }

    fn synchronized(&self, lang: &LanguageCode, report: &SyncReport) {
        log::debug!(
            "Synchronized '{}': {} applied, {} skipped",
            lang,
            report.applied,
            report.skipped
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    Fallback { requested: String, resolved: String },
    PreferenceIgnored { stored: Option<String> },
    PersistFailed { lang: String },
    Changed(String),
    Synchronized { lang: String, applied: usize },
}

/// Keeps every event in memory. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, event: ObservedEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl LanguageObserver for RecordingObserver {
    fn fallback_substituted(&self, requested: &str, resolved: &LanguageCode) {
        self.push(ObservedEvent::Fallback {
            requested: requested.into(),
            resolved: resolved.to_string(),
        });
    }

    fn preference_ignored(&self, stored: Option<&str>, _error: Option<&AppError>) {
        self.push(ObservedEvent::PreferenceIgnored {
            stored: stored.map(str::to_string),
        });
    }

    fn persist_failed(&self, lang: &LanguageCode, _error: &AppError) {
        self.push(ObservedEvent::PersistFailed {
            lang: lang.to_string(),
        });
    }

    fn language_changed(&self, lang: &LanguageCode) {
        self.push(ObservedEvent::Changed(lang.to_string()));
    }

    fn synchronized(&self, lang: &LanguageCode, report: &SyncReport) {
        self.push(ObservedEvent::Synchronized {
            lang: lang.to_string(),
            applied: report.applied,
        });
    }
}
