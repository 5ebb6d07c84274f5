// src/localization/synchronizer.rs
use crate::core::config::Config;
use crate::core::constants::{
    DOWNLOAD_LINK_ID, DOWNLOAD_URL_TEMPLATE, LANG_PLACEHOLDER, PREFERENCE_KEY, RICH_CONTENT_KEY,
};
use crate::i18n::{camel_to_kebab, Dictionary, LanguageCode, TranslationTable};
use crate::localization::observer::{LanguageObserver, LogObserver};
use crate::localization::storage::PreferenceStore;
use crate::localization::target::{Content, RenderTarget};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub preference_key: String,
    pub rich_content_key: String,
    pub download_link_id: String,
    pub download_url_template: Option<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            preference_key: PREFERENCE_KEY.into(),
            rich_content_key: RICH_CONTENT_KEY.into(),
            download_link_id: DOWNLOAD_LINK_ID.into(),
            download_url_template: Some(DOWNLOAD_URL_TEMPLATE.into()),
        }
    }
}

impl SyncOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            preference_key: config.storage.key.clone(),
            rich_content_key: config.language.rich_content_key.clone(),
            download_link_id: DOWNLOAD_LINK_ID.into(),
            download_url_template: config.download.url_template.clone(),
        }
    }
}

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Keys written to an element.
    pub applied: usize,
    /// Keys with no matching element on the page.
    pub skipped: usize,
    pub link_updated: bool,
}

/// Holds the active language and keeps a page in step with it.
///
/// One instance is built at startup and handed to whatever handles
/// selector events.
pub struct LocalizationSynchronizer {
    table: Arc<TranslationTable>,
    current: LanguageCode,
    store: Box<dyn PreferenceStore>,
    observer: Box<dyn LanguageObserver>,
    options: SyncOptions,
    bound_selectors: Vec<String>,
}

impl LocalizationSynchronizer {
    pub fn new(table: Arc<TranslationTable>, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            current: table.fallback().clone(),
            table,
            store,
            observer: Box::new(LogObserver),
            options: SyncOptions::default(),
            bound_selectors: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn LanguageObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Restores the stored language (or the fallback), renders it and binds
    /// every selector present on the page.
    pub fn initialize(&mut self, target: &mut dyn RenderTarget) -> &LanguageCode {
        self.current = self.load_preference();

        self.synchronize(target);
        self.refresh_selectors(target);

        self.bound_selectors = target.selector_ids();
        log::debug!(
            "Bound {} language selector(s): [{}]",
            self.bound_selectors.len(),
            self.bound_selectors.join(", ")
        );

        &self.current
    }

    /// Switches to `requested`, or to the fallback if the table has no such
    /// language. Returns the code actually applied.
    pub fn set_language(&mut self, target: &mut dyn RenderTarget, requested: &str) -> LanguageCode {
        let (resolved, substituted) = self.table.resolve(requested);
        if substituted {
            self.observer.fallback_substituted(requested, &resolved);
        }

        self.current = resolved;

        if let Err(e) = self
            .store
            .store(&self.options.preference_key, self.current.as_str())
        {
            self.observer.persist_failed(&self.current, &e);
        }

        self.observer.language_changed(&self.current);
        self.synchronize(target);
        self.refresh_selectors(target);

        self.current.clone()
    }

    /// Handles a "value changed" event from a selector control.
    ///
    /// Selectors that were not on the page at [`initialize`](Self::initialize)
    /// have no listener and are ignored.
    pub fn on_selector_changed(
        &mut self,
        target: &mut dyn RenderTarget,
        selector_id: &str,
        value: &str,
    ) -> Option<LanguageCode> {
        if !self.bound_selectors.iter().any(|id| id == selector_id) {
            log::debug!("Ignoring change from unbound selector '{}'", selector_id);
            return None;
        }
        Some(self.set_language(target, value))
    }

    /// Writes every entry of the active dictionary into its element.
    pub fn synchronize(&self, target: &mut dyn RenderTarget) -> SyncReport {
        let mut report = SyncReport::default();

        for (key, value) in self.translations().iter() {
            let id = camel_to_kebab(key);
            let content = if key == self.options.rich_content_key {
                Content::Markup(value.to_string())
            } else {
                Content::Text(value.to_string())
            };

            if target.set_content(&id, content) {
                report.applied += 1;
            } else {
                report.skipped += 1;
            }
        }

        if let Some(url) = self.download_url() {
            report.link_updated = target.set_link_target(&self.options.download_link_id, &url);
        }

        self.observer.synchronized(&self.current, &report);
        report
    }

    /// Shows the active language in every selector on the page.
    pub fn refresh_selectors(&self, target: &mut dyn RenderTarget) -> usize {
        let ids = target.selector_ids();
        ids.iter()
            .filter(|id| target.set_selector_value(id.as_str(), &self.current))
            .count()
    }

    pub fn current_language(&self) -> &LanguageCode {
        &self.current
    }

    pub fn fallback_language(&self) -> &LanguageCode {
        self.table.fallback()
    }

    pub fn available_languages(&self) -> Vec<&LanguageCode> {
        self.table.languages().collect()
    }

    /// Dictionary of the active language.
    pub fn translations(&self) -> &Dictionary {
        self.table
            .dictionary(&self.current)
            .unwrap_or_else(|| self.table.fallback_dictionary())
    }

    /// Looks `key` up in the active dictionary, then in the fallback one.
    pub fn translate(&self, key: &str) -> Option<&str> {
        self.translations()
            .get(key)
            .or_else(|| self.table.fallback_dictionary().get(key))
    }

    pub fn bound_selectors(&self) -> &[String] {
        &self.bound_selectors
    }

    pub fn download_url(&self) -> Option<String> {
        self.options
            .download_url_template
            .as_ref()
            .map(|template| template.replace(LANG_PLACEHOLDER, self.current.as_str()))
    }

    fn load_preference(&self) -> LanguageCode {
        match self.store.load(&self.options.preference_key) {
            Ok(Some(stored)) => {
                let code = LanguageCode::new(&stored);
                if self.table.contains(&code) {
                    log::debug!("Restored language preference '{}'", code);
                    return code;
                }
                self.observer.preference_ignored(Some(&stored), None);
            }
            Ok(None) => self.observer.preference_ignored(None, None),
            Err(e) => self.observer.preference_ignored(None, Some(&e)),
        }
        self.table.fallback().clone()
    }
}

impl std::fmt::Debug for LocalizationSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationSynchronizer")
            .field("current", &self.current)
            .field("options", &self.options)
            .field("bound_selectors", &self.bound_selectors)
            .finish_non_exhaustive()
    }
}
