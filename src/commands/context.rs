// src/commands/context.rs
use crate::core::prelude::*;
use crate::i18n::TranslationTable;
use crate::localization::{
    FileStore, LocalizationSynchronizer, MemoryStore, Page, PreferenceStore, SyncOptions,
};
use std::sync::Arc;

/// Everything a command needs: the synchronizer and the page it drives.
#[derive(Debug)]
pub struct SiteContext {
    pub synchronizer: LocalizationSynchronizer,
    pub page: Page,
}

impl SiteContext {
    pub fn new(synchronizer: LocalizationSynchronizer, page: Page) -> Self {
        Self { synchronizer, page }
    }

    /// Builds the site page from config and runs the startup pass.
    ///
    /// With `ephemeral` the preference lives in memory only.
    pub fn bootstrap(config: &Config, table: Arc<TranslationTable>, ephemeral: bool) -> Self {
        let store: Box<dyn PreferenceStore> = if ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::new(config.storage_path()))
        };

        let mut page = Page::from_dictionary(table.fallback_dictionary())
            .with_options(table.languages())
            .with_download_link();
        for selector in &config.language.selectors {
            page.add_selector(selector);
        }

        let mut synchronizer = LocalizationSynchronizer::new(table, store)
            .with_options(SyncOptions::from_config(config));
        synchronizer.initialize(&mut page);

        Self::new(synchronizer, page)
    }

    pub fn set_language(&mut self, requested: &str) -> LanguageCode {
        self.synchronizer.set_language(&mut self.page, requested)
    }

    pub fn select(&mut self, selector_id: &str, value: &str) -> Option<LanguageCode> {
        self.synchronizer
            .on_selector_changed(&mut self.page, selector_id, value)
    }
}
