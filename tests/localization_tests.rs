// =====================================================
// FILE: tests/localization_tests.rs - SYNCHRONIZER PROPERTIES
// =====================================================

use pahtia_site::core::constants::PREFERENCE_KEY;
use pahtia_site::i18n::{camel_to_kebab, LanguageCode, TranslationTable};
use pahtia_site::localization::{
    Content, LocalizationSynchronizer, MemoryStore, Page, PreferenceStore, RenderTarget,
};
use pahtia_site::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn greeting_table() -> Arc<TranslationTable> {
    let mut documents = HashMap::new();
    documents.insert("en".to_string(), r#"{"greeting":"Hello"}"#.to_string());
    documents.insert("fr".to_string(), r#"{"greeting":"Bonjour"}"#.to_string());
    Arc::new(TranslationTable::from_json_map("en", documents).unwrap())
}

fn site_table() -> Arc<TranslationTable> {
    Arc::new(pahtia_site::i18n::load_embedded("en").unwrap())
}

/// Store whose contents stay readable after being boxed into the
/// synchronizer.
#[derive(Clone, Default)]
struct SharedStore(Arc<Mutex<HashMap<String, String>>>);

impl SharedStore {
    fn get(&self) -> Option<String> {
        self.0.lock().unwrap().get(PREFERENCE_KEY).cloned()
    }
}

impl PreferenceStore for SharedStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.lock().unwrap().insert(key.into(), value.into());
        Ok(())
    }
}

fn site_page(table: &TranslationTable) -> Page {
    Page::from_dictionary(table.fallback_dictionary())
        .with_selector("lang-selector")
        .with_selector("lang-selector-mobile")
        .with_download_link()
}

#[test]
fn greeting_scenario() {
    let store = SharedStore::default();
    let mut page = Page::new().with_element("greeting");
    let mut sync = LocalizationSynchronizer::new(greeting_table(), Box::new(store.clone()));

    sync.initialize(&mut page);
    assert_eq!(page.text("greeting"), Some("Hello"));
    assert_eq!(store.get(), None);

    sync.set_language(&mut page, "fr");
    assert_eq!(page.text("greeting"), Some("Bonjour"));
    assert_eq!(store.get().as_deref(), Some("fr"));

    sync.set_language(&mut page, "de");
    assert_eq!(page.text("greeting"), Some("Hello"));
    assert_eq!(store.get().as_deref(), Some("en"));
}

#[test]
fn every_language_fills_every_matching_element() {
    let table = site_table();
    let mut page = site_page(&table);
    let mut sync = LocalizationSynchronizer::new(table.clone(), Box::new(MemoryStore::new()));
    sync.initialize(&mut page);

    for lang in table.languages() {
        sync.set_language(&mut page, lang.as_str());

        let dictionary = table.dictionary(lang).unwrap();
        for (key, value) in dictionary.iter() {
            assert_eq!(
                page.text(&camel_to_kebab(key)),
                Some(value),
                "key '{}' in '{}'",
                key,
                lang
            );
        }
    }
}

#[test]
fn unknown_code_behaves_like_fallback() {
    let table = site_table();

    let mut via_unknown = site_page(&table);
    let mut sync = LocalizationSynchronizer::new(table.clone(), Box::new(MemoryStore::new()));
    sync.initialize(&mut via_unknown);
    sync.set_language(&mut via_unknown, "fr");
    let resolved = sync.set_language(&mut via_unknown, "tlh");

    let mut via_fallback = site_page(&table);
    let mut reference = LocalizationSynchronizer::new(table.clone(), Box::new(MemoryStore::new()));
    reference.initialize(&mut via_fallback);
    reference.set_language(&mut via_fallback, "fr");
    reference.set_language(&mut via_fallback, "en");

    assert_eq!(resolved, LanguageCode::new("en"));
    assert_eq!(via_unknown.render_html(), via_fallback.render_html());
}

#[test]
fn codes_differing_in_case_or_whitespace_fall_back() {
    for requested in ["FR", " fr ", "Fr"] {
        let store = SharedStore::default();
        let mut page = Page::new().with_element("greeting");
        let mut sync = LocalizationSynchronizer::new(greeting_table(), Box::new(store.clone()));
        sync.initialize(&mut page);

        let resolved = sync.set_language(&mut page, requested);

        assert_eq!(resolved.as_str(), "en", "requested {:?}", requested);
        assert_eq!(page.text("greeting"), Some("Hello"));
        assert_eq!(store.get().as_deref(), Some("en"));
    }
}

#[test]
fn synchronization_is_idempotent() {
    let table = site_table();
    let mut page = site_page(&table);
    let mut sync = LocalizationSynchronizer::new(table, Box::new(MemoryStore::new()));
    sync.initialize(&mut page);
    sync.set_language(&mut page, "es");

    let first = sync.synchronize(&mut page);
    let html = page.render_html();
    let second = sync.synchronize(&mut page);

    assert_eq!(first, second);
    assert_eq!(page.render_html(), html);
}

#[test]
fn preference_round_trip() {
    let table = site_table();
    let store = SharedStore::default();
    let mut page = site_page(&table);
    let mut sync = LocalizationSynchronizer::new(table.clone(), Box::new(store.clone()));
    sync.initialize(&mut page);

    for lang in table.languages() {
        sync.set_language(&mut page, lang.as_str());
        assert_eq!(store.get().as_deref(), Some(lang.as_str()));
    }

    sync.set_language(&mut page, "zz");
    assert_eq!(store.get().as_deref(), Some("en"));

    // next session starts where the last one left off
    sync.set_language(&mut page, "fr");
    let mut next_page = site_page(&table);
    let mut next = LocalizationSynchronizer::new(table, Box::new(store));
    assert_eq!(next.initialize(&mut next_page).as_str(), "fr");
}

#[test]
fn desktop_and_mobile_selectors_stay_in_step() {
    let table = site_table();
    let mut page = site_page(&table);
    let mut sync = LocalizationSynchronizer::new(table, Box::new(MemoryStore::new()));
    sync.initialize(&mut page);

    sync.on_selector_changed(&mut page, "lang-selector-mobile", "fr");
    assert_eq!(page.selector_value("lang-selector").unwrap().as_str(), "fr");
    assert_eq!(page.selector_value("lang-selector-mobile").unwrap().as_str(), "fr");

    sync.on_selector_changed(&mut page, "lang-selector", "es");
    assert_eq!(page.selector_value("lang-selector").unwrap().as_str(), "es");
    assert_eq!(page.selector_value("lang-selector-mobile").unwrap().as_str(), "es");
}

#[test]
fn rich_paragraph_is_markup_and_download_link_follows_language() {
    let table = site_table();
    let mut page = site_page(&table);
    let mut sync = LocalizationSynchronizer::new(table, Box::new(MemoryStore::new()));
    sync.initialize(&mut page);
    sync.set_language(&mut page, "fr");

    assert!(page.content("about-para1").unwrap().is_markup());
    assert!(!page.content("about-para2").unwrap().is_markup());
    assert_eq!(page.download_href(), Some("/downloads/pahtia-labs-fr.pdf"));
    assert!(page
        .render_html()
        .contains("<strong>studio de recherche indépendant</strong>"));
}

#[test]
fn minimal_target_only_needs_set_content() {
    #[derive(Default)]
    struct Titles(Vec<(String, String)>);

    impl RenderTarget for Titles {
        fn set_content(&mut self, id: &str, content: Content) -> bool {
            if id.ends_with("-title") {
                self.0.push((id.to_string(), content.as_str().to_string()));
                true
            } else {
                false
            }
        }
    }

    let mut target = Titles::default();
    let mut sync = LocalizationSynchronizer::new(site_table(), Box::new(MemoryStore::new()));
    sync.initialize(&mut target);

    assert!(sync.bound_selectors().is_empty());
    assert!(target
        .0
        .contains(&("hero-title".to_string(), "Pahtia Labs".to_string())));
}
