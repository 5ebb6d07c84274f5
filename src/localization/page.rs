// src/localization/page.rs
use crate::core::constants::DOWNLOAD_LINK_ID;
use crate::core::helpers::escape_html;
use crate::i18n::{camel_to_kebab, Dictionary, LanguageCode};
use crate::localization::target::{Content, RenderTarget};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// In-memory model of the host page: localizable elements, language
/// selectors and an optional download link.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: BTreeMap<String, Content>,
    selectors: BTreeMap<String, Option<LanguageCode>>,
    options: Vec<LanguageCode>,
    download_href: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with one element per dictionary key, as the site template
    /// declares them.
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let mut page = Self::new();
        for key in dictionary.keys() {
            page.add_element(&camel_to_kebab(key));
        }
        page
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.add_element(id);
        self
    }

    pub fn with_selector(mut self, id: &str) -> Self {
        self.add_selector(id);
        self
    }

    pub fn with_download_link(mut self) -> Self {
        self.download_href = Some("#".into());
        self
    }

    pub fn with_options<'a, I>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = &'a LanguageCode>,
    {
        self.options = langs.into_iter().cloned().collect();
        self
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements
            .entry(id.into())
            .or_insert_with(|| Content::Text(String::new()));
    }

    pub fn add_selector(&mut self, id: &str) {
        self.selectors.entry(id.into()).or_insert(None);
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn content(&self, id: &str) -> Option<&Content> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.content(id).map(Content::as_str)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn selector_value(&self, id: &str) -> Option<&LanguageCode> {
        self.selectors.get(id).and_then(Option::as_ref)
    }

    pub fn download_href(&self) -> Option<&str> {
        self.download_href.as_deref()
    }

    /// Serializes the page body. Text content is escaped, markup is written
    /// as-is.
    pub fn render_html(&self) -> String {
        let mut html = String::new();

        for (id, selected) in &self.selectors {
            let _ = writeln!(html, "<select id=\"{}\">", escape_html(id));
            for lang in &self.options {
                let marker = if selected.as_ref() == Some(lang) {
                    " selected"
                } else {
                    ""
                };
                let _ = writeln!(
                    html,
                    "  <option value=\"{0}\"{1}>{2}</option>",
                    escape_html(lang.as_str()),
                    marker,
                    escape_html(&lang.as_str().to_uppercase())
                );
            }
            html.push_str("</select>\n");
        }

        for (id, content) in &self.elements {
            let body = match content {
                Content::Text(text) => escape_html(text),
                Content::Markup(markup) => markup.clone(),
            };
            let _ = writeln!(html, "<div id=\"{}\">{}</div>", escape_html(id), body);
        }

        if let Some(href) = &self.download_href {
            let _ = writeln!(
                html,
                "<a id=\"{}\" href=\"{}\" download></a>",
                DOWNLOAD_LINK_ID,
                escape_html(href)
            );
        }

        html
    }
}

impl RenderTarget for Page {
    fn set_content(&mut self, id: &str, content: Content) -> bool {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = content;
                true
            }
            None => false,
        }
    }

    fn selector_ids(&self) -> Vec<String> {
        self.selectors.keys().cloned().collect()
    }

    fn set_selector_value(&mut self, id: &str, lang: &LanguageCode) -> bool {
        match self.selectors.get_mut(id) {
            Some(value) => {
                *value = Some(lang.clone());
                true
            }
            None => false,
        }
    }

    fn set_link_target(&mut self, id: &str, url: &str) -> bool {
        if id != DOWNLOAD_LINK_ID {
            return false;
        }
        match self.download_href.as_mut() {
            Some(href) => {
                *href = url.into();
                true
            }
            None => false,
        }
    }
}
