// src/localization/target.rs
use crate::i18n::LanguageCode;

/// Content written into a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Shown verbatim, never interpreted as markup.
    Text(String),
    /// Trusted markup from the static dictionaries.
    Markup(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(s) | Content::Markup(s) => s,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Content::Markup(_))
    }
}

/// The page the synchronizer writes into.
///
/// Only `set_content` is required; targets without language selectors or a
/// download link keep the default no-op implementations.
pub trait RenderTarget {
    /// Replaces the content of element `id`. Returns `false` if the page has
    /// no such element.
    fn set_content(&mut self, id: &str, content: Content) -> bool;

    /// Ids of the language selector controls currently on the page.
    fn selector_ids(&self) -> Vec<String> {
        Vec::new()
    }

    fn set_selector_value(&mut self, _id: &str, _lang: &LanguageCode) -> bool {
        false
    }

    fn set_link_target(&mut self, _id: &str, _url: &str) -> bool {
        false
    }
}
