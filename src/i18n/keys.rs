// src/i18n/keys.rs
use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])").expect("static camel-case pattern is valid")
});

/// Maps a translation key to the id of the element that displays it,
/// e.g. `aboutParagraphOne` -> `about-paragraph-one`.
///
/// A hyphen is only inserted where a lowercase letter or digit is followed by
/// an uppercase letter, so runs like `CTA` collapse to `cta`.
pub fn camel_to_kebab(key: &str) -> String {
    CAMEL_BOUNDARY.replace_all(key, "$1-$2").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_camel_case_keys() {
        assert_eq!(camel_to_kebab("aboutParagraphOne"), "about-paragraph-one");
        assert_eq!(camel_to_kebab("heroTitle"), "hero-title");
        assert_eq!(camel_to_kebab("greeting"), "greeting");
    }

    #[test]
    fn digits_count_as_lowercase_boundary() {
        assert_eq!(camel_to_kebab("aboutPara1"), "about-para1");
        assert_eq!(camel_to_kebab("step2Title"), "step2-title");
    }

    #[test]
    fn uppercase_runs_are_not_split() {
        assert_eq!(camel_to_kebab("heroCTAButton"), "hero-ctabutton");
        assert_eq!(camel_to_kebab("FAQ"), "faq");
    }

    #[test]
    fn derivation_is_stable() {
        let first = camel_to_kebab("downloadButtonLabel");
        for _ in 0..5 {
            assert_eq!(camel_to_kebab("downloadButtonLabel"), first);
        }
    }
}
