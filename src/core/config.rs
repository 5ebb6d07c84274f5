// src/core/config.rs
use crate::core::constants::{
    DESKTOP_SELECTOR_ID, DOWNLOAD_URL_TEMPLATE, LANG_PLACEHOLDER, MOBILE_SELECTOR_ID,
    PREFERENCE_KEY, RICH_CONTENT_KEY,
};
use crate::core::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: Option<GeneralConfig>,
    #[serde(default)]
    language: Option<LanguageConfigToml>,
    #[serde(default)]
    storage: Option<StorageConfigToml>,
    #[serde(default)]
    download: Option<DownloadConfigToml>,
}

#[derive(Debug, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct LanguageConfigToml {
    #[serde(default = "default_fallback")]
    fallback: String,
    #[serde(default = "default_rich_content_key")]
    rich_content_key: String,
    #[serde(default = "default_selectors")]
    selectors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StorageConfigToml {
    #[serde(default = "default_storage_path")]
    path: String,
    #[serde(default = "default_storage_key")]
    key: String,
}

#[derive(Debug, Deserialize)]
struct DownloadConfigToml {
    #[serde(default)]
    url_template: Option<String>,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_fallback() -> String {
    crate::i18n::DEFAULT_LANGUAGE.into()
}
fn default_rich_content_key() -> String {
    RICH_CONTENT_KEY.into()
}
fn default_selectors() -> Vec<String> {
    vec![DESKTOP_SELECTOR_ID.into(), MOBILE_SELECTOR_ID.into()]
}
fn default_storage_path() -> String {
    "preferences.toml".into()
}
fn default_storage_key() -> String {
    PREFERENCE_KEY.into()
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub language: LanguageSettings,
    pub storage: StorageSettings,
    pub download: DownloadSettings,
}

#[derive(Debug, Clone)]
pub struct LanguageSettings {
    pub fallback: String,
    pub rich_content_key: String,
    pub selectors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub path: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct DownloadSettings {
    pub url_template: Option<String>,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            rich_content_key: default_rich_content_key(),
            selectors: default_selectors(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            url_template: Some(DOWNLOAD_URL_TEMPLATE.into()),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        // Try existing configs
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        Self::log_startup(&config);
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        // Create new config
        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?;

        log::info!("New config: {}", path.display());
        Self::log_startup(&config);
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;

        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    /// Parses a config document without touching the file system.
    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(general) = file.general {
            config.log_level = Self::valid_log_level(&general.log_level);
        }

        if let Some(language) = file.language {
            let fallback = language.fallback.trim().to_lowercase();
            if !fallback.is_empty() {
                config.language.fallback = LanguageCode::parse(&fallback)?.to_string();
            }
            if !language.rich_content_key.trim().is_empty() {
                config.language.rich_content_key = language.rich_content_key;
            }
            config.language.selectors = language
                .selectors
                .into_iter()
                .filter(|id| !id.trim().is_empty())
                .collect();
        }

        if let Some(storage) = file.storage {
            if !storage.path.trim().is_empty() {
                config.storage.path = storage.path;
            }
            if !storage.key.trim().is_empty() {
                config.storage.key = storage.key;
            }
        }

        if let Some(download) = file.download {
            config.download.url_template = download
                .url_template
                .filter(|template| !template.trim().is_empty());

            if let Some(template) = &config.download.url_template {
                if !template.contains(LANG_PLACEHOLDER) {
                    log::warn!(
                        "Download template '{}' has no {} placeholder",
                        template,
                        LANG_PLACEHOLDER
                    );
                }
            }
        }

        Ok(config)
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// Location of the preference file. Relative paths are resolved against
    /// the directory holding the config file.
    pub fn storage_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.storage.path);
        if path.is_absolute() {
            return path;
        }

        self.config_path
            .as_ref()
            .and_then(|p| Path::new(p).parent().map(|dir| dir.join(&path)))
            .unwrap_or(path)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn valid_log_level(level: &str) -> String {
        let level = level.trim().to_lowercase();
        match level.as_str() {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => level,
            _ => {
                log::warn!("Unknown log level '{}', using info", level);
                default_log_level()
            }
        }
    }

    fn log_startup(config: &Config) {
        log::info!(
            "{} v{}",
            crate::core::constants::APP_TITLE,
            crate::core::constants::VERSION
        );
        log::info!(
            "Language: fallback '{}', selectors [{}], preference key '{}'",
            config.language.fallback,
            config.language.selectors.join(", "),
            config.storage.key
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            language: LanguageSettings::default(),
            storage: StorageSettings::default(),
            download: DownloadSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.language.fallback, "en");
        assert_eq!(config.language.rich_content_key, "aboutPara1");
        assert_eq!(
            config.language.selectors,
            vec!["lang-selector", "lang-selector-mobile"]
        );
        assert_eq!(config.storage.key, "pahtia-language");
        assert_eq!(
            config.download.url_template.as_deref(),
            Some("/downloads/pahtia-labs-{lang}.pdf")
        );
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::parse(
            r#"
[general]
log_level = "DEBUG"

[language]
fallback = " FR "
selectors = ["picker", ""]

[storage]
path = "/tmp/prefs.toml"
key = "site-lang"

[download]
url_template = "/files/{lang}.zip"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.language.fallback, "fr");
        assert_eq!(config.language.selectors, vec!["picker"]);
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/prefs.toml"));
        assert_eq!(config.storage.key, "site-lang");
        assert_eq!(
            config.download.url_template.as_deref(),
            Some("/files/{lang}.zip")
        );
    }

    #[test]
    fn invalid_values_are_corrected() {
        let config = Config::parse(
            r#"
[general]
log_level = "loud"

[language]
fallback = ""

[download]
url_template = ""
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.language.fallback, "en");
        assert_eq!(config.download.url_template, None);
    }

    #[test]
    fn malformed_toml_is_a_validation_error() {
        assert!(matches!(
            Config::parse("[general"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn malformed_fallback_is_an_invalid_language() {
        let err = Config::parse("[language]\nfallback = \"en us\"\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::Translation(TranslationError::InvalidLanguage(code)) if code == "en us"
        ));
    }

    #[tokio::test]
    async fn from_file_records_path_and_resolves_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pahtia.toml");
        tokio::fs::write(&path, "[language]\nfallback = \"es\"\n")
            .await
            .unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.language.fallback, "es");
        assert_eq!(config.storage_path(), dir.path().join("preferences.toml"));
        assert_eq!(
            config.config_path().map(str::to_string),
            Some(path.to_string_lossy().into_owned())
        );
    }
}
