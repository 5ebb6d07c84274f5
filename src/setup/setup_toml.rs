// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG
// =====================================================

use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

const CONFIG_DIR: &str = ".pahtia";
const CONFIG_FILE: &str = "pahtia.toml";

const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG takes precedence)
log_level = "info"

[language]
# Used on first visit and whenever a requested language is unknown
fallback = "en"
# The only dictionary key rendered as markup; every other key is plain text
rich_content_key = "aboutPara1"
selectors = ["lang-selector", "lang-selector-mobile"]

[storage]
# Relative paths are resolved next to this file
path = "preferences.toml"
key = "pahtia-language"

[download]
# {lang} is replaced by the active language code
url_template = "/downloads/pahtia-labs-{lang}.pdf"
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path.parent().ok_or_else(|| {
        AppError::Validation("Could not determine program directory".to_string())
    })?;

    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Config directory created: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Config file created: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
            paths.push(base_dir.join("config").join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let defaults = Config::default();

        assert_eq!(config.log_level, defaults.log_level);
        assert_eq!(config.language.fallback, defaults.language.fallback);
        assert_eq!(config.language.selectors, defaults.language.selectors);
        assert_eq!(config.storage.key, defaults.storage.key);
        assert_eq!(config.download.url_template, defaults.download.url_template);
    }

    #[test]
    fn config_paths_prefer_dot_directory() {
        let paths = get_config_paths();
        assert!(paths[0].ends_with(".pahtia/pahtia.toml"));
    }
}
