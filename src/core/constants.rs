pub const APP_TITLE: &str = "PAHTIA LABS";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PREFERENCE_KEY: &str = "pahtia-language";
pub const RICH_CONTENT_KEY: &str = "aboutPara1";

pub const DESKTOP_SELECTOR_ID: &str = "lang-selector";
pub const MOBILE_SELECTOR_ID: &str = "lang-selector-mobile";
pub const DOWNLOAD_LINK_ID: &str = "download-link";
pub const DOWNLOAD_URL_TEMPLATE: &str = "/downloads/pahtia-labs-{lang}.pdf";
pub const LANG_PLACEHOLDER: &str = "{lang}";

pub const SIG_EXIT: &str = "__EXIT__";
