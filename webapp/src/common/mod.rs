use std::sync::LazyLock;

use api::config::SiteConfig;
use tracing::error;

pub mod browser;
pub mod storage;
pub mod style;
pub mod theme;

const SITE_TOML: &str = include_str!("../../site.toml");

// the embedded site configuration
//
// a broken document is a build mistake, not something a visitor can fix, so we log it
// and carry on with the built-in values instead of refusing to render
pub static SITE: LazyLock<SiteConfig> = LazyLock::new(|| match SiteConfig::from_toml(SITE_TOML) {
    Ok(config) => config,
    Err(err) => {
        error!("failed to parse site.toml, using defaults: {err}");
        SiteConfig::default()
    }
});

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
