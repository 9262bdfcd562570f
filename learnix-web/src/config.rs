use learnix_core::SiteConfig;
use web_sys::Document;

/// Id of the optional inline JSON block that overrides the compiled defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Load page configuration from `<script type="application/json" id="site-config">`.
///
/// Absent or empty blocks yield the defaults; malformed ones are logged and
/// also fall back to the defaults so the page stays interactive.
#[must_use]
pub fn load(document: &Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    if text.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("site config loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}
