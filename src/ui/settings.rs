//! Site settings context
//!
//! On the server the settings come from the route context set up in `main`.
//! The shell also writes them into a `<meta>` tag, which the hydrated client
//! reads back so both sides render the same contact details.

use leptos::prelude::*;

use crate::core::SiteSettings;
#[cfg(feature = "hydrate")]
use crate::core::settings::SETTINGS_META_NAME;

/// Read settings from the settings `<meta>` tag in the current document
#[cfg(feature = "hydrate")]
pub fn settings_from_document() -> Option<SiteSettings> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", SETTINGS_META_NAME);
    let meta = document.query_selector(&selector).ok()??;
    let content = meta.get_attribute("content")?;
    Some(SiteSettings::from_meta_content(&content))
}

/// Resolve the site settings for this render and provide them as context
pub fn provide_site_settings() -> SiteSettings {
    #[cfg(feature = "hydrate")]
    let settings = settings_from_document().unwrap_or_else(|| {
        leptos::logging::warn!("Site settings meta tag missing, using defaults");
        SiteSettings::default()
    });
    #[cfg(not(feature = "hydrate"))]
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    provide_context(settings.clone());
    settings
}

/// Get the site settings from the component tree
pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}
