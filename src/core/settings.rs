//! Client-visible site settings
//!
//! The server renders these into the HTML shell as a JSON `<meta>` payload so
//! the hydrated client runs with the same values the operator configured.

use serde::{Deserialize, Serialize};

/// Name of the `<meta>` tag carrying the settings payload
pub const SETTINGS_META_NAME: &str = "alphaxm-settings";

/// Simulated contact submission latency when nothing is configured
pub const DEFAULT_CONTACT_LATENCY_MS: u32 = 900;

pub const DEFAULT_CONTACT_EMAIL: &str = "hello@alphaxm.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+1 (555) 555-1234";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Artificial delay before a contact submission completes
    pub contact_latency_ms: u32,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            contact_latency_ms: DEFAULT_CONTACT_LATENCY_MS,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
        }
    }
}

impl SiteSettings {
    /// Serialize for the `content` attribute of the settings meta tag
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a meta payload, falling back to defaults for anything unreadable
    pub fn from_meta_content(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// `mailto:` link for the contact email
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// `tel:` link with formatting characters stripped
    pub fn tel(&self) -> String {
        let digits: String = self
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SiteSettings::default();
        assert_eq!(settings.contact_latency_ms, 900);
        assert_eq!(settings.contact_email, "hello@alphaxm.com");
    }

    #[test]
    fn test_meta_content_round_trip() {
        let settings = SiteSettings {
            contact_latency_ms: 250,
            contact_email: "team@example.com".to_string(),
            contact_phone: "+44 20 7946 0000".to_string(),
        };

        let content = settings.to_meta_content();
        assert_eq!(SiteSettings::from_meta_content(&content), settings);
    }

    #[test]
    fn test_partial_meta_content_fills_defaults() {
        let settings = SiteSettings::from_meta_content(r#"{"contact_latency_ms": 10}"#);
        assert_eq!(settings.contact_latency_ms, 10);
        assert_eq!(settings.contact_email, DEFAULT_CONTACT_EMAIL);
    }

    #[test]
    fn test_garbage_meta_content_uses_defaults() {
        assert_eq!(SiteSettings::from_meta_content("not json"), SiteSettings::default());
        assert_eq!(SiteSettings::from_meta_content(""), SiteSettings::default());
    }

    #[test]
    fn test_links() {
        let settings = SiteSettings::default();
        assert_eq!(settings.mailto(), "mailto:hello@alphaxm.com");
        assert_eq!(settings.tel(), "tel:+15555551234");
    }
}
