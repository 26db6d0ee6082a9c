//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::settings::{
    DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_LATENCY_MS, DEFAULT_CONTACT_PHONE, SiteSettings,
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Simulated contact submission latency in milliseconds
    /// Example: CONTACT_LATENCY_MS=900
    pub contact_latency_ms: u32,

    /// Address shown in the contact card
    pub contact_email: String,

    /// Phone number shown in the contact card
    pub contact_phone: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let contact_latency_ms = match lookup("CONTACT_LATENCY_MS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid CONTACT_LATENCY_MS={:?}, using {}",
                    raw,
                    DEFAULT_CONTACT_LATENCY_MS
                );
                DEFAULT_CONTACT_LATENCY_MS
            }),
            None => DEFAULT_CONTACT_LATENCY_MS,
        };

        Self {
            contact_latency_ms,
            contact_email: non_empty(lookup("CONTACT_EMAIL"))
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            contact_phone: non_empty(lookup("CONTACT_PHONE"))
                .unwrap_or_else(|| DEFAULT_CONTACT_PHONE.to_string()),
        }
    }

    /// Settings the client needs, rendered into the HTML shell
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            contact_latency_ms: self.contact_latency_ms,
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.contact_latency_ms, 900);
        assert_eq!(config.contact_email, "hello@alphaxm.com");
        assert_eq!(config.contact_phone, "+1 (555) 555-1234");
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACT_LATENCY_MS", "250"),
            ("CONTACT_EMAIL", "team@example.com"),
            ("CONTACT_PHONE", "+44 20 7946 0000"),
        ]));

        assert_eq!(config.contact_latency_ms, 250);
        assert_eq!(config.contact_email, "team@example.com");
        assert_eq!(config.contact_phone, "+44 20 7946 0000");
    }

    #[test]
    fn test_invalid_latency_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("CONTACT_LATENCY_MS", "soon")]));
        assert_eq!(config.contact_latency_ms, 900);

        let config = Config::from_lookup(lookup_from(&[("CONTACT_LATENCY_MS", "-5")]));
        assert_eq!(config.contact_latency_ms, 900);
    }

    #[test]
    fn test_latency_whitespace_trimmed() {
        let config = Config::from_lookup(lookup_from(&[("CONTACT_LATENCY_MS", " 0 ")]));
        assert_eq!(config.contact_latency_ms, 0);
    }

    #[test]
    fn test_blank_contact_details_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACT_EMAIL", "   "),
            ("CONTACT_PHONE", ""),
        ]));

        assert_eq!(config.contact_email, "hello@alphaxm.com");
        assert_eq!(config.contact_phone, "+1 (555) 555-1234");
    }

    #[test]
    fn test_site_settings_mirror_config() {
        let config = Config::from_lookup(lookup_from(&[("CONTACT_LATENCY_MS", "10")]));
        let settings = config.site_settings();

        assert_eq!(settings.contact_latency_ms, 10);
        assert_eq!(settings.contact_email, config.contact_email);
        assert_eq!(settings.contact_phone, config.contact_phone);
    }
}
