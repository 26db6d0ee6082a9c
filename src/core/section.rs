//! Page sections that can be made active and scrolled into view

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NavigationError;

/// A named, anchorable region of a landing page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Services,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section's anchor in the rendered page
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Fragment link (`#services`) for plain anchors
    pub fn href(&self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Services => "#services",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Parse an anchor id, accepting an optional leading `#`
    pub fn from_anchor(anchor: &str) -> Result<Self, NavigationError> {
        anchor.trim_start_matches('#').parse()
    }
}

impl FromStr for Section {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor_id() == s)
            .ok_or_else(|| NavigationError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_order_is_page_order() {
        let ids: Vec<_> = Section::ALL.iter().map(Section::anchor_id).collect();
        assert_eq!(ids, vec!["home", "services", "projects", "contact"]);
    }

    #[test]
    fn test_parse_known_anchors() {
        for section in Section::ALL {
            assert_eq!(section.anchor_id().parse::<Section>(), Ok(section));
        }
        assert_eq!(Section::from_anchor("#contact"), Ok(Section::Contact));
    }

    #[test]
    fn test_parse_unknown_anchor() {
        assert_eq!(
            "pricing".parse::<Section>(),
            Err(NavigationError::UnknownSection("pricing".to_string()))
        );
        // Anchor ids are case sensitive, like element ids
        assert!(Section::from_anchor("Services").is_err());
        assert!(Section::from_anchor("").is_err());
    }

    #[test]
    fn test_href_matches_anchor() {
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.anchor_id()));
        }
    }

    #[test]
    fn test_serde_uses_anchor_names() {
        let json = serde_json::to_string(&Section::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        let parsed: Section = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(parsed, Section::Contact);
    }
}
