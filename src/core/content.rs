//! Static page content
//!
//! Services, sample projects and hero stats rendered by the landing pages.
//! Plain records; nothing here carries behavior.

use serde::Serialize;
use serde_json::{Value, json};

use super::settings::SiteSettings;

pub const COMPANY_NAME: &str = "AlphaXM";
pub const COMPANY_TAGLINE: &str = "Web3 • AI • Product";
pub const SITE_URL: &str = "https://alphaxm.com/";

/// Icon shown on a service card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Brush,
    Code,
    Cpu,
    Box,
    Cloud,
    Life,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// Label/value tile shown under the hero copy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Product & UX",
        description: "Research, design sprint, prototypes, and high-converting UX flows.",
        icon: ServiceIcon::Brush,
    },
    Service {
        title: "Web Engineering",
        description: "Frontend (React/Next), backend (Node/Golang), and infra with CI/CD.",
        icon: ServiceIcon::Code,
    },
    Service {
        title: "AI Integrations",
        description: "LLMs, retrieval-augmented generation, auto-labeling, multimodal pipelines.",
        icon: ServiceIcon::Cpu,
    },
    Service {
        title: "Blockchain dApps",
        description: "Smart contract design, audits, bridges, wallets, and tokenomics.",
        icon: ServiceIcon::Box,
    },
    Service {
        title: "DevOps & SRE",
        description: "Kubernetes, observability, infra-as-code, and production runbooks.",
        icon: ServiceIcon::Cloud,
    },
    Service {
        title: "Managed Lifecycle",
        description: "SLA-backed maintenance, feature sprints, and growth engineering.",
        icon: ServiceIcon::Life,
    },
];

/// Shorter service list used by the studio page
pub const STUDIO_SERVICES: &[Service] = &[
    Service {
        title: "Fullstack Development",
        description: "From backend APIs to frontend interfaces, we build scalable, reliable, and modern apps.",
        icon: ServiceIcon::Code,
    },
    Service {
        title: "AI-Powered Solutions",
        description: "We integrate AI models to make your product smarter, personalized, and more efficient.",
        icon: ServiceIcon::Cpu,
    },
    Service {
        title: "Blockchain Integration",
        description: "Secure, decentralized, and future-proof features to give your app the Web3 edge.",
        icon: ServiceIcon::Box,
    },
];

pub const SAMPLE_PROJECTS: &[Project] = &[
    Project {
        id: "p1",
        title: "DEFI Lending dApp",
        description: "End-to-end lending protocol with stable interest, oracle integrations, and frontend dashboard.",
        tags: &["Ethereum", "Solidity", "React"],
        link: Some("#"),
    },
    Project {
        id: "p2",
        title: "AI-powered E-commerce",
        description: "Personalized product recommendations, dynamic imagery, and automated A/B testing.",
        tags: &["AI", "Node.js", "Tailwind"],
        link: Some("#"),
    },
    Project {
        id: "p3",
        title: "Onchain Game Marketplace",
        description: "NFT-based game items, secure minting flow, and marketplace UX.",
        tags: &["Solana", "Rust", "Web3"],
        link: Some("#"),
    },
];

pub const HERO_STATS: &[Stat] = &[
    Stat {
        label: "Avg delivery",
        value: "6–12 weeks",
    },
    Stat {
        label: "Focus",
        value: "Web + AI + Blockchain",
    },
];

/// JSON-LD `Organization` record for search engines
pub fn structured_data(settings: &SiteSettings) -> Value {
    let offers: Vec<Value> = SERVICES
        .iter()
        .map(|service| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": service.title,
                    "description": service.description,
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": COMPANY_NAME,
        "url": SITE_URL,
        "email": settings.contact_email,
        "telephone": settings.contact_phone,
        "description": "End-to-end web development, AI integrations, and blockchain dApp engineering.",
        "makesOffer": offers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_unique() {
        let mut ids: Vec<_> = SAMPLE_PROJECTS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SAMPLE_PROJECTS.len());
    }

    #[test]
    fn test_every_project_has_tags() {
        assert!(SAMPLE_PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_structured_data_lists_services() {
        let data = structured_data(&SiteSettings::default());

        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["email"], "hello@alphaxm.com");
        let offers = data["makesOffer"].as_array().unwrap();
        assert_eq!(offers.len(), SERVICES.len());
        assert_eq!(offers[0]["itemOffered"]["name"], "Product & UX");
    }
}
