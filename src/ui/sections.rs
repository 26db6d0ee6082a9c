//! Building blocks shared by both landing pages
//!
//! - SEO meta tags with JSON-LD organization data
//! - Service and project cards
//! - Contact details card
//! - Reveal-on-scroll styles and the observer script that drives them

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{self, Project, Service};
use crate::core::{Section, SiteSettings};
use crate::ui::icon::{Icon, icons, service_icon};
use crate::ui::navigation::use_navigation_context;

/// Current calendar year for footers
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// SEO meta tags component using leptos_meta
#[component]
pub fn SeoMeta(
    title: &'static str,
    description: &'static str,
    /// Path under the site root, used for the canonical URL
    #[prop(default = "")]
    path: &'static str,
    settings: SiteSettings,
) -> impl IntoView {
    let canonical = format!("{}{}", content::SITE_URL, path.trim_start_matches('/'));
    let json_ld = content::structured_data(&settings).to_string();

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Meta name="keywords" content="web development, AI integrations, blockchain, dApp, smart contracts, DevOps, product design" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />

        // Twitter
        <Meta property="twitter:card" content="summary" />
        <Meta property="twitter:title" content=title />
        <Meta property="twitter:description" content=description />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// Service card with an icon badge
#[component]
pub fn ServiceCard(service: Service, #[prop(default = 0)] index: usize) -> impl IntoView {
    let delay = format!("transition-delay: {}ms;", index * 100);

    view! {
        <div class="landing-scroll-animate landing-card p-6 rounded-2xl" style=delay>
            <div class="flex items-start gap-4">
                <div class="w-12 h-12 rounded-lg bg-indigo-600/30 flex items-center justify-center">
                    <Icon name=service_icon(service.icon) class="w-6 h-6" />
                </div>
                <div>
                    <h3 class="font-semibold text-lg">{service.title}</h3>
                    <p class="mt-2 text-sm text-slate-300">{service.description}</p>
                </div>
            </div>
        </div>
    }
}

/// Case-study card with tags and a hire CTA
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let nav = use_navigation_context();

    view! {
        <div class="landing-scroll-animate landing-card landing-lift p-6 rounded-2xl">
            <h3 class="font-semibold text-lg">{project.title}</h3>
            <p class="mt-3 text-slate-300">{project.description}</p>
            <div class="mt-4 flex flex-wrap gap-2">
                {project.tags.iter().map(|tag| view! {
                    <span class="text-xs px-2 py-1 rounded bg-slate-800/40">{*tag}</span>
                }).collect_view()}
            </div>
            <div class="mt-4 flex items-center justify-between">
                {project.link.map(|link| view! {
                    <a href=link class="text-sm font-semibold text-indigo-300">"Explore"</a>
                })}
                <a
                    href=Section::Contact.href()
                    class="inline-flex items-center gap-2 bg-indigo-600/80 px-3 py-2 rounded-lg"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.request(Section::Contact);
                    }
                >
                    "Hire Us"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </a>
            </div>
        </div>
    }
}

/// Email and phone rows for the contact section
#[component]
pub fn ContactDetails(settings: SiteSettings) -> impl IntoView {
    let mailto = settings.mailto();
    let tel = settings.tel();

    view! {
        <div class="mt-6 space-y-3">
            <a href=mailto class="flex items-center gap-3">
                <div class="w-10 h-10 flex items-center justify-center rounded-md bg-indigo-700/40">
                    <Icon name=icons::MAIL class="w-5 h-5" />
                </div>
                <div>
                    <div class="text-xs text-slate-400">"Email"</div>
                    <div class="font-semibold">{settings.contact_email.clone()}</div>
                </div>
            </a>
            <a href=tel class="flex items-center gap-3">
                <div class="w-10 h-10 flex items-center justify-center rounded-md bg-indigo-700/40">
                    <Icon name=icons::PHONE class="w-5 h-5" />
                </div>
                <div>
                    <div class="text-xs text-slate-400">"Call"</div>
                    <div class="font-semibold">{settings.contact_phone.clone()}</div>
                </div>
            </a>
        </div>
    }
}

/// CSS styles for landing page animations
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }
            section[id] { scroll-margin-top: 4rem; }

            .landing-btn-primary {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.25rem;
                border-radius: 0.75rem;
                font-weight: 600;
                color: white;
                background-image: linear-gradient(to right, #4f46e5, #ec4899);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                transition: transform 0.2s ease, opacity 0.2s ease;
            }
            .landing-btn-primary:hover { transform: translateY(-1px); }
            .landing-btn-primary:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }

            .landing-btn-secondary {
                display: inline-flex;
                align-items: center;
                padding: 0.75rem 1rem;
                border-radius: 0.75rem;
                font-weight: 600;
                background-color: rgba(30, 41, 59, 0.6);
                transition: background-color 0.2s ease;
            }
            .landing-btn-secondary:hover { background-color: rgb(30, 41, 59); }

            .landing-card {
                background-image: linear-gradient(to bottom right, rgba(15, 23, 42, 0.6), rgba(30, 41, 59, 0.4));
                border: 1px solid rgb(51, 65, 85);
            }
            .landing-lift { transition: transform 0.25s ease; }
            .landing-lift:hover { transform: translateY(-6px); }

            .contact-input {
                width: 100%;
                margin-top: 0.25rem;
                padding: 0.75rem;
                border-radius: 0.5rem;
                background-color: rgba(30, 41, 59, 0.4);
                border: 1px solid rgb(51, 65, 85);
                color: inherit;
            }

            /* Entrance animations */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.6s ease-out both; }
            .landing-delay-100 { animation-delay: 0.05s; }
            .landing-delay-200 { animation-delay: 0.12s; }
            .landing-delay-300 { animation-delay: 0.18s; }
            .landing-delay-400 { animation-delay: 0.4s; }

            /* Reveal on scroll */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(20px) scale(0.98);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0) scale(1);
            }

            @media (prefers-reduced-motion: reduce) {
                html { scroll-behavior: auto; }
                .landing-fade-in-up { animation: none; }
                .landing-scroll-animate { opacity: 1; transform: none; transition: none; }
            }
            "#
        </style>
    }
}

/// Intersection Observer for scroll animations
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
