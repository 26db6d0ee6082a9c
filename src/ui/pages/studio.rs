//! Studio landing page
//!
//! The compact variant of the site: hero, three services and a contact
//! section. Click handlers call [`NavigationContext::navigate`] directly, so
//! each click scrolls immediately without going through a request effect.

use leptos::prelude::*;

use crate::core::content::{COMPANY_NAME, STUDIO_SERVICES};
use crate::core::Section;
use crate::ui::contact::ContactFormPanel;
use crate::ui::navigation::{NavigationContext, provide_navigation_context};
use crate::ui::sections::{
    ContactDetails, LandingStyles, ScrollAnimationScript, SeoMeta, ServiceCard, current_year,
};
use crate::ui::settings::use_site_settings;

#[component]
pub fn StudioPage() -> impl IntoView {
    let nav = provide_navigation_context();
    let settings = use_site_settings();
    let seo_settings = settings.clone();

    view! {
        <SeoMeta
            title="AlphaXM - Building the Future of the Web"
            description="Fullstack websites of any complexity with stunning UI/UX, powered by AI and blockchain."
            path="/studio"
            settings=seo_settings
        />

        <div class="min-h-screen bg-gray-950 text-white antialiased">
            <nav class="fixed top-0 w-full z-40 flex justify-between items-center px-8 py-4 bg-black/60 backdrop-blur-md">
                <button
                    class="text-2xl font-bold tracking-wide studio-accent"
                    on:click=move |_| nav.navigate(Section::Home)
                >
                    {COMPANY_NAME}
                </button>
                <div class="space-x-6">
                    <NavButton nav=nav section=Section::Services />
                    <NavButton nav=nav section=Section::Contact />
                </div>
            </nav>

            <section
                id=Section::Home.anchor_id()
                class="min-h-screen flex flex-col justify-center items-center text-center px-6"
            >
                <h2 class="text-5xl md:text-6xl font-extrabold mb-6 landing-fade-in-up">
                    "Building the " <span class="studio-accent">"Future"</span> " of the Web"
                </h2>
                <p class="text-lg md:text-xl text-gray-300 max-w-2xl mb-8 landing-fade-in-up landing-delay-200">
                    "At AlphaXM, we craft fullstack websites of any complexity with stunning UI/UX, powered by AI and Blockchain for next-gen capabilities."
                </p>
                <button
                    class="studio-cta px-8 py-4 rounded-full text-lg font-semibold landing-fade-in-up landing-delay-400"
                    on:click=move |_| nav.navigate(Section::Services)
                >
                    "🚀 Let's Build Your Dream Project"
                </button>
            </section>

            <section id=Section::Services.anchor_id() class="py-20 px-6 bg-gray-900">
                <h3 class="text-4xl font-bold text-center mb-12 landing-scroll-animate">
                    "What We Do Best"
                </h3>
                <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                    {STUDIO_SERVICES.iter().enumerate().map(|(index, service)| view! {
                        <ServiceCard service=*service index=index />
                    }).collect_view()}
                </div>
            </section>

            <section id=Section::Contact.anchor_id() class="py-20 px-6">
                <h3 class="text-4xl font-bold text-center mb-12 landing-scroll-animate">
                    "Get in Touch"
                </h3>
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12">
                    <div class="flex flex-col justify-center text-gray-300">
                        <ContactDetails settings=settings />
                    </div>
                    <ContactFormPanel show_clear=false />
                </div>
            </section>

            <footer class="py-6 text-center text-gray-500 border-t border-gray-800">
                {format!("© {} {}. All rights reserved.", current_year(), COMPANY_NAME)}
            </footer>

            <LandingStyles />
            <StudioStyles />
            <ScrollAnimationScript />
        </div>
    }
}

/// Header button that scrolls straight to its section
#[component]
fn NavButton(nav: NavigationContext, section: Section) -> impl IntoView {
    view! {
        <button
            class="studio-accent hover:opacity-80 transition"
            class:underline=move || nav.is_active(section)
            on:click=move |_| nav.navigate(section)
        >
            {section.label()}
        </button>
    }
}

/// Accent colors for the studio variant
#[component]
fn StudioStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .studio-accent { color: #25b342; }
            .studio-cta {
                background-color: #25b342;
                box-shadow: 0px 0px 20px rgba(37, 179, 66, 0.4);
                transition: transform 0.2s ease;
            }
            .studio-cta:hover { transform: scale(1.05); }
            .studio-cta:active { transform: scale(0.95); }
            "#
        </style>
    }
}
