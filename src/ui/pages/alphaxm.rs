//! AlphaXM landing page
//!
//! Single-page site with hero, services, selected projects and contact
//! sections. Every navigation affordance records a section request on the
//! [`NavigationContext`]; one effect turns requests into smooth scrolls, so
//! the header, mobile menu, CTAs and footer all share the same path.

use leptos::prelude::*;

use crate::core::content::{COMPANY_NAME, COMPANY_TAGLINE, HERO_STATS, SAMPLE_PROJECTS, SERVICES};
use crate::core::{Section, SiteSettings};
use crate::ui::contact::ContactFormPanel;
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::{NavigationContext, provide_navigation_context};
use crate::ui::sections::{
    ContactDetails, LandingStyles, ProjectCard, ScrollAnimationScript, SeoMeta, ServiceCard,
    current_year,
};
use crate::ui::settings::use_site_settings;

/// Landing page with section navigation driven by requests
#[component]
pub fn AlphaXmPage() -> impl IntoView {
    let nav = provide_navigation_context();
    nav.sync_scroll_with_requests();
    let settings = use_site_settings();
    let seo_settings = settings.clone();

    view! {
        <SeoMeta
            title="AlphaXM - Web, AI & Blockchain Product Studio"
            description="End-to-end web development, lifecycle management, and dApp engineering with AI and blockchain built in."
            settings=seo_settings
        />

        <div class="min-h-screen bg-black text-slate-100 antialiased">
            <Header nav=nav />

            <main class="pt-20">
                <Hero nav=nav />
                <ServicesSection nav=nav />
                <ProjectsSection />
                <ContactSection settings=settings />
                <Footer nav=nav />
            </main>

            <LandingStyles />
            <ScrollAnimationScript />
        </div>
    }
}

/// Link that requests a section instead of jumping to the fragment
#[component]
fn SectionLink(
    nav: NavigationContext,
    section: Section,
    #[prop(default = "text-sm hover:text-white transition")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=section.href()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                nav.request(section);
            }
        >
            {children()}
        </a>
    }
}

/// Fixed header with desktop nav and mobile menu
#[component]
fn Header(nav: NavigationContext) -> impl IntoView {
    let nav_sections = [Section::Services, Section::Projects, Section::Contact];

    view! {
        <header class="fixed w-full z-40 bg-black/70 backdrop-blur-md">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <button
                    class="flex items-center gap-3 cursor-pointer text-left"
                    on:click=move |_| nav.request(Section::Home)
                    aria-label="Back to top"
                >
                    <div>
                        <div class="text-sm font-bold tracking-tight">{COMPANY_NAME}</div>
                        <div class="text-xs opacity-70">{COMPANY_TAGLINE}</div>
                    </div>
                </button>

                // Desktop Navigation
                <nav class="hidden md:flex items-center gap-6">
                    {nav_sections.into_iter().map(move |section| view! {
                        <button
                            class="text-sm hover:text-white transition"
                            class:text-white=move || nav.is_active(section)
                            on:click=move |_| nav.request(section)
                        >
                            {section.label()}
                        </button>
                    }).collect_view()}
                    <SectionLink
                        nav=nav
                        section=Section::Contact
                        class="ml-3 landing-btn-primary text-sm"
                    >
                        "Get a Proposal"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </SectionLink>
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden p-2 rounded-md bg-slate-800/40"
                    on:click=move |_| nav.toggle_mobile_menu()
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || nav.mobile_menu_open.get().to_string()
                >
                    {move || {
                        if nav.mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-5 h-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-5 h-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300 bg-black/90"
                class:max-h-0=move || !nav.mobile_menu_open.get()
                class:max-h-96=move || nav.mobile_menu_open.get()
            >
                <div class="px-6 pb-6 flex flex-col gap-3">
                    {nav_sections.into_iter().map(move |section| view! {
                        <button
                            class="text-left py-2"
                            on:click=move |_| nav.request_from_menu(section)
                        >
                            {section.label()}
                        </button>
                    }).collect_view()}
                    <button
                        class="landing-btn-primary justify-center"
                        on:click=move |_| nav.request_from_menu(Section::Contact)
                    >
                        "Get a Proposal"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Hero section with CTAs and stat tiles
#[component]
fn Hero(nav: NavigationContext) -> impl IntoView {
    view! {
        <section id=Section::Home.anchor_id() class="max-w-6xl mx-auto px-6 py-16">
            <div class="flex flex-col md:flex-row items-center gap-10">
                <div class="w-full md:w-1/2">
                    <h1 class="text-4xl md:text-5xl font-extrabold leading-tight landing-fade-in-up landing-delay-100">
                        "We build modern web products, "
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-indigo-400 to-pink-400">
                            "AI-driven"
                        </span>
                        " & "
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-green-400 to-cyan-300">
                            "blockchain-native"
                        </span>
                    </h1>
                    <p class="mt-6 text-slate-300 max-w-2xl landing-fade-in-up landing-delay-200">
                        "End-to-end web development, lifecycle management, and dApp engineering. From idea and design to delivery and long-term operations, we integrate cutting-edge AI to accelerate UX and blockchain to secure value."
                    </p>

                    <div class="mt-8 flex flex-wrap gap-3">
                        <SectionLink nav=nav section=Section::Contact class="landing-btn-primary">
                            "Get a Proposal"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                        </SectionLink>
                        <SectionLink nav=nav section=Section::Projects class="landing-btn-secondary">
                            "See our Work"
                        </SectionLink>
                    </div>

                    <div class="mt-8 grid grid-cols-2 gap-3 max-w-md">
                        {HERO_STATS.iter().map(|stat| view! {
                            <div class="p-4 rounded-lg bg-slate-800/40">
                                <div class="text-xs uppercase opacity-80">{stat.label}</div>
                                <div class="text-lg font-bold">{stat.value}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="w-full md:w-1/2 landing-fade-in-up landing-delay-300">
                    <HeroVisual />
                </div>
            </div>

            // Floating CTA strip
            <div class="mt-12 landing-fade-in-up landing-delay-400">
                <div class="landing-card rounded-2xl p-4 flex items-center justify-between gap-4">
                    <div class="text-sm text-slate-300">
                        "We ship design → MVP → production with continuous ops."
                    </div>
                    <SectionLink nav=nav section=Section::Contact class="landing-btn-primary text-sm">
                        "Start a Project"
                    </SectionLink>
                </div>
            </div>
        </section>
    }
}

/// Stylized dashboard tiles next to the hero copy
#[component]
fn HeroVisual() -> impl IntoView {
    view! {
        <div class="landing-card rounded-3xl p-6 shadow-xl">
            <div class="grid grid-cols-2 gap-4">
                <div class="col-span-2 p-4 rounded-xl bg-slate-900/60">
                    <div class="flex items-center justify-between">
                        <div class="text-xs text-slate-400">"Active Projects"</div>
                        <div class="text-xs px-2 py-0.5 rounded bg-emerald-500/20 text-emerald-300">"Live"</div>
                    </div>
                    <div class="mt-3 text-2xl font-bold">"12"</div>
                    <div class="text-xs text-slate-400">"uptime 99.97%"</div>
                </div>
                <div class="p-4 rounded-xl bg-indigo-900/40">
                    <div class="text-sm font-semibold">"AI Node"</div>
                    <div class="mt-1 text-xs text-slate-300">"Vector search • NLU • Auto-ops"</div>
                </div>
                <div class="p-4 rounded-xl bg-emerald-900/30">
                    <div class="text-sm font-semibold">"Chain Layer"</div>
                    <div class="mt-1 text-xs text-slate-300">"Smart contracts • Bridges • Wallets"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ServicesSection(nav: NavigationContext) -> impl IntoView {
    view! {
        <section id=Section::Services.anchor_id() class="max-w-6xl mx-auto px-6 py-20">
            <div class="flex items-center justify-between gap-6">
                <div class="landing-scroll-animate">
                    <h2 class="text-3xl font-bold">"Services"</h2>
                    <p class="mt-2 text-slate-300 max-w-xl">
                        "We offer full lifecycle services tailored for startups and enterprises combining web engineering, AI integrations, and blockchain dApp development."
                    </p>
                </div>
                <SectionLink nav=nav section=Section::Contact class="landing-btn-secondary text-sm">
                    "Request a Call"
                </SectionLink>
            </div>

            <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {SERVICES.iter().enumerate().map(|(index, service)| view! {
                    <ServiceCard service=*service index=index />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="max-w-6xl mx-auto px-6 py-20">
            <div class="flex items-center justify-between gap-6">
                <div class="landing-scroll-animate">
                    <h2 class="text-3xl font-bold">"Selected Projects"</h2>
                    <p class="mt-2 text-slate-300 max-w-xl">
                        "A few case-studies that show our approach: shipping polished UX and secure blockchain flows."
                    </p>
                </div>
                <a href=Section::Projects.href() class="text-sm font-semibold text-indigo-300">"View All"</a>
            </div>

            <div class="mt-10 grid md:grid-cols-3 gap-6">
                {SAMPLE_PROJECTS.iter().map(|project| view! {
                    <ProjectCard project=*project />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection(settings: SiteSettings) -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor_id() class="max-w-4xl mx-auto px-6 py-20">
            <div class="landing-card p-8 rounded-2xl shadow-lg">
                <div class="flex flex-col md:flex-row gap-6">
                    <div class="md:w-1/2">
                        <h3 class="text-2xl font-bold">"Start a project with us"</h3>
                        <p class="mt-2 text-slate-300">
                            "Tell us about the problem you want to solve and we'll propose a pragmatic plan and an MVP roadmap."
                        </p>

                        <ContactDetails settings=settings />

                        <div class="mt-6 flex items-center gap-3">
                            <a href="#" class="p-2 rounded-md bg-slate-800/40" aria-label="LinkedIn">
                                <Icon name=icons::LINKEDIN class="w-4 h-4" />
                            </a>
                            <a href="#" class="p-2 rounded-md bg-slate-800/40" aria-label="GitHub">
                                <Icon name=icons::GITHUB class="w-4 h-4" />
                            </a>
                        </div>
                    </div>

                    <div class="md:w-1/2">
                        <ContactFormPanel />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer(nav: NavigationContext) -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="border-t border-slate-800 mt-10">
            <div class="max-w-6xl mx-auto px-6 py-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="text-sm text-slate-400">
                    {format!("© {} alphaXM · web, AI, blockchain", year)}
                </div>
                <div class="flex items-center gap-4 text-sm">
                    <SectionLink nav=nav section=Section::Contact>"Contact"</SectionLink>
                    <SectionLink nav=nav section=Section::Projects>"Projects"</SectionLink>
                    <SectionLink nav=nav section=Section::Services>"Services"</SectionLink>
                </div>
            </div>
        </footer>
    }
}
