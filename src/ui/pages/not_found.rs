//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::COMPANY_NAME;
use crate::ui::sections::{LandingStyles, current_year};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-slate-100 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                // Description
                <p class="text-slate-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                // Actions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="landing-btn-primary">
                        "Go Home"
                    </A>
                    <A href="/studio" attr:class="landing-btn-secondary">
                        "Studio"
                    </A>
                </div>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-500">
                    {format!("© {} {}", current_year(), COMPANY_NAME)}
                </p>
            </div>

            <LandingStyles />
        </div>
    }
}
