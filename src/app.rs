use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteSettings;
use crate::core::settings::SETTINGS_META_NAME;
use crate::ui::{AlphaXmPage, NotFoundPage, StudioPage, provide_site_settings};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Route renders carry the configured settings; error pages fall back to defaults
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=SETTINGS_META_NAME content=settings.to_meta_content()/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Contact details and simulated latency for every page
    provide_site_settings();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/alphaxm.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=AlphaXmPage/>
                <Route path=path!("/studio") view=StudioPage/>
            </Routes>
        </Router>
    }
}
