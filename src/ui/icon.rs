use leptos::prelude::*;

use crate::core::content::ServiceIcon;

/// Inline stroke icon (24x24 viewBox, drawn with `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let paths = icons::paths(name);

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Icon drawn on a service card
pub fn service_icon(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Brush => icons::BRUSH,
        ServiceIcon::Code => icons::CODE,
        ServiceIcon::Cpu => icons::CPU,
        ServiceIcon::Box => icons::BOX,
        ServiceIcon::Cloud => icons::CLOUD,
        ServiceIcon::Life => icons::LIFE_BUOY,
    }
}

/// Icon names used by the pages
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const SEND: &str = "send";
    pub const LINKEDIN: &str = "linkedin";
    pub const GITHUB: &str = "github";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const BRUSH: &str = "brush";
    pub const CODE: &str = "code";
    pub const CPU: &str = "cpu";
    pub const BOX: &str = "box";
    pub const CLOUD: &str = "cloud";
    pub const LIFE_BUOY: &str = "life-buoy";

    /// SVG path data for an icon; unknown names render a dot
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            ARROW_RIGHT => &["M5 12h14", "m12 5 7 7-7 7"],
            MAIL => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            PHONE => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            SEND => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            LINKEDIN => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            GITHUB => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            MENU => &["M4 6h16", "M4 12h16", "M4 18h16"],
            X => &["M18 6 6 18", "m6 6 12 12"],
            BRUSH => &[
                "m9.06 11.9 8.07-8.06a2.85 2.85 0 1 1 4.03 4.03l-8.06 8.08",
                "M7.07 14.94c-1.66 0-3 1.35-3 3.02 0 1.33-2.5 1.52-2 2.02 1.08 1.1 2.49 2.02 4 2.02 2.2 0 4-1.8 4-4.04a3.01 3.01 0 0 0-3-3.02z",
            ],
            CODE => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            CPU => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M9 2v2",
                "M15 2v2",
                "M9 20v2",
                "M15 20v2",
                "M2 9h2",
                "M2 15h2",
                "M20 9h2",
                "M20 15h2",
            ],
            BOX => &[
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            CLOUD => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            LIFE_BUOY => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "m4.93 4.93 4.24 4.24",
                "m14.83 9.17 4.24-4.24",
                "m14.83 14.83 4.24 4.24",
                "m9.17 14.83-4.24 4.24",
            ],
            _ => &["M12 12h.01"],
        }
    }

}
