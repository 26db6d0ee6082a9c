//! Section navigation context for the landing pages
//!
//! Wraps a [`SectionNavigator`] (DOM-backed on the pages) and exposes it to
//! components in two styles:
//! - imperative: [`NavigationContext::navigate`] scrolls straight from a
//!   click handler
//! - reactive: [`NavigationContext::request`] only records the wanted
//!   section, and the effect installed by
//!   [`NavigationContext::sync_scroll_with_requests`] performs the scroll

use leptos::prelude::*;

use crate::core::{AnchorResolver, ScrollOptions, ScrollOutcome, Section, SectionNavigator};

/// Scrolls real page elements found by id
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAnchorResolver;

impl AnchorResolver for DomAnchorResolver {
    fn scroll_into_view(&self, anchor_id: &str, options: ScrollOptions) -> ScrollOutcome {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::{ScrollBehavior, ScrollBlock};

            let element = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(anchor_id));

            if let Some(element) = element {
                let dom_options = web_sys::ScrollIntoViewOptions::new();
                dom_options.set_behavior(match options.behavior {
                    ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
                    ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
                    ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
                });
                dom_options.set_block(match options.block {
                    ScrollBlock::Start => web_sys::ScrollLogicalPosition::Start,
                    ScrollBlock::Center => web_sys::ScrollLogicalPosition::Center,
                    ScrollBlock::End => web_sys::ScrollLogicalPosition::End,
                    ScrollBlock::Nearest => web_sys::ScrollLogicalPosition::Nearest,
                });
                element.scroll_into_view_with_scroll_into_view_options(&dom_options);
                return ScrollOutcome::Scrolled;
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (anchor_id, options);
        }

        ScrollOutcome::AnchorMissing
    }
}

/// Navigation state shared by a page's header, CTAs and footer
pub struct NavigationContext<R: 'static = DomAnchorResolver> {
    /// Section most recently made active
    pub active: ReadSignal<Section>,
    /// Section requested through the reactive path
    requested: RwSignal<Section>,
    /// Whether the mobile menu overlay is open
    pub mobile_menu_open: RwSignal<bool>,
    navigator: StoredValue<SectionNavigator<R>>,
}

impl<R: 'static> Clone for NavigationContext<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for NavigationContext<R> {}

impl<R: AnchorResolver + Send + Sync + 'static> NavigationContext<R> {
    /// Make `section` active and scroll to it right away
    pub fn navigate(&self, section: Section) {
        self.navigator.update_value(|navigator| {
            navigator.navigate_to(section);
        });
    }

    /// Record a section request; the scroll happens in the sync effect
    pub fn request(&self, section: Section) {
        self.requested.set(section);
    }

    /// Navigate to the most recently requested section
    pub fn apply_request(&self) {
        let section = self.requested.get();
        self.navigate(section);
    }

    /// Install the effect that scrolls whenever a section is requested.
    ///
    /// The effect also runs once on mount, scrolling to the initial section.
    pub fn sync_scroll_with_requests(&self) {
        let ctx = *self;
        Effect::new(move |_| ctx.apply_request());
    }

    /// Navigate from the mobile menu and close it
    pub fn request_from_menu(&self, section: Section) {
        self.mobile_menu_open.set(false);
        self.request(section);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active.get() == section
    }
}

/// Create a DOM-backed navigation context for the current page and provide it
pub fn provide_navigation_context() -> NavigationContext {
    provide_navigation_context_with(DomAnchorResolver)
}

/// Create a navigation context scrolling through `resolver` and provide it
pub fn provide_navigation_context_with<R>(resolver: R) -> NavigationContext<R>
where
    R: AnchorResolver + Send + Sync + 'static,
{
    let (active, set_active) = signal(Section::default());

    let mut navigator = SectionNavigator::new(resolver);
    navigator.subscribe(move |section| set_active.set(section));

    let ctx = NavigationContext {
        active,
        requested: RwSignal::new(Section::default()),
        mobile_menu_open: RwSignal::new(false),
        navigator: StoredValue::new(navigator),
    };

    provide_context(ctx);
    ctx
}

/// Get the navigation context from the component tree
pub fn use_navigation_context() -> NavigationContext {
    expect_context::<NavigationContext>()
}
