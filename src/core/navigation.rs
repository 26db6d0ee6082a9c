//! Section navigation and scroll sync
//!
//! [`SectionNavigator`] tracks the active [`Section`] of a page and asks an
//! injected [`AnchorResolver`] to scroll the matching anchor into view every
//! time navigation is requested. The resolver is the only rendering-layer
//! dependency, so the navigator runs the same in the browser and in tests.

use std::fmt;

use super::error::NavigationError;
use super::section::Section;

/// How the viewport moves to the target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

/// Which edge of the target lines up with the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// Options passed to the resolver for every scroll request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scroll with the anchor's top edge at the viewport top
    pub const SMOOTH_START: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };
}

/// Result of a scroll request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The anchor was found and a scroll was started
    Scrolled,
    /// No element carries the anchor id (yet); nothing happened
    AnchorMissing,
}

/// Locates a section anchor and scrolls it into view
pub trait AnchorResolver {
    fn scroll_into_view(&self, anchor_id: &str, options: ScrollOptions) -> ScrollOutcome;
}

impl<R: AnchorResolver + ?Sized> AnchorResolver for &R {
    fn scroll_into_view(&self, anchor_id: &str, options: ScrollOptions) -> ScrollOutcome {
        (**self).scroll_into_view(anchor_id, options)
    }
}

impl<R: AnchorResolver + ?Sized> AnchorResolver for std::sync::Arc<R> {
    fn scroll_into_view(&self, anchor_id: &str, options: ScrollOptions) -> ScrollOutcome {
        (**self).scroll_into_view(anchor_id, options)
    }
}

/// Callback invoked with the new section after each navigation
pub type SectionListener = Box<dyn Fn(Section) + Send + Sync>;

/// Owns the active section and drives the scroll side effect
pub struct SectionNavigator<R> {
    current: Section,
    resolver: R,
    options: ScrollOptions,
    listeners: Vec<SectionListener>,
}

impl<R: AnchorResolver> SectionNavigator<R> {
    /// Create a navigator starting at [`Section::Home`]
    pub fn new(resolver: R) -> Self {
        Self::starting_at(resolver, Section::default())
    }

    pub fn starting_at(resolver: R, initial: Section) -> Self {
        Self {
            current: initial,
            resolver,
            options: ScrollOptions::SMOOTH_START,
            listeners: Vec::new(),
        }
    }

    /// Override the scroll options used for every request
    pub fn with_options(mut self, options: ScrollOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a listener that sees every new section before its scroll starts
    pub fn subscribe(&mut self, listener: impl Fn(Section) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Currently active section
    pub fn current(&self) -> Section {
        self.current
    }

    /// Make `section` active and scroll its anchor into view.
    ///
    /// Every call issues exactly one scroll request, including a request for
    /// the section that is already active. A missing anchor is not an error.
    pub fn navigate_to(&mut self, section: Section) -> ScrollOutcome {
        self.current = section;
        for listener in &self.listeners {
            listener(section);
        }

        let outcome = self
            .resolver
            .scroll_into_view(section.anchor_id(), self.options);
        if outcome == ScrollOutcome::AnchorMissing {
            log_missing_anchor(section);
        }
        outcome
    }

    /// Navigate by anchor id (`"services"` or `"#services"`)
    pub fn navigate_to_anchor(&mut self, anchor: &str) -> Result<Section, NavigationError> {
        let section = Section::from_anchor(anchor)?;
        self.navigate_to(section);
        Ok(section)
    }
}

impl<R> fmt::Debug for SectionNavigator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionNavigator")
            .field("current", &self.current)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn log_missing_anchor(section: Section) {
    #[cfg(feature = "ssr")]
    tracing::debug!("Anchor #{} not rendered, scroll skipped", section);
    #[cfg(not(feature = "ssr"))]
    leptos::logging::debug_warn!("Anchor #{} not rendered, scroll skipped", section);
}

/// Resolver that never finds an anchor, for renders without a document
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedResolver;

impl AnchorResolver for DetachedResolver {
    fn scroll_into_view(&self, _anchor_id: &str, _options: ScrollOptions) -> ScrollOutcome {
        ScrollOutcome::AnchorMissing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingResolver {
        requests: Mutex<Vec<(String, ScrollOptions)>>,
        rendered: Vec<&'static str>,
    }

    impl RecordingResolver {
        fn rendering(anchors: &[&'static str]) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                rendered: anchors.to_vec(),
            }
        }

        fn targets(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|(id, _)| id.clone())
                .collect()
        }
    }

    impl AnchorResolver for RecordingResolver {
        fn scroll_into_view(&self, anchor_id: &str, options: ScrollOptions) -> ScrollOutcome {
            self.requests
                .lock()
                .unwrap()
                .push((anchor_id.to_string(), options));
            if self.rendered.iter().any(|id| *id == anchor_id) {
                ScrollOutcome::Scrolled
            } else {
                ScrollOutcome::AnchorMissing
            }
        }
    }

    fn all_rendered() -> RecordingResolver {
        RecordingResolver::rendering(&["home", "services", "projects", "contact"])
    }

    #[test]
    fn test_starts_at_home() {
        let navigator = SectionNavigator::new(DetachedResolver);
        assert_eq!(navigator.current(), Section::Home);
    }

    #[test]
    fn test_navigate_updates_current() {
        let resolver = all_rendered();
        let mut navigator = SectionNavigator::new(&resolver);

        navigator.navigate_to(Section::Projects);
        assert_eq!(navigator.current(), Section::Projects);

        navigator.navigate_to(Section::Contact);
        assert_eq!(navigator.current(), Section::Contact);
    }

    #[test]
    fn test_scroll_uses_smooth_start() {
        let resolver = all_rendered();
        let mut navigator = SectionNavigator::new(&resolver);

        assert_eq!(navigator.navigate_to(Section::Services), ScrollOutcome::Scrolled);

        let requests = resolver.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "services");
        assert_eq!(requests[0].1.behavior, ScrollBehavior::Smooth);
        assert_eq!(requests[0].1.block, ScrollBlock::Start);
    }

    #[test]
    fn test_same_section_scrolls_again() {
        let resolver = all_rendered();
        let mut navigator = SectionNavigator::new(&resolver);

        navigator.navigate_to(Section::Contact);
        navigator.navigate_to(Section::Contact);

        assert_eq!(resolver.targets(), vec!["contact", "contact"]);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        // The studio page has no projects section
        let resolver = RecordingResolver::rendering(&["home", "services", "contact"]);
        let mut navigator = SectionNavigator::new(&resolver);

        let outcome = navigator.navigate_to(Section::Projects);

        assert_eq!(outcome, ScrollOutcome::AnchorMissing);
        assert_eq!(navigator.current(), Section::Projects);
    }

    #[test]
    fn test_navigate_to_anchor() {
        let resolver = all_rendered();
        let mut navigator = SectionNavigator::new(&resolver);

        assert_eq!(navigator.navigate_to_anchor("#projects"), Ok(Section::Projects));
        assert_eq!(navigator.current(), Section::Projects);
    }

    #[test]
    fn test_unknown_anchor_leaves_state() {
        let resolver = all_rendered();
        let mut navigator = SectionNavigator::starting_at(&resolver, Section::Services);

        let result = navigator.navigate_to_anchor("pricing");

        assert_eq!(
            result,
            Err(NavigationError::UnknownSection("pricing".to_string()))
        );
        assert_eq!(navigator.current(), Section::Services);
        assert!(resolver.targets().is_empty());
    }

    #[test]
    fn test_listener_sees_state_before_scroll() {
        #[derive(Debug, PartialEq)]
        enum Event {
            Changed(Section),
            Scrolled(String),
        }

        struct LoggingResolver(Arc<Mutex<Vec<Event>>>);

        impl AnchorResolver for LoggingResolver {
            fn scroll_into_view(&self, anchor_id: &str, _: ScrollOptions) -> ScrollOutcome {
                self.0
                    .lock()
                    .unwrap()
                    .push(Event::Scrolled(anchor_id.to_string()));
                ScrollOutcome::Scrolled
            }
        }

        let events = Arc::new(Mutex::new(Vec::new()));
        let mut navigator = SectionNavigator::new(LoggingResolver(events.clone()));
        let listener_events = events.clone();
        navigator.subscribe(move |section| {
            listener_events.lock().unwrap().push(Event::Changed(section));
        });

        navigator.navigate_to(Section::Services);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Event::Changed(Section::Services),
                Event::Scrolled("services".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_options() {
        let resolver = all_rendered();
        let options = ScrollOptions {
            behavior: ScrollBehavior::Instant,
            block: ScrollBlock::Center,
        };
        let mut navigator = SectionNavigator::new(&resolver).with_options(options);

        navigator.navigate_to(Section::Home);

        assert_eq!(resolver.requests.lock().unwrap()[0].1, options);
    }
}
