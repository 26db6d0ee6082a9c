//! Core page state: section navigation, contact form and static content

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod navigation;
mod section;
pub mod settings;
#[cfg(test)]
mod tests;

pub use contact::{
    ContactField, ContactForm, ContactFormFields, ContactSubmitter, FormStore,
    SimulatedSubmitter, SubmissionStatus, submit,
};
pub use error::{FormError, NavigationError, SubmissionError};
pub use navigation::{
    AnchorResolver, DetachedResolver, ScrollBehavior, ScrollBlock, ScrollOptions, ScrollOutcome,
    SectionNavigator,
};
pub use section::Section;
pub use settings::SiteSettings;
