//! Error types for section navigation and contact submissions

/// Errors raised by [`SectionNavigator`](super::SectionNavigator)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The anchor id does not name one of the page sections
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Errors raised while addressing contact form fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown contact field: {0}")]
    UnknownField(String),
}

/// Errors raised during a contact form submission cycle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The submitter did not complete the request
    #[error("Submission failed: {0}")]
    Failed(String),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    InFlight,

    /// The form state was disposed before the cycle finished
    #[error("Contact form is no longer available")]
    Detached,
}

/// Errors raised while starting the HTTP server
#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid Leptos configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
