//! Application pages module
//!
//! This module contains all the page components for the application:
//! - AlphaXM landing page (home)
//! - Studio landing page
//! - Not found page

mod alphaxm;
mod not_found;
mod studio;

pub use alphaxm::AlphaXmPage;
pub use not_found::NotFoundPage;
pub use studio::StudioPage;
