pub mod contact;
pub mod icon;
pub mod navigation;
pub mod pages;
pub mod sections;
pub mod settings;

pub use contact::ContactFormPanel;
pub use icon::{Icon, icons};
pub use navigation::{
    DomAnchorResolver, NavigationContext, provide_navigation_context,
    provide_navigation_context_with, use_navigation_context,
};
pub use pages::{AlphaXmPage, NotFoundPage, StudioPage};
pub use settings::{provide_site_settings, use_site_settings};
