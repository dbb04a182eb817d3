//! Shared UI crate for the FoodChain landing page. Behavior, state machines
//! and views live here; the web and desktop crates add a router and launch.

pub mod config;
pub mod core;
pub mod forms;
pub mod i18n;
pub mod site;
pub mod theme;
pub mod views;
pub mod widgets;

pub mod components {
    // Header with navigation, language switcher and theme toggle (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;
}

pub use crate::config::SiteConfig;
pub use crate::core::storage::Preferences;
pub use crate::site::{use_site_provider, Site};
