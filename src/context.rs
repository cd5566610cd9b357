//! Page settings and content context for Folio.
//!
//! Settings are resolved once from the command line in `main` and handed to
//! every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let content = use_content();
//! let settings = use_settings();
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{PortfolioContent, SLIDE_INTERVAL};

/// Runtime settings for the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Time between slideshow advances
    pub slide_interval: Duration,
    /// Whether scroll/hover/click animations are enabled
    pub motion: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            slide_interval: SLIDE_INTERVAL,
            motion: true,
        }
    }
}

/// Get the page settings (set from command line or default).
pub fn get_settings() -> PageSettings {
    crate::get_settings()
}

/// Get the page content (loaded from file or built in).
pub fn get_content() -> PortfolioContent {
    crate::get_content()
}

/// Hook to access the static page content.
pub fn use_content() -> PortfolioContent {
    use_context::<PortfolioContent>()
}

/// Hook to access the page settings.
pub fn use_settings() -> PageSettings {
    use_context::<PageSettings>()
}
