//! Folio Core Library
//!
//! Runtime behavior behind a single-page portfolio: the auto-advancing
//! slideshow and the scroll/hover/click animation triggers.
//!
//! ## Overview
//!
//! The two mechanisms are fully decoupled:
//!
//! - **Slideshow Controller** owns one index over a fixed slide list and
//!   advances it on a fixed timer, independent of user input.
//! - **Viewport Animation Trigger** reacts to discrete UI events and issues
//!   purely cosmetic transitions through an injected [`AnimationEngine`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use folio_core::{PortfolioContent, SlideshowController, ViewportAnimator, SLIDE_INTERVAL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = PortfolioContent::default();
//!
//!     let slideshow = SlideshowController::start(content.slides.clone(), SLIDE_INTERVAL)?;
//!
//!     let mut motion = ViewportAnimator::new(Arc::new(MyEngine::default()));
//!     motion.register_section("projects");
//!     motion.register_card("card-0");
//!     motion.on_mount();
//!
//!     // ... dispatch events from the host UI ...
//!
//!     motion.detach();
//!     slideshow.teardown();
//!     Ok(())
//! }
//! ```

pub mod content;
pub mod error;
pub mod motion;
pub mod slideshow;

// Re-exports
pub use content::{
    ContactLinks, GalleryImage, LinkKind, Owner, PortfolioContent, Project, ProjectLink, Skill,
    SocialLink,
};
pub use error::{FolioError, FolioResult};
pub use motion::{
    AnimationEngine, Category, ElementId, MotionError, MotionEvent, Style, Tween, ViewportAnimator,
};
pub use slideshow::{Slide, SlideFrame, SlideId, Slideshow, SlideshowController, SLIDE_INTERVAL};
