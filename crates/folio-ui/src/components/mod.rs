//! Reusable UI components
//!
//! All components render Bootstrap-compatible class names so the page
//! stylesheet and Bootstrap Icons font drive their look.

mod badge;
mod button;
mod icon;

pub use badge::*;
pub use button::*;
pub use icon::*;
