//! Folio UI Components
//!
//! Dioxus primitives for the glass-morphism portfolio look:
//! translucent panels, soft borders and Bootstrap Icons.
//!
//! ## Design Language
//!
//! - **Glass**: semi-transparent white over a blurred backdrop
//! - **Glass primary**: same surface with an accent tint for the main call to action
//! - **Badges**: small pills for roles and technology tags

pub mod components;

pub use components::*;
