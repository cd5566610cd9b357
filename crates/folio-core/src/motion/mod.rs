//! Scroll, hover and click driven cosmetic animations.
//!
//! ## Overview
//!
//! ```text
//! host UI events ──▶ ViewportAnimator ──▶ AnimationEngine (injected)
//!                    ├── Registry: ElementId -> Category
//!                    ├── ScrollObserver: 80% reveal line
//!                    └── presets: Category x MotionEvent -> Tween
//! ```
//!
//! The animator never touches slideshow state, and every failure path is a
//! silent no-op: motion is decoration, the page must work without it.

mod animator;
mod engine;
pub mod observer;
pub mod presets;
mod recording;
pub mod registry;
mod style;
mod types;

pub use animator::ViewportAnimator;
pub use engine::{AnimationEngine, MotionError};
pub use observer::{ScrollObserver, REVEAL_THRESHOLD};
pub use recording::{EngineCall, RecordingEngine};
pub use registry::{Registration, Registry};
pub use style::{Easing, Extent, Length, Shadow, Style, Tween};
pub use types::{Category, ElementId, MotionEvent};
