//! Animation engine capability.

use thiserror::Error;

use super::{ElementId, Style, Tween};

/// Failure reported by an [`AnimationEngine`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    /// The target element is no longer mounted
    #[error("element not mounted: {0}")]
    StaleElement(String),

    /// The engine cannot animate at all
    #[error("animation engine unavailable: {0}")]
    Unavailable(String),
}

/// Performs timed visual property transitions on page elements.
///
/// Implementations must let a later `animate_to` on the same target replace
/// any tween still in flight, starting from wherever the element currently is.
///
/// Returning [`MotionError::Unavailable`] degrades the animator for good;
/// from then on the host is responsible for showing each element's resting
/// style (see `ViewportAnimator::resting_style`).
pub trait AnimationEngine: Send + Sync {
    /// Transition `target` toward `tween.style`.
    fn animate_to(&self, target: &ElementId, tween: &Tween) -> Result<(), MotionError>;

    /// Apply `style` immediately, with no transition.
    fn set(&self, target: &ElementId, style: &Style) -> Result<(), MotionError>;
}
