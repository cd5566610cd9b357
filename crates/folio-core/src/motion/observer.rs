//! Scroll position to viewport-crossing events.

use std::collections::HashMap;

use super::{ElementId, MotionEvent};

/// Fraction of the viewport height a section's top edge must rise above
/// before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.8;

/// Tracks which observed elements are past the reveal line and reports
/// each crossing once, in either direction.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    threshold: f64,
    revealed: HashMap<ElementId, bool>,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl ScrollObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: HashMap::new(),
        }
    }

    /// Feed the element's current top edge (relative to the viewport top).
    ///
    /// Returns `EnterViewport` when the edge first rises above the line,
    /// `ExitViewport` when it drops back below it, and `None` otherwise.
    pub fn observe(
        &mut self,
        id: &ElementId,
        top: f64,
        viewport_height: f64,
    ) -> Option<MotionEvent> {
        if !top.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
            return None;
        }

        let past_line = top < viewport_height * self.threshold;
        let was_revealed = self.revealed.get(id).copied().unwrap_or(false);
        if past_line == was_revealed {
            return None;
        }

        self.revealed.insert(id.clone(), past_line);
        Some(if past_line {
            MotionEvent::EnterViewport
        } else {
            MotionEvent::ExitViewport
        })
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    pub fn forget(&mut self, id: &ElementId) {
        self.revealed.remove(id);
    }

    pub fn clear(&mut self) {
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    #[test]
    fn test_below_line_stays_hidden() {
        let mut observer = ScrollObserver::default();
        let id = ElementId::new("skills");
        assert_eq!(observer.observe(&id, 1200.0, VH), None);
        assert_eq!(observer.observe(&id, 850.0, VH), None);
        assert!(!observer.is_revealed(&id));
    }

    #[test]
    fn test_enter_fires_once() {
        let mut observer = ScrollObserver::default();
        let id = ElementId::new("skills");
        assert_eq!(
            observer.observe(&id, 790.0, VH),
            Some(MotionEvent::EnterViewport)
        );
        assert_eq!(observer.observe(&id, 400.0, VH), None);
        assert_eq!(observer.observe(&id, -300.0, VH), None);
    }

    #[test]
    fn test_reversal_is_retriggerable() {
        let mut observer = ScrollObserver::default();
        let id = ElementId::new("contact");

        for _ in 0..3 {
            assert_eq!(
                observer.observe(&id, 500.0, VH),
                Some(MotionEvent::EnterViewport)
            );
            assert_eq!(
                observer.observe(&id, 900.0, VH),
                Some(MotionEvent::ExitViewport)
            );
        }
    }

    #[test]
    fn test_exact_line_is_not_revealed() {
        let mut observer = ScrollObserver::default();
        let id = ElementId::new("projects");
        assert_eq!(observer.observe(&id, 800.0, VH), None);
    }

    #[test]
    fn test_degenerate_viewport_ignored() {
        let mut observer = ScrollObserver::default();
        let id = ElementId::new("projects");
        assert_eq!(observer.observe(&id, 10.0, 0.0), None);
        assert_eq!(observer.observe(&id, f64::NAN, VH), None);
    }
}
