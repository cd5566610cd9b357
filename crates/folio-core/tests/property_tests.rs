//! Property-based tests for the slideshow and hover convergence
//!
//! Uses proptest to verify the index arithmetic and that repeated pointer
//! toggling always settles on the last event's target.

use std::sync::Arc;

use folio_core::motion::{presets, Length, MotionEvent, RecordingEngine, ViewportAnimator};
use folio_core::{ElementId, Slide, Slideshow};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide::new(i as u32, format!("slide-{}.jpg", i)))
        .collect()
}

/// Sequence of hover events
fn hover_strategy(max: usize) -> impl Strategy<Value = Vec<MotionEvent>> {
    prop::collection::vec(
        prop_oneof![
            Just(MotionEvent::PointerEnter),
            Just(MotionEvent::PointerLeave),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After k ticks the index is k mod n
    #[test]
    fn index_after_k_ticks(n in 1usize..32, k in 0usize..500) {
        let mut show = Slideshow::new(slides(n)).unwrap();
        for _ in 0..k {
            show.tick();
        }
        prop_assert_eq!(show.current_index(), k % n);
    }

    /// Exactly one slide is active at any point of the rotation
    #[test]
    fn exactly_one_active(n in 1usize..32, k in 0usize..100) {
        let mut show = Slideshow::new(slides(n)).unwrap();
        for _ in 0..k {
            show.tick();
        }
        let active: Vec<usize> = show.frames().filter(|f| f.active).map(|f| f.index).collect();
        prop_assert_eq!(active, vec![show.current_index()]);
        prop_assert_eq!(show.frames().count(), n);
    }

    /// Any number of enter/leave pairs leaves a card at rest
    #[test]
    fn card_pairs_converge_to_rest(pairs in 0usize..40) {
        let engine = Arc::new(RecordingEngine::new());
        let mut animator = ViewportAnimator::new(engine.clone());
        let card = ElementId::new("card");
        animator.register_card(card.clone());
        animator.on_mount();

        for _ in 0..pairs {
            animator.dispatch(&card, MotionEvent::PointerEnter);
            animator.dispatch(&card, MotionEvent::PointerLeave);
        }

        prop_assert_eq!(engine.style_of(&card), presets::card_rest());
    }

    /// The last hover event alone decides a caption's final offset
    #[test]
    fn caption_follows_last_event(events in hover_strategy(30)) {
        let engine = Arc::new(RecordingEngine::new());
        let mut animator = ViewportAnimator::new(engine.clone());
        let tile = ElementId::new("tile");
        animator.register_gallery_item(tile.clone());
        animator.on_mount();

        for event in &events {
            animator.dispatch(&tile, *event);
        }

        let expected = match events.last() {
            Some(MotionEvent::PointerEnter) => Length::Percent(0.0),
            _ => Length::Percent(100.0),
        };
        prop_assert_eq!(engine.style_of(&tile.part("caption")).translate_y, Some(expected));
    }

    /// Registering the same ids repeatedly never creates extra bindings
    #[test]
    fn registration_is_idempotent(ids in prop::collection::vec(0u8..8, 0..40)) {
        let engine = Arc::new(RecordingEngine::new());
        let mut animator = ViewportAnimator::new(engine);

        for id in &ids {
            animator.register_card(format!("card-{}", id));
        }

        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(animator.registry().len(), unique.len());
    }
}
