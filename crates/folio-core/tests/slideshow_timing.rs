//! Slideshow auto-advance timing tests
//!
//! Run on a paused tokio clock so five-second periods elapse instantly and
//! deterministically.

use std::time::Duration;

use folio_core::{FolioError, Slide, SlideshowController, SLIDE_INTERVAL};
use tokio::time;

/// Margin past a tick boundary so the tick has fired before we look
const SETTLE: Duration = Duration::from_millis(100);

fn slides(n: u32) -> Vec<Slide> {
    (1..=n)
        .map(|i| Slide::new(i, format!("https://img.example/{}.jpg", i)))
        .collect()
}

async fn elapse_ticks(k: u32) {
    time::sleep(SLIDE_INTERVAL * k + SETTLE).await;
}

// ============================================================================
// Advancing
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_index_after_k_ticks() {
    let controller = SlideshowController::start(slides(4), SLIDE_INTERVAL).unwrap();
    assert_eq!(controller.current_index(), 0);

    elapse_ticks(4).await;
    assert_eq!(controller.current_index(), 0, "n=4, k=4 wraps to 0");

    time::sleep(SLIDE_INTERVAL).await;
    assert_eq!(controller.current_index(), 1, "n=4, k=5 lands on 1");

    controller.teardown();
}

#[tokio::test(start_paused = true)]
async fn test_three_slides_seven_ticks_shows_b() {
    let list = vec![
        Slide::new(1, "A"),
        Slide::new(2, "B"),
        Slide::new(3, "C"),
    ];
    let controller = SlideshowController::start(list, SLIDE_INTERVAL).unwrap();

    elapse_ticks(7).await;
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.active_slide().source, "B");

    controller.teardown();
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_every_change() {
    let controller = SlideshowController::start(slides(3), SLIDE_INTERVAL).unwrap();
    let mut changes = controller.subscribe();
    assert_eq!(*changes.borrow_and_update(), 0);

    let mut seen = Vec::new();
    for _ in 0..4 {
        changes.changed().await.unwrap();
        seen.push(*changes.borrow_and_update());
    }
    assert_eq!(seen, vec![1, 2, 0, 1]);

    controller.teardown();
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_has_one_active_frame() {
    let controller = SlideshowController::start(slides(5), SLIDE_INTERVAL).unwrap();
    time::sleep(SETTLE).await;

    for k in 0..12u32 {
        let snapshot = controller.snapshot();
        let active: Vec<_> = snapshot.frames().filter(|f| f.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].index, (k % 5) as usize);
        time::sleep(SLIDE_INTERVAL).await;
    }

    controller.teardown();
}

#[tokio::test(start_paused = true)]
async fn test_custom_period() {
    let period = Duration::from_millis(750);
    let controller = SlideshowController::start(slides(4), period).unwrap();

    time::sleep(period * 3 + SETTLE).await;
    assert_eq!(controller.current_index(), 3);

    controller.teardown();
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_unmount_after_two_ticks_freezes_index() {
    let controller = SlideshowController::start(slides(4), SLIDE_INTERVAL).unwrap();
    let mut changes = controller.subscribe();

    elapse_ticks(2).await;
    assert_eq!(controller.current_index(), 2);
    assert!(controller.is_running());
    assert_eq!(*changes.borrow_and_update(), 2);

    controller.teardown();
    time::sleep(Duration::from_secs(10)).await;

    assert_eq!(*changes.borrow(), 2);
    assert!(
        changes.changed().await.is_err(),
        "timer task must be gone after teardown"
    );
}

#[tokio::test(start_paused = true)]
async fn test_teardown_holds_for_any_multiple_of_period() {
    let controller = SlideshowController::start(slides(4), SLIDE_INTERVAL).unwrap();
    let changes = controller.subscribe();

    elapse_ticks(1).await;
    controller.teardown();

    for multiple in [1u32, 2, 5, 13, 100] {
        time::sleep(SLIDE_INTERVAL * multiple).await;
        assert_eq!(*changes.borrow(), 1, "after {} more periods", multiple);
    }
}

#[tokio::test(start_paused = true)]
async fn test_dropping_controller_stops_timer() {
    let controller = SlideshowController::start(slides(2), SLIDE_INTERVAL).unwrap();
    let changes = controller.subscribe();
    drop(controller);

    elapse_ticks(6).await;
    assert_eq!(*changes.borrow(), 0);
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_empty_slides_rejected_without_timer() {
    let err = SlideshowController::start(Vec::new(), SLIDE_INTERVAL)
        .err()
        .expect("empty slide list must be rejected");
    assert!(matches!(err, FolioError::Configuration(_)));
}
