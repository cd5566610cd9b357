//! Auto-advance controller for the slideshow.
//!
//! The controller owns the only autonomous activity on the page: a periodic
//! task that advances the slide index. The task is cancelled by
//! [`SlideshowController::teardown`], or when the controller is dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::{Slide, Slideshow};
use crate::error::{FolioError, FolioResult};

/// Default time between slide changes
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Running slideshow with a cancellable auto-advance timer.
///
/// # Example
///
/// ```ignore
/// let controller = SlideshowController::start(slides, SLIDE_INTERVAL)?;
/// let mut changes = controller.subscribe();
///
/// while changes.changed().await.is_ok() {
///     render(controller.snapshot());
/// }
///
/// controller.teardown();
/// ```
pub struct SlideshowController {
    state: Arc<Mutex<Slideshow>>,
    index_rx: watch::Receiver<usize>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SlideshowController {
    /// Validate the slides and spawn the auto-advance task.
    ///
    /// Must be called from within a tokio runtime. The first tick fires one
    /// full `period` after start.
    pub fn start(slides: Vec<Slide>, period: Duration) -> FolioResult<Self> {
        if period.is_zero() {
            return Err(FolioError::Configuration(
                "slide interval must be greater than zero".to_string(),
            ));
        }

        let slideshow = Slideshow::new(slides)?;

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            FolioError::ResourceUnavailable(format!("no async runtime for slideshow timer: {}", e))
        })?;

        let slide_count = slideshow.len();
        let state = Arc::new(Mutex::new(slideshow));
        let (index_tx, index_rx) = watch::channel(0);
        let cancel = CancellationToken::new();

        let task = runtime.spawn(run_auto_advance(
            state.clone(),
            index_tx,
            cancel.clone(),
            period,
        ));

        tracing::info!(
            slides = slide_count,
            period_ms = period.as_millis() as u64,
            "Slideshow started"
        );

        Ok(Self {
            state,
            index_rx,
            cancel,
            task: Some(task),
        })
    }

    /// Receiver that observes every index change.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_rx.clone()
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().current_index()
    }

    pub fn active_slide(&self) -> Slide {
        self.state.lock().active_slide().clone()
    }

    /// Copy of the current state, for rendering.
    pub fn snapshot(&self) -> Slideshow {
        self.state.lock().clone()
    }

    /// Whether the auto-advance task is still scheduled.
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
            && self
                .task
                .as_ref()
                .map(|task| !task.is_finished())
                .unwrap_or(false)
    }

    /// Cancel the auto-advance timer. The index stays where it is.
    pub fn teardown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            self.cancel.cancel();
            task.abort();
            tracing::info!(
                index = self.state.lock().current_index(),
                "Slideshow timer cancelled"
            );
        }
    }
}

impl Drop for SlideshowController {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_auto_advance(
    state: Arc<Mutex<Slideshow>>,
    index_tx: watch::Sender<usize>,
    cancel: CancellationToken,
    period: Duration,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let index = state.lock().tick();
                tracing::debug!(index, "Slideshow advanced");
                index_tx.send_replace(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: u32) -> Vec<Slide> {
        (1..=n).map(|i| Slide::new(i, format!("{}.jpg", i))).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let controller = SlideshowController::start(slides(4), SLIDE_INTERVAL).unwrap();

        time::sleep(Duration::from_millis(4900)).await;
        assert_eq!(controller.current_index(), 0);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(controller.current_index(), 1);

        controller.teardown();
    }

    #[tokio::test]
    async fn test_empty_slides_do_not_spawn() {
        let result = SlideshowController::start(Vec::new(), SLIDE_INTERVAL);
        assert!(matches!(result, Err(FolioError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_zero_period_rejected() {
        let result = SlideshowController::start(slides(2), Duration::ZERO);
        assert!(matches!(result, Err(FolioError::Configuration(_))));
    }

    #[test]
    fn test_start_without_runtime() {
        let result = SlideshowController::start(slides(2), SLIDE_INTERVAL);
        assert!(matches!(result, Err(FolioError::ResourceUnavailable(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let controller = SlideshowController::start(slides(3), SLIDE_INTERVAL).unwrap();
        let state = controller.state.clone();
        drop(controller);

        time::sleep(SLIDE_INTERVAL * 3).await;
        assert_eq!(state.lock().current_index(), 0);
    }
}
