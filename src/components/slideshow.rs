//! Slideshow Component
//!
//! Cross-fading background images driven by a [`SlideshowController`].
//! The controller owns the timer; this component only mirrors the active
//! index into a signal and tears the controller down on unmount.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{Slide, SlideshowController};

/// Controller slot shared between the watcher and the drop hook
type ControllerSlot = Rc<RefCell<Option<SlideshowController>>>;

#[component]
pub fn Slideshow(slides: Vec<Slide>, interval: Duration) -> Element {
    let slot: ControllerSlot = use_hook(|| {
        let controller = match SlideshowController::start(slides.clone(), interval) {
            Ok(controller) => Some(controller),
            Err(e) => {
                tracing::warn!(error = %e, "Slideshow not started");
                None
            }
        };
        Rc::new(RefCell::new(controller))
    });

    let mut current = use_signal(|| 0usize);

    {
        let slot = slot.clone();
        use_future(move || {
            let receiver = slot.borrow().as_ref().map(SlideshowController::subscribe);
            async move {
                let Some(mut receiver) = receiver else {
                    return;
                };
                while receiver.changed().await.is_ok() {
                    let index = *receiver.borrow_and_update();
                    current.set(index);
                }
            }
        });
    }

    {
        let slot = slot.clone();
        use_drop(move || {
            if let Some(controller) = slot.borrow_mut().take() {
                controller.teardown();
            }
        });
    }

    // Re-render on every index change
    let _index = current();
    let snapshot = slot.borrow().as_ref().map(SlideshowController::snapshot);

    let Some(show) = snapshot else {
        return rsx! {
            div { class: "container my-5",
                div { class: "slideshow slideshow-empty shadow-lg" }
            }
        };
    };

    rsx! {
        div { class: "container my-5",
            div { class: "slideshow shadow-lg",
                for frame in show.frames() {
                    div {
                        key: "{frame.slide.id}",
                        class: "{frame.class()}",
                        style: "background-image: url({frame.slide.source});",
                    }
                }
            }
        }
    }
}
