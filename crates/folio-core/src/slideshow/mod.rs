//! Slideshow state and auto-advance controller.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Slideshow: validated slide list + current index         │
//! │  ├── tick(): current = (current + 1) mod len             │
//! │  └── frames(): slide i is active iff i == current        │
//! │                                                          │
//! │  SlideshowController: owns the periodic auto-advance     │
//! │  ├── start(): spawn timer, first tick after one period   │
//! │  ├── subscribe(): watch channel of index changes         │
//! │  └── teardown(): cancel timer (also on drop)             │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod controller;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

pub use controller::{SlideshowController, SLIDE_INTERVAL};

/// Unique identifier of a slide within a slideshow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide-{}", self.0)
    }
}

/// One background image in the rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    /// Image URL or local asset path
    pub source: String,
}

impl Slide {
    pub fn new(id: u32, source: impl Into<String>) -> Self {
        Self {
            id: SlideId(id),
            source: source.into(),
        }
    }
}

/// A slide as it should be rendered at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFrame<'a> {
    pub index: usize,
    pub slide: &'a Slide,
    pub active: bool,
}

impl SlideFrame<'_> {
    /// CSS class list for the slide element
    pub fn class(&self) -> &'static str {
        if self.active {
            "slide active"
        } else {
            "slide"
        }
    }
}

/// Fixed, non-empty slide list plus the rotation index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
}

impl Slideshow {
    /// Validate the slide list and start at index 0.
    ///
    /// Fails with [`FolioError::Configuration`] when the list is empty or
    /// two slides share an id.
    pub fn new(slides: Vec<Slide>) -> FolioResult<Self> {
        if slides.is_empty() {
            return Err(FolioError::Configuration(
                "slideshow requires at least one slide".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(FolioError::Configuration(format!(
                    "duplicate slide id: {}",
                    slide.id
                )));
            }
        }

        Ok(Self { slides, current: 0 })
    }

    /// Advance to the next slide, wrapping after the last one.
    pub fn tick(&mut self) -> usize {
        self.current = (self.current + 1) % self.slides.len();
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; an empty slideshow cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Every slide in order, with exactly one marked active.
    pub fn frames(&self) -> impl Iterator<Item = SlideFrame<'_>> {
        self.slides.iter().enumerate().map(move |(index, slide)| SlideFrame {
            index,
            slide,
            active: index == self.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: u32) -> Vec<Slide> {
        (1..=n)
            .map(|i| Slide::new(i, format!("https://img.example/{}.jpg", i)))
            .collect()
    }

    #[test]
    fn test_empty_slides_rejected() {
        let err = Slideshow::new(Vec::new()).unwrap_err();
        assert!(matches!(err, FolioError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let list = vec![Slide::new(1, "a.jpg"), Slide::new(1, "b.jpg")];
        assert!(matches!(
            Slideshow::new(list),
            Err(FolioError::Configuration(_))
        ));
    }

    #[test]
    fn test_starts_at_zero() {
        let show = Slideshow::new(slides(4)).unwrap();
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.active_slide().id, SlideId(1));
    }

    #[test]
    fn test_tick_wraps() {
        let mut show = Slideshow::new(slides(4)).unwrap();
        for _ in 0..4 {
            show.tick();
        }
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.tick(), 1);
    }

    #[test]
    fn test_single_slide_stays_active() {
        let mut show = Slideshow::new(slides(1)).unwrap();
        assert_eq!(show.tick(), 0);
        assert_eq!(show.frames().filter(|f| f.active).count(), 1);
    }

    #[test]
    fn test_three_slides_seven_ticks() {
        let list = vec![
            Slide::new(1, "A"),
            Slide::new(2, "B"),
            Slide::new(3, "C"),
        ];
        let mut show = Slideshow::new(list).unwrap();
        for _ in 0..7 {
            show.tick();
        }
        assert_eq!(show.current_index(), 1);
        assert_eq!(show.active_slide().source, "B");
    }

    #[test]
    fn test_frames_mark_one_active() {
        let mut show = Slideshow::new(slides(5)).unwrap();
        show.tick();
        show.tick();

        let frames: Vec<_> = show.frames().collect();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames.iter().filter(|f| f.active).count(), 1);
        assert!(frames[2].active);
        assert_eq!(frames[2].class(), "slide active");
        assert_eq!(frames[0].class(), "slide");
    }
}
