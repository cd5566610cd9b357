//! Element identity, categories and the events that drive motion.

use std::fmt;

/// Stable identity of a rendered page element.
///
/// Registration and dispatch key on this identity, never on position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity of a named sub-element (e.g. a gallery tile's caption).
    pub fn part(&self, name: &str) -> Self {
        Self(format!("{}::{}", self.0, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of animatable element; selects handlers and presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Section,
    Card,
    GalleryItem,
    NavItem,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Section,
        Category::Card,
        Category::GalleryItem,
        Category::NavItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Section => "section",
            Category::Card => "card",
            Category::GalleryItem => "gallery-item",
            Category::NavItem => "nav-item",
        }
    }

    /// Whether elements of this category react to `event`.
    pub fn handles(&self, event: MotionEvent) -> bool {
        matches!(
            (self, event),
            (Category::Section, MotionEvent::EnterViewport)
                | (Category::Section, MotionEvent::ExitViewport)
                | (Category::Card, MotionEvent::PointerEnter)
                | (Category::Card, MotionEvent::PointerLeave)
                | (Category::GalleryItem, MotionEvent::PointerEnter)
                | (Category::GalleryItem, MotionEvent::PointerLeave)
                | (Category::NavItem, MotionEvent::Click)
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete event dispatched by the host UI runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionEvent {
    EnterViewport,
    ExitViewport,
    PointerEnter,
    PointerLeave,
    Click,
}
