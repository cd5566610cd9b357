//! Viewport Animation Trigger.
//!
//! Binds registered page elements to cosmetic transitions driven by scroll,
//! hover and click events. Nothing here can fail the page: unknown or stale
//! elements and engine failures all end as silent no-ops.
//!
//! Once [`ViewportAnimator::is_degraded`] is true the host renders every
//! element at [`ViewportAnimator::resting_style`]. The animator still tries
//! to push resting styles through the engine when it degrades, but an engine
//! that has gone away may not apply them.

use std::sync::Arc;

use super::observer::ScrollObserver;
use super::presets;
use super::registry::{Registration, Registry};
use super::{AnimationEngine, Category, ElementId, MotionError, MotionEvent, Style, Tween};

/// Lifecycle of the animator's listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Collecting registrations; events are ignored
    Registering,
    /// Handlers bound; events are dispatched
    Attached,
    /// Page unmounted; everything is ignored
    Detached,
}

pub struct ViewportAnimator {
    engine: Option<Arc<dyn AnimationEngine>>,
    registry: Registry,
    observer: ScrollObserver,
    nav_panel: Option<ElementId>,
    phase: Phase,
    degraded: bool,
}

impl ViewportAnimator {
    pub fn new(engine: Arc<dyn AnimationEngine>) -> Self {
        Self {
            engine: Some(engine),
            registry: Registry::new(),
            observer: ScrollObserver::default(),
            nav_panel: None,
            phase: Phase::Registering,
            degraded: false,
        }
    }

    /// Animator for a page whose animation engine failed to initialize.
    /// Elements keep their resting style and no transitions are issued.
    pub fn degraded(reason: &str) -> Self {
        tracing::warn!(reason, "Animation engine unavailable, motion disabled");
        Self {
            engine: None,
            registry: Registry::new(),
            observer: ScrollObserver::default(),
            nav_panel: None,
            phase: Phase::Registering,
            degraded: true,
        }
    }

    /// Build from the outcome of engine initialization.
    pub fn from_engine(engine: Result<Arc<dyn AnimationEngine>, MotionError>) -> Self {
        match engine {
            Ok(engine) => Self::new(engine),
            Err(e) => Self::degraded(&e.to_string()),
        }
    }

    pub fn register_section(&mut self, id: impl Into<ElementId>) -> bool {
        self.register(id.into(), Category::Section)
    }

    pub fn register_card(&mut self, id: impl Into<ElementId>) -> bool {
        self.register(id.into(), Category::Card)
    }

    pub fn register_gallery_item(&mut self, id: impl Into<ElementId>) -> bool {
        self.register(id.into(), Category::GalleryItem)
    }

    pub fn register_nav_item(&mut self, id: impl Into<ElementId>) -> bool {
        self.register(id.into(), Category::NavItem)
    }

    /// Register the collapsible mobile navigation panel.
    pub fn set_nav_panel(&mut self, id: impl Into<ElementId>) {
        let id = id.into();
        if self.phase == Phase::Attached && !self.degraded {
            self.apply(&id, &id, &presets::panel_collapsed());
        }
        self.nav_panel = Some(id);
    }

    /// Returns true only when a new binding was created.
    fn register(&mut self, id: ElementId, category: Category) -> bool {
        if self.phase == Phase::Detached {
            return false;
        }

        match self.registry.register(id.clone(), category) {
            Registration::Conflict(existing) => {
                tracing::warn!(
                    element = %id,
                    requested = %category,
                    registered = %existing,
                    "Element already registered under another category"
                );
                false
            }
            registration if registration.is_new_binding() => {
                if self.phase == Phase::Attached {
                    self.bind(&id, category);
                }
                true
            }
            _ => false,
        }
    }

    /// Bind handlers for every registered element and put each one in its
    /// initial state.
    pub fn on_mount(&mut self) {
        if self.phase != Phase::Registering {
            return;
        }
        self.phase = Phase::Attached;

        for category in Category::ALL {
            let ids: Vec<ElementId> = self.registry.mounted(category).cloned().collect();
            for id in ids {
                self.bind(&id, category);
            }
        }

        if let Some(panel) = self.nav_panel.clone() {
            if !self.degraded {
                self.apply(&panel, &panel, &presets::panel_collapsed());
            }
        }

        tracing::info!(
            elements = self.registry.len(),
            degraded = self.degraded,
            "Viewport animations attached"
        );
    }

    fn bind(&mut self, id: &ElementId, category: Category) {
        let target = presets::motion_target(category, id);
        let style = if self.degraded {
            presets::resting(category)
        } else {
            presets::initial(category)
        };
        self.apply(id, &target, &style);
    }

    /// Feed a section's top edge position while scrolling.
    pub fn observe_scroll(&mut self, id: &ElementId, top: f64, viewport_height: f64) -> bool {
        if self.phase != Phase::Attached || self.degraded {
            return false;
        }
        if self.registry.category_of(id) != Some(Category::Section) || !self.registry.is_mounted(id)
        {
            return false;
        }

        match self.observer.observe(id, top, viewport_height) {
            Some(event) => self.dispatch(id, event),
            None => false,
        }
    }

    /// Play the reaction of `id`'s category to `event`.
    ///
    /// Returns whether a transition was issued.
    pub fn dispatch(&mut self, id: &ElementId, event: MotionEvent) -> bool {
        if self.phase != Phase::Attached || self.degraded {
            return false;
        }

        let Some(category) = self.registry.category_of(id) else {
            tracing::trace!(element = %id, ?event, "Event for unregistered element ignored");
            return false;
        };
        if !self.registry.is_mounted(id) {
            tracing::trace!(element = %id, ?event, "Event for unmounted element ignored");
            return false;
        }

        let Some(tween) = presets::reaction(category, event) else {
            return false;
        };

        let target = presets::motion_target(category, id);
        tracing::debug!(element = %id, %category, ?event, "Dispatching animation");
        self.animate(id, &target, &tween)
    }

    /// Follow the navigation collaborator's panel state.
    pub fn nav_panel_toggled(&mut self, open: bool) -> bool {
        if self.phase != Phase::Attached || self.degraded {
            return false;
        }
        let Some(panel) = self.nav_panel.clone() else {
            return false;
        };
        self.animate(&panel, &panel, &presets::panel_toggle(open))
    }

    /// Mark an element as unmounted; later events for it are ignored.
    pub fn unmount(&mut self, id: &ElementId) -> bool {
        self.observer.forget(id);
        self.registry.mark_unmounted(id)
    }

    /// Drop every listener. Called once when the page unmounts.
    pub fn detach(&mut self) {
        if self.phase == Phase::Detached {
            return;
        }
        self.phase = Phase::Detached;
        self.observer.clear();
        tracing::info!("Viewport animations detached");
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_attached(&self) -> bool {
        self.phase == Phase::Attached
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Static style an element shows when motion is disabled.
    pub fn resting_style(&self, id: &ElementId) -> Option<Style> {
        self.registry.category_of(id).map(presets::resting)
    }

    fn animate(&mut self, owner: &ElementId, target: &ElementId, tween: &Tween) -> bool {
        let Some(engine) = self.engine.clone() else {
            return false;
        };
        match engine.animate_to(target, tween) {
            Ok(()) => true,
            Err(e) => {
                self.handle_engine_error(owner, e);
                false
            }
        }
    }

    fn apply(&mut self, owner: &ElementId, target: &ElementId, style: &Style) {
        let Some(engine) = self.engine.clone() else {
            return;
        };
        if let Err(e) = engine.set(target, style) {
            self.handle_engine_error(owner, e);
        }
    }

    fn handle_engine_error(&mut self, owner: &ElementId, err: MotionError) {
        match err {
            MotionError::StaleElement(_) => {
                tracing::debug!(element = %owner, "Element went stale, dropping its binding");
                self.unmount(owner);
            }
            MotionError::Unavailable(reason) => {
                if !self.degraded {
                    tracing::warn!(%reason, "Animation engine failed, falling back to static styles");
                    self.enter_degraded();
                }
            }
        }
    }

    /// Best effort: push every element to its resting style, then stop animating.
    fn enter_degraded(&mut self) {
        self.degraded = true;
        self.observer.clear();

        let Some(engine) = self.engine.take() else {
            return;
        };

        let mut failed = 0usize;
        for category in Category::ALL {
            for id in self.registry.mounted(category) {
                let target = presets::motion_target(category, id);
                if engine.set(&target, &presets::resting(category)).is_err() {
                    failed += 1;
                }
            }
        }
        if failed > 0 {
            tracing::debug!(failed, "Resting styles not applied, host renders them instead");
        }
    }
}

impl std::fmt::Debug for ViewportAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportAnimator")
            .field("registry", &self.registry)
            .field("nav_panel", &self.nav_panel)
            .field("phase", &self.phase)
            .field("degraded", &self.degraded)
            .finish_non_exhaustive()
    }
}
