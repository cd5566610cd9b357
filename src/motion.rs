//! CSS-backed animation engine and the motion context used by components.
//!
//! The engine keeps, per element, the style it is heading toward and how to
//! get there. Components render that as inline CSS; the webview's transition
//! engine does the interpolation, so a new target always retargets from the
//! element's current position.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::motion::{AnimationEngine, ElementId, MotionError, MotionEvent, Style, Tween};
use folio_core::ViewportAnimator;

/// Everything the engine knows about one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementMotion {
    pub style: Style,
    /// CSS `transition` value for the latest tween
    pub transition: Option<String>,
    /// Latest yoyo pulse and how many have been played
    pub pulse: Option<(Tween, u64)>,
}

impl ElementMotion {
    pub fn to_css(&self) -> String {
        let mut css = self.style.to_css();

        if let Some(transition) = &self.transition {
            css.push_str(&format!(" transition: {};", transition));
        }

        if let Some((tween, generation)) = &self.pulse {
            // Alternate between two identical keyframes so every pulse restarts
            let name = if generation % 2 == 0 { "folio-pulse-a" } else { "folio-pulse-b" };
            let scale = tween.style.scale.unwrap_or(1.0);
            css.push_str(&format!(
                " --pulse-scale: {}; animation: {} {}ms {} {} alternate;",
                scale,
                name,
                tween.duration.as_millis(),
                tween.easing.css(),
                tween.repeat + 1,
            ));
        }

        css.trim_start().to_string()
    }
}

pub type MotionStyles = HashMap<ElementId, ElementMotion>;

fn element_css(styles: &MotionStyles, id: &ElementId, initial: Style) -> String {
    match styles.get(id) {
        Some(motion) => motion.to_css(),
        None => initial.to_css(),
    }
}

/// [`AnimationEngine`] that writes target styles into a reactive store.
#[derive(Clone, Copy)]
pub struct CssMotionEngine {
    styles: SyncSignal<MotionStyles>,
}

impl CssMotionEngine {
    /// Fails when motion has been switched off, which leaves the page static.
    pub fn try_new(styles: SyncSignal<MotionStyles>, enabled: bool) -> Result<Self, MotionError> {
        if !enabled {
            return Err(MotionError::Unavailable(
                "motion disabled by configuration".to_string(),
            ));
        }
        Ok(Self { styles })
    }
}

impl AnimationEngine for CssMotionEngine {
    fn animate_to(&self, target: &ElementId, tween: &Tween) -> Result<(), MotionError> {
        let mut styles = self.styles;
        let mut styles = styles
            .try_write()
            .map_err(|e| MotionError::Unavailable(e.to_string()))?;
        let entry = styles.entry(target.clone()).or_default();

        if tween.yoyo {
            let generation = entry.pulse.map(|(_, g)| g + 1).unwrap_or(0);
            entry.pulse = Some((*tween, generation));
        } else {
            entry.style.merge(&tween.style);
            entry.transition = Some(tween.transition_css());
        }
        Ok(())
    }

    fn set(&self, target: &ElementId, style: &Style) -> Result<(), MotionError> {
        let mut styles = self.styles;
        let mut styles = styles
            .try_write()
            .map_err(|e| MotionError::Unavailable(e.to_string()))?;
        let entry = styles.entry(target.clone()).or_default();
        entry.style.merge(style);
        entry.transition = None;
        Ok(())
    }
}

/// Handle components use to register elements and forward their events.
#[derive(Clone, Copy)]
pub struct Motion {
    animator: Signal<ViewportAnimator>,
    styles: SyncSignal<MotionStyles>,
    sections: Signal<HashMap<ElementId, Rc<MountedData>>>,
    viewport: Signal<Option<Rc<MountedData>>>,
    scan: Signal<ScanState>,
}

/// Section position scan bookkeeping
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    running: bool,
    pending: bool,
}

impl Motion {
    /// Bind every registered element. Call once the page has rendered.
    pub fn attach(mut self) {
        self.animator.write().on_mount();
    }

    /// Drop every listener. Call once when the page unmounts.
    pub fn detach(mut self) {
        if let Ok(mut animator) = self.animator.try_write() {
            animator.detach();
        }
    }

    pub fn register_section(mut self, id: ElementId, node: Rc<MountedData>) {
        self.animator.write().register_section(id.clone());
        self.sections.write().insert(id, node);
    }

    pub fn register_card(mut self, id: ElementId) {
        self.animator.write().register_card(id);
    }

    pub fn register_gallery_item(mut self, id: ElementId) {
        self.animator.write().register_gallery_item(id);
    }

    pub fn register_nav_item(mut self, id: ElementId) {
        self.animator.write().register_nav_item(id);
    }

    pub fn set_nav_panel(mut self, id: ElementId) {
        self.animator.write().set_nav_panel(id);
    }

    pub fn dispatch(mut self, id: &ElementId, event: MotionEvent) {
        self.animator.write().dispatch(id, event);
    }

    pub fn nav_panel_toggled(mut self, open: bool) {
        self.animator.write().nav_panel_toggled(open);
    }

    /// Forget an element whose component went away.
    pub fn unmount(mut self, id: &ElementId) {
        if let Ok(mut animator) = self.animator.try_write() {
            animator.unmount(id);
        }
        if let Ok(mut sections) = self.sections.try_write() {
            sections.remove(id);
        }
    }

    /// Scrolling container whose height is the viewport.
    pub fn set_viewport(mut self, node: Rc<MountedData>) {
        self.viewport.set(Some(node));
    }

    /// Re-check section positions after a scroll, mount or attach.
    ///
    /// Requests arriving while a scan runs are folded into one more pass.
    pub fn refresh(mut self) {
        if self.is_degraded() {
            return;
        }

        let mut scan = self.scan.write();
        scan.pending = true;
        if scan.running {
            return;
        }
        scan.running = true;
        drop(scan);

        spawn(async move {
            loop {
                let pending = std::mem::take(&mut self.scan.write().pending);
                if !pending {
                    break;
                }
                let Some(viewport) = self.viewport.peek().clone() else {
                    break;
                };
                match viewport.get_client_rect().await {
                    Ok(rect) => self.check_sections(rect.size.height).await,
                    Err(e) => {
                        tracing::debug!(error = ?e, "Viewport rect unavailable");
                        break;
                    }
                }
            }
            self.scan.write().running = false;
        });
    }

    /// Query every section's position and feed the scroll observer.
    async fn check_sections(mut self, viewport_height: f64) {
        let nodes: Vec<(ElementId, Rc<MountedData>)> = self
            .sections
            .peek()
            .iter()
            .map(|(id, node)| (id.clone(), node.clone()))
            .collect();

        for (id, node) in nodes {
            match node.get_client_rect().await {
                Ok(rect) => {
                    self.animator
                        .write()
                        .observe_scroll(&id, rect.origin.y, viewport_height);
                }
                Err(e) => {
                    tracing::debug!(element = %id, error = ?e, "Section rect unavailable, treating as unmounted");
                    self.unmount(&id);
                }
            }
        }
    }

    /// Inline style for an element, empty when motion is off.
    ///
    /// Until the engine has written anything for `id`, the element shows
    /// `initial` so it never flashes its resting look before registration.
    pub fn style_for(&self, id: &ElementId, initial: Style) -> String {
        if self.is_degraded() {
            return String::new();
        }
        element_css(&self.styles.read(), id, initial)
    }

    pub fn is_degraded(&self) -> bool {
        self.animator.peek().is_degraded()
    }
}

/// Create the engine and animator and provide them to the component tree.
///
/// With `enabled == false` the engine refuses to start and the page renders
/// statically.
pub fn use_motion_provider(enabled: bool) -> Motion {
    let styles = use_signal_sync(MotionStyles::new);
    let animator = use_signal(move || {
        let engine = CssMotionEngine::try_new(styles, enabled)
            .map(|engine| Arc::new(engine) as Arc<dyn AnimationEngine>);
        ViewportAnimator::from_engine(engine)
    });
    let sections = use_signal(HashMap::new);
    let viewport = use_signal(|| None);
    let scan = use_signal(ScanState::default);

    use_context_provider(|| Motion {
        animator,
        styles,
        sections,
        viewport,
        scan,
    })
}

/// Motion handle provided by the page root.
pub fn use_motion() -> Motion {
    use_context::<Motion>()
}

/// Inline style of one element.
///
/// The memo still recomputes on every engine write, but the calling
/// component only re-renders when its own style string changes.
pub fn use_element_style(id: ElementId, initial: Style) -> Memo<String> {
    let motion = use_motion();
    use_memo(move || motion.style_for(&id, initial))
}
