//! Recording animation engine for tests.
//!
//! Records every call and resolves the style each element ends up with once
//! all transitions settle, without touching any real visual state.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use super::{AnimationEngine, ElementId, MotionError, Style, Tween};

/// A single call made against the engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    AnimateTo { target: ElementId, tween: Tween },
    Set { target: ElementId, style: Style },
}

impl EngineCall {
    pub fn target(&self) -> &ElementId {
        match self {
            EngineCall::AnimateTo { target, .. } | EngineCall::Set { target, .. } => target,
        }
    }
}

#[derive(Debug, Default)]
struct RecordingState {
    calls: Vec<EngineCall>,
    settled: HashMap<ElementId, Style>,
    stale: HashSet<ElementId>,
    unavailable: Option<String>,
    /// Only `animate_to` fails; `set` keeps working
    animations_unavailable: Option<String>,
}

#[derive(Debug, Default)]
pub struct RecordingEngine {
    state: Mutex<RecordingState>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.state.lock().calls.clone()
    }

    pub fn calls_for(&self, target: &ElementId) -> Vec<EngineCall> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.target() == target)
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Style `target` rests at once every transition has finished.
    pub fn style_of(&self, target: &ElementId) -> Style {
        self.state
            .lock()
            .settled
            .get(target)
            .copied()
            .unwrap_or_default()
    }

    /// Make every later call on `target` fail as stale.
    pub fn mark_stale(&self, target: &ElementId) {
        self.state.lock().stale.insert(target.clone());
    }

    /// Make every later call fail as if the engine had gone away.
    pub fn fail_unavailable(&self, reason: impl Into<String>) {
        self.state.lock().unavailable = Some(reason.into());
    }

    /// Make every later `animate_to` fail as unavailable while `set` still
    /// applies, like an engine that lost its transition support.
    pub fn fail_animations(&self, reason: impl Into<String>) {
        self.state.lock().animations_unavailable = Some(reason.into());
    }

    fn check(state: &RecordingState, target: &ElementId) -> Result<(), MotionError> {
        if let Some(reason) = &state.unavailable {
            return Err(MotionError::Unavailable(reason.clone()));
        }
        if state.stale.contains(target) {
            return Err(MotionError::StaleElement(target.to_string()));
        }
        Ok(())
    }
}

impl AnimationEngine for RecordingEngine {
    fn animate_to(&self, target: &ElementId, tween: &Tween) -> Result<(), MotionError> {
        let mut state = self.state.lock();
        Self::check(&state, target)?;
        if let Some(reason) = &state.animations_unavailable {
            return Err(MotionError::Unavailable(reason.clone()));
        }

        state.calls.push(EngineCall::AnimateTo {
            target: target.clone(),
            tween: *tween,
        });
        if !tween.returns_to_start() {
            state
                .settled
                .entry(target.clone())
                .or_default()
                .merge(&tween.style);
        }
        Ok(())
    }

    fn set(&self, target: &ElementId, style: &Style) -> Result<(), MotionError> {
        let mut state = self.state.lock();
        Self::check(&state, target)?;

        state.calls.push(EngineCall::Set {
            target: target.clone(),
            style: *style,
        });
        state
            .settled
            .entry(target.clone())
            .or_default()
            .merge(style);
        Ok(())
    }
}
