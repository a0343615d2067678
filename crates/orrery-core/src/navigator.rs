//! Navigation arbiter
//!
//! The [`Navigator`] owns the camera pose and is ticked once per rendered
//! frame. It is in one of two states:
//!
//! - `Free`: keyboard free flight moves the rig and the manual orbit
//!   controller is allowed to rotate, pan and zoom.
//! - `Transitioning`: a fly-to is in progress. It alone moves the camera;
//!   held keys are still tracked but have no effect, and the orbit
//!   controller is locked out.
//!
//! Selecting a target always starts a fresh transition from the current
//! pose, even mid-flight. There is no other way to leave `Transitioning`
//! early.

use std::time::Duration;
use tracing::{debug, info};

use crate::anchor::SceneQuery;
use crate::config::NavigationConfig;
use crate::flight::FreeFlight;
use crate::input::{KeyBindings, MovementState};
use crate::pose::CameraPose;
use crate::target::{TargetDescriptor, TargetId};
use crate::transition::{Transition, TransitionSettings};

/// Who currently drives the camera
#[derive(Debug, Clone, PartialEq)]
pub enum NavState {
    Free,
    Transitioning(Transition),
}

/// Notable outcomes of a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A transition finished on this tick
    Arrived(TargetId),
}

type CompletionCallback = Box<dyn FnMut() + Send + Sync>;

pub struct Navigator {
    pose: CameraPose,
    state: NavState,
    transition_settings: TransitionSettings,
    flight: FreeFlight,
    bindings: KeyBindings,
    on_complete: Option<CompletionCallback>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("pose", &self.pose)
            .field("state", &self.state)
            .field("transition_settings", &self.transition_settings)
            .field("flight", &self.flight)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Navigator {
    pub fn new(pose: CameraPose, config: &NavigationConfig) -> Self {
        Self {
            pose,
            state: NavState::Free,
            transition_settings: config.transition_settings(),
            flight: config.free_flight(),
            bindings: config.keys.clone(),
            on_complete: None,
        }
    }

    /// Register the callback run each time a transition finishes
    pub fn on_complete(&mut self, callback: impl FnMut() + Send + Sync + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, NavState::Transitioning(_))
    }

    /// Whether the manual orbit controller may act this frame
    pub fn orbit_enabled(&self) -> bool {
        !self.is_transitioning()
    }

    /// Mutable pose for the manual orbit controller, only while it is enabled
    pub fn orbit_pose_mut(&mut self) -> Option<&mut CameraPose> {
        match self.state {
            NavState::Free => Some(&mut self.pose),
            NavState::Transitioning(_) => None,
        }
    }

    /// Target of the transition in progress
    pub fn active_target(&self) -> Option<&TargetDescriptor> {
        match &self.state {
            NavState::Transitioning(transition) => Some(transition.target()),
            NavState::Free => None,
        }
    }

    /// Start flying to `target`, superseding any transition in progress.
    ///
    /// The new flight starts from the current (possibly mid-flight) pose, so
    /// there is no jump at the moment of reselection. Returns the id of the
    /// superseded target, whose completion will never fire.
    pub fn select(&mut self, target: TargetDescriptor, now: Duration) -> Option<TargetId> {
        info!(target = %target.id, kind = ?target.kind, "Flying to target");

        let transition = Transition::start(target, &self.pose, now, &self.transition_settings);
        debug!(
            duration_ms = transition.duration().as_millis() as u64,
            "Transition started"
        );
        let previous = std::mem::replace(&mut self.state, NavState::Transitioning(transition));

        match previous {
            NavState::Transitioning(old) => {
                debug!(target = %old.target().id, "Superseded transition in progress");
                Some(old.target().id.clone())
            }
            NavState::Free => None,
        }
    }

    /// Advance one frame.
    ///
    /// `now` drives transitions, `dt` (seconds since last frame) drives free
    /// flight. Returns [`NavEvent::Arrived`] on the tick a transition ends.
    pub fn tick(
        &mut self,
        now: Duration,
        dt: f32,
        keys: &MovementState,
        scene: &impl SceneQuery,
    ) -> Option<NavEvent> {
        match &self.state {
            NavState::Free => {
                let input = keys.input(&self.bindings);
                self.flight.tick(&mut self.pose, &input, dt);
                None
            }
            NavState::Transitioning(transition) => {
                let frame = transition.sample(now, scene);
                self.pose = frame.pose;
                if !frame.done {
                    return None;
                }

                let arrived = transition.target().id.clone();
                let flight_time = now.saturating_sub(transition.start_time());
                self.state = NavState::Free;
                debug!(target = %arrived, ?flight_time, "Transition finished");

                if let Some(callback) = self.on_complete.as_mut() {
                    callback();
                }
                Some(NavEvent::Arrived(arrived))
            }
        }
    }
}
