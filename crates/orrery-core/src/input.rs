//! Keyboard state for free flight
//!
//! Key events arrive asynchronously from the windowing layer and only
//! update [`MovementState`]. The navigator reads a [`FlightInput`] snapshot
//! from it once per tick. Key identity is case-insensitive, so `W` held with
//! caps lock behaves like `w`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Free-flight actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Forward,
    Backward,
    Left,
    Right,
    Boost,
}

/// Key identifiers bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_forward")]
    pub forward: Vec<String>,
    #[serde(default = "default_backward")]
    pub backward: Vec<String>,
    #[serde(default = "default_left")]
    pub left: Vec<String>,
    #[serde(default = "default_right")]
    pub right: Vec<String>,
    #[serde(default = "default_boost")]
    pub boost: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|k| k.to_string()).collect()
}

fn default_forward() -> Vec<String> {
    keys(&["w", "ArrowUp"])
}

fn default_backward() -> Vec<String> {
    keys(&["s", "ArrowDown"])
}

fn default_left() -> Vec<String> {
    keys(&["a", "ArrowLeft"])
}

fn default_right() -> Vec<String> {
    keys(&["d", "ArrowRight"])
}

fn default_boost() -> Vec<String> {
    keys(&["Shift"])
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: default_forward(),
            backward: default_backward(),
            left: default_left(),
            right: default_right(),
            boost: default_boost(),
        }
    }
}

impl KeyBindings {
    fn keys_for(&self, action: NavAction) -> &[String] {
        match action {
            NavAction::Forward => &self.forward,
            NavAction::Backward => &self.backward,
            NavAction::Left => &self.left,
            NavAction::Right => &self.right,
            NavAction::Boost => &self.boost,
        }
    }

    /// Action bound to a key, if any (case-insensitive)
    pub fn action_for(&self, key: &str) -> Option<NavAction> {
        [
            NavAction::Forward,
            NavAction::Backward,
            NavAction::Left,
            NavAction::Right,
            NavAction::Boost,
        ]
        .into_iter()
        .find(|action| {
            self.keys_for(*action)
                .iter()
                .any(|bound| bound.eq_ignore_ascii_case(key))
        })
    }

    /// Every bound key identifier, for validation and help text
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        self.forward
            .iter()
            .chain(&self.backward)
            .chain(&self.left)
            .chain(&self.right)
            .chain(&self.boost)
            .map(String::as_str)
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct MovementState {
    pressed: HashSet<String>,
}

impl MovementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Repeats are harmless.
    pub fn press(&mut self, key: &str) {
        self.pressed.insert(key.to_ascii_lowercase());
    }

    /// Record a key-up
    pub fn release(&mut self, key: &str) {
        self.pressed.remove(&key.to_ascii_lowercase());
    }

    /// Forget every held key (focus loss, teardown)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&key.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// Whether any key bound to `action` is held
    pub fn is_active(&self, action: NavAction, bindings: &KeyBindings) -> bool {
        bindings
            .keys_for(action)
            .iter()
            .any(|key| self.is_pressed(key))
    }

    /// Per-tick snapshot of the held actions
    pub fn input(&self, bindings: &KeyBindings) -> FlightInput {
        FlightInput {
            forward: self.is_active(NavAction::Forward, bindings),
            backward: self.is_active(NavAction::Backward, bindings),
            left: self.is_active(NavAction::Left, bindings),
            right: self.is_active(NavAction::Right, bindings),
            boost: self.is_active(NavAction::Boost, bindings),
        }
    }
}

/// Held free-flight actions for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

impl FlightInput {
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
