//! Camera rig pose

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// Camera position plus the point it looks at.
///
/// The two are moved together as one rig by free flight, and interpolated
/// independently by fly-to transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 100.0),
            look_at: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Vector from the camera to its look-at target
    pub fn look_offset(&self) -> Vec3 {
        self.look_at - self.position
    }

    /// Translate position and look-at target by the same amount
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.look_at += delta;
    }

    /// Level (Y = 0) forward and right unit vectors for the current view.
    ///
    /// When the camera looks straight up or down the view has no horizontal
    /// component, so the default `-Z` heading is used instead.
    pub fn horizontal_basis(&self) -> (Vec3, Vec3) {
        let view = self.look_offset();
        let forward = Vec3::new(view.x, 0.0, view.z)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).normalize();
        (forward, right)
    }
}
