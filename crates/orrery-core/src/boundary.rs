//! World boundary for manual roaming

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::pose::CameraPose;

/// Limits applied to the rig after free-flight movement.
///
/// Fly-to transitions ignore these, so the camera may legitimately end up
/// outside the radius after visiting a distant object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundarySpec {
    /// Maximum distance of the camera from the world origin
    #[serde(default = "default_movement_radius")]
    pub movement_radius: f32,
    /// Maximum distance between the camera and its look-at target
    #[serde(default = "default_max_look_at_offset")]
    pub max_look_at_offset: f32,
}

fn default_movement_radius() -> f32 {
    290.0
}

fn default_max_look_at_offset() -> f32 {
    600.0
}

impl Default for BoundarySpec {
    fn default() -> Self {
        Self {
            movement_radius: default_movement_radius(),
            max_look_at_offset: default_max_look_at_offset(),
        }
    }
}

impl BoundarySpec {
    /// Pull the rig back inside the limits. Returns true if anything changed.
    ///
    /// The camera is clamped radially (direction from the origin kept), then
    /// the look-at target is pulled toward the camera along the same view
    /// direction if it ended up too far away.
    pub fn clamp(&self, pose: &mut CameraPose) -> bool {
        let mut clamped = false;

        if let Some(position) = shorten(pose.position, self.movement_radius) {
            pose.position = position;
            clamped = true;
        }

        if let Some(offset) = shorten(pose.look_offset(), self.max_look_at_offset) {
            pose.look_at = pose.position + offset;
            clamped = true;
        }

        clamped
    }
}

/// `v` scaled down to length `max`, or `None` if it is already within it.
///
/// The rescaled length may round to just above `max` in f32, so it is
/// nudged down until `length() <= max` holds exactly.
fn shorten(v: Vec3, max: f32) -> Option<Vec3> {
    let length = v.length();
    if !length.is_finite() || length <= max {
        return None;
    }

    let mut shortened = v * (max / length);
    while shortened.length() > max {
        shortened *= 1.0 - f32::EPSILON;
    }
    Some(shortened)
}
