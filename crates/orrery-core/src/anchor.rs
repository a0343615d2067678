//! Anchor resolution for navigation targets
//!
//! A transition flies toward an anchor: the target's world position. Static
//! targets are answered from the descriptor alone. Dynamic targets float
//! around independently of the camera, so their live position is asked from
//! the scene on every tick.

use bevy_math::Vec3;
use std::collections::HashMap;
use tracing::trace;

use crate::target::{AnchorKind, TargetDescriptor, TargetId};

/// Lookup of live world positions, supplied by whatever owns the entities
pub trait SceneQuery {
    /// Current world position of the entity with this id, if it exists
    fn live_position(&self, id: &TargetId) -> Option<Vec3>;
}

impl<T: SceneQuery + ?Sized> SceneQuery for &T {
    fn live_position(&self, id: &TargetId) -> Option<Vec3> {
        (**self).live_position(id)
    }
}

impl SceneQuery for HashMap<TargetId, Vec3> {
    fn live_position(&self, id: &TargetId) -> Option<Vec3> {
        self.get(id).copied()
    }
}

/// A scene with no entities; every dynamic lookup falls back
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScene;

impl SceneQuery for NoScene {
    fn live_position(&self, _id: &TargetId) -> Option<Vec3> {
        None
    }
}

/// Current world position of a target.
///
/// A dynamic target missing from the scene resolves to its initial position.
pub fn resolve(target: &TargetDescriptor, scene: &impl SceneQuery) -> Vec3 {
    match target.kind {
        AnchorKind::Static => target.initial_position,
        AnchorKind::Dynamic => match scene.live_position(&target.id) {
            Some(position) => position,
            None => {
                trace!(target = %target.id, "Dynamic anchor not in scene, using initial position");
                target.initial_position
            }
        },
    }
}
