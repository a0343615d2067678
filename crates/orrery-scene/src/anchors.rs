//! Navigable entities and their live positions

use bevy::prelude::*;
use orrery_core::{AnchorKind, SceneQuery, TargetDescriptor, TargetId};

/// Marker for entities the camera can fly to.
///
/// Navigable entities are spawned at the root of the hierarchy, so their
/// `Transform` is already in world space.
#[derive(Component, Debug, Clone)]
pub struct NavTarget {
    pub id: TargetId,
    pub kind: AnchorKind,
    /// Radius used for click picking
    pub pick_radius: f32,
}

impl NavTarget {
    /// Descriptor for selecting this entity at its current position
    pub fn descriptor(&self, position: Vec3) -> TargetDescriptor {
        TargetDescriptor {
            id: self.id.clone(),
            kind: self.kind,
            initial_position: position,
        }
    }
}

/// Gentle vertical bobbing, independent of the camera
#[derive(Component, Debug, Clone, Copy)]
pub struct FloatingMotion {
    /// Rest position
    pub base: Vec3,
    /// Peak vertical displacement in world units
    pub amplitude: f32,
    /// Angular frequency in radians per second
    pub frequency: f32,
}

impl FloatingMotion {
    pub fn new(base: Vec3) -> Self {
        Self {
            base,
            amplitude: 0.5,
            frequency: 1.0,
        }
    }

    /// Position at `elapsed` seconds
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        self.base + Vec3::Y * (elapsed * self.frequency).sin() * self.amplitude
    }
}

pub fn float_objects(time: Res<Time>, mut query: Query<(&FloatingMotion, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (motion, mut transform) in query.iter_mut() {
        transform.translation = motion.position_at(elapsed);
    }
}

/// Navigable entities with their positions
pub type AnchorQuery<'w, 's> = Query<'w, 's, (&'static NavTarget, &'static Transform)>;

/// Scene lookup over navigable entities, for resolving dynamic anchors
pub struct EntityAnchors<'a, 'w, 's> {
    query: &'a AnchorQuery<'w, 's>,
}

impl<'a, 'w, 's> EntityAnchors<'a, 'w, 's> {
    pub fn new(query: &'a AnchorQuery<'w, 's>) -> Self {
        Self { query }
    }
}

impl SceneQuery for EntityAnchors<'_, '_, '_> {
    fn live_position(&self, id: &TargetId) -> Option<Vec3> {
        self.query
            .iter()
            .find(|(target, _)| &target.id == id)
            .map(|(_, transform)| transform.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_motion_offsets() {
        let motion = FloatingMotion::new(Vec3::new(10.0, 4.0, -2.0));
        assert_eq!(motion.position_at(0.0), Vec3::new(10.0, 4.0, -2.0));

        let peak = motion.position_at(std::f32::consts::FRAC_PI_2);
        assert!((peak.y - 4.5).abs() < 1e-5);
        assert_eq!(peak.x, 10.0);
        assert_eq!(peak.z, -2.0);
    }

    #[test]
    fn test_floating_motion_bounded() {
        let motion = FloatingMotion::new(Vec3::ZERO);
        for i in 0..200 {
            let y = motion.position_at(i as f32 * 0.37).y;
            assert!(y.abs() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_descriptor_uses_current_position() {
        let target = NavTarget {
            id: TargetId::new("crab"),
            kind: AnchorKind::Dynamic,
            pick_radius: 8.0,
        };
        let descriptor = target.descriptor(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(descriptor.id, TargetId::new("crab"));
        assert_eq!(descriptor.kind, AnchorKind::Dynamic);
        assert_eq!(descriptor.initial_position, Vec3::new(1.0, 2.0, 3.0));
    }
}
