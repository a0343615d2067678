//! Main camera and its transform sync

use bevy::prelude::*;
use orrery_core::CameraPose;

use crate::rig::NavigationRig;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Transform that places a camera at the pose, looking at its target (Y up)
pub fn pose_transform(pose: &CameraPose) -> Transform {
    Transform::from_translation(pose.position).looking_at(pose.look_at, Vec3::Y)
}

pub fn sync_camera_transform(
    rig: Res<NavigationRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if let Ok(mut transform) = camera_query.single_mut() {
        *transform = pose_transform(rig.pose());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_transform_faces_target() {
        let pose = CameraPose::new(Vec3::new(20.0, 15.0, 50.0), Vec3::ZERO);
        let transform = pose_transform(&pose);
        assert_eq!(transform.translation, pose.position);

        let facing = transform.forward().as_vec3();
        let expected = (pose.look_at - pose.position).normalize();
        assert!(facing.abs_diff_eq(expected, 1e-5));
    }
}
