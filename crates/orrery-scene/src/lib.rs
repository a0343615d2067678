//! Orrery Scene - Bevy integration for camera navigation
//!
//! This crate plugs the navigation engine from `orrery-core` into a Bevy
//! app: keyboard and mouse input, the manual orbit controller, click and
//! hotkey selection, floating objects, and the per-frame navigation tick.

pub mod anchors;
pub mod camera;
pub mod input;
pub mod orbit;
pub mod picking;
pub mod rig;

use bevy::prelude::*;
use orrery_core::{CameraPose, NavigationConfig};

/// Plugin that wires the camera navigation systems
pub struct NavigationPlugin {
    pub config: NavigationConfig,
    pub initial_pose: CameraPose,
}

impl NavigationPlugin {
    pub fn new(config: NavigationConfig, initial_pose: CameraPose) -> Self {
        Self {
            config,
            initial_pose,
        }
    }
}

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(rig::NavigationRig::new(self.initial_pose, &self.config))
            .insert_resource(orbit::OrbitController::new(self.config.orbit.clone()))
            .init_resource::<input::HeldKeys>()
            .init_resource::<picking::ClickTracker>()
            .init_resource::<picking::SelectionHotkeys>()
            .add_message::<rig::SelectTarget>()
            .add_message::<rig::TransitionFinished>()
            .add_systems(
                Update,
                (
                    input::track_keyboard,
                    anchors::float_objects,
                    picking::select_on_click,
                    picking::select_by_hotkey,
                    orbit::orbit_camera,
                    rig::drive_navigation,
                    camera::sync_camera_transform,
                )
                    .chain(),
            );
    }
}

// Re-export commonly used types
pub use anchors::{FloatingMotion, NavTarget};
pub use camera::MainCamera;
pub use rig::{NavigationRig, SelectTarget, TransitionFinished};
