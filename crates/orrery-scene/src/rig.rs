//! Per-frame navigation driver

use bevy::prelude::*;
use orrery_core::{CameraPose, NavEvent, NavigationConfig, Navigator, TargetDescriptor, TargetId};

use crate::anchors::{AnchorQuery, EntityAnchors};
use crate::input::HeldKeys;
use crate::orbit::OrbitController;

/// The navigator, owning the camera pose for the whole app
#[derive(Resource, Deref, DerefMut)]
pub struct NavigationRig(pub Navigator);

impl NavigationRig {
    pub fn new(pose: CameraPose, config: &NavigationConfig) -> Self {
        Self(Navigator::new(pose, config))
    }
}

/// Request to fly to a target, from picking, hotkeys or UI
#[derive(Message, Debug, Clone)]
pub struct SelectTarget(pub TargetDescriptor);

/// A fly-to reached its target
#[derive(Message, Debug, Clone)]
pub struct TransitionFinished(pub TargetId);

/// Apply selections, tick the navigator and publish whether orbiting is allowed
pub fn drive_navigation(
    time: Res<Time>,
    mut rig: ResMut<NavigationRig>,
    mut orbit: ResMut<OrbitController>,
    held: Res<HeldKeys>,
    mut selections: MessageReader<SelectTarget>,
    mut finished: MessageWriter<TransitionFinished>,
    targets: AnchorQuery,
) {
    let now = time.elapsed();

    // Later selections in the same frame supersede earlier ones
    for SelectTarget(target) in selections.read() {
        rig.select(target.clone(), now);
    }

    let anchors = EntityAnchors::new(&targets);
    if let Some(NavEvent::Arrived(id)) = rig.tick(now, time.delta_secs(), &held.0, &anchors) {
        finished.write(TransitionFinished(id));
    }

    orbit.enabled = rig.orbit_enabled();
}
