//! Manual orbit controller
//!
//! Rotate with left-drag, pan with right-drag, zoom with the scroll wheel.
//! The controller edits the navigator's pose directly, and only while the
//! navigator allows it: `enabled` is written by the navigation tick, never
//! by this module.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use orrery_core::{CameraPose, OrbitConfig};

use crate::rig::NavigationRig;

/// Radians of orbit per pixel of drag, before `rotate_speed`
const ROTATE_PER_PIXEL: f32 = 0.008;
/// World units of pan per pixel of drag and unit of orbit distance, before `pan_speed`
const PAN_PER_PIXEL: f32 = 0.002;
/// Distance scale applied per wheel line, raised to `zoom_speed`
const ZOOM_STEP: f32 = 0.95;
/// Pixel scroll deltas are much finer than line deltas
const PIXELS_PER_LINE: f32 = 20.0;
/// Keeps the polar angle off the poles so the view never flips
const POLAR_EPSILON: f32 = 1e-3;

#[derive(Resource, Debug, Clone)]
pub struct OrbitController {
    pub enabled: bool,
    pub settings: OrbitConfig,
}

impl OrbitController {
    pub fn new(settings: OrbitConfig) -> Self {
        Self {
            enabled: true,
            settings,
        }
    }
}

/// Orbit the camera around its look-at target
pub fn rotate(pose: &mut CameraPose, delta: Vec2, rotate_speed: f32) {
    let offset = pose.position - pose.look_at;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return;
    }

    let azimuth = offset.x.atan2(offset.z) - delta.x * ROTATE_PER_PIXEL * rotate_speed;
    let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - delta.y * ROTATE_PER_PIXEL * rotate_speed)
        .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);

    let rotated = Vec3::new(
        polar.sin() * azimuth.sin(),
        polar.cos(),
        polar.sin() * azimuth.cos(),
    ) * radius;
    pose.position = pose.look_at + rotated;
}

/// Slide camera and look-at target across the view plane
pub fn pan(pose: &mut CameraPose, delta: Vec2, pan_speed: f32) {
    let view = pose.look_offset();
    let distance = view.length();
    let Some(forward) = view.try_normalize() else {
        return;
    };
    let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
    let up = right.cross(forward);

    let scale = distance * PAN_PER_PIXEL * pan_speed;
    // Drag right moves the scene right, so the rig moves left
    pose.translate((-right * delta.x + up * delta.y) * scale);
}

/// Move the camera toward or away from its look-at target.
///
/// Positive `lines` zoom in. Distance stays within the configured range.
pub fn zoom(pose: &mut CameraPose, lines: f32, settings: &OrbitConfig) {
    let offset = pose.position - pose.look_at;
    let Some(direction) = offset.try_normalize() else {
        return;
    };
    let scale = ZOOM_STEP.powf(settings.zoom_speed * lines);
    let distance = (offset.length() * scale).clamp(settings.min_distance, settings.max_distance);
    pose.position = pose.look_at + direction * distance;
}

pub fn orbit_camera(
    orbit: Res<OrbitController>,
    mut rig: ResMut<NavigationRig>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
) {
    if !orbit.enabled {
        return;
    }
    let Some(pose) = rig.orbit_pose_mut() else {
        return;
    };
    let settings = &orbit.settings;

    if motion.delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            rotate(pose, motion.delta, settings.rotate_speed);
        } else if mouse_button.pressed(MouseButton::Right) {
            pan(pose, motion.delta, settings.pan_speed);
        }
    }

    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };
    if lines.abs() > f32::EPSILON {
        zoom(pose, lines, settings);
    }
}
