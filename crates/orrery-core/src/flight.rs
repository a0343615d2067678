//! Free-flight controller
//!
//! Keyboard movement of the whole camera rig. Movement stays level: the
//! camera's heading is projected onto the horizontal plane, so looking down
//! at a planet and pressing forward does not dive into it.

use bevy_math::Vec3;

use crate::boundary::BoundarySpec;
use crate::input::FlightInput;
use crate::pose::CameraPose;

/// Speed parameters for free flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSettings {
    /// World units per second
    pub base_speed: f32,
    /// Speed multiplier while boost is held
    pub boost_factor: f32,
    /// Longest frame step honoured, in seconds
    pub max_frame_secs: f32,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            base_speed: 80.0,
            boost_factor: 2.2,
            max_frame_secs: 0.05,
        }
    }
}

/// Keyboard-driven rig translation with boundary enforcement
#[derive(Debug, Clone, Default)]
pub struct FreeFlight {
    pub settings: FlightSettings,
    pub boundary: BoundarySpec,
}

impl FreeFlight {
    pub fn new(settings: FlightSettings, boundary: BoundarySpec) -> Self {
        Self { settings, boundary }
    }

    /// Unit direction of travel for the held keys, or `None` when they cancel out
    pub fn direction(pose: &CameraPose, input: &FlightInput) -> Option<Vec3> {
        let (forward, right) = pose.horizontal_basis();

        let mut movement = Vec3::ZERO;
        if input.forward {
            movement += forward;
        }
        if input.backward {
            movement -= forward;
        }
        if input.left {
            movement -= right;
        }
        if input.right {
            movement += right;
        }

        movement.try_normalize()
    }

    /// Advance the rig by one frame. Returns true if the pose changed.
    ///
    /// `dt` is clamped to `[0, max_frame_secs]` so a stalled frame (window in
    /// the background, debugger pause) cannot teleport the camera.
    pub fn tick(&self, pose: &mut CameraPose, input: &FlightInput, dt: f32) -> bool {
        if !input.any_direction() {
            return false;
        }
        let Some(direction) = Self::direction(pose, input) else {
            return false;
        };

        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.settings.max_frame_secs)
        } else {
            0.0
        };
        let boost = if input.boost {
            self.settings.boost_factor
        } else {
            1.0
        };
        let speed = self.settings.base_speed * boost * dt;

        pose.translate(direction * speed);
        self.boundary.clamp(pose);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_vec_close;

    fn pose() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 20.0, 100.0), Vec3::ZERO)
    }

    fn forward() -> FlightInput {
        FlightInput {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_forward_is_rigid_translation() {
        let flight = FreeFlight::default();
        let mut p = pose();
        let before = p;

        assert!(flight.tick(&mut p, &forward(), 0.016));

        let moved = p.position - before.position;
        assert_vec_close(p.look_at - before.look_at, moved);
        assert_vec_close(p.look_offset(), before.look_offset());
        assert_vec_close(moved, Vec3::new(0.0, 0.0, -80.0 * 0.016));
    }

    #[test]
    fn test_movement_stays_level() {
        let flight = FreeFlight::default();
        let mut p = CameraPose::new(Vec3::new(0.0, 80.0, 60.0), Vec3::ZERO);
        flight.tick(&mut p, &forward(), 0.02);
        assert_eq!(p.position.y, 80.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let flight = FreeFlight::default();
        let mut p = pose();
        let before = p;
        let input = FlightInput {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert!(!flight.tick(&mut p, &input, 0.016));
        assert_eq!(p, before);
    }

    #[test]
    fn test_no_keys_is_noop() {
        let flight = FreeFlight::default();
        let mut p = CameraPose::new(Vec3::new(400.0, 0.0, 0.0), Vec3::ZERO);
        let before = p;
        assert!(!flight.tick(&mut p, &FlightInput::default(), 0.016));
        assert_eq!(p, before);
    }

    #[test]
    fn test_diagonal_normalized() {
        let flight = FreeFlight::default();
        let mut p = pose();
        let input = FlightInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        flight.tick(&mut p, &input, 0.01);
        let moved = p.position - pose().position;
        assert!((moved.length() - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_boost_and_dt_clamp() {
        let flight = FreeFlight::default();
        let mut p = pose();
        let input = FlightInput {
            left: true,
            boost: true,
            ..Default::default()
        };
        // a two second stall only counts as 50 ms
        flight.tick(&mut p, &input, 2.0);
        let moved = p.position - pose().position;
        assert_vec_close(moved, Vec3::new(-80.0 * 2.2 * 0.05, 0.0, 0.0));
    }

    #[test]
    fn test_negative_dt_does_not_move_backwards() {
        let flight = FreeFlight::default();
        let mut p = pose();
        flight.tick(&mut p, &forward(), -1.0);
        assert_eq!(p.position, pose().position);
    }

    #[test]
    fn test_boundary_enforced_after_move() {
        let flight = FreeFlight::default();
        let mut p = CameraPose::new(Vec3::new(0.0, 0.0, -289.0), Vec3::new(0.0, 0.0, -400.0));
        for _ in 0..20 {
            flight.tick(&mut p, &forward(), 0.05);
            assert!(p.position.length() <= 290.0 + 1e-3);
        }
        assert!((p.position.length() - 290.0).abs() < 1e-3);
        assert!(p.look_offset().length() <= 600.0 + 1e-3);
    }
}
