//! Fly-to transitions
//!
//! A transition moves the camera from wherever it was when the user made a
//! selection to a fixed offset from the selected object, while the look-at
//! target swings onto the object itself. Both follow a cubic ease-out over a
//! fixed duration.
//!
//! The anchor is resolved again on every sample, so a floating object is
//! tracked while the camera is still on its way. The easing is then applied
//! against a moving endpoint: the camera always lands exactly on
//! `anchor + offset` at the end, but the path is not a clean cubic curve if
//! the anchor moves a lot during the flight. That is accepted behaviour.

use bevy_math::Vec3;
use std::time::Duration;

use crate::anchor::{resolve, SceneQuery};
use crate::easing::{ease_out_cubic, progress};
use crate::pose::CameraPose;
use crate::target::TargetDescriptor;

/// Fixed parameters shared by every transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSettings {
    pub duration: Duration,
    /// Camera position relative to the anchor at the end of the flight
    pub offset: Vec3,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            offset: Vec3::new(20.0, 15.0, 50.0),
        }
    }
}

/// An in-flight camera move toward a target
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    start_position: Vec3,
    start_look_at: Vec3,
    target: TargetDescriptor,
    offset: Vec3,
    start_time: Duration,
    duration: Duration,
}

/// Result of sampling a transition at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub pose: CameraPose,
    pub progress: f32,
    pub done: bool,
}

impl Transition {
    /// Begin a transition from the current pose at time `now`
    pub fn start(
        target: TargetDescriptor,
        current: &CameraPose,
        now: Duration,
        settings: &TransitionSettings,
    ) -> Self {
        Self {
            start_position: current.position,
            start_look_at: current.look_at,
            target,
            offset: settings.offset,
            start_time: now,
            duration: settings.duration,
        }
    }

    pub fn target(&self) -> &TargetDescriptor {
        &self.target
    }

    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]`. Times before the start count as zero.
    pub fn progress(&self, now: Duration) -> f32 {
        progress(now.saturating_sub(self.start_time), self.duration)
    }

    /// Camera pose at `now`, with the anchor looked up in `scene`
    pub fn sample(&self, now: Duration, scene: &impl SceneQuery) -> TransitionFrame {
        let progress = self.progress(now);
        let eased = ease_out_cubic(progress);

        let anchor = resolve(&self.target, scene);
        let destination = anchor + self.offset;
        let done = progress >= 1.0;

        let pose = if done {
            CameraPose::new(destination, anchor)
        } else {
            CameraPose {
                position: self.start_position.lerp(destination, eased),
                look_at: self.start_look_at.lerp(anchor, eased),
            }
        };

        TransitionFrame {
            pose,
            progress,
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::NoScene;
    use crate::target::TargetId;
    use crate::test_util::assert_vec_close;
    use std::collections::HashMap;

    fn start_pose() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO)
    }

    #[test]
    fn test_start_captures_pose() {
        let t0 = Duration::from_secs(5);
        let target = TargetDescriptor::fixed("sun", Vec3::new(100.0, 0.0, 0.0));
        let transition = Transition::start(target, &start_pose(), t0, &TransitionSettings::default());

        let frame = transition.sample(t0, &NoScene);
        assert_eq!(frame.progress, 0.0);
        assert!(!frame.done);
        assert_eq!(frame.pose, start_pose());
    }

    #[test]
    fn test_halfway_static_target() {
        let t0 = Duration::from_millis(10_000);
        let target = TargetDescriptor::fixed("sun", Vec3::new(100.0, 0.0, 0.0));
        let transition = Transition::start(target, &start_pose(), t0, &TransitionSettings::default());

        let frame = transition.sample(t0 + Duration::from_millis(1000), &NoScene);
        assert_eq!(frame.progress, 0.5);
        assert!(!frame.done);

        let destination = Vec3::new(120.0, 15.0, 50.0);
        assert_vec_close(frame.pose.position, Vec3::new(0.0, 0.0, 100.0).lerp(destination, 0.875));
        assert_vec_close(frame.pose.look_at, Vec3::ZERO.lerp(Vec3::new(100.0, 0.0, 0.0), 0.875));
    }

    #[test]
    fn test_completion_lands_exactly_on_destination() {
        let t0 = Duration::from_secs(1);
        let target = TargetDescriptor::fixed("sun", Vec3::new(100.0, 0.0, 0.0));
        let transition = Transition::start(target, &start_pose(), t0, &TransitionSettings::default());

        for late in [Duration::from_millis(2000), Duration::from_secs(3600)] {
            let frame = transition.sample(t0 + late, &NoScene);
            assert_eq!(frame.progress, 1.0);
            assert!(frame.done);
            assert_eq!(frame.pose.position, Vec3::new(120.0, 15.0, 50.0));
            assert_eq!(frame.pose.look_at, Vec3::new(100.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_completion_is_exact_from_arbitrary_start() {
        let start = CameraPose::new(Vec3::new(0.1, 0.3, 97.7), Vec3::new(-3.3, 1.7, 0.9));
        let anchor = Vec3::new(33.3, -7.1, 12.9);
        let settings = TransitionSettings::default();
        let transition = Transition::start(
            TargetDescriptor::fixed("vega", anchor),
            &start,
            Duration::from_millis(123),
            &settings,
        );

        let frame = transition.sample(Duration::from_millis(123) + settings.duration, &NoScene);
        assert!(frame.done);
        assert_eq!(frame.pose.position, anchor + settings.offset);
        assert_eq!(frame.pose.look_at, anchor);
        assert_eq!(transition.start_time(), Duration::from_millis(123));
        assert_eq!(transition.duration(), settings.duration);
    }

    #[test]
    fn test_clock_before_start_is_zero_progress() {
        let t0 = Duration::from_secs(10);
        let target = TargetDescriptor::fixed("sun", Vec3::X);
        let transition = Transition::start(target, &start_pose(), t0, &TransitionSettings::default());
        assert_eq!(transition.progress(Duration::from_secs(3)), 0.0);
    }

    #[test]
    fn test_dynamic_anchor_tracked_every_sample() {
        let t0 = Duration::ZERO;
        let target = TargetDescriptor::moving("crab", Vec3::new(0.0, 10.0, 0.0));
        let transition = Transition::start(target, &start_pose(), t0, &TransitionSettings::default());

        let mut scene = HashMap::new();
        scene.insert(TargetId::new("crab"), Vec3::new(0.0, 10.5, 0.0));
        let frame = transition.sample(Duration::from_millis(2000), &scene);
        assert_eq!(frame.pose.look_at, Vec3::new(0.0, 10.5, 0.0));
        assert_eq!(frame.pose.position, Vec3::new(20.0, 25.5, 50.0));

        scene.insert(TargetId::new("crab"), Vec3::new(0.0, 9.5, 0.0));
        let frame = transition.sample(Duration::from_millis(2500), &scene);
        assert_eq!(frame.pose.look_at, Vec3::new(0.0, 9.5, 0.0));
        assert_eq!(frame.pose.position, Vec3::new(20.0, 24.5, 50.0));
    }

    #[test]
    fn test_custom_offset_and_duration() {
        let settings = TransitionSettings {
            duration: Duration::from_millis(500),
            offset: Vec3::new(0.0, 0.0, 10.0),
        };
        let target = TargetDescriptor::fixed("moon", Vec3::new(5.0, 5.0, 5.0));
        let transition = Transition::start(target, &start_pose(), Duration::ZERO, &settings);
        let frame = transition.sample(Duration::from_millis(500), &NoScene);
        assert!(frame.done);
        assert_eq!(frame.pose.position, Vec3::new(5.0, 5.0, 15.0));
    }
}
