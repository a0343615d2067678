//! Target selection by mouse click or number hotkey

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use orrery_core::TargetId;
use tracing::debug;

use crate::anchors::NavTarget;
use crate::camera::MainCamera;
use crate::rig::SelectTarget;

/// Cursor travel (pixels) beyond which a press is a drag, not a click
const CLICK_SLOP: f32 = 5.0;

/// Where the current left-button press started, for click detection
#[derive(Resource, Default)]
pub struct ClickTracker {
    press_position: Option<Vec2>,
}

/// Target ids bound to the number keys 1-9, in order
#[derive(Resource, Default, Debug, Clone)]
pub struct SelectionHotkeys(pub Vec<TargetId>);

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Index of the nearest sphere the ray passes through.
///
/// Each candidate is `(center, radius)`. Spheres behind the ray origin are
/// ignored.
pub fn nearest_hit(
    origin: Vec3,
    direction: Vec3,
    candidates: impl IntoIterator<Item = (Vec3, f32)>,
) -> Option<usize> {
    let mut closest: Option<(usize, f32)> = None;

    for (index, (center, radius)) in candidates.into_iter().enumerate() {
        let t = (center - origin).dot(direction);
        if t < 0.0 {
            continue;
        }
        let closest_point = origin + direction * t;
        if (closest_point - center).length_squared() > radius * radius {
            continue;
        }
        if closest.is_none_or(|(_, best)| t < best) {
            closest = Some((index, t));
        }
    }

    closest.map(|(index, _)| index)
}

/// Select the object under the cursor on a left click (not a drag)
pub fn select_on_click(
    mut tracker: ResMut<ClickTracker>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    targets: Query<(&NavTarget, &Transform)>,
    mut selections: MessageWriter<SelectTarget>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if mouse_button.just_pressed(MouseButton::Left) {
        tracker.press_position = cursor;
    }
    if !mouse_button.just_released(MouseButton::Left) {
        return;
    }

    let (Some(start), Some(end)) = (tracker.press_position.take(), cursor) else {
        return;
    };
    if start.distance(end) > CLICK_SLOP {
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, end) else {
        return;
    };

    let candidates: Vec<_> = targets.iter().collect();
    let hit = nearest_hit(
        ray.origin,
        *ray.direction,
        candidates
            .iter()
            .map(|(target, transform)| (transform.translation, target.pick_radius)),
    );

    if let Some(index) = hit {
        let (target, transform) = candidates[index];
        debug!(target = %target.id, "Picked target");
        selections.write(SelectTarget(target.descriptor(transform.translation)));
    }
}

/// Select the n-th hotkey target when digit n is pressed
pub fn select_by_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    hotkeys: Res<SelectionHotkeys>,
    targets: Query<(&NavTarget, &Transform)>,
    mut selections: MessageWriter<SelectTarget>,
) {
    for (code, id) in DIGIT_KEYS.iter().zip(&hotkeys.0) {
        if !keyboard.just_pressed(*code) {
            continue;
        }
        if let Some((target, transform)) = targets.iter().find(|(target, _)| &target.id == id) {
            debug!(target = %target.id, "Hotkey selection");
            selections.write(SelectTarget(target.descriptor(transform.translation)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_hit_prefers_closest() {
        let origin = Vec3::new(0.0, 0.0, 100.0);
        let hit = nearest_hit(
            origin,
            Vec3::NEG_Z,
            [
                (Vec3::new(0.0, 0.0, -50.0), 5.0),
                (Vec3::new(0.0, 1.0, 10.0), 5.0),
                (Vec3::new(40.0, 0.0, 50.0), 5.0),
            ],
        );
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_nearest_hit_ignores_behind_and_misses() {
        let hit = nearest_hit(
            Vec3::ZERO,
            Vec3::X,
            [(Vec3::new(-20.0, 0.0, 0.0), 5.0), (Vec3::new(20.0, 10.0, 0.0), 5.0)],
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_nearest_hit_edge_of_radius() {
        let hit = nearest_hit(Vec3::ZERO, Vec3::X, [(Vec3::new(30.0, 4.9, 0.0), 5.0)]);
        assert_eq!(hit, Some(0));
    }
}
