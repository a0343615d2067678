//! Keyboard bridge into the navigator's movement state

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowFocused;
use orrery_core::MovementState;
use tracing::{debug, trace};

use crate::rig::NavigationRig;

/// Keys currently held, written by key events and read once per tick
#[derive(Resource, Default, Debug, Deref, DerefMut)]
pub struct HeldKeys(pub MovementState);

/// Identifier used in key bindings for a logical key.
///
/// Characters map to themselves (bindings compare case-insensitively, so a
/// shifted `W` still counts as `w`). Named keys use their DOM-style names.
pub fn key_identifier(key: &Key) -> Option<String> {
    let name = match key {
        Key::Character(c) => return Some(c.to_string()),
        Key::ArrowUp => "ArrowUp",
        Key::ArrowDown => "ArrowDown",
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::Shift => "Shift",
        Key::Control => "Control",
        Key::Alt => "Alt",
        Key::Space => "Space",
        Key::Enter => "Enter",
        Key::Escape => "Escape",
        Key::Tab => "Tab",
        _ => return None,
    };
    Some(name.to_string())
}

/// Record held keys that are bound to a navigation action
pub fn track_keyboard(
    mut keyboard: MessageReader<KeyboardInput>,
    mut focus: MessageReader<WindowFocused>,
    mut held: ResMut<HeldKeys>,
    rig: Res<NavigationRig>,
) {
    for event in keyboard.read() {
        let Some(key) = key_identifier(&event.logical_key) else {
            continue;
        };
        let Some(action) = rig.bindings().action_for(&key) else {
            continue;
        };
        trace!(key = %key, ?action, state = ?event.state, "Navigation key");
        match event.state {
            ButtonState::Pressed => held.press(&key),
            ButtonState::Released => held.release(&key),
        }
    }

    // Key-up events go to whichever window has focus, so anything held when
    // focus leaves would otherwise stay pressed.
    if focus.read().any(|event| !event.focused) && !held.is_empty() {
        debug!("Window lost focus, releasing held keys");
        held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{KeyBindings, NavAction};

    #[test]
    fn test_character_keys() {
        let key = Key::Character("W".into());
        assert_eq!(key_identifier(&key), Some("W".to_string()));
    }

    #[test]
    fn test_named_keys_match_default_bindings() {
        let bindings = KeyBindings::default();
        let cases = [
            (Key::ArrowUp, NavAction::Forward),
            (Key::ArrowDown, NavAction::Backward),
            (Key::ArrowLeft, NavAction::Left),
            (Key::ArrowRight, NavAction::Right),
            (Key::Shift, NavAction::Boost),
        ];
        for (key, action) in cases {
            let id = key_identifier(&key).unwrap();
            assert_eq!(bindings.action_for(&id), Some(action), "key {id}");
        }
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(key_identifier(&Key::F1), None);
    }
}
