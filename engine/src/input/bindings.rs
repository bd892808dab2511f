//! Input Bindings Module
//!
//! Maps the controller's logical actions to physical keys. Each action has at
//! most one key and each key drives at most one action.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Pause and release the cursor (default: Escape)
    Pause,
    /// Resume and capture the cursor (default: Enter, left click also resumes)
    Unpause,
}

/// Action-to-key table consulted on every poll.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Default bindings: WASD to move, Escape to pause, Enter to resume.
    pub fn new() -> Self {
        let mut bindings = Self {
            keys: HashMap::with_capacity(6),
        };

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::Escape, InputAction::Pause);
        bindings.bind(KeyCode::Enter, InputAction::Unpause);

        bindings
    }

    /// Bind `key` to `action`, replacing the action's previous key.
    ///
    /// A key already driving another action is taken from it.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.keys.retain(|_, bound| *bound != key);
        self.keys.insert(action, key);
    }

    /// Whether the key bound to `action` is in `pressed_keys`.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.keys
            .get(&action)
            .is_some_and(|key| pressed_keys.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(keys: &[KeyCode]) -> HashSet<KeyCode> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        let cases = [
            (KeyCode::W, InputAction::MoveForward),
            (KeyCode::S, InputAction::MoveBack),
            (KeyCode::A, InputAction::MoveLeft),
            (KeyCode::D, InputAction::MoveRight),
            (KeyCode::Escape, InputAction::Pause),
            (KeyCode::Enter, InputAction::Unpause),
        ];
        for (key, action) in cases {
            assert!(bindings.is_action_pressed(action, &pressed(&[key])), "{action:?}");
        }
    }

    #[test]
    fn test_rebind_replaces_old_key() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);

        assert!(!bindings.is_action_pressed(InputAction::MoveForward, &pressed(&[KeyCode::W])));
        assert!(bindings.is_action_pressed(InputAction::MoveForward, &pressed(&[KeyCode::ArrowUp])));
    }

    #[test]
    fn test_rebinding_key_steals_it_from_old_action() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::Escape, InputAction::Unpause);

        let escape = pressed(&[KeyCode::Escape]);
        assert!(bindings.is_action_pressed(InputAction::Unpause, &escape));
        assert!(!bindings.is_action_pressed(InputAction::Pause, &escape));
        assert!(!bindings.is_action_pressed(InputAction::Unpause, &pressed(&[KeyCode::Enter])));
    }

    #[test]
    fn test_unrelated_keys_do_not_fire() {
        let bindings = KeyBindings::new();
        let held = pressed(&[KeyCode::W, KeyCode::Space]);

        assert!(bindings.is_action_pressed(InputAction::MoveForward, &held));
        assert!(!bindings.is_action_pressed(InputAction::MoveBack, &held));
        assert!(!bindings.is_action_pressed(InputAction::Pause, &held));
        assert!(!bindings.is_action_pressed(InputAction::Unpause, &held));
    }
}
