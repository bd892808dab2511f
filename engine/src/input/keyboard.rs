//! Keyboard Input Module
//!
//! Tracks which keys are held and turns the four direction actions into the
//! 2-D move axis the controller consumes. Decoupled from winit: the host
//! translates its own key codes into [`KeyCode`].

use std::collections::HashSet;

use glam::Vec2;

use super::bindings::{InputAction, KeyBindings};

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,
    Enter,
    Space,
    P,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Snapshot of the four direction actions for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// Move forward action held
    pub forward: bool,
    /// Move backward action held
    pub backward: bool,
    /// Strafe left action held
    pub left: bool,
    /// Strafe right action held
    pub right: bool,
}

impl MovementKeys {
    /// Resolve the direction actions from the currently held keys.
    pub fn from_pressed(bindings: &KeyBindings, pressed: &HashSet<KeyCode>) -> Self {
        Self {
            forward: bindings.is_action_pressed(InputAction::MoveForward, pressed),
            backward: bindings.is_action_pressed(InputAction::MoveBack, pressed),
            left: bindings.is_action_pressed(InputAction::MoveLeft, pressed),
            right: bindings.is_action_pressed(InputAction::MoveRight, pressed),
        }
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Composite move vector: x = strafe, y = forward.
    ///
    /// Diagonals are normalized so the length never exceeds 1.
    pub fn move_axis(&self) -> Vec2 {
        let axis = Vec2::new(self.right_axis() as f32, self.forward_axis() as f32);
        if axis.length_squared() > 1.0 {
            axis.normalize()
        } else {
            axis
        }
    }
}

/// Set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the held state changed.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.pressed.insert(key)
        } else {
            self.pressed.remove(&key)
        }
    }

    /// All held keys.
    pub fn pressed(&self) -> &HashSet<KeyCode> {
        &self.pressed
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
