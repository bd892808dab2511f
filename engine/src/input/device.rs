//! Device Input
//!
//! Keyboard + mouse implementation of [`InputSource`]. The host forwards its
//! window/device events here; the controller polls once per frame.

use super::bindings::{InputAction, KeyBindings};
use super::keyboard::{KeyCode, KeyboardState, MovementKeys};
use super::mouse_state::LookAccumulator;
use super::{InputSnapshot, InputSource};

/// Input source fed by raw keyboard and mouse events.
///
/// Pause and unpause are level signals: holding the key reports `true` on
/// every poll. A held left mouse button also counts as unpause, so clicking
/// the window resumes play.
#[derive(Debug, Clone)]
pub struct DeviceInput {
    keyboard: KeyboardState,
    bindings: KeyBindings,
    look: LookAccumulator,
    /// Left mouse button held
    left_button: bool,
}

impl Default for DeviceInput {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceInput {
    /// Create a device input with the default bindings.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::new())
    }

    /// Create a device input with custom bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            bindings,
            look: LookAccumulator::new(),
            left_button: false,
        }
    }

    /// Handle a key press or release.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.keyboard.handle_key(key, pressed);
    }

    /// Handle the left mouse button.
    pub fn handle_left_button(&mut self, pressed: bool) {
        self.left_button = pressed;
    }

    /// Handle raw mouse motion (device units, y down).
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.look.accumulate_delta(dx, dy);
    }

    /// Handle a window focus change.
    ///
    /// Losing focus releases every held key and drops pending motion, since
    /// the matching release events will never arrive.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.keyboard.reset();
            self.left_button = false;
        }
        self.look.set_captured(focused);
    }
}

impl InputSource for DeviceInput {
    fn poll(&mut self) -> InputSnapshot {
        let pressed = self.keyboard.pressed();
        let movement = MovementKeys::from_pressed(&self.bindings, pressed);

        InputSnapshot {
            move_axis: movement.move_axis(),
            look: self.look.consume_look(),
            pause_pressed: self.bindings.is_action_pressed(InputAction::Pause, pressed),
            unpause_pressed: self.left_button
                || self.bindings.is_action_pressed(InputAction::Unpause, pressed),
        }
    }
}
