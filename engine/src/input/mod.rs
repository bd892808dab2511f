//! Input Module
//!
//! The controller reads input through one call per frame,
//! [`InputSource::poll`], which returns an [`InputSnapshot`]. Everything else
//! here is a way of producing snapshots: [`DeviceInput`] from keyboard and
//! mouse events, [`ScriptedInput`] from a JSON script.
//!
//! # Example
//!
//! ```rust,ignore
//! use first_person_engine::input::{DeviceInput, InputSource, KeyCode};
//!
//! let mut input = DeviceInput::new();
//!
//! // Event loop
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_motion(4.0, -2.0);
//!
//! // Once per frame
//! let snapshot = input.poll();
//! assert_eq!(snapshot.move_axis.y, 1.0);
//! ```

pub mod bindings;
pub mod device;
pub mod keyboard;
pub mod mouse_state;
pub mod script;

use glam::Vec2;

pub use bindings::{InputAction, KeyBindings};
pub use device::DeviceInput;
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse_state::LookAccumulator;
pub use script::{InputScript, ScriptFrame, ScriptedInput};

/// One frame of player input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Move vector: x = strafe (right positive), y = forward. Each in [-1, 1].
    pub move_axis: Vec2,
    /// Look delta for this frame: x = turn right, y = look up. Unbounded.
    pub look: Vec2,
    /// Pause action held this frame
    pub pause_pressed: bool,
    /// Unpause action held this frame
    pub unpause_pressed: bool,
}

impl InputSnapshot {
    /// Snapshot that only moves.
    pub fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis,
            ..Default::default()
        }
    }

    /// Snapshot that only looks.
    pub fn looking(look: Vec2) -> Self {
        Self {
            look,
            ..Default::default()
        }
    }

    /// Copy with move and look zeroed, keeping the pause signals.
    pub fn without_motion(self) -> Self {
        Self {
            move_axis: Vec2::ZERO,
            look: Vec2::ZERO,
            ..self
        }
    }

    /// Whether the move vector is exactly zero.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.move_axis == Vec2::ZERO
    }
}

/// Anything that can produce a snapshot once per frame.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// A bare snapshot is a constant input source.
impl InputSource for InputSnapshot {
    fn poll(&mut self) -> InputSnapshot {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_neutral() {
        let snapshot = InputSnapshot::default();
        assert!(snapshot.is_idle());
        assert_eq!(snapshot.look, Vec2::ZERO);
        assert!(!snapshot.pause_pressed);
        assert!(!snapshot.unpause_pressed);
    }

    #[test]
    fn test_without_motion_keeps_pause_signals() {
        let snapshot = InputSnapshot {
            move_axis: Vec2::new(1.0, 0.0),
            look: Vec2::new(3.0, 4.0),
            pause_pressed: true,
            unpause_pressed: false,
        };

        let stripped = snapshot.without_motion();
        assert!(stripped.is_idle());
        assert_eq!(stripped.look, Vec2::ZERO);
        assert!(stripped.pause_pressed);
    }

    #[test]
    fn test_snapshot_is_constant_source() {
        let mut source = InputSnapshot::moving(Vec2::Y);
        assert_eq!(source.poll(), source.poll());
        assert_eq!(source.poll().move_axis, Vec2::Y);
    }
}
