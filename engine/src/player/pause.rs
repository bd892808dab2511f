//! Pause State Machine
//!
//! Two states, `Running` and `Paused`. The pause signal is only looked at
//! while running and the unpause signal only while paused, so at most one
//! transition happens per frame and a frame with both signals held resolves
//! in favor of whichever state was current.
//!
//! Host side effects follow the state, not the edge: they are re-applied on
//! every update and each write is skipped when the host already matches.
//!
//! | State   | Cursor lock | Cursor visible | Time scale | Input consumed |
//! |---------|-------------|----------------|------------|----------------|
//! | Running | Locked      | no             | 1          | yes            |
//! | Paused  | None        | yes            | 0          | no             |

use tracing::info;

use crate::host::{CursorLockMode, HostEnvironment};
use crate::input::InputSnapshot;

/// Pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
}

/// Transition taken during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    Paused,
    Resumed,
}

/// Tracks the paused flag and keeps the host in sync with it.
#[derive(Debug, Clone, Default)]
pub struct PauseStateMachine {
    state: PauseState,
}

impl PauseStateMachine {
    /// Create a state machine in the `Running` state.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> PauseState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == PauseState::Paused
    }

    /// Whether movement and look input should be consumed.
    #[inline]
    pub fn can_move(&self) -> bool {
        !self.is_paused()
    }

    /// Process this frame's signals, then push the resulting state to the host.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        host: &mut impl HostEnvironment,
    ) -> Option<PauseTransition> {
        let transition = match self.state {
            PauseState::Running if input.pause_pressed => {
                self.state = PauseState::Paused;
                Some(PauseTransition::Paused)
            }
            PauseState::Paused if input.unpause_pressed => {
                self.state = PauseState::Running;
                Some(PauseTransition::Resumed)
            }
            _ => None,
        };

        if let Some(transition) = transition {
            info!(?transition, "pause state changed");
        }

        self.apply_side_effects(host);
        transition
    }

    /// Push the cursor and time-scale state for the current pause state.
    ///
    /// Idempotent: writes only what differs.
    pub fn apply_side_effects(&self, host: &mut impl HostEnvironment) {
        match self.state {
            PauseState::Running => {
                if host.cursor_lock() != CursorLockMode::Locked {
                    host.set_cursor_lock(CursorLockMode::Locked);
                }
                if host.cursor_visible() {
                    host.set_cursor_visible(false);
                }
                if host.time_scale() != 1.0 {
                    host.set_time_scale(1.0);
                }
            }
            PauseState::Paused => {
                if host.cursor_lock() != CursorLockMode::None {
                    host.set_cursor_lock(CursorLockMode::None);
                }
                if !host.cursor_visible() {
                    host.set_cursor_visible(true);
                }
                if host.time_scale() > 0.0 {
                    host.set_time_scale(0.0);
                }
            }
        }
    }
}
