//! Window Host
//!
//! [`HostEnvironment`] backed by a winit window. Cursor lock maps to
//! `CursorGrabMode::Locked`, falling back to `Confined` on platforms that
//! cannot lock (X11, some Wayland compositors). The time scale has no window
//! counterpart and is kept here for the frame driver to read.
//!
//! # Usage
//!
//! ```rust,ignore
//! use first_person_engine::host::WindowHost;
//!
//! let host = WindowHost::new(window.clone());
//!
//! // WindowEvent::Focused(focused)
//! host.handle_focus(focused);
//! ```

use std::sync::Arc;

use tracing::{debug, warn};
use winit::window::{CursorGrabMode, Window};

use super::{CursorLockMode, HostEnvironment};

/// Host environment that drives a real window's cursor.
#[derive(Debug, Clone)]
pub struct WindowHost {
    window: Arc<Window>,
    time_scale: f32,
    cursor_lock: CursorLockMode,
    cursor_visible: bool,
    /// Whether the window currently has focus
    has_focus: bool,
}

impl WindowHost {
    /// Wrap a window. The cursor starts free and visible.
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            time_scale: 1.0,
            cursor_lock: CursorLockMode::None,
            cursor_visible: true,
            has_focus: true,
        }
    }

    /// The wrapped window.
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Handle a focus change.
    ///
    /// The requested cursor state is remembered while unfocused and pushed to
    /// the window again when focus returns, since most platforms drop the
    /// grab on focus loss.
    pub fn handle_focus(&mut self, focused: bool) {
        self.has_focus = focused;
        if focused {
            debug!(lock = ?self.cursor_lock, "focus regained, re-applying cursor state");
            self.apply_grab();
            self.window.set_cursor_visible(self.cursor_visible);
        }
    }

    /// Human-readable hint for the current cursor state.
    pub fn status_message(&self) -> &'static str {
        match self.cursor_lock {
            CursorLockMode::Locked => "ESC to pause",
            CursorLockMode::None => "Paused - Enter or click to resume",
        }
    }

    fn apply_grab(&self) {
        match self.cursor_lock {
            CursorLockMode::Locked => {
                if self.window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                    if let Err(err) = self.window.set_cursor_grab(CursorGrabMode::Confined) {
                        warn!(%err, "cursor grab unsupported");
                    }
                }
            }
            CursorLockMode::None => {
                if let Err(err) = self.window.set_cursor_grab(CursorGrabMode::None) {
                    warn!(%err, "failed to release cursor grab");
                }
            }
        }
    }
}

impl HostEnvironment for WindowHost {
    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    fn cursor_lock(&self) -> CursorLockMode {
        self.cursor_lock
    }

    fn set_cursor_lock(&mut self, mode: CursorLockMode) {
        self.cursor_lock = mode;
        if self.has_focus {
            self.apply_grab();
        }
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.window.set_cursor_visible(visible);
    }
}
