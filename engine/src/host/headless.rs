//! Headless Host
//!
//! In-memory [`HostEnvironment`] with no window behind it. Every write is
//! counted so tests can check that re-applying a state costs nothing.

use super::{CursorLockMode, HostEnvironment};

/// Host environment backed by plain fields.
///
/// Starts like a freshly launched application: real-time, cursor free and
/// visible.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    time_scale: f32,
    cursor_lock: CursorLockMode,
    cursor_visible: bool,
    /// Number of setter calls received
    writes: u32,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            cursor_lock: CursorLockMode::None,
            cursor_visible: true,
            writes: 0,
        }
    }
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of setter calls received since creation or the last reset.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }
}

impl HostEnvironment for HeadlessHost {
    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
        self.writes += 1;
    }

    fn cursor_lock(&self) -> CursorLockMode {
        self.cursor_lock
    }

    fn set_cursor_lock(&mut self, mode: CursorLockMode) {
        self.cursor_lock = mode;
        self.writes += 1;
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.writes += 1;
    }
}
