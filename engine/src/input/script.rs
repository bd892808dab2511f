//! Scripted Input
//!
//! Replays a JSON input script as an [`InputSource`]. Used by the `replay`
//! binary and by tests that need a known sequence of frames.
//!
//! # Format
//!
//! ```json
//! {
//!   "frame_dt": 0.016,
//!   "frames": [
//!     { "move": [0.0, 1.0], "repeat": 30 },
//!     { "look": [40.0, 0.0] },
//!     { "pause": true },
//!     { "unpause": true }
//!   ]
//! }
//! ```
//!
//! Every field of a frame is optional; `repeat` defaults to 1.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{InputSnapshot, InputSource};
use crate::error::ConfigError;

fn one() -> u32 {
    1
}

fn default_frame_dt() -> f32 {
    1.0 / 60.0
}

/// One scripted frame, optionally repeated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(rename = "move", default)]
    pub move_axis: Vec2,
    #[serde(default)]
    pub look: Vec2,
    #[serde(default)]
    pub pause: bool,
    #[serde(default)]
    pub unpause: bool,
    /// How many consecutive frames this entry covers
    #[serde(default = "one")]
    pub repeat: u32,
}

impl ScriptFrame {
    fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_axis: self.move_axis,
            look: self.look,
            pause_pressed: self.pause,
            unpause_pressed: self.unpause,
        }
    }
}

/// A full input script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    /// Wall-clock seconds per frame when replayed
    #[serde(default = "default_frame_dt")]
    pub frame_dt: f32,
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    /// Parse a script from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Total frames after expanding repeats.
    pub fn total_frames(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }
}

/// Input source that walks through a script.
///
/// Once the script runs out it keeps returning neutral snapshots.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: Vec<ScriptFrame>,
    /// Index of the current entry
    index: usize,
    /// Polls already served from the current entry
    served: u32,
}

impl ScriptedInput {
    pub fn new(script: &InputScript) -> Self {
        Self {
            frames: script.frames.clone(),
            index: 0,
            served: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        while let Some(frame) = self.frames.get(self.index) {
            if self.served < frame.repeat {
                self.served += 1;
                return frame.snapshot();
            }
            self.index += 1;
            self.served = 0;
        }
        InputSnapshot::default()
    }
}
