//! Look Delta Accumulator
//!
//! Raw mouse motion arrives as many small device events between frames. This
//! accumulates it and hands the total to the controller once per poll.

use glam::Vec2;

/// Mouse motion accumulated between polls.
///
/// Deltas are stored in device convention (x right, y down) and converted to
/// the controller's look convention (y up) when consumed.
///
/// # Example
///
/// ```rust,ignore
/// use first_person_engine::input::LookAccumulator;
///
/// let mut mouse = LookAccumulator::new();
///
/// // In event loop: accumulate raw mouse motion
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // Once per frame
/// let look = mouse.consume_look();
/// // look = (13.0, 3.0)
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookAccumulator {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume (down positive).
    delta_y: f32,
    /// Whether motion is currently being captured.
    captured: bool,
}

impl LookAccumulator {
    /// Create an accumulator with zero deltas that is capturing motion.
    pub fn new() -> Self {
        Self {
            captured: true,
            ..Default::default()
        }
    }

    /// Accumulate raw mouse motion delta (device units, y down).
    ///
    /// Motion is ignored while not captured.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.captured {
            return;
        }
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta as a look vector (x right, y up) and
    /// reset it to zero.
    #[inline]
    pub fn consume_look(&mut self) -> Vec2 {
        let look = Vec2::new(self.delta_x, -self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        look
    }

    /// Start or stop capturing motion.
    ///
    /// Releasing clears pending deltas so the view does not jump on recapture.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let mut state = LookAccumulator::new();
        assert_eq!(state.consume_look(), Vec2::ZERO);
    }

    #[test]
    fn test_consume_sums_and_flips_vertical() {
        let mut state = LookAccumulator::new();
        state.accumulate_delta(10.0, 5.0);
        state.accumulate_delta(3.0, -2.0);

        assert_eq!(state.consume_look(), Vec2::new(13.0, -3.0));
        assert_eq!(state.consume_look(), Vec2::ZERO);
    }

    #[test]
    fn test_release_clears_and_ignores_motion() {
        let mut state = LookAccumulator::new();
        state.accumulate_delta(10.0, 5.0);

        state.set_captured(false);
        state.accumulate_delta(4.0, 4.0);
        assert_eq!(state.consume_look(), Vec2::ZERO);

        state.set_captured(true);
        state.accumulate_delta(1.0, 1.0);
        assert_eq!(state.consume_look(), Vec2::new(1.0, -1.0));
    }
}
