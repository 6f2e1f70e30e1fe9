//! Press edge detection and rotation tracking
//!
//! Contact bounce is absorbed by the controller's settle delay after each
//! release; the state machines here only turn raw levels and counter
//! readings into discrete events.

use crate::events::Direction;

/// Edge produced by an [`EdgeDetector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Press,
    Release,
}

/// Debounced level of a switch-like input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    #[default]
    Released,
    Pressed,
}

/// Two-state edge detector for a switch or encoder button
///
/// A press edge fires once on Released -> Pressed. No further press fires
/// until the input has been observed released again.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    state: SwitchState,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            state: SwitchState::Released,
        }
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    /// Feed the current logical level (true = pressed)
    pub fn update(&mut self, pressed: bool) -> Option<Edge> {
        match (self.state, pressed) {
            (SwitchState::Released, true) => {
                self.state = SwitchState::Pressed;
                Some(Edge::Press)
            }
            (SwitchState::Pressed, false) => {
                self.state = SwitchState::Released;
                Some(Edge::Release)
            }
            _ => None,
        }
    }
}

/// Turns encoder counter readings into at most one tick per observation
#[derive(Debug, Clone, Copy)]
pub struct RotationTracker {
    last: i32,
}

impl RotationTracker {
    /// Start tracking from the current counter value
    pub const fn new(position: i32) -> Self {
        Self { last: position }
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    /// Compare with the previous reading
    ///
    /// Only the sign of the difference matters: a jump of +3 between two
    /// observations yields a single `Cw`. The counter may wrap.
    pub fn update(&mut self, position: i32) -> Option<Direction> {
        let delta = position.wrapping_sub(self.last);
        self.last = position;
        match delta {
            0 => None,
            d if d > 0 => Some(Direction::Cw),
            _ => Some(Direction::Ccw),
        }
    }
}
