//! Rotary encoder abstractions
//!
//! The control loop only ever sees a signed position counter per encoder.
//! Quadrature decoding happens below that line, in whatever the chip HAL
//! uses to feed the counter.

/// Rotary encoder position source
///
/// The counter increments on clockwise detents and decrements on
/// counter-clockwise ones. It may wrap around `i32`.
pub trait PositionCounter {
    /// Current accumulated position
    fn position(&self) -> i32;
}

impl<T: PositionCounter + ?Sized> PositionCounter for &T {
    fn position(&self) -> i32 {
        (**self).position()
    }
}

/// One decoded detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Clockwise detent
    Cw,
    /// Counter-clockwise detent
    Ccw,
}

impl Step {
    /// Signed counter delta for this step
    pub fn delta(self) -> i32 {
        match self {
            Step::Cw => 1,
            Step::Ccw => -1,
        }
    }
}

/// Decoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature decoder with noise rejection
///
/// Feed it raw A/B levels (pull-ups, so both high at rest). A step is
/// reported once per full detent cycle.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    state: State,
    last_a: bool,
    last_b: bool,
}

impl QuadratureDecoder {
    /// Create a decoder from the current pin levels
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: State::Idle,
            last_a: a,
            last_b: b,
        }
    }

    /// Process a new sample of the A and B channels
    pub fn update(&mut self, a: bool, b: bool) -> Option<Step> {
        if a == self.last_a && b == self.last_b {
            return None;
        }

        let step = self.decode(a, b);

        self.last_a = a;
        self.last_b = b;

        step
    }

    /// Advance the state machine by one level change
    ///
    /// Clockwise walks `(1,1) (0,1) (0,0) (1,0)`, counter-clockwise walks
    /// `(1,1) (1,0) (0,0) (0,1)`. The step is counted on leaving `(0,0)`
    /// forward; leaving it backward returns to the first half of the cycle.
    fn decode(&mut self, a: bool, b: bool) -> Option<Step> {
        match (self.state, a, b) {
            (State::Idle, false, true) => self.state = State::CwStep1,
            (State::Idle, true, false) => self.state = State::CcwStep1,

            (State::CwStep1, false, false) => self.state = State::CwStep2,
            (State::CcwStep1, false, false) => self.state = State::CcwStep2,
            (State::CwStep1 | State::CcwStep1, true, true) => self.state = State::Idle,

            (State::CwStep2, false, true) => self.state = State::CwStep1,
            (State::CwStep2, true, _) => {
                self.state = State::Idle;
                return Some(Step::Cw);
            }
            (State::CcwStep2, true, false) => self.state = State::CcwStep1,
            (State::CcwStep2, _, true) => {
                self.state = State::Idle;
                return Some(Step::Ccw);
            }

            _ => {}
        }
        None
    }
}
