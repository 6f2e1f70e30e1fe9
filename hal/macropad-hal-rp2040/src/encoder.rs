//! Rotary encoder support
//!
//! A [`QuadratureEncoder`] samples its A/B pins from a dedicated task and
//! accumulates detents into a shared atomic counter. The control loop only
//! ever reads the counter through an [`EncoderCounter`].

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use macropad_hal::{PositionCounter, QuadratureDecoder};
use portable_atomic::{AtomicI32, Ordering};

/// Read side of an encoder position counter
#[derive(Clone, Copy)]
pub struct EncoderCounter {
    count: &'static AtomicI32,
}

impl EncoderCounter {
    pub const fn new(count: &'static AtomicI32) -> Self {
        Self { count }
    }
}

impl PositionCounter for EncoderCounter {
    fn position(&self) -> i32 {
        self.count.load(Ordering::Relaxed)
    }
}

/// Polled quadrature encoder
pub struct QuadratureEncoder {
    a: Input<'static>,
    b: Input<'static>,
    decoder: QuadratureDecoder,
    count: &'static AtomicI32,
}

impl QuadratureEncoder {
    pub fn new(
        a: Peri<'static, impl Pin>,
        b: Peri<'static, impl Pin>,
        count: &'static AtomicI32,
    ) -> Self {
        let a = Input::new(a, Pull::Up);
        let b = Input::new(b, Pull::Up);
        let decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
        Self {
            a,
            b,
            decoder,
            count,
        }
    }

    /// Sample the pins once; returns true when a detent was counted
    pub fn poll(&mut self) -> bool {
        match self.decoder.update(self.a.is_high(), self.b.is_high()) {
            Some(step) => {
                self.count.fetch_add(step.delta(), Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    pub fn counter(&self) -> EncoderCounter {
        EncoderCounter::new(self.count)
    }
}
