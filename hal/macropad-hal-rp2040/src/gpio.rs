//! GPIO inputs

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// Active-low input with the internal pull-up enabled
pub struct GpioInput {
    input: Input<'static>,
}

impl GpioInput {
    pub fn pull_up(pin: Peri<'static, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl macropad_hal::InputPin for GpioInput {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
