//! Instantaneous input state
//!
//! Switches and encoder buttons are wired active-low with pull-ups; the
//! sampler normalizes them so that `true` means pressed.

use heapless::Vec;
use macropad_hal::{InputPin, PositionCounter};

use crate::config::{MAX_ENCODERS, MAX_SWITCHES};

/// Which class of switch-like input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonClass {
    Switch,
    EncoderButton,
}

/// Owns every input handle of the board
pub struct InputSampler<S, E> {
    switches: Vec<S, MAX_SWITCHES>,
    buttons: Vec<S, MAX_ENCODERS>,
    encoders: Vec<E, MAX_ENCODERS>,
}

impl<S: InputPin, E: PositionCounter> InputSampler<S, E> {
    /// Collect input handles; extra handles beyond the capacities are dropped
    pub fn new(
        switches: impl IntoIterator<Item = S>,
        buttons: impl IntoIterator<Item = S>,
        encoders: impl IntoIterator<Item = E>,
    ) -> Self {
        Self {
            switches: switches.into_iter().take(MAX_SWITCHES).collect(),
            buttons: buttons.into_iter().take(MAX_ENCODERS).collect(),
            encoders: encoders.into_iter().take(MAX_ENCODERS).collect(),
        }
    }

    pub fn switch_count(&self) -> usize {
        self.switches.len()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn encoder_count(&self) -> usize {
        self.encoders.len()
    }

    pub fn switch_pressed(&self, index: usize) -> bool {
        self.switches.get(index).is_some_and(|p| p.is_low())
    }

    pub fn button_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).is_some_and(|p| p.is_low())
    }

    pub fn pressed(&self, class: ButtonClass, index: usize) -> bool {
        match class {
            ButtonClass::Switch => self.switch_pressed(index),
            ButtonClass::EncoderButton => self.button_pressed(index),
        }
    }

    pub fn position(&self, index: usize) -> Option<i32> {
        self.encoders.get(index).map(|e| e.position())
    }
}
