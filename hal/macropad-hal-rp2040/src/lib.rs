//! RP2040-specific HAL for the macropad firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `macropad-hal` traits:
//!
//! - Pulled-up GPIO inputs for switches and encoder buttons
//! - Quadrature encoder polling feeding atomic position counters
//! - Raw keymap partition reader at the end of flash

#![no_std]

pub mod encoder;
pub mod flash;
pub mod gpio;

pub use encoder::{EncoderCounter, QuadratureEncoder};
pub use flash::KeymapPartition;
pub use gpio::GpioInput;

// Re-export shared traits from macropad-hal for convenience
pub use macropad_hal::{ConfigStorage, FlashError, InputPin, PositionCounter};
