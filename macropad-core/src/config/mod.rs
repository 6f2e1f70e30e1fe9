//! Keymap configuration
//!
//! The keymap is a JSON document deserialized into fixed-capacity
//! `heapless` containers. It is immutable once loaded.

pub mod keymap;
pub mod timing;

pub use keymap::*;
pub use timing::Timing;

use macropad_hal::FlashError;

/// Keymap loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Storage read failed or held no keymap
    Storage(FlashError),
    /// Stored bytes are not UTF-8
    InvalidUtf8,
    /// JSON malformed or a value exceeds its capacity
    Parse,
    /// A timing value is out of range
    InvalidTiming,
}

impl From<FlashError> for ConfigError {
    fn from(e: FlashError) -> Self {
        ConfigError::Storage(e)
    }
}
