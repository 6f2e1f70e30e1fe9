//! Keymap loading
//!
//! Loads the keymap from the flash partition, falling back to the keymap
//! compiled into the firmware.

pub mod loader;

pub use loader::load_keymap;
