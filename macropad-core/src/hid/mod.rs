//! Command resolution and HID dispatch
//!
//! A command is a short text string from the keymap. It resolves to one
//! [`Action`], which is then emitted through a [`HidSink`](crate::traits::HidSink).

pub mod action;
pub mod dispatch;
pub mod keycodes;

pub use action::{Action, KeyChord, MAX_CHORD_KEYS, MAX_REPORT_KEYS};
pub use dispatch::{dispatch, emit};
pub use keycodes::{lookup_key, lookup_media, ConsumerCode, Keycode};
