//! Board-agnostic core logic for the macropad firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Keymap model and loading
//! - Command resolution and HID dispatch
//! - Input sampling, edge detection and encoder tracking
//! - Display surface with two optional panels
//! - Idle monitoring
//! - The control loop tying it all together

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod events;
pub mod hid;
pub mod idle;
pub mod sampler;
pub mod surface;
pub mod traits;

pub use config::{Binding, ConfigError, Keymap, Timing};
pub use controller::{Board, Controller, PollReport, ServicedEvent};
pub use events::{Direction, InputEvent};
pub use hid::{dispatch, Action};
pub use surface::{DisplaySurface, PanelId};
