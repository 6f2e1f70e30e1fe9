//! Macropad Hardware Abstraction Layer
//!
//! This crate defines the input and storage primitives the control loop
//! consumes. Chip-specific crates implement them; the core never touches
//! pins, buses or flash directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  macropad-core (controller, keymap)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  macropad-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ macropad-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input level
//! - [`encoder::PositionCounter`] - Rotary encoder position
//! - [`flash::ConfigStorage`] - Read-only keymap resource

#![no_std]
#![deny(unsafe_code)]

pub mod encoder;
pub mod flash;
pub mod gpio;

pub use encoder::{PositionCounter, QuadratureDecoder, Step};
pub use flash::{payload_len, ConfigStorage, FlashError};
pub use gpio::InputPin;
