//! SH1106 OLED text panels
//!
//! This crate provides:
//! - `Sh1106`, a framebuffered driver for 128x64 SH1106 panels over
//!   blocking I2C, usable as an `embedded-graphics` draw target
//! - `TextPanel`, which renders a title line and a message line and
//!   implements the core `Panel` trait
//!
//! Panels are optional hardware: `TextPanel::new` fails with a
//! `DisplayError` when the controller does not answer, and the firmware
//! simply leaves that panel slot empty.

#![no_std]

pub mod panel;
pub mod sh1106;

pub use panel::TextPanel;
pub use sh1106::{Sh1106, HEIGHT, SH1106_ADDR, WIDTH};
