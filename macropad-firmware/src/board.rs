//! Board wiring and platform capability types
//!
//! Pin assignments follow the second hardware revision of the panel:
//!
//! | Function         | GPIO                                  |
//! |------------------|---------------------------------------|
//! | Switches 1-8     | 15, 14, 13, 12, 16, 17, 18, 19        |
//! | Encoder buttons  | 3, 2, 1, 0                            |
//! | Encoders (A, B)  | (7, 6), (10, 11), (8, 9), (4, 5)      |
//! | Primary panel    | I2C0, SCL 21, SDA 20                  |
//! | Secondary panel  | I2C1, SCL 27, SDA 26                  |
//!
//! All inputs are active-low with internal pull-ups.

use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};
use embassy_time::{Delay, Instant};
use macropad_core::traits::{Clock, DisplayError, Panel};
use macropad_core::Board;
use macropad_display::TextPanel;
use macropad_hal_rp2040::{EncoderCounter, GpioInput};

use crate::usb::UsbHid;

pub const SWITCH_COUNT: usize = 8;
pub const BUTTON_COUNT: usize = 4;
pub const ENCODER_COUNT: usize = 4;

/// Panel bus speed
pub const I2C_FREQUENCY: u32 = 400_000;

/// Both panels are mounted upside down
pub const PANEL_ROTATED: bool = true;

pub fn i2c_config() -> i2c::Config {
    let mut config = i2c::Config::default();
    config.frequency = I2C_FREQUENCY;
    config
}

/// A panel on either I2C peripheral
pub enum OledPanel {
    Bus0(TextPanel<I2c<'static, I2C0, Blocking>>),
    Bus1(TextPanel<I2c<'static, I2C1, Blocking>>),
}

impl Panel for OledPanel {
    fn draw(&mut self, title: &str, message: &str) -> Result<(), DisplayError> {
        match self {
            OledPanel::Bus0(p) => p.draw(title, message),
            OledPanel::Bus1(p) => p.draw(title, message),
        }
    }

    fn blank(&mut self) -> Result<(), DisplayError> {
        match self {
            OledPanel::Bus0(p) => p.blank(),
            OledPanel::Bus1(p) => p.blank(),
        }
    }
}

/// Milliseconds since boot from the embassy time driver
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

pub type MacropadBoard = Board<GpioInput, EncoderCounter, UsbHid, OledPanel, UptimeClock, Delay>;
