//! Two-line text panel

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use macropad_core::traits::{DisplayError, Panel};

use crate::sh1106::Sh1106;

/// Left padding in pixels
const TEXT_PAD: i32 = 4;
/// Top of the title line
const TITLE_Y: i32 = 15;
/// Top of the message line
const MESSAGE_Y: i32 = 35;

/// SH1106 panel showing a title and a message
pub struct TextPanel<I2C> {
    display: Sh1106<I2C>,
}

impl<I2C: I2c> TextPanel<I2C> {
    /// Initialize the controller and blank the screen
    pub fn new(display: Sh1106<I2C>) -> Result<Self, DisplayError> {
        let mut panel = Self { display };
        panel
            .display
            .init()
            .map_err(|_| DisplayError::Communication)?;
        panel.blank()?;
        Ok(panel)
    }

    pub fn display(&self) -> &Sh1106<I2C> {
        &self.display
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.display.flush().map_err(|_| DisplayError::Communication)
    }
}

impl<I2C: I2c> Panel for TextPanel<I2C> {
    fn draw(&mut self, title: &str, message: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        self.display.clear_buffer();
        // Drawing into the framebuffer cannot fail
        let _ = Text::with_baseline(title, Point::new(TEXT_PAD, TITLE_Y), style, Baseline::Top)
            .draw(&mut self.display);
        let _ = Text::with_baseline(
            message,
            Point::new(TEXT_PAD, MESSAGE_Y),
            style,
            Baseline::Top,
        )
        .draw(&mut self.display);
        self.flush()
    }

    fn blank(&mut self) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        self.flush()
    }
}
