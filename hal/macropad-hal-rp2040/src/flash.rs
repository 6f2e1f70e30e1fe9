//! Keymap partition reader for RP2040
//!
//! The keymap is stored as plain JSON text in the last 64KB of flash,
//! terminated by a NUL byte or the erased state. It is flashed
//! separately from the firmware image.

use embassy_rp::flash::{Blocking, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use macropad_hal::{payload_len, ConfigStorage, FlashError};

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB flash on the Pico
pub const KEYMAP_PARTITION_SIZE: usize = 64 * 1024;
pub const KEYMAP_PARTITION_START: usize = FLASH_SIZE - KEYMAP_PARTITION_SIZE;

/// Raw read-only view of the keymap partition
pub struct KeymapPartition<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> KeymapPartition<'d> {
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        Self {
            flash: Flash::new_blocking(flash),
        }
    }
}

impl<'d> ConfigStorage for KeymapPartition<'d> {
    fn read_config(&mut self, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let len = buffer.len().min(KEYMAP_PARTITION_SIZE);
        self.flash
            .blocking_read(KEYMAP_PARTITION_START as u32, &mut buffer[..len])
            .map_err(|_| FlashError::Flash)?;
        payload_len(&buffer[..len])
    }
}
