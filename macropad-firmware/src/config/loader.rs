//! Keymap sources
//!
//! Order: JSON text in the flash keymap partition, then the embedded
//! `keymap.json`. When neither yields a keymap the firmware runs inert.

use defmt::*;
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use macropad_core::config::{ConfigError, Keymap};
use macropad_hal_rp2040::flash::KeymapPartition;
use macropad_hal_rp2040::FlashError;
use static_cell::StaticCell;

/// Maximum keymap document size
const MAX_KEYMAP_SIZE: usize = 8192;

/// Embedded default keymap (compiled into firmware)
/// Edit keymap.json and rebuild to customize
#[cfg(feature = "embedded-keymap")]
const EMBEDDED_KEYMAP: &str = include_str!("../../keymap.json");

static READ_BUF: StaticCell<[u8; MAX_KEYMAP_SIZE]> = StaticCell::new();

/// Load the keymap from the first source that holds a valid one
pub fn load_keymap(flash: Peri<'static, FLASH>) -> Option<Keymap> {
    info!("Loading keymap from flash...");

    let mut partition = KeymapPartition::new(flash);
    let buffer = READ_BUF.init([0u8; MAX_KEYMAP_SIZE]);

    match Keymap::try_load(&mut partition, buffer) {
        Ok(keymap) => {
            info!("Loaded keymap from flash");
            log_keymap_summary(&keymap);
            return Some(keymap);
        }
        Err(ConfigError::Storage(FlashError::NotFound)) => {
            debug!("Keymap partition is empty");
        }
        Err(e) => {
            warn!("Flash keymap rejected: {:?}", e);
        }
    }

    load_embedded()
}

#[cfg(feature = "embedded-keymap")]
fn load_embedded() -> Option<Keymap> {
    match Keymap::parse(EMBEDDED_KEYMAP) {
        Ok(keymap) => {
            info!("Using embedded keymap");
            log_keymap_summary(&keymap);
            Some(keymap)
        }
        Err(e) => {
            // Should not happen, build.rs validates keymap.json
            error!("Failed to parse embedded keymap: {:?}", e);
            None
        }
    }
}

#[cfg(not(feature = "embedded-keymap"))]
fn load_embedded() -> Option<Keymap> {
    None
}

/// Log a summary of the loaded keymap
fn log_keymap_summary(keymap: &Keymap) {
    debug!("  {} switches", keymap.switches.len());
    debug!("  {} encoder buttons", keymap.encoder_buttons.len());
    debug!("  {} encoders", keymap.encoders.len());
    debug!("  timing: {:?}", keymap.timing);
}
