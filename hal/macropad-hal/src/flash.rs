//! Keymap storage abstractions
//!
//! The keymap lives as plain UTF-8 text in a reserved flash region. The
//! region is written out-of-band (UF2 or debug probe); the firmware only
//! reads it.

/// Errors from flash storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Flash operation failed
    Flash,
    /// No keymap stored (region erased)
    NotFound,
    /// Keymap does not fit the read buffer
    BufferTooSmall,
}

/// Read-only configuration resource
pub trait ConfigStorage {
    /// Read the stored document into `buffer`
    ///
    /// # Returns
    /// The number of payload bytes, or an error.
    fn read_config(&mut self, buffer: &mut [u8]) -> Result<usize, FlashError>;
}

/// Terminator values of a stored document
///
/// `0xFF` is erased NOR flash, `0x00` an explicit terminator.
const ERASED: u8 = 0xFF;
const NUL: u8 = 0x00;

/// Length of the document at the start of a raw region dump
///
/// The document ends at the first NUL or erased byte. A dump without a
/// terminator means the document was cut off by the buffer size.
pub fn payload_len(raw: &[u8]) -> Result<usize, FlashError> {
    match raw.first() {
        None => return Err(FlashError::BufferTooSmall),
        Some(&ERASED) | Some(&NUL) => return Err(FlashError::NotFound),
        Some(_) => {}
    }

    raw.iter()
        .position(|&b| b == ERASED || b == NUL)
        .ok_or(FlashError::BufferTooSmall)
}
