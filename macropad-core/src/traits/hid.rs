//! HID output trait

use core::future::Future;

use crate::hid::{ConsumerCode, KeyChord};

/// USB HID output channel
///
/// The core never builds reports or descriptors; it only calls these
/// primitives. Each call is one complete transaction from the caller's
/// point of view.
pub trait HidSink {
    /// Transport error (endpoint disabled, bus reset, ...)
    type Error;

    /// Press every key in the chord, then release them all
    fn send_chord(&mut self, chord: &KeyChord) -> impl Future<Output = Result<(), Self::Error>>;

    /// Send one consumer-control code (press then release)
    fn send_consumer(&mut self, code: ConsumerCode)
        -> impl Future<Output = Result<(), Self::Error>>;

    /// Press and hold the chord until [`HidSink::release_all`]
    fn press(&mut self, chord: &KeyChord) -> impl Future<Output = Result<(), Self::Error>>;

    /// Emit mouse wheel steps (positive scrolls up)
    fn wheel(&mut self, steps: i8) -> impl Future<Output = Result<(), Self::Error>>;

    /// Release every held key
    fn release_all(&mut self) -> impl Future<Output = Result<(), Self::Error>>;
}
