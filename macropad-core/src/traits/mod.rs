//! Hardware abstraction traits
//!
//! These traits define the output side of the interface between the
//! application logic and the firmware. Input traits live in `macropad-hal`.

pub mod clock;
pub mod hid;
pub mod panel;

pub use clock::Clock;
pub use hid::HidSink;
pub use panel::{DisplayError, Panel};
