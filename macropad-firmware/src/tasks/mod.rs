//! Embassy async tasks

pub mod controller;
pub mod encoder;
pub mod usb;

pub use controller::controller_task;
pub use encoder::encoder_task;
pub use usb::usb_task;
