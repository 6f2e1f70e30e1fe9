//! USB device task
//!
//! Runs the device state machine: enumeration, suspend and resume.
//! HID reports are written by the controller through `UsbHid`.

use defmt::*;
use embassy_usb::UsbDevice;

use crate::usb::UsbDriver;

#[embassy_executor::task]
pub async fn usb_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB task started");
    device.run().await
}
