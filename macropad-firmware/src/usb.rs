//! USB composite HID device
//!
//! Three HID interfaces share one device:
//! - boot keyboard for key chords
//! - consumer control for media keys
//! - mouse, used only for wheel steps
//!
//! Output reports (keyboard LEDs) are not read.

use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, UsbDevice};
use macropad_core::hid::{ConsumerCode, KeyChord, MAX_REPORT_KEYS};
use macropad_core::traits::HidSink;
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport, MouseReport, SerializedDescriptor};

pub type UsbDriver = Driver<'static, USB>;

/// pid.codes open-source VID with a test PID
const USB_VID: u16 = 0x1209;
const USB_PID: u16 = 0x0001;
const USB_MANUFACTURER: &str = "Macropad";
const USB_PRODUCT: &str = "C-Panel";
const USB_SERIAL: &str = "000001";

const HID_POLL_MS: u8 = 1;
const HID_MAX_PACKET: u16 = 8;

/// Largest input report of the three interfaces
const REPORT_SIZE: usize = 8;

static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static KEYBOARD_STATE: StaticCell<State<'static>> = StaticCell::new();
static CONSUMER_STATE: StaticCell<State<'static>> = StaticCell::new();
static MOUSE_STATE: StaticCell<State<'static>> = StaticCell::new();

type Writer = HidWriter<'static, UsbDriver, REPORT_SIZE>;

fn create_usb_config() -> Config<'static> {
    let mut config = Config::new(USB_VID, USB_PID);
    config.manufacturer = Some(USB_MANUFACTURER);
    config.product = Some(USB_PRODUCT);
    config.serial_number = Some(USB_SERIAL);
    config.max_power = 100;
    config.max_packet_size_0 = 64;
    config
}

fn hid_config(report_descriptor: &'static [u8]) -> HidConfig<'static> {
    HidConfig {
        report_descriptor,
        request_handler: None,
        poll_ms: HID_POLL_MS,
        max_packet_size: HID_MAX_PACKET,
    }
}

/// Build the USB device and its HID writers
///
/// Call once at boot; the device must then be run by `usb_task`.
pub fn init(driver: UsbDriver) -> (UsbDevice<'static, UsbDriver>, UsbHid) {
    let mut builder = Builder::new(
        driver,
        create_usb_config(),
        CONFIG_DESC.init([0; 256]),
        BOS_DESC.init([0; 256]),
        MSOS_DESC.init([0; 256]),
        CONTROL_BUF.init([0; 64]),
    );

    let keyboard = Writer::new(
        &mut builder,
        KEYBOARD_STATE.init(State::new()),
        hid_config(KeyboardReport::desc()),
    );
    let consumer = Writer::new(
        &mut builder,
        CONSUMER_STATE.init(State::new()),
        hid_config(MediaKeyboardReport::desc()),
    );
    let mouse = Writer::new(
        &mut builder,
        MOUSE_STATE.init(State::new()),
        hid_config(MouseReport::desc()),
    );

    let device = builder.build();
    (
        device,
        UsbHid {
            keyboard,
            consumer,
            mouse,
        },
    )
}

fn keyboard_report(chord: Option<&KeyChord>) -> KeyboardReport {
    let mut keycodes = [0u8; MAX_REPORT_KEYS];
    let mut modifier = 0;
    if let Some(chord) = chord {
        modifier = chord.modifiers();
        for (slot, key) in keycodes.iter_mut().zip(chord.codes()) {
            *slot = key.0;
        }
    }
    KeyboardReport {
        modifier,
        reserved: 0,
        leds: 0,
        keycodes,
    }
}

fn wheel_report(wheel: i8) -> MouseReport {
    MouseReport {
        buttons: 0,
        x: 0,
        y: 0,
        wheel,
        pan: 0,
    }
}

/// HID output over the composite device
pub struct UsbHid {
    keyboard: Writer,
    consumer: Writer,
    mouse: Writer,
}

impl HidSink for UsbHid {
    type Error = EndpointError;

    async fn send_chord(&mut self, chord: &KeyChord) -> Result<(), EndpointError> {
        self.keyboard.write_serialize(&keyboard_report(Some(chord))).await?;
        self.keyboard.write_serialize(&keyboard_report(None)).await
    }

    async fn send_consumer(&mut self, code: ConsumerCode) -> Result<(), EndpointError> {
        self.consumer
            .write_serialize(&MediaKeyboardReport { usage_id: code.0 })
            .await?;
        self.consumer
            .write_serialize(&MediaKeyboardReport { usage_id: 0 })
            .await
    }

    async fn press(&mut self, chord: &KeyChord) -> Result<(), EndpointError> {
        self.keyboard.write_serialize(&keyboard_report(Some(chord))).await
    }

    async fn wheel(&mut self, steps: i8) -> Result<(), EndpointError> {
        self.mouse.write_serialize(&wheel_report(steps)).await?;
        self.mouse.write_serialize(&wheel_report(0)).await
    }

    async fn release_all(&mut self) -> Result<(), EndpointError> {
        self.keyboard.write_serialize(&keyboard_report(None)).await
    }
}
