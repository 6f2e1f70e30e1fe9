//! Macropad - RP2040 control panel firmware
//!
//! Eight key switches and four push-button rotary encoders emit USB HID
//! keyboard, media and wheel reports according to a JSON keymap. Two
//! SH1106 panels show what last fired and fall back to an idle view.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::Delay;
use portable_atomic::AtomicI32;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use macropad_core::config::Keymap;
use macropad_core::sampler::InputSampler;
use macropad_core::{Board, DisplaySurface};
use macropad_display::{Sh1106, TextPanel};
use macropad_hal_rp2040::{GpioInput, QuadratureEncoder};

use crate::board::{i2c_config, OledPanel, UptimeClock, ENCODER_COUNT, PANEL_ROTATED};

mod board;
mod config;
mod tasks;
mod usb;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

// Encoder positions, written by the encoder task and read by the controller
static ENCODER_COUNTS: [AtomicI32; ENCODER_COUNT] = [
    AtomicI32::new(0),
    AtomicI32::new(0),
    AtomicI32::new(0),
    AtomicI32::new(0),
];

static KEYMAP: StaticCell<Keymap> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Macropad firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let keymap: Option<&'static Keymap> = config::load_keymap(p.FLASH).map(|k| &*KEYMAP.init(k));
    if keymap.is_none() {
        warn!("No keymap available, inputs will be ignored");
    }

    // Panels; a missing or unresponsive one is skipped
    let primary = match TextPanel::new(
        Sh1106::new(I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c_config()))
            .with_rotation(PANEL_ROTATED),
    ) {
        Ok(panel) => Some(OledPanel::Bus0(panel)),
        Err(e) => {
            warn!("Primary panel unavailable: {:?}", e);
            None
        }
    };
    let secondary = match TextPanel::new(
        Sh1106::new(I2c::new_blocking(p.I2C1, p.PIN_27, p.PIN_26, i2c_config()))
            .with_rotation(PANEL_ROTATED),
    ) {
        Ok(panel) => Some(OledPanel::Bus1(panel)),
        Err(e) => {
            warn!("Secondary panel unavailable: {:?}", e);
            None
        }
    };
    info!("Panels initialized");

    let switches = [
        GpioInput::pull_up(p.PIN_15),
        GpioInput::pull_up(p.PIN_14),
        GpioInput::pull_up(p.PIN_13),
        GpioInput::pull_up(p.PIN_12),
        GpioInput::pull_up(p.PIN_16),
        GpioInput::pull_up(p.PIN_17),
        GpioInput::pull_up(p.PIN_18),
        GpioInput::pull_up(p.PIN_19),
    ];
    let buttons = [
        GpioInput::pull_up(p.PIN_3),
        GpioInput::pull_up(p.PIN_2),
        GpioInput::pull_up(p.PIN_1),
        GpioInput::pull_up(p.PIN_0),
    ];

    let encoders = [
        QuadratureEncoder::new(p.PIN_7, p.PIN_6, &ENCODER_COUNTS[0]),
        QuadratureEncoder::new(p.PIN_10, p.PIN_11, &ENCODER_COUNTS[1]),
        QuadratureEncoder::new(p.PIN_8, p.PIN_9, &ENCODER_COUNTS[2]),
        QuadratureEncoder::new(p.PIN_4, p.PIN_5, &ENCODER_COUNTS[3]),
    ];
    let counters = encoders.each_ref().map(|e| e.counter());
    info!("Inputs initialized");

    let (device, hid) = usb::init(Driver::new(p.USB, Irqs));
    info!("USB HID initialized");

    let board = Board {
        inputs: InputSampler::new(switches, buttons, counters),
        hid,
        surface: DisplaySurface::new(primary, secondary),
        clock: UptimeClock,
        delay: Delay,
    };

    // Spawn tasks
    spawner.spawn(tasks::usb_task(device)).unwrap();
    spawner.spawn(tasks::encoder_task(encoders)).unwrap();
    spawner.spawn(tasks::controller_task(keymap, board)).unwrap();

    info!("All tasks spawned, firmware running");
}
