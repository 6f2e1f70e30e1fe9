//! Main controller task
//!
//! Runs the poll loop: sample inputs, fire bindings, refresh panels and
//! fall back to the idle view after inactivity.

use defmt::*;
use embassy_time::Timer;
use macropad_core::config::Keymap;
use macropad_core::{Controller, ServicedEvent};

use crate::board::MacropadBoard;

#[embassy_executor::task]
pub async fn controller_task(keymap: Option<&'static Keymap>, mut board: MacropadBoard) {
    info!("Controller task started");

    let mut controller = Controller::new(keymap, &mut board);
    if controller.is_inert() {
        warn!("Controller inert until a keymap is flashed");
    } else {
        debug!("Timing: {:?}", controller.timing());
    }

    loop {
        let report = controller.poll(&mut board).await;

        for event in report.events.iter() {
            log_event(event);
        }
        if report.went_idle {
            info!("Idle, panels reset");
        }

        Timer::after_millis(u64::from(controller.poll_interval_ms())).await;
    }
}

fn log_event<E: Format>(event: &ServicedEvent<E>) {
    match (&event.action, &event.outcome) {
        (_, Err(e)) => warn!("{:?}: HID write failed: {:?}", event.input, e),
        (Some(action), Ok(())) => debug!("{:?} -> {:?}", event.input, action),
        (None, Ok(())) => debug!("{:?} unbound", event.input),
    }
}
