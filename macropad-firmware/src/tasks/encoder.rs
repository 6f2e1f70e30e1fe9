//! Encoder sampling task
//!
//! Polls every encoder's A/B pins on a fixed tick so detents are counted
//! even while the controller waits on a held switch.

use defmt::*;
use embassy_time::{Duration, Ticker};
use macropad_hal_rp2040::QuadratureEncoder;

use crate::board::ENCODER_COUNT;

/// Sampling interval in microseconds
pub const SAMPLE_INTERVAL_US: u64 = 1000;

#[embassy_executor::task]
pub async fn encoder_task(mut encoders: [QuadratureEncoder; ENCODER_COUNT]) {
    info!("Encoder task started");

    let mut ticker = Ticker::every(Duration::from_micros(SAMPLE_INTERVAL_US));

    loop {
        ticker.next().await;

        for encoder in encoders.iter_mut() {
            encoder.poll();
        }
    }
}
