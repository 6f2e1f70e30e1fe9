//! Main control loop
//!
//! One [`Controller::poll`] call is one iteration: switches, then encoder
//! buttons, then encoder rotations, then the idle check. The firmware
//! calls it forever with a sleep in between.
//!
//! A held switch or button stalls the iteration in
//! [`Controller::await_release`] until it is let go.

use core::fmt::Write;

use embedded_hal_async::delay::DelayNs;
use heapless::{String, Vec};
use macropad_hal::{InputPin, PositionCounter};

use crate::config::{Binding, Keymap, Timing, MAX_ENCODERS, MAX_SWITCHES};
use crate::debounce::{Edge, EdgeDetector, RotationTracker};
use crate::events::InputEvent;
use crate::hid::{emit, Action};
use crate::idle::IdleMonitor;
use crate::sampler::{ButtonClass, InputSampler};
use crate::surface::{DisplaySurface, PanelId};
use crate::traits::{Clock, HidSink, Panel};

/// Most events one poll can service
pub const MAX_EVENTS: usize = MAX_SWITCHES + 2 * MAX_ENCODERS;

/// Sleep between polls while no keymap is loaded
pub const INERT_RETRY_MS: u32 = 1000;

/// Every capability the controller needs, passed in on each poll
pub struct Board<S, E, H, P, C, D> {
    pub inputs: InputSampler<S, E>,
    pub hid: H,
    pub surface: DisplaySurface<P>,
    pub clock: C,
    pub delay: D,
}

/// One serviced input
#[derive(Debug)]
pub struct ServicedEvent<E> {
    pub input: InputEvent,
    /// Resolved action, `None` for unbound inputs
    pub action: Option<Action>,
    /// HID delivery result
    pub outcome: Result<(), E>,
}

/// What happened during one poll
#[derive(Debug)]
pub struct PollReport<E> {
    pub events: Vec<ServicedEvent<E>, MAX_EVENTS>,
    /// The panels went back to the idle view during this poll
    pub went_idle: bool,
}

impl<E> PollReport<E> {
    fn new() -> Self {
        Self {
            events: Vec::new(),
            went_idle: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && !self.went_idle
    }
}

type Title = String<16>;

pub struct Controller<'k> {
    keymap: Option<&'k Keymap>,
    timing: Timing,
    switches: Vec<EdgeDetector, MAX_SWITCHES>,
    buttons: Vec<EdgeDetector, MAX_ENCODERS>,
    rotations: Vec<RotationTracker, MAX_ENCODERS>,
    idle: IdleMonitor,
}

impl<'k> Controller<'k> {
    /// Set up runtime state for the inputs on `board`
    ///
    /// Encoder counters are captured now so rotation before boot does not
    /// fire. With a keymap the idle view is drawn; without one the
    /// controller stays inert.
    pub fn new<S, E, H, P, C, D>(keymap: Option<&'k Keymap>, board: &mut Board<S, E, H, P, C, D>) -> Self
    where
        S: InputPin,
        E: PositionCounter,
        P: Panel,
        C: Clock,
    {
        let timing = keymap.map(|k| k.timing).unwrap_or_default();
        let inputs = &board.inputs;

        let switches = (0..inputs.switch_count()).map(|_| EdgeDetector::new()).collect();
        let buttons = (0..inputs.button_count()).map(|_| EdgeDetector::new()).collect();
        let rotations = (0..inputs.encoder_count())
            .map(|i| RotationTracker::new(inputs.position(i).unwrap_or(0)))
            .collect();

        if keymap.is_some() {
            board.surface.reset_to_idle();
        }

        Self {
            keymap,
            timing,
            switches,
            buttons,
            rotations,
            idle: IdleMonitor::new(u64::from(timing.idle_ms), board.clock.now_ms()),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.keymap.is_none()
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Sleep the caller should take before the next poll
    pub fn poll_interval_ms(&self) -> u32 {
        if self.is_inert() {
            INERT_RETRY_MS
        } else {
            self.timing.poll_interval_ms
        }
    }

    /// Run one loop iteration
    pub async fn poll<S, E, H, P, C, D>(
        &mut self,
        board: &mut Board<S, E, H, P, C, D>,
    ) -> PollReport<H::Error>
    where
        S: InputPin,
        E: PositionCounter,
        H: HidSink,
        P: Panel,
        C: Clock,
        D: DelayNs,
    {
        let mut report = PollReport::new();
        let Some(keymap) = self.keymap else {
            return report;
        };
        let timing = self.timing;

        for index in 0..self.switches.len() {
            let pressed = board.inputs.switch_pressed(index);
            if self.switches[index].update(pressed) != Some(Edge::Press) {
                continue;
            }
            let mut title = Title::new();
            let _ = write!(title, "SW{}:", index + 1);
            let event = service(
                board,
                InputEvent::Switch(index as u8),
                keymap.switch(index),
                PanelId::Primary,
                &title,
            )
            .await;
            let _ = report.events.push(event);

            Self::await_release(board, ButtonClass::Switch, index, timing.release_poll_ms).await;
            self.switches[index].update(false);
            board.delay.delay_ms(timing.switch_settle_ms).await;
        }

        for index in 0..self.buttons.len() {
            let pressed = board.inputs.button_pressed(index);
            if self.buttons[index].update(pressed) != Some(Edge::Press) {
                continue;
            }
            let mut title = Title::new();
            let _ = write!(title, "BTN {}:", index + 1);
            let event = service(
                board,
                InputEvent::EncoderButton(index as u8),
                keymap.encoder_button(index),
                PanelId::Primary,
                &title,
            )
            .await;
            let _ = report.events.push(event);

            Self::await_release(board, ButtonClass::EncoderButton, index, timing.release_poll_ms)
                .await;
            self.buttons[index].update(false);
            board.delay.delay_ms(timing.button_settle_ms).await;
        }

        for index in 0..self.rotations.len() {
            let Some(position) = board.inputs.position(index) else {
                continue;
            };
            let Some(direction) = self.rotations[index].update(position) else {
                continue;
            };
            let input = InputEvent::Rotation {
                encoder: index as u8,
                direction,
            };
            let binding = keymap.rotation(index, direction);
            let event = if binding.command.is_some() {
                let mut title = Title::new();
                let _ = write!(title, "E{} {}", index + 1, direction.as_str());
                service(board, input, binding, PanelId::Secondary, &title).await
            } else {
                ServicedEvent {
                    input,
                    action: None,
                    outcome: Ok(()),
                }
            };
            let _ = report.events.push(event);
        }

        let now = board.clock.now_ms();
        if !report.events.is_empty() {
            self.idle.on_activity(now);
        }
        if self.idle.tick(now) {
            board.surface.reset_to_idle();
            report.went_idle = true;
        }

        report
    }

    /// Block until a held input reads released, polling every `poll_ms`
    pub async fn await_release<S, E, H, P, C, D>(
        board: &mut Board<S, E, H, P, C, D>,
        class: ButtonClass,
        index: usize,
        poll_ms: u32,
    ) where
        S: InputPin,
        E: PositionCounter,
        D: DelayNs,
    {
        while board.inputs.pressed(class, index) {
            board.delay.delay_ms(poll_ms).await;
        }
    }
}

/// Dispatch a binding's command, then mirror it on `panel`
async fn service<S, E, H, P, C, D>(
    board: &mut Board<S, E, H, P, C, D>,
    input: InputEvent,
    binding: Binding<'_>,
    panel: PanelId,
    title: &str,
) -> ServicedEvent<H::Error>
where
    H: HidSink,
    P: Panel,
{
    let action = binding.command.and_then(Action::parse);
    let outcome = match &action {
        Some(action) => emit(&mut board.hid, action).await,
        None => Ok(()),
    };
    board.surface.draw(panel, title, binding.label);
    ServicedEvent {
        input,
        action,
        outcome,
    }
}
