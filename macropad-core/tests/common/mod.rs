//! Host-side doubles for controller tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use macropad_core::config::Keymap;
use macropad_core::hid::{ConsumerCode, KeyChord, Keycode};
use macropad_core::sampler::InputSampler;
use macropad_core::traits::{Clock, DisplayError, HidSink, Panel};
use macropad_core::{Board, DisplaySurface};
use macropad_hal::{InputPin, PositionCounter};

/// Active-low pin that reads pressed for a scripted number of reads
#[derive(Clone, Default)]
pub struct ScriptedPin(Rc<Cell<u32>>);

impl ScriptedPin {
    /// Read low (pressed) for the next `reads` reads
    pub fn hold_for(&self, reads: u32) {
        self.0.set(reads);
    }
}

impl InputPin for ScriptedPin {
    fn is_high(&self) -> bool {
        let remaining = self.0.get();
        if remaining == 0 {
            return true;
        }
        self.0.set(remaining - 1);
        false
    }
}

#[derive(Clone, Default)]
pub struct MockCounter(Rc<Cell<i32>>);

impl MockCounter {
    pub fn turn(&self, steps: i32) {
        self.0.set(self.0.get().wrapping_add(steps));
    }
}

impl PositionCounter for MockCounter {
    fn position(&self) -> i32 {
        self.0.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HidOp {
    Chord { modifiers: u8, keys: Vec<Keycode> },
    Consumer(ConsumerCode),
    Press(u8),
    Wheel(i8),
    ReleaseAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotConfigured;

#[derive(Default)]
pub struct RecordingHid {
    pub ops: Vec<HidOp>,
    pub offline: bool,
}

impl RecordingHid {
    fn record(&mut self, op: HidOp) -> Result<(), NotConfigured> {
        if self.offline {
            return Err(NotConfigured);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl HidSink for RecordingHid {
    type Error = NotConfigured;

    async fn send_chord(&mut self, chord: &KeyChord) -> Result<(), NotConfigured> {
        self.record(HidOp::Chord {
            modifiers: chord.modifiers(),
            keys: chord.codes().collect(),
        })
    }

    async fn send_consumer(&mut self, code: ConsumerCode) -> Result<(), NotConfigured> {
        self.record(HidOp::Consumer(code))
    }

    async fn press(&mut self, chord: &KeyChord) -> Result<(), NotConfigured> {
        self.record(HidOp::Press(chord.modifiers()))
    }

    async fn wheel(&mut self, steps: i8) -> Result<(), NotConfigured> {
        self.record(HidOp::Wheel(steps))
    }

    async fn release_all(&mut self) -> Result<(), NotConfigured> {
        self.record(HidOp::ReleaseAll)
    }
}

#[derive(Default)]
pub struct RecordingPanel {
    pub frames: Vec<(String, String)>,
}

impl Panel for RecordingPanel {
    fn draw(&mut self, title: &str, message: &str) -> Result<(), DisplayError> {
        self.frames.push((title.to_string(), message.to_string()));
        Ok(())
    }

    fn blank(&mut self) -> Result<(), DisplayError> {
        self.frames.push((String::new(), String::new()));
        Ok(())
    }
}

/// Nanosecond timeline shared by the clock and the delay
#[derive(Clone, Default)]
pub struct Timeline(Rc<Cell<u64>>);

impl Timeline {
    pub fn advance_ms(&self, ms: u64) {
        self.0.set(self.0.get() + ms * 1_000_000);
    }

    pub fn now_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }
}

pub struct MockClock(Timeline);

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.0.now_ms()
    }
}

/// Delay that advances the shared timeline instead of sleeping
pub struct MockDelay {
    timeline: Timeline,
    pub calls: Rc<RefCell<Vec<u64>>>,
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls.borrow_mut().push(u64::from(ns));
        let t = &self.timeline.0;
        t.set(t.get() + u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.calls.borrow_mut().push(u64::from(ms) * 1_000_000);
        self.timeline.advance_ms(u64::from(ms));
    }
}

pub type TestBoard =
    Board<ScriptedPin, MockCounter, RecordingHid, RecordingPanel, MockClock, MockDelay>;

/// Handles the test keeps after the board takes ownership of the inputs
pub struct Rig {
    pub switches: Vec<ScriptedPin>,
    pub buttons: Vec<ScriptedPin>,
    pub encoders: Vec<MockCounter>,
    pub time: Timeline,
    pub delays: Rc<RefCell<Vec<u64>>>,
}

/// Board with 8 switches, 4 buttons, 4 encoders and the given panels
pub fn board(primary: bool, secondary: bool) -> (TestBoard, Rig) {
    let switches: Vec<ScriptedPin> = (0..8).map(|_| ScriptedPin::default()).collect();
    let buttons: Vec<ScriptedPin> = (0..4).map(|_| ScriptedPin::default()).collect();
    let encoders: Vec<MockCounter> = (0..4).map(|_| MockCounter::default()).collect();
    let time = Timeline::default();
    let delays = Rc::new(RefCell::new(Vec::new()));

    let board = Board {
        inputs: InputSampler::new(switches.clone(), buttons.clone(), encoders.clone()),
        hid: RecordingHid::default(),
        surface: DisplaySurface::new(
            primary.then(RecordingPanel::default),
            secondary.then(RecordingPanel::default),
        ),
        clock: MockClock(time.clone()),
        delay: MockDelay {
            timeline: time.clone(),
            calls: delays.clone(),
        },
    };

    let rig = Rig {
        switches,
        buttons,
        encoders,
        time,
        delays,
    };
    (board, rig)
}

pub const KEYMAP: &str = r#"{
    "switches": [
        {"label": "Shout", "cmd": "CTRL+SHIFT+A"},
        {"label": "Volume", "cmd": "VOL_UP"},
        {"label": "Odd", "cmd": "UNKNOWN_TOKEN+A"},
        {"label": "Nothing"}
    ],
    "encoders": [
        {"label": "Vol", "cw": "VOL_UP", "ccw": "VOL_DOWN", "push": "MUTE"},
        {"label": "Zoom", "cw": "ZOOM_IN", "ccw": "ZOOM_OUT"},
        {"label": "Bare"}
    ],
    "settings": {"switch_settle_ms": 50, "button_settle_ms": 20}
}"#;

pub fn keymap() -> Keymap {
    Keymap::parse(KEYMAP).unwrap()
}
