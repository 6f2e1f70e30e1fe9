//! Keymap document model and lookups

use heapless::{String, Vec};
use macropad_hal::ConfigStorage;
use serde::Deserialize;

use super::{ConfigError, Timing};
use crate::events::Direction;

/// Maximum number of momentary switches
pub const MAX_SWITCHES: usize = 16;
/// Maximum number of rotary encoders (and encoder buttons)
pub const MAX_ENCODERS: usize = 8;
/// Maximum label length in bytes
pub const MAX_LABEL_LEN: usize = 24;
/// Maximum command length in bytes
pub const MAX_COMMAND_LEN: usize = 48;

pub type Label = String<MAX_LABEL_LEN>;
pub type Command = String<MAX_COMMAND_LEN>;

/// A switch or encoder button entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEntry {
    #[serde(default, alias = "name")]
    pub label: Option<Label>,
    #[serde(default)]
    pub cmd: Option<Command>,
}

/// A rotary encoder entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderEntry {
    #[serde(default, alias = "name")]
    pub label: Option<Label>,
    #[serde(default)]
    pub cw: Option<Command>,
    #[serde(default)]
    pub ccw: Option<Command>,
    /// Command for the integrated push button
    #[serde(default)]
    pub push: Option<Command>,
}

/// What an input is bound to
///
/// Empty label and `None` command when the input has no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding<'a> {
    pub label: &'a str,
    pub command: Option<&'a str>,
}

impl<'a> Binding<'a> {
    fn new(label: &'a Option<Label>, command: &'a Option<Command>) -> Self {
        Self {
            label: label.as_deref().unwrap_or(""),
            command: command.as_deref().filter(|c| !c.is_empty()),
        }
    }
}

/// The action mapping table
///
/// Each group is indexed by physical input number and may be shorter than
/// the number of inputs on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct Keymap {
    pub switches: Vec<KeyEntry, MAX_SWITCHES>,
    pub encoder_buttons: Vec<KeyEntry, MAX_ENCODERS>,
    pub encoders: Vec<EncoderEntry, MAX_ENCODERS>,
    #[serde(rename = "settings")]
    pub timing: Timing,
}

impl Keymap {
    /// Parse and validate a JSON keymap
    ///
    /// String escapes are decoded; no decoded string can be longer than a
    /// command, so one command-sized scratch buffer is enough.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let mut scratch = [0u8; MAX_COMMAND_LEN];
        let (keymap, _) = serde_json_core::from_str_escaped::<Keymap>(json, &mut scratch)
            .map_err(|_| ConfigError::Parse)?;
        keymap.timing.validate()?;
        Ok(keymap)
    }

    /// Read the keymap from storage, using `buffer` as scratch space
    pub fn try_load<S: ConfigStorage>(
        storage: &mut S,
        buffer: &mut [u8],
    ) -> Result<Self, ConfigError> {
        let len = storage.read_config(buffer)?;
        let text = core::str::from_utf8(&buffer[..len]).map_err(|_| ConfigError::InvalidUtf8)?;
        Self::parse(text)
    }

    /// Like [`Keymap::try_load`], discarding the reason
    pub fn load<S: ConfigStorage>(storage: &mut S, buffer: &mut [u8]) -> Option<Self> {
        Self::try_load(storage, buffer).ok()
    }

    pub fn switch(&self, index: usize) -> Binding<'_> {
        self.switches
            .get(index)
            .map(|e| Binding::new(&e.label, &e.cmd))
            .unwrap_or_default()
    }

    /// Encoder button binding
    ///
    /// An `encoder_buttons` entry wins; otherwise the encoder's own `push`
    /// command and label are used.
    pub fn encoder_button(&self, index: usize) -> Binding<'_> {
        if let Some(e) = self.encoder_buttons.get(index) {
            return Binding::new(&e.label, &e.cmd);
        }
        self.encoders
            .get(index)
            .map(|e| Binding::new(&e.label, &e.push))
            .unwrap_or_default()
    }

    pub fn rotation(&self, index: usize, direction: Direction) -> Binding<'_> {
        self.encoders
            .get(index)
            .map(|e| match direction {
                Direction::Cw => Binding::new(&e.label, &e.cw),
                Direction::Ccw => Binding::new(&e.label, &e.ccw),
            })
            .unwrap_or_default()
    }
}
