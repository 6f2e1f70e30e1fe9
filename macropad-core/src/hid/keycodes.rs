//! Key and consumer-control name tables
//!
//! Key names resolve to HID keyboard usage codes (usage page 0x07).
//! Media names resolve to consumer-control usage codes (usage page 0x0C).
//! Lookups are exact: names are case-sensitive and never trimmed.

/// HID keyboard usage code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keycode(pub u8);

impl Keycode {
    pub const ENTER: Keycode = Keycode(0x28);
    pub const ESC: Keycode = Keycode(0x29);
    pub const BACKSPACE: Keycode = Keycode(0x2A);
    pub const TAB: Keycode = Keycode(0x2B);
    pub const SPACE: Keycode = Keycode(0x2C);
    pub const DELETE: Keycode = Keycode(0x4C);
    pub const RIGHT: Keycode = Keycode(0x4F);
    pub const LEFT: Keycode = Keycode(0x50);
    pub const DOWN: Keycode = Keycode(0x51);
    pub const UP: Keycode = Keycode(0x52);

    pub const LEFT_CTRL: Keycode = Keycode(0xE0);
    pub const LEFT_SHIFT: Keycode = Keycode(0xE1);
    pub const LEFT_ALT: Keycode = Keycode(0xE2);
    pub const LEFT_GUI: Keycode = Keycode(0xE3);

    /// Whether this usage is one of the eight modifier keys
    pub const fn is_modifier(self) -> bool {
        self.0 >= 0xE0 && self.0 <= 0xE7
    }

    /// Bit in the boot-report modifier byte, 0 for ordinary keys
    pub const fn modifier_bit(self) -> u8 {
        if self.is_modifier() {
            1 << (self.0 - 0xE0)
        } else {
            0
        }
    }
}

/// HID consumer-control usage code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsumerCode(pub u16);

impl ConsumerCode {
    pub const SCAN_NEXT: ConsumerCode = ConsumerCode(0xB5);
    pub const SCAN_PREVIOUS: ConsumerCode = ConsumerCode(0xB6);
    pub const PLAY_PAUSE: ConsumerCode = ConsumerCode(0xCD);
    pub const MUTE: ConsumerCode = ConsumerCode(0xE2);
    pub const VOLUME_UP: ConsumerCode = ConsumerCode(0xE9);
    pub const VOLUME_DOWN: ConsumerCode = ConsumerCode(0xEA);
}

const NAMED_KEYS: &[(&str, Keycode)] = &[
    ("CTRL", Keycode::LEFT_CTRL),
    ("SHIFT", Keycode::LEFT_SHIFT),
    ("ALT", Keycode::LEFT_ALT),
    ("WIN", Keycode::LEFT_GUI),
    ("ENTER", Keycode::ENTER),
    ("ESC", Keycode::ESC),
    ("BACKSPACE", Keycode::BACKSPACE),
    ("TAB", Keycode::TAB),
    ("SPACE", Keycode::SPACE),
    ("DELETE", Keycode::DELETE),
    ("RIGHT", Keycode::RIGHT),
    ("LEFT", Keycode::LEFT),
    ("DOWN", Keycode::DOWN),
    ("UP", Keycode::UP),
];

const MEDIA: &[(&str, ConsumerCode)] = &[
    ("VOL_UP", ConsumerCode::VOLUME_UP),
    ("VOL_DOWN", ConsumerCode::VOLUME_DOWN),
    ("MUTE", ConsumerCode::MUTE),
    ("PLAY_PAUSE", ConsumerCode::PLAY_PAUSE),
    ("MEDIA_PLAY_PAUSE", ConsumerCode::PLAY_PAUSE),
    ("NEXT", ConsumerCode::SCAN_NEXT),
    ("MEDIA_NEXT", ConsumerCode::SCAN_NEXT),
    ("PREV", ConsumerCode::SCAN_PREVIOUS),
    ("MEDIA_PREV", ConsumerCode::SCAN_PREVIOUS),
];

/// Look up a media command name
pub fn lookup_media(name: &str) -> Option<ConsumerCode> {
    MEDIA
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Look up a single key token
///
/// Accepts `A`-`Z`, `0`-`9`, `F1`-`F15` and the named keys and modifiers.
pub fn lookup_key(name: &str) -> Option<Keycode> {
    if let Some(code) = single_char(name) {
        return Some(code);
    }
    if let Some(code) = function_key(name) {
        return Some(code);
    }
    NAMED_KEYS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

fn single_char(name: &str) -> Option<Keycode> {
    let &[c] = name.as_bytes() else {
        return None;
    };
    match c {
        b'A'..=b'Z' => Some(Keycode(0x04 + (c - b'A'))),
        b'1'..=b'9' => Some(Keycode(0x1E + (c - b'1'))),
        b'0' => Some(Keycode(0x27)),
        _ => None,
    }
}

fn function_key(name: &str) -> Option<Keycode> {
    let digits = name.strip_prefix('F')?;
    // Reject "F01", "F+1" and friends that `parse` would accept
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    match n {
        1..=12 => Some(Keycode(0x3A + (n - 1))),
        13..=15 => Some(Keycode(0x68 + (n - 13))),
        _ => None,
    }
}
