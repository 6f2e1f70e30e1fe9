//! Command resolution

use heapless::Vec;

use super::keycodes::{lookup_key, lookup_media, ConsumerCode, Keycode};

/// Maximum keys in one chord: every modifier plus a full 6-key boot report
pub const MAX_CHORD_KEYS: usize = 10;

/// Non-modifier slots in a boot keyboard report
pub const MAX_REPORT_KEYS: usize = 6;

/// Keys pressed together in one transaction
///
/// Keys are kept in command order without duplicates. Non-modifier keys
/// beyond [`MAX_REPORT_KEYS`] are dropped, so a chord always fits one
/// report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyChord {
    keys: Vec<Keycode, MAX_CHORD_KEYS>,
}

impl KeyChord {
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Chord holding only the left control key
    pub fn ctrl() -> Self {
        let mut chord = Self::new();
        chord.push(Keycode::LEFT_CTRL);
        chord
    }

    /// Add a key; returns false if it was already present or the chord is full
    pub fn push(&mut self, key: Keycode) -> bool {
        if self.keys.contains(&key) {
            return false;
        }
        if !key.is_modifier() && self.codes().count() >= MAX_REPORT_KEYS {
            return false;
        }
        self.keys.push(key).is_ok()
    }

    pub fn keys(&self) -> &[Keycode] {
        &self.keys
    }

    pub fn contains(&self, key: Keycode) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Modifier byte for a boot keyboard report
    pub fn modifiers(&self) -> u8 {
        self.keys.iter().fold(0, |bits, k| bits | k.modifier_bit())
    }

    /// Non-modifier keys in command order
    pub fn codes(&self) -> impl Iterator<Item = Keycode> + '_ {
        self.keys.iter().copied().filter(|k| !k.is_modifier())
    }
}

/// A resolved command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Consumer-control press and release
    Media(ConsumerCode),
    /// Keyboard chord press-all then release-all
    Chord(KeyChord),
    /// Mouse wheel steps, positive is up
    Scroll(i8),
    /// Mouse wheel steps with CTRL held
    Zoom(i8),
}

impl Action {
    /// Resolve a command string
    ///
    /// Media and scroll names match exactly. Anything else is split on `+`
    /// into key tokens; unknown tokens are dropped and duplicates collapse.
    /// Returns `None` when nothing resolvable remains.
    pub fn parse(command: &str) -> Option<Action> {
        if command.is_empty() {
            return None;
        }
        if let Some(code) = lookup_media(command) {
            return Some(Action::Media(code));
        }
        match command {
            "SCROLL_UP" => return Some(Action::Scroll(1)),
            "SCROLL_DOWN" => return Some(Action::Scroll(-1)),
            "ZOOM_IN" => return Some(Action::Zoom(1)),
            "ZOOM_OUT" => return Some(Action::Zoom(-1)),
            _ => {}
        }

        let mut chord = KeyChord::new();
        for key in command.split('+').filter_map(lookup_key) {
            chord.push(key);
        }
        if chord.is_empty() {
            None
        } else {
            Some(Action::Chord(chord))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(command: &str) -> KeyChord {
        match Action::parse(command) {
            Some(Action::Chord(c)) => c,
            other => panic!("expected chord, got {:?}", other),
        }
    }

    #[test]
    fn test_ctrl_shift_a() {
        let c = chord("CTRL+SHIFT+A");
        assert_eq!(
            c.keys(),
            &[Keycode::LEFT_CTRL, Keycode::LEFT_SHIFT, Keycode(0x04)]
        );
        assert_eq!(c.modifiers(), 0x03);
        assert!(c.codes().eq([Keycode(0x04)]));
    }

    #[test]
    fn test_media_takes_consumer_path() {
        assert_eq!(
            Action::parse("VOL_UP"),
            Some(Action::Media(ConsumerCode::VOLUME_UP))
        );
    }

    #[test]
    fn test_media_name_inside_chord_is_unknown() {
        assert_eq!(chord("CTRL+VOL_UP").keys(), &[Keycode::LEFT_CTRL]);
    }

    #[test]
    fn test_unknown_tokens_dropped() {
        assert_eq!(chord("CTRL+FOO+C").keys(), &[Keycode::LEFT_CTRL, Keycode(0x06)]);
        assert_eq!(Action::parse("FOO+BAR"), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(chord("A+A+CTRL+A").keys(), &[Keycode(0x04), Keycode::LEFT_CTRL]);
    }

    #[test]
    fn test_tokens_not_trimmed() {
        assert_eq!(Action::parse("CTRL + C"), None);
        assert_eq!(chord("CTRL+ C").keys(), &[Keycode::LEFT_CTRL]);
    }

    #[test]
    fn test_empty_and_separators() {
        assert_eq!(Action::parse(""), None);
        assert_eq!(Action::parse("+"), None);
        assert_eq!(chord("+A+").keys(), &[Keycode(0x04)]);
    }

    #[test]
    fn test_scroll_and_zoom() {
        assert_eq!(Action::parse("SCROLL_UP"), Some(Action::Scroll(1)));
        assert_eq!(Action::parse("SCROLL_DOWN"), Some(Action::Scroll(-1)));
        assert_eq!(Action::parse("ZOOM_IN"), Some(Action::Zoom(1)));
        assert_eq!(Action::parse("ZOOM_OUT"), Some(Action::Zoom(-1)));
        assert_eq!(Action::parse("zoom_in"), None);
    }

    #[test]
    fn test_chord_capacity() {
        let c = chord("CTRL+SHIFT+ALT+WIN+A+B+C+D+E+F+G+H");
        assert_eq!(c.len(), MAX_CHORD_KEYS);
        assert_eq!(c.modifiers(), 0x0F);
        assert_eq!(c.codes().count(), 6);
        assert!(!c.contains(Keycode(0x0A)));
    }

    #[test]
    fn test_seventh_key_is_dropped() {
        let c = chord("A+B+C+D+E+F+G");
        assert_eq!(c.len(), MAX_REPORT_KEYS);
        assert!(!c.contains(Keycode(0x0A)));

        // Modifiers still fit after the report slots are taken
        let mut c = chord("A+B+C+D+E+F");
        assert!(!c.push(Keycode(0x0A)));
        assert!(c.push(Keycode::LEFT_SHIFT));
        assert_eq!(c.modifiers(), 0x02);
        assert_eq!(c.codes().count(), MAX_REPORT_KEYS);
    }
}
