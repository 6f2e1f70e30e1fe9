use macropad_core::debounce::RotationTracker;
use macropad_core::hid::{lookup_key, Action, MAX_CHORD_KEYS};
use macropad_core::Direction;
use proptest::prelude::*;

const TOKENS: &[&str] = &[
    "CTRL", "SHIFT", "ALT", "WIN", "A", "B", "Z", "0", "9", "F1", "F15", "ENTER", "TAB", "UP",
    "FOO", "ctrl", "", "VOL_UP",
];

proptest! {
    #[test]
    fn rotation_uses_only_the_sign(start in any::<i32>(), delta in any::<i32>()) {
        let mut tracker = RotationTracker::new(start);
        let expected = match delta {
            0 => None,
            d if d > 0 => Some(Direction::Cw),
            _ => Some(Direction::Ccw),
        };
        prop_assert_eq!(tracker.update(start.wrapping_add(delta)), expected);
        prop_assert_eq!(tracker.update(start.wrapping_add(delta)), None);
    }

    #[test]
    fn parse_never_panics(command in ".{0,64}") {
        let _ = Action::parse(&command);
    }

    #[test]
    fn chords_hold_known_unique_keys(picks in proptest::collection::vec(0..TOKENS.len(), 0..12)) {
        let command = picks.iter().map(|&i| TOKENS[i]).collect::<Vec<_>>().join("+");
        let mut expected = Vec::new();
        for key in picks.iter().filter_map(|&i| lookup_key(TOKENS[i])) {
            if !expected.contains(&key) && expected.len() < MAX_CHORD_KEYS {
                expected.push(key);
            }
        }

        match Action::parse(&command) {
            Some(Action::Chord(chord)) => prop_assert_eq!(chord.keys(), &expected[..]),
            // A lone media name resolves on the consumer path
            Some(Action::Media(_)) => prop_assert_eq!(command.as_str(), "VOL_UP"),
            None => prop_assert!(expected.is_empty()),
            Some(other) => prop_assert!(false, "unexpected action {:?}", other),
        }
    }
}
