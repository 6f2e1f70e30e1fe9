//! Action emission

use super::action::{Action, KeyChord};
use crate::traits::HidSink;

/// Resolve `command` and emit it as one HID transaction
///
/// Absent, empty and unresolvable commands are a no-op returning `Ok(None)`.
pub async fn dispatch<H: HidSink>(
    hid: &mut H,
    command: Option<&str>,
) -> Result<Option<Action>, H::Error> {
    let Some(action) = command.and_then(Action::parse) else {
        return Ok(None);
    };
    emit(hid, &action).await?;
    Ok(Some(action))
}

/// Emit an already resolved action
pub async fn emit<H: HidSink>(hid: &mut H, action: &Action) -> Result<(), H::Error> {
    match action {
        Action::Media(code) => hid.send_consumer(*code).await,
        Action::Chord(chord) => hid.send_chord(chord).await,
        Action::Scroll(steps) => hid.wheel(*steps).await,
        Action::Zoom(steps) => {
            hid.press(&KeyChord::ctrl()).await?;
            let wheel = hid.wheel(*steps).await;
            // CTRL must not stay latched on the host even if the wheel report failed
            hid.release_all().await?;
            wheel
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use embassy_futures::block_on;

    use super::*;
    use crate::hid::{ConsumerCode, Keycode};

    #[derive(Debug, PartialEq)]
    enum Op {
        Chord(u8, Vec<Keycode>),
        Consumer(ConsumerCode),
        Press(u8),
        Wheel(i8),
        ReleaseAll,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
        fail_wheel: bool,
    }

    impl HidSink for Recorder {
        type Error = ();

        async fn send_chord(&mut self, chord: &KeyChord) -> Result<(), ()> {
            self.ops.push(Op::Chord(chord.modifiers(), chord.codes().collect()));
            Ok(())
        }

        async fn send_consumer(&mut self, code: ConsumerCode) -> Result<(), ()> {
            self.ops.push(Op::Consumer(code));
            Ok(())
        }

        async fn press(&mut self, chord: &KeyChord) -> Result<(), ()> {
            self.ops.push(Op::Press(chord.modifiers()));
            Ok(())
        }

        async fn wheel(&mut self, steps: i8) -> Result<(), ()> {
            self.ops.push(Op::Wheel(steps));
            if self.fail_wheel {
                Err(())
            } else {
                Ok(())
            }
        }

        async fn release_all(&mut self) -> Result<(), ()> {
            self.ops.push(Op::ReleaseAll);
            Ok(())
        }
    }

    #[test]
    fn test_absent_command_is_noop() {
        let mut hid = Recorder::default();
        assert_eq!(block_on(dispatch(&mut hid, None)), Ok(None));
        assert_eq!(block_on(dispatch(&mut hid, Some(""))), Ok(None));
        assert_eq!(block_on(dispatch(&mut hid, Some("NOPE"))), Ok(None));
        assert!(hid.ops.is_empty());
    }

    #[test]
    fn test_chord_is_single_transaction() {
        let mut hid = Recorder::default();
        let action = block_on(dispatch(&mut hid, Some("CTRL+SHIFT+A"))).unwrap();
        assert!(matches!(action, Some(Action::Chord(_))));
        assert_eq!(hid.ops, [Op::Chord(0x03, std::vec![Keycode(0x04)])]);
    }

    #[test]
    fn test_media_uses_consumer_channel() {
        let mut hid = Recorder::default();
        block_on(dispatch(&mut hid, Some("VOL_UP"))).unwrap();
        assert_eq!(hid.ops, [Op::Consumer(ConsumerCode::VOLUME_UP)]);
    }

    #[test]
    fn test_scroll_sends_wheel_only() {
        let mut hid = Recorder::default();
        block_on(dispatch(&mut hid, Some("SCROLL_DOWN"))).unwrap();
        assert_eq!(hid.ops, [Op::Wheel(-1)]);
    }

    #[test]
    fn test_zoom_holds_ctrl() {
        let mut hid = Recorder::default();
        block_on(dispatch(&mut hid, Some("ZOOM_IN"))).unwrap();
        assert_eq!(hid.ops, [Op::Press(0x01), Op::Wheel(1), Op::ReleaseAll]);
    }

    #[test]
    fn test_zoom_releases_after_wheel_failure() {
        let mut hid = Recorder {
            fail_wheel: true,
            ..Default::default()
        };
        assert_eq!(block_on(dispatch(&mut hid, Some("ZOOM_OUT"))), Err(()));
        assert_eq!(hid.ops, [Op::Press(0x01), Op::Wheel(-1), Op::ReleaseAll]);
    }
}
