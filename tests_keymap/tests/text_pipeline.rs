//! Text Pipeline Integration Tests
//!
//! These tests drive scripted key sources through the bridge:
//! - Releases never produce text
//! - Control keys produce ASCII control bytes
//! - Function keys are reported, not typed

use hal::{HalKeyEvent, KeyEventSource, ScriptedKeySource};
use keymap_tables::LocaleRegistry;
use keymap_types::{keys::*, latin1::*, KeyEventCode, StatusBits};
use services_keymap::{BridgeOutput, KeymapBridge, Remapper};
use tests_keymap::{press, release, shifted, typed};

#[test]
fn test_typing_a_sentence() {
    let registry = LocaleRegistry::builtin();
    let source = typed(&[
        shifted(KEY_H),
        press(KEY_E),
        press(KEY_L),
        press(KEY_L),
        press(KEY_O),
        press(KEY_COMMA),
        press(KEY_SPACE),
        press(KEY_W),
        press(KEY_O),
        press(KEY_R),
        press(KEY_L),
        press(KEY_D),
        shifted(KEY_1),
        press(KEY_ENTER),
    ]);
    let mut bridge = KeymapBridge::new(source, Remapper::new(&registry));

    assert_eq!(bridge.drain_text(), b"Hello, world!\r".to_vec());
    assert_eq!(bridge.events_polled(), 28);
    assert_eq!(bridge.chars_emitted(), 14);
}

#[test]
fn test_swedish_text() {
    let registry = LocaleRegistry::builtin();
    let source = typed(&[
        shifted(KEY_SEMI),
        press(KEY_L),
        press(KEY_OPEN_SQ),
        press(KEY_N),
        press(KEY_S),
        press(KEY_Y),
        press(KEY_L),
        press(KEY_T),
        press(KEY_A),
    ]);
    let mut bridge = KeymapBridge::new(source, Remapper::with_locale(&registry, "SE").unwrap());

    let text: Vec<u8> = bridge.drain_text();
    assert_eq!(
        text,
        vec![CAPITAL_O_DIAERESIS, b'l', SMALL_A_RING, b'n', b's', b'y', b'l', b't', b'a']
    );
}

#[test]
fn test_control_keys_and_caps() {
    let registry = LocaleRegistry::builtin();
    let caps = |key| KeyEventCode::from_parts(StatusBits::CAPS, key);
    let source = ScriptedKeySource::from_codes([
        caps(KEY_A),
        caps(KEY_1),
        press(KEY_TAB),
        KeyEventCode::from_parts(StatusBits::FUNCTION, KEY_BS),
        press(KEY_ESC),
        press(KEY_DELETE),
    ]);
    let mut bridge = KeymapBridge::new(source, Remapper::new(&registry));

    assert_eq!(bridge.drain_text(), vec![b'A', b'1', 0x09, 0x08, 0x1B, 0x7F]);
}

#[test]
fn test_function_and_modifier_keys() {
    let registry = LocaleRegistry::builtin();
    let f1 = KeyEventCode::from_parts(StatusBits::FUNCTION, KEY_F1);
    let up = KeyEventCode::from_parts(StatusBits::FUNCTION, KEY_UP_ARROW);
    let lock = KeyEventCode::key(KEY_LOCK_ECHO);
    let source = ScriptedKeySource::from_codes([f1, up, lock, release(KEY_F1)]);
    let mut bridge = KeymapBridge::new(source, Remapper::new(&registry));

    assert_eq!(bridge.poll(), BridgeOutput::Function(f1));
    assert_eq!(bridge.poll(), BridgeOutput::Function(up));
    assert_eq!(bridge.poll(), BridgeOutput::Ignored(lock));
    assert_eq!(bridge.poll(), BridgeOutput::Ignored(release(KEY_F1)));
    assert_eq!(bridge.poll(), BridgeOutput::Idle);
    assert_eq!(bridge.chars_emitted(), 0);
}

#[test]
fn test_char_output_keeps_modifier_bits() {
    let registry = LocaleRegistry::builtin();
    let code = KeyEventCode::from_parts(StatusBits::SHIFT | StatusBits::GUI, KEY_A);
    let mut bridge = KeymapBridge::new(
        ScriptedKeySource::from_codes([code]),
        Remapper::new(&registry),
    );

    match bridge.poll() {
        BridgeOutput::Char(out) => {
            assert_eq!(out.base(), b'A');
            assert!(out.has(StatusBits::GUI));
            assert!(!out.has(StatusBits::SHIFT));
        }
        other => panic!("expected a character, got {:?}", other),
    }
}

#[test]
fn test_source_is_returned_with_unread_events() {
    let registry = LocaleRegistry::builtin();
    let source = ScriptedKeySource::from_codes([press(KEY_A), press(KEY_B)]);
    let mut bridge = KeymapBridge::new(source, Remapper::new(&registry));

    assert_eq!(bridge.poll().byte(), Some(b'a'));

    let mut source = bridge.into_source();
    assert_eq!(source.remaining(), 1);
    let event: Option<HalKeyEvent> = source.poll_event();
    assert_eq!(event.map(|e| e.code), Some(press(KEY_B)));
}
