//! Locale Layering Integration Tests
//!
//! These tests validate how the active locale, the baseline and the
//! built-in defaults combine:
//! - Locale entries override baseline entries
//! - Keys a locale leaves out fall through to the baseline
//! - Switching locale changes results, failed switches change nothing

use keymap_tables::{layouts, LocaleRegistry, LocaleTable, TableEntry};
use keymap_types::{keys::*, latin1::*, CountryCode, KeyEventCode, StatusBits};
use services_keymap::{KeymapError, Remapper};
use tests_keymap::{alt_gr, press, shifted};

#[test]
fn test_us_default_layout() {
    let registry = LocaleRegistry::builtin();
    let remapper = Remapper::new(&registry);

    assert_eq!(remapper.active_locale(), layouts::US);
    assert_eq!(remapper.remap_key_byte(press(KEY_A)), b'a');
    assert_eq!(remapper.remap_key_byte(shifted(KEY_A)), b'A');
    assert_eq!(remapper.remap_key_byte(shifted(KEY_2)), b'@');
    assert_eq!(remapper.remap_key_byte(press(KEY_SEMI)), b';');
    assert_eq!(remapper.remap_key_byte(press(KEY_KP7)), b'7');
    assert_eq!(remapper.remap_key_byte(press(KEY_5)), b'5');
}

#[test]
fn test_swedish_overrides_and_fallthrough() {
    let registry = LocaleRegistry::builtin();
    let remapper = Remapper::with_locale(&registry, "SE").unwrap();

    // Overridden
    assert_eq!(remapper.remap_key_byte(press(KEY_SEMI)), SMALL_O_DIAERESIS);
    assert_eq!(remapper.remap_key_byte(shifted(KEY_OPEN_SQ)), CAPITAL_A_RING);
    assert_eq!(remapper.remap_key_byte(shifted(KEY_2)), b'"');
    assert_eq!(remapper.remap_key_byte(alt_gr(KEY_2)), b'@');

    // Not in the Swedish table, answered by the baseline
    assert_eq!(remapper.remap_key_byte(shifted(KEY_1)), b'!');
    assert_eq!(remapper.remap_key_byte(press(KEY_KP_DIV)), b'/');

    // Not in any table, answered by the defaults
    assert_eq!(remapper.remap_key_byte(press(KEY_Q)), b'q');
    assert_eq!(remapper.remap_key_byte(press(KEY_KP0)), b'0');
}

#[test]
fn test_german_letter_swap_with_caps() {
    let registry = LocaleRegistry::builtin();
    let remapper = Remapper::with_locale(&registry, "DE").unwrap();
    let caps = |key| KeyEventCode::from_parts(StatusBits::CAPS, key);

    assert_eq!(remapper.remap_key_byte(press(KEY_Y)), b'z');
    assert_eq!(remapper.remap_key_byte(press(KEY_Z)), b'y');
    assert_eq!(remapper.remap_key_byte(caps(KEY_Y)), b'Z');
    assert_eq!(remapper.remap_key_byte(caps(KEY_SEMI)), CAPITAL_O_DIAERESIS);
    assert_eq!(remapper.remap_key_byte(press(KEY_MINUS)), SMALL_SHARP_S);
}

#[test]
fn test_uk_and_gb_are_the_same_layout() {
    let registry = LocaleRegistry::builtin();
    let uk = Remapper::with_locale(&registry, "UK").unwrap();
    let gb = Remapper::with_locale(&registry, "GB").unwrap();

    for base in 0x20..=0x8Bu8 {
        for bits in [StatusBits::empty(), StatusBits::SHIFT, StatusBits::ALT_GR] {
            let code = KeyEventCode::from_parts(bits, base);
            assert_eq!(uk.remap_key(code), gb.remap_key(code), "code {}", code);
        }
    }
}

#[test]
fn test_failed_switch_keeps_active_locale() {
    let registry = LocaleRegistry::builtin();
    let mut remapper = Remapper::with_locale(&registry, "FR").unwrap();
    let before = remapper.remap_key_byte(press(KEY_Q));

    for bad in ["fr", "XX", "", "FRA"] {
        let err = remapper.select_locale(bad).unwrap_err();
        assert!(matches!(err, KeymapError::LocaleNotFound(ref code) if code == bad));
    }

    assert_eq!(remapper.active_locale(), layouts::FR);
    assert_eq!(remapper.remap_key_byte(press(KEY_Q)), before);
    assert_eq!(before, b'a');
}

#[test]
fn test_contexts_are_independent() {
    let registry = LocaleRegistry::builtin();
    let mut first = Remapper::new(&registry);
    let second = Remapper::new(&registry);

    first.select_locale("SE").unwrap();

    assert_eq!(first.remap_key_byte(press(KEY_SEMI)), SMALL_O_DIAERESIS);
    assert_eq!(second.remap_key_byte(press(KEY_SEMI)), b';');
}

#[test]
fn test_switch_back_to_baseline() {
    let registry = LocaleRegistry::builtin();
    let mut remapper = Remapper::with_locale(&registry, "SE").unwrap();

    remapper.select_locale("US").unwrap();
    assert_eq!(remapper.active_locale(), layouts::US);
    assert_eq!(remapper.remap_key_byte(press(KEY_SEMI)), b';');
}

#[test]
fn test_europe2_needs_a_layout_entry() {
    let registry = LocaleRegistry::builtin();
    let us = Remapper::new(&registry);
    let se = Remapper::with_locale(&registry, "SE").unwrap();

    assert_eq!(us.remap_key_byte(press(KEY_EUROPE2)), 0);
    assert_eq!(se.remap_key_byte(press(KEY_EUROPE2)), b'<');
    assert_eq!(se.remap_key_byte(shifted(KEY_EUROPE2)), b'>');
    assert_eq!(se.remap_key_byte(alt_gr(KEY_EUROPE2)), b'|');
}

#[test]
fn test_shift_alt_gr_layer() {
    static ACUTES: [TableEntry; 2] = [
        TableEntry::alt_gr(KEY_E, SMALL_E_ACUTE),
        TableEntry::shift_alt_gr(KEY_E, CAPITAL_E_ACUTE),
    ];
    let mut registry = LocaleRegistry::builtin();
    registry
        .register(LocaleTable::from_static(CountryCode::from_bytes(*b"IE"), &ACUTES))
        .unwrap();
    let remapper = Remapper::with_locale(&registry, "IE").unwrap();

    let both = StatusBits::SHIFT | StatusBits::ALT_GR;
    let out = remapper.remap_key(KeyEventCode::from_parts(both, KEY_E));
    assert_eq!(out.base(), CAPITAL_E_ACUTE);
    assert!(!out.has_any(both));
    assert_eq!(remapper.remap_key_byte(alt_gr(KEY_E)), SMALL_E_ACUTE);
    // No Shift+AltGr entry and AltGr blocks the defaults
    assert_eq!(remapper.remap_key_byte(KeyEventCode::from_parts(both, KEY_A)), 0);
}

#[test]
fn test_uk_alt_gr_broken_bar() {
    let registry = LocaleRegistry::builtin();
    let remapper = Remapper::with_locale(&registry, "UK").unwrap();

    assert_eq!(remapper.remap_key_byte(alt_gr(KEY_SINGLE)), BROKEN_BAR);
    assert_eq!(remapper.remap_key_byte(shifted(KEY_SINGLE)), NOT_SIGN);
    assert_eq!(remapper.remap_key_byte(shifted(KEY_APOS)), b'@');
}
