//! Config Startup Integration Tests
//!
//! These tests validate startup from a keymap config file:
//! - The file decides which layouts are registered
//! - The configured locale is active from the first key
//! - Custom tables layer over the baseline like built-in ones

use std::fs;

use keymap_tables::{layouts, LocaleTable, TableEntry};
use keymap_types::{keys::*, CountryCode};
use services_keymap::{KeymapBridge, KeymapConfig, KeymapError, Remapper};
use tests_keymap::{press, shifted, typed};

#[test]
fn test_startup_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.json");
    fs::write(&path, r#"{ "locale": "DE", "builtin_layouts": ["DE"] }"#).unwrap();

    let config = KeymapConfig::load(&path).unwrap();
    let registry = config.build_registry().unwrap();
    assert_eq!(registry.codes().collect::<Vec<_>>(), vec![layouts::US, layouts::DE]);

    let remapper = Remapper::from_config(&registry, &config).unwrap();
    let mut bridge = KeymapBridge::new(typed(&[press(KEY_Z), press(KEY_Y)]), remapper);
    assert_eq!(bridge.drain_text(), b"yz".to_vec());
}

#[test]
fn test_custom_layout_round_trip_through_file() {
    let dvorak_ish = CountryCode::parse("DV").unwrap();
    let mut config = KeymapConfig::default();
    config.locale = dvorak_ish;
    config.builtin_layouts = Some(Vec::new());
    config.custom_tables.push(LocaleTable::owned(
        dvorak_ish,
        vec![
            TableEntry::plain(KEY_Q, b'\''),
            TableEntry::shift(KEY_Q, b'"'),
            TableEntry::plain(KEY_W, b','),
        ],
    ));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.json");
    config.save(&path).unwrap();
    let loaded = KeymapConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let registry = loaded.build_registry().unwrap();
    let remapper = Remapper::from_config(&registry, &loaded).unwrap();
    let mut bridge = KeymapBridge::new(
        typed(&[press(KEY_Q), shifted(KEY_Q), press(KEY_W), press(KEY_E)]),
        remapper,
    );
    assert_eq!(bridge.drain_text(), b"'\",e".to_vec());
}

#[test]
fn test_saved_config_is_plain_json() {
    let mut config = KeymapConfig::default();
    config.locale = layouts::SE;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.json");
    config.save(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["locale"], "SE");
    assert!(value.get("builtin_layouts").is_none());
}

#[test]
fn test_corrupt_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.json");
    fs::write(&path, "{ locale: ").unwrap();

    assert!(matches!(KeymapConfig::load(&path), Err(KeymapError::Config(_))));
}
