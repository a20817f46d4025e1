//! Keymap Test Utilities
//!
//! Shared helpers for the keymap integration tests.
//!
//! ## Test Philosophy
//!
//! - **Layered answers**: A locale only overrides what it defines, everything else falls through
//! - **Deterministic input**: Key sequences are scripted, never read from hardware
//! - **Context isolation**: Two remappers over one registry never see each other's selection

use hal::ScriptedKeySource;
use keymap_types::{KeyEventCode, StatusBits};

/// Plain key press
pub fn press(key: u8) -> KeyEventCode {
    KeyEventCode::key(key)
}

/// Key press with Shift held
pub fn shifted(key: u8) -> KeyEventCode {
    KeyEventCode::from_parts(StatusBits::SHIFT, key)
}

/// Key press with AltGr held
pub fn alt_gr(key: u8) -> KeyEventCode {
    KeyEventCode::from_parts(StatusBits::ALT_GR, key)
}

/// Key release
pub fn release(key: u8) -> KeyEventCode {
    KeyEventCode::from_parts(StatusBits::BREAK, key)
}

/// Scripts a press followed by a release for every code
///
/// Releases carry the same status bits as their press.
pub fn typed(codes: &[KeyEventCode]) -> ScriptedKeySource {
    ScriptedKeySource::from_codes(
        codes
            .iter()
            .flat_map(|&code| [code, code.with(StatusBits::BREAK)]),
    )
}
