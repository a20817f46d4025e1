//! Control keys
//!
//! Delete, Escape, Backspace, Tab, Enter and Space produce the same ASCII
//! code on every layout, so they bypass the locale tables.

use keymap_types::keys;

pub const ASCII_BACKSPACE: u8 = 0x08;
pub const ASCII_TAB: u8 = 0x09;
pub const ASCII_ENTER: u8 = 0x0D;
pub const ASCII_ESC: u8 = 0x1B;
pub const ASCII_SPACE: u8 = 0x20;
pub const ASCII_DELETE: u8 = 0x7F;

/// ASCII codes in key-id order, `KEY_DELETE` through `KEY_SPACE`
pub const CONTROL_CODES: [u8; 6] = [
    ASCII_DELETE,
    ASCII_ESC,
    ASCII_BACKSPACE,
    ASCII_TAB,
    ASCII_ENTER,
    ASCII_SPACE,
];

/// ASCII code for a control key, `None` for any other key
pub fn control_code(base: u8) -> Option<u8> {
    keys::control_index(base).and_then(|index| CONTROL_CODES.get(index).copied())
}
