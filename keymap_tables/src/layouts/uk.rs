//! British layout
//!
//! Only the keys that differ from the US baseline. The AltGr euro sign is
//! outside Latin-1 and has no entry.

use crate::table::TableEntry;
use keymap_types::keys::*;
use keymap_types::latin1::*;

pub const ENTRIES: &[TableEntry] = &[
    TableEntry::shift(KEY_2, b'"'),
    TableEntry::shift(KEY_3, POUND_SIGN),
    TableEntry::shift(KEY_APOS, b'@'),
    TableEntry::plain(KEY_BACK, b'#'),
    TableEntry::shift(KEY_BACK, b'~'),
    TableEntry::shift(KEY_SINGLE, NOT_SIGN),
    TableEntry::alt_gr(KEY_SINGLE, BROKEN_BAR),
    TableEntry::plain(KEY_EUROPE2, b'\\'),
    TableEntry::shift(KEY_EUROPE2, b'|'),
];
