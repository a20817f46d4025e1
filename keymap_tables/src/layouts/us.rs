//! US layout, the baseline every other layout is diffed against
//!
//! Letters, unshifted digits and keypad digits are not listed: the remapper
//! derives them directly from the key id.

use crate::control::ASCII_ENTER;
use crate::table::TableEntry;
use keymap_types::keys::*;

pub const ENTRIES: &[TableEntry] = &[
    TableEntry::shift(KEY_1, b'!'),
    TableEntry::shift(KEY_2, b'@'),
    TableEntry::shift(KEY_3, b'#'),
    TableEntry::shift(KEY_4, b'$'),
    TableEntry::shift(KEY_5, b'%'),
    TableEntry::shift(KEY_6, b'^'),
    TableEntry::shift(KEY_7, b'&'),
    TableEntry::shift(KEY_8, b'*'),
    TableEntry::shift(KEY_9, b'('),
    TableEntry::shift(KEY_0, b')'),
    TableEntry::plain(KEY_KP_DOT, b'.'),
    TableEntry::plain(KEY_KP_ENTER, ASCII_ENTER),
    TableEntry::plain(KEY_KP_PLUS, b'+'),
    TableEntry::plain(KEY_KP_MINUS, b'-'),
    TableEntry::plain(KEY_KP_TIMES, b'*'),
    TableEntry::plain(KEY_KP_DIV, b'/'),
    TableEntry::plain(KEY_KP_COMMA, b','),
    TableEntry::plain(KEY_KP_EQUAL, b'='),
    TableEntry::plain(KEY_APOS, b'\''),
    TableEntry::shift(KEY_APOS, b'"'),
    TableEntry::plain(KEY_COMMA, b','),
    TableEntry::shift(KEY_COMMA, b'<'),
    TableEntry::plain(KEY_MINUS, b'-'),
    TableEntry::shift(KEY_MINUS, b'_'),
    TableEntry::plain(KEY_DOT, b'.'),
    TableEntry::shift(KEY_DOT, b'>'),
    TableEntry::plain(KEY_DIV, b'/'),
    TableEntry::shift(KEY_DIV, b'?'),
    TableEntry::plain(KEY_SINGLE, b'`'),
    TableEntry::shift(KEY_SINGLE, b'~'),
    TableEntry::plain(KEY_SEMI, b';'),
    TableEntry::shift(KEY_SEMI, b':'),
    TableEntry::plain(KEY_BACK, b'\\'),
    TableEntry::shift(KEY_BACK, b'|'),
    TableEntry::plain(KEY_OPEN_SQ, b'['),
    TableEntry::shift(KEY_OPEN_SQ, b'{'),
    TableEntry::plain(KEY_CLOSE_SQ, b']'),
    TableEntry::shift(KEY_CLOSE_SQ, b'}'),
    TableEntry::plain(KEY_EQUAL, b'='),
    TableEntry::shift(KEY_EQUAL, b'+'),
];
