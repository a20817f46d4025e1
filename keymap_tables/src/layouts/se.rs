//! Swedish layout

use crate::table::TableEntry;
use keymap_types::keys::*;
use keymap_types::latin1::*;

pub const ENTRIES: &[TableEntry] = &[
    // Top row
    TableEntry::plain(KEY_SINGLE, SECTION_SIGN),
    TableEntry::plain(KEY_MINUS, b'+'),
    TableEntry::plain(KEY_EQUAL, ACUTE_ACCENT),
    TableEntry::shift(KEY_SINGLE, FRACTION_ONE_HALF),
    TableEntry::shift(KEY_2, b'"'),
    TableEntry::shift(KEY_4, CURRENCY_SIGN),
    TableEntry::shift(KEY_6, b'&'),
    TableEntry::shift(KEY_7, b'/'),
    TableEntry::shift(KEY_8, b'('),
    TableEntry::shift(KEY_9, b')'),
    TableEntry::shift(KEY_0, b'='),
    TableEntry::shift(KEY_MINUS, b'?'),
    TableEntry::shift(KEY_EQUAL, b'`'),
    TableEntry::alt_gr(KEY_2, b'@'),
    TableEntry::alt_gr(KEY_3, POUND_SIGN),
    TableEntry::alt_gr(KEY_4, b'$'),
    TableEntry::alt_gr(KEY_7, b'{'),
    TableEntry::alt_gr(KEY_8, b'['),
    TableEntry::alt_gr(KEY_9, b']'),
    TableEntry::alt_gr(KEY_0, b'}'),
    TableEntry::alt_gr(KEY_MINUS, b'\\'),
    // Second row
    TableEntry::plain(KEY_OPEN_SQ, SMALL_A_RING),
    TableEntry::plain(KEY_CLOSE_SQ, DIAERESIS),
    TableEntry::shift(KEY_OPEN_SQ, CAPITAL_A_RING),
    TableEntry::shift(KEY_CLOSE_SQ, b'^'),
    TableEntry::alt_gr(KEY_CLOSE_SQ, b'~'),
    // Third row
    TableEntry::plain(KEY_SEMI, SMALL_O_DIAERESIS),
    TableEntry::plain(KEY_APOS, SMALL_A_DIAERESIS),
    TableEntry::plain(KEY_BACK, b'\''),
    TableEntry::shift(KEY_SEMI, CAPITAL_O_DIAERESIS),
    TableEntry::shift(KEY_APOS, CAPITAL_A_DIAERESIS),
    TableEntry::shift(KEY_BACK, b'*'),
    // Fourth row
    TableEntry::plain(KEY_EUROPE2, b'<'),
    TableEntry::plain(KEY_DIV, b'-'),
    TableEntry::shift(KEY_EUROPE2, b'>'),
    TableEntry::shift(KEY_COMMA, b';'),
    TableEntry::shift(KEY_DOT, b':'),
    TableEntry::shift(KEY_DIV, b'_'),
    TableEntry::alt_gr(KEY_EUROPE2, b'|'),
    TableEntry::alt_gr(KEY_M, MICRO_SIGN),
];
