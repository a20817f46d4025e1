//! German layout (QWERTZ)

use crate::table::TableEntry;
use keymap_types::keys::*;
use keymap_types::latin1::*;

pub const ENTRIES: &[TableEntry] = &[
    // Top row
    TableEntry::plain(KEY_SINGLE, b'^'),
    TableEntry::plain(KEY_MINUS, SMALL_SHARP_S),
    TableEntry::plain(KEY_EQUAL, ACUTE_ACCENT),
    TableEntry::shift(KEY_SINGLE, DEGREE_SIGN),
    TableEntry::shift(KEY_2, b'"'),
    TableEntry::shift(KEY_3, SECTION_SIGN),
    TableEntry::shift(KEY_6, b'&'),
    TableEntry::shift(KEY_7, b'/'),
    TableEntry::shift(KEY_8, b'('),
    TableEntry::shift(KEY_9, b')'),
    TableEntry::shift(KEY_0, b'='),
    TableEntry::shift(KEY_MINUS, b'?'),
    TableEntry::shift(KEY_EQUAL, b'`'),
    TableEntry::alt_gr(KEY_2, SUPERSCRIPT_TWO),
    TableEntry::alt_gr(KEY_3, SUPERSCRIPT_THREE),
    TableEntry::alt_gr(KEY_7, b'{'),
    TableEntry::alt_gr(KEY_8, b'['),
    TableEntry::alt_gr(KEY_9, b']'),
    TableEntry::alt_gr(KEY_0, b'}'),
    TableEntry::alt_gr(KEY_MINUS, b'\\'),
    // Second row
    TableEntry::plain(KEY_Y, b'z'),
    TableEntry::shift(KEY_Y, b'Z'),
    TableEntry::plain(KEY_OPEN_SQ, SMALL_U_DIAERESIS),
    TableEntry::shift(KEY_OPEN_SQ, CAPITAL_U_DIAERESIS),
    TableEntry::plain(KEY_CLOSE_SQ, b'+'),
    TableEntry::shift(KEY_CLOSE_SQ, b'*'),
    TableEntry::alt_gr(KEY_Q, b'@'),
    TableEntry::alt_gr(KEY_CLOSE_SQ, b'~'),
    // Third row
    TableEntry::plain(KEY_SEMI, SMALL_O_DIAERESIS),
    TableEntry::plain(KEY_APOS, SMALL_A_DIAERESIS),
    TableEntry::plain(KEY_BACK, b'#'),
    TableEntry::shift(KEY_SEMI, CAPITAL_O_DIAERESIS),
    TableEntry::shift(KEY_APOS, CAPITAL_A_DIAERESIS),
    TableEntry::shift(KEY_BACK, b'\''),
    // Fourth row
    TableEntry::plain(KEY_EUROPE2, b'<'),
    TableEntry::plain(KEY_Z, b'y'),
    TableEntry::plain(KEY_DIV, b'-'),
    TableEntry::shift(KEY_EUROPE2, b'>'),
    TableEntry::shift(KEY_Z, b'Y'),
    TableEntry::shift(KEY_COMMA, b';'),
    TableEntry::shift(KEY_DOT, b':'),
    TableEntry::shift(KEY_DIV, b'_'),
    TableEntry::alt_gr(KEY_EUROPE2, b'|'),
    TableEntry::alt_gr(KEY_M, MICRO_SIGN),
];
