//! French layout (AZERTY)

use crate::table::TableEntry;
use keymap_types::keys::*;
use keymap_types::latin1::*;

pub const ENTRIES: &[TableEntry] = &[
    // Top row: symbols unshifted, digits shifted
    TableEntry::plain(KEY_SINGLE, SUPERSCRIPT_TWO),
    TableEntry::plain(KEY_1, b'&'),
    TableEntry::plain(KEY_2, SMALL_E_ACUTE),
    TableEntry::plain(KEY_3, b'"'),
    TableEntry::plain(KEY_4, b'\''),
    TableEntry::plain(KEY_5, b'('),
    TableEntry::plain(KEY_6, b'-'),
    TableEntry::plain(KEY_7, SMALL_E_GRAVE),
    TableEntry::plain(KEY_8, b'_'),
    TableEntry::plain(KEY_9, SMALL_C_CEDILLA),
    TableEntry::plain(KEY_0, SMALL_A_GRAVE),
    TableEntry::plain(KEY_MINUS, b')'),
    TableEntry::shift(KEY_1, b'1'),
    TableEntry::shift(KEY_2, b'2'),
    TableEntry::shift(KEY_3, b'3'),
    TableEntry::shift(KEY_4, b'4'),
    TableEntry::shift(KEY_5, b'5'),
    TableEntry::shift(KEY_6, b'6'),
    TableEntry::shift(KEY_7, b'7'),
    TableEntry::shift(KEY_8, b'8'),
    TableEntry::shift(KEY_9, b'9'),
    TableEntry::shift(KEY_0, b'0'),
    TableEntry::shift(KEY_MINUS, DEGREE_SIGN),
    TableEntry::alt_gr(KEY_2, b'~'),
    TableEntry::alt_gr(KEY_3, b'#'),
    TableEntry::alt_gr(KEY_4, b'{'),
    TableEntry::alt_gr(KEY_5, b'['),
    TableEntry::alt_gr(KEY_6, b'|'),
    TableEntry::alt_gr(KEY_7, b'`'),
    TableEntry::alt_gr(KEY_8, b'\\'),
    TableEntry::alt_gr(KEY_9, b'^'),
    TableEntry::alt_gr(KEY_0, b'@'),
    TableEntry::alt_gr(KEY_MINUS, b']'),
    TableEntry::alt_gr(KEY_EQUAL, b'}'),
    // Second row
    TableEntry::plain(KEY_Q, b'a'),
    TableEntry::shift(KEY_Q, b'A'),
    TableEntry::plain(KEY_W, b'z'),
    TableEntry::shift(KEY_W, b'Z'),
    TableEntry::plain(KEY_OPEN_SQ, b'^'),
    TableEntry::shift(KEY_OPEN_SQ, DIAERESIS),
    TableEntry::plain(KEY_CLOSE_SQ, b'$'),
    TableEntry::shift(KEY_CLOSE_SQ, POUND_SIGN),
    // Third row
    TableEntry::plain(KEY_A, b'q'),
    TableEntry::shift(KEY_A, b'Q'),
    TableEntry::plain(KEY_SEMI, b'm'),
    TableEntry::shift(KEY_SEMI, b'M'),
    TableEntry::plain(KEY_APOS, SMALL_U_GRAVE),
    TableEntry::shift(KEY_APOS, b'%'),
    TableEntry::plain(KEY_BACK, b'*'),
    TableEntry::shift(KEY_BACK, MICRO_SIGN),
    // Fourth row
    TableEntry::plain(KEY_EUROPE2, b'<'),
    TableEntry::shift(KEY_EUROPE2, b'>'),
    TableEntry::alt_gr(KEY_EUROPE2, b'|'),
    TableEntry::plain(KEY_Z, b'w'),
    TableEntry::shift(KEY_Z, b'W'),
    TableEntry::plain(KEY_M, b','),
    TableEntry::shift(KEY_M, b'?'),
    TableEntry::plain(KEY_COMMA, b';'),
    TableEntry::shift(KEY_COMMA, b'.'),
    TableEntry::plain(KEY_DOT, b':'),
    TableEntry::shift(KEY_DOT, b'/'),
    TableEntry::plain(KEY_DIV, b'!'),
    TableEntry::shift(KEY_DIV, SECTION_SIGN),
];
