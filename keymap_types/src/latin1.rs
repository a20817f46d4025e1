//! Latin-1 output bytes
//!
//! Single-byte codepoints 0xA0..=0xFF used as layout results. Bytes 0x80..=0x9F
//! are control codes and never appear in a layout. There is no euro sign: it
//! postdates Latin-1.

pub const NO_BREAK_SPACE: u8 = 0xA0;
pub const INVERTED_EXCLAMATION: u8 = 0xA1; // ¡
pub const CENT_SIGN: u8 = 0xA2; // ¢
pub const POUND_SIGN: u8 = 0xA3; // £
pub const CURRENCY_SIGN: u8 = 0xA4; // ¤
pub const YEN_SIGN: u8 = 0xA5; // ¥
pub const BROKEN_BAR: u8 = 0xA6; // ¦
pub const SECTION_SIGN: u8 = 0xA7; // §
pub const DIAERESIS: u8 = 0xA8; // ¨
pub const COPYRIGHT_SIGN: u8 = 0xA9; // ©
pub const FEMININE_ORDINAL: u8 = 0xAA; // ª
pub const LEFT_DOUBLE_ANGLE_QUOTE: u8 = 0xAB; // «
pub const NOT_SIGN: u8 = 0xAC; // ¬
pub const SOFT_HYPHEN: u8 = 0xAD;
pub const REGISTERED_SIGN: u8 = 0xAE; // ®
pub const MACRON: u8 = 0xAF; // ¯
pub const DEGREE_SIGN: u8 = 0xB0; // °
pub const PLUS_MINUS_SIGN: u8 = 0xB1; // ±
pub const SUPERSCRIPT_TWO: u8 = 0xB2; // ²
pub const SUPERSCRIPT_THREE: u8 = 0xB3; // ³
pub const ACUTE_ACCENT: u8 = 0xB4; // ´
pub const MICRO_SIGN: u8 = 0xB5; // µ
pub const PILCROW_SIGN: u8 = 0xB6; // ¶
pub const MIDDLE_DOT: u8 = 0xB7; // ·
pub const CEDILLA: u8 = 0xB8; // ¸
pub const SUPERSCRIPT_ONE: u8 = 0xB9; // ¹
pub const MASCULINE_ORDINAL: u8 = 0xBA; // º
pub const RIGHT_DOUBLE_ANGLE_QUOTE: u8 = 0xBB; // »
pub const FRACTION_ONE_QUARTER: u8 = 0xBC; // ¼
pub const FRACTION_ONE_HALF: u8 = 0xBD; // ½
pub const FRACTION_THREE_QUARTERS: u8 = 0xBE; // ¾
pub const INVERTED_QUESTION_MARK: u8 = 0xBF; // ¿
pub const CAPITAL_A_GRAVE: u8 = 0xC0; // À
pub const CAPITAL_A_ACUTE: u8 = 0xC1; // Á
pub const CAPITAL_A_CIRCUMFLEX: u8 = 0xC2; // Â
pub const CAPITAL_A_TILDE: u8 = 0xC3; // Ã
pub const CAPITAL_A_DIAERESIS: u8 = 0xC4; // Ä
pub const CAPITAL_A_RING: u8 = 0xC5; // Å
pub const CAPITAL_AE: u8 = 0xC6; // Æ
pub const CAPITAL_C_CEDILLA: u8 = 0xC7; // Ç
pub const CAPITAL_E_GRAVE: u8 = 0xC8; // È
pub const CAPITAL_E_ACUTE: u8 = 0xC9; // É
pub const CAPITAL_E_CIRCUMFLEX: u8 = 0xCA; // Ê
pub const CAPITAL_E_DIAERESIS: u8 = 0xCB; // Ë
pub const CAPITAL_I_GRAVE: u8 = 0xCC; // Ì
pub const CAPITAL_I_ACUTE: u8 = 0xCD; // Í
pub const CAPITAL_I_CIRCUMFLEX: u8 = 0xCE; // Î
pub const CAPITAL_I_DIAERESIS: u8 = 0xCF; // Ï
pub const CAPITAL_ETH: u8 = 0xD0; // Ð
pub const CAPITAL_N_TILDE: u8 = 0xD1; // Ñ
pub const CAPITAL_O_GRAVE: u8 = 0xD2; // Ò
pub const CAPITAL_O_ACUTE: u8 = 0xD3; // Ó
pub const CAPITAL_O_CIRCUMFLEX: u8 = 0xD4; // Ô
pub const CAPITAL_O_TILDE: u8 = 0xD5; // Õ
pub const CAPITAL_O_DIAERESIS: u8 = 0xD6; // Ö
pub const MULTIPLICATION_SIGN: u8 = 0xD7; // ×
pub const CAPITAL_O_STROKE: u8 = 0xD8; // Ø
pub const CAPITAL_U_GRAVE: u8 = 0xD9; // Ù
pub const CAPITAL_U_ACUTE: u8 = 0xDA; // Ú
pub const CAPITAL_U_CIRCUMFLEX: u8 = 0xDB; // Û
pub const CAPITAL_U_DIAERESIS: u8 = 0xDC; // Ü
pub const CAPITAL_Y_ACUTE: u8 = 0xDD; // Ý
pub const CAPITAL_THORN: u8 = 0xDE; // Þ
pub const SMALL_SHARP_S: u8 = 0xDF; // ß
pub const SMALL_A_GRAVE: u8 = 0xE0; // à
pub const SMALL_A_ACUTE: u8 = 0xE1; // á
pub const SMALL_A_CIRCUMFLEX: u8 = 0xE2; // â
pub const SMALL_A_TILDE: u8 = 0xE3; // ã
pub const SMALL_A_DIAERESIS: u8 = 0xE4; // ä
pub const SMALL_A_RING: u8 = 0xE5; // å
pub const SMALL_AE: u8 = 0xE6; // æ
pub const SMALL_C_CEDILLA: u8 = 0xE7; // ç
pub const SMALL_E_GRAVE: u8 = 0xE8; // è
pub const SMALL_E_ACUTE: u8 = 0xE9; // é
pub const SMALL_E_CIRCUMFLEX: u8 = 0xEA; // ê
pub const SMALL_E_DIAERESIS: u8 = 0xEB; // ë
pub const SMALL_I_GRAVE: u8 = 0xEC; // ì
pub const SMALL_I_ACUTE: u8 = 0xED; // í
pub const SMALL_I_CIRCUMFLEX: u8 = 0xEE; // î
pub const SMALL_I_DIAERESIS: u8 = 0xEF; // ï
pub const SMALL_ETH: u8 = 0xF0; // ð
pub const SMALL_N_TILDE: u8 = 0xF1; // ñ
pub const SMALL_O_GRAVE: u8 = 0xF2; // ò
pub const SMALL_O_ACUTE: u8 = 0xF3; // ó
pub const SMALL_O_CIRCUMFLEX: u8 = 0xF4; // ô
pub const SMALL_O_TILDE: u8 = 0xF5; // õ
pub const SMALL_O_DIAERESIS: u8 = 0xF6; // ö
pub const DIVISION_SIGN: u8 = 0xF7; // ÷
pub const SMALL_O_STROKE: u8 = 0xF8; // ø
pub const SMALL_U_GRAVE: u8 = 0xF9; // ù
pub const SMALL_U_ACUTE: u8 = 0xFA; // ú
pub const SMALL_U_CIRCUMFLEX: u8 = 0xFB; // û
pub const SMALL_U_DIAERESIS: u8 = 0xFC; // ü
pub const SMALL_Y_ACUTE: u8 = 0xFD; // ý
pub const SMALL_THORN: u8 = 0xFE; // þ
pub const SMALL_Y_DIAERESIS: u8 = 0xFF; // ÿ

const CASE_BIT: u8 = 0x20;

/// Returns true if Caps Lock inverts the case of `byte`
///
/// Covers ASCII letters and the accented block 0xC0..=0xFE, minus the
/// multiplication and division signs that sit inside that block.
/// ß (0xDF) is inside the block and flips to ÿ (0xFF); ÿ itself is outside
/// it and never flips back.
pub const fn is_caseable(byte: u8) -> bool {
    matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | 0xC0..=0xFE)
        && byte != MULTIPLICATION_SIGN
        && byte != DIVISION_SIGN
}

/// Flips the case of a caseable byte; other bytes are returned unchanged
pub const fn toggle_case(byte: u8) -> u8 {
    if is_caseable(byte) {
        byte ^ CASE_BIT
    } else {
        byte
    }
}

/// Decodes a single output byte as a Latin-1 character
///
/// Latin-1 is the first 256 codepoints of Unicode, so this never fails.
pub const fn to_char(byte: u8) -> char {
    byte as char
}
