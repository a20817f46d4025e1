//! Base key identifiers
//!
//! Bottom-byte values produced by the key-event source. Keys are named after
//! their position on a US layout; national layouts reinterpret them through
//! locale tables. Codes sent with [`StatusBits::FUNCTION`](crate::StatusBits::FUNCTION)
//! set are non-printable and only ever passed through.

// Lock, modifier and navigation keys (always flagged as function keys)
pub const KEY_NUM: u8 = 0x01;
pub const KEY_SCROLL: u8 = 0x02;
pub const KEY_CAPS: u8 = 0x03;
pub const KEY_PRTSCR: u8 = 0x04;
pub const KEY_PAUSE: u8 = 0x05;
pub const KEY_L_SHIFT: u8 = 0x06;
pub const KEY_R_SHIFT: u8 = 0x07;
pub const KEY_L_CTRL: u8 = 0x08;
pub const KEY_R_CTRL: u8 = 0x09;
pub const KEY_L_ALT: u8 = 0x0A;
pub const KEY_R_ALT: u8 = 0x0B;
pub const KEY_L_GUI: u8 = 0x0C;
pub const KEY_R_GUI: u8 = 0x0D;
pub const KEY_MENU: u8 = 0x0E;
pub const KEY_BREAK: u8 = 0x0F;
pub const KEY_SYSRQ: u8 = 0x10;
pub const KEY_HOME: u8 = 0x11;
pub const KEY_END: u8 = 0x12;
pub const KEY_PGUP: u8 = 0x13;
pub const KEY_PGDN: u8 = 0x14;
pub const KEY_L_ARROW: u8 = 0x15;
pub const KEY_R_ARROW: u8 = 0x16;
pub const KEY_UP_ARROW: u8 = 0x17;
pub const KEY_DN_ARROW: u8 = 0x18;
pub const KEY_INSERT: u8 = 0x19;

// Control keys, universal across layouts. Order matters: see `control_index`.
pub const KEY_DELETE: u8 = 0x1A;
pub const KEY_ESC: u8 = 0x1B;
pub const KEY_BS: u8 = 0x1C;
pub const KEY_TAB: u8 = 0x1D;
pub const KEY_ENTER: u8 = 0x1E;
pub const KEY_SPACE: u8 = 0x1F;

// Numeric keypad
pub const KEY_KP0: u8 = 0x20;
pub const KEY_KP1: u8 = 0x21;
pub const KEY_KP2: u8 = 0x22;
pub const KEY_KP3: u8 = 0x23;
pub const KEY_KP4: u8 = 0x24;
pub const KEY_KP5: u8 = 0x25;
pub const KEY_KP6: u8 = 0x26;
pub const KEY_KP7: u8 = 0x27;
pub const KEY_KP8: u8 = 0x28;
pub const KEY_KP9: u8 = 0x29;
pub const KEY_KP_DOT: u8 = 0x2A;
pub const KEY_KP_ENTER: u8 = 0x2B;
pub const KEY_KP_PLUS: u8 = 0x2C;
pub const KEY_KP_MINUS: u8 = 0x2D;
pub const KEY_KP_TIMES: u8 = 0x2E;
pub const KEY_KP_DIV: u8 = 0x2F;

// Top row digits
pub const KEY_0: u8 = 0x30;
pub const KEY_1: u8 = 0x31;
pub const KEY_2: u8 = 0x32;
pub const KEY_3: u8 = 0x33;
pub const KEY_4: u8 = 0x34;
pub const KEY_5: u8 = 0x35;
pub const KEY_6: u8 = 0x36;
pub const KEY_7: u8 = 0x37;
pub const KEY_8: u8 = 0x38;
pub const KEY_9: u8 = 0x39;

// Punctuation (US positions)
pub const KEY_APOS: u8 = 0x3A;
pub const KEY_COMMA: u8 = 0x3B;
pub const KEY_MINUS: u8 = 0x3C;
pub const KEY_DOT: u8 = 0x3D;
pub const KEY_DIV: u8 = 0x3E;
pub const KEY_KP_EQUAL: u8 = 0x3F;
pub const KEY_SINGLE: u8 = 0x40;

// Letters
pub const KEY_A: u8 = 0x41;
pub const KEY_B: u8 = 0x42;
pub const KEY_C: u8 = 0x43;
pub const KEY_D: u8 = 0x44;
pub const KEY_E: u8 = 0x45;
pub const KEY_F: u8 = 0x46;
pub const KEY_G: u8 = 0x47;
pub const KEY_H: u8 = 0x48;
pub const KEY_I: u8 = 0x49;
pub const KEY_J: u8 = 0x4A;
pub const KEY_K: u8 = 0x4B;
pub const KEY_L: u8 = 0x4C;
pub const KEY_M: u8 = 0x4D;
pub const KEY_N: u8 = 0x4E;
pub const KEY_O: u8 = 0x4F;
pub const KEY_P: u8 = 0x50;
pub const KEY_Q: u8 = 0x51;
pub const KEY_R: u8 = 0x52;
pub const KEY_S: u8 = 0x53;
pub const KEY_T: u8 = 0x54;
pub const KEY_U: u8 = 0x55;
pub const KEY_V: u8 = 0x56;
pub const KEY_W: u8 = 0x57;
pub const KEY_X: u8 = 0x58;
pub const KEY_Y: u8 = 0x59;
pub const KEY_Z: u8 = 0x5A;

pub const KEY_SEMI: u8 = 0x5B;
pub const KEY_BACK: u8 = 0x5C;
pub const KEY_OPEN_SQ: u8 = 0x5D;
pub const KEY_CLOSE_SQ: u8 = 0x5E;
pub const KEY_EQUAL: u8 = 0x5F;
pub const KEY_KP_COMMA: u8 = 0x60;

// Function keys F1..F24
pub const KEY_F1: u8 = 0x61;
pub const KEY_F2: u8 = 0x62;
pub const KEY_F3: u8 = 0x63;
pub const KEY_F4: u8 = 0x64;
pub const KEY_F5: u8 = 0x65;
pub const KEY_F6: u8 = 0x66;
pub const KEY_F7: u8 = 0x67;
pub const KEY_F8: u8 = 0x68;
pub const KEY_F9: u8 = 0x69;
pub const KEY_F10: u8 = 0x6A;
pub const KEY_F11: u8 = 0x6B;
pub const KEY_F12: u8 = 0x6C;
pub const KEY_F24: u8 = 0x78;

// Multimedia
pub const KEY_NEXT_TR: u8 = 0x79;
pub const KEY_PREV_TR: u8 = 0x7A;
pub const KEY_STOP: u8 = 0x7B;
pub const KEY_PLAY: u8 = 0x7C;
pub const KEY_MUTE: u8 = 0x7D;
pub const KEY_VOL_UP: u8 = 0x7E;
pub const KEY_VOL_DN: u8 = 0x7F;

/// Extra ISO key between left Shift and Z. Not present on US boards.
pub const KEY_EUROPE2: u8 = 0x8B;

/// Lock-key echo (Caps/Num/Scroll acknowledgement). Never printable.
pub const KEY_LOCK_ECHO: u8 = 0xEE;

/// Index of `base` in the control-key range, if it is a control key
///
/// The index addresses the fixed control-code table
/// (Delete, Escape, Backspace, Tab, Enter, Space).
pub const fn control_index(base: u8) -> Option<usize> {
    if base >= KEY_DELETE && base <= KEY_SPACE {
        Some((base - KEY_DELETE) as usize)
    } else {
        None
    }
}

pub const fn is_letter(base: u8) -> bool {
    base >= KEY_A && base <= KEY_Z
}

pub const fn is_keypad_digit(base: u8) -> bool {
    base >= KEY_KP0 && base <= KEY_KP9
}

/// Keypad punctuation produces the same character with or without Shift
pub const fn is_shift_insensitive(base: u8) -> bool {
    (base >= KEY_KP_DOT && base <= KEY_KP_DIV) || base == KEY_KP_EQUAL || base == KEY_KP_COMMA
}
