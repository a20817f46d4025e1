//! Status bit model
//!
//! The top byte of a key-event code carries make/break, modifier and lock
//! state. [`StatusBits`] names the raw bits; [`KeyStatus`] is the unpacked,
//! field-per-bit view used when making remap decisions.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Status bits in the top byte of a key-event code
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusBits: u16 {
        /// Key released (break); clear for a press (make)
        const BREAK = 1 << 15;
        /// Either Shift key held
        const SHIFT = 1 << 14;
        /// Either Ctrl key held
        const CTRL = 1 << 13;
        /// Caps Lock active
        const CAPS = 1 << 12;
        /// Left Alt held
        const ALT = 1 << 11;
        /// Right Alt (AltGr) held
        const ALT_GR = 1 << 10;
        /// Either GUI/meta key held
        const GUI = 1 << 9;
        /// Base byte is a function/navigation code, not a character code
        const FUNCTION = 1 << 8;
    }
}

impl StatusBits {
    /// Status bits that take part in a table match
    ///
    /// Ctrl, Alt, GUI and Caps never appear in a match code.
    pub const LOOKUP: Self = Self::SHIFT.union(Self::ALT_GR);

    /// Modifiers that suppress the built-in letter/digit/passthrough defaults
    pub const COMMAND: Self = Self::CTRL.union(Self::ALT).union(Self::ALT_GR);

    /// Bits a remapped code never carries
    pub const CONSUMED: Self = Self::SHIFT.union(Self::ALT_GR);
}

/// Unpacked status byte
///
/// Same information as [`StatusBits`], as named fields. `pack` and `unpack`
/// are exact inverses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyStatus {
    pub released: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub caps_lock: bool,
    pub alt: bool,
    pub alt_gr: bool,
    pub gui: bool,
    pub function: bool,
}

impl KeyStatus {
    /// A key press with nothing held
    pub const fn new() -> Self {
        Self {
            released: false,
            shift: false,
            ctrl: false,
            caps_lock: false,
            alt: false,
            alt_gr: false,
            gui: false,
            function: false,
        }
    }

    /// Unpacks status bits into named fields
    pub fn unpack(bits: StatusBits) -> Self {
        Self {
            released: bits.contains(StatusBits::BREAK),
            shift: bits.contains(StatusBits::SHIFT),
            ctrl: bits.contains(StatusBits::CTRL),
            caps_lock: bits.contains(StatusBits::CAPS),
            alt: bits.contains(StatusBits::ALT),
            alt_gr: bits.contains(StatusBits::ALT_GR),
            gui: bits.contains(StatusBits::GUI),
            function: bits.contains(StatusBits::FUNCTION),
        }
    }

    /// Packs named fields back into status bits
    pub fn pack(&self) -> StatusBits {
        let mut bits = StatusBits::empty();
        bits.set(StatusBits::BREAK, self.released);
        bits.set(StatusBits::SHIFT, self.shift);
        bits.set(StatusBits::CTRL, self.ctrl);
        bits.set(StatusBits::CAPS, self.caps_lock);
        bits.set(StatusBits::ALT, self.alt);
        bits.set(StatusBits::ALT_GR, self.alt_gr);
        bits.set(StatusBits::GUI, self.gui);
        bits.set(StatusBits::FUNCTION, self.function);
        bits
    }

    /// Returns true if Ctrl, Alt or AltGr is held
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.alt_gr
    }

    /// Returns true if this is a press (make) event
    pub fn is_make(&self) -> bool {
        !self.released
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_caps_lock(mut self) -> Self {
        self.caps_lock = true;
        self
    }

    pub fn with_alt_gr(mut self) -> Self {
        self.alt_gr = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn released(mut self) -> Self {
        self.released = true;
        self
    }
}
