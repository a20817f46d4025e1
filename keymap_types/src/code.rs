//! Key-event code
//!
//! A 16-bit value: top byte is [`StatusBits`], bottom byte is the base key
//! identifier (see [`crate::keys`]) or, after remapping, the output byte.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::status::{KeyStatus, StatusBits};

/// Packed key-event code
///
/// Zero is reserved as the "no result" value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyEventCode(u16);

impl KeyEventCode {
    /// The invalid / unresolved code
    pub const NONE: Self = Self(0);

    const BASE_MASK: u16 = 0x00FF;

    /// Wraps a raw 16-bit code
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// A bare key press with no status bits
    pub const fn key(base: u8) -> Self {
        Self(base as u16)
    }

    /// Builds a code from status bits and a base byte
    pub const fn from_parts(bits: StatusBits, base: u8) -> Self {
        Self((bits.bits() & !Self::BASE_MASK) | base as u16)
    }

    /// Builds a code from an unpacked status and a base byte
    pub fn from_status(status: KeyStatus, base: u8) -> Self {
        Self::from_parts(status.pack(), base)
    }

    /// Returns the raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns the base byte (bottom 8 bits)
    pub const fn base(self) -> u8 {
        (self.0 & Self::BASE_MASK) as u8
    }

    /// Returns the status bits (top 8 bits)
    pub const fn bits(self) -> StatusBits {
        StatusBits::from_bits_truncate(self.0)
    }

    /// Returns the status byte as named fields
    pub fn status(self) -> KeyStatus {
        KeyStatus::unpack(self.bits())
    }

    /// Returns true if every bit in `bits` is set
    pub const fn has(self, bits: StatusBits) -> bool {
        self.0 & bits.bits() == bits.bits()
    }

    /// Returns true if any bit in `bits` is set
    pub const fn has_any(self, bits: StatusBits) -> bool {
        self.0 & bits.bits() != 0
    }

    /// Sets status bits
    pub const fn with(self, bits: StatusBits) -> Self {
        Self(self.0 | bits.bits())
    }

    /// Clears status bits
    pub const fn without(self, bits: StatusBits) -> Self {
        Self(self.0 & !bits.bits())
    }

    /// Replaces the base byte, keeping status bits
    pub const fn with_base(self, base: u8) -> Self {
        Self((self.0 & !Self::BASE_MASK) | base as u16)
    }

    /// Masks the code down to what a table match code may contain:
    /// Shift, AltGr and the base byte.
    pub const fn lookup_code(self) -> Self {
        Self(self.0 & (StatusBits::LOOKUP.bits() | Self::BASE_MASK))
    }

    /// Returns true for the "no result" code
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub const fn is_break(self) -> bool {
        self.has(StatusBits::BREAK)
    }

    pub const fn is_function(self) -> bool {
        self.has(StatusBits::FUNCTION)
    }
}

impl From<u16> for KeyEventCode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<KeyEventCode> for u16 {
    fn from(code: KeyEventCode) -> Self {
        code.0
    }
}

impl fmt::Display for KeyEventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
