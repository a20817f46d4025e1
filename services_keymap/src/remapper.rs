//! Key remapping
//!
//! Resolution order for a key-event code:
//!
//! 1. Control keys (Delete, Escape, Backspace, Tab, Enter, Space) map to fixed ASCII
//! 2. Function, break and lock-echo codes resolve to nothing
//! 3. Active locale table, then baseline table
//! 4. Built-in defaults: letters, keypad digits, raw passthrough
//! 5. Caps Lock flips the case of whatever letter was produced

use keymap_tables::{control_code, LocaleRegistry, LocaleTable};
use keymap_types::{keys, latin1, CountryCode, KeyEventCode, KeyStatus, StatusBits};
use log::{debug, trace, warn};

use crate::config::KeymapConfig;
use crate::error::KeymapError;

/// Letter key id to lowercase ASCII
const LOWERCASE_OFFSET: u8 = 0x20;

/// Keypad digit key id to ASCII digit
const KEYPAD_DIGIT_OFFSET: u8 = 0x10;

/// Remapping context
///
/// Holds the registry and which of its tables is active. Each caller owns
/// its own context, so there is no shared selection to race on.
#[derive(Debug, Clone, Copy)]
pub struct Remapper<'r> {
    registry: &'r LocaleRegistry,
    active: usize,
}

impl<'r> Remapper<'r> {
    /// Creates a remapper with the baseline layout active
    pub fn new(registry: &'r LocaleRegistry) -> Self {
        Self {
            registry,
            active: LocaleRegistry::BASELINE,
        }
    }

    /// Creates a remapper with `code` active
    pub fn with_locale(registry: &'r LocaleRegistry, code: &str) -> Result<Self, KeymapError> {
        let mut remapper = Self::new(registry);
        remapper.select_locale(code)?;
        Ok(remapper)
    }

    /// Creates a remapper with the configured locale active
    ///
    /// `registry` is normally the one built by [`KeymapConfig::build_registry`].
    pub fn from_config(
        registry: &'r LocaleRegistry,
        config: &KeymapConfig,
    ) -> Result<Self, KeymapError> {
        Self::with_locale(registry, config.locale.as_str())
    }

    /// Makes the table for `code` active
    ///
    /// Matching is exact and case-sensitive. On failure the active table is
    /// left unchanged.
    pub fn select_locale(&mut self, code: &str) -> Result<(), KeymapError> {
        match self.registry.lookup(code) {
            Some(index) => {
                self.active = index;
                debug!("keymap: selected locale {}", self.active_locale());
                Ok(())
            }
            None => {
                warn!(
                    "keymap: locale {:?} not registered, keeping {}",
                    code,
                    self.active_locale()
                );
                Err(KeymapError::LocaleNotFound(code.to_string()))
            }
        }
    }

    /// Country code of the active table
    pub fn active_locale(&self) -> CountryCode {
        self.active_table().code()
    }

    /// The active table
    pub fn active_table(&self) -> &'r LocaleTable {
        self.registry
            .get(self.active)
            .unwrap_or_else(|| self.registry.baseline())
    }

    /// Remaps a key-event code
    ///
    /// Returns `KeyEventCode::NONE` when there is nothing printable. Otherwise
    /// the result keeps the input's status bits minus Shift and AltGr, with the
    /// base byte replaced by the character.
    pub fn remap_key(&self, code: KeyEventCode) -> KeyEventCode {
        let locale = (self.active != LocaleRegistry::BASELINE).then(|| self.active_table());
        let remapped = remap_with(self.registry.baseline(), locale, code);
        trace!("keymap: {} -> {} ({})", code, remapped, self.active_locale());
        remapped
    }

    /// Remaps a key-event code to its output byte
    ///
    /// Break and function codes always give 0.
    pub fn remap_key_byte(&self, code: KeyEventCode) -> u8 {
        if code.has_any(StatusBits::FUNCTION | StatusBits::BREAK) {
            return 0;
        }
        self.remap_key(code).base()
    }

    /// Remaps a key-event code to a character
    pub fn remap_char(&self, code: KeyEventCode) -> Option<char> {
        match self.remap_key_byte(code) {
            0 => None,
            byte => Some(latin1::to_char(byte)),
        }
    }
}

/// Remaps `code` against explicit tables
///
/// `locale` is consulted before `baseline`; pass `None` when the baseline
/// itself is the active layout.
pub fn remap_with(
    baseline: &LocaleTable,
    locale: Option<&LocaleTable>,
    code: KeyEventCode,
) -> KeyEventCode {
    let base = code.base();

    if let Some(ascii) = control_code(base) {
        // Only Function is cleared here; Shift and AltGr stay set
        return code.without(StatusBits::FUNCTION).with_base(ascii);
    }

    if code.has_any(StatusBits::FUNCTION | StatusBits::BREAK) || base == keys::KEY_LOCK_ECHO {
        return KeyEventCode::NONE;
    }

    let status = code.status();
    let resolved = scan_layers(baseline, locale, code)
        .or_else(|| default_byte(&status, base))
        .filter(|&byte| byte != 0);

    match resolved {
        Some(byte) => {
            let byte = if status.caps_lock {
                latin1::toggle_case(byte)
            } else {
                byte
            };
            code.without(StatusBits::CONSUMED).with_base(byte)
        }
        None => KeyEventCode::NONE,
    }
}

fn scan_layers(
    baseline: &LocaleTable,
    locale: Option<&LocaleTable>,
    code: KeyEventCode,
) -> Option<u8> {
    let mut wanted = code.lookup_code();
    if keys::is_shift_insensitive(code.base()) {
        wanted = wanted.without(StatusBits::SHIFT);
    }
    locale
        .and_then(|table| table.scan(wanted))
        .or_else(|| baseline.scan(wanted))
}

fn default_byte(status: &KeyStatus, base: u8) -> Option<u8> {
    if status.has_command_modifier() {
        return None;
    }
    if keys::is_letter(base) {
        Some(if status.shift {
            base
        } else {
            base + LOWERCASE_OFFSET
        })
    } else if keys::is_keypad_digit(base) {
        Some(base + KEYPAD_DIGIT_OFFSET)
    } else if base == keys::KEY_EUROPE2 {
        // Only layouts with the ISO extra key give it a character
        None
    } else {
        Some(base)
    }
}
