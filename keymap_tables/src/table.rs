//! Locale table format and lookup

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use keymap_types::{CountryCode, KeyEventCode, StatusBits};
use serde::{Deserialize, Serialize};

/// One (match code, result byte) pair
///
/// `match_code` may only combine Shift and AltGr with a base byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableEntry {
    pub match_code: KeyEventCode,
    pub result: u8,
}

impl TableEntry {
    pub const fn new(match_code: KeyEventCode, result: u8) -> Self {
        Self { match_code, result }
    }

    /// Key with no modifiers
    pub const fn plain(key: u8, result: u8) -> Self {
        Self::new(KeyEventCode::key(key), result)
    }

    /// Key with Shift
    pub const fn shift(key: u8, result: u8) -> Self {
        Self::new(KeyEventCode::from_parts(StatusBits::SHIFT, key), result)
    }

    /// Key with AltGr
    pub const fn alt_gr(key: u8, result: u8) -> Self {
        Self::new(KeyEventCode::from_parts(StatusBits::ALT_GR, key), result)
    }

    /// Key with Shift and AltGr
    pub const fn shift_alt_gr(key: u8, result: u8) -> Self {
        Self::new(KeyEventCode::from_parts(StatusBits::LOOKUP, key), result)
    }
}

/// Indexed read access to table entries
///
/// Lookups go through this trait only, so entries can live in whatever
/// storage the platform prefers.
pub trait EntrySource {
    /// Number of entries
    fn len(&self) -> usize;

    /// Reads the entry at `index`, or `None` past the end
    fn entry(&self, index: usize) -> Option<TableEntry>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntrySource for [TableEntry] {
    fn len(&self) -> usize {
        <[TableEntry]>::len(self)
    }

    fn entry(&self, index: usize) -> Option<TableEntry> {
        self.get(index).copied()
    }
}

/// Linear scan for the entry matching `code`
///
/// `code` is masked to Shift, AltGr and the base byte before comparison.
/// First match in insertion order wins.
pub fn scan<S: EntrySource + ?Sized>(source: &S, code: KeyEventCode) -> Option<u8> {
    let wanted = code.lookup_code();
    (0..source.len())
        .filter_map(|index| source.entry(index))
        .find(|entry| entry.match_code == wanted)
        .map(|entry| entry.result)
}

/// Table authoring errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Match code carries bits other than Shift/AltGr and the base byte
    InvalidMatchCode { index: usize, code: KeyEventCode },
    /// Match code already used by an earlier entry
    DuplicateMatchCode { index: usize, code: KeyEventCode },
    /// Result byte 0 is the "no result" value and cannot be a mapping
    ZeroResult { index: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMatchCode { index, code } => {
                write!(f, "entry {}: match code {} uses bits outside Shift/AltGr", index, code)
            }
            Self::DuplicateMatchCode { index, code } => {
                write!(f, "entry {}: duplicate match code {}", index, code)
            }
            Self::ZeroResult { index } => write!(f, "entry {}: result byte is 0", index),
        }
    }
}

/// Locale table
///
/// Built-in tables borrow `static` entry arrays; tables loaded at runtime own
/// their entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    code: CountryCode,
    entries: Cow<'static, [TableEntry]>,
}

impl LocaleTable {
    /// Creates a table over static entries
    pub const fn from_static(code: CountryCode, entries: &'static [TableEntry]) -> Self {
        Self {
            code,
            entries: Cow::Borrowed(entries),
        }
    }

    /// Creates a table that owns its entries
    pub fn owned(code: CountryCode, entries: Vec<TableEntry>) -> Self {
        Self {
            code,
            entries: Cow::Owned(entries),
        }
    }

    /// Same entries under another country code
    pub fn aliased(&self, code: CountryCode) -> Self {
        Self {
            code,
            entries: self.entries.clone(),
        }
    }

    pub fn code(&self) -> CountryCode {
        self.code
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Looks up `code` in this table only
    pub fn scan(&self, code: KeyEventCode) -> Option<u8> {
        scan(self, code)
    }

    /// Checks authoring rules
    ///
    /// Built-in tables are checked by tests; tables arriving at runtime are
    /// checked on registration.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, entry) in self.entries.iter().enumerate() {
            let code = entry.match_code;
            if code.lookup_code() != code {
                return Err(TableError::InvalidMatchCode { index, code });
            }
            if entry.result == 0 {
                return Err(TableError::ZeroResult { index });
            }
            if self.entries[..index].iter().any(|earlier| earlier.match_code == code) {
                return Err(TableError::DuplicateMatchCode { index, code });
            }
        }
        Ok(())
    }
}

impl EntrySource for LocaleTable {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, index: usize) -> Option<TableEntry> {
        self.entries.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use keymap_types::keys;

    const SE: CountryCode = CountryCode::from_bytes(*b"SE");

    static SMALL: [TableEntry; 3] = [
        TableEntry::plain(keys::KEY_MINUS, b'+'),
        TableEntry::shift(keys::KEY_MINUS, b'?'),
        TableEntry::alt_gr(keys::KEY_MINUS, b'\\'),
    ];

    #[test]
    fn test_entry_constructors() {
        assert_eq!(TableEntry::plain(keys::KEY_A, b'x').match_code.raw(), 0x0041);
        assert_eq!(TableEntry::shift(keys::KEY_A, b'x').match_code.raw(), 0x4041);
        assert_eq!(TableEntry::alt_gr(keys::KEY_A, b'x').match_code.raw(), 0x0441);
        assert_eq!(TableEntry::shift_alt_gr(keys::KEY_A, b'x').match_code.raw(), 0x4441);
    }

    #[test]
    fn test_scan_hit_and_miss() {
        let table = LocaleTable::from_static(SE, &SMALL);
        assert_eq!(table.scan(KeyEventCode::key(keys::KEY_MINUS)), Some(b'+'));
        assert_eq!(
            table.scan(KeyEventCode::from_parts(StatusBits::SHIFT, keys::KEY_MINUS)),
            Some(b'?')
        );
        assert_eq!(table.scan(KeyEventCode::key(keys::KEY_EQUAL)), None);
    }

    #[test]
    fn test_scan_ignores_ctrl_alt_gui_caps() {
        let table = LocaleTable::from_static(SE, &SMALL);
        let noisy = StatusBits::CTRL | StatusBits::ALT | StatusBits::GUI | StatusBits::CAPS;
        let code = KeyEventCode::from_parts(noisy | StatusBits::ALT_GR, keys::KEY_MINUS);
        assert_eq!(table.scan(code), Some(b'\\'));
    }

    #[test]
    fn test_scan_first_match_wins() {
        let entries = [
            TableEntry::plain(keys::KEY_Q, b'1'),
            TableEntry::plain(keys::KEY_Q, b'2'),
        ];
        assert_eq!(scan(&entries[..], KeyEventCode::key(keys::KEY_Q)), Some(b'1'));
    }

    #[test]
    fn test_empty_source() {
        let entries: [TableEntry; 0] = [];
        assert!(EntrySource::is_empty(&entries[..]));
        assert_eq!(scan(&entries[..], KeyEventCode::key(keys::KEY_Q)), None);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(LocaleTable::from_static(SE, &SMALL).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_ctrl_in_match_code() {
        let bad = KeyEventCode::from_parts(StatusBits::CTRL, keys::KEY_ENTER);
        let table = LocaleTable::owned(SE, vec![TableEntry::new(bad, 0x0A)]);
        assert_eq!(
            table.validate(),
            Err(TableError::InvalidMatchCode { index: 0, code: bad })
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let table = LocaleTable::owned(
            SE,
            vec![
                TableEntry::plain(keys::KEY_Q, b'a'),
                TableEntry::plain(keys::KEY_W, b'z'),
                TableEntry::plain(keys::KEY_Q, b'b'),
            ],
        );
        assert_eq!(
            table.validate(),
            Err(TableError::DuplicateMatchCode {
                index: 2,
                code: KeyEventCode::key(keys::KEY_Q)
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_result() {
        let table = LocaleTable::owned(SE, vec![TableEntry::plain(keys::KEY_Q, 0)]);
        assert_eq!(table.validate(), Err(TableError::ZeroResult { index: 0 }));
    }

    #[test]
    fn test_aliased_shares_entries() {
        let table = LocaleTable::from_static(SE, &SMALL);
        let alias = table.aliased(CountryCode::from_bytes(*b"XX"));
        assert_eq!(alias.code().as_str(), "XX");
        assert_eq!(alias.entries(), table.entries());
    }

    #[test]
    fn test_json_round_trip_is_owned() {
        let json = r#"{"code":"--","entries":[{"match_code":8222,"result":10}]}"#;
        let table: LocaleTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.code().as_str(), "--");
        assert_eq!(table.entries(), &[TableEntry::new(KeyEventCode::new(8222), 10)]);
        assert!(matches!(table.entries, Cow::Owned(_)));
    }
}
