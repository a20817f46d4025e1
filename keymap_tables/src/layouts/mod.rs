//! Built-in layouts

use crate::table::LocaleTable;
use keymap_types::CountryCode;

pub mod de;
pub mod fr;
pub mod se;
pub mod uk;
pub mod us;

pub const US: CountryCode = CountryCode::from_bytes(*b"US");
pub const UK: CountryCode = CountryCode::from_bytes(*b"UK");
pub const GB: CountryCode = CountryCode::from_bytes(*b"GB");
pub const DE: CountryCode = CountryCode::from_bytes(*b"DE");
pub const FR: CountryCode = CountryCode::from_bytes(*b"FR");
pub const SE: CountryCode = CountryCode::from_bytes(*b"SE");

/// Baseline layout
pub static BASELINE: LocaleTable = LocaleTable::from_static(US, us::ENTRIES);

/// Every built-in non-baseline layout, in registration order
pub static LOCALES: [LocaleTable; 5] = [
    LocaleTable::from_static(UK, uk::ENTRIES),
    LocaleTable::from_static(GB, uk::ENTRIES),
    LocaleTable::from_static(DE, de::ENTRIES),
    LocaleTable::from_static(FR, fr::ENTRIES),
    LocaleTable::from_static(SE, se::ENTRIES),
];
