//! Table registry
//!
//! Holds the baseline table plus every selectable locale table. Tables are
//! addressed by index so a remapper can hold a selection without copying
//! the table itself. Index 0 is always the baseline.

use alloc::vec::Vec;
use core::fmt;
use keymap_types::CountryCode;

use crate::layouts;
use crate::table::{LocaleTable, TableError};

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// A table with this country code is already registered
    DuplicateLocale(CountryCode),
    /// Table failed validation
    InvalidTable(CountryCode, TableError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocale(code) => write!(f, "locale {} already registered", code),
            Self::InvalidTable(code, err) => write!(f, "locale {}: {}", code, err),
        }
    }
}

/// Registry of locale tables
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    baseline: LocaleTable,
    locales: Vec<LocaleTable>,
}

impl LocaleRegistry {
    /// Index of the baseline table
    pub const BASELINE: usize = 0;

    /// Registry with the baseline and every built-in layout
    pub fn builtin() -> Self {
        Self {
            baseline: layouts::BASELINE.clone(),
            locales: layouts::LOCALES.to_vec(),
        }
    }

    /// Registry with the baseline only
    pub fn baseline_only() -> Self {
        Self::with_baseline(layouts::BASELINE.clone())
    }

    /// Registry over a custom baseline
    pub fn with_baseline(baseline: LocaleTable) -> Self {
        Self {
            baseline,
            locales: Vec::new(),
        }
    }

    /// Adds a locale table, returning its index
    ///
    /// Fails if the country code is taken (including the baseline's) or the
    /// table does not validate.
    pub fn register(&mut self, table: LocaleTable) -> Result<usize, RegistryError> {
        let code = table.code();
        if self.find(code).is_some() {
            return Err(RegistryError::DuplicateLocale(code));
        }
        table
            .validate()
            .map_err(|err| RegistryError::InvalidTable(code, err))?;
        self.locales.push(table);
        Ok(self.locales.len())
    }

    /// Finds a table by exact country code
    pub fn find(&self, code: CountryCode) -> Option<usize> {
        if self.baseline.code() == code {
            return Some(Self::BASELINE);
        }
        self.locales
            .iter()
            .position(|table| table.code() == code)
            .map(|pos| pos + 1)
    }

    /// Finds a table by country code string
    ///
    /// Anything that is not exactly two printable ASCII characters matches
    /// nothing.
    pub fn lookup(&self, code: &str) -> Option<usize> {
        CountryCode::parse(code).ok().and_then(|code| self.find(code))
    }

    /// Table at `index`
    pub fn get(&self, index: usize) -> Option<&LocaleTable> {
        match index {
            Self::BASELINE => Some(&self.baseline),
            _ => self.locales.get(index - 1),
        }
    }

    /// The baseline table
    pub fn baseline(&self) -> &LocaleTable {
        &self.baseline
    }

    /// Country codes in index order, baseline first
    pub fn codes(&self) -> impl Iterator<Item = CountryCode> + '_ {
        core::iter::once(self.baseline.code()).chain(self.locales.iter().map(LocaleTable::code))
    }

    /// Number of tables, baseline included
    pub fn len(&self) -> usize {
        self.locales.len() + 1
    }

    /// Always false: the baseline is always present
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
