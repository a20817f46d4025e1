//! Keymap error types

use keymap_tables::RegistryError;
use thiserror::Error;

/// Errors from locale selection and configuration
///
/// An unresolvable key is not an error: `remap_key` returns
/// `KeyEventCode::NONE` for it.
#[derive(Debug, Error)]
pub enum KeymapError {
    /// No registered table has this country code. The active table is unchanged.
    #[error("Locale not found: {0:?}")]
    LocaleNotFound(String),

    /// A table was rejected by the registry
    #[error("Registry error: {0}")]
    Registry(RegistryError),

    /// Configuration could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RegistryError> for KeymapError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}
