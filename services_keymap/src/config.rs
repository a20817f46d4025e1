//! Keymap configuration
//!
//! Chooses which layouts are available and which one is active at startup,
//! and carries user-authored tables. Stored as JSON.
//!
//! ```json
//! {
//!   "locale": "SE",
//!   "builtin_layouts": ["SE", "DE"],
//!   "custom_tables": [
//!     { "code": "--", "entries": [ { "match_code": 43, "result": 10 } ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use keymap_tables::{layouts, LocaleRegistry, LocaleTable};
use keymap_types::CountryCode;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::KeymapError;

/// Keymap configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeymapConfig {
    /// Locale selected at startup
    pub locale: CountryCode,
    /// Built-in layouts to register; `None` registers all of them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builtin_layouts: Option<Vec<CountryCode>>,
    /// Extra tables registered after the built-in ones
    pub custom_tables: Vec<LocaleTable>,
}

impl KeymapConfig {
    /// Parses a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, KeymapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, KeymapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KeymapError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        debug!("keymap: loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), KeymapError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Builds the registry this configuration describes
    ///
    /// Fails if a listed built-in layout does not exist, or a custom table
    /// clashes with a registered code or does not validate.
    pub fn build_registry(&self) -> Result<LocaleRegistry, KeymapError> {
        let mut registry = LocaleRegistry::baseline_only();

        match &self.builtin_layouts {
            None => {
                for table in layouts::LOCALES.iter() {
                    registry.register(table.clone())?;
                }
            }
            Some(codes) => {
                for code in codes {
                    if *code == layouts::US {
                        continue;
                    }
                    let table = layouts::LOCALES
                        .iter()
                        .find(|table| table.code() == *code)
                        .ok_or_else(|| KeymapError::LocaleNotFound(code.to_string()))?;
                    registry.register(table.clone())?;
                }
            }
        }

        for table in &self.custom_tables {
            registry.register(table.clone())?;
            debug!("keymap: registered custom locale {}", table.code());
        }

        Ok(registry)
    }
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            locale: layouts::US,
            builtin_layouts: None,
            custom_tables: Vec::new(),
        }
    }
}
