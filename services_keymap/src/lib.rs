//! # Keymap Service
//!
//! This crate turns key-event codes into locale-specific characters.
//!
//! ## Philosophy
//!
//! - **Explicit context**: The selected layout lives in a [`Remapper`] the caller owns, not a global
//! - **Layered lookup**: Active locale first, then baseline, then built-in defaults
//! - **Zero means nothing**: An unresolvable key is a normal `0` result, not an error
//! - **Pure remapping**: Same context and code always give the same answer
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A keyboard driver (codes arrive already decoded, see `hal::KeyEventSource`)
//! - An input queue (one event in, one result out)
//! - A multi-byte encoder (one Latin-1 byte per key event)
//!
//! ## Example
//!
//! ```ignore
//! use keymap_tables::LocaleRegistry;
//! use services_keymap::Remapper;
//!
//! let registry = LocaleRegistry::builtin();
//! let mut remapper = Remapper::new(&registry);
//! remapper.select_locale("SE")?;
//!
//! let byte = remapper.remap_key_byte(code);
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod remapper;

pub use bridge::{BridgeOutput, KeymapBridge};
pub use config::KeymapConfig;
pub use error::KeymapError;
pub use remapper::{remap_with, Remapper};
