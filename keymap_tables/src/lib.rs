#![no_std]

//! # Keymap Tables
//!
//! Locale tables and the registry that holds them.
//!
//! ## Philosophy
//!
//! - **Diffs, not maps**: A locale table lists only the keys that differ from the baseline
//! - **Immutable**: Tables are built once and never change; built-in ones are `static`
//! - **Storage-agnostic**: Lookups read entries through [`EntrySource`], not a concrete array
//!
//! ## Layouts
//!
//! - `US` - baseline, always present, terminal fallback
//! - `UK` / `GB` - British
//! - `DE` - German
//! - `FR` - French
//! - `SE` - Swedish

extern crate alloc;

pub mod control;
pub mod layouts;
pub mod registry;
pub mod table;

pub use control::{control_code, CONTROL_CODES};
pub use registry::{LocaleRegistry, RegistryError};
pub use table::{scan, EntrySource, LocaleTable, TableEntry, TableError};
