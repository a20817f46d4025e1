#![no_std]

//! # Keymap Types
//!
//! This crate defines the data model shared by the keyboard remapping crates.
//!
//! ## Philosophy
//!
//! - **One wire format**: A key event is a single 16-bit code, top byte status, bottom byte key
//! - **Named bits**: Modifier semantics live in [`StatusBits`] and [`KeyStatus`], not in scattered masks
//! - **Copy everywhere**: Every type here is a small value, passed by copy
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A keyboard protocol decoder (scan codes are already resolved upstream)
//! - A text encoding layer (one output byte per key event, Latin-1)

pub mod code;
pub mod country;
pub mod keys;
pub mod latin1;
pub mod status;

pub use code::KeyEventCode;
pub use country::{CountryCode, CountryCodeError};
pub use status::{KeyStatus, StatusBits};
