#![no_std]

//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the boundary between the keyboard link and the remapper.
//!
//! ## Philosophy
//!
//! **The key source is external and swappable.**
//!
//! The wire protocol, debouncing and make/break detection all happen behind
//! [`KeyEventSource`]. Everything above this crate sees already-decoded
//! 16-bit key-event codes.
//!
//! ## Design Principles
//!
//! 1. **Poll-based**: No interrupts at HAL level
//! 2. **Trait-based**: Real drivers and simulations implement the same trait
//! 3. **Testable**: A scripted source stands in for hardware

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod keyboard;

pub use keyboard::{HalKeyEvent, KeyEventSource};
#[cfg(any(feature = "alloc", test))]
pub use keyboard::ScriptedKeySource;
