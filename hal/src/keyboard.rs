//! Key-event source abstraction
//!
//! This module provides the interface a keyboard decoder implements to feed
//! the remapper.
//!
//! ## Philosophy
//!
//! - **Hardware is just a source**: The decoder emits codes, it does not interpret them
//! - **Already decoded**: Scan codes are resolved to key ids and status bits below this line
//! - **Testable**: Can script events via a fake source
//!
//! ## Design
//!
//! The interface is minimal:
//! - Poll-based (no interrupts at HAL level)
//! - Returns one 16-bit key-event code per event
//! - No queueing beyond what the decoder itself does

use keymap_types::KeyEventCode;

#[cfg(any(feature = "alloc", test))]
use alloc::collections::VecDeque;

/// Key event as delivered by the source
///
/// The source guarantees the Break and Function bits are consistent with
/// the base byte; nothing above this layer re-validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalKeyEvent {
    /// Packed status and key id
    pub code: KeyEventCode,

    /// Optional timestamp in nanoseconds (if hardware provides it)
    pub timestamp_ns: Option<u64>,
}

impl HalKeyEvent {
    /// Creates an event without a timestamp
    pub fn new(code: KeyEventCode) -> Self {
        Self {
            code,
            timestamp_ns: None,
        }
    }

    /// Creates an event with a timestamp
    pub fn with_timestamp(code: KeyEventCode, timestamp_ns: u64) -> Self {
        Self {
            code,
            timestamp_ns: Some(timestamp_ns),
        }
    }

    /// Returns true if this is a key press (make) event
    pub fn is_pressed(&self) -> bool {
        !self.code.is_break()
    }

    /// Returns true if this is a key release (break) event
    pub fn is_released(&self) -> bool {
        self.code.is_break()
    }
}

impl From<KeyEventCode> for HalKeyEvent {
    fn from(code: KeyEventCode) -> Self {
        Self::new(code)
    }
}

/// Key-event source trait
///
/// Keyboard decoders provide input via this trait.
///
/// ## Implementation Notes
///
/// - **Poll-based**: Call `poll_event()` to check for new events
/// - **Non-blocking**: Returns `None` if no event is available
/// - **Stateless for callers**: Modifier and lock state is already folded into each code
///
/// ## Example
///
/// ```rust,ignore
/// let mut source = Ps2Decoder::new(data_pin, clock_pin);
/// loop {
///     if let Some(event) = source.poll_event() {
///         let byte = remapper.remap_key_byte(event.code);
///     }
/// }
/// ```
pub trait KeyEventSource {
    /// Polls for a key event
    ///
    /// Returns `Some(event)` if one is available, `None` otherwise.
    /// Never blocks.
    fn poll_event(&mut self) -> Option<HalKeyEvent>;
}

impl<S: KeyEventSource + ?Sized> KeyEventSource for &mut S {
    fn poll_event(&mut self) -> Option<HalKeyEvent> {
        (**self).poll_event()
    }
}

/// Source that replays a fixed script of events
///
/// Stands in for the keyboard decoder in simulation and tests.
#[cfg(any(feature = "alloc", test))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeySource {
    pending: VecDeque<HalKeyEvent>,
}

#[cfg(any(feature = "alloc", test))]
impl ScriptedKeySource {
    /// Creates an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that will emit `codes` in order
    pub fn from_codes<I: IntoIterator<Item = KeyEventCode>>(codes: I) -> Self {
        Self {
            pending: codes.into_iter().map(HalKeyEvent::new).collect(),
        }
    }

    /// Appends an event to the script
    pub fn push(&mut self, event: HalKeyEvent) {
        self.pending.push_back(event);
    }

    /// Number of events not yet polled
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(any(feature = "alloc", test))]
impl KeyEventSource for ScriptedKeySource {
    fn poll_event(&mut self) -> Option<HalKeyEvent> {
        self.pending.pop_front()
    }
}
