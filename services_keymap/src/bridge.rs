//! Key source to text bridge
//!
//! Pulls one event at a time from a [`KeyEventSource`] and classifies the
//! remapped result. There is no queue: each `poll` handles at most one event.

use hal::KeyEventSource;
use keymap_types::KeyEventCode;
use log::trace;

use crate::remapper::Remapper;

/// Outcome of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOutput {
    /// Printable (or ASCII control) key press; base byte is the character
    Char(KeyEventCode),
    /// Non-printable key press, passed through unchanged
    Function(KeyEventCode),
    /// Release, lock echo or unresolvable combination
    Ignored(KeyEventCode),
    /// Source had nothing
    Idle,
}

impl BridgeOutput {
    /// Output byte for `Char`, `None` otherwise
    pub fn byte(&self) -> Option<u8> {
        match self {
            Self::Char(code) => Some(code.base()),
            _ => None,
        }
    }
}

/// Bridge from a key source to remapped characters
pub struct KeymapBridge<'r, S> {
    source: S,
    remapper: Remapper<'r>,
    events_polled: u64,
    chars_emitted: u64,
}

impl<'r, S: KeyEventSource> KeymapBridge<'r, S> {
    pub fn new(source: S, remapper: Remapper<'r>) -> Self {
        Self {
            source,
            remapper,
            events_polled: 0,
            chars_emitted: 0,
        }
    }

    /// Polls the source once
    pub fn poll(&mut self) -> BridgeOutput {
        let Some(event) = self.source.poll_event() else {
            return BridgeOutput::Idle;
        };
        self.events_polled += 1;

        let code = event.code;
        let output = if code.is_break() {
            BridgeOutput::Ignored(code)
        } else {
            let remapped = self.remapper.remap_key(code);
            if !remapped.is_none() {
                self.chars_emitted += 1;
                BridgeOutput::Char(remapped)
            } else if code.is_function() {
                BridgeOutput::Function(code)
            } else {
                BridgeOutput::Ignored(code)
            }
        };

        trace!("keymap bridge: {} -> {:?}", code, output);
        output
    }

    /// Polls until the source is empty, collecting character bytes
    pub fn drain_text(&mut self) -> Vec<u8> {
        let mut text = Vec::new();
        loop {
            match self.poll() {
                BridgeOutput::Idle => break,
                output => text.extend(output.byte()),
            }
        }
        text
    }

    pub fn remapper(&self) -> &Remapper<'r> {
        &self.remapper
    }

    /// Mutable access, e.g. to switch locale between events
    pub fn remapper_mut(&mut self) -> &mut Remapper<'r> {
        &mut self.remapper
    }

    pub fn events_polled(&self) -> u64 {
        self.events_polled
    }

    pub fn chars_emitted(&self) -> u64 {
        self.chars_emitted
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
