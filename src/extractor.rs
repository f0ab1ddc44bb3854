//! Line extraction from an arbitrarily-chunked byte stream.
//!
//! Reassembles chunks into logical lines, recognizes the two accepted
//! envelopes (a bare `{...}` object as the whole trimmed line, or a JSON
//! payload embedded between `<SL<` and `>SL>` delimiters), and decodes each
//! payload into an [`InputEvent`]. Lines matching neither envelope, or
//! matching but carrying invalid JSON, are dropped without diagnostic.

use std::sync::LazyLock;

use regex::Regex;

use crate::event::InputEvent;

/// Matches the embedded envelope; capture group 1 is the JSON payload.
static DELIMITED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<SL<(.*)>SL>").expect("delimiter pattern is valid"));

/// Reassembles chunked input into decoded events, one per logical line.
///
/// The extractor exclusively owns a single pending-byte buffer. Buffering
/// bytes (not chars) means a chunk boundary may fall inside a multi-byte
/// UTF-8 sequence without corrupting the line; decoding happens per line.
#[derive(Debug, Default)]
pub struct LineExtractor {
    pending: Vec<u8>,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk, then deliver every now-complete line's decoded event.
    ///
    /// Delivery is synchronous and in input order: each event is handed to
    /// `deliver` before the next line is examined. A partial trailing line
    /// stays buffered until the next chunk or [`finish`](Self::finish).
    pub fn push_chunk(&mut self, chunk: &[u8], deliver: &mut dyn FnMut(InputEvent)) {
        self.pending.extend_from_slice(chunk);
        while let Some(idx) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=idx).collect();
            if let Some(event) = decode_line(&line[..idx]) {
                deliver(event);
            }
        }
    }

    /// Flush a final unterminated line at end of stream.
    pub fn finish(mut self, deliver: &mut dyn FnMut(InputEvent)) {
        if !self.pending.is_empty() {
            self.push_chunk(b"\n", deliver);
        }
    }
}

/// Decode one raw line (newline already stripped): UTF-8 check, envelope
/// match, JSON parse. `None` means the line is silently skipped.
fn decode_line(raw: &[u8]) -> Option<InputEvent> {
    let trimmed = std::str::from_utf8(raw).ok()?.trim();

    // Envelope forms, tried in order: a line starting with '{' is taken as a
    // whole JSON document and never falls back to the delimiter form.
    let payload = if trimmed.starts_with('{') {
        trimmed
    } else {
        DELIMITED.captures(trimmed)?.get(1)?.as_str()
    };

    serde_json::from_str(payload).ok()
}
