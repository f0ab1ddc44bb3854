//! `slt` — flatten structured JSON log lines from stdin with request timing.
//!
//! This library provides the core extraction and projection functionality
//! for the `slt` CLI tool. It reassembles arbitrarily-chunked input into
//! logical lines, decodes one JSON event per line (a bare `{...}` object or
//! a payload wrapped in `<SL<` ... `>SL>` delimiters), and projects each
//! event into a flattened record carrying two computed timing fields:
//! `time_diff` (seconds since the first event of the run) and
//! `since_req_origin` (seconds since the first sighting of the event's
//! `request_id`).
//!
//! # Example
//!
//! ```
//! use slt::{LineExtractor, Projector};
//!
//! let mut extractor = LineExtractor::new();
//! let mut projector = Projector::new();
//! let mut out = Vec::new();
//!
//! extractor.push_chunk(
//!     b"{\"time\":\"2024-01-01T00:00:00.000Z\",\"fields\":{\"tag\":\"t\"}}\n",
//!     &mut |event| out.push(projector.project(event)),
//! );
//! assert_eq!(out[0].time_diff, "0.000");
//! ```

pub mod cli;
pub mod error;
pub mod event;
pub mod extractor;
pub mod projector;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use error::SltError;
pub use event::{EventFields, InputEvent};
pub use extractor::LineExtractor;
pub use projector::{OutputEvent, Projector, RECORD_MARKER};
