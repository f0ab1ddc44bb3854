//! Error types for the `slt` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `slt`. All map to exit code 2.
///
/// Content problems (unmatched envelopes, invalid JSON) are not errors;
/// those lines are silently skipped in the extractor.
#[derive(Debug, Error)]
pub enum SltError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while emitting an output record.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SltError {
    /// True when the failure is a downstream consumer closing the pipe,
    /// which is a clean shutdown rather than a reportable error.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
