//! Error types for the discovery core.

use thiserror::Error;

use crate::protocol::field::FieldTag;

/// Core error type for discovery operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while decoding one discovery response payload.
///
/// All variants are scoped to a single reply: the caller skips or reports
/// the reply and keeps processing the rest of the run.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload too short or missing the discovery magic. Such datagrams
    /// are unrelated traffic and are normally dropped without comment.
    #[error("not a discovery response")]
    InvalidHeader,

    /// The declared body length disagrees with the received byte count.
    #[error("invalid payload length: want {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A record header or value runs past the end of the payload.
    #[error("truncated record at offset {offset}")]
    TruncatedRecord { offset: usize },

    /// A value's length or encoding violates its tag's expected shape.
    #[error("malformed {tag} field: {reason}")]
    MalformedField { tag: FieldTag, reason: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
