//! Protocol-level errors for value classification, chunking, and naming.
//!
//! Every failure in this crate is a local validation failure raised
//! synchronously at the offending call. Nothing is retried internally and
//! nothing is recovered automatically; the caller decides whether to correct
//! the input or propagate. Each variant carries the context a caller needs to
//! do that without re-deriving state.

use thiserror::Error;

use types::ValueKind;

/// Validation failures raised by the Telewire codec.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    /// Wire type tag is not present in the closed registry
    #[error("unknown wire type tag {tag}: registry tags are 0-2, 4-5, 16-18 and 20")]
    UnknownTypeTag { tag: u8 },

    /// Wire type name is not present in the closed registry
    #[error("unknown wire type name '{name}'")]
    UnknownTypeName { name: String },

    /// Value shape does not map to any wire type
    #[error("value of kind {kind} is not classifiable: {detail}")]
    UnclassifiableValue { kind: ValueKind, detail: String },

    /// Buffer length is not an exact multiple of the requested chunk size
    #[error("buffer of {buffer_len} bytes does not split into {chunk_size}-byte chunks")]
    InvalidChunkSize { buffer_len: usize, chunk_size: usize },

    /// Identifier generation kept colliding with already-issued ids
    #[error("no unused client id found after {retries} attempts")]
    IdSpaceExhausted { retries: u32 },
}

impl ProtocolError {
    /// Build an `UnclassifiableValue` error with a shape description.
    pub fn unclassifiable(kind: ValueKind, detail: impl Into<String>) -> Self {
        Self::UnclassifiableValue {
            kind,
            detail: detail.into(),
        }
    }
}

/// Result type for codec operations.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = ProtocolError::InvalidChunkSize {
            buffer_len: 10,
            chunk_size: 4,
        };
        let text = err.to_string();
        assert!(text.contains("10"));
        assert!(text.contains("4"));

        let err = ProtocolError::unclassifiable(ValueKind::Array, "array mixes element kinds");
        assert!(err.to_string().contains("mixes"));
    }
}
