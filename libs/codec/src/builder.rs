//! # Wire Message Construction
//!
//! Assembles the ordered `(topic_id, timestamp, type_tag, payload)` tuple for
//! one outgoing topic update. The type tag comes from an explicit hint when
//! the caller already knows the topic's announced type, or from the
//! classifier otherwise. Construction itself never fails; the only failure
//! path is classification of the payload.

use types::{now_micros, Value, WireMessage, WireType};

use crate::classify::classify;
use crate::error::ProtocolResult;

/// Build a wire message for an outgoing topic update.
///
/// A supplied `type_hint` is trusted verbatim and not re-validated against
/// the payload: publishers hint with the type the topic was announced under,
/// and the server rejects mismatches on its side.
pub fn encode(
    topic_id: u32,
    timestamp_us: u64,
    value: Value,
    type_hint: Option<WireType>,
) -> ProtocolResult<WireMessage> {
    let tag = match type_hint {
        Some(hint) => hint.tag(),
        None => classify(&value)?.tag(),
    };
    Ok(WireMessage::new(topic_id, timestamp_us, tag, value))
}

/// Consuming builder for wire messages.
///
/// Covers the common case where the timestamp should be stamped at build
/// time rather than threaded through by the caller.
pub struct WireMessageBuilder {
    topic_id: u32,
    timestamp_us: Option<u64>,
    type_hint: Option<WireType>,
}

impl WireMessageBuilder {
    /// Start a message for the given topic.
    pub fn new(topic_id: u32) -> Self {
        Self {
            topic_id,
            timestamp_us: None,
            type_hint: None,
        }
    }

    /// Use an explicit timestamp instead of stamping at build time.
    pub fn with_timestamp(mut self, timestamp_us: u64) -> Self {
        self.timestamp_us = Some(timestamp_us);
        self
    }

    /// Trust this wire type instead of classifying the payload.
    pub fn with_type_hint(mut self, hint: WireType) -> Self {
        self.type_hint = Some(hint);
        self
    }

    /// Build the message tuple around the payload.
    pub fn build(self, value: Value) -> ProtocolResult<WireMessage> {
        let timestamp_us = self.timestamp_us.unwrap_or_else(now_micros);
        encode(self.topic_id, timestamp_us, value, self.type_hint)
    }
}
