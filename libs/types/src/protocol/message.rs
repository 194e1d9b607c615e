//! Binary message tuple and client-side timestamp helpers.
//!
//! Every outgoing topic update travels as an ordered 4-tuple
//! `(topic_id, timestamp, type_tag, payload)`. The tuple is assembled by the
//! codec and handed to the external serializer, which owns the payload byte
//! layout per type tag; this crate only fixes the slot order.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::value::Value;

/// Ordered wire message tuple for one outgoing topic update.
///
/// Immutable once built. The type tag is trusted as supplied by the encoder;
/// no cross-validation against the payload happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct WireMessage {
    topic_id: u32,
    timestamp_us: u64,
    type_tag: u8,
    payload: Value,
}

impl WireMessage {
    /// Assemble a message tuple. Slot order is fixed by the wire format.
    pub fn new(topic_id: u32, timestamp_us: u64, type_tag: u8, payload: Value) -> Self {
        Self {
            topic_id,
            timestamp_us,
            type_tag,
            payload,
        }
    }

    /// Topic this update belongs to.
    pub fn topic_id(&self) -> u32 {
        self.topic_id
    }

    /// Update time in microseconds since the Unix epoch.
    pub fn timestamp_us(&self) -> u64 {
        self.timestamp_us
    }

    /// Wire type tag of the payload.
    pub fn type_tag(&self) -> u8 {
        self.type_tag
    }

    /// The payload value.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Borrowed view of the tuple in wire slot order.
    pub fn as_tuple(&self) -> (u32, u64, u8, &Value) {
        (self.topic_id, self.timestamp_us, self.type_tag, &self.payload)
    }

    /// Consume the message, returning the owned tuple fields.
    pub fn into_parts(self) -> (u32, u64, u8, Value) {
        (self.topic_id, self.timestamp_us, self.type_tag, self.payload)
    }
}

// Serializes as a 4-element sequence so serde-based binary formats emit the
// exact wire order with no field names.
impl Serialize for WireMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.topic_id)?;
        tuple.serialize_element(&self.timestamp_us)?;
        tuple.serialize_element(&self.type_tag)?;
        tuple.serialize_element(&self.payload)?;
        tuple.end()
    }
}

/// Current wall-clock time in microseconds since the Unix epoch.
///
/// The client-side timestamp source for outgoing updates; the transport layer
/// offsets it against server time during handshake.
pub fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_micros() as u64
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_construction_inputs() {
        let msg = WireMessage::new(7, 1000, 1, Value::Number(3.5));
        assert_eq!(msg.topic_id(), 7);
        assert_eq!(msg.timestamp_us(), 1000);
        assert_eq!(msg.type_tag(), 1);
        assert_eq!(msg.payload(), &Value::Number(3.5));
        assert_eq!(msg.as_tuple(), (7, 1000, 1, &Value::Number(3.5)));
    }

    #[test]
    fn serializes_as_ordered_sequence() {
        let msg = WireMessage::new(7, 1000, 1, Value::Number(3.5));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!([7, 1000, 1, 3.5]));
    }

    #[test]
    fn clocks_are_monotonic_enough_for_ordering() {
        let a = now_micros();
        let b = now_micros();
        assert!(b >= a);
        assert!(now_millis() > 0);
    }
}
