//! Protocol data definitions: wire type registry, value union, message tuple,
//! and the constants shared with the transport layer.

pub mod constants;
pub mod message;
pub mod value;
pub mod wire_type;

pub use constants::*;
pub use message::{now_micros, now_millis, WireMessage};
pub use value::{Value, ValueKind};
pub use wire_type::WireType;
