//! # Telewire Types Library
//!
//! Pure data definitions for the Telewire pub/sub telemetry protocol.
//!
//! ## Design Philosophy
//!
//! - **Data, Not Rules**: this crate holds the wire type registry, the value
//!   union, and the message tuple. Classification, message construction, and
//!   client naming live in the `codec` crate.
//! - **Closed Type System**: the nine wire types are fixed by the protocol;
//!   no dynamic registration exists.
//! - **Serializer-Friendly**: [`WireMessage`] serializes as an ordered
//!   4-element sequence so any serde-based binary serializer emits the wire
//!   layout without custom glue.
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Value, ValueKind, WireType};
//!
//! // Application values convert into the protocol value union
//! let position: Value = 3.5.into();
//! assert_eq!(position.kind(), ValueKind::Number);
//!
//! let flags: Value = vec![true, false, true].into();
//! assert_eq!(flags.kind(), ValueKind::Array);
//!
//! // The registry maps tags and names to descriptors
//! assert_eq!(WireType::Double.tag(), 1);
//! assert_eq!(WireType::from_name("boolean[]"), Some(WireType::BooleanArray));
//! ```
//!
//! ## Integration Points
//!
//! - **codec**: classifies [`Value`]s and assembles [`WireMessage`]s
//! - **transport layer** (external): serializes the message tuple and frames
//!   it for the socket

pub mod protocol;

// Re-export protocol types for convenience
pub use protocol::constants::{PROTOCOL_VERSION, SERVER_PATH_PREFIX, WS_SCHEME};
pub use protocol::message::{now_micros, now_millis, WireMessage};
pub use protocol::value::{Value, ValueKind};
pub use protocol::wire_type::WireType;
