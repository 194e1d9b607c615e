//! # Telewire Protocol Codec
//!
//! ## Purpose
//!
//! The "rules" layer of the Telewire client: everything that decides how an
//! application value becomes protocol traffic, without touching the network.
//! - Value classification against the closed wire type registry
//! - Wire message tuple construction
//! - Collision-checked client/session identifier generation
//! - Transport frame segmentation for oversized payloads
//! - Server URL composition
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → transport layer (external)
//!     ↑           ↓              ↓
//! Pure Data   Protocol       Serialization,
//! Value,      Rules          Framing, Sockets
//! WireType    Classify/Build
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Network transport or connection management
//! - Subscription and topic-table bookkeeping
//! - Payload byte layout (the external serializer owns it, keyed by tag)
//!
//! Every component here is a pure function over its inputs except
//! [`UidGenerator`], which owns the sole piece of shared mutable state (the
//! used-id set) behind a mutex.

pub mod builder;
pub mod chunk;
pub mod classify;
pub mod error;
pub mod ident;
pub mod registry;
pub mod url;

// Re-export key types for convenience
pub use builder::{encode, WireMessageBuilder};
pub use chunk::split_buffer;
pub use classify::{classify, is_double};
pub use error::{ProtocolError, ProtocolResult};
pub use ident::{UidGenerator, MAX_UID_RETRIES};
pub use registry::WireTypeRegistry;
pub use url::server_url;

// Re-export the data definitions consumers pair with the codec
pub use types::{now_micros, now_millis, Value, ValueKind, WireMessage, WireType};
