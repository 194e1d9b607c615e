//! Bidirectional lookup over the wire type registry.
//!
//! The registry itself is the closed [`WireType`] enum in the types crate;
//! this facade adds the failable tag/name lookups consumers use when decoding
//! announcements, and folds the miss cases into [`ProtocolError`].

use types::WireType;

use crate::error::{ProtocolError, ProtocolResult};

/// Registry lookups keyed by wire tag or canonical name.
pub struct WireTypeRegistry;

impl WireTypeRegistry {
    /// Look up a descriptor by its numeric wire tag.
    pub fn by_tag(tag: u8) -> ProtocolResult<WireType> {
        WireType::try_from(tag).map_err(|_| ProtocolError::UnknownTypeTag { tag })
    }

    /// Look up a descriptor by its canonical name.
    pub fn by_name(name: &str) -> ProtocolResult<WireType> {
        WireType::from_name(name).ok_or_else(|| ProtocolError::UnknownTypeName {
            name: name.to_string(),
        })
    }

    /// All descriptors in the registry, in tag order.
    pub fn all_types() -> Vec<WireType> {
        WireType::ALL.to_vec()
    }
}
