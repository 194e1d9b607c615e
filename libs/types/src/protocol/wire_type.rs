//! # Wire Type Registry
//!
//! Closed table of the nine Telewire wire types. Each descriptor pairs a
//! numeric tag (carried in the third slot of every binary message tuple) with
//! a canonical lowercase name (carried in text-frame announcements). Tags and
//! names are disjoint by construction, so both directions of lookup are
//! unambiguous.
//!
//! The numbering follows the protocol's wire format and must never be
//! reshuffled: peers route payload decoding off these exact values. Tags 3
//! and 19 are reserved for single-precision floats, which this client never
//! emits; the registry keeps them as gaps rather than renumbering around
//! them.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

/// Protocol wire type descriptor.
///
/// The enum discriminant is the wire tag; [`WireType::name`] gives the
/// canonical string form. The set is closed: no dynamic registration exists,
/// and unknown tags or names are lookup failures, not extension points.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum WireType {
    /// Boolean scalar
    Boolean = 0,
    /// 64-bit float scalar with a non-zero fractional part
    Double = 1,
    /// Whole-valued numeric scalar
    Integer = 2,
    // 3 reserved: single-precision float, never produced by this client
    /// UTF-8 string scalar
    String = 4,
    /// Opaque byte buffer
    Raw = 5,
    /// Homogeneous boolean sequence
    BooleanArray = 16,
    /// Homogeneous numeric sequence containing a non-whole element
    DoubleArray = 17,
    /// Homogeneous whole-valued numeric sequence
    IntegerArray = 18,
    // 19 reserved: single-precision float array
    /// Homogeneous string sequence
    StringArray = 20,
}

impl WireType {
    /// Every descriptor in the registry, in tag order.
    pub const ALL: [WireType; 9] = [
        WireType::Boolean,
        WireType::Double,
        WireType::Integer,
        WireType::String,
        WireType::Raw,
        WireType::BooleanArray,
        WireType::DoubleArray,
        WireType::IntegerArray,
        WireType::StringArray,
    ];

    /// Numeric tag carried in the wire message tuple.
    pub const fn tag(&self) -> u8 {
        *self as u8
    }

    /// Canonical name carried in text-frame announcements.
    pub const fn name(&self) -> &'static str {
        match self {
            WireType::Boolean => "boolean",
            WireType::Double => "double",
            WireType::Integer => "int",
            WireType::String => "string",
            WireType::Raw => "raw",
            WireType::BooleanArray => "boolean[]",
            WireType::DoubleArray => "double[]",
            WireType::IntegerArray => "int[]",
            WireType::StringArray => "string[]",
        }
    }

    /// Look up a descriptor by its canonical name.
    pub fn from_name(name: &str) -> Option<WireType> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Whether this descriptor is one of the homogeneous array types.
    pub const fn is_array(&self) -> bool {
        matches!(
            self,
            WireType::BooleanArray
                | WireType::DoubleArray
                | WireType::IntegerArray
                | WireType::StringArray
        )
    }
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
