//! # Value Classification
//!
//! Maps an application [`Value`] onto the wire type that represents it.
//! This is the one place the numeric integer/double split and the array
//! homogeneity rules are decided; the encoder and topic layer both defer to
//! it. Classification is pure: no mutation, no shared state, safe to call
//! from any thread without synchronization.
//!
//! ## Rules, in priority order
//!
//! 1. Boolean scalar → `boolean`
//! 2. Numeric scalar → `double` when finite with a non-zero fractional part,
//!    otherwise `int`
//! 3. String scalar → `string`
//! 4. Byte buffer → `raw`
//! 5. Non-empty array whose elements all share one kind in
//!    {boolean, number, string} → the matching array type; a numeric array is
//!    `double[]` when any element is non-whole, `int[]` when all are whole
//! 6. Everything else (empty arrays, mixed kinds, nested arrays, arrays of
//!    buffers) fails with `UnclassifiableValue`

use types::{Value, ValueKind, WireType};

use crate::error::{ProtocolError, ProtocolResult};

/// Whether a number is a double on the wire: finite with a non-zero
/// fractional part. Whole-valued numbers are integers even when the
/// application meant a float; the value union carries no float marker.
pub fn is_double(x: f64) -> bool {
    x.is_finite() && x.fract() != 0.0
}

/// Determine the wire type of an application value.
pub fn classify(value: &Value) -> ProtocolResult<WireType> {
    match value {
        Value::Boolean(_) => Ok(WireType::Boolean),
        Value::Number(n) => {
            if is_double(*n) {
                Ok(WireType::Double)
            } else {
                Ok(WireType::Integer)
            }
        }
        Value::String(_) => Ok(WireType::String),
        Value::Raw(_) => Ok(WireType::Raw),
        Value::Array(elements) => classify_array(elements),
    }
}

fn classify_array(elements: &[Value]) -> ProtocolResult<WireType> {
    let mut kinds = elements.iter().map(Value::kind);
    let Some(first) = kinds.next() else {
        return Err(ProtocolError::unclassifiable(
            ValueKind::Array,
            "empty array has no element kind",
        ));
    };
    if kinds.any(|kind| kind != first) {
        return Err(ProtocolError::unclassifiable(
            ValueKind::Array,
            "array mixes element kinds",
        ));
    }

    match first {
        ValueKind::Boolean => Ok(WireType::BooleanArray),
        ValueKind::String => Ok(WireType::StringArray),
        ValueKind::Number => {
            // All-or-nothing over every element: one non-whole number makes
            // the whole array double[].
            let any_double = elements
                .iter()
                .any(|e| matches!(e, Value::Number(n) if is_double(*n)));
            if any_double {
                Ok(WireType::DoubleArray)
            } else {
                Ok(WireType::IntegerArray)
            }
        }
        ValueKind::Raw => Err(ProtocolError::unclassifiable(
            ValueKind::Array,
            "byte buffers cannot be array elements",
        )),
        ValueKind::Array => Err(ProtocolError::unclassifiable(
            ValueKind::Array,
            "nested arrays are not a wire type",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_classify_by_variant() {
        assert_eq!(classify(&Value::Boolean(true)).unwrap(), WireType::Boolean);
        assert_eq!(classify(&Value::from("hello")).unwrap(), WireType::String);
        assert_eq!(classify(&Value::Raw(vec![1, 2, 3])).unwrap(), WireType::Raw);
    }

    #[test]
    fn whole_numbers_are_integers() {
        assert_eq!(classify(&Value::Number(0.0)).unwrap(), WireType::Integer);
        assert_eq!(classify(&Value::Number(-17.0)).unwrap(), WireType::Integer);
        assert_eq!(classify(&Value::Number(1e9)).unwrap(), WireType::Integer);
    }

    #[test]
    fn fractional_numbers_are_doubles() {
        assert_eq!(classify(&Value::Number(3.5)).unwrap(), WireType::Double);
        assert_eq!(classify(&Value::Number(-0.25)).unwrap(), WireType::Double);
    }

    #[test]
    fn homogeneous_arrays_classify_by_element_kind() {
        assert_eq!(
            classify(&Value::from(vec![true, false])).unwrap(),
            WireType::BooleanArray
        );
        assert_eq!(
            classify(&Value::from(vec!["a", "b"])).unwrap(),
            WireType::StringArray
        );
        assert_eq!(
            classify(&Value::from(vec![1i64, 2, 3])).unwrap(),
            WireType::IntegerArray
        );
    }

    #[test]
    fn one_fractional_element_makes_a_double_array() {
        assert_eq!(
            classify(&Value::from(vec![1.0, 2.5, 3.0])).unwrap(),
            WireType::DoubleArray
        );
        assert_eq!(
            classify(&Value::from(vec![1.5, 2.5])).unwrap(),
            WireType::DoubleArray
        );
    }

    #[test]
    fn empty_array_is_unclassifiable() {
        let err = classify(&Value::Array(vec![])).unwrap_err();
        assert!(matches!(err, ProtocolError::UnclassifiableValue { .. }));
    }

    #[test]
    fn mixed_array_is_unclassifiable() {
        let mixed = Value::Array(vec![Value::Boolean(true), Value::Number(1.0)]);
        let err = classify(&mixed).unwrap_err();
        assert!(matches!(err, ProtocolError::UnclassifiableValue { .. }));
    }

    #[test]
    fn nested_and_raw_arrays_are_unclassifiable() {
        let nested = Value::Array(vec![Value::Array(vec![Value::Boolean(true)])]);
        assert!(classify(&nested).is_err());

        let raws = Value::Array(vec![Value::Raw(vec![1]), Value::Raw(vec![2])]);
        assert!(classify(&raws).is_err());
    }
}
