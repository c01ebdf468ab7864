//! Value Conversion
//!
//! Values written into a field of another type convert like Rust `as`
//! casts; booleans map to 0/1 and numbers to `!= 0`.

use crate::common::*;
use structarray::Scalar;

#[test]
fn numeric_casts_follow_as_semantics() {
    assert_eq!(Value::I32(-1).cast::<u8>(), 255);
    assert_eq!(Value::U16(300).cast::<i8>(), 44);
    assert_eq!(Value::F64(2.9).cast::<i32>(), 2);
    assert_eq!(Value::F64(-2.9).cast::<i32>(), -2);
    assert_eq!(Value::F32(f32::NAN).cast::<u32>(), 0);
    assert_eq!(Value::F64(1e20).cast::<i16>(), i16::MAX);
    assert_eq!(Value::I64(-5).cast::<f32>(), -5.0);
}

#[test]
fn bool_conversions() {
    assert_eq!(Value::Bool(true).cast::<u64>(), 1);
    assert_eq!(Value::Bool(false).cast::<f64>(), 0.0);
    assert!(Value::I8(-3).cast::<bool>());
    assert!(!Value::U32(0).cast::<bool>());
    assert!(Value::F32(0.5).cast::<bool>());
    assert!(!Value::F64(-0.0).cast::<bool>());
}

#[test]
fn wide_integers_are_exact() {
    assert_eq!(Value::U64(u64::MAX).cast::<u64>(), u64::MAX);
    assert_eq!(Value::I64(i64::MIN).cast::<i64>(), i64::MIN);
    assert_eq!(Value::U64(u64::MAX).as_u64(), Some(u64::MAX));
    assert_eq!(Value::I16(-7).as_i64(), Some(-7));
    assert_eq!(Value::U8(7).as_i64(), None);
}

#[test]
fn scalar_types_match_primitive_types() {
    assert_eq!(<bool as Scalar>::TYPE, PrimitiveType::Bool);
    assert_eq!(<i16 as Scalar>::TYPE, PrimitiveType::I16);
    assert_eq!(<u64 as Scalar>::TYPE, PrimitiveType::U64);
    assert_eq!(<f32 as Scalar>::TYPE, PrimitiveType::F32);
    for ty in PrimitiveType::ALL {
        assert_eq!(Value::zero(ty).primitive_type(), ty);
    }
}

#[test]
fn float_equality() {
    assert_ne!(Value::F64(f64::NAN), Value::F64(f64::NAN));
    assert!(Value::F64(f64::NAN).bit_eq(&Value::F64(f64::NAN)));
    assert_eq!(Value::F32(0.0), Value::F32(-0.0));
    assert!(!Value::F32(0.0).bit_eq(&Value::F32(-0.0)));
    assert!(!Value::I32(1).bit_eq(&Value::U32(1)));
}

#[test]
fn values_serialize_untagged() {
    let json = serde_json::to_string(&[Value::I8(-1), Value::Bool(true), Value::F64(0.5)]).unwrap();
    assert_eq!(json, "[-1,true,0.5]");
}
