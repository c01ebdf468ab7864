//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

use proptest::prelude::*;
pub use structarray::{
    Error, FieldAccessor, Layout, Packing, PrimitiveType, Record, Schema, StructArray,
    StructArrayConfig, StructArrayType, Value,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `structarray::*` debug events to the test output.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// `{a: i32, b: bool, c: f32}`
pub fn abc_type() -> StructArrayType {
    init_tracing();
    StructArrayType::from_tags([("a", "i32"), ("b", "bool"), ("c", "f32")]).unwrap()
}

/// A record of the `{a: i32, b: bool, c: f32}` type
pub fn abc(ty: &StructArrayType, a: i32, b: bool, c: f32) -> Record {
    ty.layout()
        .record([Value::I32(a), Value::Bool(b), Value::F32(c)])
        .unwrap()
}

/// One field of every primitive type, named after its tag
pub fn all_types() -> StructArrayType {
    init_tracing();
    StructArrayType::from_tags(PrimitiveType::ALL.iter().map(|ty| (ty.tag(), ty.tag()))).unwrap()
}

/// Values of field `name` across all populated records
pub fn column(array: &StructArray, name: &str) -> Vec<Value> {
    array.iter().map(|r| r[name]).collect()
}

// ============================================================================
// Strategies
// ============================================================================

/// Any value of the given type, including NaN and infinities for floats
pub fn arb_value(ty: PrimitiveType) -> BoxedStrategy<Value> {
    match ty {
        PrimitiveType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        PrimitiveType::I8 => any::<i8>().prop_map(Value::I8).boxed(),
        PrimitiveType::I16 => any::<i16>().prop_map(Value::I16).boxed(),
        PrimitiveType::I32 => any::<i32>().prop_map(Value::I32).boxed(),
        PrimitiveType::I64 => any::<i64>().prop_map(Value::I64).boxed(),
        PrimitiveType::U8 => any::<u8>().prop_map(Value::U8).boxed(),
        PrimitiveType::U16 => any::<u16>().prop_map(Value::U16).boxed(),
        PrimitiveType::U32 => any::<u32>().prop_map(Value::U32).boxed(),
        PrimitiveType::U64 => any::<u64>().prop_map(Value::U64).boxed(),
        PrimitiveType::F32 => any::<f32>().prop_map(Value::F32).boxed(),
        PrimitiveType::F64 => any::<f64>().prop_map(Value::F64).boxed(),
    }
}

/// Values for every field of the layout, in declaration order
pub fn arb_values(layout: &Layout) -> BoxedStrategy<Vec<Value>> {
    layout
        .fields()
        .iter()
        .map(|f| arb_value(f.ty()))
        .collect::<Vec<_>>()
        .boxed()
}

/// Field-wise bit equality of two records
pub fn records_bit_eq(left: &Record, right: &Record) -> bool {
    left.names() == right.names()
        && left
            .values()
            .iter()
            .zip(right.values())
            .all(|(a, b)| a.bit_eq(b))
}
