//! Record Model
//!
//! Records are transient field→value maps produced by layouts; they share
//! field names with the layout and compare field-wise.

use crate::common::*;

#[test]
fn layout_records_share_names() {
    let ty = abc_type();
    let first = abc(&ty, 1, true, 1.0);
    let second = ty.layout().zeroed_record();
    assert!(std::ptr::eq(first.names(), second.names()));
    assert_eq!(first.names(), ["a", "b", "c"]);
}

#[test]
fn records_compare_field_wise() {
    let ty = abc_type();
    assert_eq!(abc(&ty, 2, true, 3.5), abc(&ty, 2, true, 3.5));
    assert_ne!(abc(&ty, 2, true, 3.5), abc(&ty, 2, false, 3.5));

    let other = StructArrayType::from_tags([("a", "i32"), ("b", "bool"), ("c", "f32")]).unwrap();
    assert_eq!(abc(&ty, 2, true, 3.5), abc(&other, 2, true, 3.5));
}

#[test]
fn record_from_pairs_any_order() {
    let ty = abc_type();
    let record = ty
        .layout()
        .record_from_pairs([("b", Value::Bool(true)), ("c", Value::F32(3.5)), ("a", Value::I32(2))])
        .unwrap();
    assert_eq!(record, abc(&ty, 2, true, 3.5));
}

#[test]
fn record_mutation_and_iteration() {
    let ty = abc_type();
    let mut record = abc(&ty, 2, true, 3.5);
    record.set("a", 9i32);
    record.values_mut()[1] = Value::Bool(false);

    let pairs: Vec<(&str, Value)> = record.iter().map(|(n, v)| (n, *v)).collect();
    assert_eq!(
        pairs,
        [("a", Value::I32(9)), ("b", Value::Bool(false)), ("c", Value::F32(3.5))]
    );
    assert_eq!(record.into_values().len(), 3);
}

#[test]
fn record_serializes_as_map() {
    let ty = abc_type();
    let json = serde_json::to_value(abc(&ty, 2, true, 3.5)).unwrap();
    assert_eq!(json, serde_json::json!({"a": 2, "b": true, "c": 3.5}));
}
