//! Cursor Access
//!
//! The cursor addresses records by byte offset, independent of the
//! container's length, and reads or writes single fields in place.

use crate::common::*;

fn filled(ty: &StructArrayType, n: i32) -> StructArray {
    let mut array = ty.with_capacity(n as usize);
    for i in 0..n {
        array.push(&abc(ty, i, i % 2 == 0, i as f32 * 0.5)).unwrap();
    }
    array
}

#[test]
fn move_and_next_walk_records() {
    let ty = abc_type();
    let array = &mut filled(&ty, 5);
    array.move_to(0);
    let mut seen = Vec::new();
    for _ in 0..array.len() {
        seen.push(array.read_field(0));
        array.next();
    }
    assert_eq!(
        seen,
        (0..5).map(Value::I32).collect::<Vec<_>>()
    );
    assert_eq!(array.cursor(), 5 * ty.record_size());
}

#[test]
fn cursor_writes_are_visible_to_get() {
    let ty = abc_type();
    let mut array = filled(&ty, 3);
    array.move_to(1);
    array.write_field(0, -40i32);
    array.write_named("b", false).unwrap();
    assert_eq!(array.get(1), abc(&ty, -40, false, 0.5));
    // Neighbours untouched
    assert_eq!(array.get(0), abc(&ty, 0, true, 0.0));
    assert_eq!(array.get(2), abc(&ty, 2, true, 1.0));
}

#[test]
fn cursor_writes_convert_values() {
    let ty = abc_type();
    let mut array = filled(&ty, 1);
    array.move_to(0);
    array.write_field(0, 3.99f64);
    array.write_field(1, 0u8);
    array.write_field(2, true);
    assert_eq!(array.read_record(), abc(&ty, 3, false, 1.0));
}

#[test]
fn typed_accessors_sum_a_column() {
    let ty = abc_type();
    let mut array = filled(&ty, 10);
    let a = ty.layout().accessor::<i32>("a").unwrap();
    let b = ty.layout().accessor::<bool>("b").unwrap();

    array.move_to(0);
    let mut sum = 0;
    let mut flagged = 0;
    for _ in 0..array.len() {
        sum += array.read(a);
        flagged += usize::from(array.read(b));
        array.next();
    }
    assert_eq!(sum, 45);
    assert_eq!(flagged, 5);
}

#[test]
fn typed_accessor_type_checked_once() {
    let ty = abc_type();
    assert!(matches!(
        ty.layout().accessor::<u32>("a"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        ty.layout().accessor::<i32>("zz"),
        Err(Error::UnknownField(_))
    ));
}

#[test]
fn cursor_record_round_trip() {
    let ty = abc_type();
    let mut array = filled(&ty, 3);
    array.move_to(2);
    array.write_record(&abc(&ty, 11, false, 11.0)).unwrap();
    assert_eq!(array.read_record(), abc(&ty, 11, false, 11.0));
    assert_eq!(array.get(2), abc(&ty, 11, false, 11.0));
}

#[test]
fn cursor_is_not_bounded_by_length() {
    let ty = abc_type();
    let mut array = ty.with_capacity(4);
    array.move_to(3);
    array.write_field(0, 77i32);
    assert_eq!(array.len(), 0);

    // Pushing overwrites the slot
    for _ in 0..4 {
        array.push(&ty.layout().zeroed_record()).unwrap();
    }
    assert_eq!(array.get(3)["a"], Value::I32(0));
}

#[test]
fn move_checked_rejects_unpopulated_index() {
    let ty = abc_type();
    let mut array = filled(&ty, 2);
    array.move_checked(1).unwrap();
    assert_eq!(array.cursor(), ty.record_size());
    let err = array.move_checked(2).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfBounds {
            index: 2,
            length: 2
        }
    );
    assert_eq!(array.cursor(), ty.record_size());
}

#[test]
#[should_panic]
fn cursor_past_allocation_panics() {
    let ty = abc_type();
    let mut array = ty.with_capacity(1);
    array.move_to(1);
    let _value = array.read_field(0);
}
