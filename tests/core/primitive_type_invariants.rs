//! Primitive Type Invariants
//!
//! Every supported tag maps to exactly one type with a fixed byte width, and
//! every unsupported tag is rejected when the schema is defined.

use crate::common::*;
use structarray::PrimitiveKind;

#[test]
fn every_type_round_trips_through_its_tag() {
    for ty in PrimitiveType::ALL {
        assert_eq!(PrimitiveType::from_tag(ty.tag()).unwrap(), ty);
        assert_eq!(ty.to_string(), ty.tag());
        assert_eq!(ty.tag().parse::<PrimitiveType>().unwrap(), ty);
    }
}

#[test]
fn every_type_round_trips_through_kind_and_width() {
    for ty in PrimitiveType::ALL {
        assert_eq!(PrimitiveType::new(ty.kind(), ty.byte_width()).unwrap(), ty);
    }
}

#[test]
fn byte_widths() {
    let widths: Vec<(PrimitiveType, usize)> = PrimitiveType::ALL
        .iter()
        .map(|ty| (*ty, ty.byte_width()))
        .collect();
    assert_eq!(
        widths,
        [
            (PrimitiveType::Bool, 1),
            (PrimitiveType::I8, 1),
            (PrimitiveType::I16, 2),
            (PrimitiveType::I32, 4),
            (PrimitiveType::I64, 8),
            (PrimitiveType::U8, 1),
            (PrimitiveType::U16, 2),
            (PrimitiveType::U32, 4),
            (PrimitiveType::U64, 8),
            (PrimitiveType::F32, 4),
            (PrimitiveType::F64, 8),
        ]
    );
}

#[test]
fn wide_integer_aliases() {
    assert_eq!(PrimitiveType::from_tag("u53").unwrap(), PrimitiveType::U64);
    assert_eq!(PrimitiveType::from_tag("i54").unwrap(), PrimitiveType::I64);
    assert_eq!(PrimitiveType::from_tag("float32").unwrap(), PrimitiveType::F32);
    assert_eq!(PrimitiveType::from_tag("float64").unwrap(), PrimitiveType::F64);
}

#[test]
fn unsupported_tags_rejected() {
    for tag in ["smi", "bitflag", "string", "f16", "", "I32"] {
        let err = PrimitiveType::from_tag(tag).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedType {
                tag: tag.to_string()
            },
            "tag {:?}",
            tag
        );
    }
}

#[test]
fn invalid_kind_width_pairs_rejected() {
    assert!(PrimitiveType::new(PrimitiveKind::Float, 2).is_err());
    assert!(PrimitiveType::new(PrimitiveKind::Bool, 4).is_err());
    assert!(PrimitiveType::new(PrimitiveKind::Signed, 3).is_err());
    assert!(PrimitiveType::new(PrimitiveKind::Unsigned, 16).is_err());
}

#[test]
fn serde_uses_tags() {
    let json = serde_json::to_string(&PrimitiveType::U16).unwrap();
    assert_eq!(json, "\"u16\"");
    let parsed: PrimitiveType = serde_json::from_str("\"f64\"").unwrap();
    assert_eq!(parsed, PrimitiveType::F64);
    assert!(serde_json::from_str::<PrimitiveType>("\"smi\"").is_err());
}
