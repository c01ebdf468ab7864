//! Configuration
//!
//! Types are configured through TOML; defaults apply to every omitted key.

use crate::common::*;
use tempfile::TempDir;

#[test]
fn default_toml_documents_defaults() {
    let config = StructArrayConfig::from_toml_str(StructArrayConfig::default_toml()).unwrap();
    assert_eq!(config, StructArrayConfig::default());
    assert_eq!(config.default_capacity, structarray::DEFAULT_CAPACITY);
    assert_eq!(config.growth_floor, structarray::DEFAULT_GROWTH_FLOOR);
}

#[test]
fn partial_documents_fill_defaults() {
    let config = StructArrayConfig::from_toml_str("growth_floor = 2").unwrap();
    assert_eq!(config.growth_floor, 2);
    assert_eq!(config.default_capacity, 12);
    assert_eq!(config.packing, Packing::Declaration);
}

#[test]
fn invalid_documents_rejected() {
    for doc in ["growth_floor = 0", "packing = 3", "default_capacity = \"many\"", "[[["] {
        let err = StructArrayConfig::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{}", doc);
    }
}

#[test]
fn type_from_schema_and_config_files() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let schema_path = dir.path().join("particles.toml");
    let config_path = dir.path().join("structarray.toml");
    std::fs::write(
        &schema_path,
        r#"
[[fields]]
name = "alive"
type = "bool"

[[fields]]
name = "x"
type = "f64"

[[fields]]
name = "id"
type = "u32"
"#,
    )
    .unwrap();
    let config = StructArrayConfig::default()
        .with_default_capacity(64)
        .with_packing(Packing::SizeDescending);
    std::fs::write(&config_path, config.to_toml_string().unwrap()).unwrap();

    let ty = StructArrayType::from_files(&schema_path, Some(&config_path)).unwrap();
    assert_eq!(ty.config(), &config);
    assert_eq!(ty.record_size(), 13);
    assert_eq!(ty.layout().offset_of("x"), Some(0));
    assert_eq!(ty.layout().offset_of("id"), Some(8));
    assert_eq!(ty.layout().offset_of("alive"), Some(12));
    assert_eq!(ty.new_array().capacity(), 64);
    assert_eq!(ty.schema().len(), 3);
}

#[test]
fn bad_schema_file_reported() {
    let dir = TempDir::new().unwrap();
    let schema_path = dir.path().join("bad.toml");
    std::fs::write(&schema_path, "[[fields]]\nname = \"a\"\ntype = \"bitflag\"\n").unwrap();
    let err = StructArrayType::from_files(&schema_path, None).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedType {
            tag: "bitflag".to_string()
        }
    );

    std::fs::write(&schema_path, "[[fields]\n").unwrap();
    let err = StructArrayType::from_files(&schema_path, None).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
