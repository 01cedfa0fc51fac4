//! Record Schema Tests
//!
//! Schema composition across shape hierarchies and the construction
//! contract of records.

use recordbook::{Args, Error, ErrorKind, Record, RecordShape, RecordState, ShapeRegistry};
use serde_json::json;
use std::sync::Arc;

fn phone_shapes() -> (Arc<RecordShape>, Arc<RecordShape>, Arc<RecordShape>) {
    let entry = RecordShape::root("PhoneEntry", ["name", "phone"]).unwrap();
    let ext = RecordShape::extend(&entry, "PhoneEntryExt", ["email"]).unwrap();
    let ext2 = RecordShape::extend(&ext, "PhoneEntryExt2", ["age"]).unwrap();
    (entry, ext, ext2)
}

// =============================================================================
// Schema Composition
// =============================================================================

#[test]
fn test_schema_accumulates_most_general_first() {
    let (entry, ext, ext2) = phone_shapes();

    assert_eq!(entry.schema().names(), ["name", "phone"]);
    assert_eq!(ext.schema().names(), ["name", "phone", "email"]);
    assert_eq!(ext2.schema().names(), ["name", "phone", "email", "age"]);
    assert_eq!(
        ext2.ancestry(),
        vec!["PhoneEntry", "PhoneEntryExt", "PhoneEntryExt2"]
    );
}

#[test]
fn test_schema_identical_across_instances() {
    let (_, _, ext2) = phone_shapes();
    let a = Record::construct(&ext2, Args::positional([json!("a"), json!(1), json!("a@a"), json!(2)]))
        .unwrap();
    let b = Record::construct(&ext2, Args::positional([json!("b"), json!(3), json!("b@b"), json!(4)]))
        .unwrap();

    assert!(std::ptr::eq(a.schema(), b.schema()));
}

#[test]
fn test_registry_matches_direct_declaration() {
    let registry = ShapeRegistry::from_json(
        r#"[
            {"name": "PhoneEntry", "attributes": ["name", "phone"]},
            {"name": "PhoneEntryExt", "parent": "PhoneEntry", "attributes": ["email"]},
            {"name": "PhoneEntryExt2", "parent": "PhoneEntryExt", "attributes": ["age"]}
        ]"#,
    )
    .unwrap();

    let (_, _, ext2) = phone_shapes();
    assert_eq!(registry.shape("PhoneEntryExt2").unwrap().schema(), ext2.schema());
}

#[test]
fn test_registry_rejects_child_before_parent() {
    let err = ShapeRegistry::from_json(
        r#"[
            {"name": "Child", "parent": "Parent", "attributes": ["b"]},
            {"name": "Parent", "attributes": ["a"]}
        ]"#,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownShape);
}

// =============================================================================
// Construction Contract
// =============================================================================

#[test]
fn test_mixed_positional_and_keyword() {
    let (_, _, ext2) = phone_shapes();
    let record = Record::construct(
        &ext2,
        Args::new()
            .arg("ana")
            .arg(1234)
            .kwarg("age", 24)
            .kwarg("email", "ana@mail.com"),
    )
    .unwrap();

    assert_eq!(record.state(), RecordState::Locked);
    assert_eq!(record.get("email").unwrap(), "ana@mail.com");
    assert_eq!(record.get("age").unwrap(), &json!(24));
}

#[test]
fn test_duplicate_argument_scenario() {
    let (entry, _, _) = phone_shapes();
    let err = Record::construct(&entry, Args::new().arg("ana").arg(1).kwarg("phone", 2)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateArgument);
    assert!(err.to_string().contains("phone"));
}

#[test]
fn test_too_many_positional_arguments() {
    let (entry, _, _) = phone_shapes();
    let err = Record::construct(&entry, Args::positional([json!("ana"), json!(1), json!("x")]))
        .unwrap_err();
    match err {
        Error::TooManyArguments { given, max, .. } => {
            assert_eq!(given, 3);
            assert_eq!(max, 2);
        }
        other => panic!("expected TooManyArguments, got {other:?}"),
    }
}

#[test]
fn test_missing_attributes_listed() {
    let (_, _, ext2) = phone_shapes();
    let err = Record::construct(&ext2, Args::new().arg("ana").kwarg("age", 3)).unwrap_err();
    match err {
        Error::MissingAttributes { shape, names } => {
            assert_eq!(shape, "PhoneEntryExt2");
            assert_eq!(names, vec!["phone", "email"]);
        }
        other => panic!("expected MissingAttributes, got {other:?}"),
    }
}

#[test]
fn test_unexpected_attributes_listed_in_supplied_order() {
    let (entry, _, _) = phone_shapes();
    let err = Record::construct(
        &entry,
        Args::new()
            .arg("ana")
            .arg(1)
            .kwarg("zeta", 1)
            .kwarg("alpha", 2),
    )
    .unwrap_err();
    match err {
        Error::UnexpectedAttributes { names, .. } => assert_eq!(names, vec!["zeta", "alpha"]),
        other => panic!("expected UnexpectedAttributes, got {other:?}"),
    }
}

// =============================================================================
// Locked Records
// =============================================================================

#[test]
fn test_locked_record_rejects_new_names_forever() {
    let (entry, _, _) = phone_shapes();
    let mut record = Record::construct(&entry, Args::new().arg("ana").arg(1)).unwrap();

    for _ in 0..3 {
        record.set("phone", 2).unwrap();
        assert_eq!(
            record.set("email", "x").unwrap_err().kind(),
            ErrorKind::ForbiddenAttributeSet
        );
    }
    assert_eq!(record.schema().len(), 2);
    assert_eq!(record.get("phone").unwrap(), &json!(2));
}

#[test]
fn test_nested_values_are_mutable_in_place() {
    let shape = RecordShape::root("Tagged", ["name", "tags"]).unwrap();
    let mut record = Record::construct(&shape, Args::new().arg("ana").arg(json!(["a"]))).unwrap();

    record
        .get_mut("tags")
        .unwrap()
        .as_array_mut()
        .unwrap()
        .push(json!("b"));
    assert_eq!(record.get("tags").unwrap(), &json!(["a", "b"]));
}

#[test]
fn test_record_textual_forms() {
    let (_, _, ext2) = phone_shapes();
    let record = Record::construct(
        &ext2,
        Args::positional([json!("ana"), json!(1234), json!("ana@mail.com"), json!(24)]),
    )
    .unwrap();

    assert_eq!(
        record.to_string(),
        "name: ana\nphone: 1234\nemail: ana@mail.com\nage: 24"
    );
    assert_eq!(
        format!("{record:?}"),
        "PhoneEntryExt2(name=ana, phone=1234, email=ana@mail.com, age=24)"
    );
}
