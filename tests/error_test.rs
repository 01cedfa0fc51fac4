//! Tests for error types

use recordbook::{Error, ErrorKind};

#[test]
fn test_too_many_arguments_error() {
    let error = Error::TooManyArguments {
        shape: "PhoneEntry".to_string(),
        given: 3,
        max: 2,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("too many positional arguments"));
    assert!(error_str.contains("3 given"));
    assert!(error_str.contains("2 accepted"));
}

#[test]
fn test_unexpected_attributes_error() {
    let error = Error::UnexpectedAttributes {
        shape: "PhoneEntry".to_string(),
        names: vec!["email".to_string(), "age".to_string()],
    };
    assert_eq!(
        format!("{error}"),
        "PhoneEntry's constructor received unexpected argument(s): email, age"
    );
}

#[test]
fn test_forbidden_attribute_set_error() {
    let error = Error::ForbiddenAttributeSet {
        shape: "PhoneEntry".to_string(),
        name: "email".to_string(),
    };
    assert_eq!(format!("{error}"), "Unable to set 'email' for record PhoneEntry");
}

#[test]
fn test_unknown_attribute_error() {
    let error = Error::UnknownAttribute {
        shape: "PhoneEntry".to_string(),
        name: "age".to_string(),
    };
    assert_eq!(format!("{error}"), "'PhoneEntry' has no attribute 'age'");
}

#[test]
fn test_index_out_of_range_error() {
    let error = Error::IndexOutOfRange { index: 2, len: 2 };
    let error_str = format!("{error}");
    assert!(error_str.contains("Index 2"));
    assert!(error_str.contains("2 entries"));
}

#[test]
fn test_shape_errors() {
    assert_eq!(
        format!("{}", Error::UnknownShape("Missing".to_string())),
        "Unknown record shape 'Missing'"
    );
    assert_eq!(
        format!("{}", Error::DuplicateShape("Entry".to_string())),
        "Record shape 'Entry' is already declared"
    );
    let redeclared = Error::RedeclaredAttribute {
        shape: "Child".to_string(),
        name: "phone".to_string(),
    };
    assert_eq!(format!("{redeclared}"), "Shape 'Child' redeclares attribute 'phone'");
}

#[test]
fn test_error_kind_mapping() {
    let cases = [
        (
            Error::MissingAttributes {
                shape: String::new(),
                names: vec![],
            },
            ErrorKind::MissingAttributes,
        ),
        (
            Error::IndexOutOfRange { index: 0, len: 0 },
            ErrorKind::IndexOutOfRange,
        ),
        (Error::UnknownShape(String::new()), ErrorKind::UnknownShape),
    ];
    for (error, kind) in cases {
        assert_eq!(error.kind(), kind);
    }
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();

    let boxed: Box<dyn std::error::Error> = Box::new(Error::UnknownShape("x".to_string()));
    assert!(boxed.source().is_none());
}
