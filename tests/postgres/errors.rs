//! Error paths: programmer errors versus data errors

use pgarray::postgres::prelude::*;

#[derive(Debug, Default, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_non_reference_target_is_rejected() {
    let values = vec![1i32, 2];
    let mut array = ArrayValue::new(&values);
    let err = array.scan("{3,4}").unwrap_err();

    assert_eq!(
        err,
        PgArrayError::NonReference {
            type_name: std::any::type_name::<Vec<i32>>().into()
        }
    );
    assert!(err.to_string().contains("Vec<i32>"));
    assert!(!err.is_data_error());
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_missing_closing_delimiter_keeps_destination() {
    let mut values = vec![5i64];
    let err = ArrayValue::new_mut(&mut values).scan("{1,2").unwrap_err();

    assert!(matches!(err, PgArrayError::Parse { position: 4, .. }), "{err:?}");
    assert!(err.is_data_error());
    assert_eq!(values, vec![5]);
}

#[test]
fn test_malformed_literals() {
    let cases = [
        ("", "empty input"),
        ("1,2}", "expected opening delimiter"),
        (r#"{"abc}"#, "unterminated quoted element"),
        ("{1,,2}", "empty unquoted element"),
        ("{1,2} x", "unexpected characters"),
        (r#"{"a"b}"#, "expected separator"),
        ("[1:2={1,2}", "dimension"),
    ];

    for (input, expected) in cases {
        let mut values: Vec<String> = Vec::new();
        let err = ArrayValue::new_mut(&mut values).scan(input).unwrap_err();
        let PgArrayError::Parse { message, .. } = &err else {
            panic!("expected parse error for {input:?}, got {err:?}");
        };
        assert!(
            message.contains(expected),
            "{input:?}: {message:?} does not mention {expected:?}"
        );
    }
}

#[test]
fn test_deep_nesting_is_parse_error() {
    let deep = format!("{}{}", "{".repeat(2000), "}".repeat(2000));
    let mut values = vec![9i32];
    let err = ArrayValue::new_mut(&mut values)
        .scan(deep.as_str())
        .unwrap_err();

    let PgArrayError::Parse { message, .. } = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(message, "array nesting exceeds maximum dimensions");
    assert_eq!(values, vec![9]);
}

#[test]
fn test_conversion_error_names_value_and_target() {
    let mut values: Vec<i32> = Vec::new();
    let err = ArrayValue::new_mut(&mut values)
        .scan("{1,two,3}")
        .unwrap_err();

    assert_eq!(
        err,
        PgArrayError::Conversion {
            value: "two".into(),
            target: "i32",
        }
    );
    assert!(values.is_empty());
}

#[test]
fn test_out_of_range_integer() {
    let mut values: Vec<u16> = Vec::new();
    let err = ArrayValue::new_mut(&mut values).scan("{65536}").unwrap_err();
    assert!(matches!(err, PgArrayError::Conversion { target: "u16", .. }));
}

#[test]
fn test_invalid_bytea_hex() {
    let mut values: Vec<Vec<u8>> = Vec::new();
    let err = ArrayValue::new_mut(&mut values)
        .scan(r#"{"\\xzz"}"#)
        .unwrap_err();
    assert!(matches!(err, PgArrayError::Conversion { target: "bytea", .. }));
}

#[test]
fn test_malformed_bytea_escape() {
    for input in [r#"{"\\9"}"#, r#"{"\\47"}"#, r#"{"\\400"}"#, r#"{"a\\"}"#] {
        let mut values: Vec<Vec<u8>> = Vec::new();
        let err = ArrayValue::new_mut(&mut values).scan(input).unwrap_err();
        assert!(
            matches!(err, PgArrayError::Conversion { target: "bytea", .. }),
            "{input:?}: {err:?}"
        );
    }
}

#[test]
fn test_bool_accepts_only_array_tokens() {
    for input in ["{yes}", "{on}", "{1}", "{n}"] {
        let mut values: Vec<bool> = Vec::new();
        let err = ArrayValue::new_mut(&mut values).scan(input).unwrap_err();
        assert!(
            matches!(err, PgArrayError::Conversion { target: "bool", .. }),
            "{input:?}: {err:?}"
        );
    }
}

#[test]
fn test_scalar_where_sub_array_expected() {
    let mut matrix: Vec<Vec<i32>> = Vec::new();
    let err = ArrayValue::new_mut(&mut matrix).scan("{1,2}").unwrap_err();
    assert!(matches!(err, PgArrayError::Conversion { .. }));

    let mut flat: Vec<i32> = Vec::new();
    let err = ArrayValue::new_mut(&mut flat).scan("{{1,2}}").unwrap_err();
    assert!(matches!(err, PgArrayError::Conversion { .. }));
}

#[test]
fn test_invalid_utf8_bytes() {
    let raw: &[u8] = b"{\xc3\x28}";
    let mut values: Vec<String> = Vec::new();
    let err = ArrayValue::new_mut(&mut values).scan(raw).unwrap_err();
    assert!(matches!(err, PgArrayError::Parse { position: 1, .. }));
}

#[test]
fn test_unsupported_type_constructs_but_cannot_scan() {
    let mut points = vec![Point::default()];
    let mut array = ArrayValue::new_mut(&mut points);
    assert!(!array.is_supported());
    assert_eq!(array.element_kind(), None);

    let err = array.scan("{}").unwrap_err();
    assert!(matches!(err, PgArrayError::Unsupported { .. }));
    assert!(err.to_string().starts_with("pg: Array(unsupported"));
}

#[test]
fn test_unsupported_wins_over_non_reference() {
    let points = vec![Point::default()];
    let err = ArrayValue::new(&points).scan("{}").unwrap_err();
    assert!(matches!(err, PgArrayError::Unsupported { .. }));
}

#[test]
#[should_panic(expected = "pg: Array(unsupported")]
fn test_unsupported_type_panics_on_encode() {
    let points = vec![Point { x: 1, y: 2 }];
    let array = ArrayValue::new(&points);
    let mut sql = String::new();
    array.append_query(&PostgresFormatter::default(), &mut sql);
}

#[test]
#[should_panic(expected = "pg: Array(nil)")]
fn test_nil_value_panics_on_construction() {
    let _ = ArrayValue::from_dyn_mut(None);
}
