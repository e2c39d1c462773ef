//! Round trips for every built-in element kind

use pgarray::postgres::prelude::*;

use crate::common::round_trip;

#[test]
fn test_text_round_trip() {
    let values = vec![
        String::new(),
        "plain".to_string(),
        "with \"quotes\"".to_string(),
        r"back\slash".to_string(),
        "comma, and {braces}".to_string(),
        "NULL".to_string(),
        "  padded  ".to_string(),
        "ünïcödé".to_string(),
    ];
    let (literal, decoded) = round_trip(&values);
    assert!(literal.contains(r#""with \"quotes\"""#));
    assert!(literal.contains(r#""back\\slash""#));
    assert_eq!(decoded, values);
}

#[test]
fn test_text_drops_nul() {
    let values = vec!["a\0b".to_string()];
    assert_eq!(ArrayValue::new(&values).to_literal(), r#"{"ab"}"#);
}

#[test]
fn test_bytea_round_trip() {
    let values: Vec<Vec<u8>> = vec![vec![], vec![0x00, 0xff, 0x10], b"abc".to_vec()];
    let (literal, decoded) = round_trip(&values);
    assert_eq!(literal, r#"{"\\x","\\x00ff10","\\x616263"}"#);
    assert_eq!(decoded, values);
}

#[test]
fn test_bytea_escape_format_scan() {
    let mut values: Vec<Vec<u8>> = Vec::new();
    ArrayValue::new_mut(&mut values)
        .scan(r#"{"\\001abc\\\\",plain}"#)
        .unwrap();
    assert_eq!(values, vec![vec![1, 97, 98, 99, 92], b"plain".to_vec()]);
}

#[test]
fn test_signed_integer_round_trips() {
    let (literal, decoded) = round_trip(&vec![i8::MIN, 0, i8::MAX]);
    assert_eq!(literal, "{-128,0,127}");
    assert_eq!(decoded, vec![i8::MIN, 0, i8::MAX]);

    let (_, decoded) = round_trip(&vec![i16::MIN, i16::MAX]);
    assert_eq!(decoded, vec![i16::MIN, i16::MAX]);

    let (_, decoded) = round_trip(&vec![i32::MIN, -1, i32::MAX]);
    assert_eq!(decoded, vec![i32::MIN, -1, i32::MAX]);

    let (_, decoded) = round_trip(&vec![i64::MIN, i64::MAX]);
    assert_eq!(decoded, vec![i64::MIN, i64::MAX]);

    let (_, decoded) = round_trip(&vec![isize::MIN, isize::MAX]);
    assert_eq!(decoded, vec![isize::MIN, isize::MAX]);
}

#[test]
fn test_unsigned_integer_round_trips() {
    let (_, decoded) = round_trip(&vec![0u16, u16::MAX]);
    assert_eq!(decoded, vec![0, u16::MAX]);

    let (_, decoded) = round_trip(&vec![0u32, u32::MAX]);
    assert_eq!(decoded, vec![0, u32::MAX]);

    let (_, decoded) = round_trip(&vec![0u64, u64::MAX]);
    assert_eq!(decoded, vec![0, u64::MAX]);

    let (_, decoded) = round_trip(&vec![0usize, 42]);
    assert_eq!(decoded, vec![0, 42]);
}

#[test]
fn test_float_round_trips() {
    let values = vec![0.1f64, -2.5e10, f64::INFINITY, f64::NEG_INFINITY];
    let (literal, decoded) = round_trip(&values);
    assert_eq!(literal, "{0.1,-25000000000,Infinity,-Infinity}");
    assert_eq!(decoded, values);

    let values = vec![f32::MIN_POSITIVE, 3.25f32];
    let (_, decoded) = round_trip(&values);
    assert_eq!(decoded, values);
}

#[test]
fn test_float_nan_round_trip() {
    let (literal, decoded) = round_trip(&vec![f64::NAN]);
    assert_eq!(literal, "{NaN}");
    assert!(decoded[0].is_nan());
}

#[test]
fn test_bool_round_trip() {
    let (literal, decoded) = round_trip(&vec![true, false]);
    assert_eq!(literal, "{true,false}");
    assert_eq!(decoded, vec![true, false]);

    let mut flags: Vec<bool> = Vec::new();
    ArrayValue::new_mut(&mut flags).scan("{T,FALSE,f,True}").unwrap();
    assert_eq!(flags, vec![true, false, false, true]);
}

#[test]
fn test_optional_elements_round_trip() {
    let values = vec![Some(true), None, Some(false)];
    let (literal, decoded) = round_trip(&values);
    assert_eq!(literal, "{true,NULL,false}");
    assert_eq!(decoded, values);

    let values = vec![None, Some(b"\x01".to_vec())];
    let (literal, decoded) = round_trip(&values);
    assert_eq!(literal, r#"{NULL,"\\x01"}"#);
    assert_eq!(decoded, values);
}

#[test]
fn test_null_maps_to_zero_for_each_kind() {
    let mut text: Vec<String> = vec![];
    ArrayValue::new_mut(&mut text).scan("{NULL}").unwrap();
    assert_eq!(text, vec![String::new()]);

    let mut bytes: Vec<Vec<u8>> = vec![];
    ArrayValue::new_mut(&mut bytes).scan("{NULL}").unwrap();
    assert_eq!(bytes, vec![Vec::<u8>::new()]);

    let mut flags: Vec<bool> = vec![];
    ArrayValue::new_mut(&mut flags).scan("{NULL}").unwrap();
    assert_eq!(flags, vec![false]);

    let mut floats: Vec<f32> = vec![];
    ArrayValue::new_mut(&mut floats).scan("{NULL}").unwrap();
    assert_eq!(floats, vec![0.0]);
}

#[cfg(feature = "uuid")]
#[test]
fn test_uuid_round_trip() {
    use pgarray::postgres::ElementKind;
    use uuid::Uuid;

    let values = vec![Uuid::new_v4(), Uuid::nil()];
    let (literal, decoded) = round_trip(&values);
    assert!(literal.starts_with('{') && !literal.contains('"'));
    assert_eq!(decoded, values);
    assert_eq!(
        ArrayValue::new(&values).element_kind(),
        Some(ElementKind::Uuid)
    );
}
