//! ArrayValue encode/scan tests

use pgarray::postgres::prelude::*;
use pgarray::postgres::{ElementKind, LiteralFormatter};

use crate::common::round_trip;

#[test]
fn test_empty_sequence_encodes_to_braces() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(ArrayValue::new(&empty).to_literal(), "{}");

    let mut decoded = vec![1, 2, 3];
    ArrayValue::new_mut(&mut decoded).scan("{}").unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_append_query_wraps_literal_in_string_constant() {
    let tags = vec!["rust".to_string(), "it's".to_string()];
    let mut sql = String::from("INSERT INTO posts (tags) VALUES (");
    ArrayValue::new(&tags).append_query(&PostgresFormatter::default(), &mut sql);
    sql.push(')');

    assert_eq!(
        sql,
        r#"INSERT INTO posts (tags) VALUES ('{"rust","it''s"}')"#
    );
}

#[test]
fn test_literal_formatter_appends_bare_literal() {
    let ids = vec![1i64, 2, 3];
    let mut param = String::new();
    ArrayValue::new(&ids).append_query(&LiteralFormatter::default(), &mut param);
    assert_eq!(param, "{1,2,3}");
}

#[test]
fn test_quoted_separator_stays_in_element() {
    let mut words: Vec<String> = Vec::new();
    ArrayValue::new_mut(&mut words)
        .scan(r#"{"a,b","c"}"#)
        .unwrap();
    assert_eq!(words, vec!["a,b", "c"]);
}

#[test]
fn test_null_maps_to_zero_value() {
    let mut ints: Vec<i64> = Vec::new();
    ArrayValue::new_mut(&mut ints).scan("{1,NULL,3}").unwrap();
    assert_eq!(ints, vec![1, 0, 3]);

    let mut optional: Vec<Option<i64>> = Vec::new();
    ArrayValue::new_mut(&mut optional)
        .scan("{1,NULL,3}")
        .unwrap();
    assert_eq!(optional, vec![Some(1), None, Some(3)]);
}

#[test]
fn test_null_token_is_case_insensitive_by_default() {
    let mut optional: Vec<Option<String>> = Vec::new();
    ArrayValue::new_mut(&mut optional)
        .scan(r#"{null,Null,"NULL"}"#)
        .unwrap();
    assert_eq!(optional, vec![None, None, Some("NULL".to_string())]);
}

#[test]
fn test_scan_replaces_previous_contents() {
    let mut values = vec![9u32, 9, 9, 9, 9];
    ArrayValue::new_mut(&mut values).scan("{1,2}").unwrap();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_sql_null_column_clears_destination() {
    let mut values = vec![true, false];
    ArrayValue::new_mut(&mut values)
        .scan(ScanSource::Null)
        .unwrap();
    assert!(values.is_empty());
}

#[test]
fn test_scan_from_bytes() {
    let raw: &[u8] = b"{t,f,true}";
    let mut flags: Vec<bool> = Vec::new();
    ArrayValue::new_mut(&mut flags).scan(raw).unwrap();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn test_order_and_length_preserved() {
    let values: Vec<i32> = (-50..50).rev().collect();
    let (_, decoded) = round_trip(&values);
    assert_eq!(decoded, values);
}

#[test]
fn test_two_dimensional_round_trip() {
    let matrix = vec![vec![1i16, 2], vec![3, 4]];
    let (literal, decoded) = round_trip(&matrix);
    assert_eq!(literal, "{{1,2},{3,4}}");
    assert_eq!(decoded, matrix);

    let names = vec![vec![Some("a b".to_string()), None], vec![]];
    let (literal, decoded) = round_trip(&names);
    assert_eq!(literal, r#"{{"a b",NULL},{}}"#);
    assert_eq!(decoded, names);
}

#[test]
fn test_dimension_decoration_is_skipped() {
    let mut values: Vec<i32> = Vec::new();
    ArrayValue::new_mut(&mut values)
        .scan("[0:2]={7,8,9}")
        .unwrap();
    assert_eq!(values, vec![7, 8, 9]);
}

#[test]
fn test_whitespace_around_elements() {
    let mut values: Vec<String> = Vec::new();
    ArrayValue::new_mut(&mut values)
        .scan(r#"{ a b , "c" ,d}"#)
        .unwrap();
    assert_eq!(values, vec!["a b", "c", "d"]);
}

#[test]
fn test_resolution_metadata() {
    let ints = vec![1i32];
    let array = ArrayValue::new(&ints);
    assert!(array.is_supported());
    assert_eq!(array.type_name(), std::any::type_name::<Vec<i32>>());
    assert_eq!(array.element_kind(), Some(ElementKind::Int32));
    assert_eq!(array.dimensions(), Some(1));
    assert_eq!(ElementKind::Int32.sql_type(), Some("integer[]"));
    assert!(array.value().downcast_ref::<Vec<i32>>().is_some());

    let matrix: Vec<Vec<Option<f64>>> = vec![];
    let array = ArrayValue::new(&matrix);
    assert_eq!(array.element_kind(), Some(ElementKind::Float64));
    assert_eq!(array.dimensions(), Some(2));
}

#[test]
fn test_shorthand_constructors() {
    let source = vec![1.5f32, -2.25];
    let literal = array(&source).to_literal();
    assert_eq!(literal, "{1.5,-2.25}");

    let mut target: Vec<f32> = Vec::new();
    array_mut(&mut target).scan(literal.as_str()).unwrap();
    assert_eq!(target, source);
}

#[test]
fn test_matrix_rows_are_encoded_as_given() {
    let square = vec![vec![1i32, 2], vec![3, 4]];
    assert_eq!(ArrayValue::new(&square).to_literal(), "{{1,2},{3,4}}");

    // not rectangular, so PostgreSQL rejects these literals
    let ragged = vec![vec![1i32, 2], vec![3]];
    assert_eq!(ArrayValue::new(&ragged).to_literal(), "{{1,2},{3}}");
    let empty_row: Vec<Vec<i32>> = vec![vec![]];
    assert_eq!(ArrayValue::new(&empty_row).to_literal(), "{{}}");
}
