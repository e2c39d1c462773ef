//! Dialect configuration

use pgarray::postgres::prelude::*;
use pgarray::postgres::LiteralFormatter;

fn semicolons() -> ArrayDialect {
    ArrayDialect::postgres().with_separator(';')
}

#[test]
fn test_formatter_dialect_drives_encoding() {
    let values = vec![Some(1i32), None, Some(3)];
    let mut out = String::new();
    ArrayValue::new(&values).append_query(&LiteralFormatter::new(semicolons()), &mut out);
    assert_eq!(out, "{1;NULL;3}");
}

#[test]
fn test_custom_separator_scan() {
    let mut values: Vec<String> = Vec::new();
    ArrayValue::new_mut(&mut values)
        .with_dialect(semicolons())
        .scan(r#"{a,b;"c;d"}"#)
        .unwrap();
    assert_eq!(values, vec!["a,b", "c;d"]);
}

#[test]
fn test_case_sensitive_null_token() {
    let strict = ArrayDialect::postgres().with_null_case_sensitive(true);

    let mut values: Vec<Option<String>> = Vec::new();
    ArrayValue::new_mut(&mut values)
        .with_dialect(strict)
        .scan("{NULL,null}")
        .unwrap();
    assert_eq!(values, vec![None, Some("null".to_string())]);
}

#[test]
fn test_custom_null_token() {
    let dialect = ArrayDialect::postgres().with_null_token("nil");
    let values = vec![None, Some(2u64)];

    let literal = ArrayValue::new(&values)
        .with_dialect(dialect.clone())
        .to_literal();
    assert_eq!(literal, "{nil,2}");

    let mut decoded: Vec<Option<u64>> = Vec::new();
    ArrayValue::new_mut(&mut decoded)
        .with_dialect(dialect)
        .scan(literal.as_str())
        .unwrap();
    assert_eq!(decoded, values);
}

#[cfg(feature = "serde")]
#[test]
fn test_dialect_from_json_config() {
    let dialect: ArrayDialect =
        serde_json::from_str(r#"{ "separator": ";", "null_case_sensitive": true }"#).unwrap();

    assert_eq!(dialect.open, '{');
    assert_eq!(dialect.separator, ';');
    assert_eq!(dialect.null_token, "NULL");
    assert!(dialect.null_case_sensitive);
}
