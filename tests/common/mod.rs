#![cfg(feature = "postgres")]

use std::any::Any;

use pgarray::postgres::{ArrayValue, PgArrayError, PostgresEnum, register_element};

/// Native enum fixture, stands in for `CREATE TYPE mood AS ENUM (...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    SoSo,
}

impl PostgresEnum for Mood {
    fn enum_type_name(&self) -> &'static str {
        "mood"
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::SoSo => "so, so",
        }
    }

    fn into_boxed(&self) -> Box<dyn PostgresEnum> {
        Box::new(*self)
    }

    fn try_from_str(value: &str) -> Result<Self, PgArrayError> {
        match value {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "so, so" => Ok(Mood::SoSo),
            _ => Err(PgArrayError::conversion(value, "Mood")),
        }
    }
}

pub fn register_fixtures() {
    register_element::<Mood>();
}

/// Encodes `value`, scans the literal into a fresh default and returns both.
pub fn round_trip<T: Any + Default>(value: &T) -> (String, T) {
    let literal = ArrayValue::new(value).to_literal();
    let mut decoded = T::default();
    ArrayValue::new_mut(&mut decoded)
        .scan(literal.as_str())
        .unwrap_or_else(|e| panic!("scan of {literal} failed: {e}"));
    (literal, decoded)
}
