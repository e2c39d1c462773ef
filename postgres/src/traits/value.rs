//! Value conversion traits for PostgreSQL types
//!
//! [`FromPostgresValue`] is the scalar conversion facility: array codecs use
//! it for element types they do not special-case.

use crate::values::{PostgresValue, decode_escape, decode_hex};
use pgarray_core::PgArrayError;

/// Trait for types that can be converted from PostgreSQL values.
///
/// # Implementation Notes
///
/// - Implement the methods that make sense for your type
/// - Return `Err` for unsupported conversions
/// - Every [`PostgresEnum`](crate::traits::PostgresEnum) gets this trait for free
pub trait FromPostgresValue: Sized {
    /// Convert from a boolean value
    fn from_postgres_bool(value: bool) -> Result<Self, PgArrayError>;

    /// Convert from a 16-bit integer value
    fn from_postgres_i16(value: i16) -> Result<Self, PgArrayError>;

    /// Convert from a 32-bit integer value
    fn from_postgres_i32(value: i32) -> Result<Self, PgArrayError>;

    /// Convert from a 64-bit integer value
    fn from_postgres_i64(value: i64) -> Result<Self, PgArrayError>;

    /// Convert from a 32-bit float value
    fn from_postgres_f32(value: f32) -> Result<Self, PgArrayError>;

    /// Convert from a 64-bit float value
    fn from_postgres_f64(value: f64) -> Result<Self, PgArrayError>;

    /// Convert from a text/string value
    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError>;

    /// Convert from a binary/bytea value
    fn from_postgres_bytes(value: &[u8]) -> Result<Self, PgArrayError>;

    /// Convert from a NULL value (default returns error)
    fn from_postgres_null() -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError(
            "unexpected NULL value".into(),
        ))
    }

    /// Convert from a UUID value
    #[cfg(feature = "uuid")]
    fn from_postgres_uuid(value: uuid::Uuid) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError(
            format!("cannot convert UUID {} to target type", value).into(),
        ))
    }

    /// Convert from an ARRAY value
    fn from_postgres_array(_value: Vec<PostgresValue<'_>>) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError(
            "cannot convert ARRAY to target type".into(),
        ))
    }

    /// Dispatch on the variant of `value`.
    fn from_postgres_value(value: PostgresValue<'_>) -> Result<Self, PgArrayError> {
        match value {
            PostgresValue::Smallint(v) => Self::from_postgres_i16(v),
            PostgresValue::Integer(v) => Self::from_postgres_i32(v),
            PostgresValue::Bigint(v) => Self::from_postgres_i64(v),
            PostgresValue::Real(v) => Self::from_postgres_f32(v),
            PostgresValue::DoublePrecision(v) => Self::from_postgres_f64(v),
            PostgresValue::Text(v) => Self::from_postgres_text(&v),
            PostgresValue::Bytea(v) => Self::from_postgres_bytes(&v),
            PostgresValue::Boolean(v) => Self::from_postgres_bool(v),
            #[cfg(feature = "uuid")]
            PostgresValue::Uuid(v) => Self::from_postgres_uuid(v),
            #[cfg(feature = "serde")]
            PostgresValue::Json(v) => Self::from_postgres_text(&v.to_string()),
            PostgresValue::Enum(v) => Self::from_postgres_text(v.variant_name()),
            PostgresValue::Array(v) => Self::from_postgres_array(v),
            PostgresValue::Null => Self::from_postgres_null(),
        }
    }
}

fn checked_float_to_int<T>(value: f64, type_name: &str) -> Result<T, PgArrayError>
where
    T: TryFrom<i128>,
    <T as TryFrom<i128>>::Error: core::fmt::Display,
{
    if !value.is_finite() {
        return Err(PgArrayError::ConversionError(
            format!("cannot convert non-finite float {} to {}", value, type_name).into(),
        ));
    }

    if value.fract() != 0.0 {
        return Err(PgArrayError::ConversionError(
            format!("cannot convert non-integer float {} to {}", value, type_name).into(),
        ));
    }

    if value < i128::MIN as f64 || value > i128::MAX as f64 {
        return Err(PgArrayError::ConversionError(
            format!("float {} out of range for {}", value, type_name).into(),
        ));
    }

    let int_value = value as i128;
    int_value.try_into().map_err(|e| {
        PgArrayError::ConversionError(
            format!("float {} out of range for {}: {}", value, type_name, e).into(),
        )
    })
}

// =============================================================================
// Primitive implementations
// =============================================================================

impl FromPostgresValue for bool {
    fn from_postgres_bool(value: bool) -> Result<Self, PgArrayError> {
        Ok(value)
    }

    fn from_postgres_i16(value: i16) -> Result<Self, PgArrayError> {
        Ok(value != 0)
    }

    fn from_postgres_i32(value: i32) -> Result<Self, PgArrayError> {
        Ok(value != 0)
    }

    fn from_postgres_i64(value: i64) -> Result<Self, PgArrayError> {
        Ok(value != 0)
    }

    fn from_postgres_f32(_value: f32) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError("cannot convert f32 to bool".into()))
    }

    fn from_postgres_f64(_value: f64) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError("cannot convert f64 to bool".into()))
    }

    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" | "y" | "on" => Ok(true),
            "false" | "f" | "0" | "no" | "n" | "off" => Ok(false),
            _ => Err(PgArrayError::ConversionError(
                format!("cannot parse '{}' as bool", value).into(),
            )),
        }
    }

    fn from_postgres_bytes(_value: &[u8]) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError("cannot convert bytes to bool".into()))
    }
}

/// Macro to implement FromPostgresValue for integer types
macro_rules! impl_from_postgres_value_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromPostgresValue for $ty {
                fn from_postgres_bool(value: bool) -> Result<Self, PgArrayError> {
                    Ok(if value { 1 } else { 0 })
                }

                fn from_postgres_i16(value: i16) -> Result<Self, PgArrayError> {
                    value.try_into().map_err(|e| {
                        PgArrayError::ConversionError(
                            format!("i16 {} out of range for {}: {}", value, stringify!($ty), e).into(),
                        )
                    })
                }

                fn from_postgres_i32(value: i32) -> Result<Self, PgArrayError> {
                    value.try_into().map_err(|e| {
                        PgArrayError::ConversionError(
                            format!("i32 {} out of range for {}: {}", value, stringify!($ty), e).into(),
                        )
                    })
                }

                fn from_postgres_i64(value: i64) -> Result<Self, PgArrayError> {
                    value.try_into().map_err(|e| {
                        PgArrayError::ConversionError(
                            format!("i64 {} out of range for {}: {}", value, stringify!($ty), e).into(),
                        )
                    })
                }

                fn from_postgres_f32(value: f32) -> Result<Self, PgArrayError> {
                    checked_float_to_int(value as f64, stringify!($ty))
                }

                fn from_postgres_f64(value: f64) -> Result<Self, PgArrayError> {
                    checked_float_to_int(value, stringify!($ty))
                }

                fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
                    value.trim().parse().map_err(|e| {
                        PgArrayError::ConversionError(
                            format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e).into()
                        )
                    })
                }

                fn from_postgres_bytes(_value: &[u8]) -> Result<Self, PgArrayError> {
                    Err(PgArrayError::ConversionError(
                        concat!("cannot convert bytes to ", stringify!($ty)).into()
                    ))
                }
            }
        )+
    };
}

impl_from_postgres_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Macro to implement FromPostgresValue for float types
macro_rules! impl_from_postgres_value_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromPostgresValue for $ty {
                fn from_postgres_bool(value: bool) -> Result<Self, PgArrayError> {
                    Ok(if value { 1.0 } else { 0.0 })
                }

                fn from_postgres_i16(value: i16) -> Result<Self, PgArrayError> {
                    Ok(value as $ty)
                }

                fn from_postgres_i32(value: i32) -> Result<Self, PgArrayError> {
                    Ok(value as $ty)
                }

                fn from_postgres_i64(value: i64) -> Result<Self, PgArrayError> {
                    Ok(value as $ty)
                }

                fn from_postgres_f32(value: f32) -> Result<Self, PgArrayError> {
                    Ok(value as $ty)
                }

                fn from_postgres_f64(value: f64) -> Result<Self, PgArrayError> {
                    Ok(value as $ty)
                }

                fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
                    value.trim().parse().map_err(|e| {
                        PgArrayError::ConversionError(
                            format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e).into()
                        )
                    })
                }

                fn from_postgres_bytes(_value: &[u8]) -> Result<Self, PgArrayError> {
                    Err(PgArrayError::ConversionError(
                        concat!("cannot convert bytes to ", stringify!($ty)).into()
                    ))
                }
            }
        )+
    };
}

impl_from_postgres_value_float!(f32, f64);

/// Implements the numeric constructors as errors for non-numeric targets.
macro_rules! impl_from_postgres_value_errors {
    ($target:literal) => {
        fn from_postgres_bool(_value: bool) -> Result<Self, PgArrayError> {
            Err(PgArrayError::ConversionError(
                concat!("cannot convert bool to ", $target).into(),
            ))
        }

        fn from_postgres_i16(_value: i16) -> Result<Self, PgArrayError> {
            Err(PgArrayError::ConversionError(
                concat!("cannot convert i16 to ", $target).into(),
            ))
        }

        fn from_postgres_i32(_value: i32) -> Result<Self, PgArrayError> {
            Err(PgArrayError::ConversionError(
                concat!("cannot convert i32 to ", $target).into(),
            ))
        }

        fn from_postgres_i64(_value: i64) -> Result<Self, PgArrayError> {
            Err(PgArrayError::ConversionError(
                concat!("cannot convert i64 to ", $target).into(),
            ))
        }

        fn from_postgres_f32(_value: f32) -> Result<Self, PgArrayError> {
            Err(PgArrayError::ConversionError(
                concat!("cannot convert f32 to ", $target).into(),
            ))
        }

        fn from_postgres_f64(_value: f64) -> Result<Self, PgArrayError> {
            Err(PgArrayError::ConversionError(
                concat!("cannot convert f64 to ", $target).into(),
            ))
        }
    };
}

impl FromPostgresValue for String {
    fn from_postgres_bool(value: bool) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_i16(value: i16) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_i32(value: i32) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_i64(value: i64) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_f32(value: f32) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_f64(value: f64) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }

    fn from_postgres_bytes(value: &[u8]) -> Result<Self, PgArrayError> {
        String::from_utf8(value.to_vec()).map_err(|e| {
            PgArrayError::ConversionError(format!("invalid UTF-8: {}", e).into())
        })
    }

    #[cfg(feature = "uuid")]
    fn from_postgres_uuid(value: uuid::Uuid) -> Result<Self, PgArrayError> {
        Ok(value.to_string())
    }
}

impl FromPostgresValue for Vec<u8> {
    impl_from_postgres_value_errors!("Vec<u8>");

    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
        match value.strip_prefix("\\x") {
            Some(hex) => decode_hex(hex),
            None => decode_escape(value),
        }
    }

    fn from_postgres_bytes(value: &[u8]) -> Result<Self, PgArrayError> {
        Ok(value.to_vec())
    }
}

// Option<T> implementation - handles NULL values
impl<T: FromPostgresValue> FromPostgresValue for Option<T> {
    fn from_postgres_bool(value: bool) -> Result<Self, PgArrayError> {
        T::from_postgres_bool(value).map(Some)
    }

    fn from_postgres_i16(value: i16) -> Result<Self, PgArrayError> {
        T::from_postgres_i16(value).map(Some)
    }

    fn from_postgres_i32(value: i32) -> Result<Self, PgArrayError> {
        T::from_postgres_i32(value).map(Some)
    }

    fn from_postgres_i64(value: i64) -> Result<Self, PgArrayError> {
        T::from_postgres_i64(value).map(Some)
    }

    fn from_postgres_f32(value: f32) -> Result<Self, PgArrayError> {
        T::from_postgres_f32(value).map(Some)
    }

    fn from_postgres_f64(value: f64) -> Result<Self, PgArrayError> {
        T::from_postgres_f64(value).map(Some)
    }

    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
        T::from_postgres_text(value).map(Some)
    }

    fn from_postgres_bytes(value: &[u8]) -> Result<Self, PgArrayError> {
        T::from_postgres_bytes(value).map(Some)
    }

    fn from_postgres_null() -> Result<Self, PgArrayError> {
        Ok(None)
    }

    #[cfg(feature = "uuid")]
    fn from_postgres_uuid(value: uuid::Uuid) -> Result<Self, PgArrayError> {
        T::from_postgres_uuid(value).map(Some)
    }

    fn from_postgres_array(value: Vec<PostgresValue<'_>>) -> Result<Self, PgArrayError> {
        T::from_postgres_array(value).map(Some)
    }
}

#[cfg(feature = "uuid")]
impl FromPostgresValue for uuid::Uuid {
    impl_from_postgres_value_errors!("UUID");

    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
        uuid::Uuid::parse_str(value).map_err(|e| {
            PgArrayError::ConversionError(format!("invalid UUID '{}': {}", value, e).into())
        })
    }

    fn from_postgres_bytes(value: &[u8]) -> Result<Self, PgArrayError> {
        uuid::Uuid::from_slice(value).map_err(|e| {
            PgArrayError::ConversionError(format!("invalid UUID bytes: {}", e).into())
        })
    }

    fn from_postgres_uuid(value: uuid::Uuid) -> Result<Self, PgArrayError> {
        Ok(value)
    }
}

// =============================================================================
// PostgresEnum support
// =============================================================================

impl<T> FromPostgresValue for T
where
    T: super::PostgresEnum,
{
    impl_from_postgres_value_errors!("PostgresEnum");

    fn from_postgres_text(value: &str) -> Result<Self, PgArrayError> {
        T::try_from_str(value)
    }

    fn from_postgres_bytes(value: &[u8]) -> Result<Self, PgArrayError> {
        let s = std::str::from_utf8(value).map_err(|e| {
            PgArrayError::ConversionError(format!("invalid UTF-8 for enum: {}", e).into())
        })?;
        T::try_from_str(s)
    }
}

// =============================================================================
// ARRAY support
// =============================================================================

impl<'a> FromPostgresValue for Vec<PostgresValue<'a>> {
    impl_from_postgres_value_errors!("ARRAY");

    fn from_postgres_text(_value: &str) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError(
            "cannot convert TEXT to ARRAY".into(),
        ))
    }

    fn from_postgres_bytes(_value: &[u8]) -> Result<Self, PgArrayError> {
        Err(PgArrayError::ConversionError(
            "cannot convert BYTEA to ARRAY".into(),
        ))
    }

    fn from_postgres_array(value: Vec<PostgresValue<'_>>) -> Result<Self, PgArrayError> {
        Ok(value
            .into_iter()
            .map(|v| -> PostgresValue<'a> { v.into_owned() })
            .collect())
    }
}
