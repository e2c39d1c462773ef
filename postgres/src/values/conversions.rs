//! From<T> implementations for PostgresValue

use std::{borrow::Cow, rc::Rc, sync::Arc};

use super::PostgresValue;
use crate::traits::PostgresEnum;

#[cfg(feature = "uuid")]
use uuid::Uuid;

//------------------------------------------------------------------------------
// Numeric types
//------------------------------------------------------------------------------

/// Implements `From<T>` and `From<&T>` for copyable scalars.
///
/// PostgreSQL has no unsigned or 8-bit integers, so those widen to the next
/// signed type that can hold them (`u64`/`usize` may wrap into BIGINT).
macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident as $target:ty),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for PostgresValue<'a> {
                fn from(value: $ty) -> Self {
                    PostgresValue::$variant(value as $target)
                }
            }

            impl<'a> From<&'a $ty> for PostgresValue<'a> {
                fn from(value: &'a $ty) -> Self {
                    PostgresValue::$variant(*value as $target)
                }
            }
        )+
    };
}

impl_from_scalar!(
    i8 => Smallint as i16,
    i16 => Smallint as i16,
    i32 => Integer as i32,
    i64 => Bigint as i64,
    isize => Bigint as i64,
    u8 => Smallint as i16,
    u16 => Integer as i32,
    u32 => Bigint as i64,
    u64 => Bigint as i64,
    usize => Bigint as i64,
    f32 => Real as f32,
    f64 => DoublePrecision as f64,
);

impl<'a> From<bool> for PostgresValue<'a> {
    fn from(value: bool) -> Self {
        PostgresValue::Boolean(value)
    }
}

impl<'a> From<&'a bool> for PostgresValue<'a> {
    fn from(value: &'a bool) -> Self {
        PostgresValue::Boolean(*value)
    }
}

//------------------------------------------------------------------------------
// Text types
//------------------------------------------------------------------------------

impl<'a> From<&'a str> for PostgresValue<'a> {
    fn from(value: &'a str) -> Self {
        PostgresValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<Cow<'a, str>> for PostgresValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        PostgresValue::Text(value)
    }
}

impl<'a> From<String> for PostgresValue<'a> {
    fn from(value: String) -> Self {
        PostgresValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a String> for PostgresValue<'a> {
    fn from(value: &'a String) -> Self {
        PostgresValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<Box<str>> for PostgresValue<'a> {
    fn from(value: Box<str>) -> Self {
        PostgresValue::Text(Cow::Owned(value.into_string()))
    }
}

impl<'a> From<Rc<str>> for PostgresValue<'a> {
    fn from(value: Rc<str>) -> Self {
        PostgresValue::Text(Cow::Owned(value.to_string()))
    }
}

impl<'a> From<Arc<str>> for PostgresValue<'a> {
    fn from(value: Arc<str>) -> Self {
        PostgresValue::Text(Cow::Owned(value.to_string()))
    }
}

//------------------------------------------------------------------------------
// Binary types
//------------------------------------------------------------------------------

impl<'a> From<&'a [u8]> for PostgresValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        PostgresValue::Bytea(Cow::Borrowed(value))
    }
}

impl<'a> From<Cow<'a, [u8]>> for PostgresValue<'a> {
    fn from(value: Cow<'a, [u8]>) -> Self {
        PostgresValue::Bytea(value)
    }
}

impl<'a> From<Vec<u8>> for PostgresValue<'a> {
    fn from(value: Vec<u8>) -> Self {
        PostgresValue::Bytea(Cow::Owned(value))
    }
}

impl<'a> From<&'a Vec<u8>> for PostgresValue<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        PostgresValue::Bytea(Cow::Borrowed(value.as_slice()))
    }
}

//------------------------------------------------------------------------------
// UUID
//------------------------------------------------------------------------------

#[cfg(feature = "uuid")]
impl<'a> From<Uuid> for PostgresValue<'a> {
    fn from(value: Uuid) -> Self {
        PostgresValue::Uuid(value)
    }
}

#[cfg(feature = "uuid")]
impl<'a> From<&'a Uuid> for PostgresValue<'a> {
    fn from(value: &'a Uuid) -> Self {
        PostgresValue::Uuid(*value)
    }
}

//------------------------------------------------------------------------------
// JSON
//------------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl<'a> From<serde_json::Value> for PostgresValue<'a> {
    fn from(value: serde_json::Value) -> Self {
        PostgresValue::Json(value)
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for PostgresValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        PostgresValue::Json(value.clone())
    }
}

//------------------------------------------------------------------------------
// Enums
//------------------------------------------------------------------------------

impl<'a, T: PostgresEnum> From<&'a T> for PostgresValue<'a> {
    fn from(value: &'a T) -> Self {
        PostgresValue::Enum(value.into_boxed())
    }
}

//------------------------------------------------------------------------------
// Option and arrays
//------------------------------------------------------------------------------

impl<'a, T> From<Option<T>> for PostgresValue<'a>
where
    T: Into<PostgresValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(PostgresValue::Null, Into::into)
    }
}

impl<'a> From<Vec<PostgresValue<'a>>> for PostgresValue<'a> {
    fn from(value: Vec<PostgresValue<'a>>) -> Self {
        PostgresValue::Array(value)
    }
}

impl<'a> From<&'a [PostgresValue<'a>]> for PostgresValue<'a> {
    fn from(value: &'a [PostgresValue<'a>]) -> Self {
        PostgresValue::Array(value.to_vec())
    }
}
