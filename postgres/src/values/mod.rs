//! PostgreSQL scalar values
//!
//! [`PostgresValue`] is the value representation the array codecs fall back to
//! for element types that have no specialized codec.

mod conversions;

use std::borrow::Cow;

#[cfg(feature = "uuid")]
use uuid::Uuid;

use pgarray_core::PgArrayError;

use crate::traits::PostgresEnum;

//------------------------------------------------------------------------------
// PostgresValue Definition
//------------------------------------------------------------------------------

/// Represents a PostgreSQL value.
///
/// # Examples
///
/// ```
/// use pgarray_postgres::values::PostgresValue;
///
/// let int_val: PostgresValue<'_> = 42i32.into();
/// assert!(matches!(int_val, PostgresValue::Integer(42)));
///
/// let str_val: PostgresValue<'_> = "hello".into();
/// assert!(matches!(str_val, PostgresValue::Text(_)));
///
/// let missing: PostgresValue<'_> = None::<i64>.into();
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostgresValue<'a> {
    /// SMALLINT values (16-bit signed integer)
    Smallint(i16),
    /// INTEGER values (32-bit signed integer)
    Integer(i32),
    /// BIGINT values (64-bit signed integer)
    Bigint(i64),
    /// REAL values (32-bit floating point)
    Real(f32),
    /// DOUBLE PRECISION values (64-bit floating point)
    DoublePrecision(f64),
    /// TEXT, VARCHAR, CHAR values
    Text(Cow<'a, str>),
    /// BYTEA values (binary data)
    Bytea(Cow<'a, [u8]>),
    /// BOOLEAN values
    Boolean(bool),
    /// UUID values
    #[cfg(feature = "uuid")]
    Uuid(Uuid),
    /// JSON values
    #[cfg(feature = "serde")]
    Json(serde_json::Value),
    /// Native PostgreSQL ENUM values
    Enum(Box<dyn PostgresEnum>),
    /// Array of any PostgreSQL type
    Array(Vec<PostgresValue<'a>>),
    /// NULL value
    #[default]
    Null,
}

impl<'a> PostgresValue<'a> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, PostgresValue::Null)
    }

    /// Returns `true` when the value's text form must be quoted inside an
    /// array literal.
    pub fn needs_quoting(&self) -> bool {
        match self {
            PostgresValue::Text(_) | PostgresValue::Bytea(_) | PostgresValue::Enum(_) => true,
            #[cfg(feature = "serde")]
            PostgresValue::Json(_) => true,
            _ => false,
        }
    }

    /// Converts borrowed data into an owned `'static` value.
    pub fn into_owned(self) -> PostgresValue<'static> {
        match self {
            PostgresValue::Smallint(v) => PostgresValue::Smallint(v),
            PostgresValue::Integer(v) => PostgresValue::Integer(v),
            PostgresValue::Bigint(v) => PostgresValue::Bigint(v),
            PostgresValue::Real(v) => PostgresValue::Real(v),
            PostgresValue::DoublePrecision(v) => PostgresValue::DoublePrecision(v),
            PostgresValue::Text(cow) => PostgresValue::Text(Cow::Owned(cow.into_owned())),
            PostgresValue::Bytea(cow) => PostgresValue::Bytea(Cow::Owned(cow.into_owned())),
            PostgresValue::Boolean(v) => PostgresValue::Boolean(v),
            #[cfg(feature = "uuid")]
            PostgresValue::Uuid(v) => PostgresValue::Uuid(v),
            #[cfg(feature = "serde")]
            PostgresValue::Json(v) => PostgresValue::Json(v),
            PostgresValue::Enum(v) => PostgresValue::Enum(v),
            PostgresValue::Array(values) => {
                PostgresValue::Array(values.into_iter().map(PostgresValue::into_owned).collect())
            }
            PostgresValue::Null => PostgresValue::Null,
        }
    }
}

/// Writes a float the way PostgreSQL spells it.
pub(crate) fn write_float(f: &mut impl std::fmt::Write, value: f64) -> std::fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{value}")
    }
}

/// Decodes the hex digits of a bytea `\x...` text form.
pub(crate) fn decode_hex(hex: &str) -> Result<Vec<u8>, PgArrayError> {
    fn nibble(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }

    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(PgArrayError::ConversionError(
            format!("odd number of hex digits in bytea value '\\x{}'", hex).into(),
        ));
    }

    digits
        .chunks_exact(2)
        .map(|pair| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(PgArrayError::ConversionError(
                format!("invalid hex digit in bytea value '\\x{}'", hex).into(),
            )),
        })
        .collect()
}

/// Decodes the bytea escape text form: `\\` is a backslash, `\ooo` is an
/// octal byte, anything else is taken verbatim.
pub(crate) fn decode_escape(text: &str) -> Result<Vec<u8>, PgArrayError> {
    let invalid = || {
        PgArrayError::ConversionError(format!("invalid escape in bytea value '{}'", text).into())
    };

    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'\\') {
            out.push(b'\\');
            i += 2;
            continue;
        }
        match bytes.get(i + 1..i + 4) {
            Some(&[a @ b'0'..=b'3', b @ b'0'..=b'7', c @ b'0'..=b'7']) => {
                out.push((a - b'0') << 6 | (b - b'0') << 3 | (c - b'0'));
                i += 4;
            }
            _ => return Err(invalid()),
        }
    }
    Ok(out)
}

impl<'a> std::fmt::Display for PostgresValue<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostgresValue::Smallint(i) => write!(f, "{i}"),
            PostgresValue::Integer(i) => write!(f, "{i}"),
            PostgresValue::Bigint(i) => write!(f, "{i}"),
            PostgresValue::Real(r) => {
                if r.is_finite() {
                    write!(f, "{r}")
                } else {
                    write_float(f, *r as f64)
                }
            }
            PostgresValue::DoublePrecision(r) => write_float(f, *r),
            PostgresValue::Text(cow) => f.write_str(cow),
            PostgresValue::Bytea(cow) => {
                f.write_str("\\x")?;
                cow.iter().try_for_each(|b| write!(f, "{b:02x}"))
            }
            PostgresValue::Boolean(b) => write!(f, "{b}"),
            #[cfg(feature = "uuid")]
            PostgresValue::Uuid(uuid) => write!(f, "{uuid}"),
            #[cfg(feature = "serde")]
            PostgresValue::Json(json) => write!(f, "{json}"),
            PostgresValue::Enum(enum_val) => f.write_str(enum_val.variant_name()),
            PostgresValue::Array(arr) => {
                f.write_str("{")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if v.is_null() {
                        f.write_str("NULL")?;
                    } else {
                        write!(f, "{v}")?;
                    }
                }
                f.write_str("}")
            }
            PostgresValue::Null => Ok(()),
        }
    }
}
