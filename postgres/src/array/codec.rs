//! Element codecs
//!
//! An [`ElementCodec`] knows how to render one element into an array literal
//! and how to convert one parsed [`Element`] back. The sequence-level
//! appenders and scanners in this module are generic over a codec and are
//! what the registry hands out.

use std::{any::Any, fmt::Write, marker::PhantomData};

use pgarray_core::{ArrayDialect, PgArrayError};

use super::{
    ScanSource,
    literal::{self, Element},
};
use crate::{
    traits::FromPostgresValue,
    values::{PostgresValue, write_float},
};

/// Element kinds with a specialized codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Bytea,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Boolean,
    Uuid,
    /// Handled by the scalar conversion fallback
    Generic,
}

impl ElementKind {
    /// PostgreSQL array type the kind maps to, if it is known.
    pub const fn sql_type(&self) -> Option<&'static str> {
        match self {
            ElementKind::Text => Some("text[]"),
            ElementKind::Bytea => Some("bytea[]"),
            ElementKind::Int8 | ElementKind::Int16 => Some("smallint[]"),
            ElementKind::Int32 | ElementKind::UInt16 => Some("integer[]"),
            ElementKind::Int64 | ElementKind::UInt32 | ElementKind::UInt64 => Some("bigint[]"),
            ElementKind::Float32 => Some("real[]"),
            ElementKind::Float64 => Some("double precision[]"),
            ElementKind::Boolean => Some("boolean[]"),
            ElementKind::Uuid => Some("uuid[]"),
            ElementKind::Generic => None,
        }
    }
}

/// Renders and parses a single array element.
pub trait ElementCodec: 'static {
    type Item: Any;

    const KIND: ElementKind;

    /// Appends `item` in array element syntax.
    fn append(dialect: &ArrayDialect, buf: &mut String, item: &Self::Item);

    /// Converts an unescaped scalar token.
    fn scan_text(text: &str) -> Result<Self::Item, PgArrayError>;

    /// Value produced for a NULL element.
    fn scan_null() -> Result<Self::Item, PgArrayError>;
}

fn scan_element<C: ElementCodec>(element: &Element<'_>) -> Result<C::Item, PgArrayError> {
    match element {
        Element::Null => C::scan_null(),
        Element::Scalar(text) => C::scan_text(text),
        Element::Array(_) => Err(PgArrayError::conversion(
            element.describe(),
            std::any::type_name::<C::Item>(),
        )),
    }
}

//------------------------------------------------------------------------------
// Sequence appenders and scanners
//------------------------------------------------------------------------------

pub(crate) fn append_array<C: ElementCodec>(dialect: &ArrayDialect, buf: &mut String, value: &dyn Any) {
    let Some(items) = value.downcast_ref::<Vec<C::Item>>() else {
        unreachable!("array appender resolved for {}", std::any::type_name::<Vec<C::Item>>());
    };
    literal::append_delimited(dialect, buf, items, |buf, item| C::append(dialect, buf, item));
}

pub(crate) fn append_matrix<C: ElementCodec>(dialect: &ArrayDialect, buf: &mut String, value: &dyn Any) {
    let Some(rows) = value.downcast_ref::<Vec<Vec<C::Item>>>() else {
        unreachable!("array appender resolved for {}", std::any::type_name::<Vec<Vec<C::Item>>>());
    };
    literal::append_delimited(dialect, buf, rows, |buf, row| {
        literal::append_delimited(dialect, buf, row, |buf, item| C::append(dialect, buf, item));
    });
}

pub(crate) fn scan_array<C: ElementCodec>(
    dialect: &ArrayDialect,
    dest: &mut dyn Any,
    src: ScanSource<'_>,
) -> Result<(), PgArrayError> {
    let Some(dest) = dest.downcast_mut::<Vec<C::Item>>() else {
        unreachable!("array scanner resolved for {}", std::any::type_name::<Vec<C::Item>>());
    };
    let Some(text) = src.as_text()? else {
        dest.clear();
        return Ok(());
    };

    let values = literal::parse(dialect, text)?
        .iter()
        .map(scan_element::<C>)
        .collect::<Result<Vec<_>, _>>()?;
    *dest = values;
    Ok(())
}

pub(crate) fn scan_matrix<C: ElementCodec>(
    dialect: &ArrayDialect,
    dest: &mut dyn Any,
    src: ScanSource<'_>,
) -> Result<(), PgArrayError> {
    let Some(dest) = dest.downcast_mut::<Vec<Vec<C::Item>>>() else {
        unreachable!("array scanner resolved for {}", std::any::type_name::<Vec<Vec<C::Item>>>());
    };
    let Some(text) = src.as_text()? else {
        dest.clear();
        return Ok(());
    };

    let rows = literal::parse(dialect, text)?
        .iter()
        .map(|element| -> Result<Vec<C::Item>, PgArrayError> {
            match element {
                Element::Array(items) => items.iter().map(scan_element::<C>).collect(),
                Element::Null => Ok(Vec::new()),
                Element::Scalar(_) => Err(PgArrayError::conversion(
                    element.describe(),
                    std::any::type_name::<Vec<C::Item>>(),
                )),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    *dest = rows;
    Ok(())
}

//------------------------------------------------------------------------------
// Built-in codecs
//------------------------------------------------------------------------------

/// Specialized codec for a primitive element type.
pub struct Native<T>(PhantomData<fn() -> T>);

impl ElementCodec for Native<String> {
    type Item = String;

    const KIND: ElementKind = ElementKind::Text;

    fn append(_dialect: &ArrayDialect, buf: &mut String, item: &String) {
        literal::append_quoted(buf, item);
    }

    fn scan_text(text: &str) -> Result<String, PgArrayError> {
        Ok(text.to_owned())
    }

    fn scan_null() -> Result<String, PgArrayError> {
        Ok(String::new())
    }
}

impl ElementCodec for Native<Vec<u8>> {
    type Item = Vec<u8>;

    const KIND: ElementKind = ElementKind::Bytea;

    fn append(_dialect: &ArrayDialect, buf: &mut String, item: &Vec<u8>) {
        literal::append_bytea(buf, item);
    }

    fn scan_text(text: &str) -> Result<Vec<u8>, PgArrayError> {
        Vec::<u8>::from_postgres_text(text).map_err(|_| PgArrayError::conversion(text, "bytea"))
    }

    fn scan_null() -> Result<Vec<u8>, PgArrayError> {
        Ok(Vec::new())
    }
}

macro_rules! impl_integer_codec {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl ElementCodec for Native<$ty> {
                type Item = $ty;

                const KIND: ElementKind = ElementKind::$kind;

                fn append(_dialect: &ArrayDialect, buf: &mut String, item: &$ty) {
                    let _ = write!(buf, "{item}");
                }

                fn scan_text(text: &str) -> Result<$ty, PgArrayError> {
                    text.parse().map_err(|_| PgArrayError::conversion(text, stringify!($ty)))
                }

                fn scan_null() -> Result<$ty, PgArrayError> {
                    Ok(0)
                }
            }
        )+
    };
}

impl_integer_codec!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int64,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    usize => UInt64,
);

macro_rules! impl_float_codec {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl ElementCodec for Native<$ty> {
                type Item = $ty;

                const KIND: ElementKind = ElementKind::$kind;

                fn append(_dialect: &ArrayDialect, buf: &mut String, item: &$ty) {
                    if item.is_finite() {
                        let _ = write!(buf, "{item}");
                    } else {
                        let _ = write_float(buf, *item as f64);
                    }
                }

                fn scan_text(text: &str) -> Result<$ty, PgArrayError> {
                    text.parse().map_err(|_| PgArrayError::conversion(text, stringify!($ty)))
                }

                fn scan_null() -> Result<$ty, PgArrayError> {
                    Ok(0.0)
                }
            }
        )+
    };
}

impl_float_codec!(f32 => Float32, f64 => Float64);

impl ElementCodec for Native<bool> {
    type Item = bool;

    const KIND: ElementKind = ElementKind::Boolean;

    fn append(_dialect: &ArrayDialect, buf: &mut String, item: &bool) {
        buf.push_str(if *item { "true" } else { "false" });
    }

    fn scan_text(text: &str) -> Result<bool, PgArrayError> {
        if text.eq_ignore_ascii_case("t") || text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("f") || text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(PgArrayError::conversion(text, "bool"))
        }
    }

    fn scan_null() -> Result<bool, PgArrayError> {
        Ok(false)
    }
}

#[cfg(feature = "uuid")]
impl ElementCodec for Native<uuid::Uuid> {
    type Item = uuid::Uuid;

    const KIND: ElementKind = ElementKind::Uuid;

    fn append(_dialect: &ArrayDialect, buf: &mut String, item: &uuid::Uuid) {
        let _ = write!(buf, "{item}");
    }

    fn scan_text(text: &str) -> Result<uuid::Uuid, PgArrayError> {
        uuid::Uuid::parse_str(text).map_err(|_| PgArrayError::conversion(text, "uuid::Uuid"))
    }

    fn scan_null() -> Result<uuid::Uuid, PgArrayError> {
        Ok(uuid::Uuid::nil())
    }
}

/// Wraps a codec so that NULL elements map to `None`.
pub struct Nullable<C>(PhantomData<fn() -> C>);

impl<C: ElementCodec> ElementCodec for Nullable<C> {
    type Item = Option<C::Item>;

    const KIND: ElementKind = C::KIND;

    fn append(dialect: &ArrayDialect, buf: &mut String, item: &Option<C::Item>) {
        match item {
            Some(item) => C::append(dialect, buf, item),
            None => buf.push_str(&dialect.null_token),
        }
    }

    fn scan_text(text: &str) -> Result<Option<C::Item>, PgArrayError> {
        C::scan_text(text).map(Some)
    }

    fn scan_null() -> Result<Option<C::Item>, PgArrayError> {
        Ok(None)
    }
}

//------------------------------------------------------------------------------
// Scalar conversion fallback
//------------------------------------------------------------------------------

/// Codec delegating to [`PostgresValue`] and [`FromPostgresValue`].
///
/// Used for element types registered through
/// [`register_element`](super::register_element).
pub struct Fallback<E>(PhantomData<fn() -> E>);

impl<E> ElementCodec for Fallback<E>
where
    E: FromPostgresValue + Any,
    for<'x> &'x E: Into<PostgresValue<'x>>,
{
    type Item = E;

    const KIND: ElementKind = ElementKind::Generic;

    fn append(dialect: &ArrayDialect, buf: &mut String, item: &E) {
        append_value(dialect, buf, &item.into());
    }

    fn scan_text(text: &str) -> Result<E, PgArrayError> {
        E::from_postgres_text(text)
            .map_err(|_| PgArrayError::conversion(text, std::any::type_name::<E>()))
    }

    fn scan_null() -> Result<E, PgArrayError> {
        E::from_postgres_null()
            .map_err(|_| PgArrayError::conversion("NULL", std::any::type_name::<E>()))
    }
}

/// Renders a scalar [`PostgresValue`] as an array element.
pub fn append_value(dialect: &ArrayDialect, buf: &mut String, value: &PostgresValue<'_>) {
    match value {
        PostgresValue::Null => buf.push_str(&dialect.null_token),
        PostgresValue::Array(items) => {
            literal::append_delimited(dialect, buf, items, |buf, item| {
                append_value(dialect, buf, item)
            });
        }
        PostgresValue::Bytea(bytes) => literal::append_bytea(buf, bytes),
        PostgresValue::Text(text) => literal::append_quoted(buf, text),
        value if value.needs_quoting() => literal::append_quoted(buf, &value.to_string()),
        value => {
            let _ = write!(buf, "{value}");
        }
    }
}
