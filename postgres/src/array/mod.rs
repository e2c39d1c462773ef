//! PostgreSQL array values
//!
//! [`ArrayValue`] adapts an in-memory sequence to the PostgreSQL array literal
//! format and back. The appender and scanner for the sequence type are looked
//! up once, when the wrapper is built.
//!
//! ```
//! use pgarray_postgres::{ArrayValue, PostgresFormatter};
//!
//! let tags = vec!["a,b".to_string(), "c".to_string()];
//! let mut sql = String::from("SELECT ");
//! ArrayValue::new(&tags).append_query(&PostgresFormatter::default(), &mut sql);
//! assert_eq!(sql, r#"SELECT '{"a,b","c"}'"#);
//!
//! let mut ids: Vec<Option<i64>> = Vec::new();
//! ArrayValue::new_mut(&mut ids).scan("{1,NULL,3}").unwrap();
//! assert_eq!(ids, vec![Some(1), None, Some(3)]);
//! ```

pub mod codec;
pub mod literal;
mod registry;
mod source;

use std::{
    any::{Any, TypeId},
    borrow::Cow,
    fmt,
};

use pgarray_core::{
    ArrayDialect, PgArrayError, QueryFormatter, pgarray_trace_resolve, pgarray_trace_scan_error,
};

pub use codec::{ElementCodec, ElementKind};
pub use registry::{AppenderFunc, ArrayCodec, ScannerFunc, register_codec, register_element};
pub use source::ScanSource;

/// Shorthand for [`ArrayValue`].
pub type Array<'a> = ArrayValue<'a>;

enum Target<'a> {
    Shared(&'a dyn Any),
    Exclusive(&'a mut dyn Any),
}

impl Target<'_> {
    fn get(&self) -> &dyn Any {
        match self {
            Target::Shared(value) => *value,
            Target::Exclusive(value) => &**value,
        }
    }
}

/// Wraps a sequence so it can be written as, or read from, a PostgreSQL array.
///
/// Wrap a shared reference to encode and an exclusive reference to decode.
/// Sequence types without a codec can still be wrapped: encoding them panics
/// and scanning returns [`PgArrayError::Unsupported`].
///
/// Rows of a two-dimensional `Vec<Vec<E>>` are encoded as given. PostgreSQL
/// only accepts rectangular arrays, so every row must have the same non-zero
/// length or the server rejects the literal.
pub struct ArrayValue<'a> {
    target: Target<'a>,
    type_name: Cow<'static, str>,
    dialect: ArrayDialect,
    codec: Option<ArrayCodec>,
}

impl<'a> ArrayValue<'a> {
    /// Wraps a sequence for encoding.
    pub fn new<T: Any>(value: &'a T) -> Self {
        Self::resolve(
            Target::Shared(value),
            TypeId::of::<T>(),
            std::any::type_name::<T>().into(),
        )
    }

    /// Wraps a sequence for decoding (encoding works too).
    pub fn new_mut<T: Any>(value: &'a mut T) -> Self {
        Self::resolve(
            Target::Exclusive(value),
            TypeId::of::<T>(),
            std::any::type_name::<T>().into(),
        )
    }

    /// Wraps a type-erased value.
    ///
    /// # Panics
    ///
    /// Panics when `value` is `None`.
    pub fn from_dyn(value: Option<&'a dyn Any>) -> Self {
        let Some(value) = value else {
            panic!("pg: Array(nil)");
        };
        let type_id = (*value).type_id();
        Self::resolve(Target::Shared(value), type_id, erased_name(type_id))
    }

    /// Wraps a type-erased value for decoding.
    ///
    /// # Panics
    ///
    /// Panics when `value` is `None`.
    pub fn from_dyn_mut(value: Option<&'a mut dyn Any>) -> Self {
        let Some(value) = value else {
            panic!("pg: Array(nil)");
        };
        let type_id = (*value).type_id();
        Self::resolve(Target::Exclusive(value), type_id, erased_name(type_id))
    }

    fn resolve(target: Target<'a>, type_id: TypeId, type_name: Cow<'static, str>) -> Self {
        let codec = registry::lookup(type_id);
        pgarray_trace_resolve!(type_name, codec.is_some());

        // Registered types know their own name, which erased values lack.
        let type_name = match codec {
            Some(codec) => Cow::Borrowed(codec.type_name),
            None => type_name,
        };

        Self {
            target,
            type_name,
            dialect: ArrayDialect::default(),
            codec,
        }
    }

    /// Sets the dialect used by [`scan`](Self::scan) and
    /// [`to_literal`](Self::to_literal).
    pub fn with_dialect(mut self, dialect: ArrayDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Appends the array literal to `buf` as a SQL string constant.
    ///
    /// # Panics
    ///
    /// Panics when the sequence type has no codec.
    pub fn append_query(&self, fmter: &dyn QueryFormatter, buf: &mut String) {
        let literal = self.render(fmter.array_dialect());
        fmter.append_string_constant(buf, &literal);
    }

    /// Returns the bare array literal.
    ///
    /// # Panics
    ///
    /// Panics when the sequence type has no codec.
    pub fn to_literal(&self) -> String {
        self.render(&self.dialect)
    }

    fn render(&self, dialect: &ArrayDialect) -> String {
        let Some(codec) = self.codec else {
            panic!("pg: Array(unsupported {})", self.type_name);
        };
        let mut literal = String::new();
        (codec.append)(dialect, &mut literal, self.target.get());
        literal
    }

    /// Replaces the wrapped sequence with the contents of `src`.
    ///
    /// On error the destination keeps its previous contents.
    pub fn scan<'s>(&mut self, src: impl Into<ScanSource<'s>>) -> Result<(), PgArrayError> {
        let Some(codec) = self.codec else {
            return Err(PgArrayError::Unsupported {
                type_name: self.type_name.clone(),
            });
        };
        let Target::Exclusive(dest) = &mut self.target else {
            return Err(PgArrayError::NonReference {
                type_name: self.type_name.clone(),
            });
        };

        (codec.scan)(&self.dialect, &mut **dest, src.into()).map_err(|err| {
            pgarray_trace_scan_error!(self.type_name, &err);
            err
        })
    }

    /// The wrapped value.
    pub fn value(&self) -> &dyn Any {
        self.target.get()
    }

    /// Element kind of the resolved codec.
    pub fn element_kind(&self) -> Option<ElementKind> {
        self.codec.map(|codec| codec.element)
    }

    /// Number of array dimensions of the resolved codec.
    pub fn dimensions(&self) -> Option<usize> {
        self.codec.map(|codec| codec.dimensions)
    }

    /// Returns `true` if a codec was resolved for the wrapped sequence type.
    pub fn is_supported(&self) -> bool {
        self.codec.is_some()
    }

    /// Name of the wrapped sequence type, as used in error messages.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

fn erased_name(type_id: TypeId) -> Cow<'static, str> {
    Cow::Owned(format!("{type_id:?}"))
}

impl fmt::Debug for ArrayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayValue")
            .field("type", &self.type_name)
            .field("element", &self.element_kind())
            .field("mutable", &matches!(self.target, Target::Exclusive(_)))
            .finish()
    }
}

/// Wraps a sequence for encoding.
pub fn array<T: Any>(value: &T) -> ArrayValue<'_> {
    ArrayValue::new(value)
}

/// Wraps a sequence for decoding.
pub fn array_mut<T: Any>(value: &mut T) -> ArrayValue<'_> {
    ArrayValue::new_mut(value)
}
