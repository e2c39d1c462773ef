//! PostgreSQL array support for pgarray
//!
//! This crate provides [`ArrayValue`], which renders Rust sequences as
//! PostgreSQL array literals and scans them back, together with the scalar
//! value conversions the generic element fallback relies on.

pub mod array;
pub mod traits;
pub mod values;

pub use array::{
    Array, ArrayCodec, ArrayValue, ElementCodec, ElementKind, ScanSource, array, array_mut,
    register_codec, register_element,
};
pub use pgarray_core::{
    ArrayDialect, LiteralFormatter, PgArrayError, PostgresFormatter, QueryFormatter, Result,
};
pub use traits::{FromPostgresValue, PostgresEnum};
pub use values::PostgresValue;
