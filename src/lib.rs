//! # pgarray
//!
//! Typed PostgreSQL array literals for Rust sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use pgarray::postgres::{ArrayValue, PostgresFormatter};
//!
//! # fn main() -> pgarray::Result<()> {
//! let scores = vec![Some(10i32), None, Some(30)];
//!
//! let mut sql = String::from("UPDATE games SET scores = ");
//! ArrayValue::new(&scores).append_query(&PostgresFormatter::default(), &mut sql);
//! assert_eq!(sql, "UPDATE games SET scores = '{10,NULL,30}'");
//!
//! let mut read_back: Vec<Option<i32>> = Vec::new();
//! ArrayValue::new_mut(&mut read_back).scan("{10,NULL,30}")?;
//! assert_eq!(read_back, scores);
//! # Ok(())
//! # }
//! ```
//!
//! ## Element Types
//!
//! | Rust element           | PostgreSQL array     |
//! |------------------------|----------------------|
//! | `String`               | `text[]`             |
//! | `Vec<u8>`              | `bytea[]`            |
//! | `i8`, `i16`            | `smallint[]`         |
//! | `i32`, `u16`           | `integer[]`          |
//! | `i64`, `u32`, `u64`    | `bigint[]`           |
//! | `f32` / `f64`          | `real[]` / `double precision[]` |
//! | `bool`                 | `boolean[]`          |
//! | `uuid::Uuid` (`uuid`)  | `uuid[]`             |
//!
//! Every kind is also available as `Option<E>` and as a two-dimensional
//! `Vec<Vec<E>>`. Other element types, PostgreSQL enums in particular, are
//! added with [`postgres::register_element`].

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Result type for array operations
pub use pgarray_core::error::Result;

/// Error types
pub mod error {
    pub use pgarray_core::error::PgArrayError;
}

/// Core types shared by the array codecs.
pub mod core {
    pub use pgarray_core::{ArrayDialect, LiteralFormatter, PostgresFormatter, QueryFormatter};
}

/// PostgreSQL array values and the scalar conversion facility.
#[cfg(feature = "postgres")]
pub mod postgres {
    pub use pgarray_postgres::*;

    /// Common imports for working with arrays.
    pub mod prelude {
        pub use pgarray_postgres::{
            ArrayDialect, ArrayValue, FromPostgresValue, PgArrayError, PostgresEnum,
            PostgresFormatter, PostgresValue, QueryFormatter, ScanSource, array, array_mut,
            register_element,
        };
    }
}
