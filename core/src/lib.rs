//! Core building blocks shared by the pgarray crates.
//!
//! This crate holds the pieces that are independent of a concrete value
//! representation: the error type, the array literal dialect, the query
//! formatter seam and the tracing helpers.

pub mod dialect;
pub mod error;
pub mod format;
pub mod tracing;

pub use dialect::{ArrayDialect, MAX_DIMENSIONS};
pub use error::{PgArrayError, Result};
pub use format::{LiteralFormatter, PostgresFormatter, QueryFormatter};
