//! Formatting context handed to array appenders.

use crate::dialect::ArrayDialect;

/// Dialect-aware formatting context used when embedding values in SQL text.
pub trait QueryFormatter {
    /// Grammar used to render array literals
    fn array_dialect(&self) -> &ArrayDialect;

    /// Appends `literal` to `buf` as a SQL string constant.
    fn append_string_constant(&self, buf: &mut String, literal: &str);
}

/// Renders literals as standard-conforming PostgreSQL string constants.
///
/// ```
/// use pgarray_core::{PostgresFormatter, QueryFormatter};
///
/// let mut sql = String::from("SELECT ");
/// PostgresFormatter::default().append_string_constant(&mut sql, "{\"it's\"}");
/// assert_eq!(sql, "SELECT '{\"it''s\"}'");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostgresFormatter {
    dialect: ArrayDialect,
}

impl PostgresFormatter {
    pub fn new(dialect: ArrayDialect) -> Self {
        Self { dialect }
    }
}

impl QueryFormatter for PostgresFormatter {
    fn array_dialect(&self) -> &ArrayDialect {
        &self.dialect
    }

    fn append_string_constant(&self, buf: &mut String, literal: &str) {
        buf.reserve(literal.len() + 2);
        buf.push('\'');
        for c in literal.chars() {
            if c == '\'' {
                buf.push('\'');
            }
            buf.push(c);
        }
        buf.push('\'');
    }
}

/// Appends literals verbatim, for binding arrays as text-mode parameters.
#[derive(Debug, Clone, Default)]
pub struct LiteralFormatter {
    dialect: ArrayDialect,
}

impl LiteralFormatter {
    pub fn new(dialect: ArrayDialect) -> Self {
        Self { dialect }
    }
}

impl QueryFormatter for LiteralFormatter {
    fn array_dialect(&self) -> &ArrayDialect {
        &self.dialect
    }

    fn append_string_constant(&self, buf: &mut String, literal: &str) {
        buf.push_str(literal);
    }
}
