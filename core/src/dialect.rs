//! Array literal grammar settings.

/// PostgreSQL's `MAXDIM`.
pub const MAX_DIMENSIONS: usize = 6;

/// Delimiters and null token used when rendering and parsing array literals.
///
/// The default is PostgreSQL's input grammar: `{a,b,c}`, with `NULL` matched
/// case-insensitively for unquoted elements.
///
/// # Examples
///
/// ```
/// use pgarray_core::ArrayDialect;
///
/// let dialect = ArrayDialect::postgres();
/// assert!(dialect.is_null_token("null"));
///
/// let strict = dialect.with_null_case_sensitive(true);
/// assert!(!strict.is_null_token("null"));
/// assert!(strict.is_null_token("NULL"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrayDialect {
    /// Opening delimiter of an array or sub-array
    pub open: char,
    /// Closing delimiter of an array or sub-array
    pub close: char,
    /// Separator between elements
    pub separator: char,
    /// Unquoted token denoting a NULL element
    pub null_token: String,
    /// Whether the null token must match exactly
    pub null_case_sensitive: bool,
    /// Deepest sub-array nesting accepted when parsing
    pub max_dimensions: usize,
}

impl ArrayDialect {
    pub fn postgres() -> Self {
        Self {
            open: '{',
            close: '}',
            separator: ',',
            null_token: "NULL".into(),
            null_case_sensitive: false,
            max_dimensions: MAX_DIMENSIONS,
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_token = token.into();
        self
    }

    #[must_use]
    pub fn with_null_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.null_case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_max_dimensions(mut self, max_dimensions: usize) -> Self {
        self.max_dimensions = max_dimensions;
        self
    }

    /// Returns `true` if an unquoted element spelled `token` denotes NULL.
    #[inline]
    pub fn is_null_token(&self, token: &str) -> bool {
        if self.null_case_sensitive {
            token == self.null_token
        } else {
            token.eq_ignore_ascii_case(&self.null_token)
        }
    }

    /// Returns `true` if `c` is one of the structural characters of the grammar.
    #[inline]
    pub fn is_delimiter(&self, c: char) -> bool {
        c == self.open || c == self.close || c == self.separator
    }
}

impl Default for ArrayDialect {
    fn default() -> Self {
        Self::postgres()
    }
}
