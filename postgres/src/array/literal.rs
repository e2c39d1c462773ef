//! Array literal grammar.
//!
//! Rendering helpers used by the element codecs, and a parser producing an
//! [`Element`] tree from `{...}` text.

use std::borrow::Cow;

use pgarray_core::{ArrayDialect, PgArrayError};

/// A parsed array element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<'a> {
    /// Unquoted null token
    Null,
    /// Scalar text, already unescaped
    Scalar(Cow<'a, str>),
    /// Nested sub-array
    Array(Vec<Element<'a>>),
}

impl<'a> Element<'a> {
    /// Short description used in conversion errors.
    pub fn describe(&self) -> String {
        match self {
            Element::Null => "NULL".into(),
            Element::Scalar(text) => text.to_string(),
            Element::Array(items) => format!("sub-array of {} elements", items.len()),
        }
    }
}

//------------------------------------------------------------------------------
// Rendering
//------------------------------------------------------------------------------

/// Appends `value` as a double-quoted element.
///
/// `"` and `\` are backslash-escaped. NUL characters are dropped since
/// PostgreSQL text values cannot contain them.
pub fn append_quoted(buf: &mut String, value: &str) {
    buf.reserve(value.len() + 2);
    buf.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                buf.push('\\');
                buf.push(c);
            }
            '\0' => {}
            _ => buf.push(c),
        }
    }
    buf.push('"');
}

/// Appends `bytes` as a quoted bytea hex element (`"\\x0aff"`).
pub fn append_bytea(buf: &mut String, bytes: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    buf.reserve(bytes.len() * 2 + 6);
    buf.push_str("\"\\\\x");
    for b in bytes {
        buf.push(HEX[(b >> 4) as usize] as char);
        buf.push(HEX[(b & 0x0f) as usize] as char);
    }
    buf.push('"');
}

/// Appends the elements produced by `each` between the dialect's delimiters.
pub fn append_delimited<I, F>(dialect: &ArrayDialect, buf: &mut String, items: I, mut each: F)
where
    I: IntoIterator,
    F: FnMut(&mut String, I::Item),
{
    buf.push(dialect.open);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            buf.push(dialect.separator);
        }
        each(buf, item);
    }
    buf.push(dialect.close);
}

//------------------------------------------------------------------------------
// Parsing
//------------------------------------------------------------------------------

/// Parses an array literal into its top-level elements.
///
/// An optional dimension decoration (`[1:3]=`) in front of the literal is
/// accepted and ignored.
///
/// ```
/// use pgarray_core::ArrayDialect;
/// use pgarray_postgres::array::literal::{Element, parse};
///
/// let elements = parse(&ArrayDialect::postgres(), r#"{"a,b",NULL}"#).unwrap();
/// assert_eq!(elements, vec![Element::Scalar("a,b".into()), Element::Null]);
/// ```
pub fn parse<'a>(dialect: &ArrayDialect, input: &'a str) -> Result<Vec<Element<'a>>, PgArrayError> {
    let mut parser = Parser {
        dialect,
        input,
        pos: 0,
        depth: 0,
    };

    parser.skip_whitespace();
    if parser.peek() == Some('[') {
        parser.skip_dimensions()?;
        parser.skip_whitespace();
    }
    let elements = parser.parse_array()?;
    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(parser.error("unexpected characters after array literal"));
    }
    Ok(elements)
}

struct Parser<'d, 'a> {
    dialect: &'d ArrayDialect,
    input: &'a str,
    pos: usize,
    // open sub-arrays at `pos`
    depth: usize,
}

impl<'d, 'a> Parser<'d, 'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn error(&self, message: &'static str) -> PgArrayError {
        PgArrayError::parse(self.input, self.pos, message)
    }

    /// Skips `[lower:upper]` groups up to and including `=`.
    fn skip_dimensions(&mut self) -> Result<(), PgArrayError> {
        while self.peek() == Some('[') {
            let Some(end) = self.input[self.pos..].find(']') else {
                return Err(self.error("unterminated dimension decoration"));
            };
            let bounds = &self.input[self.pos + 1..self.pos + end];
            let valid = bounds.split(':').all(|part| {
                let part = part.trim().trim_start_matches(['-', '+']);
                !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
            });
            if !valid || bounds.split(':').count() > 2 {
                return Err(self.error("invalid dimension decoration"));
            }
            self.pos += end + 1;
            self.skip_whitespace();
        }
        if self.bump() != Some('=') {
            return Err(self.error("expected '=' after dimension decoration"));
        }
        Ok(())
    }

    /// Parses `{...}` starting at the opening delimiter.
    fn parse_array(&mut self) -> Result<Vec<Element<'a>>, PgArrayError> {
        match self.peek() {
            Some(c) if c == self.dialect.open => {
                if self.depth >= self.dialect.max_dimensions {
                    return Err(self.error("array nesting exceeds maximum dimensions"));
                }
                self.pos += c.len_utf8();
            }
            Some(_) => return Err(self.error("expected opening delimiter")),
            None => return Err(self.error("empty input, expected array literal")),
        }

        self.depth += 1;
        let elements = self.parse_elements();
        self.depth -= 1;
        elements
    }

    fn parse_elements(&mut self) -> Result<Vec<Element<'a>>, PgArrayError> {
        let mut elements = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(self.dialect.close) {
            self.bump();
            return Ok(elements);
        }

        loop {
            self.skip_whitespace();
            elements.push(self.parse_element()?);
            self.skip_whitespace();
            match self.bump() {
                Some(c) if c == self.dialect.separator => continue,
                Some(c) if c == self.dialect.close => return Ok(elements),
                Some(c) => {
                    self.pos -= c.len_utf8();
                    return Err(self.error("expected separator or closing delimiter"));
                }
                None => return Err(self.error("missing closing delimiter")),
            }
        }
    }

    fn parse_element(&mut self) -> Result<Element<'a>, PgArrayError> {
        match self.peek() {
            None => Err(self.error("missing closing delimiter")),
            Some(c) if c == self.dialect.open => Ok(Element::Array(self.parse_array()?)),
            Some('"') => self.parse_quoted().map(Element::Scalar),
            Some(c) if c == self.dialect.separator || c == self.dialect.close => {
                Err(self.error("empty unquoted element"))
            }
            Some(_) => self.parse_unquoted(),
        }
    }

    /// Parses a double-quoted element; the slice is borrowed unless it
    /// contains escapes.
    fn parse_quoted(&mut self) -> Result<Cow<'a, str>, PgArrayError> {
        let start = self.pos;
        self.pos += 1;
        let body_start = self.pos;
        let mut owned: Option<String> = None;

        loop {
            let Some(c) = self.bump() else {
                return Err(PgArrayError::parse(
                    self.input,
                    start,
                    "unterminated quoted element",
                ));
            };
            match c {
                '"' => {
                    let text = match owned {
                        Some(text) => Cow::Owned(text),
                        None => Cow::Borrowed(&self.input[body_start..self.pos - 1]),
                    };
                    return Ok(text);
                }
                '\\' => {
                    let text = owned.get_or_insert_with(|| {
                        self.input[body_start..self.pos - 1].to_string()
                    });
                    match self.bump() {
                        Some(escaped) => text.push(escaped),
                        None => {
                            return Err(PgArrayError::parse(
                                self.input,
                                start,
                                "unterminated quoted element",
                            ));
                        }
                    }
                }
                _ => {
                    if let Some(text) = owned.as_mut() {
                        text.push(c);
                    }
                }
            }
        }
    }

    /// Parses an unquoted element up to the next separator or closing
    /// delimiter. Surrounding whitespace is not part of the value, escaped
    /// characters always are.
    fn parse_unquoted(&mut self) -> Result<Element<'a>, PgArrayError> {
        let start = self.pos;
        // set once an escape is seen; unescaped input is borrowed
        let mut owned: Option<String> = None;
        // end of the value so far, excluding unescaped trailing whitespace
        let mut end = self.pos;

        while let Some(c) = self.peek() {
            if self.dialect.is_delimiter(c) && c != self.dialect.open {
                break;
            }
            if c == self.dialect.open || c == '"' {
                return Err(self.error("unexpected character in unquoted element"));
            }
            let at = self.pos;
            self.pos += c.len_utf8();
            if c == '\\' {
                let Some(next) = self.bump() else {
                    return Err(self.error("missing closing delimiter"));
                };
                let text = owned.get_or_insert_with(|| self.input[start..end].to_string());
                text.push_str(&self.input[end..at]);
                text.push(next);
                end = self.pos;
            } else if !c.is_whitespace() {
                if let Some(text) = owned.as_mut() {
                    text.push_str(&self.input[end..self.pos]);
                }
                end = self.pos;
            }
        }

        if self.peek().is_none() {
            return Err(self.error("missing closing delimiter"));
        }

        match owned {
            Some(text) => Ok(Element::Scalar(Cow::Owned(text))),
            None => {
                let text = &self.input[start..end];
                if self.dialect.is_null_token(text) {
                    Ok(Element::Null)
                } else {
                    Ok(Element::Scalar(Cow::Borrowed(text)))
                }
            }
        }
    }
}
