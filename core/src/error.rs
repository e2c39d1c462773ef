use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PgArrayError {
    /// The wrapped sequence has no registered array codec
    #[error("pg: Array(unsupported {type_name})")]
    Unsupported { type_name: Cow<'static, str> },

    /// Scanning requires an exclusive reference to the destination
    #[error("pg: Array(non-reference {type_name})")]
    NonReference { type_name: Cow<'static, str> },

    /// Malformed array literal
    #[error("pg: malformed array literal at byte {position} near {fragment:?}: {message}")]
    Parse {
        position: usize,
        fragment: String,
        message: Cow<'static, str>,
    },

    /// An element could not be converted to the destination element type
    #[error("pg: cannot convert array element {value:?} to {target}")]
    Conversion {
        value: String,
        target: &'static str,
    },

    /// Error raised by the scalar conversion layer
    #[error("Conversion error: {0}")]
    ConversionError(Cow<'static, str>),
}

impl PgArrayError {
    /// Builds a [`PgArrayError::Parse`] for `input` at byte `position`.
    ///
    /// The fragment is a short window of the input starting at the offending
    /// position, clamped to a character boundary.
    pub fn parse(input: &str, position: usize, message: impl Into<Cow<'static, str>>) -> Self {
        let mut start = position.min(input.len());
        while !input.is_char_boundary(start) {
            start -= 1;
        }
        let fragment = input[start..].chars().take(16).collect();
        PgArrayError::Parse {
            position,
            fragment,
            message: message.into(),
        }
    }

    pub fn conversion(value: impl Into<String>, target: &'static str) -> Self {
        PgArrayError::Conversion {
            value: value.into(),
            target,
        }
    }

    /// Returns `true` for errors caused by the data being scanned, as opposed
    /// to misuse of the wrapper.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            PgArrayError::Parse { .. }
                | PgArrayError::Conversion { .. }
                | PgArrayError::ConversionError(_)
        )
    }
}

/// Result type for array conversions
pub type Result<T> = std::result::Result<T, PgArrayError>;
