//! Error types for magnet URI parsing and serialization.

use std::fmt;

/// Errors that can occur when parsing a magnet URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the parameter error, if a parameter fragment was invalid.
    #[must_use]
    pub const fn parameter_error(&self) -> Option<&ParameterError> {
        match &self.kind {
            ParseErrorKind::InvalidParameter { error, .. } => Some(error),
            ParseErrorKind::MissingSchemaPrefix { .. } => None,
        }
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input does not start with the schema prefix
    MissingSchemaPrefix {
        /// The prefix that was expected
        expected: &'static str,
    },
    /// A parameter fragment failed to parse
    InvalidParameter {
        /// Zero-based position of the fragment among all parameters
        position: usize,
        /// The parameter error
        error: ParameterError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse magnet URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MissingSchemaPrefix { expected } => {
                write!(f, "the string doesn't start with the schema prefix '{expected}'")
            }
            ParseErrorKind::InvalidParameter { position, error } => {
                write!(f, "invalid parameter at position {position}: {error}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidParameter { error, .. } => Some(error),
            ParseErrorKind::MissingSchemaPrefix { .. } => None,
        }
    }
}

/// Errors for a single `key[.index]=value` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// The fragment has no `=`, so no prefix can be told apart from the value
    WithoutPrefix {
        /// The whole offending fragment
        parameter: String,
    },
    /// The index after the dot is not a positive integer
    InvalidIndex {
        /// The prefix token in front of the dot
        prefix: String,
        /// The text after the dot
        index: String,
    },
    /// The prefix token is not one of `xt`, `dn`, `kt` or `mt`
    UnknownPrefix {
        /// The unrecognized token
        prefix: String,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithoutPrefix { parameter } => {
                write!(f, "parameter without prefix: '{parameter}'")
            }
            Self::InvalidIndex { prefix, index } => {
                write!(
                    f,
                    "wrong parameter prefix '{prefix}.{index}': index '{index}' is not a positive integer"
                )
            }
            Self::UnknownPrefix { prefix } => {
                write!(
                    f,
                    "unknown parameter prefix '{prefix}'; expected one of 'xt', 'dn', 'kt', 'mt'"
                )
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Errors that can occur when serializing a magnet URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeError {
    /// The URI has no parameters to write
    NoParameters,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParameters => write!(f, "the magnet URI has no parameters"),
        }
    }
}

impl std::error::Error for SerializeError {}
