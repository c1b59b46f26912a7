use crate::record::Field;
use std::fmt;
use std::num::ParseIntError;

/// Result type for status line parsing
pub type Result<T> = std::result::Result<T, ParseError>;

/// Minimum number of comma-separated segments in a go-fuzz status line
pub const MIN_SEGMENTS: usize = 7;

/// Coarse classification of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    TooFewFields,
    FieldConversion,
}

/// Error returned when a status line cannot be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line has fewer than [`MIN_SEGMENTS`] comma-separated segments
    TooFewFields { found: usize },

    /// A token was found for the field but could not be converted
    FieldConversion { field: Field, cause: ConversionError },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::TooFewFields { .. } => ParseErrorKind::TooFewFields,
            ParseError::FieldConversion { .. } => ParseErrorKind::FieldConversion,
        }
    }

    /// Field that failed to convert, if the error is a conversion failure
    pub fn field(&self) -> Option<Field> {
        match self {
            ParseError::TooFewFields { .. } => None,
            ParseError::FieldConversion { field, .. } => Some(*field),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooFewFields { .. } => write!(
                f,
                "output line must contain at least {} fields",
                MIN_SEGMENTS
            ),
            ParseError::FieldConversion { field, cause } => {
                write!(f, "can't parse {} field: {}", field, cause)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::TooFewFields { .. } => None,
            ParseError::FieldConversion { cause, .. } => Some(cause),
        }
    }
}

/// Underlying failure of a single token conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    Integer {
        token: String,
        source: ParseIntError,
    },
    Timestamp {
        token: String,
        source: chrono::ParseError,
    },
}

impl ConversionError {
    pub fn token(&self) -> &str {
        match self {
            ConversionError::Integer { token, .. } | ConversionError::Timestamp { token, .. } => {
                token
            }
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Integer { token, source } => {
                write!(f, "parsing {:?} as integer: {}", token, source)
            }
            ConversionError::Timestamp { token, source } => {
                write!(f, "parsing {:?} as date and time: {}", token, source)
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Integer { source, .. } => Some(source),
            ConversionError::Timestamp { source, .. } => Some(source),
        }
    }
}
