use crate::error::ParseError;
use crate::source::Source;
use std::fmt;

/// Outcome of running a parser: a value or an error, each paired with the
/// cursor to resume from.
///
/// On success the remainder sits after the consumed prefix. On failure it is
/// the position alternation should retry from, which is not necessarily where
/// the failing parser started.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<'src, T> {
    Success { value: T, remainder: Source<'src> },
    Failure {
        error: ParseError,
        remainder: Source<'src>,
    },
}

impl<'src, T> ParseResult<'src, T> {
    pub fn success(value: T, remainder: Source<'src>) -> Self {
        ParseResult::Success { value, remainder }
    }

    pub fn failure(error: ParseError, remainder: Source<'src>) -> Self {
        ParseResult::Failure { error, remainder }
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ParseResult::Failure { .. })
    }

    pub fn remainder(&self) -> Source<'src> {
        match self {
            ParseResult::Success { remainder, .. } => *remainder,
            ParseResult::Failure { remainder, .. } => *remainder,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn into_error(self) -> Option<ParseError> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { error, .. } => Some(error),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ParseResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResult::Success { value, .. } => write!(f, "Success({:?})", value),
            ParseResult::Failure { error, .. } => write!(f, "Failure({})", error),
        }
    }
}
