use std::borrow::Cow;
use thiserror::Error;

/// The condition a parse failed with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A read was attempted past the end of the input.
    #[error("unexpected end of input at position {position}")]
    EndOfInput { position: usize },

    /// A predicate rejected the character under the cursor.
    #[error("bad symbol at position {position}, got '{found}'{}", expectation(.expected))]
    BadSymbol {
        position: usize,
        found: char,
        expected: Option<Cow<'static, str>>,
    },

    /// Trailing input where none was expected.
    #[error("expected end of input at position {position}, got '{found}'")]
    ExpectedEndOfInput { position: usize, found: char },

    /// A multi-character literal failed to match.
    #[error("'{expected}' not found at position {position}")]
    LiteralMismatch {
        position: usize,
        expected: Cow<'static, str>,
    },

    /// A bounded-above repetition range was requested. Reported when the
    /// parser is built, never during a parse.
    #[error("closed repetition ranges are not supported")]
    UnsupportedQuantifier,

    /// A declared-but-unbuilt primitive was invoked.
    #[error("{feature} is not implemented")]
    Unimplemented { feature: Cow<'static, str> },
}

fn expectation(expected: &Option<Cow<'static, str>>) -> String {
    match expected {
        Some(label) => format!(", expected: {}", label),
        None => String::new(),
    }
}

/// A parse failure: one condition plus an ordered list of underlying
/// failures.
///
/// The nested list exists so that future combinators can aggregate the errors
/// of losing branches; the combinators in this crate propagate single errors
/// and leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ErrorKind,
    nested: Vec<ParseError>,
}

impl ParseError {
    pub fn new(kind: ErrorKind) -> Self {
        ParseError {
            kind,
            nested: Vec::new(),
        }
    }

    pub fn with_nested(kind: ErrorKind, nested: Vec<ParseError>) -> Self {
        ParseError { kind, nested }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn nested(&self) -> &[ParseError] {
        &self.nested
    }

    /// Input position the failure refers to, when the condition carries one.
    pub fn position(&self) -> Option<usize> {
        match &self.kind {
            ErrorKind::EndOfInput { position }
            | ErrorKind::BadSymbol { position, .. }
            | ErrorKind::ExpectedEndOfInput { position, .. }
            | ErrorKind::LiteralMismatch { position, .. } => Some(*position),
            ErrorKind::UnsupportedQuantifier | ErrorKind::Unimplemented { .. } => None,
        }
    }
}
