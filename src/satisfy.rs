use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;
use std::borrow::Cow;

/// Parser that matches a single character satisfying a predicate
///
/// This is the one primitive that inspects raw input; the character-class
/// parsers in this crate are specializations of it. An optional
/// expected-label enriches the rejection message.
pub struct Satisfy<F> {
    predicate: F,
    expected: Option<Cow<'static, str>>,
}

impl<F> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            expected: None,
        }
    }

    pub fn expecting(predicate: F, expected: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            expected: Some(expected.into()),
        }
    }
}

impl<'src, F> Parser<'src> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, char> {
        let current = match input.current() {
            Ok(current) => current,
            Err(error) => return ParseResult::failure(error, input),
        };

        if !(self.predicate)(current) {
            let error = ParseError::new(ErrorKind::BadSymbol {
                position: input.position(),
                found: current,
                expected: self.expected.clone(),
            });
            return ParseResult::failure(error, input);
        }

        match input.advance() {
            Ok(remainder) => ParseResult::success(current, remainder),
            Err(error) => ParseResult::failure(error, input),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Convenience function to create a Satisfy parser with an expected-label
pub fn satisfy_expecting<F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::expecting(predicate, expected)
}
