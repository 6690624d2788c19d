use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;
use std::borrow::Cow;

/// Parser that matches input against a textual pattern
///
/// Declared as an extension point. The implementation is pending: every
/// parse fails with an explicit `Unimplemented` condition rather than
/// silently matching nothing.
pub struct PatternParser {
    pattern: Cow<'static, str>,
}

impl PatternParser {
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl<'src> Parser<'src> for PatternParser {
    type Output = Cow<'static, str>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        let error = ParseError::new(ErrorKind::Unimplemented {
            feature: format!("matching against pattern '{}'", self.pattern).into(),
        });
        ParseResult::failure(error, input)
    }
}

/// Convenience function to create a PatternParser
pub fn pattern(pattern: impl Into<Cow<'static, str>>) -> PatternParser {
    PatternParser::new(pattern)
}
