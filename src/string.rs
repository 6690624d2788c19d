use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// Matching is atomic: on a mismatch, or when the input runs out mid-word,
/// the failure's remainder is the original start position no matter how many
/// characters matched before.
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for IsStringParser {
    type Output = Cow<'static, str>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        let mut cursor = input;

        for expected_char in self.expected.chars() {
            let matched = match cursor.current() {
                Ok(current) => current == expected_char,
                Err(_) => false,
            };
            if !matched {
                let error = ParseError::new(ErrorKind::LiteralMismatch {
                    position: input.position(),
                    expected: self.expected.clone(),
                });
                return ParseResult::failure(error, input);
            }
            cursor = match cursor.advance() {
                Ok(next) => next,
                Err(error) => return ParseResult::failure(error, input),
            };
        }

        // Clone is cheap for the common &'static str case
        ParseResult::success(self.expected.clone(), cursor)
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let text: Vec<char> = "hello".chars().collect();
        let parser = is_string("hello");

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value().map(|v| v.as_ref()), Some("hello"));
        assert!(result.remainder().is_eof());
    }

    #[test]
    fn test_match_with_remaining_input() {
        let text: Vec<char> = "hello world".chars().collect();
        let parser = is_string("hello");

        let result = parser.parse(Source::new(&text));
        assert!(result.is_successful());
        assert_eq!(result.remainder().position(), 5);
        assert_eq!(result.remainder().current().unwrap(), ' ');
    }

    #[test]
    fn test_partial_match_rewinds_fully() {
        // Two of three characters match before the mismatch; the remainder
        // still points at the start.
        let text: Vec<char> = "(()1".chars().collect();
        let parser = is_string("(((");

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
        assert_eq!(result.remainder().position(), 0);
        assert!(matches!(
            result.into_error().unwrap().kind(),
            ErrorKind::LiteralMismatch { position: 0, .. }
        ));
    }

    #[test]
    fn test_input_runs_out_mid_word() {
        let text: Vec<char> = "hel".chars().collect();
        let parser = is_string("hello");

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_empty_literal_matches_without_consuming() {
        let text: Vec<char> = "abc".chars().collect();
        let parser = is_string("");

        let result = parser.parse(Source::new(&text));
        assert!(result.is_successful());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_case_sensitive() {
        let text: Vec<char> = "Hello".chars().collect();
        let parser = is_string("hello");

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
    }

    #[test]
    fn test_unicode_literal() {
        let text: Vec<char> = "こんにちは世界".chars().collect();
        let parser = is_string("こんにちは");

        let result = parser.parse(Source::new(&text));
        assert!(result.is_successful());
        assert_eq!(result.remainder().position(), 5);
        assert_eq!(result.remainder().current().unwrap(), '世');
    }

    #[test]
    fn test_owned_expected_string() {
        let text: Vec<char> = "abc".chars().collect();
        let parser = is_string(String::from("abc"));

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value().map(|v| v.as_ref()), Some("abc"));
    }
}
