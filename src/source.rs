use crate::error::{ErrorKind, ParseError};
use std::fmt;

/// Immutable cursor over a character buffer.
///
/// A `Source` pairs the input slice with a position and is `Copy`: every
/// operation returns a new cursor, so saved copies stay valid and alternation
/// can rewind simply by reusing an earlier value. The position is always a
/// valid index or equal to the input length (end-of-input).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Source<'src> {
    text: &'src [char],
    position: usize,
}

impl<'src> Source<'src> {
    pub fn new(text: &'src [char]) -> Self {
        Source { text, position: 0 }
    }

    /// Read the character under the cursor.
    ///
    /// Fails with `EndOfInput` when the cursor sits past the last character.
    pub fn current(&self) -> Result<char, ParseError> {
        if self.is_eof() {
            return Err(ParseError::new(ErrorKind::EndOfInput {
                position: self.position,
            }));
        }
        Ok(self.text[self.position])
    }

    /// Step the cursor one character forward.
    ///
    /// Advancing a cursor that is already at end-of-input is a boundary
    /// violation and fails with `EndOfInput`.
    pub fn advance(self) -> Result<Self, ParseError> {
        self.advance_by(1)
    }

    /// Step the cursor `n` characters forward.
    pub fn advance_by(self, n: usize) -> Result<Self, ParseError> {
        if self.is_eof() || self.position + n > self.text.len() {
            return Err(ParseError::new(ErrorKind::EndOfInput {
                position: self.position,
            }));
        }
        Ok(Source {
            text: self.text,
            position: self.position + n,
        })
    }

    pub fn is_eof(&self) -> bool {
        self.position == self.text.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &'src [char] {
        self.text
    }

    /// Unconsumed tail of the input, for diagnostics.
    pub fn remaining(&self) -> String {
        self.text[self.position..].iter().collect()
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source({})", self.remaining())
    }
}
