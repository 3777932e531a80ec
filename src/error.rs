//! Error type surfaced by the parser.
//!
//! Mirrors the two-code `StatusCode` record described by the grammar this
//! parser implements, but as an ordinary `Result`-compatible error type
//! instead of an out-parameter struct threaded through every call.

use std::fmt;

/// Failure produced while parsing a formula.
///
/// Every parsing function in [`crate::parser`] returns `Result<_, ParseError>`;
/// `?`-propagation gives the short-circuit-on-first-error behavior that the
/// original status-code design required callers to check for by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
    /// An atom position contained none of the recognized starter characters.
    UnexpectedCharacter {
        /// Byte offset into the input at which the unrecognized character sat.
        position: usize,
    },
    /// A required literal (`(`, `)`, `_`) was absent.
    ExpectedCharacter {
        /// The character that was required but not found.
        expected: char,
        /// Byte offset into the input at which the mismatch was detected.
        position: usize,
    },
    /// The input was empty or contained only whitespace.
    EmptyFormula,
}

impl ParseError {
    /// Byte offset the error should be pointed at when rendering a
    /// caret-underline diagnostic. `EmptyFormula` has no meaningful offset
    /// and returns 0.
    #[must_use]
    pub fn position(&self) -> usize {
        match *self {
            Self::UnexpectedCharacter { position } | Self::ExpectedCharacter { position, .. } => {
                position
            }
            Self::EmptyFormula => 0,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { position } => {
                write!(f, "unexpected character at position {position}")
            }
            Self::ExpectedCharacter { expected, position } => {
                write!(f, "expected '{expected}' at position {position}")
            }
            Self::EmptyFormula => write!(f, "formula cannot be empty"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::*;

    #[test]
    fn position_reads_through_variants() {
        assert_eq!(ParseError::UnexpectedCharacter { position: 4 }.position(), 4);
        assert_eq!(
            ParseError::ExpectedCharacter {
                expected: '(',
                position: 7
            }
            .position(),
            7
        );
        assert_eq!(ParseError::EmptyFormula.position(), 0);
    }

    #[test]
    fn display_messages_are_human_readable() {
        let err = ParseError::ExpectedCharacter {
            expected: ')',
            position: 3,
        };
        assert_eq!(err.to_string(), "expected ')' at position 3");
    }
}
