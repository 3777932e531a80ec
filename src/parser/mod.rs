//! Parser module: infix text to [`Expr`].

mod grammar;
mod lexer;

use crate::core::Expr;
use crate::error::ParseError;

/// Parse a formula string into an expression tree.
///
/// Pipeline: lex (recognizing numbers, operators and keywords by
/// longest-prefix match) → build the tree with a recursive-descent
/// parser over the resulting token stream. The source text itself is
/// never mutated. Implicit multiplication (`2x`, `3sin(x)`,
/// `(x+1)(x-1)`) is not a separate token-stream pass; the grammar's
/// term loop synthesizes the join itself whenever the token after a
/// completed factor could start a new atom, which keeps it from firing
/// between `log`'s two mandatory parenthesized groups.
///
/// # Errors
///
/// Returns [`ParseError::EmptyFormula`] if `input` is empty or
/// whitespace-only, [`ParseError::UnexpectedCharacter`] if a position
/// expected to start an atom held none of the recognized starter
/// characters, or [`ParseError::ExpectedCharacter`] if a required
/// literal (`(`, `)`, `_`) was missing.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    let tokens = lexer::lex(input)?;
    grammar::parse_tokens(&tokens)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse("   "), Err(ParseError::EmptyFormula));
    }

    #[test]
    fn end_to_end_scenario_one() {
        let e = parse("2x^(2)+3x-5").unwrap();
        assert_eq!(e.evaluate(2.0), 9.0);
    }

    #[test]
    fn end_to_end_scenario_six() {
        let e = parse("log_(2)(8)").unwrap();
        assert!((e.evaluate(0.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn end_to_end_scenario_seven_implicit_mul() {
        let e = parse("2x").unwrap();
        assert_eq!(e.evaluate(3.0), 6.0);
    }

    #[test]
    fn implicit_multiplication_joins_two_parenthesized_groups() {
        let e = parse("(x+1)(x-1)").unwrap();
        assert_eq!(e.evaluate(3.0), 8.0);
    }

    #[test]
    fn implicit_multiplication_never_splices_into_logs_two_arguments() {
        assert!(parse("log_(2)(8)").is_ok());
    }
}
