//! Recursive-descent grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := atom ('^' '(' expr ')')?
//! atom   := number | 'x' | 'e' | 'pi' | 'PI'
//!         | trig '(' expr ')'
//!         | inverseTrig '(' expr ')'
//!         | 'ln' '(' expr ')'
//!         | 'log' '_' '(' expr ')' '(' expr ')'
//!         | '(' expr ')'
//! ```
//!
//! Parentheses are handled by recursing directly over the borrowed token
//! slice (tracked via a cursor index) rather than by null-terminating a
//! mutable buffer and recursing on a sub-slice of text, since Rust's
//! `&str` is immutable and the token stream is already a clean
//! intermediate representation.

use std::f64::consts::{E, PI};

use super::lexer::{starts_atom, Token, TokenKind};
use crate::core::{Expr, MulOp, Sign};
use crate::error::ParseError;

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind, expected: char) -> Result<(), ParseError> {
        if self.peek().kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::ExpectedCharacter {
                expected,
                position: self.peek().pos,
            })
        }
    }
}

/// Parse a full token stream (produced by [`super::lexer::lex`]) into an
/// [`Expr`] covering every token up to the trailing [`TokenKind::End`]
/// marker.
pub(super) fn parse_tokens(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut cursor = Cursor { tokens, pos: 0 };
    let expr = parse_expr(&mut cursor)?;
    if cursor.peek().kind != TokenKind::End {
        return Err(ParseError::UnexpectedCharacter {
            position: cursor.peek().pos,
        });
    }
    Ok(expr)
}

fn parse_expr(c: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let mut terms = Vec::new();
    let mut sign = Sign::Plus;
    loop {
        let term = parse_term(c)?;
        terms.push((sign, term));
        sign = match c.peek().kind {
            TokenKind::Plus => {
                c.advance();
                Sign::Plus
            }
            TokenKind::Minus => {
                c.advance();
                Sign::Minus
            }
            _ => break,
        };
    }
    Ok(collapse_sum(terms))
}

fn collapse_sum(mut terms: Vec<(Sign, Expr)>) -> Expr {
    if terms.len() == 1 {
        terms.pop().map_or(Expr::Constant(0.0), |(_, term)| term)
    } else {
        Expr::SumChain(terms)
    }
}

/// `factor (('*' | '/') factor | implicit-atom)*`
///
/// The third alternative is implicit multiplication: if the token
/// following a completed factor is not `*`/`/` but could itself start a
/// new atom (`2x`, `3sin(x)`, `(x+1)(x-1)`), a `Multiply` join is
/// synthesized without consuming an operator token. This never
/// misfires between `log`'s two required parenthesized groups, since
/// that pair is consumed entirely inside [`parse_atom`]'s `Log` arm and
/// this loop never regains control between them.
fn parse_term(c: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let mut factors = Vec::new();
    let mut op = MulOp::Multiply;
    loop {
        let factor = parse_factor(c)?;
        factors.push((op, factor));
        op = match c.peek().kind {
            TokenKind::Star => {
                c.advance();
                MulOp::Multiply
            }
            TokenKind::Slash => {
                c.advance();
                MulOp::Divide
            }
            kind if starts_atom(kind) => MulOp::Multiply,
            _ => break,
        };
    }
    Ok(collapse_mul(factors))
}

fn collapse_mul(mut factors: Vec<(MulOp, Expr)>) -> Expr {
    if factors.len() == 1 {
        factors
            .pop()
            .map_or(Expr::Constant(1.0), |(_, factor)| factor)
    } else {
        Expr::MulChain(factors)
    }
}

fn parse_factor(c: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let atom = parse_atom(c)?;
    if c.peek().kind == TokenKind::Caret {
        c.advance();
        c.expect(TokenKind::LParen, '(')?;
        let exponent = parse_expr(c)?;
        c.expect(TokenKind::RParen, ')')?;
        Ok(Expr::Power {
            base: Box::new(atom),
            exponent: Box::new(exponent),
        })
    } else {
        Ok(atom)
    }
}

fn parse_parenthesized(c: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    c.expect(TokenKind::LParen, '(')?;
    let inner = parse_expr(c)?;
    c.expect(TokenKind::RParen, ')')?;
    Ok(inner)
}

fn parse_atom(c: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let tok = c.peek();
    match tok.kind {
        TokenKind::Number(v) => {
            c.advance();
            Ok(Expr::Constant(v))
        }
        TokenKind::X => {
            c.advance();
            Ok(Expr::Variable)
        }
        TokenKind::E => {
            c.advance();
            Ok(Expr::Constant(E))
        }
        TokenKind::Pi => {
            c.advance();
            Ok(Expr::Constant(PI))
        }
        TokenKind::Trig(kind) => {
            c.advance();
            let argument = Box::new(parse_parenthesized(c)?);
            Ok(Expr::Trig { kind, argument })
        }
        TokenKind::InverseTrig(kind) => {
            c.advance();
            let argument = Box::new(parse_parenthesized(c)?);
            Ok(Expr::InverseTrig { kind, argument })
        }
        TokenKind::Ln => {
            c.advance();
            let argument = Box::new(parse_parenthesized(c)?);
            Ok(Expr::Logarithm {
                base: Box::new(Expr::Constant(E)),
                argument,
            })
        }
        TokenKind::Log => {
            c.advance();
            c.expect(TokenKind::Underscore, '_')?;
            let base = Box::new(parse_parenthesized(c)?);
            let argument = Box::new(parse_parenthesized(c)?);
            Ok(Expr::Logarithm { base, argument })
        }
        TokenKind::LParen => parse_parenthesized(c),
        _ => Err(ParseError::UnexpectedCharacter { position: tok.pos }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::super::lexer::lex;
    use super::*;

    fn parse(input: &str) -> Result<Expr, ParseError> {
        let tokens = lex(input)?;
        parse_tokens(&tokens)
    }

    #[test]
    fn single_atom_collapses_without_a_chain_wrapper() {
        let e = parse("x").unwrap();
        assert_eq!(e, Expr::Variable);
    }

    #[test]
    fn mandatory_parens_after_caret() {
        assert!(parse("x^2").is_err());
        assert!(parse("x^(2)").is_ok());
    }

    #[test]
    fn missing_closing_paren_reports_expected_character() {
        let err = parse("sin(x").unwrap_err();
        assert!(matches!(
            err,
            ParseError::ExpectedCharacter { expected: ')', .. }
        ));
    }

    #[test]
    fn log_requires_two_parenthesized_groups() {
        let e = parse("log_(2)(8)").unwrap();
        assert!((e.evaluate(0.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn trailing_garbage_after_full_expression_errors() {
        let err = parse("1+1)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedCharacter { .. }));
    }
}
