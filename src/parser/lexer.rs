//! Tokenizer: turns raw input text into a flat token stream. Implicit
//! multiplication is not spliced in here — whether two adjacent atoms
//! are joined by an implicit `*` depends on grammar context (it must
//! never fire between `log`'s two mandatory parenthesized groups), so
//! [`starts_atom`] is exposed for [`super::grammar`] to consult directly
//! while parsing a term.
//!
//! Identifiers are resolved by longest-prefix match against a small
//! keyword table (4-letter inverse-trig names, then 3-letter trig names
//! and `log`, then `ln`, then `pi`/`PI`, then the single letters `x` and
//! `e`). The table is an [`FxHashMap`](rustc_hash::FxHashMap), the same
//! hasher this lineage's lexical layer reaches for when looking up short
//! ASCII keys.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::core::{InverseTrigKind, TrigKind};
use crate::error::ParseError;

/// A lexical token together with the byte offset it started at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Underscore,
    LParen,
    RParen,
    X,
    E,
    Pi,
    Ln,
    Log,
    Trig(TrigKind),
    InverseTrig(InverseTrigKind),
    /// Synthetic end-of-input marker so the grammar never needs `Option`.
    End,
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut m = FxHashMap::default();
    m.insert("asin", TokenKind::InverseTrig(InverseTrigKind::Asin));
    m.insert("acos", TokenKind::InverseTrig(InverseTrigKind::Acos));
    m.insert("atan", TokenKind::InverseTrig(InverseTrigKind::Atan));
    m.insert("acsc", TokenKind::InverseTrig(InverseTrigKind::Acsc));
    m.insert("asec", TokenKind::InverseTrig(InverseTrigKind::Asec));
    m.insert("acot", TokenKind::InverseTrig(InverseTrigKind::Acot));
    m.insert("sin", TokenKind::Trig(TrigKind::Sin));
    m.insert("cos", TokenKind::Trig(TrigKind::Cos));
    m.insert("tan", TokenKind::Trig(TrigKind::Tan));
    m.insert("csc", TokenKind::Trig(TrigKind::Csc));
    m.insert("sec", TokenKind::Trig(TrigKind::Sec));
    m.insert("cot", TokenKind::Trig(TrigKind::Cot));
    m.insert("log", TokenKind::Log);
    m.insert("ln", TokenKind::Ln);
    m.insert("pi", TokenKind::Pi);
    m.insert("PI", TokenKind::Pi);
    m.insert("x", TokenKind::X);
    m.insert("e", TokenKind::E);
    m
});

/// Longest-prefix match at `bytes[start..]`, trying lengths 4, 3, 2, 1.
fn match_keyword(text: &str, start: usize) -> Option<(TokenKind, usize)> {
    let remaining = &text[start..];
    for len in [4usize, 3, 2, 1] {
        if let Some(slice) = remaining.get(..len)
            && let Some(&kind) = KEYWORDS.get(slice)
        {
            return Some((kind, len));
        }
    }
    None
}

fn parse_number(text: &str, start: usize) -> (f64, usize) {
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut lookahead = end + 1;
        while lookahead < bytes.len() && bytes[lookahead].is_ascii_digit() {
            lookahead += 1;
        }
        if lookahead > end + 1 {
            end = lookahead;
        }
    }
    let slice = &text[start..end];
    // The digit scan above guarantees `slice` is a valid decimal literal.
    let value: f64 = slice.parse().unwrap_or(f64::NAN);
    (value, end)
}

/// Tokenize `input`, resolving identifiers by longest-prefix keyword match.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedCharacter`] at the byte offset of any
/// character that starts neither a number, an operator, a parenthesis,
/// nor a recognized keyword.
pub fn lex(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        let kind = match c {
            '+' => Some((TokenKind::Plus, 1)),
            '-' => Some((TokenKind::Minus, 1)),
            '*' => Some((TokenKind::Star, 1)),
            '/' => Some((TokenKind::Slash, 1)),
            '^' => Some((TokenKind::Caret, 1)),
            '_' => Some((TokenKind::Underscore, 1)),
            '(' => Some((TokenKind::LParen, 1)),
            ')' => Some((TokenKind::RParen, 1)),
            _ if c.is_ascii_digit() => {
                let (value, end) = parse_number(input, i);
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    pos: i,
                });
                i = end;
                continue;
            }
            _ if c.is_ascii_alphabetic() => match match_keyword(input, i) {
                Some((kind, len)) => Some((kind, len)),
                None => return Err(ParseError::UnexpectedCharacter { position: i }),
            },
            _ => return Err(ParseError::UnexpectedCharacter { position: i }),
        };
        let (kind, len) = kind.ok_or(ParseError::UnexpectedCharacter { position: i })?;
        tokens.push(Token { kind, pos: i });
        i += len;
    }
    tokens.push(Token {
        kind: TokenKind::End,
        pos: bytes.len(),
    });
    Ok(tokens)
}

/// Whether `kind` can open a new atom, e.g. `2x`, `3sin(x)`, `(x+1)(x-1)`.
///
/// Consulted by [`super::grammar`]'s term loop to decide whether the
/// token following a just-parsed factor should be treated as an implicit
/// `*`. Never consulted mid-atom (e.g. between `log`'s two required
/// parenthesized groups), since those are consumed directly by
/// `parse_atom` without ever returning to the term loop.
pub(super) fn starts_atom(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number(_)
            | TokenKind::LParen
            | TokenKind::X
            | TokenKind::E
            | TokenKind::Pi
            | TokenKind::Ln
            | TokenKind::Log
            | TokenKind::Trig(_)
            | TokenKind::InverseTrig(_)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::*;

    #[test]
    fn lex_recognizes_numbers_and_operators() {
        let tokens = lex("2+3.5*x").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number(2.0),
                TokenKind::Plus,
                TokenKind::Number(3.5),
                TokenKind::Star,
                TokenKind::X,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn longest_prefix_prefers_four_letter_inverse_trig() {
        let tokens = lex("asin(x)").unwrap();
        assert_eq!(
            tokens[0].kind,
            TokenKind::InverseTrig(InverseTrigKind::Asin)
        );
    }

    #[test]
    fn pi_and_PI_both_resolve() {
        #![allow(non_snake_case, reason = "mirrors the case-sensitive pi/PI pair")]
        assert_eq!(lex("pi").unwrap()[0].kind, TokenKind::Pi);
        assert_eq!(lex("PI").unwrap()[0].kind, TokenKind::Pi);
    }

    #[test]
    fn unrecognized_character_reports_its_position() {
        let err = lex("2+@").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedCharacter { position: 2 });
    }

    #[test]
    fn starts_atom_accepts_every_atom_leading_token_kind() {
        assert!(starts_atom(TokenKind::Number(1.0)));
        assert!(starts_atom(TokenKind::LParen));
        assert!(starts_atom(TokenKind::X));
        assert!(starts_atom(TokenKind::Log));
        assert!(!starts_atom(TokenKind::Star));
        assert!(!starts_atom(TokenKind::Underscore));
        assert!(!starts_atom(TokenKind::RParen));
    }
}
