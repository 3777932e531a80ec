#![forbid(unsafe_code)]
#![allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::similar_names,
    reason = "numeric code conventionally compares against exact identities (0, 1) and uses single-letter names matching the underlying math notation (a, b, x, h, n)"
)]
//! Interactive numerical-analysis workbench for single-variable real
//! functions.
//!
//! A formula string is [`parser::parse`]d into an [`core::Expr`] tree,
//! optionally [`simplification::optimize`]d, then consumed by one of the
//! numerical kernels in [`numerics`] or [`matrix`] through a single
//! `evaluate(x) -> f64` interface. The expression tree, parser and
//! optimizer are this crate's core; the numerical routines are short,
//! interchangeable textbook procedures layered on top.
//!
//! # Example
//!
//! ```
//! use exprlab::{parser, simplification};
//!
//! let tree = parser::parse("2x^(2)+3x-5").unwrap();
//! let tree = simplification::optimize(tree);
//! assert_eq!(tree.evaluate(2.0), 9.0);
//! ```

pub mod core;
pub mod error;
pub mod matrix;
pub mod numerics;
pub mod parser;
pub mod simplification;

pub use core::Expr;
pub use error::ParseError;

#[cfg(test)]
mod tests;
