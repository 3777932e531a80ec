//! Textual rendering of [`Expr`].
//!
//! The renderer is deliberately the left inverse of [`crate::parser::parse`]
//! for the subset of trees it produces: feeding `format!("{e}")` back
//! through `parse` yields a tree that is structurally equivalent to `e`
//! up to chain collapsing. There is exactly one output format (no LaTeX,
//! no Unicode) since the grammar this crate parses has exactly one
//! textual notation.

use std::fmt;

use super::expr::{Expr, InverseTrigKind, MulOp, Sign, TrigKind};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => write_number(f, *v),
            Self::Variable => write!(f, "x"),
            Self::SumChain(terms) => write_sum_chain(f, terms),
            Self::MulChain(factors) => write_mul_chain(f, factors),
            Self::Power { base, exponent } => write!(f, "{base}^({exponent})"),
            Self::Logarithm { base, argument } => write_logarithm(f, base, argument),
            Self::Trig { kind, argument } => write!(f, "{}({argument})", trig_name(*kind)),
            Self::InverseTrig { kind, argument } => {
                write!(f, "{}({argument})", inverse_trig_name(*kind))
            }
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        write!(f, "NaN")
    } else if v.is_infinite() {
        write!(f, "{}", if v < 0.0 { "-inf" } else { "inf" })
    } else {
        write!(f, "{v}")
    }
}

fn write_sum_chain(f: &mut fmt::Formatter<'_>, terms: &[(Sign, Expr)]) -> fmt::Result {
    write!(f, "(")?;
    for (i, (sign, term)) in terms.iter().enumerate() {
        match (i, sign) {
            (0, Sign::Plus) => write!(f, "{term}")?,
            (0, Sign::Minus) => write!(f, "-{term}")?,
            (_, Sign::Plus) => write!(f, "+{term}")?,
            (_, Sign::Minus) => write!(f, "-{term}")?,
        }
    }
    write!(f, ")")
}

fn write_mul_chain(f: &mut fmt::Formatter<'_>, factors: &[(MulOp, Expr)]) -> fmt::Result {
    for (i, (op, factor)) in factors.iter().enumerate() {
        if i == 0 {
            write!(f, "{factor}")?;
        } else {
            let sep = match op {
                MulOp::Multiply => "*",
                MulOp::Divide => "/",
            };
            write!(f, "{sep}{factor}")?;
        }
    }
    Ok(())
}

fn write_logarithm(f: &mut fmt::Formatter<'_>, base: &Expr, argument: &Expr) -> fmt::Result {
    write!(f, "log_({base})({argument})")
}

fn trig_name(kind: TrigKind) -> &'static str {
    match kind {
        TrigKind::Sin => "sin",
        TrigKind::Cos => "cos",
        TrigKind::Tan => "tan",
        TrigKind::Csc => "csc",
        TrigKind::Sec => "sec",
        TrigKind::Cot => "cot",
    }
}

fn inverse_trig_name(kind: InverseTrigKind) -> &'static str {
    match kind {
        InverseTrigKind::Asin => "asin",
        InverseTrigKind::Acos => "acos",
        InverseTrigKind::Atan => "atan",
        InverseTrigKind::Acsc => "acsc",
        InverseTrigKind::Asec => "asec",
        InverseTrigKind::Acot => "acot",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::*;

    #[test]
    fn sum_chain_renders_signed_concatenation() {
        let e = Expr::SumChain(vec![
            (Sign::Plus, Expr::Constant(2.0)),
            (Sign::Minus, Expr::Constant(5.0)),
        ]);
        assert_eq!(e.to_string(), "(2-5)");
    }

    #[test]
    fn mul_chain_renders_star_and_slash() {
        let e = Expr::MulChain(vec![
            (MulOp::Multiply, Expr::Constant(6.0)),
            (MulOp::Divide, Expr::Constant(2.0)),
        ]);
        assert_eq!(e.to_string(), "6/2");
    }

    #[test]
    fn power_renders_parenthesized_exponent() {
        let e = Expr::Power {
            base: Box::new(Expr::Variable),
            exponent: Box::new(Expr::Constant(2.0)),
        };
        assert_eq!(e.to_string(), "x^(2)");
    }

    #[test]
    fn natural_log_base_still_renders_with_underscore() {
        let e = Expr::Logarithm {
            base: Box::new(Expr::Constant(std::f64::consts::E)),
            argument: Box::new(Expr::Variable),
        };
        assert_eq!(e.to_string(), format!("log_({})(x)", std::f64::consts::E));
    }

    #[test]
    fn other_log_base_renders_with_underscore() {
        let e = Expr::Logarithm {
            base: Box::new(Expr::Constant(2.0)),
            argument: Box::new(Expr::Constant(8.0)),
        };
        assert_eq!(e.to_string(), "log_(2)(8)");
    }
}
