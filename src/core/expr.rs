//! The expression tree and its evaluator.
//!
//! `Expr` is a tagged variant (a plain Rust `enum`): every dispatch site
//! matches on it exhaustively, so adding or renaming a variant is a
//! compile error everywhere it matters instead of a runtime surprise.
//! Children are owned outright (`Box<Expr>` or `Vec<Expr>`); there is no
//! sharing, no reference counting and no interior mutability anywhere in
//! the tree, so `Clone` is always a true deep copy and dropping a node
//! always recursively frees every descendant exactly once.

/// Sign attached to one summand of a [`Expr::SumChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The summand is added.
    Plus,
    /// The summand is subtracted.
    Minus,
}

/// Whether one factor of a [`Expr::MulChain`] multiplies or divides the
/// running product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    /// The factor multiplies the chain's running product.
    Multiply,
    /// The factor divides the chain's running product.
    Divide,
}

/// The six primary trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigKind {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Cosecant, the reciprocal of sine.
    Csc,
    /// Secant, the reciprocal of cosine.
    Sec,
    /// Cotangent, the reciprocal of tangent.
    Cot,
}

/// The six inverse trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InverseTrigKind {
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Inverse cosecant, `acsc(x) = asin(1/x)`.
    Acsc,
    /// Inverse secant, `asec(x) = acos(1/x)`.
    Asec,
    /// Inverse cotangent, `acot(x) = atan(1/x)`.
    Acot,
}

/// A single-variable algebraic expression.
///
/// Exactly one of the shapes below. `Power`, `Logarithm`, `Trig` and
/// `InverseTrig` never hold an absent child: the parser always supplies
/// every argument (synthesizing a neutral `Constant(1.0)` where a
/// construction site has none, and defaulting a missing logarithm base
/// to 10), so evaluation and display never need to handle a "hole".
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A real scalar.
    Constant(f64),
    /// The free variable `x`.
    Variable,
    /// An ordered sequence of signed summands. Value is the signed sum;
    /// an empty chain is never produced post-optimization (see
    /// [`crate::simplification::optimize`]).
    SumChain(Vec<(Sign, Expr)>),
    /// An ordered sequence of multiplied-or-divided factors. Value is the
    /// product with divided factors inverted.
    MulChain(Vec<(MulOp, Expr)>),
    /// `base ^ exponent`.
    Power {
        /// The base.
        base: Box<Expr>,
        /// The exponent.
        exponent: Box<Expr>,
    },
    /// `log_base(argument)`, i.e. `ln(argument) / ln(base)`.
    Logarithm {
        /// The logarithm's base.
        base: Box<Expr>,
        /// The value the logarithm is taken of.
        argument: Box<Expr>,
    },
    /// One of the six primary trigonometric functions applied to `argument`.
    Trig {
        /// Which trigonometric function.
        kind: TrigKind,
        /// The function's argument.
        argument: Box<Expr>,
    },
    /// One of the six inverse trigonometric functions applied to `argument`.
    InverseTrig {
        /// Which inverse trigonometric function.
        kind: InverseTrigKind,
        /// The function's argument.
        argument: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the expression at `x`.
    ///
    /// Total for every well-formed tree: domain errors (`ln` of a
    /// negative number, `tan` at a singularity, division by zero) are
    /// not detected or short-circuited here. They propagate as IEEE
    /// `NaN`/`±Inf`, exactly like the underlying `f64` primitives would
    /// on their own.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Variable => x,
            Self::SumChain(terms) => terms.iter().fold(0.0, |acc, (sign, term)| match sign {
                Sign::Plus => acc + term.evaluate(x),
                Sign::Minus => acc - term.evaluate(x),
            }),
            Self::MulChain(factors) => factors.iter().fold(1.0, |acc, (op, factor)| match op {
                MulOp::Multiply => acc * factor.evaluate(x),
                MulOp::Divide => acc / factor.evaluate(x),
            }),
            Self::Power { base, exponent } => base.evaluate(x).powf(exponent.evaluate(x)),
            Self::Logarithm { base, argument } => {
                argument.evaluate(x).ln() / base.evaluate(x).ln()
            }
            Self::Trig { kind, argument } => {
                let a = argument.evaluate(x);
                match kind {
                    TrigKind::Sin => a.sin(),
                    TrigKind::Cos => a.cos(),
                    TrigKind::Tan => a.tan(),
                    TrigKind::Csc => 1.0 / a.sin(),
                    TrigKind::Sec => 1.0 / a.cos(),
                    TrigKind::Cot => 1.0 / a.tan(),
                }
            }
            Self::InverseTrig { kind, argument } => {
                let a = argument.evaluate(x);
                match kind {
                    InverseTrigKind::Asin => a.asin(),
                    InverseTrigKind::Acos => a.acos(),
                    InverseTrigKind::Atan => a.atan(),
                    InverseTrigKind::Acsc => (1.0 / a).asin(),
                    InverseTrigKind::Asec => (1.0 / a).acos(),
                    InverseTrigKind::Acot => (1.0 / a).atan(),
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::float_cmp,
    reason = "test-only assertions"
)]
mod tests {
    use super::*;

    #[test]
    fn constant_and_variable_evaluate_directly() {
        assert_eq!(Expr::Constant(3.5).evaluate(10.0), 3.5);
        assert_eq!(Expr::Variable.evaluate(42.0), 42.0);
    }

    #[test]
    fn sum_chain_applies_signs() {
        let e = Expr::SumChain(vec![
            (Sign::Plus, Expr::Constant(5.0)),
            (Sign::Minus, Expr::Constant(2.0)),
        ]);
        assert_eq!(e.evaluate(0.0), 3.0);
    }

    #[test]
    fn empty_chains_evaluate_to_identity() {
        assert_eq!(Expr::SumChain(vec![]).evaluate(0.0), 0.0);
        assert_eq!(Expr::MulChain(vec![]).evaluate(0.0), 1.0);
    }

    #[test]
    fn mul_chain_divides_factors() {
        let e = Expr::MulChain(vec![
            (MulOp::Multiply, Expr::Constant(6.0)),
            (MulOp::Divide, Expr::Constant(2.0)),
        ]);
        assert_eq!(e.evaluate(0.0), 3.0);
    }

    #[test]
    fn division_by_zero_propagates_as_infinity() {
        let e = Expr::MulChain(vec![
            (MulOp::Multiply, Expr::Constant(1.0)),
            (MulOp::Divide, Expr::Constant(0.0)),
        ]);
        assert!(e.evaluate(0.0).is_infinite());
    }

    #[test]
    fn reciprocal_trig_kinds_match_definitions() {
        let x = 0.7_f64;
        let csc = Expr::Trig {
            kind: TrigKind::Csc,
            argument: Box::new(Expr::Variable),
        };
        assert!((csc.evaluate(x) - 1.0 / x.sin()).abs() < 1e-12);
    }

    #[test]
    fn inverse_trig_reciprocal_definitions_hold() {
        let x = 2.0_f64;
        let acsc = Expr::InverseTrig {
            kind: InverseTrigKind::Acsc,
            argument: Box::new(Expr::Variable),
        };
        assert!((acsc.evaluate(x) - (1.0 / x).asin()).abs() < 1e-12);
    }

    #[test]
    fn power_uses_real_pow() {
        let e = Expr::Power {
            base: Box::new(Expr::Constant(2.0)),
            exponent: Box::new(Expr::Constant(10.0)),
        };
        assert_eq!(e.evaluate(0.0), 1024.0);
    }

    #[test]
    fn logarithm_divides_natural_logs() {
        let e = Expr::Logarithm {
            base: Box::new(Expr::Constant(2.0)),
            argument: Box::new(Expr::Constant(8.0)),
        };
        assert!((e.evaluate(0.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn clone_is_a_true_deep_copy() {
        let e = Expr::SumChain(vec![(Sign::Plus, Expr::Variable)]);
        let cloned = e.clone();
        assert_eq!(e.evaluate(4.0), cloned.evaluate(4.0));
    }
}
