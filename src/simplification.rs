//! Bottom-up constant-folding optimizer.
//!
//! `optimize` never fails and never needs a "destroy the original node"
//! step to hand-write: it takes `Expr` by value, and every subtree it
//! discards along the way is simply dropped when the enclosing `match`
//! arm finishes, exactly as Rust ownership already guarantees.

use crate::core::{Expr, InverseTrigKind, MulOp, Sign, TrigKind};

/// Recursively fold constant subtrees and prune chain entries that are
/// neutral with respect to their chain's identity.
///
/// - `Power`/`Logarithm`/`Trig`/`InverseTrig` fold to a single `Constant`
///   once every child is itself constant.
/// - `SumChain` collects its constant summands into one trailing
///   `Constant`, omitted entirely if it equals the chain's identity (0).
/// - `MulChain` does the same with identity 1, and additionally folds
///   the whole chain to `Constant(0.0)` the moment a zero numerator
///   factor appears — the source's corresponding omission is a bug this
///   crate does not reproduce.
#[must_use]
pub fn optimize(expr: Expr) -> Expr {
    match expr {
        Expr::Constant(_) | Expr::Variable => expr,
        Expr::SumChain(terms) => optimize_sum_chain(terms),
        Expr::MulChain(factors) => optimize_mul_chain(factors),
        Expr::Power { base, exponent } => {
            let base = optimize(*base);
            let exponent = optimize(*exponent);
            match (&base, &exponent) {
                (Expr::Constant(b), Expr::Constant(e)) => Expr::Constant(b.powf(*e)),
                _ => Expr::Power {
                    base: Box::new(base),
                    exponent: Box::new(exponent),
                },
            }
        }
        Expr::Logarithm { base, argument } => {
            let base = optimize(*base);
            let argument = optimize(*argument);
            match (&base, &argument) {
                (Expr::Constant(b), Expr::Constant(a)) => Expr::Constant(a.ln() / b.ln()),
                _ => Expr::Logarithm {
                    base: Box::new(base),
                    argument: Box::new(argument),
                },
            }
        }
        Expr::Trig { kind, argument } => {
            let argument = optimize(*argument);
            match &argument {
                Expr::Constant(a) => Expr::Constant(eval_trig(kind, *a)),
                _ => Expr::Trig {
                    kind,
                    argument: Box::new(argument),
                },
            }
        }
        Expr::InverseTrig { kind, argument } => {
            let argument = optimize(*argument);
            match &argument {
                Expr::Constant(a) => Expr::Constant(eval_inverse_trig(kind, *a)),
                _ => Expr::InverseTrig {
                    kind,
                    argument: Box::new(argument),
                },
            }
        }
    }
}

fn eval_trig(kind: TrigKind, a: f64) -> f64 {
    match kind {
        TrigKind::Sin => a.sin(),
        TrigKind::Cos => a.cos(),
        TrigKind::Tan => a.tan(),
        TrigKind::Csc => 1.0 / a.sin(),
        TrigKind::Sec => 1.0 / a.cos(),
        TrigKind::Cot => 1.0 / a.tan(),
    }
}

fn eval_inverse_trig(kind: InverseTrigKind, a: f64) -> f64 {
    match kind {
        InverseTrigKind::Asin => a.asin(),
        InverseTrigKind::Acos => a.acos(),
        InverseTrigKind::Atan => a.atan(),
        InverseTrigKind::Acsc => (1.0 / a).asin(),
        InverseTrigKind::Asec => (1.0 / a).acos(),
        InverseTrigKind::Acot => (1.0 / a).atan(),
    }
}

fn optimize_sum_chain(terms: Vec<(Sign, Expr)>) -> Expr {
    let mut folded = 0.0_f64;
    let mut rest = Vec::with_capacity(terms.len());
    for (sign, term) in terms {
        match optimize(term) {
            Expr::Constant(v) => match sign {
                Sign::Plus => folded += v,
                Sign::Minus => folded -= v,
            },
            other => rest.push((sign, other)),
        }
    }
    if rest.is_empty() {
        Expr::Constant(folded)
    } else {
        if folded != 0.0 {
            rest.push((Sign::Plus, Expr::Constant(folded)));
        }
        if rest.len() == 1 && matches!(rest[0].0, Sign::Plus) {
            rest.pop().map_or(Expr::Constant(0.0), |(_, term)| term)
        } else {
            Expr::SumChain(rest)
        }
    }
}

fn optimize_mul_chain(factors: Vec<(MulOp, Expr)>) -> Expr {
    let mut folded = 1.0_f64;
    let mut rest = Vec::with_capacity(factors.len());
    for (op, factor) in factors {
        match optimize(factor) {
            Expr::Constant(v) => {
                if matches!(op, MulOp::Multiply) && v == 0.0 {
                    return Expr::Constant(0.0);
                }
                match op {
                    MulOp::Multiply => folded *= v,
                    MulOp::Divide => folded /= v,
                }
            }
            other => rest.push((op, other)),
        }
    }
    if rest.is_empty() {
        Expr::Constant(folded)
    } else {
        if folded != 1.0 {
            rest.push((MulOp::Multiply, Expr::Constant(folded)));
        }
        if rest.len() == 1 && matches!(rest[0].0, MulOp::Multiply) {
            rest.pop().map_or(Expr::Constant(1.0), |(_, factor)| factor)
        } else {
            Expr::MulChain(rest)
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
    use crate::parser::parse;

    #[test]
    fn all_constant_tree_folds_to_a_single_constant() {
        let e = parse("2+3*4").unwrap();
        assert_eq!(optimize(e), Expr::Constant(14.0));
    }

    #[test]
    fn end_to_end_scenario_two() {
        let e = parse("sin(pi/2)").unwrap();
        let optimized = optimize(e);
        match optimized {
            Expr::Constant(v) => assert!((v - 1.0).abs() < 1e-12),
            other => panic!("expected a folded constant, got {other:?}"),
        }
    }

    #[test]
    fn zero_numerator_factor_annihilates_the_whole_mul_chain() {
        let e = Expr::MulChain(vec![
            (MulOp::Multiply, Expr::Constant(0.0)),
            (MulOp::Multiply, Expr::Variable),
        ]);
        assert_eq!(optimize(e), Expr::Constant(0.0));
    }

    #[test]
    fn optimize_preserves_semantics_on_mixed_trees() {
        let e = parse("2x^(2)+3x-5").unwrap();
        let before = e.evaluate(2.0);
        let after = optimize(e).evaluate(2.0);
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn post_optimization_sum_chain_has_at_most_one_constant() {
        let e = parse("x+1+2+3").unwrap();
        if let Expr::SumChain(terms) = optimize(e) {
            let constants = terms
                .iter()
                .filter(|(_, t)| matches!(t, Expr::Constant(_)))
                .count();
            assert!(constants <= 1);
        }
    }
}
