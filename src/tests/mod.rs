//! Crate-level integration and property tests, colocated the way this
//! lineage places its cross-module test suites (a `tests` submodule
//! under `#[cfg(test)]` in the crate root, rather than a separate
//! `tests/` directory, since these tests exercise internal items that
//! are not part of the public surface).

#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::float_cmp,
    reason = "test-only assertions"
)]

use quickcheck::{quickcheck, TestResult};

use crate::core::Expr;
use crate::matrix::Matrix;
use crate::numerics::trapezoid;
use crate::parser::parse;
use crate::simplification::optimize;

#[test]
fn clone_preserves_evaluation_for_every_x() {
    let e = parse("x^(2)+2x+1").unwrap();
    for x in [-3.0, -0.5, 0.0, 1.25, 10.0] {
        assert_eq!(e.clone().evaluate(x), e.evaluate(x));
    }
}

#[test]
fn optimize_preserves_value_within_tolerance() {
    let e = parse("sin(x)*x-ln(x)/2+x^(3)").unwrap();
    let optimized = optimize(e.clone());
    for x in [0.5, 1.0, 2.5, 5.0] {
        let before = e.evaluate(x);
        let after = optimized.evaluate(x);
        assert!((before - after).abs() < 1e-9, "{before} vs {after} at x={x}");
    }
}

#[test]
fn optimize_on_constants_only_yields_a_single_constant() {
    let e = Expr::SumChain(vec![
        (crate::core::Sign::Plus, Expr::Constant(1.0)),
        (crate::core::Sign::Minus, Expr::Constant(2.0)),
        (crate::core::Sign::Plus, Expr::Constant(3.0)),
    ]);
    assert!(matches!(optimize(e), Expr::Constant(_)));
}

#[test]
fn print_then_parse_round_trips_for_a_sum_chain() {
    let e = parse("x+1-2").unwrap();
    let printed = e.to_string();
    let reparsed = parse(&printed).unwrap();
    assert_eq!(e.evaluate(5.0), reparsed.evaluate(5.0));
}

#[test]
fn identity_matrix_determinant_is_one_for_several_sizes() {
    for n in 1..=5 {
        let mut rows = vec![vec![0.0; n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        let m = Matrix::from_rows(rows);
        assert_eq!(m.determinant(), 1.0);
    }
}

fn prop_trapezoid_exact_on_linear_functions(slope: f64, intercept: f64, n: u32) -> TestResult {
    if !slope.is_finite() || !intercept.is_finite() || n == 0 || n > 500 {
        return TestResult::discard();
    }
    let e = Expr::SumChain(vec![
        (
            crate::core::Sign::Plus,
            Expr::MulChain(vec![
                (crate::core::MulOp::Multiply, Expr::Constant(slope)),
                (crate::core::MulOp::Multiply, Expr::Variable),
            ]),
        ),
        (crate::core::Sign::Plus, Expr::Constant(intercept)),
    ]);
    let (a, b) = (0.0, 4.0);
    let exact = slope * (b * b - a * a) / 2.0 + intercept * (b - a);
    let approx = trapezoid(&e, a, b, n);
    TestResult::from_bool((exact - approx).abs() < 1e-6 * (1.0 + exact.abs()))
}

fn prop_evaluate_is_deterministic(x: f64) -> TestResult {
    if !x.is_finite() {
        return TestResult::discard();
    }
    let e = Expr::Power {
        base: Box::new(Expr::Variable),
        exponent: Box::new(Expr::Constant(2.0)),
    };
    TestResult::from_bool(e.evaluate(x) == e.clone().evaluate(x))
}

#[test]
fn quickcheck_trapezoid_exact_on_linear_functions() {
    quickcheck(prop_trapezoid_exact_on_linear_functions as fn(f64, f64, u32) -> TestResult);
}

#[test]
fn quickcheck_evaluate_is_deterministic() {
    quickcheck(prop_evaluate_is_deterministic as fn(f64) -> TestResult);
}
