//! Numerical differentiation by finite difference.

use crate::core::Expr;

/// Forward difference: `(f(x+h) - f(x)) / h`.
#[must_use]
pub fn forward_difference(e: &Expr, x: f64, h: f64) -> f64 {
    (e.evaluate(x + h) - e.evaluate(x)) / h
}

/// Backward difference: `(f(x) - f(x-h)) / h`.
#[must_use]
pub fn backward_difference(e: &Expr, x: f64, h: f64) -> f64 {
    (e.evaluate(x) - e.evaluate(x - h)) / h
}

/// Central difference: `(f(x+h) - f(x-h)) / (2h)`.
#[must_use]
pub fn central_difference(e: &Expr, x: f64, h: f64) -> f64 {
    (e.evaluate(x + h) - e.evaluate(x - h)) / (2.0 * h)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn central_difference_approximates_the_derivative_of_x_squared() {
        let e = parse("x^(2)").unwrap();
        let approx = central_difference(&e, 3.0, 1e-4);
        assert!((approx - 6.0).abs() < 1e-3);
    }

    #[test]
    fn forward_and_backward_bracket_the_central_estimate() {
        let e = parse("sin(x)").unwrap();
        let fwd = forward_difference(&e, 1.0, 1e-4);
        let bwd = backward_difference(&e, 1.0, 1e-4);
        let central = central_difference(&e, 1.0, 1e-4);
        assert!(central > bwd.min(fwd) - 1e-6 && central < fwd.max(bwd) + 1e-6);
    }
}
