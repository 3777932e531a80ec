//! Composite quadrature rules.

use crate::core::Expr;

/// Composite trapezoid rule on `[a, b]` with `n` panels.
#[must_use]
pub fn trapezoid(e: &Expr, a: f64, b: f64, n: u32) -> f64 {
    let h = (b - a) / f64::from(n);
    let mut sum = (e.evaluate(a) + e.evaluate(b)) / 2.0;
    for i in 1..n {
        sum += e.evaluate(a + f64::from(i) * h);
    }
    sum * h
}

/// Composite Simpson's 1/3 rule on `[a, b]` with `n` panels.
///
/// Requires an even `n`; returns `NaN` otherwise, since the 1/3 rule
/// pairs panels and an odd count leaves one unpaired.
#[must_use]
pub fn simpson_one_third(e: &Expr, a: f64, b: f64, n: u32) -> f64 {
    if n % 2 != 0 {
        return f64::NAN;
    }
    let h = (b - a) / f64::from(n);
    let mut sum = e.evaluate(a) + e.evaluate(b);
    for i in 1..n {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * e.evaluate(a + f64::from(i) * h);
    }
    sum * h / 3.0
}

/// Composite Simpson's 3/8 rule on `[a, b]` with `n` panels, each panel
/// using the four-point 3/8 rule on its endpoints and two interior
/// thirds.
#[must_use]
pub fn simpson_three_eighths(e: &Expr, a: f64, b: f64, n: u32) -> f64 {
    let h = (b - a) / f64::from(n);
    let mut total = 0.0;
    for panel in 0..n {
        let x0 = a + f64::from(panel) * h;
        let third = h / 3.0;
        let y0 = e.evaluate(x0);
        let y1 = e.evaluate(x0 + third);
        let y2 = e.evaluate(x0 + 2.0 * third);
        let y3 = e.evaluate(x0 + h);
        total += (3.0 * third / 8.0) * (y0 + 3.0 * y1 + 3.0 * y2 + y3);
    }
    total
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "test-only assertions")]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn trapezoid_is_exact_on_a_linear_function() {
        let e = parse("2x+1").unwrap();
        let approx = trapezoid(&e, 0.0, 10.0, 7);
        assert!((approx - 120.0).abs() < 1e-9);
    }

    #[test]
    fn simpson_one_third_rejects_odd_n() {
        let e = parse("x").unwrap();
        assert!(simpson_one_third(&e, 0.0, 1.0, 3).is_nan());
    }

    #[test]
    fn end_to_end_scenario_four() {
        let e = parse("x^(2)").unwrap();
        let result = simpson_one_third(&e, 0.0, 1.0, 2);
        assert!((result - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn simpson_one_third_is_exact_on_cubics() {
        let e = parse("x^(3)").unwrap();
        let result = simpson_one_third(&e, 0.0, 2.0, 4);
        assert!((result - 4.0).abs() < 1e-9);
    }

    #[test]
    fn simpson_three_eighths_matches_one_third_on_a_quadratic() {
        let e = parse("x^(2)").unwrap();
        let a = simpson_one_third(&e, 0.0, 3.0, 6);
        let b = simpson_three_eighths(&e, 0.0, 3.0, 2);
        assert!((a - b).abs() < 1e-9);
    }
}
