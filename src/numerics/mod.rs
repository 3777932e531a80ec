//! Numerical kernels that consume an [`Expr`](crate::core::Expr) purely
//! through its `evaluate(x) -> f64` interface. None of these routines
//! inspect the tree's shape; they would work unchanged against any
//! `Fn(f64) -> f64`.

mod differentiate;
mod quadrature;
mod roots;

pub use differentiate::{backward_difference, central_difference, forward_difference};
pub use quadrature::{simpson_one_third, simpson_three_eighths, trapezoid};
pub use roots::{bisection, newton_raphson, regula_falsi};
