//! Polynomial evaluation primitives.
//!
//! The fitter relies on two operations:
//! - build a design row for a given x and degree (for OLS)
//! - predict y(x) given coefficients (for curves, residuals and reports)
//!
//! Coefficients are stored in ascending power order: `c[0] + c[1]·x + c[2]·x² + ...`.

/// Fill a Vandermonde design row `[1, x, x², ..., x^degree]`.
///
/// `out` must hold at least `degree + 1` slots (checked in debug builds).
pub fn fill_design_row(degree: usize, x: f64, out: &mut [f64]) {
    debug_assert!(out.len() > degree, "design row too short for degree {degree}");
    let mut power = 1.0;
    for slot in out.iter_mut().take(degree + 1) {
        *slot = power;
        power *= x;
    }
}

/// Evaluate the polynomial at `x` using Horner's rule.
pub fn predict(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
