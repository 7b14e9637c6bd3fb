//! Ordinary least squares solver.
//!
//! Every fit in this crate is a small problem of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! where each row `x_i` is a Vandermonde row `[1, x, x², ...]`.
//!
//! Implementation choices:
//! - Columns are normalised to unit length before solving, then the solution is
//!   scaled back. Raw Vandermonde columns can differ by many orders of magnitude
//!   (think timestamps squared), which wrecks the SVD tolerance.
//! - SVD handles tall (overdetermined) systems; nalgebra's `QR::solve` is intended
//!   for square systems.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Solve after scaling each column of `x` to unit Euclidean norm.
///
/// All-zero columns are left unscaled.
pub fn solve_least_squares_scaled(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let scales: Vec<f64> = x
        .column_iter()
        .map(|col| {
            let norm = col.norm();
            if norm > 0.0 && norm.is_finite() { norm } else { 1.0 }
        })
        .collect();

    let mut scaled = x.clone();
    for (j, scale) in scales.iter().enumerate() {
        scaled.column_mut(j).unscale_mut(*scale);
    }

    let beta = solve_least_squares(&scaled, y)?;
    Some(DVector::from_iterator(
        beta.len(),
        beta.iter().zip(scales.iter()).map(|(b, s)| b / s),
    ))
}
