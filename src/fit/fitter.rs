//! Least-squares polynomial fitting.
//!
//! Given observations `(x_i, y_i)` and a degree `d`, we build the Vandermonde
//! design matrix and solve the OLS problem for the `d + 1` coefficients.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Dataset, DegreeSet};
use crate::math::solve_least_squares_scaled;
use crate::models::{fill_design_row, predict};

/// Errors that can occur while fitting a polynomial.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("No data points to fit.")]
    NoData,

    #[error("x and y must have the same length (got {x} and {y}).")]
    LengthMismatch { x: usize, y: usize },

    #[error("Fit input contains non-finite values.")]
    NonFinite,

    /// A degree-d polynomial needs at least d + 1 distinct x values.
    #[error(
        "Cannot fit a degree {degree} polynomial through {distinct} distinct x value(s); it needs at least degree + 1."
    )]
    DegreeTooHigh { degree: usize, distinct: usize },

    #[error("Least squares solve failed for the degree {degree} polynomial.")]
    Singular { degree: usize },

    #[error("Extrapolating to {target} would need more than {max} samples per curve.")]
    TooManySamples { target: f64, max: usize },
}

/// A fitted polynomial with its in-sample diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFit {
    pub degree: usize,
    /// Ascending power order.
    pub coefficients: Vec<f64>,
    pub sse: f64,
    pub rmse: f64,
}

impl PolyFit {
    pub fn predict(&self, x: f64) -> f64 {
        predict(&self.coefficients, x)
    }
}

/// Fit a single polynomial of the given degree.
pub fn fit_polynomial(x: &[f64], y: &[f64], degree: usize) -> Result<PolyFit, FitError> {
    if x.is_empty() || y.is_empty() {
        return Err(FitError::NoData);
    }
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return Err(FitError::NonFinite);
    }

    let distinct = count_distinct(x);
    if distinct < degree + 1 {
        return Err(FitError::DegreeTooHigh { degree, distinct });
    }

    let n = x.len();
    let p = degree + 1;

    let mut design = DMatrix::<f64>::zeros(n, p);
    let mut row = vec![0.0; p];
    for (i, &xi) in x.iter().enumerate() {
        fill_design_row(degree, xi, &mut row);
        for (j, &v) in row.iter().enumerate() {
            design[(i, j)] = v;
        }
    }
    let rhs = DVector::from_row_slice(y);

    let beta = solve_least_squares_scaled(&design, &rhs).ok_or(FitError::Singular { degree })?;
    let coefficients: Vec<f64> = beta.iter().copied().collect();

    let sse: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let r = yi - predict(&coefficients, xi);
            r * r
        })
        .sum();
    let rmse = (sse / n as f64).sqrt();

    debug!(degree, rmse, ?coefficients, "fitted polynomial");

    Ok(PolyFit {
        degree,
        coefficients,
        sse,
        rmse,
    })
}

/// Fit every requested degree against the full dataset, in ascending degree order.
pub fn fit_degrees(data: &Dataset, degrees: &DegreeSet) -> Result<Vec<PolyFit>, FitError> {
    degrees
        .iter()
        .map(|degree| fit_polynomial(data.x(), data.y(), degree))
        .collect()
}

fn count_distinct(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}
