//! Reporting: formatted fit summaries for terminal output.
//!
//! Formatting lives here so the fitting code stays free of presentation concerns.

use crate::fit::FittedCurve;

/// One summary line per fitted curve:
/// `degree 2 | rmse 0.0000 | y(5) = 25.0000 | coeffs [0, 0, 1]`.
pub fn format_fit_lines(curves: &[FittedCurve], target: f64) -> Vec<String> {
    curves
        .iter()
        .map(|c| {
            let coeffs: Vec<String> = c.fit.coefficients.iter().map(|v| format_coefficient(*v)).collect();
            format!(
                "degree {} | rmse {:.4} | y({}) = {:.4} | coeffs [{}]",
                c.fit.degree,
                c.fit.rmse,
                target,
                c.fit.predict(target),
                coeffs.join(", ")
            )
        })
        .collect()
}

/// Full summary block printed after a run with extrapolation.
pub fn format_fit_summary(curves: &[FittedCurve], target: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!("Fits extrapolated to x = {target}:\n"));
    if curves.is_empty() {
        out.push_str("  (no degrees to fit)\n");
    }
    for line in format_fit_lines(curves, target) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Coefficients in ascending power order; tiny solver noise prints as 0.
fn format_coefficient(v: f64) -> String {
    if v.abs() < 1e-12 {
        "0".to_string()
    } else {
        format!("{v:.6}")
    }
}
