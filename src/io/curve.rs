//! Write fitted-curve JSON files.
//!
//! Curve JSON is the portable representation of a run's fits:
//! - axis labels, extrapolation target and sampling profile
//! - per degree: coefficients (ascending powers), diagnostics and sampled points

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{AxisLabels, Extrapolation, Sampling};
use crate::error::AppError;
use crate::fit::FittedCurve;

/// A saved curve file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub labels: AxisLabels,
    pub target: f64,
    pub sampling: Sampling,
    pub density: usize,
    pub curves: Vec<CurveEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveEntry {
    pub degree: usize,
    pub coefficients: Vec<f64>,
    pub sse: f64,
    pub rmse: f64,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveFile {
    pub fn new(labels: &AxisLabels, settings: &Extrapolation, curves: &[FittedCurve]) -> Self {
        Self {
            tool: "cliplot".to_string(),
            labels: labels.clone(),
            target: settings.target,
            sampling: settings.sampling,
            density: settings.density,
            curves: curves
                .iter()
                .map(|c| CurveEntry {
                    degree: c.fit.degree,
                    coefficients: c.fit.coefficients.clone(),
                    sse: c.fit.sse,
                    rmse: c.fit.rmse,
                    grid: CurveGrid {
                        x: c.samples.iter().map(|&(x, _)| x).collect(),
                        y: c.samples.iter().map(|&(_, y)| y).collect(),
                    },
                })
                .collect(),
        }
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(5, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(5, format!("Failed to write curve JSON: {e}")))?;

    info!(path = %path.display(), curves = curve.curves.len(), "wrote curve json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, DegreeSet};
    use crate::fit::{fit_degrees, sample_curves};

    #[test]
    fn writes_curves_with_grid() {
        let data = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        let settings = Extrapolation {
            target: 5.0,
            degrees: DegreeSet::from_requested(Some(&[1, 2])),
            sampling: Sampling::Tail,
            density: 10,
        };
        let fits = fit_degrees(&data, &settings.degrees).unwrap();
        let curves = sample_curves(&data, fits, &settings).unwrap();
        let file = CurveFile::new(&AxisLabels::default(), &settings, &curves);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        write_curve_json(&path, &file).unwrap();

        let json: serde_json::Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(json["tool"], "cliplot");
        assert_eq!(json["sampling"], "tail");
        assert_eq!(json["curves"].as_array().unwrap().len(), 2);
        assert_eq!(json["curves"][1]["degree"], 2);
        assert_eq!(json["curves"][1]["coefficients"].as_array().unwrap().len(), 3);
        assert_eq!(json["curves"][1]["grid"]["x"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn unwritable_path_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("curve.json");
        let settings = Extrapolation {
            target: 1.0,
            degrees: DegreeSet::default(),
            sampling: Sampling::Tail,
            density: 10,
        };
        let file = CurveFile::new(&AxisLabels::default(), &settings, &[]);
        let err = write_curve_json(&path, &file).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
