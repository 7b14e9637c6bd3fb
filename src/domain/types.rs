//! Shared domain types.
//!
//! Everything here is built once from the command line and never mutated
//! afterwards; the whole model lives for a single run.

use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Highest polynomial degree the tool will fit.
pub const MAX_DEGREE: usize = 3;

/// Degree used when `--degree` is not supplied.
pub const DEFAULT_DEGREE: usize = 2;

/// Ordered x values with a parallel sequence of y values.
///
/// Insertion order is plot order. Both sequences are non-empty and equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, AppError> {
        if x.is_empty() || y.is_empty() {
            return Err(AppError::new(3, "Both x and y need at least one value."));
        }
        if x.len() != y.len() {
            return Err(AppError::new(
                3,
                format!(
                    "x and y must have the same length (got {} x values and {} y values).",
                    x.len(),
                    y.len()
                ),
            ));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn first_x(&self) -> f64 {
        self.x[0]
    }

    pub fn last_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// `(x, y)` pairs in plot order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Axis labels; default to `"x"` and `"y"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
        }
    }
}

/// Polynomial degrees to fit and overlay, ascending and capped at [`MAX_DEGREE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeSet(BTreeSet<usize>);

impl DegreeSet {
    /// Build the effective degree set from the raw `--degree` values.
    ///
    /// `None` means the flag was never given and yields `{2}`. A supplied list keeps
    /// only degrees `<= MAX_DEGREE`, which may leave the set empty.
    pub fn from_requested(requested: Option<&[usize]>) -> Self {
        match requested {
            None => Self(BTreeSet::from([DEFAULT_DEGREE])),
            Some(list) => Self(list.iter().copied().filter(|&d| d <= MAX_DEGREE).collect()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DegreeSet {
    fn default() -> Self {
        Self::from_requested(None)
    }
}

/// Where curve sampling starts and how densely it samples.
///
/// `Tail` samples from the last observed x onwards (10 samples per unit);
/// `Span` samples from the first observed x (20 samples per unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    #[default]
    Tail,
    Span,
}

impl Sampling {
    /// The x value from which the fitted curve is sampled.
    pub fn anchor(self, data: &Dataset) -> f64 {
        match self {
            Sampling::Tail => data.last_x(),
            Sampling::Span => data.first_x(),
        }
    }

    /// Samples per whole unit between the last observation and the target.
    pub fn default_density(self) -> usize {
        match self {
            Sampling::Tail => 10,
            Sampling::Span => 20,
        }
    }
}

/// Fit-and-extrapolate settings; only present when `--extrapolate` was given.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrapolation {
    pub target: f64,
    pub degrees: DegreeSet,
    pub sampling: Sampling,
    pub density: usize,
}

/// Everything the pipeline needs besides the dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotRequest {
    pub labels: AxisLabels,
    pub extrapolation: Option<Extrapolation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_rejects_mismatched_lengths() {
        let err = Dataset::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn dataset_rejects_empty_input() {
        assert!(Dataset::new(vec![], vec![]).is_err());
    }

    #[test]
    fn dataset_keeps_insertion_order() {
        let data = Dataset::new(vec![3.0, 1.0, 2.0], vec![9.0, 1.0, 4.0]).unwrap();
        assert_eq!(data.points(), vec![(3.0, 9.0), (1.0, 1.0), (2.0, 4.0)]);
        assert_eq!(data.first_x(), 3.0);
        assert_eq!(data.last_x(), 2.0);
    }

    #[test]
    fn degrees_default_to_two_when_not_requested() {
        let degrees = DegreeSet::from_requested(None);
        assert_eq!(degrees.iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(degrees, DegreeSet::from_requested(Some(&[2])));
    }

    #[test]
    fn degrees_above_cap_are_dropped() {
        let degrees = DegreeSet::from_requested(Some(&[2, 3, 4]));
        assert_eq!(degrees.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn fully_filtered_degrees_stay_empty() {
        let degrees = DegreeSet::from_requested(Some(&[5, 7]));
        assert!(degrees.is_empty());
    }

    #[test]
    fn sampling_anchor_follows_profile() {
        let data = Dataset::new(vec![1.0, 2.0, 4.0], vec![0.0, 0.0, 0.0]).unwrap();
        assert_eq!(Sampling::Tail.anchor(&data), 4.0);
        assert_eq!(Sampling::Span.anchor(&data), 1.0);
        assert_eq!(Sampling::Tail.default_density(), 10);
        assert_eq!(Sampling::Span.default_density(), 20);
    }
}
