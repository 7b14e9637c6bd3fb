//! Sampling fitted curves for display.
//!
//! A fitted polynomial is drawn as a set of discrete points spaced evenly
//! between an anchor x (first or last observation) and the extrapolation target.

use crate::domain::{Dataset, Extrapolation};
use crate::fit::{FitError, PolyFit};

/// Upper bound on the points sampled per curve.
pub const MAX_SAMPLES: usize = 1_000_000;

/// A fitted polynomial together with its sampled display points.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve {
    pub fit: PolyFit,
    pub samples: Vec<(f64, f64)>,
}

impl FittedCurve {
    pub fn degree(&self) -> usize {
        self.fit.degree
    }
}

/// Number of samples drawn for a curve.
///
/// `max(1, trunc(target - last_x)) * density`: one block of `density` samples per
/// whole unit of extrapolation distance, and at least one block.
pub fn sample_count(target: f64, last_x: f64, density: usize) -> usize {
    let units = (target - last_x).trunc();
    let units = if units.is_finite() && units >= 1.0 {
        units as usize
    } else {
        1
    };
    units.saturating_mul(density)
}

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// `n == 1` yields `[start]`; `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample a fitted polynomial on `linspace(anchor, target, n)`.
pub fn sample_fit(fit: &PolyFit, anchor: f64, target: f64, n: usize) -> Vec<(f64, f64)> {
    linspace(anchor, target, n)
        .into_iter()
        .map(|x| (x, fit.predict(x)))
        .collect()
}

/// Sample every fit according to the extrapolation settings.
///
/// Fails with [`FitError::TooManySamples`] when the target is so far away that
/// a curve would need more than [`MAX_SAMPLES`] points.
pub fn sample_curves(
    data: &Dataset,
    fits: Vec<PolyFit>,
    settings: &Extrapolation,
) -> Result<Vec<FittedCurve>, FitError> {
    let anchor = settings.sampling.anchor(data);
    let n = sample_count(settings.target, data.last_x(), settings.density);
    if n > MAX_SAMPLES {
        return Err(FitError::TooManySamples {
            target: settings.target,
            max: MAX_SAMPLES,
        });
    }

    Ok(fits
        .into_iter()
        .map(|fit| {
            let samples = sample_fit(&fit, anchor, settings.target, n);
            FittedCurve { fit, samples }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DegreeSet, Sampling};
    use crate::fit::fit_degrees;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sample_count_is_whole_units_times_density() {
        assert_eq!(sample_count(5.0, 3.0, 10), 20);
        assert_eq!(sample_count(5.9, 3.0, 10), 20);
        assert_eq!(sample_count(13.0, 3.0, 10), 100);
        assert_eq!(sample_count(5.0, 3.0, 20), 40);
    }

    #[test]
    fn sample_count_has_a_floor_of_one_block() {
        assert_eq!(sample_count(3.5, 3.0, 10), 10);
        assert_eq!(sample_count(3.0, 3.0, 10), 10);
        assert_eq!(sample_count(1.0, 3.0, 10), 10);
    }

    #[test]
    fn sample_count_saturates_for_huge_targets() {
        assert_eq!(sample_count(1e300, 3.0, 10), usize::MAX);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let xs = linspace(3.0, 5.0, 5);
        assert_eq!(xs, vec![3.0, 3.5, 4.0, 4.5, 5.0]);
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        assert!(linspace(2.0, 9.0, 0).is_empty());
    }

    #[test]
    fn tail_sampling_of_exact_quadratic_reaches_target() {
        let data = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        let settings = Extrapolation {
            target: 5.0,
            degrees: DegreeSet::default(),
            sampling: Sampling::Tail,
            density: Sampling::Tail.default_density(),
        };
        let fits = fit_degrees(&data, &settings.degrees).unwrap();
        let curves = sample_curves(&data, fits, &settings).unwrap();

        assert_eq!(curves.len(), 1);
        let samples = &curves[0].samples;
        assert_eq!(samples.len(), 20);
        assert_eq!(samples[0].0, 3.0);

        let (x_last, y_last) = samples[samples.len() - 1];
        assert_eq!(x_last, 5.0);
        assert_abs_diff_eq!(y_last, 25.0, epsilon = 1e-8);
    }

    #[test]
    fn span_sampling_starts_at_first_observation() {
        let data = Dataset::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 3.0, 2.0, 5.0]).unwrap();
        let settings = Extrapolation {
            target: 6.0,
            degrees: DegreeSet::from_requested(Some(&[1, 2])),
            sampling: Sampling::Span,
            density: Sampling::Span.default_density(),
        };
        let fits = fit_degrees(&data, &settings.degrees).unwrap();
        let curves = sample_curves(&data, fits, &settings).unwrap();

        assert_eq!(curves.len(), 2);
        for curve in &curves {
            assert_eq!(curve.samples.len(), 40);
            assert_eq!(curve.samples[0].0, 1.0);
            assert_eq!(curve.samples[39].0, 6.0);
        }
    }

    #[test]
    fn distant_target_is_rejected_before_allocating() {
        let data = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        let fits = fit_degrees(&data, &DegreeSet::default()).unwrap();

        for target in [1e300, 1e9] {
            let settings = Extrapolation {
                target,
                degrees: DegreeSet::default(),
                sampling: Sampling::Tail,
                density: 10,
            };
            let err = sample_curves(&data, fits.clone(), &settings).unwrap_err();
            assert!(matches!(err, FitError::TooManySamples { max: MAX_SAMPLES, .. }));
        }
    }

    #[test]
    fn target_at_the_sample_limit_is_accepted() {
        let data = Dataset::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        let fits = fit_degrees(&data, &DegreeSet::from_requested(Some(&[1]))).unwrap();
        let settings = Extrapolation {
            target: 1.0 + (MAX_SAMPLES / 10) as f64,
            degrees: DegreeSet::from_requested(Some(&[1])),
            sampling: Sampling::Tail,
            density: 10,
        };
        let curves = sample_curves(&data, fits, &settings).unwrap();
        assert_eq!(curves[0].samples.len(), MAX_SAMPLES);
    }
}
