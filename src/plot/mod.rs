//! Figure construction and rendering backends.
//!
//! A [`Figure`] is the explicit, render-ready description of one plot: its layers
//! (raw series, fitted curve samples) and its axis bounds. It is built once per
//! run and borrowed by whichever backend displays it:
//!
//! - [`chart`]: Plotters drawing routine shared by the terminal viewer and SVG output
//! - [`svg`]: SVG file writer
//! - [`ascii`]: fixed-size character grid for non-interactive output

pub mod ascii;
pub mod chart;
pub mod svg;

pub use ascii::render_ascii;
pub use chart::{ChartTheme, MarkerMode, draw_figure};
pub use svg::write_svg;

use crate::domain::{AxisLabels, Dataset};
use crate::fit::FittedCurve;

/// Marker glyph family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Cross,
    Triangle,
    Square,
}

impl MarkerShape {
    /// Character used by the ASCII renderer.
    pub fn glyph(self) -> char {
        match self {
            MarkerShape::Circle => 'o',
            MarkerShape::Cross => '+',
            MarkerShape::Triangle => '^',
            MarkerShape::Square => '#',
        }
    }
}

/// Shape + RGB color of a marker layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub color: [u8; 3],
}

/// Raw observations when a fit is overlaid: red circles.
pub const RAW_MARKER: MarkerStyle = MarkerStyle {
    shape: MarkerShape::Circle,
    color: [220, 40, 40],
};

/// Fitted-curve styles, indexed by `degree % 3`.
const CURVE_MARKERS: [MarkerStyle; 3] = [
    MarkerStyle {
        shape: MarkerShape::Square,
        color: [200, 0, 200],
    },
    MarkerStyle {
        shape: MarkerShape::Triangle,
        color: [0, 170, 0],
    },
    MarkerStyle {
        shape: MarkerShape::Cross,
        color: [40, 110, 240],
    },
];

/// Color of the connected raw series when no fit is requested.
pub const LINE_COLOR: [u8; 3] = [40, 110, 240];

impl MarkerStyle {
    pub fn for_degree(degree: usize) -> Self {
        CURVE_MARKERS[degree % CURVE_MARKERS.len()]
    }
}

/// One drawable series.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Points joined in order, no markers.
    Line { points: Vec<(f64, f64)> },
    /// Discrete markers.
    Markers {
        label: String,
        style: MarkerStyle,
        points: Vec<(f64, f64)>,
    },
}

/// Axis bounds `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    fn enclosing(points: &[(f64, f64)]) -> Self {
        let mut b = Bounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for &(x, y) in points {
            b.include_x(x);
            b.include_y(y);
        }
        b
    }

    fn include_x(&mut self, x: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
    }

    fn include_y(&mut self, y: f64) {
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// `[x_min, x_max, y_min, y_max]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }

    /// Bounds safe to hand to a renderer: zero-width ranges are widened by ±0.5.
    pub fn for_display(&self) -> Bounds {
        let (x_min, x_max) = widen_degenerate(self.x_min, self.x_max);
        let (y_min, y_max) = widen_degenerate(self.y_min, self.y_max);
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if max > min { (min, max) } else { (min - 0.5, max + 0.5) }
}

/// Fitted curves to overlay, plus the extrapolation target.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    pub target: f64,
    pub curves: &'a [FittedCurve],
}

/// A fully described plot, scoped to one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub labels: AxisLabels,
    pub layers: Vec<Layer>,
    pub bounds: Bounds,
}

impl Figure {
    /// Build the figure.
    ///
    /// Without an overlay the dataset is a single connected line. With one, the raw
    /// points become markers, each curve adds a marker layer, x bounds cover the
    /// target and y bounds cover every predicted value.
    pub fn build(data: &Dataset, labels: &AxisLabels, overlay: Option<Overlay<'_>>) -> Self {
        let raw = data.points();
        let mut bounds = Bounds::enclosing(&raw);

        let layers = match overlay {
            None => vec![Layer::Line { points: raw }],
            Some(overlay) => {
                bounds.include_x(overlay.target);

                let mut layers = Vec::with_capacity(overlay.curves.len() + 1);
                layers.push(Layer::Markers {
                    label: "data".to_string(),
                    style: RAW_MARKER,
                    points: raw,
                });
                for curve in overlay.curves {
                    for &(_, y) in &curve.samples {
                        bounds.include_y(y);
                    }
                    layers.push(Layer::Markers {
                        label: format!("degree {}", curve.degree()),
                        style: MarkerStyle::for_degree(curve.degree()),
                        points: curve.samples.clone(),
                    });
                }
                layers
            }
        };

        Figure {
            labels: labels.clone(),
            layers,
            bounds,
        }
    }

    /// True when at least one fitted curve is overlaid.
    pub fn has_curves(&self) -> bool {
        self.layers
            .iter()
            .filter(|l| matches!(l, Layer::Markers { .. }))
            .count()
            > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DegreeSet, Extrapolation, Sampling};
    use crate::fit::{fit_degrees, sample_curves};
    use approx::assert_abs_diff_eq;

    fn quadratic() -> Dataset {
        Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap()
    }

    #[test]
    fn raw_figure_is_one_line_in_order() {
        let data = Dataset::new(vec![2.0, 0.0, 1.0], vec![5.0, -1.0, 3.0]).unwrap();
        let fig = Figure::build(&data, &AxisLabels::default(), None);

        assert_eq!(
            fig.layers,
            vec![Layer::Line {
                points: vec![(2.0, 5.0), (0.0, -1.0), (1.0, 3.0)]
            }]
        );
        assert_eq!(fig.bounds.as_array(), [0.0, 2.0, -1.0, 5.0]);
        assert!(!fig.has_curves());
    }

    #[test]
    fn overlay_bounds_cover_target_and_predictions() {
        let data = quadratic();
        let settings = Extrapolation {
            target: 5.0,
            degrees: DegreeSet::default(),
            sampling: Sampling::Tail,
            density: 10,
        };
        let fits = fit_degrees(&data, &settings.degrees).unwrap();
        let curves = sample_curves(&data, fits, &settings).unwrap();
        let fig = Figure::build(
            &data,
            &AxisLabels::default(),
            Some(Overlay {
                target: 5.0,
                curves: &curves,
            }),
        );

        assert_eq!(fig.layers.len(), 2);
        assert!(fig.has_curves());
        assert_eq!(fig.bounds.x_min, 0.0);
        assert_eq!(fig.bounds.x_max, 5.0);
        assert_abs_diff_eq!(fig.bounds.y_min, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fig.bounds.y_max, 25.0, epsilon = 1e-8);

        match &fig.layers[1] {
            Layer::Markers { label, style, points } => {
                assert_eq!(label, "degree 2");
                assert_eq!(style.shape, MarkerShape::Cross);
                assert_eq!(points.len(), 20);
            }
            other => panic!("expected markers, got {other:?}"),
        }
    }

    #[test]
    fn empty_degree_set_still_shows_raw_markers() {
        let data = quadratic();
        let fig = Figure::build(
            &data,
            &AxisLabels::default(),
            Some(Overlay {
                target: 4.0,
                curves: &[],
            }),
        );
        assert_eq!(fig.layers.len(), 1);
        assert!(matches!(fig.layers[0], Layer::Markers { style: RAW_MARKER, .. }));
        assert_eq!(fig.bounds.as_array(), [0.0, 4.0, 0.0, 9.0]);
    }

    #[test]
    fn degree_styles_cycle_through_three() {
        assert_eq!(MarkerStyle::for_degree(1).shape, MarkerShape::Triangle);
        assert_eq!(MarkerStyle::for_degree(2).shape, MarkerShape::Cross);
        assert_eq!(MarkerStyle::for_degree(3).shape, MarkerShape::Square);
        assert_eq!(MarkerStyle::for_degree(0), MarkerStyle::for_degree(3));
    }

    #[test]
    fn degenerate_bounds_are_widened_for_display() {
        let data = Dataset::new(vec![1.0], vec![2.0]).unwrap();
        let fig = Figure::build(&data, &AxisLabels::default(), None);
        assert_eq!(fig.bounds.as_array(), [1.0, 1.0, 2.0, 2.0]);
        assert_eq!(fig.bounds.for_display().as_array(), [0.5, 1.5, 1.5, 2.5]);
    }
}
