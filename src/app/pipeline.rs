//! Shared "plot pipeline" logic.
//!
//! One linear pass: dataset -> (optional) fits -> sampled curves -> figure.
//! Front-ends (viewer, SVG, ASCII) only deal with presentation.

use tracing::{debug, warn};

use crate::domain::{Dataset, PlotRequest};
use crate::error::AppError;
use crate::fit::{FittedCurve, fit_degrees, sample_curves};
use crate::plot::{Figure, Overlay};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub curves: Vec<FittedCurve>,
    pub figure: Figure,
}

/// Execute the pipeline and return the figure plus any fitted curves.
pub fn run_plot(data: &Dataset, request: &PlotRequest) -> Result<RunOutput, AppError> {
    debug!(points = data.len(), "dataset ready");

    let Some(settings) = &request.extrapolation else {
        let figure = Figure::build(data, &request.labels, None);
        return Ok(RunOutput {
            curves: Vec::new(),
            figure,
        });
    };

    if settings.degrees.is_empty() {
        warn!("every requested degree exceeds the maximum of 3; no curves will be drawn");
    }

    let fits = fit_degrees(data, &settings.degrees)?;
    let curves = sample_curves(data, fits, settings)?;
    debug!(
        curves = curves.len(),
        target = settings.target,
        sampling = ?settings.sampling,
        "curves sampled"
    );

    let figure = Figure::build(
        data,
        &request.labels,
        Some(Overlay {
            target: settings.target,
            curves: &curves,
        }),
    );

    Ok(RunOutput { curves, figure })
}
