//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting and plotting code. Conversion into domain types happens in
//! [`Cli::dataset`] and [`Cli::plot_request`].

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::{AxisLabels, Dataset, DegreeSet, Extrapolation, PlotRequest, Sampling};
use crate::error::AppError;

/// Top-level CLI.
///
/// `-h` is the x-axis label, so help is only available as `--help`.
#[derive(Debug, Parser)]
#[command(
    name = "cliplot",
    version,
    about = "Plot 2D points and extrapolate least-squares polynomial fits",
    disable_help_flag = true
)]
pub struct Cli {
    /// Comma-separated x coordinates.
    #[arg(short = 'x', long = "val_x", value_name = "X1,X2,...", value_delimiter = ',', required = true, allow_hyphen_values = true, value_parser = parse_finite)]
    pub val_x: Vec<f64>,

    /// Comma-separated y coordinates.
    #[arg(short = 'y', long = "val_y", value_name = "Y1,Y2,...", value_delimiter = ',', required = true, allow_hyphen_values = true, value_parser = parse_finite)]
    pub val_y: Vec<f64>,

    /// Y axis label.
    #[arg(short = 'v', long = "label_y", default_value = "y")]
    pub label_y: String,

    /// X axis label.
    #[arg(short = 'h', long = "label_x", default_value = "x")]
    pub label_x: String,

    /// Fit the data and extrapolate the curves up to this x value.
    #[arg(short = 'e', long, allow_hyphen_values = true, value_parser = parse_finite)]
    pub extrapolate: Option<f64>,

    /// Comma-separated polynomial degrees to fit (degrees above 3 are ignored) [default: 2].
    #[arg(short = 'd', long, value_name = "D1,D2,...", value_delimiter = ',', value_parser = parse_degree)]
    pub degree: Option<Vec<usize>>,

    /// Where curve sampling starts: the last observation (`tail`) or the first (`span`).
    #[arg(long, value_enum, default_value_t = Sampling::Tail)]
    pub sampling: Sampling,

    /// Samples per unit of extrapolation distance [default: 10 for tail, 20 for span].
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub density: Option<u32>,

    /// Write the figure to this SVG file instead of opening the viewer.
    #[arg(short = 'o', long, value_name = "SVG")]
    pub output: Option<PathBuf>,

    /// SVG size in pixels, as WIDTHxHEIGHT.
    #[arg(long, value_name = "WxH", default_value = "1024x768", value_parser = parse_size)]
    pub svg_size: (u32, u32),

    /// Print an ASCII plot instead of opening the viewer.
    #[arg(long)]
    pub ascii: bool,

    /// ASCII plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// ASCII plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub height: usize,

    /// Export fitted curves (coefficients + sampled points) to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,

    /// Verbose logging (overridden by RUST_LOG).
    #[arg(long)]
    pub verbose: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    pub fn dataset(&self) -> Result<Dataset, AppError> {
        Dataset::new(self.val_x.clone(), self.val_y.clone())
    }

    pub fn plot_request(&self) -> PlotRequest {
        let labels = AxisLabels {
            x: self.label_x.clone(),
            y: self.label_y.clone(),
        };
        let extrapolation = self.extrapolate.map(|target| Extrapolation {
            target,
            degrees: DegreeSet::from_requested(self.degree.as_deref()),
            sampling: self.sampling,
            density: self
                .density
                .map(|d| d as usize)
                .unwrap_or_else(|| self.sampling.default_density()),
        });
        PlotRequest { labels, extrapolation }
    }
}

/// Parse a single finite number (`nan`/`inf` are rejected).
fn parse_finite(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

/// Parse a single polynomial degree.
fn parse_degree(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a degree: {e}"))
}

/// Parse `WIDTHxHEIGHT`.
fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("'{s}' is not WIDTHxHEIGHT"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("'{s}' has a zero dimension"));
    }
    Ok((w, h))
}
