//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - builds the dataset and runs the fit pipeline
//! - displays the figure (viewer, SVG file or ASCII)
//! - prints the fit summary and writes optional exports

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::AppError;
use crate::io::curve::{CurveFile, write_curve_json};

pub mod pipeline;

/// Where the figure goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Blocking full-screen terminal viewer.
    Viewer,
    /// SVG file; returns immediately.
    Svg { path: PathBuf, size: (u32, u32) },
    /// ASCII grid on stdout; returns immediately.
    Ascii { width: usize, height: usize },
}

impl OutputTarget {
    /// SVG wins over ASCII; the viewer is only used on an interactive stdout.
    pub fn resolve(cli: &Cli, interactive: bool) -> Self {
        if let Some(path) = &cli.output {
            OutputTarget::Svg {
                path: path.clone(),
                size: cli.svg_size,
            }
        } else if cli.ascii || !interactive {
            OutputTarget::Ascii {
                width: cli.width,
                height: cli.height,
            }
        } else {
            OutputTarget::Viewer
        }
    }
}

/// Entry point for the `cliplot` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data = cli.dataset()?;
    let request = cli.plot_request();
    let run = pipeline::run_plot(&data, &request)?;

    let summary = request
        .extrapolation
        .as_ref()
        .map(|ex| crate::report::format_fit_summary(&run.curves, ex.target));

    let output = OutputTarget::resolve(&cli, io::stdout().is_terminal());
    debug!(?output, "output resolved");

    match output {
        OutputTarget::Viewer => {
            let lines = request
                .extrapolation
                .as_ref()
                .map(|ex| crate::report::format_fit_lines(&run.curves, ex.target))
                .unwrap_or_default();
            crate::tui::show(&run.figure, &lines)?;
        }
        OutputTarget::Svg { path, size } => {
            crate::plot::write_svg(&path, &run.figure, size)?;
        }
        OutputTarget::Ascii { width, height } => {
            print!("{}", crate::plot::render_ascii(&run.figure, width, height));
        }
    }

    if let Some(summary) = summary {
        print!("{summary}");
    }

    if let (Some(path), Some(ex)) = (&cli.export_curve, &request.extrapolation) {
        write_curve_json(path, &CurveFile::new(&request.labels, ex, &run.curves))?;
    } else if cli.export_curve.is_some() {
        info!("--export-curve ignored: nothing is fitted without --extrapolate");
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["cliplot", "-x", "1,2", "-y", "1,2"].iter().chain(args.iter()).copied()).unwrap()
    }

    #[test]
    fn output_prefers_svg_then_ascii() {
        let c = cli(&["-o", "out.svg", "--ascii"]);
        assert_eq!(
            OutputTarget::resolve(&c, true),
            OutputTarget::Svg {
                path: PathBuf::from("out.svg"),
                size: (1024, 768)
            }
        );

        let c = cli(&["--ascii", "--width", "40", "--height", "10"]);
        assert_eq!(
            OutputTarget::resolve(&c, true),
            OutputTarget::Ascii {
                width: 40,
                height: 10
            }
        );
    }

    #[test]
    fn non_interactive_stdout_falls_back_to_ascii() {
        let c = cli(&[]);
        assert_eq!(OutputTarget::resolve(&c, true), OutputTarget::Viewer);
        assert!(matches!(OutputTarget::resolve(&c, false), OutputTarget::Ascii { .. }));
    }
}
