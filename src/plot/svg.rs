//! Render a figure to an SVG file.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::error::AppError;
use crate::plot::{ChartTheme, Figure, draw_figure};

/// Write the figure to `path` as an SVG image of `size` pixels.
pub fn write_svg(path: &Path, figure: &Figure, size: (u32, u32)) -> Result<(), AppError> {
    let root = SVGBackend::new(path, size).into_drawing_area();

    draw_figure(&root, figure, &ChartTheme::svg())
        .map_err(|e| AppError::new(5, format!("Failed to draw SVG '{}': {e}", path.display())))?;
    root.present()
        .map_err(|e| AppError::new(5, format!("Failed to write SVG '{}': {e}", path.display())))?;

    info!(path = %path.display(), width = size.0, height = size.1, "wrote svg");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AxisLabels, Dataset};

    #[test]
    fn writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let data = Dataset::new(vec![1.0, 2.0, 3.0], vec![3.0, 6.0, 9.0]).unwrap();
        let fig = Figure::build(&data, &AxisLabels::default(), None);

        write_svg(&path, &fig, (400, 300)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("polyline") || text.contains("path"));
    }
}
