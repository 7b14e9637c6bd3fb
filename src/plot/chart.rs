//! Plotters drawing routine for a [`Figure`].
//!
//! The same routine draws into the terminal (via `plotters-ratatui-backend`) and
//! into SVG files; only the [`ChartTheme`] differs.

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::plot::{Figure, LINE_COLOR, Layer, MarkerShape, MarkerStyle};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Marker size in backend pixels.
const MARKER_SIZE: i32 = 4;

/// How markers are rasterised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMode {
    /// Real glyphs (circle, cross, triangle, square).
    Shapes,
    /// Single colored pixels.
    ///
    /// `plotters-ratatui-backend` maps circle radii incorrectly (pixel radius ->
    /// normalized canvas units), producing huge circles, so the terminal uses dots.
    Pixels,
}

/// Backend-specific presentation settings.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub background: Option<RGBColor>,
    pub foreground: RGBColor,
    pub font_size: f64,
    pub margin: u32,
    pub left_label_area: u32,
    pub bottom_label_area: u32,
    pub mesh: bool,
    pub legend: bool,
    pub markers: MarkerMode,
}

impl ChartTheme {
    /// Terminal cells are low-res: compact label areas, no mesh, dot markers.
    pub fn terminal() -> Self {
        Self {
            background: None,
            foreground: WHITE,
            font_size: 10.0,
            margin: 1,
            left_label_area: 6,
            bottom_label_area: 3,
            mesh: false,
            legend: false,
            markers: MarkerMode::Pixels,
        }
    }

    pub fn svg() -> Self {
        Self {
            background: Some(WHITE),
            foreground: BLACK,
            font_size: 16.0,
            margin: 20,
            left_label_area: 70,
            bottom_label_area: 50,
            mesh: true,
            legend: true,
            markers: MarkerMode::Shapes,
        }
    }
}

/// Draw the figure onto `root`.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    theme: &ChartTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    if let Some(background) = theme.background {
        root.fill(&background)?;
    }

    let b = figure.bounds.for_display();
    let mut chart = ChartBuilder::on(root)
        .margin(theme.margin)
        .set_label_area_size(LabelAreaPosition::Left, theme.left_label_area)
        .set_label_area_size(LabelAreaPosition::Bottom, theme.bottom_label_area)
        .build_cartesian_2d(b.x_min..b.x_max, b.y_min..b.y_max)?;

    {
        let fmt = |v: &f64| format_tick(*v);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.labels.x.as_str())
            .y_desc(figure.labels.y.as_str())
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&fmt)
            .y_label_formatter(&fmt)
            .label_style(("sans-serif", theme.font_size).into_font().color(&theme.foreground))
            .axis_style(&theme.foreground);
        if theme.mesh {
            mesh.bold_line_style(&theme.foreground.mix(0.2))
                .light_line_style(&theme.foreground.mix(0.05));
        } else {
            mesh.disable_x_mesh().disable_y_mesh();
        }
        mesh.draw()?;
    }

    for layer in &figure.layers {
        match layer {
            Layer::Line { points } => {
                let color = rgb(LINE_COLOR);
                chart.draw_series(LineSeries::new(points.iter().copied(), &color))?;
            }
            Layer::Markers {
                label,
                style,
                points,
            } => draw_markers(&mut chart, label, points, *style, theme.markers)?,
        }
    }

    if theme.legend && figure.has_curves() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&theme.foreground)
            .label_font(("sans-serif", theme.font_size).into_font().color(&theme.foreground))
            .draw()?;
    }

    Ok(())
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    label: &str,
    points: &[(f64, f64)],
    style: MarkerStyle,
    mode: MarkerMode,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let color = rgb(style.color);
    let s = MARKER_SIZE;

    match (mode, style.shape) {
        (MarkerMode::Pixels, _) => {
            chart
                .draw_series(points.iter().map(|&p| Pixel::new(p, color)))?
                .label(label)
                .legend(move |(x, y)| Rectangle::new([(x - s, y - 1), (x + s, y + 1)], color.filled()));
        }
        (MarkerMode::Shapes, MarkerShape::Circle) => {
            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, s, color.filled())))?
                .label(label)
                .legend(move |(x, y)| Circle::new((x, y), s, color.filled()));
        }
        (MarkerMode::Shapes, MarkerShape::Cross) => {
            chart
                .draw_series(points.iter().map(|&p| Cross::new(p, s, color.stroke_width(2))))?
                .label(label)
                .legend(move |(x, y)| Cross::new((x, y), s, color.stroke_width(2)));
        }
        (MarkerMode::Shapes, MarkerShape::Triangle) => {
            chart
                .draw_series(points.iter().map(|&p| TriangleMarker::new(p, s, color.filled())))?
                .label(label)
                .legend(move |(x, y)| TriangleMarker::new((x, y), s, color.filled()));
        }
        (MarkerMode::Shapes, MarkerShape::Square) => {
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&p| EmptyElement::at(p) + Rectangle::new([(-s, -s), (s, s)], color.filled())),
                )?
                .label(label)
                .legend(move |(x, y)| Rectangle::new([(x - s, y - s), (x + s, y + s)], color.filled()));
        }
    }

    Ok(())
}

fn rgb(c: [u8; 3]) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

/// Compact tick label: integers without decimals, small/large magnitudes in
/// scientific notation, everything else with up to three decimals.
pub fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-3..1e6).contains(&a) {
        format!("{v:.2e}")
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
