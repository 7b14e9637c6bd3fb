//! ASCII plotting for non-interactive terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks when no viewer is available (pipes, CI logs)
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - connected raw series: `-` line
//! - markers: `o` (circle), `+` (cross), `^` (triangle), `#` (square)

use crate::plot::{Bounds, Figure, Layer};

/// Render the figure into a `width` × `height` character grid plus a header,
/// the axis labels and a legend of marker layers.
pub fn render_ascii(figure: &Figure, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let b = figure.bounds.for_display();

    let mut grid = vec![vec![' '; width]; height];

    // Layers are drawn in order, so later markers overwrite earlier ones.
    for layer in &figure.layers {
        match layer {
            Layer::Line { points } => draw_polyline(&mut grid, points, &b),
            Layer::Markers { style, points, .. } => {
                for &(x, y) in points {
                    let col = map_x(x, b.x_min, b.x_max, width);
                    let row = map_y(y, b.y_min, b.y_max, height);
                    grid[row][col] = style.shape.glyph();
                }
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{:.3}, {:.3}] | y=[{:.3}, {:.3}]\n",
        b.x_min, b.x_max, b.y_min, b.y_max
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out.push_str(&format!("x: {} | y: {}\n", figure.labels.x, figure.labels.y));
    for layer in &figure.layers {
        if let Layer::Markers { label, style, .. } = layer {
            out.push_str(&format!("{} {label}\n", style.shape.glyph()));
        }
    }

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(grid: &mut [Vec<char>], points: &[(f64, f64)], b: &Bounds) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let col = map_x(x, b.x_min, b.x_max, width);
        let row = map_y(y, b.y_min, b.y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
