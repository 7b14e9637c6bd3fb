//! Plotters-powered figure widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::plot::{ChartTheme, Figure, draw_figure};

/// Render-only view of a [`Figure`].
///
/// All series and bounds are computed before rendering; `render()` only draws.
pub struct FigureChart<'a> {
    pub figure: &'a Figure,
}

impl<'a> Widget for FigureChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        if !self.figure.bounds.is_finite() {
            buf.set_string(
                area.x,
                area.y,
                "Nothing finite to plot.",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let figure = self.figure;
        let widget = widget_fn(move |root| {
            draw_figure(&root, figure, &ChartTheme::terminal())?;
            Ok(())
        });

        widget.render(area, buf);
    }
}
