//! Ratatui-based figure viewer.
//!
//! Shows the figure full-screen with a footer (legend + fit summary) and blocks
//! until the user closes it.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::error::AppError;
use crate::plot::{Figure, Layer, LINE_COLOR};

mod plotters_chart;

use plotters_chart::FigureChart;

/// Display the figure and block until `q`, `Esc` or `Enter` is pressed.
///
/// `summary` lines are shown under the chart.
pub fn show(figure: &Figure, summary: &[String]) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::new(5, format!("Failed to initialize terminal: {e}")))?;

    debug!("viewer opened");
    loop {
        terminal
            .draw(|frame| draw(frame, figure, summary))
            .map_err(|e| AppError::new(5, format!("Failed to draw: {e}")))?;

        if event::poll(Duration::from_millis(250))
            .map_err(|e| AppError::new(5, format!("Failed to poll terminal events: {e}")))?
        {
            let ev = event::read().map_err(|e| AppError::new(5, format!("Failed to read terminal event: {e}")))?;
            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press && is_close_key(key.code) {
                    break;
                }
            }
        }
    }
    debug!("viewer closed");

    Ok(())
}

fn is_close_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(5, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(5, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn draw(frame: &mut Frame, figure: &Figure, summary: &[String]) {
    let footer = footer_text(figure, summary);
    // Borders take two rows.
    let footer_height = footer.lines.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(footer_height)])
        .split(frame.area());

    frame.render_widget(FigureChart { figure }, chunks[0]);
    frame.render_widget(
        Paragraph::new(footer).block(Block::default().borders(Borders::ALL).title(" cliplot ")),
        chunks[1],
    );
}

fn footer_text(figure: &Figure, summary: &[String]) -> Text<'static> {
    let mut legend = Vec::new();
    for layer in &figure.layers {
        let (color, label) = match layer {
            Layer::Line { .. } => (LINE_COLOR, "data".to_string()),
            Layer::Markers { style, label, .. } => (style.color, label.clone()),
        };
        legend.push(Span::styled(
            "■ ",
            Style::default().fg(Color::Rgb(color[0], color[1], color[2])),
        ));
        legend.push(Span::raw(format!("{label}   ")));
    }
    legend.push(Span::styled(
        "q/Esc/Enter: close",
        Style::default().add_modifier(Modifier::DIM),
    ));

    let mut lines = vec![Line::from(legend)];
    lines.extend(summary.iter().map(|s| Line::from(s.clone())));
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AxisLabels, Dataset};

    #[test]
    fn close_keys() {
        assert!(is_close_key(KeyCode::Char('q')));
        assert!(is_close_key(KeyCode::Esc));
        assert!(is_close_key(KeyCode::Enter));
        assert!(!is_close_key(KeyCode::Char('x')));
    }

    #[test]
    fn footer_has_legend_then_summary() {
        let data = Dataset::new(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap();
        let fig = Figure::build(&data, &AxisLabels::default(), None);
        let text = footer_text(&fig, &["degree 2: rmse 0".to_string()]);

        assert_eq!(text.lines.len(), 2);
        let first: String = text.lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains("data"));
        assert_eq!(text.lines[1].spans[0].content, "degree 2: rmse 0");
    }
}
