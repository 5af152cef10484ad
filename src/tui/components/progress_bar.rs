//! Thin horizontal bar showing how far through the deck the presenter is.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct ProgressBar {
    /// Fraction in `[0, 1]`.
    pub fraction: f64,
}

impl ProgressBar {
    pub fn filled_cells(&self, width: u16) -> u16 {
        let fraction = self.fraction.clamp(0.0, 1.0);
        (f64::from(width) * fraction).round() as u16
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let filled = self.filled_cells(area.width);
        let empty = area.width - filled;
        let line = Line::from(vec![
            Span::styled("━".repeat(usize::from(filled)), Style::default().fg(Color::Cyan)),
            Span::styled("─".repeat(usize::from(empty)), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(line, area);
    }
}
