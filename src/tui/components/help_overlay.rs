//! # Help Overlay
//!
//! Centered keyboard-shortcut sheet, toggled with `?` and closed with Esc
//! (or any other key).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::component::Component;

pub const SHORTCUTS: &[(&str, &str)] = &[
    ("→ ↓ Space PgDn", "Next slide"),
    ("← ↑ PgUp", "Previous slide"),
    ("Home / End", "First / last slide"),
    ("drag ← / →", "Swipe to next / previous"),
    ("click dot", "Jump to slide"),
    ("a", "Toggle auto-advance"),
    ("n", "Toggle speaker notes"),
    ("F11 / f", "Toggle fullscreen"),
    ("Ctrl+P", "Print deck to deckhand-print.txt"),
    ("y", "Copy code sample"),
    ("o", "Open download link"),
    ("Tab / Shift+Tab", "Next / previous widget"),
    ("1-9", "Pick widget"),
    ("j / k", "Scroll slide"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

pub struct HelpOverlay;

impl Component for HelpOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = (SHORTCUTS.len() as u16 + 4).min(area.height);
        let overlay = centered_rect(60, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Keyboard shortcuts ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::new(2, 2, 1, 0));

        let key_width = SHORTCUTS.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let lines: Vec<Line> = SHORTCUTS
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{key:<key_width$}  "),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*description),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

/// `percent_x` of the width, a fixed `height`, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
