//! # TitleBar Component
//!
//! Top status line: deck and slide title on the left; toast, auto-advance
//! indicator, presentation timer and slide counter on the right.
//!
//! Stateless: all props come from `App` each frame. When the line is too
//! narrow for both halves, the right-hand status wins.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub deck_name: &'a str,
    pub slide_title: &'a str,
    pub current: usize,
    pub total: usize,
    pub elapsed: String,
    /// Period while auto-advance runs.
    pub auto_advance: Option<u64>,
    pub notification: Option<&'a str>,
}

impl TitleBar<'_> {
    fn status_line(&self) -> Line<'static> {
        let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let mut spans = Vec::new();
        if let Some(message) = self.notification {
            spans.push(Span::styled(
                message.to_string(),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(sep.clone());
        }
        if let Some(secs) = self.auto_advance {
            spans.push(Span::styled(
                format!("▶ auto {secs}s"),
                Style::default().fg(Color::Green),
            ));
            spans.push(sep.clone());
        }
        spans.push(Span::styled(
            format!("⏱ {}", self.elapsed),
            Style::default().fg(Color::Gray),
        ));
        spans.push(sep);
        spans.push(Span::styled(
            format!("{}/{}", self.current, self.total),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        Line::from(spans)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status = self.status_line();
        let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);

        let heading = format!(" {} · {}", self.deck_name, self.slide_title);
        let heading = if heading.width() > usize::from(left.width) {
            textwrap::wrap(&heading, usize::from(left.width.max(1)))
                .first()
                .map(|s| s.to_string())
                .unwrap_or_default()
        } else {
            heading
        };

        frame.render_widget(
            Line::from(Span::styled(
                heading,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            left,
        );
        frame.render_widget(status.right_aligned(), right);
    }
}
