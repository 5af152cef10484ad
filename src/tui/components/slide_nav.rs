//! # SlideNav Component
//!
//! Bottom navigation bar: `◀  ○ ● ○ ○  ▶`. One dot per slide, filled for
//! the active slide and half-tone for slides already shown. The `◀`/`▶`
//! controls dim when disabled.
//!
//! The laid-out rectangles are kept in [`NavLayout`] so mouse clicks can be
//! mapped back to `previous()`, `next()` or `goTo(n)`. When the deck has
//! too many slides for one dot each, the dots collapse to a `current / total`
//! readout and only the controls are clickable.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::view::{DeckView, SlideStatus};
use crate::tui::component::Component;

/// Clickable element of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Previous,
    Next,
    Dot(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLayout {
    pub previous: Rect,
    pub next: Rect,
    /// `(position, rect)` for each dot; empty in compact mode.
    pub dots: Vec<(usize, Rect)>,
    /// Where the compact `current / total` readout goes, when dots don't fit.
    pub readout: Option<Rect>,
}

impl NavLayout {
    /// Center `◀ dots ▶` in `area`, two cells per dot.
    pub fn compute(area: Rect, total: usize) -> Self {
        if area.is_empty() {
            return Self::default();
        }
        let y = area.y;
        let dots_width = total.saturating_mul(2);
        let full_width = dots_width + 5;

        if full_width <= usize::from(area.width) {
            let x0 = area.x + (area.width - full_width as u16) / 2;
            let dots = (0..total)
                .map(|i| (i + 1, Rect::new(x0 + 3 + 2 * i as u16, y, 1, 1)))
                .collect();
            Self {
                previous: Rect::new(x0, y, 1, 1),
                next: Rect::new(x0 + full_width as u16 - 1, y, 1, 1),
                dots,
                readout: None,
            }
        } else {
            let readout_width = area.width.saturating_sub(6).min(13);
            let full = readout_width + 6;
            let x0 = area.x + area.width.saturating_sub(full) / 2;
            Self {
                previous: Rect::new(x0, y, 1, 1),
                next: Rect::new(x0 + full.saturating_sub(1), y, 1, 1),
                dots: Vec::new(),
                readout: Some(Rect::new(x0 + 3, y, readout_width, 1)),
            }
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<NavHit> {
        let pos = Position::new(column, row);
        if self.previous.contains(pos) {
            return Some(NavHit::Previous);
        }
        if self.next.contains(pos) {
            return Some(NavHit::Next);
        }
        self.dots
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(position, _)| NavHit::Dot(*position))
    }
}

pub struct SlideNav<'a> {
    pub view: &'a DeckView,
    /// Filled in by `render` for hit testing.
    pub layout: NavLayout,
}

impl<'a> SlideNav<'a> {
    pub fn new(view: &'a DeckView) -> Self {
        Self {
            view,
            layout: NavLayout::default(),
        }
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for SlideNav<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.layout = NavLayout::compute(area, self.view.total);
        let layout = &self.layout;
        if area.is_empty() {
            return;
        }

        frame.render_widget(
            Span::styled("◀", control_style(self.view.previous_enabled)),
            layout.previous,
        );
        frame.render_widget(
            Span::styled("▶", control_style(self.view.next_enabled)),
            layout.next,
        );

        for (position, rect) in &layout.dots {
            let active = self.view.dots.get(position - 1).copied().unwrap_or(false);
            let status = self
                .view
                .slides
                .get(position - 1)
                .map(|s| s.status)
                .unwrap_or_default();
            let (glyph, style) = match (active, status) {
                (true, _) => ("●", Style::default().fg(Color::Cyan)),
                (false, SlideStatus::Prior) => ("◉", Style::default().fg(Color::Gray)),
                (false, _) => ("○", Style::default().fg(Color::DarkGray)),
            };
            frame.render_widget(Span::styled(glyph, style), *rect);
        }

        if let Some(readout) = layout.readout {
            frame.render_widget(
                Line::from(format!("{} / {}", self.view.current, self.view.total)).centered(),
                readout,
            );
        }
    }
}
