//! # SlideView Component
//!
//! The slide itself: a bordered card with the rendered markdown body in a
//! scroll view, followed by the widget explorer panel on explorer slides
//! and the speaker-notes panel when notes are toggled on.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::deck::Slide;
use crate::core::view::DeckView;
use crate::tui::component::Component;
use crate::tui::components::widget_explorer::{WidgetExplorerPanel, WidgetHit};
use crate::tui::markdown;

const EXPLORER_HEIGHT: u16 = 16;
const NOTES_HEIGHT: u16 = 5;

pub struct SlideView<'a> {
    pub slide: &'a Slide,
    pub view: &'a DeckView,
    pub notes_visible: bool,
    pub scroll_state: &'a mut ScrollViewState,
    /// Explorer item rows laid out by the last `render`.
    pub widget_hits: Vec<WidgetHit>,
}

impl<'a> SlideView<'a> {
    pub fn new(
        slide: &'a Slide,
        view: &'a DeckView,
        notes_visible: bool,
        scroll_state: &'a mut ScrollViewState,
    ) -> Self {
        Self {
            slide,
            view,
            notes_visible,
            scroll_state,
            widget_hits: Vec::new(),
        }
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let content_width = area.width.saturating_sub(1).max(1);
        let paragraph =
            Paragraph::new(markdown::render(&self.slide.body, Color::White)).wrap(Wrap { trim: false });
        let height = u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);

        // Keep the offset inside the content, e.g. after a resize
        let max_offset = height.saturating_sub(area.height);
        let mut offset = self.scroll_state.offset();
        if offset.y > max_offset {
            offset.y = max_offset;
            self.scroll_state.set_offset(offset);
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, area, &mut *self.scroll_state);
    }

    fn render_notes(&self, frame: &mut Frame, area: Rect) {
        let notes = self
            .slide
            .notes
            .as_deref()
            .unwrap_or("No notes for this slide.");
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Speaker notes ")
            .border_style(Style::default().fg(Color::Yellow));
        frame.render_widget(
            Paragraph::new(notes)
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}

impl Component for SlideView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut card = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(2))
            .title(format!(" {}. {} ", self.slide.position, self.slide.title));
        if let Some(download) = self.slide.download {
            card = card.title_bottom(
                Line::from(format!(" o  download {download} "))
                    .right_aligned()
                    .style(Style::default().fg(Color::Green)),
            );
        }
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let explorer_height = if self.slide.explorer.is_some() {
            EXPLORER_HEIGHT.min(inner.height / 2 + 4).min(inner.height)
        } else {
            0
        };
        let notes_height = if self.notes_visible { NOTES_HEIGHT } else { 0 };
        let [body_area, explorer_area, notes_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(explorer_height),
            Constraint::Length(notes_height),
        ])
        .areas(inner);

        self.render_body(frame, body_area);

        self.widget_hits.clear();
        if let Some(category) = self.slide.explorer
            && !explorer_area.is_empty()
        {
            let mut panel = WidgetExplorerPanel::new(category, self.view.widget(category));
            panel.render(frame, explorer_area);
            self.widget_hits = panel.hits;
        }

        if self.notes_visible && !notes_area.is_empty() {
            self.render_notes(frame, notes_area);
        }
    }
}
