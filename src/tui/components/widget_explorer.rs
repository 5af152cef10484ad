//! # WidgetExplorer Component
//!
//! Item list on the left, highlighted code for the displayed item on the
//! right. Draws whatever the explorer last published into the `DeckView`;
//! the active marker comes from `WidgetDisplay::active_key`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::catalog::Category;
use crate::core::view::WidgetDisplay;
use crate::tui::component::Component;
use crate::tui::markdown;

const LIST_WIDTH: u16 = 26;

/// Screen row of one catalog item, for mouse selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetHit {
    pub rect: Rect,
    pub category: Category,
    pub key: &'static str,
}

pub fn hit_test(hits: &[WidgetHit], column: u16, row: u16) -> Option<&WidgetHit> {
    hits.iter()
        .find(|hit| hit.rect.contains(Position::new(column, row)))
}

pub struct WidgetExplorerPanel<'a> {
    pub category: Category,
    pub display: Option<&'a WidgetDisplay>,
    /// Filled in by `render`.
    pub hits: Vec<WidgetHit>,
}

impl<'a> WidgetExplorerPanel<'a> {
    pub fn new(category: Category, display: Option<&'a WidgetDisplay>) -> Self {
        Self {
            category,
            display,
            hits: Vec::new(),
        }
    }
}

impl Component for WidgetExplorerPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, code_area] =
            Layout::horizontal([Constraint::Length(LIST_WIDTH), Constraint::Min(0)]).areas(area);

        let active_key = self.display.and_then(|d| d.active_key.as_deref());
        let list_block = Block::bordered()
            .title(format!(" {} ", self.category.label()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = list_block.inner(list_area);
        frame.render_widget(list_block, list_area);

        self.hits.clear();
        for (index, entry) in self
            .category
            .entries()
            .iter()
            .enumerate()
            .take(usize::from(inner.height))
        {
            let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            let active = active_key == Some(entry.key);
            let (marker, style) = if active {
                (
                    "▸ ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::Gray))
            };
            frame.render_widget(
                Line::from(vec![
                    Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{marker}{}", entry.name), style),
                ]),
                row,
            );
            self.hits.push(WidgetHit {
                rect: row,
                category: self.category,
                key: entry.key,
            });
        }

        let (title, code) = match self.display {
            Some(display) => (display.name.as_str(), display.code.as_str()),
            None => ("", ""),
        };
        let code_block = Block::bordered()
            .title(format!(" {title} "))
            .title_bottom(Line::from(" y copy · Tab next · 1-9 pick ").right_aligned())
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(
            Paragraph::new(markdown::highlight_code(code, "dart")).block(code_block),
            code_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::explorer::WidgetExplorer;
    use crate::core::view::DeckView;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(view: &DeckView, category: Category) -> (String, Vec<WidgetHit>) {
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut panel = WidgetExplorerPanel::new(category, view.widget(category));
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, panel.hits)
    }

    #[test]
    fn test_panel_lists_items_and_shows_code() {
        let mut view = DeckView::new(1);
        WidgetExplorer::new().render(&mut view);

        let (text, hits) = render(&view, Category::Layout);
        assert!(text.contains("Container"));
        assert!(text.contains("Column"));
        assert!(text.contains("▸ Container"));
        assert!(text.contains("width: 200"));
        assert_eq!(hits.len(), Category::Layout.entries().len());
    }

    #[test]
    fn test_hits_map_rows_to_keys() {
        let mut view = DeckView::new(1);
        let mut explorer = WidgetExplorer::new();
        explorer.render(&mut view);
        explorer.select(Category::Ui, "icon", &mut view);

        let (text, hits) = render(&view, Category::Ui);
        assert!(text.contains("▸ Icon"));
        let second = &hits[1];
        let found = hit_test(&hits, second.rect.x + 2, second.rect.y).unwrap();
        assert_eq!(found.key, second.key);
        assert_eq!(found.category, Category::Ui);
        assert!(hit_test(&hits, 60, 0).is_none());
    }
}
