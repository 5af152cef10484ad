use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    HelpOverlay, NavHit, ProgressBar, SlideNav, SlideView, TitleBar, widget_explorer,
};
use crate::tui::transition;

/// What a left click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Nav(NavHit),
    Widget {
        category: crate::core::catalog::Category,
        key: &'static str,
    },
}

/// Screen regions: chrome (title, progress, navigation) is hidden in fullscreen.
struct Areas {
    title: Option<Rect>,
    progress: Option<Rect>,
    slide: Rect,
    nav: Option<Rect>,
}

fn split(area: Rect, fullscreen: bool) -> Areas {
    if fullscreen {
        return Areas {
            title: None,
            progress: None,
            slide: area,
            nav: None,
        };
    }
    use Constraint::{Length, Min};
    let [title, progress, slide, nav] =
        Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area);
    Areas {
        title: Some(title),
        progress: Some(progress),
        slide,
        nav: Some(nav),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let areas = split(frame.area(), app.fullscreen);

    if let Some(area) = areas.title {
        let slide = app.current_slide();
        let mut title_bar = TitleBar {
            deck_name: &app.deck.name,
            slide_title: &slide.title,
            current: app.view.current,
            total: app.view.total,
            elapsed: app.elapsed_label(now),
            auto_advance: app.navigator.auto_advance_period().map(|p| p.as_secs()),
            notification: app.notification_text(now),
        };
        title_bar.render(frame, area);
    }

    if let Some(area) = areas.progress {
        ProgressBar {
            fraction: app.view.progress,
        }
        .render(frame, area);
    }

    let mut slide_view = SlideView::new(
        app.current_slide(),
        &app.view,
        app.notes_visible,
        &mut tui.scroll_state,
    );
    slide_view.render(frame, areas.slide);
    tui.widget_hits = slide_view.widget_hits;

    if let Some(animation) = tui.animation {
        if animation.is_done(now) {
            tui.animation = None;
        } else {
            transition::apply(
                animation.transition,
                animation.progress(now),
                areas.slide,
                frame.buffer_mut(),
            );
        }
    }

    match areas.nav {
        Some(area) => {
            let mut nav = SlideNav::new(&app.view);
            nav.render(frame, area);
            tui.nav_layout = nav.layout;
        }
        None => tui.nav_layout = Default::default(),
    }

    if app.help_visible {
        HelpOverlay.render(frame, frame.area());
    }
}

/// Map a click to the navigation bar or an explorer item from the last frame.
pub fn hit_test(tui: &TuiState, column: u16, row: u16) -> Option<ClickTarget> {
    if let Some(hit) = tui.nav_layout.hit_test(column, row) {
        return Some(ClickTarget::Nav(hit));
    }
    widget_explorer::hit_test(&tui.widget_hits, column, row).map(|hit| ClickTarget::Widget {
        category: hit.category,
        key: hit.key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::catalog::Category;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let now = Instant::now();
        terminal.draw(|f| draw_ui(f, app, tui, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_chrome() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("1/5"));
        assert!(text.contains("1. Welcome"));
        assert!(text.contains('◀') && text.contains('▶'));
        assert_eq!(tui.nav_layout.dots.len(), 5);
    }

    #[test]
    fn test_fullscreen_hides_chrome() {
        let mut app = test_app();
        update(&mut app, Action::ToggleFullscreen, Instant::now());
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(!text.contains("1/5"));
        assert!(!text.contains('◀'));
        assert!(text.contains("1. Welcome"));
        assert!(tui.nav_layout.dots.is_empty());
    }

    #[test]
    fn test_click_on_dot_and_controls() {
        let app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);

        let (position, dot) = tui.nav_layout.dots[3];
        assert_eq!(
            hit_test(&tui, dot.x, dot.y),
            Some(ClickTarget::Nav(NavHit::Dot(position)))
        );
        let next = tui.nav_layout.next;
        assert_eq!(
            hit_test(&tui, next.x, next.y),
            Some(ClickTarget::Nav(NavHit::Next))
        );
        assert_eq!(hit_test(&tui, 0, 0), None);
    }

    #[test]
    fn test_click_on_explorer_item() {
        let mut app = test_app();
        update(&mut app, Action::GoTo(3), Instant::now());
        let mut tui = TuiState::new();
        draw(&app, &mut tui);

        let row = tui.widget_hits[2].rect;
        match hit_test(&tui, row.x + 1, row.y) {
            Some(ClickTarget::Widget { category, key }) => {
                assert_eq!(category, Category::Layout);
                assert_eq!(key, Category::Layout.entries()[2].key);
            }
            other => panic!("expected widget hit, got {:?}", other),
        }
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let mut app = test_app();
        update(&mut app, Action::ToggleHelp, Instant::now());
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Keyboard shortcuts"));
    }
}
