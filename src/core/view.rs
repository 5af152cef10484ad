//! # Render Targets
//!
//! The navigator and explorer never draw anything themselves. They publish
//! derived visual state into a [`RenderTarget`], and whatever sits on the
//! other side decides how it looks.
//!
//! ```text
//! Navigator ──┐                      ┌──► DeckView (snapshot) ──► TUI
//!             ├──► RenderTarget ─────┤
//! Explorer ───┘                      └──► test recorders
//! ```
//!
//! [`DeckView`] is the snapshot implementation used by the TUI and tests.

use std::collections::HashMap;

use crate::core::catalog::Category;
use crate::core::deck::Transition;

/// Visual status of a slide relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideStatus {
    /// The slide being shown.
    Active,
    /// Already presented (position < current).
    Prior,
    /// Not reached yet (position > current).
    #[default]
    Upcoming,
}

pub trait RenderTarget {
    /// Set the status and transition style of the slide at `position` (1-based).
    fn set_slide_state(&mut self, position: usize, status: SlideStatus, transition: Transition);
    /// Numeric "current / total" readout.
    fn set_counter(&mut self, current: usize, total: usize);
    /// Progress bar fill, in `[0.0, 1.0]`.
    fn set_progress(&mut self, fraction: f64);
    fn set_controls(&mut self, previous_enabled: bool, next_enabled: bool);
    fn set_dot_active(&mut self, position: usize, active: bool);
    /// Replace the name and code shown in a category's explorer region.
    fn set_widget_display(&mut self, category: Category, name: &str, code: &str);
    /// Mark `key` as the sole active item of a category's item list.
    fn set_widget_active(&mut self, category: Category, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideVisual {
    pub status: SlideStatus,
    pub transition: Option<Transition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetDisplay {
    pub name: String,
    pub code: String,
    pub active_key: Option<String>,
}

/// Last published visual state, read by the renderer each frame.
#[derive(Debug, Clone, Default)]
pub struct DeckView {
    pub slides: Vec<SlideVisual>,
    pub current: usize,
    pub total: usize,
    pub progress: f64,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub dots: Vec<bool>,
    pub widgets: HashMap<Category, WidgetDisplay>,
}

impl DeckView {
    pub fn new(total: usize) -> Self {
        Self {
            slides: vec![SlideVisual::default(); total],
            dots: vec![false; total],
            total,
            ..Default::default()
        }
    }

    pub fn widget(&self, category: Category) -> Option<&WidgetDisplay> {
        self.widgets.get(&category)
    }

    /// Positions (1-based) of dots currently marked active.
    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i + 1)
            .collect()
    }

    fn slot<T: Default + Clone>(items: &mut Vec<T>, position: usize) -> Option<&mut T> {
        if position == 0 {
            return None;
        }
        if items.len() < position {
            items.resize(position, T::default());
        }
        items.get_mut(position - 1)
    }
}

impl RenderTarget for DeckView {
    fn set_slide_state(&mut self, position: usize, status: SlideStatus, transition: Transition) {
        if let Some(slide) = Self::slot(&mut self.slides, position) {
            slide.status = status;
            slide.transition = Some(transition);
        }
    }

    fn set_counter(&mut self, current: usize, total: usize) {
        self.current = current;
        self.total = total;
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction.clamp(0.0, 1.0);
    }

    fn set_controls(&mut self, previous_enabled: bool, next_enabled: bool) {
        self.previous_enabled = previous_enabled;
        self.next_enabled = next_enabled;
    }

    fn set_dot_active(&mut self, position: usize, active: bool) {
        if let Some(dot) = Self::slot(&mut self.dots, position) {
            *dot = active;
        }
    }

    fn set_widget_display(&mut self, category: Category, name: &str, code: &str) {
        let display = self.widgets.entry(category).or_default();
        display.name = name.to_string();
        display.code = code.to_string();
    }

    fn set_widget_active(&mut self, category: Category, key: &str) {
        self.widgets.entry(category).or_default().active_key = Some(key.to_string());
    }
}
