//! # Widget Explorer
//!
//! Resolves a `(category, item key)` selection against the static
//! [catalog](crate::core::catalog) and republishes the result into that
//! category's display region.
//!
//! The explorer remembers what each region currently shows so that
//! "copy" can read it back. Unknown keys are ignored entirely: the region
//! keeps its content and its active item.

use std::collections::HashMap;

use log::{debug, info};

use crate::core::catalog::{self, Category, WidgetEntry};
use crate::core::view::RenderTarget;

#[derive(Debug, Clone)]
pub struct WidgetExplorer {
    displayed: HashMap<Category, &'static WidgetEntry>,
}

impl Default for WidgetExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetExplorer {
    /// Every region starts out showing its category's first entry.
    pub fn new() -> Self {
        let displayed = Category::ALL
            .into_iter()
            .filter_map(|category| category.entries().first().map(|entry| (category, entry)))
            .collect();
        Self { displayed }
    }

    /// Publish every region's current content, e.g. for the first frame.
    pub fn render<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        for category in Category::ALL {
            if let Some(entry) = self.displayed.get(&category) {
                target.set_widget_display(category, entry.name, entry.code);
                target.set_widget_active(category, entry.key);
            }
        }
    }

    /// Show `key` in `category`'s region. Returns `false` for unknown keys.
    pub fn select<R: RenderTarget + ?Sized>(
        &mut self,
        category: Category,
        key: &str,
        target: &mut R,
    ) -> bool {
        let Some(entry) = catalog::lookup(category, key) else {
            debug!("Explorer: no '{}' in {}, ignoring", key, category);
            return false;
        };
        info!("Explorer: {} -> {}", category, entry.name);
        self.displayed.insert(category, entry);
        target.set_widget_display(category, entry.name, entry.code);
        target.set_widget_active(category, entry.key);
        true
    }

    /// Select the entry `offset` steps away from the active one, wrapping.
    pub fn cycle<R: RenderTarget + ?Sized>(
        &mut self,
        category: Category,
        offset: isize,
        target: &mut R,
    ) -> bool {
        let entries = category.entries();
        if entries.is_empty() {
            return false;
        }
        let len = entries.len() as isize;
        let current = self
            .active_key(category)
            .and_then(|key| entries.iter().position(|e| e.key == key))
            .unwrap_or(0) as isize;
        let index = (current + offset).rem_euclid(len) as usize;
        self.select(category, entries[index].key, target)
    }

    /// Select the entry at a 0-based position in display order.
    pub fn select_index<R: RenderTarget + ?Sized>(
        &mut self,
        category: Category,
        index: usize,
        target: &mut R,
    ) -> bool {
        match category.entries().get(index) {
            Some(entry) => self.select(category, entry.key, target),
            None => false,
        }
    }

    pub fn active_key(&self, category: Category) -> Option<&'static str> {
        self.displayed.get(&category).map(|entry| entry.key)
    }

    /// Code currently shown for `category`, to hand to the clipboard.
    pub fn copy_selected(&self, category: Category) -> Option<&'static str> {
        self.displayed.get(&category).map(|entry| entry.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::DeckView;

    fn setup() -> (WidgetExplorer, DeckView) {
        let explorer = WidgetExplorer::new();
        let mut view = DeckView::new(1);
        explorer.render(&mut view);
        (explorer, view)
    }

    #[test]
    fn test_initial_regions_show_first_entry() {
        let (explorer, view) = setup();
        let layout = view.widget(Category::Layout).unwrap();
        assert_eq!(layout.name, "Container");
        assert_eq!(layout.active_key.as_deref(), Some("container"));
        assert_eq!(explorer.active_key(Category::StateManagement), Some("setstate"));
    }

    #[test]
    fn test_select_publishes_exact_code() {
        let (mut explorer, mut view) = setup();
        assert!(explorer.select(Category::Layout, "stack", &mut view));
        assert!(explorer.select(Category::Layout, "container", &mut view));
        let layout = view.widget(Category::Layout).unwrap();
        let expected = catalog::lookup(Category::Layout, "container").unwrap();
        assert_eq!(layout.name, "Container");
        assert_eq!(layout.code, expected.code);
    }

    #[test]
    fn test_select_unknown_leaves_region_unchanged() {
        let (mut explorer, mut view) = setup();
        explorer.select(Category::Layout, "row", &mut view);
        let before = view.widget(Category::Layout).cloned();
        assert!(!explorer.select(Category::Layout, "doesNotExist", &mut view));
        assert_eq!(view.widget(Category::Layout).cloned(), before);
        assert_eq!(explorer.active_key(Category::Layout), Some("row"));
    }

    #[test]
    fn test_regions_are_independent() {
        let (mut explorer, mut view) = setup();
        explorer.select(Category::Ui, "card", &mut view);
        assert_eq!(view.widget(Category::Ui).unwrap().name, "Card");
        assert_eq!(view.widget(Category::Layout).unwrap().name, "Container");
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let (mut explorer, mut view) = setup();
        explorer.cycle(Category::Interactive, -1, &mut view);
        assert_eq!(explorer.active_key(Category::Interactive), Some("switch"));
        explorer.cycle(Category::Interactive, 1, &mut view);
        assert_eq!(explorer.active_key(Category::Interactive), Some("button"));
    }

    #[test]
    fn test_select_index() {
        let (mut explorer, mut view) = setup();
        assert!(explorer.select_index(Category::StateManagement, 1, &mut view));
        assert_eq!(view.widget(Category::StateManagement).unwrap().name, "GetX ⭐ RECOMMENDED");
        assert!(!explorer.select_index(Category::StateManagement, 9, &mut view));
    }

    #[test]
    fn test_copy_selected_reads_displayed_code() {
        let (mut explorer, mut view) = setup();
        explorer.select(Category::Ui, "icon", &mut view);
        let code = explorer.copy_selected(Category::Ui).unwrap();
        assert!(code.starts_with("Icon(\n  Icons.favorite,"));
    }
}
