//! # Application State
//!
//! Core presentation state for Deckhand. This module contains domain logic
//! only - no TUI-specific types. Presentation state (scroll offsets,
//! animations, hit-test caches) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck                    // immutable slides
//! ├── navigator: Navigator          // current slide + auto-advance
//! ├── explorer: WidgetExplorer      // what each explorer region shows
//! ├── view: DeckView                // last published visual state
//! ├── notification: Option<..>      // single toast, newest wins
//! ├── notes_visible / help_visible / fullscreen
//! ├── started_at: Instant           // presentation timer origin
//! ├── auto_advance_period: Duration // period for the toggle key
//! └── platform: String              // for download links
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::deck::{Deck, Slide};
use crate::core::explorer::WidgetExplorer;
use crate::core::navigator::Navigator;
use crate::core::view::DeckView;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

pub struct App {
    pub deck: Deck,
    pub navigator: Navigator,
    pub explorer: WidgetExplorer,
    pub view: DeckView,
    pub notification: Option<Notification>,
    pub notes_visible: bool,
    pub help_visible: bool,
    pub fullscreen: bool,
    pub started_at: Instant,
    pub auto_advance_period: Duration,
    pub platform: String,
}

impl App {
    pub fn new(deck: Deck, auto_advance_period: Duration, platform: String, now: Instant) -> Self {
        let navigator = Navigator::new(deck.len());
        let explorer = WidgetExplorer::new();
        let mut view = DeckView::new(deck.len());
        navigator.render(&mut view);
        explorer.render(&mut view);
        Self {
            deck,
            navigator,
            explorer,
            view,
            notification: None,
            notes_visible: false,
            help_visible: false,
            fullscreen: false,
            started_at: now,
            auto_advance_period,
            platform,
        }
    }

    pub fn from_config(deck: Deck, config: &ResolvedConfig, now: Instant) -> Self {
        let mut app = Self::new(deck, config.auto_advance_period, config.platform.clone(), now);
        app.navigator.go_to(config.start_slide, &mut app.view);
        app
    }

    /// The slide at the navigator's position.
    pub fn current_slide(&self) -> &Slide {
        // The navigator's total equals the deck length, so current is always in range
        let index = self.navigator.current().saturating_sub(1);
        &self.deck.slides()[index.min(self.deck.len().saturating_sub(1))]
    }

    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification {
            message: message.into(),
            shown_at: now,
        });
    }

    /// Message of the live notification, if any.
    pub fn notification_text(&self, now: Instant) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| !n.is_expired(now))
            .map(|n| n.message.as_str())
    }

    /// Presentation timer as `M:SS`.
    pub fn elapsed_label(&self, now: Instant) -> String {
        format_elapsed(now.saturating_duration_since(self.started_at))
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
