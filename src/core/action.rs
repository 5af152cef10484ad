//! # Actions
//!
//! Everything that can happen in Deckhand becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! The auto-advance clock fires? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! adapter must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::{Duration, Instant};

use chrono::Local;
use log::{debug, info};

use crate::core::catalog::Category;
use crate::core::navigator::Tick;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Next,
    Previous,
    GoTo(usize),
    First,
    Last,

    // Auto-advance
    ToggleAutoAdvance,
    StartAutoAdvance(Duration),
    /// Clock update from the event loop.
    Tick,

    // Widget explorer (on the current slide's explorer, if any)
    SelectWidget { category: Category, key: String },
    CycleWidget(isize),
    SelectWidgetIndex(usize),

    // Side-effecting helpers
    CopyCode,
    OpenDownload,
    Print,

    // Toggles
    ToggleNotes,
    ToggleHelp,
    CloseHelp,
    ToggleFullscreen,

    /// Result message from a background task.
    Notify(String),
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    CopyToClipboard(String),
    OpenUrl(&'static str),
    /// Write the given plain-text rendition of the deck.
    PrintDeck(String),
}

pub fn update(app: &mut App, action: Action, now: Instant) -> Effect {
    if action != Action::Tick {
        debug!("update: {:?}", action);
    }
    match action {
        Action::Next => {
            app.navigator.next(&mut app.view);
            Effect::None
        }
        Action::Previous => {
            app.navigator.previous(&mut app.view);
            Effect::None
        }
        Action::GoTo(position) => {
            app.navigator.go_to(position, &mut app.view);
            Effect::None
        }
        Action::First => {
            app.navigator.go_to(1, &mut app.view);
            Effect::None
        }
        Action::Last => {
            let last = app.navigator.total();
            app.navigator.go_to(last, &mut app.view);
            Effect::None
        }

        Action::ToggleAutoAdvance => {
            let period = app.auto_advance_period;
            if app.navigator.toggle_auto_advance(period, now) {
                let message = auto_advance_message(app);
                app.notify(message, now);
            } else {
                app.notify("Auto-advance stopped", now);
            }
            Effect::None
        }
        Action::StartAutoAdvance(period) => {
            if app.navigator.start_auto_advance(period, now) {
                let message = auto_advance_message(app);
                app.notify(message, now);
            }
            Effect::None
        }
        Action::Tick => {
            if app.navigator.tick(now, &mut app.view) == Tick::Stopped {
                app.notify("Auto-advance stopped", now);
            }
            if app.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
                app.notification = None;
            }
            Effect::None
        }

        Action::SelectWidget { category, key } => {
            app.explorer.select(category, &key, &mut app.view);
            Effect::None
        }
        Action::CycleWidget(offset) => {
            if let Some(category) = app.current_slide().explorer {
                app.explorer.cycle(category, offset, &mut app.view);
            }
            Effect::None
        }
        Action::SelectWidgetIndex(index) => {
            if let Some(category) = app.current_slide().explorer {
                app.explorer.select_index(category, index, &mut app.view);
            }
            Effect::None
        }

        Action::CopyCode => {
            let slide = app.current_slide();
            let code = match slide.explorer {
                Some(category) => app.explorer.copy_selected(category).map(str::to_string),
                None => slide.first_code_block(),
            };
            match code {
                Some(code) => Effect::CopyToClipboard(code),
                None => {
                    app.notify("No code on this slide", now);
                    Effect::None
                }
            }
        }
        Action::OpenDownload => {
            let download = app.current_slide().download;
            match download {
                Some(target) => {
                    let url = target.url(&app.platform);
                    info!("Download '{}' for platform '{}': {}", target, app.platform, url);
                    app.notify(target.message(), now);
                    Effect::OpenUrl(url)
                }
                None => {
                    app.notify("No download on this slide", now);
                    Effect::None
                }
            }
        }
        Action::Print => Effect::PrintDeck(app.deck.print_text(Local::now())),

        Action::ToggleNotes => {
            app.notes_visible = !app.notes_visible;
            info!(
                "Speaker notes: {}",
                if app.notes_visible { "shown" } else { "hidden" }
            );
            Effect::None
        }
        Action::ToggleHelp => {
            app.help_visible = !app.help_visible;
            Effect::None
        }
        Action::CloseHelp => {
            app.help_visible = false;
            Effect::None
        }
        Action::ToggleFullscreen => {
            app.fullscreen = !app.fullscreen;
            Effect::None
        }

        Action::Notify(message) => {
            app.notify(message, now);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Announces the period the clock actually runs at, after clamping.
fn auto_advance_message(app: &App) -> String {
    match app.navigator.auto_advance_period() {
        Some(period) if period.subsec_millis() == 0 => {
            format!("Auto-advance started ({}s per slide)", period.as_secs())
        }
        Some(period) => format!("Auto-advance started ({}ms per slide)", period.as_millis()),
        None => "Auto-advance started".to_string(),
    }
}
