//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something changed:
//!
//! - **Animating** (slide entrance transition): draws every ~33ms.
//! - **Idle**: sleeps until the next input, the next auto-advance deadline,
//!   or at most 500ms so the presentation timer and toasts stay current.
//!
//! ## Background work
//!
//! External clipboard tools and the URL opener block on child processes,
//! so they run on tokio's blocking pool and report back through an mpsc
//! channel drained by the loop. They never touch `App` directly.

mod clipboard;
mod component;
mod components;
mod event;
pub mod markdown;
mod opener;
mod transition;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::deck::{Deck, Transition};
use crate::core::state::App;
use crate::tui::components::{NavHit, NavLayout, WidgetHit};
use crate::tui::event::{Swipe, TuiEvent, poll_event_immediate, poll_event_timeout, swipe_direction};
use crate::tui::transition::SlideAnimation;
use crate::tui::ui::ClickTarget;

/// Where Ctrl+P writes the printable deck.
pub const PRINT_FILE: &str = "deckhand-print.txt";

const COPIED_MESSAGE: &str = "Code copied to clipboard!";
const ANIMATION_FRAME: Duration = Duration::from_millis(33);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Messages from background tasks to the event loop.
#[derive(Debug)]
enum Message {
    Action(Action),
    /// The external clipboard tool failed; try OSC 52 from the loop thread.
    CopyFallback(String),
}

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub scroll_state: ScrollViewState,
    pub animation: Option<SlideAnimation>,
    /// Hit-test caches written by the last draw.
    pub nav_layout: NavLayout,
    pub widget_hits: Vec<WidgetHit>,
    /// Cell where the left button went down.
    pub drag_start: Option<(u16, u16)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            animation: None,
            nav_layout: NavLayout::default(),
            widget_hits: Vec::new(),
            drag_start: None,
        }
    }

    /// Reset per-slide presentation state and start the entrance animation.
    fn slide_changed(&mut self, app: &App, now: Instant, duration: Duration) {
        let current = app.navigator.current();
        let transition = app
            .view
            .slides
            .get(current.saturating_sub(1))
            .and_then(|visual| visual.transition)
            .unwrap_or_else(|| Transition::for_position(current));
        debug!("Slide {} enters with {}", current, transition.class_name());
        self.scroll_state = ScrollViewState::default();
        self.widget_hits.clear();
        self.animation = (!duration.is_zero()).then(|| SlideAnimation::new(transition, now, duration));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Event-type reporting lets us drop key releases; ignored by terminals without it
        execute!(
            stdout(),
            EnableMouseCapture,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            Show
        );
    }
}

pub fn run(deck: Deck, config: ResolvedConfig) -> std::io::Result<()> {
    let started = Instant::now();
    let mut app = App::from_config(deck, &config, started);
    if let Some(period) = config.launch_auto_advance {
        update(&mut app, Action::StartAutoAdvance(period), started);
    }
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for results from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame
    let mut last_clock = String::new();

    'main: loop {
        let now = Instant::now();

        // Clock-driven updates: auto-advance deadline and toast expiry
        let had_notification = app.notification.is_some();
        let before = app.navigator.current();
        dispatch(&mut app, &mut tui, Action::Tick, &config, &tx);
        if app.navigator.current() != before || app.notification.is_some() != had_notification {
            needs_redraw = true;
        }
        let clock = app.elapsed_label(now);
        if clock != last_clock {
            last_clock = clock;
            needs_redraw = true;
        }

        let animating = tui.animation.is_some();
        if needs_redraw || animating {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, Instant::now()))?;
            needs_redraw = false;
        }

        let timeout = if tui.animation.is_some() {
            ANIMATION_FRAME
        } else {
            app.navigator
                .time_until_tick(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = event_action(event, &app, &mut tui, config.swipe_threshold)
                && dispatch(&mut app, &mut tui, action, &config, &tx)
            {
                break 'main;
            }
        }

        // Handle background task results
        while let Ok(message) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", message);
            match message {
                Message::Action(action) => {
                    dispatch(&mut app, &mut tui, action, &config, &tx);
                }
                Message::CopyFallback(text) => {
                    if copy_osc52(&text, config.osc52_fallback) {
                        dispatch(
                            &mut app,
                            &mut tui,
                            Action::Notify(COPIED_MESSAGE.to_string()),
                            &config,
                            &tx,
                        );
                    }
                }
            }
        }
    }

    info!(
        "Deckhand exiting on slide {}/{}",
        app.navigator.current(),
        app.navigator.total()
    );
    drop(_terminal_mode_guard);
    ratatui::restore();
    Ok(())
}

/// Run one action through the core and carry out its effect.
/// Returns `true` when the presenter should exit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Message>,
) -> bool {
    let now = Instant::now();
    let before = app.navigator.current();
    let effect = update(app, action, now);
    if app.navigator.current() != before {
        tui.slide_changed(app, now, config.transition_duration);
    }

    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::CopyToClipboard(text) => {
            spawn_copy(text, tx.clone());
            false
        }
        Effect::OpenUrl(url) => {
            spawn_open(url, tx.clone());
            false
        }
        Effect::PrintDeck(text) => {
            let message = print_deck(&text, Path::new(PRINT_FILE));
            update(app, Action::Notify(message), now);
            false
        }
    }
}

/// Translate a terminal event into a core action, handling TUI-local
/// events (scrolling, drag tracking, help dismissal) along the way.
fn event_action(
    event: TuiEvent,
    app: &App,
    tui: &mut TuiState,
    swipe_threshold: u16,
) -> Option<Action> {
    // Ctrl+C always quits
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }

    // While the help sheet is open, any key closes it
    if app.help_visible {
        return match event {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::ToggleHelp => Some(Action::ToggleHelp),
            TuiEvent::Resize
            | TuiEvent::ScrollUp
            | TuiEvent::ScrollDown
            | TuiEvent::MouseDown(..)
            | TuiEvent::MouseUp(..) => None,
            _ => Some(Action::CloseHelp),
        };
    }

    match event {
        TuiEvent::Next => Some(Action::Next),
        TuiEvent::Previous => Some(Action::Previous),
        TuiEvent::First => Some(Action::First),
        TuiEvent::Last => Some(Action::Last),
        TuiEvent::ToggleAutoAdvance => Some(Action::ToggleAutoAdvance),
        TuiEvent::ToggleNotes => Some(Action::ToggleNotes),
        TuiEvent::ToggleHelp => Some(Action::ToggleHelp),
        TuiEvent::ToggleFullscreen => Some(Action::ToggleFullscreen),
        TuiEvent::Print => Some(Action::Print),
        TuiEvent::CopyCode => Some(Action::CopyCode),
        TuiEvent::OpenDownload => Some(Action::OpenDownload),
        TuiEvent::NextWidget => Some(Action::CycleWidget(1)),
        TuiEvent::PreviousWidget => Some(Action::CycleWidget(-1)),
        TuiEvent::SelectWidgetIndex(index) => Some(Action::SelectWidgetIndex(index)),
        TuiEvent::Quit => Some(Action::Quit),
        // Esc leaves fullscreen; otherwise nothing to close
        TuiEvent::Escape => app.fullscreen.then_some(Action::ToggleFullscreen),
        TuiEvent::ScrollUp => {
            tui.scroll_state.scroll_up();
            None
        }
        TuiEvent::ScrollDown => {
            tui.scroll_state.scroll_down();
            None
        }
        TuiEvent::MouseDown(column, row) => {
            tui.drag_start = Some((column, row));
            None
        }
        TuiEvent::MouseUp(column, row) => {
            let start = tui.drag_start.take()?;
            if let Some(swipe) = swipe_direction(start.0, column, swipe_threshold) {
                debug!("Swipe {:?} from column {} to {}", swipe, start.0, column);
                return Some(match swipe {
                    Swipe::Left => Action::Next,
                    Swipe::Right => Action::Previous,
                });
            }
            if start != (column, row) {
                return None;
            }
            match ui::hit_test(tui, column, row)? {
                ClickTarget::Nav(NavHit::Previous) => Some(Action::Previous),
                ClickTarget::Nav(NavHit::Next) => Some(Action::Next),
                ClickTarget::Nav(NavHit::Dot(position)) => Some(Action::GoTo(position)),
                ClickTarget::Widget { category, key } => Some(Action::SelectWidget {
                    category,
                    key: key.to_string(),
                }),
            }
        }
        TuiEvent::Resize | TuiEvent::ForceQuit => None,
    }
}

fn spawn_copy(text: String, tx: mpsc::Sender<Message>) {
    info!("Copying {} bytes of code", text.len());
    tokio::task::spawn_blocking(move || {
        let message = match clipboard::write_external(&text) {
            Ok(tool) => {
                info!("Copied via {:?}", tool);
                Message::Action(Action::Notify(COPIED_MESSAGE.to_string()))
            }
            Err(e) => {
                warn!("External clipboard failed ({}), falling back to OSC 52", e);
                Message::CopyFallback(text)
            }
        };
        if tx.send(message).is_err() {
            warn!("Failed to report clipboard result: receiver dropped");
        }
    });
}

/// OSC 52 fallback, written straight to the terminal. Returns `true` on success.
fn copy_osc52(text: &str, enabled: bool) -> bool {
    if !enabled {
        warn!("OSC 52 fallback disabled in config; nothing copied");
        return false;
    }
    match clipboard::write_osc52(text, &mut stdout()) {
        Ok(()) => {
            info!("Copied {} bytes via OSC 52", text.len());
            true
        }
        Err(e) => {
            warn!("OSC 52 copy failed: {}", e);
            false
        }
    }
}

fn spawn_open(url: &'static str, tx: mpsc::Sender<Message>) {
    info!("Opening {}", url);
    tokio::task::spawn_blocking(move || {
        if let Err(e) = opener::open_url(url) {
            warn!("Failed to open {}: {}", url, e);
            let notify = Message::Action(Action::Notify(format!("Could not open {url}")));
            if tx.send(notify).is_err() {
                warn!("Failed to report opener failure: receiver dropped");
            }
        }
    });
}

/// Write the printable deck, returning the notification to show.
fn print_deck(text: &str, path: &Path) -> String {
    match std::fs::write(path, text) {
        Ok(()) => {
            info!("Printed deck to {}", path.display());
            format!("Deck printed to {}", path.display())
        }
        Err(e) => {
            warn!("Failed to print deck to {}: {}", path.display(), e);
            format!("Print failed: {e}")
        }
    }
}
