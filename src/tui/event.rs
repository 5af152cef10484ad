use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Navigation (passed to core::update)
    Next,
    Previous,
    First,
    Last,

    // Presenter toggles
    ToggleAutoAdvance,
    ToggleNotes,
    ToggleHelp,
    ToggleFullscreen,
    Print,
    CopyCode,
    OpenDownload,

    // Widget explorer
    NextWidget,
    PreviousWidget,
    SelectWidgetIndex(usize),

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    MouseDown(u16, u16),
    MouseUp(u16, u16),
    Resize,
    Escape,
    Quit,
    ForceQuit,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(event) => map_event(event),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => map_mouse(mouse_event),
        Event::Resize(..) => Some(TuiEvent::Resize),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too; act on presses (and held repeats) only
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::Print),
        (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => None,

        (_, KeyCode::Right | KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ')) => {
            Some(TuiEvent::Next)
        }
        (_, KeyCode::Left | KeyCode::Up | KeyCode::PageUp) => Some(TuiEvent::Previous),
        (_, KeyCode::Home) => Some(TuiEvent::First),
        (_, KeyCode::End) => Some(TuiEvent::Last),

        (_, KeyCode::Tab) => Some(TuiEvent::NextWidget),
        (_, KeyCode::BackTab) => Some(TuiEvent::PreviousWidget),
        (_, KeyCode::Char(c @ '1'..='9')) => {
            Some(TuiEvent::SelectWidgetIndex(c as usize - '1' as usize))
        }

        (_, KeyCode::F(11)) | (_, KeyCode::Char('f')) => Some(TuiEvent::ToggleFullscreen),
        (_, KeyCode::Char('a' | 'A')) => Some(TuiEvent::ToggleAutoAdvance),
        (_, KeyCode::Char('n' | 'N')) => Some(TuiEvent::ToggleNotes),
        (_, KeyCode::Char('?')) => Some(TuiEvent::ToggleHelp),
        (_, KeyCode::Char('y')) => Some(TuiEvent::CopyCode),
        (_, KeyCode::Char('o')) => Some(TuiEvent::OpenDownload),
        (_, KeyCode::Char('j')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Char('k')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        _ => None,
    }
}

fn map_mouse(mouse_event: MouseEvent) -> Option<TuiEvent> {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row))
        }
        MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}

/// Direction of a completed horizontal drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged leftward: show the next slide.
    Left,
    /// Dragged rightward: show the previous slide.
    Right,
}

/// Classify a drag from `start_col` to `end_col`. Movement must strictly
/// exceed `threshold` columns.
pub fn swipe_direction(start_col: u16, end_col: u16, threshold: u16) -> Option<Swipe> {
    let delta = i32::from(end_col) - i32::from(start_col);
    if delta.unsigned_abs() <= u32::from(threshold) {
        None
    } else if delta < 0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}
