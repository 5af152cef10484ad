use std::time::{Duration, Instant};

use deckhand::core::action::{Action, Effect, update};
use deckhand::core::catalog::Category;
use deckhand::core::config::{CliOverrides, load_config_from, resolve};
use deckhand::core::deck::{Deck, DeckError, Transition};
use deckhand::core::downloads::DownloadTarget;
use deckhand::core::explorer::WidgetExplorer;
use deckhand::core::navigator::{Navigator, Tick};
use deckhand::core::state::App;
use deckhand::core::view::{RenderTarget, SlideStatus};

// ============================================================================
// Helper Functions
// ============================================================================

/// Records every render-target call in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl RenderTarget for Recorder {
    fn set_slide_state(&mut self, position: usize, status: SlideStatus, transition: Transition) {
        self.calls
            .push(format!("slide {position} {status:?} {}", transition.class_name()));
    }
    fn set_counter(&mut self, current: usize, total: usize) {
        self.calls.push(format!("counter {current}/{total}"));
    }
    fn set_progress(&mut self, fraction: f64) {
        self.calls.push(format!("progress {fraction:.2}"));
    }
    fn set_controls(&mut self, previous_enabled: bool, next_enabled: bool) {
        self.calls.push(format!("controls {previous_enabled} {next_enabled}"));
    }
    fn set_dot_active(&mut self, position: usize, active: bool) {
        if active {
            self.calls.push(format!("dot {position}"));
        }
    }
    fn set_widget_display(&mut self, category: Category, name: &str, _code: &str) {
        self.calls.push(format!("widget {category} {name}"));
    }
    fn set_widget_active(&mut self, category: Category, key: &str) {
        self.calls.push(format!("active {category} {key}"));
    }
}

fn builtin_app() -> App {
    App::new(
        Deck::builtin().expect("built-in deck loads"),
        Duration::from_secs(5),
        "linux x86_64".to_string(),
        Instant::now(),
    )
}

// ============================================================================
// Built-in deck
// ============================================================================

#[test]
fn test_builtin_deck_has_twenty_slides() {
    let deck = Deck::builtin().unwrap();
    assert_eq!(deck.len(), 20);
    for (i, slide) in deck.slides().iter().enumerate() {
        assert_eq!(slide.position, i + 1);
        assert_eq!(slide.transition, Transition::for_position(i + 1));
        assert!(!slide.title.is_empty());
    }
}

#[test]
fn test_builtin_deck_wires_explorers_and_downloads() {
    let deck = Deck::builtin().unwrap();
    let explorers: Vec<Category> = deck.slides().iter().filter_map(|s| s.explorer).collect();
    assert_eq!(explorers, Category::ALL.to_vec());

    let downloads: Vec<DownloadTarget> =
        deck.slides().iter().filter_map(|s| s.download).collect();
    for target in DownloadTarget::ALL {
        assert!(downloads.contains(&target), "no slide downloads {target}");
    }
}

// ============================================================================
// Navigator through the RenderTarget seam
// ============================================================================

#[test]
fn test_navigation_publishes_full_state() {
    let mut nav = Navigator::new(3);
    let mut rec = Recorder::default();
    assert!(nav.next(&mut rec));

    assert!(rec.calls.contains(&"slide 1 Prior transition-slide-left".to_string()));
    assert!(rec.calls.contains(&"slide 2 Active transition-fade".to_string()));
    assert!(rec.calls.contains(&"slide 3 Upcoming transition-slide-right".to_string()));
    assert!(rec.calls.contains(&"counter 2/3".to_string()));
    assert!(rec.calls.contains(&"controls true true".to_string()));
    assert_eq!(rec.calls.iter().filter(|c| c.starts_with("dot")).count(), 1);
}

#[test]
fn test_rejected_navigation_publishes_nothing() {
    let mut nav = Navigator::new(3);
    let mut rec = Recorder::default();
    assert!(!nav.previous(&mut rec));
    assert!(!nav.go_to(0, &mut rec));
    assert!(!nav.go_to(4, &mut rec));
    assert!(rec.calls.is_empty());
}

#[test]
fn test_auto_advance_walks_deck_then_stops() {
    let mut nav = Navigator::new(3);
    let mut rec = Recorder::default();
    let start = Instant::now();
    let period = Duration::from_secs(1);
    assert!(nav.start_auto_advance(period, start));

    assert_eq!(nav.tick(start + period, &mut rec), Tick::Advanced);
    assert_eq!(nav.tick(start + period * 2, &mut rec), Tick::Advanced);
    assert_eq!(nav.current(), 3);
    assert_eq!(nav.tick(start + period * 3, &mut rec), Tick::Stopped);
    assert!(!nav.is_auto_advancing());
}

#[test]
fn test_explorer_unknown_key_leaves_region_alone() {
    let mut explorer = WidgetExplorer::new();
    let mut rec = Recorder::default();
    assert!(!explorer.select(Category::Ui, "gizmo", &mut rec));
    assert!(rec.calls.is_empty());

    assert!(explorer.select(Category::Ui, "card", &mut rec));
    assert_eq!(rec.calls, vec!["widget ui Card", "active ui card"]);
}

// ============================================================================
// Presenter flow
// ============================================================================

#[test]
fn test_presenter_flow_on_builtin_deck() {
    let mut app = builtin_app();
    let now = Instant::now();

    update(&mut app, Action::Last, now);
    assert_eq!(app.view.current, 20);
    assert!(!app.view.next_enabled);
    assert_eq!(app.view.progress, 1.0);

    // Jump to the layout explorer and copy the selected widget
    let layout_slide = app
        .deck
        .slides()
        .iter()
        .find(|s| s.explorer == Some(Category::Layout))
        .map(|s| s.position)
        .unwrap();
    update(&mut app, Action::GoTo(layout_slide), now);
    update(&mut app, Action::SelectWidgetIndex(2), now);
    let row_code = Category::Layout.entries()[2].code;
    assert_eq!(
        update(&mut app, Action::CopyCode, now),
        Effect::CopyToClipboard(row_code.to_string())
    );

    // The VS Code slide opens the platform-specific installer
    let vscode_slide = app
        .deck
        .slides()
        .iter()
        .find(|s| s.download == Some(DownloadTarget::VsCode))
        .map(|s| s.position)
        .unwrap();
    update(&mut app, Action::GoTo(vscode_slide), now);
    assert_eq!(
        update(&mut app, Action::OpenDownload, now),
        Effect::OpenUrl(DownloadTarget::VsCode.url("linux x86_64"))
    );
    assert_eq!(
        app.notification_text(now),
        Some("Opening VS Code download page...")
    );
}

#[test]
fn test_print_covers_every_slide() {
    let mut app = builtin_app();
    match update(&mut app, Action::Print, Instant::now()) {
        Effect::PrintDeck(text) => {
            assert!(text.contains("==== Slide 1 / 20"));
            assert!(text.contains("==== Slide 20 / 20"));
        }
        other => panic!("expected PrintDeck, got {:?}", other),
    }
}

// ============================================================================
// Deck files and config
// ============================================================================

#[test]
fn test_deck_file_with_bad_directive_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talk.md");
    std::fs::write(&path, "# One\n---\n# Two\n<!-- explorer: gadgets -->\n").unwrap();
    match Deck::load(&path) {
        Err(DeckError::UnknownCategory { slide, value }) => {
            assert_eq!(slide, 2);
            assert_eq!(value, "gadgets");
        }
        other => panic!("expected UnknownCategory, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_config_file_drives_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[presentation]\nstart_slide = 3\ntransition_ms = 0\n\n[clipboard]\nosc52_fallback = false\n",
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let resolved = resolve(
        &config,
        &CliOverrides {
            auto_advance_secs: Some(10),
            ..Default::default()
        },
    );
    assert_eq!(resolved.start_slide, 3);
    assert_eq!(resolved.transition_duration, Duration::ZERO);
    assert!(!resolved.osc52_fallback);
    assert_eq!(resolved.launch_auto_advance, Some(Duration::from_secs(10)));

    let app = App::from_config(Deck::builtin().unwrap(), &resolved, Instant::now());
    assert_eq!(app.navigator.current(), 3);
}

#[test]
fn test_missing_config_generates_commented_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = load_config_from(&path).unwrap();
    assert!(config.presentation.start_slide.is_none());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("# [presentation]"));
}
