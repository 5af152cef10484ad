//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::state::App;

/// A small deck: plain slides, a code slide, an explorer slide, a download slide.
pub const TEST_DECK: &str = "# Welcome

Intro text.

<!-- notes: Say hello. -->
---
# Install

```bash
flutter doctor
```

<!-- download: flutter-sdk -->
---
# Layout

<!-- explorer: layout -->
---
# Plain

Nothing to copy here.
---
# End
";

pub fn test_deck() -> Deck {
    Deck::parse("test", TEST_DECK).expect("test deck parses")
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        deck_file: None,
        start_slide: 1,
        auto_advance_period: Duration::from_secs(5),
        launch_auto_advance: None,
        swipe_threshold: 50,
        transition_duration: Duration::ZERO,
        osc52_fallback: true,
        platform: "linux x86_64".to_string(),
    }
}

/// Creates a test App on the small test deck, positioned at slide 1.
pub fn test_app() -> App {
    App::new(
        test_deck(),
        Duration::from_secs(5),
        "linux x86_64".to_string(),
        Instant::now(),
    )
}
