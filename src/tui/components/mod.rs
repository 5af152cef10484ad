//! # TUI Components
//!
//! Everything drawn on the presenter screen:
//!
//! ```text
//! ┌ TitleBar ─────────────────────────────────────────┐
//! ├ ProgressBar ──────────────────────────────────────┤
//! │ SlideView                                          │
//! │   markdown body (scrolls)                          │
//! │   WidgetExplorerPanel   (explorer slides only)     │
//! │   speaker notes         (when toggled)             │
//! ├ SlideNav  ◀ ○ ● ○ ▶ ──────────────────────────────┤
//! └────────────────────────────────────────────────────┘
//!           HelpOverlay drawn on top when open
//! ```
//!
//! Components are built per frame with props borrowed from `App` and
//! `TuiState`. The ones that can be clicked (`SlideNav`,
//! `WidgetExplorerPanel`) leave their hit-test rectangles behind after
//! `render` for the event loop.

pub mod help_overlay;
pub mod progress_bar;
pub mod slide_nav;
pub mod slide_view;
mod title_bar;
pub mod widget_explorer;

pub use help_overlay::HelpOverlay;
pub use progress_bar::ProgressBar;
pub use slide_nav::{NavHit, NavLayout, SlideNav};
pub use slide_view::SlideView;
pub use title_bar::TitleBar;
pub use widget_explorer::WidgetHit;
