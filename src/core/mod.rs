//! # Core Presentation Logic
//!
//! This module contains Deckhand's presentation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (slides)        │
//!                    │  • Navigator, Explorer  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │ RenderTarget
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  DeckView  │      │   tests    │
//!     │  Adapter   │      │ (snapshot) │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all presentation state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`navigator`]: Bounded slide index and its derived visual state
//! - [`explorer`] / [`catalog`]: Widget sample lookup and display
//! - [`view`]: The `RenderTarget` seam and its `DeckView` snapshot

pub mod action;
pub mod auto_advance;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod downloads;
pub mod explorer;
pub mod navigator;
pub mod state;
pub mod view;
