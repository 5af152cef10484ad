//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.deckhand/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::downloads::host_platform;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckhandConfig {
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PresentationConfig {
    pub deck_file: Option<String>,
    pub start_slide: Option<usize>,
    pub auto_advance_secs: Option<u64>,
    pub swipe_threshold: Option<u16>,
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClipboardConfig {
    pub osc52_fallback: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Period used by the `a` key.
pub const DEFAULT_AUTO_ADVANCE_SECS: u64 = 5;
/// Period used by a bare `--auto` flag.
pub const DEFAULT_LAUNCH_AUTO_ADVANCE_SECS: u64 = 10;
/// Horizontal drag distance (in cells) that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 50;
pub const DEFAULT_TRANSITION_MS: u64 = 300;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` presents the built-in deck.
    pub deck_file: Option<PathBuf>,
    pub start_slide: usize,
    pub auto_advance_period: Duration,
    /// Start auto-advancing at launch with this period.
    pub launch_auto_advance: Option<Duration>,
    pub swipe_threshold: u16,
    pub transition_duration: Duration,
    pub osc52_fallback: bool,
    /// Lowercased `"<os> <arch>"` used to pick download artifacts.
    pub platform: String,
}

/// Values taken from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub deck: Option<PathBuf>,
    pub start: Option<usize>,
    pub auto_advance_secs: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.deckhand/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".deckhand"))
}

/// Returns the path to `~/.deckhand/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.deckhand/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckhandConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeckhandConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckhandConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DeckhandConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DeckhandConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DeckhandConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Deckhand Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [presentation]
# deck_file = "talk.md"          # Relative to ~/.deckhand/; or DECKHAND_DECK / --deck
# start_slide = 1                # Or --start
# auto_advance_secs = 5          # Period for the `a` key; or DECKHAND_AUTO_ADVANCE_SECS
# swipe_threshold = 50           # Drag distance in cells that counts as a swipe
# transition_ms = 300            # Slide entrance animation length (0 disables)

# [clipboard]
# osc52_fallback = true          # Copy via terminal escape when no clipboard tool works
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DeckhandConfig, cli: &CliOverrides) -> ResolvedConfig {
    let presentation = &config.presentation;

    // Deck: CLI → env → config (relative to ~/.deckhand/) → built-in
    let deck_file = cli
        .deck
        .clone()
        .or_else(|| std::env::var("DECKHAND_DECK").ok().map(PathBuf::from))
        .or_else(|| presentation.deck_file.as_deref().map(resolve_config_relative));

    // Auto-advance period: env → config → default
    let auto_advance_secs = env_u64("DECKHAND_AUTO_ADVANCE_SECS")
        .or(presentation.auto_advance_secs)
        .unwrap_or(DEFAULT_AUTO_ADVANCE_SECS);

    // Platform: env override → host
    let platform = std::env::var("DECKHAND_PLATFORM")
        .ok()
        .unwrap_or_else(host_platform)
        .to_ascii_lowercase();

    ResolvedConfig {
        deck_file,
        start_slide: cli.start.or(presentation.start_slide).unwrap_or(1),
        auto_advance_period: Duration::from_secs(auto_advance_secs),
        launch_auto_advance: cli.auto_advance_secs.map(Duration::from_secs),
        swipe_threshold: presentation
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD),
        transition_duration: Duration::from_millis(
            presentation.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
        ),
        osc52_fallback: config.clipboard.osc52_fallback.unwrap_or(true),
        platform,
    }
}

/// Absolute paths pass through; relative ones are taken from `~/.deckhand/`.
fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}
