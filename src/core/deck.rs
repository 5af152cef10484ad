//! # Slide Deck
//!
//! The immutable list of slides being presented.
//!
//! ```text
//! Deck
//! ├── name: String                 // "built-in" or the deck file stem
//! └── slides: Vec<Slide>
//!     ├── position: usize          // 1-based, stable
//!     ├── title: String            // first `#` heading
//!     ├── body: String             // markdown with directives stripped
//!     ├── transition: Transition   // palette[(position - 1) % len]
//!     ├── explorer: Option<Category>
//!     ├── download: Option<DownloadTarget>
//!     └── notes: Option<String>
//! ```
//!
//! Slides come from two places: the built-in talk embedded by `build.rs`
//! (one file per slide), or a markdown file whose slides are separated by
//! `---` lines. Directives live in HTML comments so they never render:
//!
//! ```text
//! <!-- explorer: layout -->
//! <!-- download: flutter-sdk -->
//! <!-- notes: anything, may span lines -->
//! ```

use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::core::catalog::Category;
use crate::core::downloads::DownloadTarget;

include!(concat!(env!("OUT_DIR"), "/builtin_slides.rs"));

// ============================================================================
// Transitions
// ============================================================================

/// Entrance animation style of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    SlideLeft,
    Fade,
    SlideRight,
    Zoom,
    Flip,
    Rotate,
    Bounce,
    Diagonal,
}

/// Cyclic palette: slide N uses `PALETTE[(N - 1) % PALETTE.len()]`.
pub const PALETTE: [Transition; 20] = [
    Transition::SlideLeft,
    Transition::Fade,
    Transition::SlideRight,
    Transition::Zoom,
    Transition::SlideLeft,
    Transition::Flip,
    Transition::Rotate,
    Transition::Bounce,
    Transition::Diagonal,
    Transition::Fade,
    Transition::Rotate,
    Transition::SlideLeft,
    Transition::Zoom,
    Transition::SlideRight,
    Transition::Flip,
    Transition::Fade,
    Transition::Diagonal,
    Transition::Bounce,
    Transition::SlideLeft,
    Transition::Zoom,
];

impl Transition {
    /// Palette entry for a 1-based slide position.
    pub fn for_position(position: usize) -> Self {
        PALETTE[position.saturating_sub(1) % PALETTE.len()]
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Transition::SlideLeft => "transition-slide-left",
            Transition::Fade => "transition-fade",
            Transition::SlideRight => "transition-slide-right",
            Transition::Zoom => "transition-zoom",
            Transition::Flip => "transition-flip",
            Transition::Rotate => "transition-rotate",
            Transition::Bounce => "transition-bounce",
            Transition::Diagonal => "transition-diagonal",
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Empty,
    UnknownCategory { slide: usize, value: String },
    UnknownDownload { slide: usize, value: String },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Empty => write!(f, "deck contains no slides"),
            DeckError::UnknownCategory { slide, value } => {
                write!(f, "slide {slide}: unknown explorer category '{value}'")
            }
            DeckError::UnknownDownload { slide, value } => {
                write!(f, "slide {slide}: unknown download target '{value}'")
            }
        }
    }
}

impl std::error::Error for DeckError {}

// ============================================================================
// Slides
// ============================================================================

#[derive(Debug, Clone)]
pub struct Slide {
    pub position: usize,
    pub title: String,
    pub body: String,
    pub transition: Transition,
    pub explorer: Option<Category>,
    pub download: Option<DownloadTarget>,
    pub notes: Option<String>,
}

impl Slide {
    /// Parse one slide's markdown, extracting directives.
    pub fn parse(position: usize, source: &str) -> Result<Self, DeckError> {
        let mut body = String::with_capacity(source.len());
        let mut explorer = None;
        let mut download = None;
        let mut notes: Option<String> = None;

        // Comments inside code fences are sample code, not directives
        let fences = fenced_ranges(source);
        let mut pos = 0;
        while let Some(found) = source[pos..].find("<!--") {
            let start = pos + found;
            if let Some(fence) = fences.iter().find(|fence| fence.contains(&start)) {
                body.push_str(&source[pos..fence.end]);
                pos = fence.end;
                continue;
            }
            body.push_str(&source[pos..start]);
            let after_open = start + 4;
            let Some(end) = source[after_open..].find("-->") else {
                // Unterminated comment: keep it as text
                body.push_str(&source[start..]);
                pos = source.len();
                break;
            };
            let inner = source[after_open..after_open + end].trim();
            pos = after_open + end + 3;

            let Some((name, value)) = inner.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match name.trim().to_ascii_lowercase().as_str() {
                "explorer" => {
                    let category = value.parse::<Category>().map_err(|value| {
                        DeckError::UnknownCategory { slide: position, value }
                    })?;
                    if explorer.replace(category).is_some() {
                        warn!("Slide {}: multiple explorer directives, using '{}'", position, value);
                    }
                }
                "download" => {
                    let target = value.parse::<DownloadTarget>().map_err(|value| {
                        DeckError::UnknownDownload { slide: position, value }
                    })?;
                    if download.replace(target).is_some() {
                        warn!("Slide {}: multiple download directives, using '{}'", position, value);
                    }
                }
                "notes" => {
                    let text = value.lines().map(str::trim).collect::<Vec<_>>().join(" ");
                    match notes.as_mut() {
                        Some(existing) => {
                            existing.push(' ');
                            existing.push_str(&text);
                        }
                        None => notes = Some(text),
                    }
                }
                other => debug!("Slide {}: ignoring comment '{}'", position, other),
            }
        }
        body.push_str(&source[pos..]);

        let body = tidy_blank_lines(&body);
        let title = first_heading(&body).unwrap_or_else(|| format!("Slide {position}"));

        Ok(Self {
            position,
            title,
            body,
            transition: Transition::for_position(position),
            explorer,
            download,
            notes,
        })
    }

    /// Text of the first fenced or indented code block, if any.
    pub fn first_code_block(&self) -> Option<String> {
        let mut code: Option<String> = None;
        for event in Parser::new(&self.body) {
            match event {
                Event::Start(Tag::CodeBlock(_)) => code = Some(String::new()),
                Event::Text(text) => {
                    if let Some(buf) = code.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    return code.map(|c| c.trim_end_matches('\n').to_string());
                }
                _ => {}
            }
        }
        None
    }
}

/// Text of the first H1 heading.
fn first_heading(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut title = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level: HeadingLevel::H1, .. }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = title.trim().to_string();
                return (!title.is_empty()).then_some(title);
            }
            Event::Text(t) | Event::Code(t) if in_h1 => title.push_str(&t),
            _ => {}
        }
    }
    None
}

/// Opening or closing marker of a fenced code block on this line.
fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    ["```", "~~~"].into_iter().find(|marker| trimmed.starts_with(marker))
}

/// Byte ranges of fenced code blocks, fences included. An unclosed fence
/// runs to the end of the text.
fn fenced_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut open: Option<(&str, usize)> = None;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if let Some(marker) = fence_marker(line) {
            match open {
                Some((open_marker, start)) if open_marker == marker => {
                    ranges.push(start..offset + line.len());
                    open = None;
                }
                None => open = Some((marker, offset)),
                Some(_) => {}
            }
        }
        offset += line.len();
    }
    if let Some((_, start)) = open {
        ranges.push(start..text.len());
    }
    ranges
}

/// Collapse runs of blank lines left behind by stripped directives.
fn tidy_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.trim().lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// ============================================================================
// Deck
// ============================================================================

#[derive(Debug, Clone)]
pub struct Deck {
    pub name: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from per-slide markdown sources. Whitespace-only
    /// sources are skipped; positions are assigned after skipping.
    pub fn from_sources<'a>(
        name: impl Into<String>,
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, DeckError> {
        let mut slides = Vec::new();
        for source in sources.into_iter().filter(|s| !s.trim().is_empty()) {
            slides.push(Slide::parse(slides.len() + 1, source)?);
        }
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self {
            name: name.into(),
            slides,
        })
    }

    /// The talk embedded at build time from `assets/slides/`.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_sources("built-in", BUILTIN_SLIDES.iter().copied())
    }

    /// Parse a single markdown document with `---` separated slides.
    pub fn parse(name: impl Into<String>, markdown: &str) -> Result<Self, DeckError> {
        let chunks = split_slides(markdown);
        Self::from_sources(name, chunks.iter().map(String::as_str))
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());
        let deck = Self::parse(name, &contents)?;
        info!("Loaded {} slides from {}", deck.len(), path.display());
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a 1-based position.
    pub fn slide(&self, position: usize) -> Option<&Slide> {
        position.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Plain-text rendition of every slide, for printing.
    pub fn print_text(&self, generated_at: DateTime<Local>) -> String {
        let total = self.len();
        let mut out = format!(
            "{} ({} slides), printed {}\n",
            self.name,
            total,
            generated_at.format("%Y-%m-%d %H:%M")
        );
        for slide in &self.slides {
            out.push('\n');
            out.push_str(&format!(
                "==== Slide {} / {}: {} ====\n\n",
                slide.position, total, slide.title
            ));
            out.push_str(&slide.body);
            if let Some(notes) = &slide.notes {
                out.push_str(&format!("\nNotes: {notes}\n"));
            }
        }
        out
    }
}

/// Split on lines that are exactly `---`, ignoring those inside code fences.
fn split_slides(markdown: &str) -> Vec<String> {
    let mut slides = vec![String::new()];
    let mut fence: Option<&str> = None;
    for line in markdown.lines() {
        if let Some(marker) = fence_marker(line) {
            fence = match fence {
                Some(open) if open == marker => None,
                None => Some(marker),
                other => other,
            };
        }
        if fence.is_none() && line.trim() == "---" {
            slides.push(String::new());
            continue;
        }
        if let Some(current) = slides.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }
    slides
}
