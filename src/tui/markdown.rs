//! Markdown → ratatui `Text` renderer for slide bodies.
//!
//! Thin wrapper around `pulldown_cmark` that converts markdown events into
//! styled `Line`/`Span` values. Headings, bold, italic, inline code, fenced
//! code blocks (with syntect highlighting), lists, blockquotes, and links.
//! HTML (including deck directive comments) is skipped.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME_NAME: &str = "base16-ocean.dark";

/// Languages missing from syntect's default set, mapped to a close relative.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("dart", "java"),
    ("kotlin", "java"),
    ("powershell", "sh"),
    ("ps1", "sh"),
    ("yaml", "yml"),
];

/// Parse markdown content into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

/// Syntax-highlight a bare code snippet (no markdown, no borders).
pub fn highlight_code(code: &str, lang: &str) -> Text<'static> {
    let mut text = Text::default();
    match find_syntax(lang) {
        Some(syntax) => {
            let mut hl = HighlightLines::new(syntax, theme());
            for line in LinesWithEndings::from(code) {
                text.lines.push(highlight_line(&mut hl, line));
            }
        }
        None => {
            for line in code.lines() {
                text.lines.push(Line::from(Span::styled(
                    line.replace('\t', "    "),
                    Style::default().fg(Color::White),
                )));
            }
        }
    }
    text
}

fn theme() -> &'static Theme {
    &THEME_SET.themes[THEME_NAME]
}

fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
    if lang.is_empty() {
        return None;
    }
    SYNTAX_SET.find_syntax_by_token(lang).or_else(|| {
        LANGUAGE_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(lang))
            .and_then(|(_, target)| SYNTAX_SET.find_syntax_by_token(target))
    })
}

/// One highlighted line. Failed highlighting degrades to plain text.
fn highlight_line(hl: &mut HighlightLines<'static>, line: &str) -> Line<'static> {
    match hl.highlight_line(line, &SYNTAX_SET) {
        Ok(ranges) => Line::from(
            ranges
                .into_iter()
                .filter_map(|(hl_style, frag)| {
                    let content = frag.trim_end_matches('\n').replace('\t', "    ");
                    if content.is_empty() {
                        return None;
                    }
                    let fg = Color::Rgb(
                        hl_style.foreground.r,
                        hl_style.foreground.g,
                        hl_style.foreground.b,
                    );
                    Some(Span::styled(content, Style::default().fg(fg)))
                })
                .collect::<Vec<_>>(),
        ),
        Err(_) => Line::from(line.trim_end_matches('\n').replace('\t', "    ")),
    }
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`, code block border).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// Active syntax highlighter for fenced code blocks.
    highlighter: Option<HighlightLines<'static>>,
    /// True when inside a code block without syntax highlighting.
    in_plain_code: bool,
    /// Stored link URL, appended after the link text closes (unless it equals the text).
    link_url: Option<String>,
    link_text: String,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            line_prefixes: vec![],
            list_indices: vec![],
            highlighter: None,
            in_plain_code: false,
            link_url: None,
            link_text: String::new(),
            needs_newline: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Event dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "☑ " } else { "☐ " };
                self.push_span(Span::raw(marker));
            }
            _ => {} // HTML, footnotes, math
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            // ── Block elements ──────────────────────────────────────────
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.push_style(heading_style(self.base_fg, level));
            }
            Tag::BlockQuote(_) => {
                self.blank_line_if_needed();
                self.line_prefixes.push(Span::styled(
                    "▌ ",
                    Style::default().fg(Color::Cyan),
                ));
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => {
                self.blank_line_if_needed();
                let lang = match &kind {
                    CodeBlockKind::Fenced(l) => l.split_whitespace().next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };

                // Top border: ╭── lang  or just ╭──
                let bs = Style::default().fg(Color::DarkGray);
                let top = if lang.is_empty() {
                    Line::from(Span::styled("╭──", bs))
                } else {
                    Line::from(vec![
                        Span::styled("╭── ", bs),
                        Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                        Span::styled(" ──", bs),
                    ])
                };
                self.push_line(top);
                self.line_prefixes.push(Span::styled("│ ", bs));

                match find_syntax(lang) {
                    Some(syn) => self.highlighter = Some(HighlightLines::new(syn, theme())),
                    None => self.in_plain_code = true,
                }
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let depth = self.list_indices.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}• "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(Color::Cyan)));
                }
            }

            // ── Inline elements ─────────────────────────────────────────
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.link_text.clear();
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {} // Tables, images, definitions
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::BlockQuote(_) => {
                self.line_prefixes.pop();
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_plain_code = false;
                self.line_prefixes.pop();
                let bs = Style::default().fg(Color::DarkGray);
                self.push_line(Line::from(Span::styled("╰──", bs)));
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Item => {}
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                // Autolinks (`<https://...>`) already show the URL as their text
                if let Some(url) = self.link_url.take()
                    && url != self.link_text
                {
                    self.push_span(Span::styled(
                        format!(" ({url})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            _ => {}
        }
    }

    // ── Content handlers ────────────────────────────────────────────────

    fn text(&mut self, cow: CowStr<'_>) {
        // Expand tabs → 4 spaces (ratatui renders \t as zero-width)
        let text = cow.replace('\t', "    ");

        // Take the highlighter out so highlight_line and push_line don't both borrow self
        if let Some(mut hl) = self.highlighter.take() {
            for line in LinesWithEndings::from(text.as_str()) {
                let highlighted = highlight_line(&mut hl, line);
                self.push_line(highlighted);
            }
            self.highlighter = Some(hl);
            return;
        }

        if self.in_plain_code {
            let code_style = Style::default().fg(Color::White);
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
            }
            return;
        }

        if self.link_url.is_some() {
            self.link_text.push_str(&text);
        }
        let style = self.style();
        self.push_span(Span::styled(text, style));
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        let style = Style::default().fg(Color::Yellow).bg(Color::Rgb(40, 44, 52));
        self.push_span(Span::styled(cow.to_string(), style));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn heading_has_no_hash_prefix() {
        let text = render("# Hello", Color::White);
        let line = &text.lines[0];
        assert_eq!(plain(&text)[0], "Hello");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[0].style.fg, Some(Color::LightCyan));
    }

    #[test]
    fn bold_text_is_bold() {
        let text = render("Some **bold** text", Color::Blue);
        let line = &text.lines[0];
        let bold_span = line.spans.iter().find(|s| s.content == "bold").unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn bullet_lists_use_dots() {
        let text = render("- one\n- two", Color::White);
        let lines = plain(&text);
        assert!(lines.iter().any(|l| l == "• one"), "got {:?}", lines);
        assert!(lines.iter().any(|l| l == "• two"));
    }

    #[test]
    fn code_block_has_border_structure() {
        let text = render("```\nline1\nline2\n```", Color::Blue);
        let all_content = plain(&text);
        assert!(all_content[0].starts_with('╭'), "expected top border, got {:?}", all_content[0]);
        assert!(all_content[1].starts_with("│ "));
        assert!(all_content[1].contains("line1"));
        assert!(all_content[2].contains("line2"));
        assert!(all_content.last().unwrap().starts_with('╰'));
    }

    #[test]
    fn directive_comments_are_not_rendered() {
        let text = render("Hello\n\n<!-- explorer: layout -->\n", Color::White);
        assert!(plain(&text).iter().all(|l| !l.contains("explorer")));
    }

    #[test]
    fn autolink_url_not_repeated() {
        let text = render("Docs: <https://docs.flutter.dev>", Color::White);
        let line = plain(&text).concat();
        assert_eq!(line.matches("https://docs.flutter.dev").count(), 1);
    }

    #[test]
    fn dart_is_highlighted_through_alias() {
        let text = highlight_code("Container(\n  width: 200,\n)", "dart");
        assert_eq!(text.lines.len(), 3);
        let colored = text.lines[0]
            .spans
            .iter()
            .all(|s| matches!(s.style.fg, Some(Color::Rgb(..))));
        assert!(colored);
    }

    #[test]
    fn unknown_language_falls_back_to_plain() {
        let text = highlight_code("a\n\tb", "no-such-language");
        assert_eq!(plain(&text), vec!["a".to_string(), "    b".to_string()]);
    }
}
