//! Markdown detail text -> styled terminal lines.
//!
//! Parsing is delegated to pulldown-cmark; this module walks the event
//! stream into `ratatui` lines, word-wrapped at a fixed width. The walk is
//! pure; the only effect is the terminal capability probe at construction.
//!
//! Two failure kinds exist, and only two:
//! - [`SetupError`]: the renderer could not initialize (no usable
//!   terminal). Raised at construction, propagated to the caller.
//! - [`RenderError`]: one document could not be converted. Recovered by
//!   the picker, which shows the error inline instead of detail content.

use pulldown_cmark::{Event, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::palette::{Appearance, Palette};

/// Block nesting deeper than this is rejected rather than rendered.
pub const MAX_NESTING: usize = 16;

// ============================================================================
// ERRORS
// ============================================================================

/// The renderer could not initialize.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("terminal capability detection failed: {0}")]
    Capability(#[from] std::io::Error),
}

/// A single document could not be converted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("markdown nesting deeper than {MAX_NESTING} levels")]
    NestingTooDeep,
}

// ============================================================================
// RENDERER
// ============================================================================

/// Styles used by the converter, resolved once per renderer.
#[derive(Debug, Clone, Copy)]
struct MdStyles {
    heading: Style,
    body: Style,
    inline_code: Style,
    code_block: Style,
    dim: Style,
    link: Style,
}

impl MdStyles {
    fn resolve(palette: &Palette, appearance: Appearance) -> Self {
        let accent = palette.accent().resolve(appearance);
        let dim = palette.neutral_dark().resolve(appearance);
        MdStyles {
            heading: Style::new().fg(accent).add_modifier(Modifier::BOLD),
            body: Style::new(),
            inline_code: Style::new().fg(accent),
            code_block: Style::new().fg(dim),
            dim: Style::new().fg(dim),
            link: Style::new().fg(accent).add_modifier(Modifier::UNDERLINED),
        }
    }
}

/// Converts markdown strings to styled lines at a fixed wrap width.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    wrap: u16,
    appearance: Appearance,
    styles: MdStyles,
}

impl MarkdownRenderer {
    /// Create a renderer, probing the terminal first.
    ///
    /// Fails with [`SetupError`] when no terminal can be detected; styling
    /// decisions are meaningless without one.
    pub fn new(wrap: u16, palette: &Palette) -> Result<Self, SetupError> {
        crossterm::terminal::size()?;
        Ok(Self::with_appearance(wrap, Appearance::detect(), palette))
    }

    /// Create a renderer for a known appearance, without touching the
    /// terminal. Construction this way cannot fail.
    pub fn with_appearance(wrap: u16, appearance: Appearance, palette: &Palette) -> Self {
        MarkdownRenderer {
            wrap: wrap.max(10),
            appearance,
            styles: MdStyles::resolve(palette, appearance),
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn wrap_width(&self) -> u16 {
        self.wrap
    }

    /// Convert one markdown document into styled lines.
    pub fn render(&self, source: &str) -> Result<Vec<Line<'static>>, RenderError> {
        let mut writer = Writer::new(self.wrap as usize, self.styles);
        for event in Parser::new(source) {
            writer.event(event)?;
        }
        Ok(writer.finish())
    }
}

// ============================================================================
// EVENT WALK
// ============================================================================

struct Writer {
    width: usize,
    styles: MdStyles,
    lines: Vec<Line<'static>>,
    /// Inline runs of the block being accumulated.
    runs: Vec<(String, Style)>,
    /// Effective inline style stack; last entry applies to new text.
    style_stack: Vec<Style>,
    /// Ordered-list counters; `None` for bullet lists.
    list_stack: Vec<Option<u64>>,
    quote_depth: usize,
    /// True until the current list item has flushed its first line.
    item_fresh: bool,
    in_code_block: bool,
    code_buf: String,
    link_dest: Vec<String>,
}

impl Writer {
    fn new(width: usize, styles: MdStyles) -> Self {
        Writer {
            width,
            styles,
            lines: Vec::new(),
            runs: Vec::new(),
            style_stack: vec![styles.body],
            list_stack: Vec::new(),
            quote_depth: 0,
            item_fresh: false,
            in_code_block: false,
            code_buf: String::new(),
            link_dest: Vec::new(),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start(tag)?,
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_buf.push_str(&text);
                } else {
                    self.push_run(text.to_string());
                }
            }
            Event::Code(text) => {
                self.runs.push((text.to_string(), self.styles.inline_code));
            }
            Event::SoftBreak | Event::HardBreak => self.push_run(" ".to_string()),
            Event::Rule => {
                self.blank_separator();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(self.width),
                    self.styles.dim,
                )));
            }
            // Raw HTML, footnotes, and task markers are passed over; the
            // detail view is prose, not a browser.
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) -> Result<(), RenderError> {
        match tag {
            Tag::Paragraph => {
                if self.list_stack.is_empty() {
                    self.blank_separator();
                }
            }
            Tag::Heading(..) => {
                self.blank_separator();
                self.push_style(self.styles.heading);
            }
            Tag::BlockQuote => {
                self.check_depth()?;
                if self.quote_depth == 0 {
                    self.blank_separator();
                }
                self.quote_depth += 1;
            }
            Tag::List(start) => {
                self.check_depth()?;
                // An item's own text ends where its sublist begins.
                if !self.runs.is_empty() {
                    self.flush_item();
                }
                if self.list_stack.is_empty() {
                    self.blank_separator();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.item_fresh = true;
            }
            Tag::CodeBlock(_) => {
                self.blank_separator();
                self.in_code_block = true;
                self.code_buf.clear();
            }
            Tag::Emphasis => self.push_style(self.current_style().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(self.current_style().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(self.current_style().add_modifier(Modifier::CROSSED_OUT));
            }
            Tag::Link(_, dest, _) => {
                self.link_dest.push(dest.to_string());
                self.push_style(self.styles.link);
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.flush_block(),
            Tag::Heading(..) => {
                self.flush_block();
                self.pop_style();
            }
            Tag::BlockQuote => self.quote_depth = self.quote_depth.saturating_sub(1),
            Tag::List(_) => {
                self.list_stack.pop();
            }
            Tag::Item => {
                if !self.runs.is_empty() || self.item_fresh {
                    self.flush_item();
                }
                if let Some(Some(counter)) = self.list_stack.last_mut() {
                    *counter += 1;
                }
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                let indent = format!("{}    ", self.quote_prefix());
                let buf = std::mem::take(&mut self.code_buf);
                for code_line in buf.lines() {
                    self.lines.push(Line::from(vec![
                        Span::styled(indent.clone(), self.styles.dim),
                        Span::styled(code_line.to_string(), self.styles.code_block),
                    ]));
                }
            }
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => self.pop_style(),
            Tag::Link(..) => {
                self.pop_style();
                if let Some(dest) = self.link_dest.pop() {
                    self.runs.push((format!("({dest})"), self.styles.dim));
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.runs.is_empty() {
            self.flush_block();
        }
        self.lines
    }

    // -- inline state --

    fn current_style(&self) -> Style {
        *self.style_stack.last().unwrap_or(&Style::new())
    }

    fn push_style(&mut self, style: Style) {
        self.style_stack.push(style);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn push_run(&mut self, text: String) {
        let style = self.current_style();
        self.runs.push((text, style));
    }

    fn check_depth(&self) -> Result<(), RenderError> {
        if self.list_stack.len() + self.quote_depth + 1 > MAX_NESTING {
            return Err(RenderError::NestingTooDeep);
        }
        Ok(())
    }

    // -- block flushing --

    fn quote_prefix(&self) -> String {
        "│ ".repeat(self.quote_depth)
    }

    fn blank_separator(&mut self) {
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    /// Flush accumulated runs as a plain block (paragraph, heading).
    fn flush_block(&mut self) {
        let prefix = self.quote_prefix();
        self.flush_runs(prefix.clone(), prefix);
    }

    /// Flush accumulated runs as a list item, spending the bullet on the
    /// first flush and indenting continuations.
    fn flush_item(&mut self) {
        let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
        let bullet = match self.list_stack.last() {
            Some(Some(counter)) => format!("{counter}. "),
            _ => "• ".to_string(),
        };
        let quote = self.quote_prefix();
        let hang = " ".repeat(bullet.width());
        let first = if self.item_fresh {
            format!("{quote}{indent}{bullet}")
        } else {
            format!("{quote}{indent}{hang}")
        };
        let rest = format!("{quote}{indent}{hang}");
        self.item_fresh = false;
        self.flush_runs(first, rest);
    }

    fn flush_runs(&mut self, first_prefix: String, rest_prefix: String) {
        let runs = std::mem::take(&mut self.runs);
        let wrapped = wrap_runs(&runs, self.width, &first_prefix, &rest_prefix, self.styles.dim);
        self.lines.extend(wrapped);
    }
}

// ============================================================================
// WORD WRAP
// ============================================================================

/// Greedy word wrap over styled runs.
///
/// Words keep the style of the run they came from; prefixes are styled
/// with `prefix_style` so quote bars stay de-emphasized. Tokens wider
/// than the usable width (long URLs, identifiers) are hard-broken at
/// character boundaries so no line exceeds the wrap width.
fn wrap_runs(
    runs: &[(String, Style)],
    width: usize,
    first_prefix: &str,
    rest_prefix: &str,
    prefix_style: Style,
) -> Vec<Line<'static>> {
    let usable = width.saturating_sub(rest_prefix.width()).max(1);
    let words: Vec<(&str, Style)> = runs
        .iter()
        .flat_map(|(text, style)| text.split_whitespace().map(move |w| (w, *style)))
        .flat_map(|(word, style)| {
            hard_break(word, usable).into_iter().map(move |piece| (piece, style))
        })
        .collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::styled(first_prefix.to_string(), prefix_style)];
    let mut line_width = first_prefix.width();
    let mut has_word = false;

    for (word, style) in words {
        let word_width = word.width();
        let sep = usize::from(has_word);
        if has_word && line_width + sep + word_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::styled(rest_prefix.to_string(), prefix_style));
            line_width = rest_prefix.width();
            has_word = false;
        }
        if has_word {
            spans.push(Span::raw(" "));
            line_width += 1;
        }
        spans.push(Span::styled(word.to_string(), style));
        line_width += word_width;
        has_word = true;
    }
    lines.push(Line::from(spans));
    lines
}

/// Split one token into pieces no wider than `max` display columns.
fn hard_break(word: &str, max: usize) -> Vec<&str> {
    if word.width() <= max {
        return vec![word];
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut piece_width = 0;
    for (offset, ch) in word.char_indices() {
        let char_width = ch.width().unwrap_or(0);
        if piece_width + char_width > max && piece_width > 0 {
            pieces.push(&word[start..offset]);
            start = offset;
            piece_width = 0;
        }
        piece_width += char_width;
    }
    pieces.push(&word[start..]);
    pieces
}

// ============================================================================
// TESTS
// ============================================================================
