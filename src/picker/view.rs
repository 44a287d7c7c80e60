//! Pure rendering: map picker state to ratatui widget trees.
//!
//! One render function per mode, dispatched on the current [`Mode`].
//! Widget building is pure (state in, widgets out); the only effect is
//! `Frame::render_widget()` writing to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::palette::{Appearance, Palette};

use super::state::{DETAIL_HEIGHT, Mode, PickerState};

// ============================================================================
// STYLES
// ============================================================================

/// Concrete styles for the picker chrome, resolved once per picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerStyles {
    /// List title line.
    pub title: Style,
    /// Unselected list rows.
    pub item: Style,
    /// The row under the cursor.
    pub cursor: Style,
    /// Status, pagination, and help text.
    pub dim: Style,
    /// Closing confirmation lines.
    pub closing: Style,
    /// Detail viewport border.
    pub border: Style,
    /// Filter prompt marker.
    pub prompt: Style,
}

impl PickerStyles {
    pub fn new(palette: &Palette, appearance: Appearance) -> Self {
        let accent = palette.accent().resolve(appearance);
        let dim = palette.neutral_dark().resolve(appearance);
        PickerStyles {
            title: Style::new().add_modifier(Modifier::BOLD),
            item: Style::new(),
            cursor: Style::new().fg(accent),
            dim: Style::new().fg(dim),
            closing: Style::new(),
            border: Style::new().fg(palette.magenta),
            prompt: Style::new().fg(accent),
        }
    }
}

// ============================================================================
// VIEW CONTEXT
// ============================================================================

/// Read-only data the renderer needs beyond the state itself.
pub struct ViewCtx<'a> {
    pub title: Option<&'a str>,
    pub singular: &'a str,
    pub plural: &'a str,
    /// Display names, indexed like the caller's item slice.
    pub names: &'a [String],
    pub filtering: bool,
    pub detail_enabled: bool,
    pub styles: &'a PickerStyles,
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the picker to the terminal frame.
pub fn render(state: &PickerState, ctx: &ViewCtx<'_>, frame: &mut Frame) {
    // Honor the width from the last resize notification.
    let full = frame.area();
    let area = Rect {
        width: full.width.min(state.width),
        ..full
    };

    match state.mode {
        Mode::Browsing => render_browsing(state, ctx, frame, area),
        Mode::Detail => render_detail(state, ctx, frame, area),
        Mode::Chosen(item) => render_chosen(item, ctx, frame, area),
        Mode::Quitting => render_quitting(ctx, frame, area),
    }
}

// ============================================================================
// MODE: BROWSING
// ============================================================================

fn render_browsing(state: &PickerState, ctx: &ViewCtx<'_>, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // filter prompt
        Constraint::Min(0),    // list
        Constraint::Length(1), // status
        Constraint::Length(1), // help
    ])
    .split(area);

    if let Some(title) = ctx.title {
        let widget = Paragraph::new(Span::styled(format!("  {title}"), ctx.styles.title));
        frame.render_widget(widget, chunks[0]);
    }

    if ctx.filtering {
        let widget = Paragraph::new(Line::from(vec![
            Span::styled("  Filter: ", ctx.styles.dim),
            Span::raw(state.query.clone()),
            Span::styled("▌", ctx.styles.prompt),
        ]));
        frame.render_widget(widget, chunks[1]);
    }

    render_rows(state, ctx, frame, chunks[2]);

    frame.render_widget(
        Paragraph::new(Span::styled(status_line(state, ctx), ctx.styles.dim)),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(browsing_help(ctx), ctx.styles.dim)),
        chunks[4],
    );
}

fn render_rows(state: &PickerState, ctx: &ViewCtx<'_>, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (pos, &item) in state.visible.iter().enumerate() {
        let name = ctx.names.get(item).map(String::as_str).unwrap_or("?");
        let line = if pos == state.cursor {
            Line::from(Span::styled(
                format!("  > {}. {}", pos + 1, name),
                ctx.styles.cursor,
            ))
        } else {
            Line::from(Span::styled(
                format!("    {}. {}", pos + 1, name),
                ctx.styles.item,
            ))
        };
        lines.push(line);
    }

    if state.visible.is_empty() {
        let note = if state.query.is_empty() { "  (empty)" } else { "  (nothing matches)" };
        lines.push(Line::from(Span::styled(note, ctx.styles.dim)));
    }

    // Keep the cursor row inside the visible window.
    let visible_height = area.height as usize;
    let scroll = if visible_height > 0 && state.cursor >= visible_height {
        state.cursor - visible_height + 1
    } else {
        0
    };

    let widget = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn status_line(state: &PickerState, ctx: &ViewCtx<'_>) -> String {
    let count = state.visible.len();
    let label = if count == 1 { ctx.singular } else { ctx.plural };
    if state.query.is_empty() {
        format!("  {count} {label}")
    } else {
        format!("  {count} {label} (of {})", ctx.names.len())
    }
}

fn browsing_help(ctx: &ViewCtx<'_>) -> String {
    let mut segments = vec!["↑/↓ navigate", "enter choose"];
    if ctx.detail_enabled {
        segments.push("space details");
    }
    if ctx.filtering {
        segments.push("type to filter");
    }
    segments.push("ctrl+c quit");
    format!("  {}", segments.join("  •  "))
}

// ============================================================================
// MODE: DETAIL
// ============================================================================

fn render_detail(state: &PickerState, ctx: &ViewCtx<'_>, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(DETAIL_HEIGHT + 2), // viewport plus borders
        Constraint::Length(1),                 // key legend
        Constraint::Length(1),                 // scroll percentage
        Constraint::Min(0),
    ])
    .split(area);

    let block = Block::bordered()
        .border_style(ctx.styles.border)
        .padding(Padding::new(0, 2, 0, 0));
    let viewport = Paragraph::new(state.detail.clone())
        .block(block)
        .scroll((state.scroll, 0));
    frame.render_widget(viewport, chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "  ↑/↓ navigate  •  space/esc back to list  •  q quit",
            ctx.styles.dim,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("  scroll {:>3}%", state.scroll_percent()),
            ctx.styles.dim,
        )),
        chunks[2],
    );
}

// ============================================================================
// MODE: CHOSEN / QUITTING
// ============================================================================

fn render_chosen(item: usize, ctx: &ViewCtx<'_>, frame: &mut Frame, area: Rect) {
    let name = ctx.names.get(item).map(String::as_str).unwrap_or("?");
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("    {} \"{}\" selected", ctx.singular, name),
            ctx.styles.closing,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_quitting(ctx: &ViewCtx<'_>, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("    no {} selected", ctx.singular),
            ctx.styles.closing,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(70, 20);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn styles() -> PickerStyles {
        PickerStyles::new(&Palette::brand(), Appearance::Dark)
    }

    fn names() -> Vec<String> {
        vec!["alpha".into(), "beta".into(), "gamma".into()]
    }

    fn ctx<'a>(names: &'a [String], styles: &'a PickerStyles) -> ViewCtx<'a> {
        ViewCtx {
            title: Some("Pick one"),
            singular: "item",
            plural: "items",
            names,
            filtering: true,
            detail_enabled: true,
            styles,
        }
    }

    #[test]
    fn browsing_shows_numbered_rows_and_cursor_marker() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.cursor = 1;
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("1. alpha"), "got: {content}");
        assert!(content.contains("> 2. beta"), "got: {content}");
        assert!(content.contains("3. gamma"), "got: {content}");
        assert!(content.contains("Pick one"), "title should render");
    }

    #[test]
    fn browsing_shows_filter_query_and_status() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.query = "be".to_string();
        state.visible = vec![1];
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Filter: be"), "got: {content}");
        assert!(content.contains("1 item (of 3)"), "got: {content}");
    }

    #[test]
    fn status_uses_plural_label() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let state = PickerState::browsing(3);
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("3 items"));
    }

    #[test]
    fn unmatched_filter_shows_a_note() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.query = "zzz".to_string();
        state.visible.clear();
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("(nothing matches)"));
    }

    #[test]
    fn help_reflects_disabled_features() {
        let names = names();
        let styles = styles();
        let mut ctx = ctx(&names, &styles);
        ctx.detail_enabled = false;
        ctx.filtering = false;
        let help = browsing_help(&ctx);
        assert!(!help.contains("space details"));
        assert!(!help.contains("type to filter"));
        assert!(help.contains("ctrl+c quit"));
    }

    #[test]
    fn detail_shows_content_and_scroll_footer() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.mode = Mode::Detail;
        state.detail = vec![Line::from("rendered detail body")];
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("rendered detail body"), "got: {content}");
        assert!(content.contains("scroll 100%"), "got: {content}");
        assert!(content.contains("back to list"), "got: {content}");
    }

    #[test]
    fn detail_scroll_percent_reflects_offset() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.mode = Mode::Detail;
        state.detail = vec![Line::from("x"); DETAIL_HEIGHT as usize + 4];
        state.scroll = 2;
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("scroll  50%"));
    }

    #[test]
    fn chosen_names_the_item_with_its_label() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.mode = Mode::Chosen(1);
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("item \"beta\" selected"));
    }

    #[test]
    fn quitting_reports_nothing_chosen() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.mode = Mode::Quitting;
        terminal.draw(|frame| render(&state, &ctx, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("no item selected"));
    }

    #[test]
    fn every_mode_renders_without_panic() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        for mode in [Mode::Browsing, Mode::Detail, Mode::Chosen(0), Mode::Quitting] {
            let mut state = PickerState::browsing(3);
            state.mode = mode;
            terminal
                .draw(|frame| render(&state, &ctx, frame))
                .expect("every mode should render");
        }
    }

    #[test]
    fn narrow_resize_width_is_honored() {
        let mut terminal = make_terminal();
        let names = names();
        let styles = styles();
        let ctx = ctx(&names, &styles);
        let mut state = PickerState::browsing(3);
        state.width = 10;
        terminal
            .draw(|frame| render(&state, &ctx, frame))
            .expect("narrow width should render");
        // Content beyond column 10 stays blank.
        let buffer = terminal.backend().buffer().clone();
        for y in 0..20 {
            for x in 10..70 {
                assert_eq!(buffer[(x, y)].symbol(), " ");
            }
        }
    }
}
