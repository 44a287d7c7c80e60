//! Pure state transitions: (state, action) -> transition.
//!
//! This is the core logic of the picker. Fully testable without a
//! terminal. Each mode defines which actions it accepts; unhandled
//! actions leave the state untouched. Terminal modes accept nothing.

use ratatui::text::Line;

use crate::filter::FilterIndex;
use crate::markdown::RenderError;

use super::PickerConfig;
use super::state::{Action, DETAIL_HEIGHT, LIST_HEIGHT, Mode, PickerState, Transition};

/// Pure transition function.
///
/// Given the current state, an action, the filter index, and the picker
/// configuration, produce the next transition. The effects boundary
/// interprets the result.
pub fn update(
    mut state: PickerState,
    action: &Action,
    index: &FilterIndex,
    config: &PickerConfig,
) -> Transition {
    if state.mode.is_terminal() {
        return Transition::State(state);
    }

    // Width updates apply in every live mode and never change the mode.
    if let Action::Resize(width) = action {
        state.width = *width;
        return Transition::State(state);
    }

    match state.mode {
        Mode::Browsing => update_browsing(state, action, index, config),
        Mode::Detail => Transition::State(update_detail(state, action)),
        Mode::Chosen(_) | Mode::Quitting => unreachable!("terminal modes handled above"),
    }
}

// ============================================================================
// BROWSING
// ============================================================================

fn update_browsing(
    mut state: PickerState,
    action: &Action,
    index: &FilterIndex,
    config: &PickerConfig,
) -> Transition {
    let len = state.visible.len();

    match action {
        Action::Interrupt => {
            state.mode = Mode::Quitting;
        }
        Action::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        Action::CursorDown => {
            state.cursor = if len == 0 { 0 } else { (state.cursor + 1).min(len - 1) };
        }
        Action::PageUp => {
            state.cursor = state.cursor.saturating_sub(LIST_HEIGHT as usize);
        }
        Action::PageDown => {
            let jump = state.cursor + LIST_HEIGHT as usize;
            state.cursor = if len == 0 { 0 } else { jump.min(len - 1) };
        }
        Action::Accept => {
            // Enter with nothing highlighted ends the session empty-handed.
            state.mode = match state.selected_item() {
                Some(item) => Mode::Chosen(item),
                None => Mode::Quitting,
            };
        }
        Action::Rune(' ') => {
            if config.detail
                && let Some(item) = state.selected_item()
            {
                return Transition::Detail(state, item);
            }
        }
        Action::Rune(c) => {
            if config.filtering {
                state.query.push(*c);
                refilter(&mut state, index);
            }
        }
        Action::EraseChar => {
            if config.filtering && state.query.pop().is_some() {
                refilter(&mut state, index);
            }
        }
        Action::Back => {
            if config.filtering && !state.query.is_empty() {
                state.query.clear();
                refilter(&mut state, index);
            }
        }
        Action::Resize(_) => unreachable!("resize handled before mode dispatch"),
    }

    Transition::State(state)
}

/// Recompute the visible set for the current query and reset the cursor.
fn refilter(state: &mut PickerState, index: &FilterIndex) {
    state.visible = index.visible(&state.query);
    state.cursor = 0;
}

// ============================================================================
// DETAIL
// ============================================================================

fn update_detail(mut state: PickerState, action: &Action) -> PickerState {
    match action {
        Action::Interrupt | Action::Rune('q') => {
            state.mode = Mode::Quitting;
        }
        Action::Rune(' ') | Action::Back => {
            // Content is retained, just no longer displayed.
            state.mode = Mode::Browsing;
        }
        Action::CursorUp => {
            state.scroll = state.scroll.saturating_sub(1);
        }
        Action::CursorDown => {
            state.scroll = (state.scroll + 1).min(state.max_scroll());
        }
        Action::PageUp => {
            state.scroll = state.scroll.saturating_sub(DETAIL_HEIGHT);
        }
        Action::PageDown => {
            state.scroll = (state.scroll + DETAIL_HEIGHT).min(state.max_scroll());
        }
        _ => {}
    }
    state
}

// ============================================================================
// DETAIL ENTRY
// ============================================================================

/// Apply a detail render result and enter detail mode.
///
/// A failed conversion still enters detail: the viewport shows the error
/// inline and the user can escape back, rather than being blocked.
pub fn enter_detail(
    mut state: PickerState,
    rendered: Result<Vec<Line<'static>>, RenderError>,
) -> PickerState {
    state.detail = match rendered {
        Ok(lines) => lines,
        Err(err) => vec![Line::from(format!("failed to render detail view: {err}"))],
    };
    state.scroll = 0;
    state.mode = Mode::Detail;
    state
}

// ============================================================================
// TESTS
// ============================================================================
