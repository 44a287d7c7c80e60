//! Picker state algebra: pure types, zero effects.
//!
//! These types define the entire state space of the list/detail
//! controller. Illegal states are unrepresentable: the chosen item index
//! lives inside [`Mode::Chosen`], so "chosen while still browsing" cannot
//! be expressed. The transition function and rendering layer both program
//! against these types.

use ratatui::text::Line;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Wrap/render width before the first resize arrives.
pub const DEFAULT_WIDTH: u16 = 80;

/// Rows reserved for the browsing list.
pub const LIST_HEIGHT: u16 = 16;

/// Rows of detail content visible at once.
pub const DETAIL_HEIGHT: u16 = LIST_HEIGHT - 2;

// ============================================================================
// MODE
// ============================================================================

/// The controller's current mode.
///
/// `Chosen` and `Quitting` are terminal: once either is reached no further
/// actions are processed and the run loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating and filtering the list.
    #[default]
    Browsing,
    /// Reading one item's rendered detail text.
    Detail,
    /// The user committed this item (index into the caller's slice).
    Chosen(usize),
    /// The user quit without choosing.
    Quitting,
}

impl Mode {
    /// Terminal modes end the run loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::Chosen(_) | Mode::Quitting)
    }
}

// ============================================================================
// STATE
// ============================================================================

/// Complete picker state. Rendering is a pure function of this value.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub mode: Mode,
    /// Cursor position within `visible`.
    pub cursor: usize,
    /// Current filter query (empty when not filtering).
    pub query: String,
    /// Item indices currently shown, best match first.
    pub visible: Vec<usize>,
    /// Rendered detail content. Retained when leaving detail mode; it is
    /// simply not displayed.
    pub detail: Vec<Line<'static>>,
    /// Detail viewport scroll offset, in lines.
    pub scroll: u16,
    /// Render width, updated by resize notifications.
    pub width: u16,
}

impl PickerState {
    /// Initial browsing state over `item_count` items, nothing filtered.
    pub fn browsing(item_count: usize) -> Self {
        PickerState {
            mode: Mode::Browsing,
            cursor: 0,
            query: String::new(),
            visible: (0..item_count).collect(),
            detail: Vec::new(),
            scroll: 0,
            width: DEFAULT_WIDTH,
        }
    }

    /// The item index under the cursor, if any item is visible.
    pub fn selected_item(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    /// Largest valid scroll offset for the current detail content.
    pub fn max_scroll(&self) -> u16 {
        self.detail.len().saturating_sub(DETAIL_HEIGHT as usize) as u16
    }

    /// Scroll position as a percentage; content that fits reports 100.
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_scroll();
        if max == 0 {
            100
        } else {
            // Widened: scroll * 100 can exceed u16 on long documents.
            (u32::from(self.scroll) * 100 / u32::from(max)) as u16
        }
    }
}

/// Placeholder used while handing state through the transition function.
impl Default for PickerState {
    fn default() -> Self {
        PickerState::browsing(0)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic input, decoupled from raw key events.
///
/// The effects layer maps key presses to actions; the transition function
/// decides what each action means in the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor up (browsing) or scroll up (detail).
    CursorUp,
    /// Move the cursor down (browsing) or scroll down (detail).
    CursorDown,
    /// Jump a page up.
    PageUp,
    /// Jump a page down.
    PageDown,
    /// Commit the highlighted item.
    Accept,
    /// Escape: clear the filter (browsing) or leave detail.
    Back,
    /// A typed character: filter input, or a detail-mode binding.
    Rune(char),
    /// Erase the last filter character.
    EraseChar,
    /// The terminal was resized to this width.
    Resize(u16),
    /// Process interrupt: quit immediately.
    Interrupt,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure transition.
///
/// Pure code describes what should happen; the effects boundary interprets
/// it. `Detail` asks the effects layer to render one item's markdown and
/// then apply [`super::update::enter_detail`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Continue with this state.
    State(PickerState),
    /// Render item `index`'s detail text, then enter detail mode.
    Detail(PickerState, usize),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browsing_starts_with_everything_visible() {
        let state = PickerState::browsing(3);
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.visible, vec![0, 1, 2]);
        assert_eq!(state.cursor, 0);
        assert!(state.query.is_empty());
    }

    #[test]
    fn terminal_modes_are_terminal() {
        assert!(Mode::Chosen(0).is_terminal());
        assert!(Mode::Quitting.is_terminal());
        assert!(!Mode::Browsing.is_terminal());
        assert!(!Mode::Detail.is_terminal());
    }

    #[test]
    fn selected_item_tracks_cursor_through_visible() {
        let mut state = PickerState::browsing(3);
        state.visible = vec![2, 0];
        state.cursor = 1;
        assert_eq!(state.selected_item(), Some(0));
        state.cursor = 5;
        assert_eq!(state.selected_item(), None);
    }

    #[test]
    fn short_detail_reports_full_scroll() {
        let mut state = PickerState::browsing(1);
        state.detail = vec![Line::from("only"); 3];
        assert_eq!(state.max_scroll(), 0);
        assert_eq!(state.scroll_percent(), 100);
    }

    #[test]
    fn scroll_percent_scales_with_offset() {
        let mut state = PickerState::browsing(1);
        state.detail = vec![Line::from("x"); DETAIL_HEIGHT as usize + 10];
        assert_eq!(state.max_scroll(), 10);
        state.scroll = 0;
        assert_eq!(state.scroll_percent(), 0);
        state.scroll = 5;
        assert_eq!(state.scroll_percent(), 50);
        state.scroll = 10;
        assert_eq!(state.scroll_percent(), 100);
    }

    #[test]
    fn scroll_percent_handles_long_content() {
        let mut state = PickerState::browsing(1);
        state.detail = vec![Line::from("x"); 800];
        state.scroll = state.max_scroll();
        assert_eq!(state.scroll_percent(), 100);
        state.scroll = 700;
        assert_eq!(state.scroll_percent(), 89);
    }

    #[test]
    fn default_state_is_empty_browsing() {
        let state = PickerState::default();
        assert_eq!(state.mode, Mode::Browsing);
        assert!(state.visible.is_empty());
        assert_eq!(state.width, DEFAULT_WIDTH);
    }
}
