//! Picker effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::item::InfoItem;

use super::Picker;
use super::state::{Action, Mode, Transition};
use super::update::{enter_detail, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Plain characters
/// all map to [`Action::Rune`]; the transition function decides whether a
/// rune filters, opens detail, or quits, depending on mode.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Interrupt);
    }

    match key.code {
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Enter => Some(Action::Accept),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Backspace => Some(Action::EraseChar),
        KeyCode::Char(c) => Some(Action::Rune(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

impl<'a, I: InfoItem> Picker<'a, I> {
    /// Run the picker until the user chooses an item or quits.
    ///
    /// Blocks on terminal input. Returns the chosen item, or `None` when
    /// the session ends without a choice. The terminal is restored before
    /// returning, including on input errors.
    pub fn run(mut self) -> io::Result<Option<&'a I>> {
        install_panic_hook();
        let mut terminal = setup_terminal()?;

        // crossterm sends no initial resize event; seed the width here so
        // the first frame already fills wider terminals.
        if let Ok((width, _)) = crossterm::terminal::size() {
            self.apply(&Action::Resize(width));
        }

        let outcome = self.event_loop(&mut terminal);
        restore_terminal()?;
        outcome?;

        Ok(match self.state.mode {
            Mode::Chosen(item) => self.items.get(item),
            _ => None,
        })
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            // Render (terminal modes draw their closing line once)
            let ctx = self.view_ctx();
            terminal.draw(|frame| render(&self.state, &ctx, frame))?;
            drop(ctx);

            if self.state.mode.is_terminal() {
                return Ok(());
            }

            // Block on the next terminal event
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(key) {
                        self.apply(&action);
                    }
                }
                Event::Resize(width, _) => self.apply(&Action::Resize(width)),
                _ => {} // ignore mouse, focus, paste
            }
        }
    }

    /// Apply one action: run the pure transition, then any effect it asks
    /// for. Rendering an item's detail is the only effect.
    pub(crate) fn apply(&mut self, action: &Action) {
        let state = std::mem::take(&mut self.state);
        self.state = match update(state, action, &self.index, &self.config) {
            Transition::State(next) => next,
            Transition::Detail(next, item) => {
                let source = self
                    .items
                    .get(item)
                    .map(InfoItem::detail)
                    .unwrap_or_default();
                enter_detail(next, self.renderer.render(&source))
            }
        };
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_maps_to_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Interrupt));
    }

    #[test]
    fn plain_c_maps_to_rune() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Rune('c')));
    }

    #[test]
    fn arrow_keys_map_to_cursor_movement() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(map_key(up), Some(Action::CursorUp));
        assert_eq!(map_key(down), Some(Action::CursorDown));
    }

    #[test]
    fn page_keys_map_to_page_movement() {
        let up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(map_key(up), Some(Action::PageUp));
        assert_eq!(map_key(down), Some(Action::PageDown));
    }

    #[test]
    fn enter_maps_to_accept() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Accept));
    }

    #[test]
    fn esc_maps_to_back() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Back));
    }

    #[test]
    fn backspace_maps_to_erase() {
        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::EraseChar));
    }

    #[test]
    fn space_maps_to_a_space_rune() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Rune(' ')));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }
}
