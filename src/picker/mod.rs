//! Blocking terminal list picker with a markdown detail view.
//!
//! Architecture follows the Elm shape: pure state ([`state`]), pure
//! transitions ([`update`]), pure rendering ([`view`]), and a thin effects
//! boundary ([`run`]) that owns the terminal. Everything interesting is
//! testable without a terminal.
//!
//! Typical use:
//!
//! ```no_run
//! use markpick::item::StringItem;
//! use markpick::picker::{Picker, PickerConfig};
//!
//! let items: Vec<StringItem> = vec!["alpha".into(), "beta".into()];
//! let picker = Picker::new(&items, PickerConfig::default())?;
//! if let Some(item) = picker.run()? {
//!     println!("{}", item.0);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod run;
pub mod state;
pub mod update;
pub mod view;

use crate::filter::FilterIndex;
use crate::item::InfoItem;
use crate::markdown::{MarkdownRenderer, SetupError};
use crate::palette::{Appearance, Palette};

use self::state::{DEFAULT_WIDTH, PickerState};
use self::view::{PickerStyles, ViewCtx};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Picker behavior and labeling.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Heading above the list; `None` leaves the line blank.
    pub title: Option<String>,
    /// Noun for one item, used in status and closing lines.
    pub name_singular: String,
    /// Noun for several items.
    pub name_plural: String,
    /// Whether typed characters narrow the list.
    pub filtering: bool,
    /// Whether space opens the detail view.
    pub detail: bool,
    /// Colors for chrome and detail rendering.
    pub palette: Palette,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            title: None,
            name_singular: "item".to_string(),
            name_plural: "items".to_string(),
            filtering: true,
            detail: true,
            palette: Palette::brand(),
        }
    }
}

// ============================================================================
// PICKER
// ============================================================================

/// A configured picker over a borrowed slice of items.
///
/// Construction resolves everything up front: display names, the filter
/// index, the markdown renderer, and styles. [`Picker::run`] then blocks
/// on the terminal until the user chooses or quits.
pub struct Picker<'a, I: InfoItem> {
    config: PickerConfig,
    items: &'a [I],
    names: Vec<String>,
    index: FilterIndex,
    renderer: MarkdownRenderer,
    styles: PickerStyles,
    pub(crate) state: PickerState,
}

impl<'a, I: InfoItem> Picker<'a, I> {
    /// Build a picker, probing the terminal for appearance detection.
    ///
    /// Fails with [`SetupError`] when no usable terminal is present.
    pub fn new(items: &'a [I], config: PickerConfig) -> Result<Self, SetupError> {
        let renderer = MarkdownRenderer::new(DEFAULT_WIDTH, &config.palette)?;
        Ok(Self::assemble(items, config, renderer))
    }

    /// Build a picker for a known appearance, without touching the
    /// terminal. Cannot fail; intended for tests and embedding hosts that
    /// manage the terminal themselves.
    pub fn with_appearance(items: &'a [I], config: PickerConfig, appearance: Appearance) -> Self {
        let renderer = MarkdownRenderer::with_appearance(DEFAULT_WIDTH, appearance, &config.palette);
        Self::assemble(items, config, renderer)
    }

    fn assemble(items: &'a [I], config: PickerConfig, renderer: MarkdownRenderer) -> Self {
        let names: Vec<String> = items.iter().map(|item| item.display_name()).collect();
        let index = FilterIndex::new(items);
        let styles = PickerStyles::new(&config.palette, renderer.appearance());
        let state = PickerState::browsing(items.len());
        Picker {
            config,
            items,
            names,
            index,
            renderer,
            styles,
            state,
        }
    }

    pub(crate) fn view_ctx(&self) -> ViewCtx<'_> {
        ViewCtx {
            title: self.config.title.as_deref(),
            singular: &self.config.name_singular,
            plural: &self.config.name_plural,
            names: &self.names,
            filtering: self.config.filtering,
            detail_enabled: self.config.detail,
            styles: &self.styles,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StringItem;
    use super::state::{Action, Mode};

    fn items() -> Vec<StringItem> {
        vec!["alpha".into(), "beta".into(), "gamma".into()]
    }

    fn picker(items: &[StringItem]) -> Picker<'_, StringItem> {
        Picker::with_appearance(items, PickerConfig::default(), Appearance::Dark)
    }

    #[test]
    fn construction_indexes_all_items() {
        let items = items();
        let picker = picker(&items);
        assert_eq!(picker.names, vec!["alpha", "beta", "gamma"]);
        assert_eq!(picker.state.visible, vec![0, 1, 2]);
    }

    #[test]
    fn typing_then_accept_chooses_the_filtered_item() {
        let items = items();
        let mut picker = picker(&items);
        picker.apply(&Action::Rune('b'));
        picker.apply(&Action::Rune('e'));
        assert_eq!(picker.state.visible, vec![1]);
        picker.apply(&Action::Accept);
        assert_eq!(picker.state.mode, Mode::Chosen(1));
    }

    #[test]
    fn space_renders_detail_and_esc_returns() {
        let items = items();
        let mut picker = picker(&items);
        picker.apply(&Action::Rune(' '));
        assert_eq!(picker.state.mode, Mode::Detail);
        assert!(!picker.state.detail.is_empty());
        picker.apply(&Action::Back);
        assert_eq!(picker.state.mode, Mode::Browsing);
    }

    #[test]
    fn resize_action_reseeds_render_width() {
        let items = items();
        let mut picker = picker(&items);
        picker.apply(&Action::Resize(132));
        assert_eq!(picker.state.width, 132);
        assert_eq!(picker.state.mode, Mode::Browsing);
    }

    #[test]
    fn interrupt_quits_from_browsing() {
        let items = items();
        let mut picker = picker(&items);
        picker.apply(&Action::Interrupt);
        assert_eq!(picker.state.mode, Mode::Quitting);
    }

    #[test]
    fn view_ctx_mirrors_configuration() {
        let items = items();
        let config = PickerConfig {
            title: Some("Choose".to_string()),
            name_singular: "recipe".to_string(),
            name_plural: "recipes".to_string(),
            filtering: false,
            detail: false,
            palette: Palette::brand(),
        };
        let picker = Picker::with_appearance(&items, config, Appearance::Light);
        let ctx = picker.view_ctx();
        assert_eq!(ctx.title, Some("Choose"));
        assert_eq!(ctx.singular, "recipe");
        assert!(!ctx.filtering);
        assert!(!ctx.detail_enabled);
    }

    #[test]
    fn default_config_filters_and_shows_detail() {
        let config = PickerConfig::default();
        assert!(config.filtering);
        assert!(config.detail);
        assert_eq!(config.name_plural, "items");
    }
}
