//! Form style table built from the brand palette.
//!
//! Pure transform: same palette in, same table out, every call. The table
//! is plain data consumed by a form-rendering layer when it draws its own
//! focused/blurred field widgets; nothing here touches the terminal.

use ratatui::style::{Modifier, Style};

use crate::palette::{AdaptiveColor, Appearance, Palette};

// ============================================================================
// STYLE PAIRS
// ============================================================================

/// A style with one variant per terminal appearance.
///
/// The light and dark variants are built from the same palette role, so a
/// pair stays visually coherent when the appearance flips.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StylePair {
    pub light: Style,
    pub dark: Style,
}

impl StylePair {
    /// Pick the style for the given appearance.
    pub fn resolve(&self, appearance: Appearance) -> Style {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

/// Foreground-only pair.
fn fg(color: AdaptiveColor) -> StylePair {
    StylePair {
        light: Style::new().fg(color.light),
        dark: Style::new().fg(color.dark),
    }
}

/// Bold foreground pair.
fn fg_bold(color: AdaptiveColor) -> StylePair {
    StylePair {
        light: Style::new().fg(color.light).add_modifier(Modifier::BOLD),
        dark: Style::new().fg(color.dark).add_modifier(Modifier::BOLD),
    }
}

/// Bold foreground-on-background pair (banners, buttons).
fn banner(fg: AdaptiveColor, bg: AdaptiveColor) -> StylePair {
    StylePair {
        light: Style::new().fg(fg.light).bg(bg.light).add_modifier(Modifier::BOLD),
        dark: Style::new().fg(fg.dark).bg(bg.dark).add_modifier(Modifier::BOLD),
    }
}

// ============================================================================
// TABLE SECTIONS
// ============================================================================

/// Styles for group headers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupStyles {
    pub title: StylePair,
}

/// Styles for one focus state of a form field.
///
/// The same shape serves both the focused and blurred sections; blurred
/// entries simply map to quieter palette roles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldStyles {
    pub title: StylePair,
    pub note_title: StylePair,
    pub description: StylePair,
    pub select_indicator: StylePair,
    pub selected_option: StylePair,
    pub unselected_option: StylePair,
    pub selected_prefix: StylePair,
    pub unselected_prefix: StylePair,
    pub option: StylePair,
    pub multi_select_indicator: StylePair,
    pub active_button: StylePair,
    pub input_prompt: StylePair,
    pub input_cursor: StylePair,
    pub error_message: StylePair,
    pub error_indicator: StylePair,
}

/// Styles for the key-hint help area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HelpStyles {
    pub short_key: StylePair,
    pub short_desc: StylePair,
    pub full_key: StylePair,
    pub full_desc: StylePair,
}

// ============================================================================
// FORM THEME
// ============================================================================

/// The complete style table for a themed form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormTheme {
    pub group: GroupStyles,
    pub focused: FieldStyles,
    pub blurred: FieldStyles,
    pub help: HelpStyles,
}

impl FormTheme {
    /// Build the style table from a palette.
    ///
    /// Deterministic and idempotent; no failure modes.
    pub fn new(palette: &Palette) -> Self {
        let accent = palette.accent();
        let body = palette.neutral_light();
        let dim = palette.neutral_dark();
        let mint = palette.emphasis_background();
        let error = palette.error();
        let black = AdaptiveColor::uniform(palette.black);

        let note_title = banner(accent, mint);

        FormTheme {
            group: GroupStyles {
                title: fg_bold(accent),
            },
            focused: FieldStyles {
                title: fg_bold(accent),
                note_title,
                description: fg(body),
                select_indicator: fg(accent),
                selected_option: fg(accent),
                unselected_option: StylePair::default(),
                selected_prefix: StylePair::default(),
                unselected_prefix: StylePair::default(),
                option: StylePair::default(),
                multi_select_indicator: fg(accent),
                active_button: banner(black, accent),
                input_prompt: fg(accent),
                input_cursor: fg(accent),
                error_message: fg(error),
                error_indicator: fg(error),
            },
            blurred: FieldStyles {
                title: fg(dim),
                note_title,
                description: fg(dim),
                select_indicator: StylePair::default(),
                selected_option: fg(dim),
                unselected_option: fg(dim),
                selected_prefix: fg(dim),
                unselected_prefix: fg(dim),
                option: fg(dim),
                multi_select_indicator: StylePair::default(),
                active_button: StylePair::default(),
                input_prompt: fg(dim),
                input_cursor: StylePair::default(),
                error_message: StylePair::default(),
                error_indicator: StylePair::default(),
            },
            help: HelpStyles {
                short_key: fg(accent),
                short_desc: fg(dim),
                full_key: fg(accent),
                full_desc: fg(dim),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
