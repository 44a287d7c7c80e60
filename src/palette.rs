//! Brand palette and adaptive color resolution.
//!
//! Pure data. The palette is an explicitly constructed value passed into
//! the theme builder and the picker, so multiple themes can coexist
//! without shared globals.
//!
//! Color semantics:
//! - Accent: interactive highlights (selection marker, focused titles)
//! - Neutral light/dark: body text and de-emphasized text
//! - Emphasis background: note banners
//! - Error: validation failures

use ratatui::style::Color;

// ============================================================================
// APPEARANCE
// ============================================================================

/// Terminal background appearance, used to resolve adaptive color pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    /// Detect the terminal appearance from the `COLORFGBG` convention.
    ///
    /// Unknown or missing values default to dark, the safer assumption for
    /// terminal emulators.
    pub fn detect() -> Self {
        match std::env::var("COLORFGBG") {
            Ok(value) => Self::from_colorfgbg(&value),
            Err(_) => Appearance::Dark,
        }
    }

    /// Parse a `COLORFGBG` value like `"15;0"` (foreground;background).
    ///
    /// Background indices 0-6 and 8 are the dark half of the 16-color cube.
    pub fn from_colorfgbg(value: &str) -> Self {
        let bg = value.rsplit(';').next().and_then(|s| s.trim().parse::<u8>().ok());
        match bg {
            Some(n) if n <= 6 || n == 8 => Appearance::Dark,
            Some(_) => Appearance::Light,
            None => Appearance::Dark,
        }
    }
}

// ============================================================================
// ADAPTIVE COLORS
// ============================================================================

/// A (light-appearance, dark-appearance) color choice, resolved at render
/// time against the detected [`Appearance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveColor {
    pub light: Color,
    pub dark: Color,
}

impl AdaptiveColor {
    /// An adaptive pair that is the same color in both appearances.
    pub const fn uniform(color: Color) -> Self {
        AdaptiveColor { light: color, dark: color }
    }

    /// Pick the color for the given appearance.
    pub const fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// The fixed brand palette: 11 named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub lime: Color,
    pub magenta: Color,
    pub forest: Color,
    pub mint: Color,
    pub maroon: Color,
    pub blue: Color,
    pub light_gray: Color,
    pub gray: Color,
    pub dark_gray: Color,
    pub white: Color,
    pub black: Color,
}

impl Palette {
    /// The canonical brand palette.
    pub const fn brand() -> Self {
        Palette {
            lime: Color::Rgb(0x93, 0xC3, 0x0B),
            magenta: Color::Rgb(0xBD, 0x36, 0x8D),
            forest: Color::Rgb(0x00, 0x46, 0x10),
            mint: Color::Rgb(0xDB, 0xEA, 0xE5),
            maroon: Color::Rgb(0x4B, 0x03, 0x25),
            blue: Color::Rgb(0x24, 0x4A, 0x66),
            light_gray: Color::Rgb(0xF5, 0xF5, 0xF5),
            gray: Color::Rgb(0xA6, 0xA6, 0xA6),
            dark_gray: Color::Rgb(0x4B, 0x4B, 0x4B),
            white: Color::Rgb(0xFF, 0xFF, 0xFF),
            black: Color::Rgb(0x00, 0x00, 0x00),
        }
    }

    /// Interactive highlight: magenta on light backgrounds, the brighter
    /// lime on dark ones.
    pub const fn accent(&self) -> AdaptiveColor {
        AdaptiveColor { light: self.magenta, dark: self.lime }
    }

    /// Primary body text.
    pub const fn neutral_light(&self) -> AdaptiveColor {
        AdaptiveColor { light: self.dark_gray, dark: self.light_gray }
    }

    /// De-emphasized text.
    pub const fn neutral_dark(&self) -> AdaptiveColor {
        AdaptiveColor { light: self.dark_gray, dark: self.gray }
    }

    /// Banner / note background.
    pub const fn emphasis_background(&self) -> AdaptiveColor {
        AdaptiveColor::uniform(self.mint)
    }

    /// Validation failures. Pure red in both appearances.
    pub const fn error(&self) -> AdaptiveColor {
        AdaptiveColor::uniform(Color::Rgb(0xFF, 0x00, 0x00))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::brand()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_dark_backgrounds() {
        assert_eq!(Appearance::from_colorfgbg("15;0"), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg("7;4"), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg("15;8"), Appearance::Dark);
    }

    #[test]
    fn colorfgbg_light_backgrounds() {
        assert_eq!(Appearance::from_colorfgbg("0;15"), Appearance::Light);
        assert_eq!(Appearance::from_colorfgbg("0;7"), Appearance::Light);
    }

    #[test]
    fn colorfgbg_garbage_defaults_to_dark() {
        assert_eq!(Appearance::from_colorfgbg(""), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg("nonsense"), Appearance::Dark);
    }

    #[test]
    fn adaptive_color_resolves_per_appearance() {
        let pair = AdaptiveColor { light: Color::Black, dark: Color::White };
        assert_eq!(pair.resolve(Appearance::Light), Color::Black);
        assert_eq!(pair.resolve(Appearance::Dark), Color::White);
    }

    #[test]
    fn accent_is_magenta_light_lime_dark() {
        let p = Palette::brand();
        assert_eq!(p.accent().resolve(Appearance::Light), p.magenta);
        assert_eq!(p.accent().resolve(Appearance::Dark), p.lime);
    }

    #[test]
    fn emphasis_background_is_mint_in_both() {
        let p = Palette::brand();
        assert_eq!(p.emphasis_background().light, p.mint);
        assert_eq!(p.emphasis_background().dark, p.mint);
    }

    #[test]
    fn brand_palette_hex_values() {
        let p = Palette::brand();
        assert_eq!(p.lime, Color::Rgb(0x93, 0xC3, 0x0B));
        assert_eq!(p.magenta, Color::Rgb(0xBD, 0x36, 0x8D));
        assert_eq!(p.mint, Color::Rgb(0xDB, 0xEA, 0xE5));
    }
}
