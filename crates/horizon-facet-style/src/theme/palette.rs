//! Base color palettes.
//!
//! A [`ColorPalette`] holds the handful of brand, surface and text colors a
//! theme is designed around. The per-widget [`ThemeColorSet`]s are derived
//! from it (see `builtin.rs`).
//!
//! [`ThemeColorSet`]: super::ThemeColorSet

use horizon_facet_core::Color;

/// Opaque color from a `0xRRGGBB` literal.
const fn rgb(value: u32) -> Color {
    Color::from_rgb(
        ((value >> 16) & 0xFF) as f32 / 255.0,
        ((value >> 8) & 0xFF) as f32 / 255.0,
        (value & 0xFF) as f32 / 255.0,
    )
}

/// A color palette for theming.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // Primary colors
    /// Main brand color.
    pub primary: Color,
    /// Lighter variant of the primary color.
    pub primary_light: Color,
    /// Darker variant of the primary color.
    pub primary_dark: Color,
    /// Text/icon color for content on primary color.
    pub on_primary: Color,

    // Background colors
    /// Main background color.
    pub background: Color,
    /// Surface/card background color.
    pub surface: Color,
    /// Variant surface color for differentiation.
    pub surface_variant: Color,

    // Text colors
    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Disabled text color.
    pub text_disabled: Color,

    // Border colors
    /// Standard border color.
    pub border: Color,
    /// Light border color.
    pub border_light: Color,

    /// Fill used by disabled controls.
    pub disabled: Color,
    /// Fill used by read-only inputs.
    pub read_only: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub const fn light() -> Self {
        Self {
            // Primary - blue
            primary: rgb(0x007AFF),
            primary_light: rgb(0x4DA3FF),
            primary_dark: rgb(0x0056B3),
            on_primary: Color::WHITE,

            // Background
            background: rgb(0xFFFFFF),
            surface: rgb(0xF8F9FA),
            surface_variant: rgb(0xE9ECEF),

            // Text
            text_primary: rgb(0x212529),
            text_secondary: rgb(0x6C757D),
            text_disabled: rgb(0xADB5BD),

            // Borders
            border: rgb(0xDEE2E6),
            border_light: rgb(0xE9ECEF),

            disabled: rgb(0xC8C8C8),
            read_only: rgb(0xF1F3F5),
        }
    }

    /// Create a dark theme palette.
    pub const fn dark() -> Self {
        Self {
            // Primary - blue (slightly brighter for dark mode)
            primary: rgb(0x0A84FF),
            primary_light: rgb(0x5EB1FF),
            primary_dark: rgb(0x0056B3),
            on_primary: Color::WHITE,

            // Background
            background: rgb(0x1C1C1E),
            surface: rgb(0x2C2C2E),
            surface_variant: rgb(0x3A3A3C),

            // Text
            text_primary: rgb(0xFFFFFF),
            text_secondary: rgb(0x8E8E93),
            text_disabled: rgb(0x636366),

            // Borders
            border: rgb(0x38383A),
            border_light: rgb(0x48484A),

            disabled: rgb(0x48484A),
            read_only: rgb(0x242426),
        }
    }

    /// Create a high-contrast palette.
    pub const fn high_contrast() -> Self {
        Self {
            primary: rgb(0x0000FF),
            primary_light: rgb(0x3333FF),
            primary_dark: rgb(0x0000CC),
            on_primary: Color::WHITE,

            background: Color::WHITE,
            surface: Color::WHITE,
            surface_variant: rgb(0xF0F0F0),

            text_primary: Color::BLACK,
            text_secondary: rgb(0x333333),
            text_disabled: rgb(0x666666),

            border: Color::BLACK,
            border_light: rgb(0x333333),

            disabled: rgb(0xD0D0D0),
            read_only: rgb(0xF0F0F0),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
