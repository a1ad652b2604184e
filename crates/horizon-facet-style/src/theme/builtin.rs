//! Built-in themes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use horizon_facet_core::Color;

use super::{ColorPalette, ColorRole, ColorSlot, ColorVariant, RoleColors, ThemeColorSet};
use crate::error::Error;

/// Identifies a registered theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Light,
    Dark,
    HighContrast,
    /// A theme registered by the application.
    Named(String),
}

impl ThemeId {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
            ThemeId::HighContrast => "high-contrast",
            ThemeId::Named(name) => name,
        }
    }

    /// Whether this id names one of the themes shipped with the toolkit.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ThemeId::Named(_))
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "light" => ThemeId::Light,
            "dark" => ThemeId::Dark,
            "high-contrast" | "high_contrast" | "highcontrast" => ThemeId::HighContrast,
            _ => ThemeId::Named(s.trim().to_string()),
        })
    }
}

/// The widget family a color set is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Button,
    Input,
    List,
    Popup,
    Menu,
    Tab,
    Grid,
    Pagination,
    ScrollBar,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 9] = [
        PaletteKind::Button,
        PaletteKind::Input,
        PaletteKind::List,
        PaletteKind::Popup,
        PaletteKind::Menu,
        PaletteKind::Tab,
        PaletteKind::Grid,
        PaletteKind::Pagination,
        PaletteKind::ScrollBar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Button => "button",
            PaletteKind::Input => "input",
            PaletteKind::List => "list",
            PaletteKind::Popup => "popup",
            PaletteKind::Menu => "menu",
            PaletteKind::Tab => "tab",
            PaletteKind::Grid => "grid",
            PaletteKind::Pagination => "pagination",
            PaletteKind::ScrollBar => "scroll-bar",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        let name = if name == "scrollbar" { "scroll-bar".to_string() } else { name };
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownPaletteKind(s.to_string()))
    }
}

/// A complete theme: base palette plus one color set per widget family.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme identity.
    pub id: ThemeId,
    /// Base palette the color sets were derived from.
    pub palette: ColorPalette,
    /// Whether focused widgets paint with their hover colors.
    pub show_focus_color: bool,
    color_sets: [Arc<ThemeColorSet>; 9],
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self::custom(ThemeId::Light, ColorPalette::light())
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::custom(ThemeId::Dark, ColorPalette::dark())
    }

    /// Create a high-contrast theme.
    pub fn high_contrast() -> Self {
        Self::custom(ThemeId::HighContrast, ColorPalette::high_contrast())
            .with_show_focus_color(true)
    }

    /// Create a custom theme from a palette.
    pub fn custom(id: ThemeId, palette: ColorPalette) -> Self {
        let color_sets = PaletteKind::ALL.map(|kind| Arc::new(derive_color_set(kind, &palette)));
        Self {
            id,
            palette,
            show_focus_color: false,
            color_sets,
        }
    }

    /// Look up a built-in theme by id.
    pub fn builtin(id: &ThemeId) -> Option<Self> {
        match id {
            ThemeId::Light => Some(Self::light()),
            ThemeId::Dark => Some(Self::dark()),
            ThemeId::HighContrast => Some(Self::high_contrast()),
            ThemeId::Named(_) => None,
        }
    }

    /// Set the focus-color option using builder pattern.
    pub fn with_show_focus_color(mut self, show: bool) -> Self {
        self.show_focus_color = show;
        self
    }

    /// The shared color set for a widget family.
    pub fn color_set(&self, kind: PaletteKind) -> &Arc<ThemeColorSet> {
        &self.color_sets[kind.index()]
    }

    /// Replace one slot of a family's color set.
    ///
    /// Widgets already holding the previous set keep it until the theme is
    /// re-applied.
    pub fn override_color(&mut self, kind: PaletteKind, slot: ColorSlot, color: Color) {
        Arc::make_mut(&mut self.color_sets[kind.index()]).set(slot, color);
    }

    /// Get the primary color.
    pub fn primary(&self) -> Color {
        self.palette.primary
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.palette.background
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.palette.text_primary
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

fn role(base: Color, variants: &[(ColorVariant, Color)]) -> RoleColors {
    variants
        .iter()
        .fold(RoleColors::new(base), |colors, &(variant, color)| {
            colors.with(variant, color)
        })
}

/// Derive the color set of one widget family from a palette.
fn derive_color_set(kind: PaletteKind, p: &ColorPalette) -> ThemeColorSet {
    use ColorVariant::*;

    match kind {
        PaletteKind::Button => ThemeColorSet::new(
            role(
                p.primary,
                &[
                    (Plain, p.surface),
                    (Hover, p.primary_light),
                    (Press, p.primary_dark),
                    (Selected, p.primary_dark),
                    (Disabled, p.disabled),
                ],
            ),
            role(
                p.primary_dark,
                &[(Hover, p.primary), (Press, p.primary_dark), (Disabled, p.border_light)],
            ),
            role(
                p.on_primary,
                &[(Plain, p.text_primary), (Hover, p.on_primary), (Disabled, p.text_disabled)],
            ),
        ),
        PaletteKind::Input => ThemeColorSet::new(
            role(
                p.background,
                &[(Hover, p.surface), (ReadOnly, p.read_only), (Disabled, p.disabled)],
            ),
            role(
                p.border,
                &[
                    (Hover, p.primary_light),
                    (Selected, p.primary),
                    (ReadOnly, p.border_light),
                    (Disabled, p.border_light),
                ],
            ),
            role(
                p.text_primary,
                &[(ReadOnly, p.text_secondary), (Disabled, p.text_disabled)],
            ),
        ),
        PaletteKind::List => ThemeColorSet::new(
            role(
                p.background,
                &[
                    (Hover, p.surface_variant),
                    (Press, p.primary_light),
                    (Selected, p.primary),
                    (Disabled, p.disabled),
                ],
            ),
            role(p.border, &[(Disabled, p.border_light)]),
            role(
                p.text_primary,
                &[(Selected, p.on_primary), (Disabled, p.text_disabled)],
            ),
        ),
        PaletteKind::Popup => ThemeColorSet::new(
            role(p.surface, &[(Hover, p.surface_variant)]),
            role(p.border, &[]),
            role(p.text_primary, &[(Disabled, p.text_disabled)]),
        ),
        PaletteKind::Menu => ThemeColorSet::new(
            role(
                p.surface,
                &[
                    (Hover, p.surface_variant),
                    (Press, p.primary_light),
                    (Selected, p.primary),
                    (Disabled, p.disabled),
                ],
            ),
            role(p.border_light, &[]),
            role(
                p.text_primary,
                &[(Selected, p.on_primary), (Disabled, p.text_disabled)],
            ),
        ),
        PaletteKind::Tab => ThemeColorSet::new(
            role(
                p.surface_variant,
                &[
                    (Plain, p.background),
                    (Hover, p.surface),
                    (Press, p.primary_light),
                    (Selected, p.background),
                    (Disabled, p.disabled),
                ],
            ),
            role(p.border, &[(Selected, p.primary)]),
            role(
                p.text_secondary,
                &[
                    (Hover, p.text_primary),
                    (Selected, p.text_primary),
                    (Disabled, p.text_disabled),
                ],
            ),
        ),
        PaletteKind::Grid => ThemeColorSet::new(
            role(
                p.background,
                &[
                    (Hover, p.surface),
                    (Selected, p.primary_light),
                    (ReadOnly, p.read_only),
                    (Disabled, p.disabled),
                ],
            ),
            role(p.border_light, &[]),
            role(
                p.text_primary,
                &[(Selected, p.on_primary), (Disabled, p.text_disabled)],
            ),
        ),
        PaletteKind::Pagination => ThemeColorSet::new(
            role(
                p.background,
                &[
                    (Hover, p.surface_variant),
                    (Press, p.primary_dark),
                    (Selected, p.primary),
                    (Disabled, p.disabled),
                ],
            ),
            role(p.border, &[(Hover, p.primary_light), (Selected, p.primary)]),
            role(
                p.text_primary,
                &[(Press, p.on_primary), (Selected, p.on_primary), (Disabled, p.text_disabled)],
            ),
        ),
        PaletteKind::ScrollBar => ThemeColorSet::new(
            // Fill is the thumb; border is the track.
            role(
                p.border,
                &[
                    (Hover, p.text_secondary),
                    (Press, p.text_primary),
                    (Disabled, p.border_light),
                ],
            ),
            role(p.surface, &[]),
            role(p.text_secondary, &[(Disabled, p.text_disabled)]),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let light = Theme::light();
        assert_eq!(light.id, ThemeId::Light);
        assert!(!light.show_focus_color);

        let dark = Theme::dark();
        assert_eq!(dark.id, ThemeId::Dark);
        assert_ne!(
            light.color_set(PaletteKind::Button).fill.base,
            dark.color_set(PaletteKind::List).fill.base
        );
    }

    #[test]
    fn every_kind_has_a_disabled_fill() {
        let theme = Theme::dark();
        for kind in PaletteKind::ALL {
            if kind == PaletteKind::Popup {
                continue;
            }
            assert!(theme.color_set(kind).fill.disabled.is_some(), "{kind}");
        }
    }

    #[test]
    fn override_color_copies_on_write() {
        let mut theme = Theme::light();
        let shared = Arc::clone(theme.color_set(PaletteKind::Button));
        let slot = ColorSlot::new(ColorRole::Fill, ColorVariant::Hover);

        theme.override_color(PaletteKind::Button, slot, Color::RED);

        assert_eq!(theme.color_set(PaletteKind::Button).get(slot), Some(Color::RED));
        assert_ne!(shared.get(slot), Some(Color::RED));
    }

    #[test]
    fn theme_ids_parse() {
        assert_eq!("Dark".parse::<ThemeId>().unwrap(), ThemeId::Dark);
        assert_eq!("high-contrast".parse::<ThemeId>().unwrap(), ThemeId::HighContrast);
        assert_eq!(
            "ocean".parse::<ThemeId>().unwrap(),
            ThemeId::Named("ocean".into())
        );
        assert!(Theme::builtin(&ThemeId::Named("ocean".into())).is_none());
    }

    #[test]
    fn palette_kinds_parse() {
        assert_eq!("scrollbar".parse::<PaletteKind>().unwrap(), PaletteKind::ScrollBar);
        assert_eq!("Button".parse::<PaletteKind>().unwrap(), PaletteKind::Button);
        assert!(matches!(
            "window".parse::<PaletteKind>(),
            Err(Error::UnknownPaletteKind(_))
        ));
    }
}
