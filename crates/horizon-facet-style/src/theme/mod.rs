//! Theme system with built-in themes.

mod builtin;
mod color_set;
mod palette;

pub use builtin::{PaletteKind, Theme, ThemeId};
pub use color_set::{ColorRole, ColorSlot, ColorVariant, RoleColors, ThemeColorSet};
pub use palette::ColorPalette;
