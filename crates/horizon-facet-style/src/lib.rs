//! Theme palettes and state-driven color resolution for Horizon Facet.
//!
//! This crate provides the styling core shared by the owner-draw widgets:
//!
//! - **Themes**: per-widget-family color sets derived from a base palette
//! - **Resolution**: fill/border/text colors from a widget's interaction state
//! - **Cascading**: inherited vs. custom colors, propagated to embedded widgets
//! - **Context**: a per-session registry selecting the active theme
//!
//! # Example
//!
//! ```
//! use horizon_facet_style::prelude::*;
//!
//! let theme = Theme::dark();
//! let colors = theme.color_set(PaletteKind::Button);
//!
//! let idle = WidgetVisualState::default();
//! let hovered = idle.hover(true);
//! let disabled = hovered.enabled(false);
//!
//! let fill = resolve_color(ColorRole::Fill, &hovered, colors, theme.show_focus_color);
//! assert_eq!(Some(fill), colors.fill.hover);
//! assert_eq!(
//!     resolve_color(ColorRole::Fill, &disabled, colors, false),
//!     colors.fill.disabled.unwrap_or(colors.fill.base)
//! );
//! ```

pub mod cascade;
pub mod context;
pub mod resolve;
pub mod theme;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::cascade::{StyleCascade, StyleMode, ThemeResponsive};
    pub use crate::context::ThemeContext;
    pub use crate::resolve::{ResolvedColors, VisualStateResolver, WidgetVisualState, resolve_color};
    pub use crate::theme::{
        ColorPalette, ColorRole, ColorSlot, ColorVariant, PaletteKind, RoleColors, Theme,
        ThemeColorSet, ThemeId,
    };
}
