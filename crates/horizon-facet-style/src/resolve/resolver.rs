//! State-driven color resolution.

use horizon_facet_core::Color;

use super::WidgetVisualState;
use crate::theme::{ColorRole, ThemeColorSet};

/// Resolve the color a widget paints a role with.
///
/// The checks run lowest priority first and each one that applies replaces
/// the color chosen so far:
///
/// 1. base
/// 2. plain, when `light_style` (fill and text only)
/// 3. hover
/// 4. press
/// 5. selected
/// 6. hover again, when `focused` and `show_focus_color`
/// 7. read-only
/// 8. disabled, when `!enabled`
///
/// A variant the role does not define leaves the previous choice in place.
pub fn resolve_color(
    role: ColorRole,
    state: &WidgetVisualState,
    colors: &ThemeColorSet,
    show_focus_color: bool,
) -> Color {
    let role_colors = colors.role(role);
    let mut color = role_colors.base;

    let mut apply = |active: bool, variant: Option<Color>| {
        if active {
            if let Some(c) = variant {
                color = c;
            }
        }
    };

    apply(state.light_style && role != ColorRole::Border, role_colors.plain);
    apply(state.hover, role_colors.hover);
    apply(state.press, role_colors.press);
    apply(state.selected, role_colors.selected);
    apply(state.focused && show_focus_color, role_colors.hover);
    apply(state.read_only, role_colors.read_only);
    apply(!state.enabled, role_colors.disabled);

    color
}

/// A resolver bound to a focus-color setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisualStateResolver {
    show_focus_color: bool,
}

impl VisualStateResolver {
    pub fn new(show_focus_color: bool) -> Self {
        Self { show_focus_color }
    }

    pub fn show_focus_color(&self) -> bool {
        self.show_focus_color
    }

    pub fn set_show_focus_color(&mut self, show: bool) {
        self.show_focus_color = show;
    }

    /// Resolve one role.
    pub fn resolve(
        &self,
        role: ColorRole,
        state: &WidgetVisualState,
        colors: &ThemeColorSet,
    ) -> Color {
        resolve_color(role, state, colors, self.show_focus_color)
    }

    /// Resolve fill, border and text at once.
    pub fn resolve_all(&self, state: &WidgetVisualState, colors: &ThemeColorSet) -> ResolvedColors {
        ResolvedColors {
            fill: self.resolve(ColorRole::Fill, state, colors),
            border: self.resolve(ColorRole::Border, state, colors),
            text: self.resolve(ColorRole::Text, state, colors),
        }
    }
}

/// The three colors a widget paints with in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    pub fill: Color,
    pub border: Color,
    pub text: Color,
}

impl ResolvedColors {
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Fill => self.fill,
            ColorRole::Border => self.border,
            ColorRole::Text => self.text,
        }
    }
}
