//! Theme propagation and per-widget color overrides.
//!
//! Every themed widget owns a [`StyleCascade`]. While the cascade is
//! [`StyleMode::Inherited`] its colors are the active theme's shared set for
//! the widget's [`PaletteKind`]; the first direct color override switches it
//! to [`StyleMode::Custom`] and gives the widget a private copy.
//!
//! Widgets that embed other themed widgets (a combo box and its drop-down
//! list, for instance) report them through
//! [`ThemeResponsive::visit_themed_children`] so a theme change reaches them
//! regardless of the parent's own mode.

use std::sync::Arc;

use horizon_facet_core::Color;
use horizon_facet_core::logging::targets;

use crate::resolve::{ResolvedColors, VisualStateResolver, WidgetVisualState};
use crate::theme::{ColorRole, ColorSlot, PaletteKind, Theme, ThemeColorSet, ThemeId};

/// Whether a widget's colors track the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// Colors are replaced on every theme change.
    #[default]
    Inherited,
    /// Colors are pinned locally; theme changes are ignored.
    Custom,
}

/// Per-widget style state.
#[derive(Debug, Clone)]
pub struct StyleCascade {
    kind: PaletteKind,
    mode: StyleMode,
    colors: Arc<ThemeColorSet>,
    theme_id: ThemeId,
    theme_show_focus_color: bool,
    show_focus_color: Option<bool>,
}

impl StyleCascade {
    /// Create an inherited cascade seeded from a theme.
    pub fn new(kind: PaletteKind, theme: &Theme) -> Self {
        Self {
            kind,
            mode: StyleMode::Inherited,
            colors: Arc::clone(theme.color_set(kind)),
            theme_id: theme.id.clone(),
            theme_show_focus_color: theme.show_focus_color,
            show_focus_color: None,
        }
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    pub fn is_custom(&self) -> bool {
        self.mode == StyleMode::Custom
    }

    /// The theme the colors were last taken from.
    pub fn theme_id(&self) -> &ThemeId {
        &self.theme_id
    }

    /// Current colors.
    pub fn colors(&self) -> &ThemeColorSet {
        &self.colors
    }

    /// Whether focus paints with the hover colors.
    ///
    /// A local override set with [`set_show_focus_color`](Self::set_show_focus_color)
    /// wins over the theme's option.
    pub fn show_focus_color(&self) -> bool {
        self.show_focus_color.unwrap_or(self.theme_show_focus_color)
    }

    /// Set or clear the local focus-color override. Returns whether the
    /// effective value changed.
    pub fn set_show_focus_color(&mut self, show: Option<bool>) -> bool {
        let before = self.show_focus_color();
        self.show_focus_color = show;
        before != self.show_focus_color()
    }

    pub fn resolver(&self) -> VisualStateResolver {
        VisualStateResolver::new(self.show_focus_color())
    }

    /// Resolve one role for the given state.
    pub fn resolve(&self, role: ColorRole, state: &WidgetVisualState) -> Color {
        self.resolver().resolve(role, state, &self.colors)
    }

    /// Resolve fill, border and text for the given state.
    pub fn resolve_all(&self, state: &WidgetVisualState) -> ResolvedColors {
        self.resolver().resolve_all(state, &self.colors)
    }

    /// Take the theme's colors if inherited. Returns whether anything was
    /// replaced.
    pub fn inherit_from(&mut self, theme: &Theme) -> bool {
        if self.mode == StyleMode::Custom {
            return false;
        }
        self.colors = Arc::clone(theme.color_set(self.kind));
        self.theme_id = theme.id.clone();
        self.theme_show_focus_color = theme.show_focus_color;
        true
    }

    /// Override a single slot and pin the colors.
    pub fn set_color(&mut self, slot: ColorSlot, color: Color) {
        Arc::make_mut(&mut self.colors).set(slot, color);
        self.mode = StyleMode::Custom;
    }

    /// Go back to tracking the theme. Colors are refreshed by the next
    /// [`inherit_from`](Self::inherit_from).
    pub fn set_inherited(&mut self) {
        self.mode = StyleMode::Inherited;
    }
}

/// Capability of widgets whose colors come from a theme.
///
/// Implementors provide access to their [`StyleCascade`]; the theme
/// operations are provided.
pub trait ThemeResponsive {
    fn style(&self) -> &StyleCascade;

    fn style_mut(&mut self) -> &mut StyleCascade;

    /// Called after this widget's colors changed. Widgets request a redraw
    /// here.
    fn style_changed(&mut self) {}

    /// Visit embedded widgets that take part in theme propagation.
    fn visit_themed_children(&mut self, _visitor: &mut dyn FnMut(&mut dyn ThemeResponsive)) {}

    /// Apply a theme to this widget and everything below it.
    ///
    /// Custom widgets keep their colors; children are always visited and
    /// decide for themselves.
    fn apply_theme(&mut self, theme: &Theme) {
        let kind = self.style().kind();
        if self.style_mut().inherit_from(theme) {
            tracing::debug!(target: targets::CASCADE, %kind, theme = %theme.id, "applied theme");
            self.style_changed();
        } else {
            tracing::trace!(target: targets::CASCADE, %kind, theme = %theme.id, "custom style, theme ignored");
        }
        self.visit_themed_children(&mut |child: &mut dyn ThemeResponsive| child.apply_theme(theme));
    }

    /// Override one color on this widget only.
    fn set_color(&mut self, slot: ColorSlot, color: Color) {
        self.style_mut().set_color(slot, color);
        tracing::trace!(target: targets::CASCADE, %slot, "color override");
        self.style_changed();
    }

    /// Drop local overrides and re-apply `theme`.
    fn restore_inherited(&mut self, theme: &Theme) {
        self.style_mut().set_inherited();
        self.apply_theme(theme);
    }

    /// Set or clear the local focus-color override.
    fn set_show_focus_color(&mut self, show: Option<bool>) {
        if self.style_mut().set_show_focus_color(show) {
            self.style_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorVariant;

    struct Leaf {
        style: StyleCascade,
        redraws: usize,
    }

    impl Leaf {
        fn new(kind: PaletteKind, theme: &Theme) -> Self {
            Self {
                style: StyleCascade::new(kind, theme),
                redraws: 0,
            }
        }
    }

    impl ThemeResponsive for Leaf {
        fn style(&self) -> &StyleCascade {
            &self.style
        }

        fn style_mut(&mut self) -> &mut StyleCascade {
            &mut self.style
        }

        fn style_changed(&mut self) {
            self.redraws += 1;
        }
    }

    struct Composite {
        style: StyleCascade,
        list: Leaf,
        popups: [Leaf; 2],
    }

    impl Composite {
        fn new(theme: &Theme) -> Self {
            Self {
                style: StyleCascade::new(PaletteKind::Input, theme),
                list: Leaf::new(PaletteKind::List, theme),
                popups: [
                    Leaf::new(PaletteKind::Popup, theme),
                    Leaf::new(PaletteKind::Popup, theme),
                ],
            }
        }
    }

    impl ThemeResponsive for Composite {
        fn style(&self) -> &StyleCascade {
            &self.style
        }

        fn style_mut(&mut self) -> &mut StyleCascade {
            &mut self.style
        }

        fn visit_themed_children(&mut self, visitor: &mut dyn FnMut(&mut dyn ThemeResponsive)) {
            visitor(&mut self.list);
            for popup in &mut self.popups {
                visitor(popup);
            }
        }
    }

    fn fill(widget: &dyn ThemeResponsive) -> Color {
        widget
            .style()
            .resolve(ColorRole::Fill, &WidgetVisualState::default())
    }

    #[test]
    fn inherited_widget_follows_theme() {
        let light = Theme::light();
        let dark = Theme::dark();
        let mut leaf = Leaf::new(PaletteKind::Button, &light);
        let before = fill(&leaf);

        leaf.apply_theme(&dark);

        assert_ne!(fill(&leaf), before);
        assert_eq!(fill(&leaf), dark.color_set(PaletteKind::Button).fill.base);
        assert_eq!(leaf.style().theme_id(), &ThemeId::Dark);
        assert_eq!(leaf.redraws, 1);
    }

    #[test]
    fn set_color_pins_only_this_widget() {
        let light = Theme::light();
        let mut combo = Composite::new(&light);
        combo.set_color(ColorSlot::base(ColorRole::Fill), Color::RED);

        assert_eq!(combo.style().mode(), StyleMode::Custom);
        assert_eq!(combo.list.style().mode(), StyleMode::Inherited);
        assert!(combo.popups.iter().all(|p| !p.style().is_custom()));
        // The theme's shared set is untouched.
        assert_ne!(light.color_set(PaletteKind::Input).fill.base, Color::RED);
    }

    #[test]
    fn custom_parent_still_propagates_to_children() {
        let light = Theme::light();
        let dark = Theme::dark();
        let mut combo = Composite::new(&light);
        combo.set_color(ColorSlot::base(ColorRole::Fill), Color::RED);

        combo.apply_theme(&dark);

        assert_eq!(fill(&combo), Color::RED);
        assert_eq!(fill(&combo.list), dark.color_set(PaletteKind::List).fill.base);
        for popup in &combo.popups {
            assert_eq!(fill(popup), dark.color_set(PaletteKind::Popup).fill.base);
            assert_eq!(popup.redraws, 1);
        }
    }

    #[test]
    fn custom_child_keeps_its_colors() {
        let light = Theme::light();
        let dark = Theme::dark();
        let mut combo = Composite::new(&light);
        let hover = ColorSlot::new(ColorRole::Fill, ColorVariant::Hover);
        combo.list.set_color(hover, Color::GREEN);
        let pinned_base = fill(&combo.list);

        combo.apply_theme(&dark);

        assert_eq!(fill(&combo.list), pinned_base);
        assert_eq!(combo.list.style().colors().get(hover), Some(Color::GREEN));
        assert_eq!(fill(&combo), dark.color_set(PaletteKind::Input).fill.base);
    }

    #[test]
    fn restore_inherited_reapplies_theme() {
        let light = Theme::light();
        let dark = Theme::dark();
        let mut leaf = Leaf::new(PaletteKind::Tab, &light);
        leaf.set_color(ColorSlot::base(ColorRole::Text), Color::BLUE);

        leaf.restore_inherited(&dark);

        assert_eq!(leaf.style().mode(), StyleMode::Inherited);
        assert_eq!(leaf.style().colors(), dark.color_set(PaletteKind::Tab).as_ref());
        // set_color + restore
        assert_eq!(leaf.redraws, 2);
    }

    #[test]
    fn local_focus_option_overrides_theme() {
        let theme = Theme::light();
        let mut leaf = Leaf::new(PaletteKind::Button, &theme);
        assert!(!leaf.style().show_focus_color());

        leaf.set_show_focus_color(Some(true));
        assert!(leaf.style().show_focus_color());
        assert_eq!(leaf.redraws, 1);

        let focused = WidgetVisualState::new().focused(true);
        assert_eq!(
            leaf.style().resolve(ColorRole::Fill, &focused),
            theme.color_set(PaletteKind::Button).fill.hover.unwrap_or(Color::BLACK)
        );

        leaf.set_show_focus_color(Some(true));
        assert_eq!(leaf.redraws, 1);
    }
}
