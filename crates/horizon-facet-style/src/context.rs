//! Per-session theme registry.
//!
//! A [`ThemeContext`] is held by each top-level window or session and passed
//! to the widgets it themes. There is no process-wide current theme.
//!
//! ```
//! use horizon_facet_style::prelude::*;
//!
//! let context = ThemeContext::new();
//! context.theme_changed().connect(|id| println!("theme is now {id}"));
//! context.set_theme(&ThemeId::Dark).unwrap();
//! assert_eq!(context.current_theme().id, ThemeId::Dark);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use horizon_facet_core::logging::targets;
use horizon_facet_core::{Property, Signal};

use crate::cascade::ThemeResponsive;
use crate::error::{Error, Result};
use crate::theme::{Theme, ThemeId};

/// Registered themes plus the active selection.
pub struct ThemeContext {
    themes: HashMap<ThemeId, Arc<Theme>>,
    current: Property<ThemeId>,
    theme_changed: Signal<ThemeId>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeContext {
    /// A context with the built-in themes registered and `Light` active.
    pub fn new() -> Self {
        Self::with_current(ThemeId::Light)
    }

    /// A context with the built-in themes registered and `id` active.
    ///
    /// Unknown ids fall back to `Light`.
    pub fn with_current(id: ThemeId) -> Self {
        let mut themes = HashMap::new();
        for theme in [Theme::light(), Theme::dark(), Theme::high_contrast()] {
            themes.insert(theme.id.clone(), Arc::new(theme));
        }
        let current = if themes.contains_key(&id) {
            id
        } else {
            tracing::warn!(target: targets::STYLE, theme = %id, "unknown theme, using light");
            ThemeId::Light
        };
        Self {
            themes,
            current: Property::new(current),
            theme_changed: Signal::new(),
        }
    }

    /// Pick the built-in theme matching the desktop's dark/light setting.
    #[cfg(feature = "system-theme")]
    pub fn from_system() -> Self {
        let id = match dark_light::detect() {
            dark_light::Mode::Dark => ThemeId::Dark,
            dark_light::Mode::Light | dark_light::Mode::Default => ThemeId::Light,
        };
        tracing::debug!(target: targets::STYLE, theme = %id, "detected system theme");
        Self::with_current(id)
    }

    /// Register or replace a theme. Returns the previous theme with that id.
    ///
    /// Replacing the active theme does not re-theme widgets by itself; call
    /// [`apply_to`](Self::apply_to) afterwards.
    pub fn register(&mut self, theme: Theme) -> Option<Arc<Theme>> {
        tracing::debug!(target: targets::STYLE, theme = %theme.id, "registered theme");
        self.themes.insert(theme.id.clone(), Arc::new(theme))
    }

    /// Look up a registered theme.
    pub fn theme(&self, id: &ThemeId) -> Option<Arc<Theme>> {
        self.themes.get(id).cloned()
    }

    /// Mutable access to a registered theme, copying it if widgets or
    /// callers still hold the shared one.
    pub fn theme_mut(&mut self, id: &ThemeId) -> Option<&mut Theme> {
        self.themes.get_mut(id).map(Arc::make_mut)
    }

    /// Registered theme ids, in no particular order.
    pub fn theme_ids(&self) -> impl Iterator<Item = &ThemeId> {
        self.themes.keys()
    }

    pub fn current_id(&self) -> ThemeId {
        self.current.get()
    }

    /// The active theme.
    pub fn current_theme(&self) -> Arc<Theme> {
        let id = self.current.get();
        match self.themes.get(&id) {
            Some(theme) => Arc::clone(theme),
            None => Arc::new(Theme::light()),
        }
    }

    /// Select the active theme.
    ///
    /// Emits [`theme_changed`](Self::theme_changed) when the selection
    /// actually changes.
    pub fn set_theme(&self, id: &ThemeId) -> Result<()> {
        if !self.themes.contains_key(id) {
            return Err(Error::UnknownTheme(id.to_string()));
        }
        if self.current.set(id.clone()) {
            tracing::debug!(target: targets::STYLE, theme = %id, "theme changed");
            self.theme_changed.emit(id.clone());
        }
        Ok(())
    }

    /// Signal emitted with the new id after [`set_theme`](Self::set_theme).
    pub fn theme_changed(&self) -> &Signal<ThemeId> {
        &self.theme_changed
    }

    /// Apply the active theme to a widget tree.
    pub fn apply_to(&self, widget: &mut dyn ThemeResponsive) {
        widget.apply_theme(&self.current_theme());
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("themes", &self.themes.keys().collect::<Vec<_>>())
            .field("current", &self.current.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use horizon_facet_core::Color;

    use super::*;
    use crate::cascade::StyleCascade;
    use crate::theme::{ColorPalette, ColorRole, ColorSlot, PaletteKind};

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    struct Swatch(StyleCascade);

    impl ThemeResponsive for Swatch {
        fn style(&self) -> &StyleCascade {
            &self.0
        }

        fn style_mut(&mut self) -> &mut StyleCascade {
            &mut self.0
        }
    }

    #[test]
    fn builtins_are_registered() {
        let context = ThemeContext::new();
        assert_eq!(context.current_id(), ThemeId::Light);
        assert_eq!(context.theme_ids().count(), 3);
        assert!(context.theme(&ThemeId::HighContrast).is_some());
    }

    #[test]
    fn set_theme_rejects_unknown_ids() {
        init_logging();
        let context = ThemeContext::new();
        let result = context.set_theme(&ThemeId::Named("ocean".into()));
        assert!(matches!(result, Err(Error::UnknownTheme(name)) if name == "ocean"));
        assert_eq!(context.current_id(), ThemeId::Light);
    }

    #[test]
    fn theme_changed_fires_once_per_change() {
        let context = ThemeContext::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        context.theme_changed().connect(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        context.set_theme(&ThemeId::Dark).unwrap();
        context.set_theme(&ThemeId::Dark).unwrap();
        context.set_theme(&ThemeId::Light).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn registered_theme_can_be_applied() {
        init_logging();
        let mut context = ThemeContext::new();
        let id = ThemeId::Named("ocean".into());
        let mut palette = ColorPalette::dark();
        palette.primary = Color::from_rgb8(0, 128, 128);
        context.register(Theme::custom(id.clone(), palette));

        let mut swatch = Swatch(StyleCascade::new(PaletteKind::Button, &Theme::light()));
        context.set_theme(&id).unwrap();
        context.apply_to(&mut swatch);

        assert_eq!(swatch.0.colors().fill.base, Color::from_rgb8(0, 128, 128));
    }

    #[test]
    fn theme_mut_overrides_reach_widgets_on_next_apply() {
        let mut context = ThemeContext::new();
        let slot = ColorSlot::base(ColorRole::Text);
        if let Some(theme) = context.theme_mut(&ThemeId::Light) {
            theme.override_color(PaletteKind::List, slot, Color::RED);
        }

        let mut swatch = Swatch(StyleCascade::new(PaletteKind::List, &Theme::light()));
        context.apply_to(&mut swatch);
        assert_eq!(swatch.0.colors().get(slot), Some(Color::RED));
    }

    #[test]
    fn unknown_initial_theme_falls_back_to_light() {
        let context = ThemeContext::with_current(ThemeId::Named("missing".into()));
        assert_eq!(context.current_id(), ThemeId::Light);
    }
}
