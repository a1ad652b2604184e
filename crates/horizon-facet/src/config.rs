//! Toolkit configuration loaded from TOML.
//!
//! ```toml
//! theme = "dark"
//! show_focus_color = true
//!
//! [pagination]
//! window_size = 7
//! page_size = 20
//!
//! [overrides.button]
//! fill-hover = "#3366FF"
//! ```
//!
//! Every field is optional. Unknown themes fall back to `light` with a
//! warning; malformed override entries are errors.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use horizon_facet_core::Color;
use horizon_facet_core::logging::targets;
use horizon_facet_style::context::ThemeContext;
use horizon_facet_style::theme::{ColorSlot, PaletteKind, Theme, ThemeId};
use serde::{Deserialize, Serialize};

use crate::widget::widgets::{DEFAULT_PAGE_SIZE, Pagination};
use crate::widget::{DEFAULT_WINDOW_SIZE, normalize_window_size};

/// Result type for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or applying a [`ToolkitConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to access config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid TOML or does not match the schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An override named an unknown widget family or slot, or a bad color.
    #[error(transparent)]
    Style(#[from] horizon_facet_style::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Pager defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Requested window size; coerced to an odd value in 5..=13.
    pub window_size: i64,
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE as i64,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Toolkit-wide settings: the active theme, its color overrides and pager
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// `light`, `dark`, `high-contrast`, or a theme the application
    /// registers before calling [`ToolkitConfig::configure_context`].
    pub theme: String,
    /// Overrides the theme's own focus-color setting when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_focus_color: Option<bool>,
    pub pagination: PaginationConfig,
    /// Palette kind name to (slot name to hex color).
    pub overrides: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            theme: ThemeId::Light.to_string(),
            show_focus_color: None,
            pagination: PaginationConfig::default(),
            overrides: BTreeMap::new(),
        }
    }
}

impl ToolkitConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.warn_on_coercions();
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading config");
        Self::from_toml_str(&text)
    }

    /// Read a config file, or use the defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(target: targets::CONFIG, path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|e| ConfigError::io(path, e))
    }

    /// The configured theme id.
    pub fn theme_id(&self) -> ThemeId {
        let Ok(id) = self.theme.parse::<ThemeId>();
        id
    }

    /// Apply the color overrides and focus setting to `theme`.
    pub fn apply_overrides(&self, theme: &mut Theme) -> ConfigResult<()> {
        if let Some(show) = self.show_focus_color {
            theme.show_focus_color = show;
        }
        for (kind_name, slots) in &self.overrides {
            let kind: PaletteKind = kind_name.parse()?;
            for (slot_name, value) in slots {
                let slot: ColorSlot = slot_name.parse()?;
                let color: Color = value.parse().map_err(|e| {
                    horizon_facet_style::Error::invalid_color(format!("{kind}.{slot}"), e)
                })?;
                theme.override_color(kind, slot, color);
            }
        }
        Ok(())
    }

    /// Build a theme context holding the built-in themes, with the
    /// configured theme active and the overrides applied to it.
    ///
    /// Only built-in theme names resolve here; use
    /// [`configure_context`](Self::configure_context) to select a theme
    /// registered by the application.
    pub fn theme_context(&self) -> ConfigResult<ThemeContext> {
        let mut context = ThemeContext::new();
        self.configure_context(&mut context)?;
        Ok(context)
    }

    /// Select the configured theme in an existing context and apply the
    /// overrides to it.
    ///
    /// A theme the context does not know leaves the current one active.
    pub fn configure_context(&self, context: &mut ThemeContext) -> ConfigResult<()> {
        let requested = self.theme_id();
        if context.set_theme(&requested).is_err() {
            tracing::warn!(
                target: targets::CONFIG,
                requested = %requested,
                using = %context.current_id(),
                "configured theme is not registered"
            );
        }
        let current = context.current_id();
        if let Some(theme) = context.theme_mut(&current) {
            self.apply_overrides(theme)?;
        }
        Ok(())
    }

    /// Apply the pager defaults.
    pub fn apply_pagination(&self, pagination: &mut Pagination) {
        pagination.set_window_size(self.pagination.window_size);
        pagination.set_page_size(self.pagination.page_size);
    }

    fn warn_on_coercions(&self) {
        let window_size = self.pagination.window_size;
        let normalized = normalize_window_size(window_size);
        if normalized as i64 != window_size {
            tracing::warn!(
                target: targets::CONFIG,
                requested = window_size,
                using = normalized,
                "pagination window size coerced"
            );
        }
        if self.pagination.page_size == 0 {
            tracing::warn!(target: targets::CONFIG, "pagination page size 0, using 1");
        }
    }
}

#[cfg(test)]
mod tests {
    use horizon_facet_style::theme::{ColorRole, ColorVariant};

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ToolkitConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.theme_id(), ThemeId::Light);
        assert_eq!(config.pagination.window_size, 7);
        assert_eq!(config.pagination.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_overrides_reach_the_active_theme() {
        let config = ToolkitConfig::from_toml_str(
            r##"
            theme = "dark"
            show_focus_color = true

            [overrides.button]
            fill-hover = "#3366FF"
            "##,
        )
        .unwrap();

        let context = config.theme_context().unwrap();
        let theme = context.current_theme();
        assert_eq!(theme.id, ThemeId::Dark);
        assert!(theme.show_focus_color);
        assert_eq!(
            theme
                .color_set(PaletteKind::Button)
                .get(ColorSlot::new(ColorRole::Fill, ColorVariant::Hover)),
            Color::from_hex("#3366FF")
        );
        // Other themes are untouched.
        let light = context.theme(&ThemeId::Light).unwrap();
        assert!(!light.show_focus_color);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let config = ToolkitConfig::from_toml_str(r#"theme = "solarized""#).unwrap();
        assert_eq!(config.theme_id(), ThemeId::Named("solarized".into()));
        let context = config.theme_context().unwrap();
        assert_eq!(context.current_id(), ThemeId::Light);
    }

    #[test]
    fn test_configure_context_selects_registered_theme() {
        let config = ToolkitConfig::from_toml_str(
            r##"
            theme = "ocean"

            [overrides.list]
            fill = "#004466"
            "##,
        )
        .unwrap();

        let mut context = ThemeContext::new();
        let mut ocean = Theme::dark();
        ocean.id = ThemeId::Named("ocean".into());
        context.register(ocean);

        config.configure_context(&mut context).unwrap();
        assert_eq!(context.current_id(), ThemeId::Named("ocean".into()));
        assert_eq!(
            context
                .current_theme()
                .color_set(PaletteKind::List)
                .get(ColorSlot::new(ColorRole::Fill, ColorVariant::Base)),
            Color::from_hex("#004466")
        );
        // The built-in dark theme the custom one was derived from is untouched.
        assert_ne!(
            context
                .theme(&ThemeId::Dark)
                .unwrap()
                .color_set(PaletteKind::List)
                .get(ColorSlot::new(ColorRole::Fill, ColorVariant::Base)),
            Color::from_hex("#004466")
        );
    }

    #[test]
    fn test_configure_context_keeps_current_for_unknown_theme() {
        let config = ToolkitConfig::from_toml_str(r#"theme = "solarized""#).unwrap();
        let mut context = ThemeContext::new();
        context.set_theme(&ThemeId::Dark).unwrap();
        config.configure_context(&mut context).unwrap();
        assert_eq!(context.current_id(), ThemeId::Dark);
    }

    #[test]
    fn test_bad_override_is_an_error() {
        let unknown_slot =
            ToolkitConfig::from_toml_str("[overrides.button]\nfill-glow = \"#FFFFFF\"").unwrap();
        assert!(matches!(
            unknown_slot.theme_context(),
            Err(ConfigError::Style(horizon_facet_style::Error::UnknownColorSlot(_)))
        ));

        let bad_color =
            ToolkitConfig::from_toml_str("[overrides.list]\nfill = \"blue-ish\"").unwrap();
        assert!(matches!(
            bad_color.theme_context(),
            Err(ConfigError::Style(horizon_facet_style::Error::InvalidColor { .. }))
        ));

        let unknown_kind =
            ToolkitConfig::from_toml_str("[overrides.slider]\nfill = \"#FFFFFF\"").unwrap();
        assert!(matches!(
            unknown_kind.theme_context(),
            Err(ConfigError::Style(horizon_facet_style::Error::UnknownPaletteKind(_)))
        ));
    }

    #[test]
    fn test_apply_pagination_coerces() {
        let config = ToolkitConfig::from_toml_str(
            "[pagination]\nwindow_size = 14\npage_size = 0",
        )
        .unwrap();
        let mut pagination = Pagination::new(&Theme::light());
        config.apply_pagination(&mut pagination);
        assert_eq!(pagination.window_size(), 13);
        assert_eq!(pagination.page_size(), 1);
    }

    #[test]
    fn test_type_mismatch_is_a_parse_error() {
        let result = ToolkitConfig::from_toml_str("show_focus_color = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
