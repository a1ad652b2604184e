//! Horizon Facet - owner-draw widget core for native host toolkits.
//!
//! This is the main umbrella crate. It re-exports the core value types and
//! the style engine, and provides the widget layer on top of them:
//!
//! - Themed state colors resolved per widget family and visual state
//! - Custom scroll bars kept in step with a native scrollable control
//! - Pagination windows for paged data sets
//!
//! # Example
//!
//! ```
//! use horizon_facet::prelude::*;
//!
//! let context = ThemeContext::new();
//! let theme = context.current_theme();
//!
//! let mut pager = Pagination::new(&theme);
//! pager.set_total_items(20_000);
//! pager.set_active_page(500);
//! assert_eq!(pager.window().page_numbers().first(), Some(&1));
//!
//! context.set_theme(&ThemeId::Dark).unwrap();
//! context.apply_to(&mut pager);
//! assert_eq!(pager.style().theme_id(), &ThemeId::Dark);
//! ```

pub use horizon_facet_core::*;

/// Theme palettes, the style cascade and the visual state resolver.
pub mod style {
    pub use horizon_facet_style::*;
}

pub mod config;
pub mod prelude;
pub mod widget;

pub use config::{ConfigError, ConfigResult, ToolkitConfig};
