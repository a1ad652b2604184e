//! Owner-draw widget system for Horizon Facet.
//!
//! Widgets here do not own a window or a renderer. The host toolkit routes
//! interaction events in, asks each widget to [`paint`](Paintable::paint)
//! into a [`PaintContext`], and replays the recorded [`DrawCommand`]s with
//! its own graphics API.
//!
//! - [`Widget`]: base trait for every owner-draw widget
//! - [`WidgetBase`]: shared geometry, visual state and repaint tracking
//! - [`ScrollLinked`]: widgets whose custom scroll bars mirror a native
//!   scrollable control through a [`ScrollBridge`]
//! - [`SelectionGroup`]: exclusive selection among tagged widgets
//! - [`PaginationWindow`]: the visible page-number strip of a pager
//!
//! Every widget carries a [`StyleCascade`](horizon_facet_style::cascade::StyleCascade)
//! and implements [`ThemeResponsive`](horizon_facet_style::cascade::ThemeResponsive),
//! so a theme change applied at the root reaches embedded children such as
//! scroll bars and drop-down forms.

mod base;
mod events;
mod group;
mod host;
mod painting;
mod pagination;
pub mod scroll;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::InteractionEvent;
pub use group::{GroupTag, SelectionGroup};
pub use host::{NativeScrollInfo, NativeScrollSurface, ScrollAxis};
pub use painting::{DrawCommand, PaintContext};
pub use pagination::{
    DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE, PageSlot, PaginationWindow,
    clamp_active_page, normalize_window_size,
};
pub use scroll::{SCROLL_BAR_EXTENT, ScrollBridge, ScrollLink, SyncOutcome, ViewportSurface};
pub use traits::{Paintable, ScrollLinked, Widget};
