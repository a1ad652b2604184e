//! Prelude module for Horizon Facet.
//!
//! ```
//! use horizon_facet::prelude::*;
//! ```

// ============================================================================
// Values and Signals
// ============================================================================

pub use crate::{Color, Rect, Signal, Size, WidgetId};

// ============================================================================
// Themes
// ============================================================================

pub use crate::style::prelude::*;

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    InteractionEvent, NativeScrollSurface, PaintContext, Paintable, ScrollAxis, ScrollLinked,
    SelectionGroup, Widget, WidgetBase,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    Button, ComboBox, DataGrid, ListBox, NavMenu, Pagination, PopupForm, RichTextBox, ScrollBar,
    TabControl,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::ToolkitConfig;
