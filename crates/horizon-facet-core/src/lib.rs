//! Core systems for Horizon Facet.
//!
//! This crate provides the foundational pieces shared by the style engine and
//! the owner-draw widgets:
//!
//! - **Values**: [`Color`], [`Rect`], [`Size`]
//! - **Identity**: [`WidgetId`]
//! - **Signal/Slot System**: Type-safe change notifications
//! - **Property System**: Values with change detection
//! - **Redraw Trigger**: Invalidation requests forwarded to the host
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_facet_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod color;
mod error;
mod geometry;
mod id;
pub mod logging;
pub mod property;
pub mod redraw;
pub mod signal;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{Rect, Size};
pub use id::WidgetId;
pub use property::Property;
pub use redraw::{Invalidator, RedrawTrigger};
pub use signal::{ConnectionId, Signal};
