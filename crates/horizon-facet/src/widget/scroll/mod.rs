//! Custom scroll bar synchronization.
//!
//! Scrollable widgets paint their own scroll bars but scroll through a
//! native control owned by the host. [`ScrollBridge`] keeps the two in step
//! in both directions; [`ScrollLink`] bundles a bridge with the bar it
//! drives; [`ViewportSurface`] stands in for the native control when the
//! host has none.

mod bridge;
mod link;
mod viewport;

pub use bridge::{ScrollBridge, SyncOutcome};
pub use link::{SCROLL_BAR_EXTENT, ScrollLink};
pub use viewport::ViewportSurface;
