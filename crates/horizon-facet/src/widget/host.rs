//! Host collaborator interfaces.
//!
//! The host windowing layer owns the native scrollable controls (text
//! areas, tree views, grid bases). The widgets reach them only through
//! [`NativeScrollSurface`].

use std::fmt;

/// A scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    pub const ALL: [ScrollAxis; 2] = [ScrollAxis::Vertical, ScrollAxis::Horizontal];
}

impl fmt::Display for ScrollAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScrollAxis::Vertical => "vertical",
            ScrollAxis::Horizontal => "horizontal",
        })
    }
}

/// Scroll metrics reported by a native control.
///
/// `maximum` is the content extent and `page_size` the visible extent, so
/// the furthest reachable position is `maximum - page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeScrollInfo {
    pub minimum: i32,
    pub maximum: i32,
    pub page_size: i32,
    pub position: i32,
}

impl NativeScrollInfo {
    pub fn new(minimum: i32, maximum: i32, page_size: i32, position: i32) -> Self {
        Self {
            minimum,
            maximum,
            page_size,
            position,
        }
    }

    /// Whether the content overflows the visible extent.
    pub fn is_scrollable(&self) -> bool {
        self.maximum > 0 && self.page_size > 0 && self.maximum > self.page_size
    }

    /// The furthest reachable position.
    pub fn max_position(&self) -> i32 {
        (self.maximum - self.page_size.max(0)).max(self.minimum)
    }

    /// Clamp a position into the reachable range.
    pub fn clamp(&self, position: i32) -> i32 {
        position.clamp(self.minimum, self.max_position())
    }
}

/// A native scrollable control owned by the host.
pub trait NativeScrollSurface {
    /// Query the metrics for an axis. `None` while the control has not been
    /// realized (no native handle yet).
    fn scroll_info(&self, axis: ScrollAxis) -> Option<NativeScrollInfo>;

    /// Scroll the control. Returns `false` if the control is not realized.
    fn set_scroll_value(&mut self, axis: ScrollAxis, position: i32) -> bool;
}
