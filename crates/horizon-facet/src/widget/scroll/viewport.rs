//! A software scroll surface for hosts without a native scrollable control.

use horizon_facet_core::Size;

use crate::widget::host::{NativeScrollInfo, NativeScrollSurface, ScrollAxis};

/// Scroll metrics computed from a content size, a viewport size and an
/// offset.
///
/// The surface reports itself unrealized until it has been given a
/// non-empty viewport, matching a native control before its first layout.
///
/// ```
/// use horizon_facet::Size;
/// use horizon_facet::widget::{NativeScrollSurface, ScrollAxis, ViewportSurface};
///
/// let mut surface = ViewportSurface::new(Size::new(300.0, 1000.0));
/// assert!(surface.scroll_info(ScrollAxis::Vertical).is_none());
///
/// surface.set_viewport_size(Size::new(300.0, 200.0));
/// let info = surface.scroll_info(ScrollAxis::Vertical).unwrap();
/// assert_eq!((info.maximum, info.page_size), (1000, 200));
///
/// surface.set_scroll_value(ScrollAxis::Vertical, 5000);
/// assert_eq!(surface.offset(ScrollAxis::Vertical), 800);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportSurface {
    content: Size,
    viewport: Size,
    offset_x: i32,
    offset_y: i32,
}

impl ViewportSurface {
    /// A surface with content but no viewport yet.
    pub fn new(content: Size) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// A laid-out surface.
    pub fn with_viewport(content: Size, viewport: Size) -> Self {
        Self {
            content,
            viewport,
            ..Self::default()
        }
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Content changed; offsets are re-clamped.
    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
        self.clamp_offsets();
    }

    /// Viewport resized; offsets are re-clamped.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp_offsets();
    }

    pub fn offset(&self, axis: ScrollAxis) -> i32 {
        match axis {
            ScrollAxis::Vertical => self.offset_y,
            ScrollAxis::Horizontal => self.offset_x,
        }
    }

    /// Scroll by a delta, as a mouse wheel would.
    pub fn scroll_by(&mut self, axis: ScrollAxis, delta: i32) -> bool {
        let target = self.offset(axis).saturating_add(delta);
        self.set_scroll_value(axis, target)
    }

    fn extents(&self, axis: ScrollAxis) -> (f32, f32) {
        match axis {
            ScrollAxis::Vertical => (self.content.height, self.viewport.height),
            ScrollAxis::Horizontal => (self.content.width, self.viewport.width),
        }
    }

    fn offset_mut(&mut self, axis: ScrollAxis) -> &mut i32 {
        match axis {
            ScrollAxis::Vertical => &mut self.offset_y,
            ScrollAxis::Horizontal => &mut self.offset_x,
        }
    }

    fn clamp_offsets(&mut self) {
        for axis in ScrollAxis::ALL {
            let clamped = match self.scroll_info(axis) {
                Some(info) => info.clamp(info.position),
                None => 0,
            };
            *self.offset_mut(axis) = clamped;
        }
    }
}

impl NativeScrollSurface for ViewportSurface {
    fn scroll_info(&self, axis: ScrollAxis) -> Option<NativeScrollInfo> {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return None;
        }
        let (content, viewport) = self.extents(axis);
        Some(NativeScrollInfo::new(
            0,
            content.max(0.0).ceil() as i32,
            viewport.floor() as i32,
            self.offset(axis),
        ))
    }

    fn set_scroll_value(&mut self, axis: ScrollAxis, position: i32) -> bool {
        let Some(info) = self.scroll_info(axis) else {
            return false;
        };
        *self.offset_mut(axis) = info.clamp(position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrealized_until_viewport_set() {
        let mut surface = ViewportSurface::new(Size::new(100.0, 100.0));
        assert!(!surface.set_scroll_value(ScrollAxis::Vertical, 10));
        surface.set_viewport_size(Size::new(50.0, 50.0));
        assert!(surface.set_scroll_value(ScrollAxis::Vertical, 10));
        assert_eq!(surface.offset(ScrollAxis::Vertical), 10);
    }

    #[test]
    fn axes_are_independent() {
        let mut surface =
            ViewportSurface::with_viewport(Size::new(400.0, 900.0), Size::new(100.0, 300.0));
        surface.set_scroll_value(ScrollAxis::Horizontal, 250);
        surface.set_scroll_value(ScrollAxis::Vertical, 50);
        assert_eq!(surface.offset(ScrollAxis::Horizontal), 250);
        assert_eq!(surface.offset(ScrollAxis::Vertical), 50);
    }

    #[test]
    fn shrinking_content_reclamps_offset() {
        let mut surface =
            ViewportSurface::with_viewport(Size::new(100.0, 1000.0), Size::new(100.0, 200.0));
        surface.scroll_by(ScrollAxis::Vertical, 700);
        assert_eq!(surface.offset(ScrollAxis::Vertical), 700);

        surface.set_content_size(Size::new(100.0, 500.0));
        assert_eq!(surface.offset(ScrollAxis::Vertical), 300);

        surface.set_content_size(Size::new(100.0, 150.0));
        assert_eq!(surface.offset(ScrollAxis::Vertical), 0);
        let info = surface.scroll_info(ScrollAxis::Vertical).unwrap();
        assert!(!info.is_scrollable());
    }
}
