//! A custom scroll bar paired with its bridge.

use horizon_facet_core::Rect;
use horizon_facet_style::theme::Theme;

use super::{ScrollBridge, SyncOutcome};
use crate::widget::host::{NativeScrollSurface, ScrollAxis};
use crate::widget::painting::PaintContext;
use crate::widget::traits::{Paintable, Widget};
use crate::widget::widgets::ScrollBar;

/// Thickness of a custom scroll bar.
pub const SCROLL_BAR_EXTENT: f32 = 12.0;

/// One axis of a scrollable widget: the bar it paints and the bridge that
/// mirrors it onto the native control.
///
/// Every scrollable widget owns one link per axis. Links are never shared,
/// so each keeps its own cached native value.
#[derive(Debug)]
pub struct ScrollLink {
    bar: ScrollBar,
    bridge: ScrollBridge,
}

impl ScrollLink {
    /// Attach a new, hidden bar for `axis`.
    pub fn new(axis: ScrollAxis, theme: &Theme) -> Self {
        let mut bar = ScrollBar::new(axis, theme);
        bar.set_visible(false);
        Self {
            bar,
            bridge: ScrollBridge::new(axis),
        }
    }

    pub fn axis(&self) -> ScrollAxis {
        self.bridge.axis()
    }

    pub fn bar(&self) -> &ScrollBar {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut ScrollBar {
        &mut self.bar
    }

    pub fn bridge(&self) -> &ScrollBridge {
        &self.bridge
    }

    /// Current scroll position as shown by the bar.
    pub fn value(&self) -> i32 {
        self.bar.value()
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_visible()
    }

    /// Native-side change: pull the metrics into the bar.
    pub fn sync_from_native(&mut self, surface: &dyn NativeScrollSurface) -> SyncOutcome {
        self.bridge.sync_from_native(&mut self.bar, surface)
    }

    /// User moved the bar to `value`: update it and push to the native side.
    pub fn scroll_to(&mut self, value: i32, surface: &mut dyn NativeScrollSurface) -> SyncOutcome {
        self.bar.set_value(value);
        self.bridge.sync_from_bar(self.bar.value(), surface)
    }

    /// Step by a number of single steps (negative scrolls back).
    pub fn step(&mut self, steps: i32, surface: &mut dyn NativeScrollSurface) -> SyncOutcome {
        let target = self
            .bar
            .value()
            .saturating_add(steps.saturating_mul(self.bar.single_step()));
        self.scroll_to(target, surface)
    }

    /// Step by a number of pages (negative scrolls back).
    pub fn page(&mut self, pages: i32, surface: &mut dyn NativeScrollSurface) -> SyncOutcome {
        let target = self
            .bar
            .value()
            .saturating_add(pages.saturating_mul(self.bar.page_step()));
        self.scroll_to(target, surface)
    }

    /// Forget the cached native value after the native control was
    /// recreated.
    pub fn detach(&mut self) {
        self.bridge.reset();
        self.bar.set_visible(false);
    }

    /// Place the bar along the right (vertical) or bottom (horizontal) edge
    /// of `owner`, given in the owner's local coordinates.
    pub fn layout(&mut self, owner: Rect) {
        let extent = SCROLL_BAR_EXTENT.min(match self.axis() {
            ScrollAxis::Vertical => owner.width(),
            ScrollAxis::Horizontal => owner.height(),
        });
        let rect = match self.axis() {
            ScrollAxis::Vertical => {
                Rect::new(owner.width() - extent, 0.0, extent, owner.height())
            }
            ScrollAxis::Horizontal => {
                Rect::new(0.0, owner.height() - extent, owner.width(), extent)
            }
        };
        self.bar.set_geometry(rect);
    }

    /// Paint the bar into its slot of the owner's context, if visible.
    pub fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.bar.is_visible() {
            return;
        }
        let mut child = ctx.child(self.bar.geometry());
        self.bar.paint(&mut child);
    }
}
