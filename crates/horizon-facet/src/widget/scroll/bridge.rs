//! Bidirectional value mirror between a custom scroll bar and a native
//! scrollable control.

use horizon_facet_core::logging::targets;

use crate::widget::host::{NativeScrollSurface, ScrollAxis};
use crate::widget::traits::Widget;
use crate::widget::widgets::ScrollBar;

/// What a sync step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The native control has no handle yet; nothing was touched.
    NotRealized,
    /// The content fits; the bar was hidden and its value left alone.
    Hidden,
    /// The bar took the native metrics.
    Synced { value_changed: bool },
    /// The value is the one the native control last reported.
    Echo,
    /// The value was written to the native control.
    Pushed(i32),
}

impl SyncOutcome {
    /// Whether the visible scroll position moved.
    pub fn moved(self) -> bool {
        matches!(
            self,
            SyncOutcome::Synced {
                value_changed: true
            } | SyncOutcome::Pushed(_)
        )
    }
}

/// Keeps one [`ScrollBar`] and one axis of a native control in step.
///
/// The bridge remembers the last position the native side reported. A bar
/// change carrying that same value is the echo of a native-originated
/// update and is dropped, so a native scroll event never loops back into
/// another native scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBridge {
    axis: ScrollAxis,
    last_native_value: Option<i32>,
}

impl ScrollBridge {
    pub fn new(axis: ScrollAxis) -> Self {
        Self {
            axis,
            last_native_value: None,
        }
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// The position the native control last reported or accepted.
    pub fn last_native_value(&self) -> Option<i32> {
        self.last_native_value
    }

    /// Forget the cached position, e.g. after the native control was
    /// recreated.
    pub fn reset(&mut self) {
        self.last_native_value = None;
    }

    /// Pull the native metrics into the bar.
    ///
    /// Run on every native-side change: resize, content change or a native
    /// scroll event.
    pub fn sync_from_native(
        &mut self,
        bar: &mut ScrollBar,
        surface: &dyn NativeScrollSurface,
    ) -> SyncOutcome {
        let Some(info) = surface.scroll_info(self.axis) else {
            tracing::trace!(target: targets::SCROLL, axis = %self.axis, "native control not realized");
            return SyncOutcome::NotRealized;
        };

        if !info.is_scrollable() {
            bar.set_visible(false);
            tracing::trace!(target: targets::SCROLL, axis = %self.axis, ?info, "content fits, bar hidden");
            return SyncOutcome::Hidden;
        }

        // Some hosts report positions past the reachable end.
        let position = info.clamp(info.position);
        self.last_native_value = Some(position);
        bar.set_range(info.minimum, info.maximum - info.page_size);
        bar.set_page_step(info.page_size);
        bar.set_visible(true);

        let value_changed = bar.value() != position;
        if value_changed {
            bar.set_value(position);
        }
        tracing::trace!(
            target: targets::SCROLL,
            axis = %self.axis,
            position,
            value_changed,
            "synced from native"
        );
        SyncOutcome::Synced { value_changed }
    }

    /// Push a bar value to the native control.
    ///
    /// Run when the user drags or steps the custom bar.
    pub fn sync_from_bar(&mut self, value: i32, surface: &mut dyn NativeScrollSurface) -> SyncOutcome {
        let Some(info) = surface.scroll_info(self.axis) else {
            tracing::trace!(target: targets::SCROLL, axis = %self.axis, "native control not realized");
            return SyncOutcome::NotRealized;
        };

        let value = info.clamp(value);
        if self.last_native_value == Some(value) {
            tracing::trace!(target: targets::SCROLL, axis = %self.axis, value, "echo ignored");
            return SyncOutcome::Echo;
        }

        if !surface.set_scroll_value(self.axis, value) {
            return SyncOutcome::NotRealized;
        }
        self.last_native_value = Some(value);
        tracing::trace!(target: targets::SCROLL, axis = %self.axis, value, "pushed to native");
        SyncOutcome::Pushed(value)
    }
}
