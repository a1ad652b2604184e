//! Core widget trait definitions.
//!
//! Widgets are assembled from capabilities rather than a base-class chain:
//!
//! - [`Paintable`] - records draw commands for the current state
//! - [`ThemeResponsive`] - owns a [`StyleCascade`](horizon_facet_style::cascade::StyleCascade)
//! - [`Widget`] - the above plus a [`WidgetBase`]
//! - [`ScrollLinked`] - owns one [`ScrollLink`] per scrollable axis

use horizon_facet_core::logging::targets;
use horizon_facet_core::{Rect, Size, WidgetId};
use horizon_facet_style::cascade::ThemeResponsive;
use horizon_facet_style::resolve::{ResolvedColors, WidgetVisualState};

use super::base::WidgetBase;
use super::events::InteractionEvent;
use super::host::{NativeScrollSurface, ScrollAxis};
use super::painting::PaintContext;
use super::scroll::{ScrollLink, SyncOutcome};

/// Something that can record its appearance.
pub trait Paintable {
    /// Paint the widget.
    ///
    /// The context is already translated so that (0, 0) is the top-left
    /// corner of the widget. Use `ctx.rect()` to get the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);
}

/// The base trait for all owner-draw widgets.
///
/// # Required Methods
///
/// - [`widget_base()`](Self::widget_base) / [`widget_base_mut()`](Self::widget_base_mut)
/// - [`Paintable::paint`]
/// - [`ThemeResponsive::style`] / [`ThemeResponsive::style_mut`]
///
/// Everything else delegates to the [`WidgetBase`].
///
/// # Example
///
/// ```
/// use horizon_facet::Color;
/// use horizon_facet::style::prelude::*;
/// use horizon_facet::widget::{Paintable, PaintContext, Widget, WidgetBase};
///
/// struct Swatch {
///     base: WidgetBase,
///     style: StyleCascade,
/// }
///
/// impl Paintable for Swatch {
///     fn paint(&self, ctx: &mut PaintContext<'_>) {
///         let colors = self.resolved_colors();
///         ctx.draw_box(ctx.rect(), colors.fill, colors.border);
///     }
/// }
///
/// impl ThemeResponsive for Swatch {
///     fn style(&self) -> &StyleCascade { &self.style }
///     fn style_mut(&mut self) -> &mut StyleCascade { &mut self.style }
///     fn style_changed(&mut self) { self.base.update(); }
/// }
///
/// impl Widget for Swatch {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
/// }
///
/// let theme = Theme::light();
/// let mut swatch = Swatch {
///     base: WidgetBase::new(),
///     style: StyleCascade::new(PaletteKind::Button, &theme),
/// };
/// swatch.set_enabled(false);
/// let disabled = theme.color_set(PaletteKind::Button).fill.disabled;
/// assert_eq!(Some(swatch.resolved_colors().fill), disabled);
/// ```
pub trait Widget: Paintable + ThemeResponsive + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    fn id(&self) -> WidgetId {
        self.widget_base().id()
    }

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // Visibility and State
    // =========================================================================

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    fn visual_state(&self) -> WidgetVisualState {
        self.widget_base().visual_state()
    }

    /// Apply a host interaction notification.
    ///
    /// Returns whether the visual state changed.
    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        self.widget_base_mut().handle_interaction(event)
    }

    /// Colors for every role in the current state.
    fn resolved_colors(&self) -> ResolvedColors {
        self.style().resolve_all(&self.visual_state())
    }

    // =========================================================================
    // Repainting
    // =========================================================================

    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    /// Schedule a repaint of the whole widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }
}

/// Widgets that paint custom scroll bars over a native scrollable control.
///
/// Each axis has its own [`ScrollLink`]; links are never shared between
/// axes or widgets.
pub trait ScrollLinked: Widget {
    /// The link for `axis`, if the widget scrolls along it.
    fn scroll_link(&self, axis: ScrollAxis) -> Option<&ScrollLink>;

    fn scroll_link_mut(&mut self, axis: ScrollAxis) -> Option<&mut ScrollLink>;

    /// Called after the scroll position along `axis` moved.
    fn scroll_changed(&mut self, _axis: ScrollAxis) {
        self.update();
    }

    /// Pull native metrics into every linked bar.
    ///
    /// Run after any native-side change: resize, content change or a native
    /// scroll event. Returns whether any position moved.
    fn sync_scroll_from_native(&mut self, surface: &dyn NativeScrollSurface) -> bool {
        let mut moved = false;
        for axis in ScrollAxis::ALL {
            let Some(link) = self.scroll_link_mut(axis) else {
                continue;
            };
            match link.sync_from_native(surface) {
                SyncOutcome::NotRealized | SyncOutcome::Echo => {}
                outcome if outcome.moved() => {
                    moved = true;
                    self.scroll_changed(axis);
                }
                // Range or visibility may have changed.
                _ => self.update(),
            }
        }
        moved
    }

    /// The user moved the bar along `axis` to `value`.
    ///
    /// Returns `None` when the widget has no bar on that axis.
    fn scroll_bar_moved(
        &mut self,
        axis: ScrollAxis,
        value: i32,
        surface: &mut dyn NativeScrollSurface,
    ) -> Option<SyncOutcome> {
        let outcome = self.scroll_link_mut(axis)?.scroll_to(value, surface);
        tracing::trace!(target: targets::SCROLL, %axis, ?outcome, "bar moved");
        if outcome.moved() {
            self.scroll_changed(axis);
        }
        Some(outcome)
    }

    /// Current scroll position along `axis`; zero without a link.
    fn scroll_offset(&self, axis: ScrollAxis) -> i32 {
        self.scroll_link(axis).map_or(0, ScrollLink::value)
    }

    /// Lay the visible bars along the widget's right and bottom edges.
    fn layout_scroll_bars(&mut self) {
        let rect = self.rect();
        for axis in ScrollAxis::ALL {
            if let Some(link) = self.scroll_link_mut(axis) {
                link.layout(rect);
            }
        }
    }

    /// Paint the visible bars on top of the content.
    fn paint_scroll_bars(&self, ctx: &mut PaintContext<'_>) {
        for axis in ScrollAxis::ALL {
            if let Some(link) = self.scroll_link(axis) {
                link.paint(ctx);
            }
        }
    }
}
