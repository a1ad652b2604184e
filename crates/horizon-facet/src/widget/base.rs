//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the state every owner-draw widget
//! carries: identity, geometry, visibility, the interaction flags the color
//! resolver reads and the redraw trigger every mutator ends in.

use std::sync::Arc;

use horizon_facet_core::{Invalidator, Rect, RedrawTrigger, Signal, Size, WidgetId};
use horizon_facet_style::resolve::WidgetVisualState;

use super::events::InteractionEvent;
use super::group::GroupTag;

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```
/// use horizon_facet::widget::{InteractionEvent, WidgetBase};
///
/// let mut base = WidgetBase::new();
/// base.clear_repaint();
///
/// assert!(base.handle_interaction(InteractionEvent::MouseEnter));
/// assert!(base.visual_state().hover);
/// assert!(base.needs_repaint());
/// ```
pub struct WidgetBase {
    /// Process-unique id handed to the host on invalidation.
    id: WidgetId,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Interaction flags read by the color resolver.
    state: WidgetVisualState,

    /// Pending repaint bookkeeping.
    redraw: RedrawTrigger,

    /// Selection group membership, if any.
    group: Option<GroupTag>,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            geometry: Rect::ZERO,
            visible: true,
            state: WidgetVisualState::new(),
            redraw: RedrawTrigger::new(),
            group: None,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    /// Get the widget's unique id.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position relative to parent and size).
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
            self.geometry_changed.emit(rect);
        }
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize, keeping the position.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_geometry(Rect::new(self.geometry.x, self.geometry.y, width, height));
    }

    /// The widget's own rectangle in local coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
    }

    // =========================================================================
    // Visibility and State
    // =========================================================================

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
            self.visible_changed.emit(visible);
        }
    }

    /// The interaction flags.
    pub fn visual_state(&self) -> WidgetVisualState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.state.enabled != enabled {
            self.state.enabled = enabled;
            if !enabled {
                self.state.press = false;
            }
            self.update();
            self.enabled_changed.emit(enabled);
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.state.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.set_flag(|s| &mut s.read_only, read_only);
    }

    pub fn is_selected(&self) -> bool {
        self.state.selected
    }

    /// Returns whether the flag changed.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        self.set_flag(|s| &mut s.selected, selected)
    }

    pub fn is_light_style(&self) -> bool {
        self.state.light_style
    }

    pub fn set_light_style(&mut self, light_style: bool) {
        self.set_flag(|s| &mut s.light_style, light_style);
    }

    pub fn is_hovered(&self) -> bool {
        self.state.hover
    }

    pub fn is_pressed(&self) -> bool {
        self.state.press
    }

    pub fn has_focus(&self) -> bool {
        self.state.focused
    }

    fn set_flag(&mut self, flag: impl FnOnce(&mut WidgetVisualState) -> &mut bool, value: bool) -> bool {
        let slot = flag(&mut self.state);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.update();
        true
    }

    /// Apply a host interaction notification to the flags.
    ///
    /// Returns whether any flag changed; a change schedules a repaint.
    /// Disabled widgets track hover and focus but never become pressed.
    pub fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        let mut next = self.state;
        match event {
            InteractionEvent::MouseEnter => next.hover = true,
            InteractionEvent::MouseLeave => {
                next.hover = false;
                next.press = false;
            }
            InteractionEvent::MouseDown => next.press = next.enabled,
            InteractionEvent::MouseUp => next.press = false,
            InteractionEvent::FocusIn => next.focused = true,
            InteractionEvent::FocusOut => next.focused = false,
        }

        if next == self.state {
            return false;
        }
        self.state = next;
        self.update();
        true
    }

    // =========================================================================
    // Selection Groups
    // =========================================================================

    /// The selection group this widget belongs to.
    pub fn group_tag(&self) -> Option<GroupTag> {
        self.group
    }

    pub fn set_group_tag(&mut self, tag: Option<GroupTag>) {
        self.group = tag;
    }

    // =========================================================================
    // Repainting
    // =========================================================================

    /// Attach the host's invalidator.
    pub fn set_invalidator(&mut self, invalidator: Option<Arc<dyn Invalidator>>) {
        self.redraw.set_invalidator(invalidator);
    }

    /// Check if the widget needs to be repainted.
    pub fn needs_repaint(&self) -> bool {
        self.redraw.needs_redraw()
    }

    /// The region pending repaint; `None` means the whole widget.
    pub fn dirty_region(&self) -> Option<Rect> {
        self.redraw.dirty_region()
    }

    /// Schedule a repaint of the whole widget.
    pub fn update(&mut self) {
        self.redraw.request(self.id, None);
    }

    /// Schedule a repaint of part of the widget.
    pub fn update_rect(&mut self, rect: Rect) {
        self.redraw.request(self.id, Some(rect));
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint(&mut self) {
        self.redraw.clear();
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.id)
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("state", &self.state)
            .field("group", &self.group)
            .finish()
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingInvalidator(AtomicUsize);

    impl Invalidator for CountingInvalidator {
        fn invalidate(&self, _widget: WidgetId, _region: Option<Rect>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn interaction_sequence() {
        let mut base = WidgetBase::new();
        assert!(base.handle_interaction(InteractionEvent::MouseEnter));
        assert!(base.handle_interaction(InteractionEvent::MouseDown));
        assert!(base.is_pressed());
        assert!(base.handle_interaction(InteractionEvent::MouseLeave));
        assert!(!base.is_pressed());
        assert!(!base.is_hovered());
        assert!(!base.handle_interaction(InteractionEvent::MouseUp));
    }

    #[test]
    fn disabled_widget_never_pressed() {
        let mut base = WidgetBase::new();
        base.set_enabled(false);
        base.handle_interaction(InteractionEvent::MouseEnter);
        base.handle_interaction(InteractionEvent::MouseDown);
        assert!(base.is_hovered());
        assert!(!base.is_pressed());
    }

    #[test]
    fn every_mutator_reaches_the_host() {
        let invalidator = Arc::new(CountingInvalidator(AtomicUsize::new(0)));
        let mut base = WidgetBase::new();
        base.set_invalidator(Some(invalidator.clone()));

        base.set_enabled(false);
        base.set_read_only(true);
        base.set_selected(true);
        base.set_light_style(true);
        base.handle_interaction(InteractionEvent::FocusIn);
        base.set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));
        // No-op writes do not invalidate.
        base.set_selected(true);

        assert_eq!(invalidator.0.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn repaint_flag_clears() {
        let mut base = WidgetBase::new();
        assert!(base.needs_repaint());
        base.clear_repaint();
        assert!(!base.needs_repaint());
        base.update_rect(Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(base.dirty_region(), Some(Rect::new(1.0, 1.0, 2.0, 2.0)));
    }
}
