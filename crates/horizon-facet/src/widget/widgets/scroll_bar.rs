//! ScrollBar widget implementation.
//!
//! This module provides [`ScrollBar`], the custom-drawn bar that scrollable
//! widgets paint over their native control. It is normally owned by a
//! [`ScrollLink`](crate::widget::ScrollLink), which keeps it in step with
//! the native scroll position.
//!
//! # Example
//!
//! ```
//! use horizon_facet::style::theme::Theme;
//! use horizon_facet::widget::ScrollAxis;
//! use horizon_facet::widget::widgets::ScrollBar;
//!
//! let mut scrollbar = ScrollBar::new(ScrollAxis::Vertical, &Theme::light())
//!     .with_range(0, 1000)
//!     .with_page_step(100);
//!
//! scrollbar.value_changed.connect(|&value| {
//!     println!("Scrolled to: {}", value);
//! });
//! scrollbar.set_value(250);
//! ```

use horizon_facet_core::{Rect, Signal};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::resolve::WidgetVisualState;
use horizon_facet_style::theme::{ColorRole, PaletteKind, Theme};

use crate::widget::{InteractionEvent, PaintContext, Paintable, ScrollAxis, Widget, WidgetBase};

/// A scrollbar widget for controlling scroll position.
///
/// # Colors
///
/// The bar uses the [`PaletteKind::ScrollBar`] color set: the fill role
/// paints the thumb and the border role paints the track.
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when the scroll position changes
/// - `slider_pressed()`: Emitted when the thumb is pressed
/// - `slider_released()`: Emitted when the thumb is released
/// - `range_changed(i32, i32)`: Emitted when the range changes
pub struct ScrollBar {
    /// Widget base.
    base: WidgetBase,

    /// Theme colors.
    style: StyleCascade,

    /// Scrollbar axis.
    axis: ScrollAxis,

    /// Minimum value.
    minimum: i32,

    /// Maximum value.
    maximum: i32,

    /// Current value.
    value: i32,

    /// Page step size (used for track clicks).
    page_step: i32,

    /// Single step size (used for arrow keys and wheel notches).
    single_step: i32,

    /// Whether the thumb is currently being dragged.
    dragging: bool,

    /// Drag start position along the axis.
    drag_start_pos: f32,

    /// Value when drag started.
    drag_start_value: i32,

    /// Minimum thumb length.
    min_thumb_size: f32,

    /// Signal emitted when value changes.
    pub value_changed: Signal<i32>,

    /// Signal emitted when thumb is pressed.
    pub slider_pressed: Signal<()>,

    /// Signal emitted when thumb is released.
    pub slider_released: Signal<()>,

    /// Signal emitted when range changes.
    pub range_changed: Signal<(i32, i32)>,
}

impl ScrollBar {
    /// Create a new scrollbar along `axis`.
    pub fn new(axis: ScrollAxis, theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::ScrollBar, theme),
            axis,
            minimum: 0,
            maximum: 100,
            value: 0,
            page_step: 10,
            single_step: 1,
            dragging: false,
            drag_start_pos: 0.0,
            drag_start_value: 0,
            min_thumb_size: 20.0,
            value_changed: Signal::new(),
            slider_pressed: Signal::new(),
            slider_released: Signal::new(),
            range_changed: Signal::new(),
        }
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the current value.
    ///
    /// The value is clamped to the valid range [minimum, maximum].
    pub fn set_value(&mut self, value: i32) {
        let clamped = value.clamp(self.minimum, self.maximum);
        if self.value != clamped {
            self.value = clamped;
            self.base.update();
            self.value_changed.emit(clamped);
        }
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the value range.
    ///
    /// Reversed bounds are swapped; the current value is clamped into the
    /// new range.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        let (min, max) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };

        if self.minimum != min || self.maximum != max {
            self.minimum = min;
            self.maximum = max;
            let new_value = self.value.clamp(min, max);
            let value_changed = self.value != new_value;
            self.value = new_value;
            self.base.update();
            self.range_changed.emit((min, max));
            if value_changed {
                self.value_changed.emit(new_value);
            }
        }
    }

    /// Set range using builder pattern.
    pub fn with_range(mut self, minimum: i32, maximum: i32) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    // =========================================================================
    // Step Sizes
    // =========================================================================

    /// Get the page step size.
    pub fn page_step(&self) -> i32 {
        self.page_step
    }

    /// Set the page step size (at least 1).
    pub fn set_page_step(&mut self, step: i32) {
        let step = step.max(1);
        if self.page_step != step {
            self.page_step = step;
            self.base.update();
        }
    }

    /// Set page step using builder pattern.
    pub fn with_page_step(mut self, step: i32) -> Self {
        self.set_page_step(step);
        self
    }

    /// Get the single step size.
    pub fn single_step(&self) -> i32 {
        self.single_step
    }

    /// Set the single step size (at least 1).
    pub fn set_single_step(&mut self, step: i32) {
        self.single_step = step.max(1);
    }

    /// Set single step using builder pattern.
    pub fn with_single_step(mut self, step: i32) -> Self {
        self.set_single_step(step);
        self
    }

    // =========================================================================
    // Geometry Helpers
    // =========================================================================

    fn along(&self, rect: Rect) -> (f32, f32) {
        match self.axis {
            ScrollAxis::Horizontal => (rect.x, rect.width()),
            ScrollAxis::Vertical => (rect.y, rect.height()),
        }
    }

    /// The thumb rectangle in local coordinates.
    ///
    /// The thumb length is proportional to the page step against the whole
    /// range, never shorter than the minimum thumb size.
    pub fn thumb_rect(&self) -> Rect {
        let track = self.base.rect();
        let range = (self.maximum - self.minimum) as f32;

        if range <= 0.0 {
            return track;
        }

        let thumb_ratio = (self.page_step as f32 / (range + self.page_step as f32)).min(1.0);
        let (_, track_length) = self.along(track);
        let thumb_length = (track_length * thumb_ratio)
            .max(self.min_thumb_size)
            .min(track_length);
        let available_travel = track_length - thumb_length;
        let position = (self.value - self.minimum) as f32 / range * available_travel;

        match self.axis {
            ScrollAxis::Horizontal => Rect::new(position, 0.0, thumb_length, track.height()),
            ScrollAxis::Vertical => Rect::new(0.0, position, track.width(), thumb_length),
        }
    }

    /// Map a position along the axis to a value, centering the thumb on it.
    pub fn position_to_value(&self, pos: f32) -> i32 {
        let range = (self.maximum - self.minimum) as f32;
        if range <= 0.0 {
            return self.minimum;
        }

        let (_, track_length) = self.along(self.base.rect());
        let (_, thumb_length) = self.along(self.thumb_rect());
        let available_travel = track_length - thumb_length;
        if available_travel <= 0.0 {
            return self.minimum;
        }

        let relative_pos = (pos - thumb_length / 2.0).clamp(0.0, available_travel);
        let ratio = relative_pos / available_travel;

        self.minimum + (ratio * range).round() as i32
    }

    // =========================================================================
    // Pointer Interaction
    // =========================================================================

    /// Whether the thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A press at `pos` along the axis.
    ///
    /// On the thumb this starts a drag; on the track it pages toward the
    /// press. Returns whether the value changed.
    pub fn press_at(&mut self, pos: f32) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        let (thumb_start, thumb_length) = self.along(self.thumb_rect());
        self.base.handle_interaction(InteractionEvent::MouseDown);

        if pos >= thumb_start && pos <= thumb_start + thumb_length {
            self.dragging = true;
            self.drag_start_pos = pos;
            self.drag_start_value = self.value;
            self.slider_pressed.emit(());
            return false;
        }

        let before = self.value;
        if pos < thumb_start {
            self.set_value(self.value.saturating_sub(self.page_step));
        } else {
            self.set_value(self.value.saturating_add(self.page_step));
        }
        self.value != before
    }

    /// Pointer moved to `pos` along the axis while pressed.
    pub fn drag_to(&mut self, pos: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let range = (self.maximum - self.minimum) as f32;
        let (_, track_length) = self.along(self.base.rect());
        let (_, thumb_length) = self.along(self.thumb_rect());
        let available_travel = track_length - thumb_length;
        if range <= 0.0 || available_travel <= 0.0 {
            return false;
        }

        let delta = (pos - self.drag_start_pos) / available_travel * range;
        let before = self.value;
        self.set_value(self.drag_start_value.saturating_add(delta.round() as i32));
        self.value != before
    }

    /// Pointer released.
    pub fn release(&mut self) {
        self.base.handle_interaction(InteractionEvent::MouseUp);
        if self.dragging {
            self.dragging = false;
            self.slider_released.emit(());
        }
    }

    /// Scroll by wheel notches (positive scrolls forward).
    pub fn wheel(&mut self, notches: i32) {
        self.set_value(
            self.value
                .saturating_add(notches.saturating_mul(self.single_step)),
        );
    }

    fn thumb_state(&self) -> WidgetVisualState {
        let mut state = self.base.visual_state();
        state.press = state.press && self.dragging;
        state
    }
}

impl Paintable for ScrollBar {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let track_state = WidgetVisualState::new().enabled(self.base.is_enabled());
        ctx.fill_rect(ctx.rect(), self.style.resolve(ColorRole::Border, &track_state));

        if self.maximum > self.minimum {
            let padding = 2.0;
            let thumb = self.thumb_rect();
            let padded_thumb = Rect::new(
                thumb.x + padding,
                thumb.y + padding,
                (thumb.width() - 2.0 * padding).max(0.0),
                (thumb.height() - 2.0 * padding).max(0.0),
            );
            let color = self.style.resolve(ColorRole::Fill, &self.thumb_state());
            ctx.fill_rect(padded_thumb, color);
        }
    }
}

impl ThemeResponsive for ScrollBar {
    fn style(&self) -> &StyleCascade {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleCascade {
        &mut self.style
    }

    fn style_changed(&mut self) {
        self.base.update();
    }
}

impl Widget for ScrollBar {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        let changed = self.base.handle_interaction(event);
        if matches!(event, InteractionEvent::MouseLeave | InteractionEvent::MouseUp) && self.dragging
        {
            self.dragging = false;
            self.slider_released.emit(());
        }
        changed
    }
}

impl std::fmt::Debug for ScrollBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollBar")
            .field("id", &self.base.id())
            .field("axis", &self.axis)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("value", &self.value)
            .field("page_step", &self.page_step)
            .field("visible", &self.base.is_visible())
            .finish()
    }
}

// Ensure ScrollBar is Send + Sync
static_assertions::assert_impl_all!(ScrollBar: Send, Sync);
