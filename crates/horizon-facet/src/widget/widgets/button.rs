//! Push button widget implementation.
//!
//! # Example
//!
//! ```
//! use horizon_facet::style::theme::Theme;
//! use horizon_facet::widget::{InteractionEvent, Widget};
//! use horizon_facet::widget::widgets::Button;
//!
//! let mut button = Button::new("Toggle", &Theme::light()).with_checkable(true);
//!
//! button.toggled().connect(|&checked| {
//!     println!("Toggled: {}", checked);
//! });
//!
//! for event in [
//!     InteractionEvent::MouseEnter,
//!     InteractionEvent::MouseDown,
//!     InteractionEvent::MouseUp,
//! ] {
//!     button.handle_interaction(event);
//! }
//! assert!(button.is_checked());
//! ```

use horizon_facet_core::{Rect, Signal};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{InteractionEvent, PaintContext, Paintable, Widget, WidgetBase};

/// A standard push button widget.
///
/// # Visual States
///
/// - **Light style**: the plain fill and text colors replace the base ones
/// - **Hovered** / **Pressed**: hover and press variants
/// - **Checked**: the selected variant (checkable buttons only)
/// - **Disabled**: the disabled variant, whatever else is set
///
/// # Clicks
///
/// A click is a mouse-up while the button is pressed, hovered and enabled.
/// A checkable button toggles itself on click unless it belongs to a
/// [`SelectionGroup`](crate::widget::SelectionGroup), which decides instead.
///
/// # Signals
///
/// - `clicked(bool)`: Emitted on click with the checked state
/// - `toggled(bool)`: Emitted when checked state changes
pub struct Button {
    base: WidgetBase,
    style: StyleCascade,
    text: String,
    checkable: bool,
    clicked: Signal<bool>,
    toggled: Signal<bool>,
}

impl Button {
    /// Create a new button with the specified text.
    pub fn new(text: impl Into<String>, theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Button, theme),
            text: text.into(),
            checkable: false,
            clicked: Signal::new(),
            toggled: Signal::new(),
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
        }
    }

    // =========================================================================
    // Light Style
    // =========================================================================

    /// Whether the button draws with the plain (light) colors.
    pub fn is_light_style(&self) -> bool {
        self.base.is_light_style()
    }

    pub fn set_light_style(&mut self, light_style: bool) {
        self.base.set_light_style(light_style);
    }

    /// Set light style using builder pattern.
    pub fn with_light_style(mut self, light_style: bool) -> Self {
        self.set_light_style(light_style);
        self
    }

    // =========================================================================
    // Checkable
    // =========================================================================

    /// Check if the button is checkable (toggle button).
    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Set whether the button is checkable. Making it non-checkable
    /// unchecks it.
    pub fn set_checkable(&mut self, checkable: bool) {
        self.checkable = checkable;
        if !checkable {
            self.set_checked(false);
        }
    }

    /// Set checkable using builder pattern.
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.set_checkable(checkable);
        self
    }

    /// Check if the button is currently checked.
    pub fn is_checked(&self) -> bool {
        self.base.is_selected()
    }

    /// Set the checked state. Ignored on non-checkable buttons.
    pub fn set_checked(&mut self, checked: bool) {
        if (self.checkable || !checked) && self.base.set_selected(checked) {
            self.toggled.emit(checked);
        }
    }

    /// Toggle the checked state.
    pub fn toggle(&mut self) {
        self.set_checked(!self.is_checked());
    }

    /// Programmatic click.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        if self.checkable && self.base.group_tag().is_none() {
            self.toggle();
        }
        self.clicked.emit(self.is_checked());
    }

    // =========================================================================
    // Signals
    // =========================================================================

    pub fn clicked(&self) -> &Signal<bool> {
        &self.clicked
    }

    pub fn toggled(&self) -> &Signal<bool> {
        &self.toggled
    }

    fn text_rect(&self) -> Rect {
        let r = self.base.rect();
        Rect::new(4.0, 0.0, (r.width() - 8.0).max(0.0), r.height())
    }
}

impl Paintable for Button {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        ctx.draw_box(ctx.rect(), colors.fill, colors.border);
        if !self.text.is_empty() {
            ctx.draw_text(self.text_rect(), self.text.as_str(), colors.text);
        }
        if self.base.has_focus() {
            ctx.draw_focus_indicator(2.0, colors.border);
        }
    }
}

impl ThemeResponsive for Button {
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

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        let clicking = event == InteractionEvent::MouseUp
            && self.base.is_pressed()
            && self.base.is_hovered()
            && self.base.is_enabled();
        let changed = self.base.handle_interaction(event);
        if clicking {
            self.click();
        }
        changed
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.base.id())
            .field("text", &self.text)
            .field("checkable", &self.checkable)
            .field("checked", &self.is_checked())
            .finish()
    }
}

// Ensure Button is Send + Sync
static_assertions::assert_impl_all!(Button: Send, Sync);
