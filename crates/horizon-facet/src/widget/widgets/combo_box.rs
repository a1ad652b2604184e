//! Combo box widget implementation.
//!
//! # Example
//!
//! ```
//! use horizon_facet::style::prelude::*;
//! use horizon_facet::widget::widgets::ComboBox;
//!
//! let light = Theme::light();
//! let mut combo = ComboBox::new(&light);
//! combo.set_items(["Small", "Medium", "Large"]);
//! combo.set_current_index(Some(1));
//! assert_eq!(combo.current_text(), Some("Medium"));
//!
//! // Theme changes reach the embedded list and both drop-down forms.
//! let dark = Theme::dark();
//! combo.apply_theme(&dark);
//! assert_eq!(
//!     combo.list_box().style().theme_id(),
//!     &ThemeId::Dark,
//! );
//! ```

use horizon_facet_core::{Rect, Signal};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::theme::{PaletteKind, Theme};

use super::{ListBox, PopupForm};
use crate::widget::{InteractionEvent, PaintContext, Paintable, Widget, WidgetBase};

/// Offset of the shadow form behind the drop-down.
const SHADOW_OFFSET: f32 = 3.0;

/// A text field with a drop-down list of choices.
///
/// The drop-down is built from three embedded widgets: a [`ListBox`] with
/// the choices, the [`PopupForm`] hosting it and a shadow form. Each keeps
/// its own [`StyleCascade`]; theme changes are propagated to all three and
/// each decides for itself whether to follow.
///
/// # Signals
///
/// - `current_index_changed(Option<usize>)`: Emitted when the choice changes
pub struct ComboBox {
    base: WidgetBase,
    style: StyleCascade,
    list: ListBox,
    popup: PopupForm,
    popup_shadow: PopupForm,
    max_visible_items: usize,

    /// Signal emitted when the current choice changes.
    pub current_index_changed: Signal<Option<usize>>,
}

impl ComboBox {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Input, theme),
            list: ListBox::new(theme),
            popup: PopupForm::new(theme),
            popup_shadow: PopupForm::shadow(theme),
            max_visible_items: 8,
            current_index_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Items
    // =========================================================================

    pub fn items(&self) -> &[String] {
        self.list.items()
    }

    pub fn add_item(&mut self, text: impl Into<String>) {
        self.list.add_item(text);
    }

    /// Replace the choices; the current choice is cleared.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let had_current = self.list.current().is_some();
        self.list.set_items(items);
        self.base.update();
        if had_current {
            self.current_index_changed.emit(None);
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.list.current()
    }

    pub fn current_text(&self) -> Option<&str> {
        self.list.current_text()
    }

    pub fn set_current_index(&mut self, index: Option<usize>) {
        let before = self.list.current();
        self.list.set_current(index);
        let after = self.list.current();
        if before != after {
            self.base.update();
            self.current_index_changed.emit(after);
        }
    }

    pub fn max_visible_items(&self) -> usize {
        self.max_visible_items
    }

    pub fn set_max_visible_items(&mut self, count: usize) {
        self.max_visible_items = count.max(1);
    }

    // =========================================================================
    // Embedded Widgets
    // =========================================================================

    pub fn list_box(&self) -> &ListBox {
        &self.list
    }

    pub fn list_box_mut(&mut self) -> &mut ListBox {
        &mut self.list
    }

    pub fn popup(&self) -> &PopupForm {
        &self.popup
    }

    pub fn popup_shadow(&self) -> &PopupForm {
        &self.popup_shadow
    }

    // =========================================================================
    // Drop-down
    // =========================================================================

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Open the drop-down below the field.
    pub fn show_popup(&mut self) {
        if !self.base.is_enabled() || self.base.is_read_only() {
            return;
        }
        let size = self.base.size();
        let rows = self.list.len().clamp(1, self.max_visible_items);
        let height = rows as f32 * self.list.item_height() + 2.0;
        let rect = Rect::new(0.0, size.height, size.width, height);

        self.popup_shadow.open_at(Rect::new(
            rect.x + SHADOW_OFFSET,
            rect.y + SHADOW_OFFSET,
            rect.width(),
            rect.height(),
        ));
        self.popup.open_at(rect);
        self.list
            .set_geometry(Rect::new(1.0, 1.0, (rect.width() - 2.0).max(0.0), height - 2.0));
        self.base.update();
    }

    pub fn hide_popup(&mut self) {
        if self.popup.is_open() {
            self.popup.close();
            self.popup_shadow.close();
            self.base.update();
        }
    }

    /// A row of the open drop-down was clicked at list-local `y`.
    pub fn popup_clicked_at(&mut self, y: f32) {
        if !self.popup.is_open() {
            return;
        }
        if let Some(index) = self.list.item_at(y) {
            self.set_current_index(Some(index));
            self.hide_popup();
        }
    }

    fn text_rect(&self) -> Rect {
        let r = self.base.rect();
        Rect::new(4.0, 0.0, (r.width() - r.height() - 4.0).max(0.0), r.height())
    }

    fn arrow_rect(&self) -> Rect {
        let r = self.base.rect();
        Rect::new((r.width() - r.height()).max(0.0), 0.0, r.height(), r.height())
    }
}

impl Paintable for ComboBox {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        ctx.draw_box(ctx.rect(), colors.fill, colors.border);
        if let Some(text) = self.current_text() {
            ctx.draw_text(self.text_rect(), text, colors.text);
        }
        ctx.draw_text(self.arrow_rect(), "v", colors.border);
        if self.base.has_focus() {
            ctx.draw_focus_indicator(2.0, colors.border);
        }

        if self.popup.is_open() {
            self.popup_shadow.paint(&mut ctx.child(self.popup_shadow.geometry()));
            let mut popup_ctx = ctx.child(self.popup.geometry());
            self.popup.paint(&mut popup_ctx);
            self.list.paint(&mut popup_ctx.child(self.list.geometry()));
        }
    }
}

impl ThemeResponsive for ComboBox {
    fn style(&self) -> &StyleCascade {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleCascade {
        &mut self.style
    }

    fn style_changed(&mut self) {
        self.base.update();
    }

    fn visit_themed_children(&mut self, visitor: &mut dyn FnMut(&mut dyn ThemeResponsive)) {
        visitor(&mut self.list);
        visitor(&mut self.popup);
        visitor(&mut self.popup_shadow);
    }
}

impl Widget for ComboBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        let clicking = event == InteractionEvent::MouseUp
            && self.base.is_pressed()
            && self.base.is_hovered();
        let changed = self.base.handle_interaction(event);
        match event {
            InteractionEvent::MouseUp if clicking => {
                if self.popup.is_open() {
                    self.hide_popup();
                } else {
                    self.show_popup();
                }
            }
            InteractionEvent::FocusOut => self.hide_popup(),
            _ => {}
        }
        changed
    }
}

impl std::fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboBox")
            .field("id", &self.base.id())
            .field("list", &self.list)
            .field("popup_open", &self.popup.is_open())
            .finish()
    }
}

static_assertions::assert_impl_all!(ComboBox: Send, Sync);
