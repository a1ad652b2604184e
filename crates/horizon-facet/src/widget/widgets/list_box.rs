//! List box widget implementation.
//!
//! [`ListBox`] draws a single-column list of text items over a native
//! scrollable control and keeps a custom vertical scroll bar in step with
//! it.

use horizon_facet_core::{Rect, Signal, Size};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::resolve::WidgetVisualState;
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{
    InteractionEvent, PaintContext, Paintable, ScrollAxis, ScrollLink, ScrollLinked, Widget,
    WidgetBase,
};

/// Default height of one row.
pub const DEFAULT_ITEM_HEIGHT: f32 = 20.0;

/// A scrollable list of text items with single selection.
///
/// # Signals
///
/// - `current_changed(Option<usize>)`: Emitted when the selected row changes
pub struct ListBox {
    base: WidgetBase,
    style: StyleCascade,
    items: Vec<String>,
    current: Option<usize>,
    hovered_item: Option<usize>,
    item_height: f32,
    vertical: ScrollLink,

    /// Signal emitted when the selected row changes.
    pub current_changed: Signal<Option<usize>>,
}

impl ListBox {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::List, theme),
            items: Vec::new(),
            current: None,
            hovered_item: None,
            item_height: DEFAULT_ITEM_HEIGHT,
            vertical: ScrollLink::new(ScrollAxis::Vertical, theme),
            current_changed: Signal::new(),
        }
    }

    /// Builder form of [`set_items`](Self::set_items).
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_items(items);
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn add_item(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
        self.base.update();
    }

    /// Replace all items; the selection is cleared.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self.hovered_item = None;
        self.set_current(None);
        self.base.update();
    }

    pub fn clear(&mut self) {
        self.set_items(std::iter::empty::<String>());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_text(&self) -> Option<&str> {
        self.current.and_then(|i| self.item(i))
    }

    /// Select a row; out-of-range rows clear the selection.
    pub fn set_current(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.items.len());
        if self.current != index {
            self.current = index;
            self.base.update();
            self.current_changed.emit(index);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn set_item_height(&mut self, height: f32) {
        if height > 0.0 && height != self.item_height {
            self.item_height = height;
            self.base.update();
        }
    }

    /// The size of all rows, for the native control's scroll range.
    pub fn content_size(&self) -> Size {
        Size::new(self.base.size().width, self.items.len() as f32 * self.item_height)
    }

    /// Row at local `y`, taking the scroll offset into account.
    pub fn item_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 || y >= self.base.size().height {
            return None;
        }
        let content_y = y + self.scroll_offset(ScrollAxis::Vertical) as f32;
        let index = (content_y / self.item_height) as usize;
        (index < self.items.len()).then_some(index)
    }

    /// Pointer moved to local `y`.
    pub fn hover_at(&mut self, y: f32) {
        let item = self.item_at(y);
        if self.hovered_item != item {
            self.hovered_item = item;
            self.base.update();
        }
    }

    /// Pointer clicked at local `y`.
    pub fn click_at(&mut self, y: f32) {
        if self.base.is_enabled()
            && let Some(item) = self.item_at(y)
        {
            self.set_current(Some(item));
        }
    }

    fn item_state(&self, index: usize) -> WidgetVisualState {
        let state = self.base.visual_state();
        WidgetVisualState::new()
            .enabled(state.enabled)
            .hover(self.hovered_item == Some(index))
            .selected(self.current == Some(index))
    }
}

impl Paintable for ListBox {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        ctx.draw_box(ctx.rect(), colors.fill, colors.border);

        let offset = self.scroll_offset(ScrollAxis::Vertical) as f32;
        let height = ctx.height();
        let width = ctx.width();
        let first = (offset / self.item_height) as usize;
        for index in first..self.items.len() {
            let y = index as f32 * self.item_height - offset;
            if y >= height {
                break;
            }
            let state = self.item_state(index);
            if state.hover || state.selected {
                let row = self.style.resolve_all(&state);
                let rect = Rect::new(0.0, y, width, self.item_height);
                ctx.fill_rect(rect, row.fill);
                ctx.draw_text(rect, self.items[index].as_str(), row.text);
            } else {
                let rect = Rect::new(0.0, y, width, self.item_height);
                ctx.draw_text(rect, self.items[index].as_str(), colors.text);
            }
        }

        self.paint_scroll_bars(ctx);
    }
}

impl ThemeResponsive for ListBox {
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
        visitor(self.vertical.bar_mut());
    }
}

impl Widget for ListBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.layout_scroll_bars();
    }

    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        if event == InteractionEvent::MouseLeave && self.hovered_item.take().is_some() {
            self.base.update();
        }
        self.base.handle_interaction(event)
    }
}

impl ScrollLinked for ListBox {
    fn scroll_link(&self, axis: ScrollAxis) -> Option<&ScrollLink> {
        (axis == ScrollAxis::Vertical).then_some(&self.vertical)
    }

    fn scroll_link_mut(&mut self, axis: ScrollAxis) -> Option<&mut ScrollLink> {
        (axis == ScrollAxis::Vertical).then_some(&mut self.vertical)
    }
}

impl std::fmt::Debug for ListBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListBox")
            .field("id", &self.base.id())
            .field("items", &self.items.len())
            .field("current", &self.current)
            .field("vertical", &self.vertical)
            .finish()
    }
}

static_assertions::assert_impl_all!(ListBox: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{NativeScrollSurface, ViewportSurface};

    fn list(count: usize) -> ListBox {
        let mut list =
            ListBox::new(&Theme::light()).with_items((0..count).map(|i| format!("Item {i}")));
        list.set_geometry(Rect::new(0.0, 0.0, 120.0, 100.0));
        list
    }

    fn surface_for(list: &ListBox) -> ViewportSurface {
        ViewportSurface::with_viewport(list.content_size(), list.size())
    }

    #[test]
    fn test_selection_clamps_to_items() {
        let mut list = list(3);
        list.set_current(Some(2));
        assert_eq!(list.current_text(), Some("Item 2"));
        list.set_current(Some(7));
        assert_eq!(list.current(), None);
    }

    #[test]
    fn test_short_list_hides_scroll_bar() {
        let mut list = list(3);
        let surface = surface_for(&list);
        assert!(!list.sync_scroll_from_native(&surface));
        assert!(!list.scroll_link(ScrollAxis::Vertical).is_some_and(ScrollLink::is_visible));
        assert!(list.scroll_link(ScrollAxis::Horizontal).is_none());
    }

    #[test]
    fn test_native_scroll_moves_rows() {
        let mut list = list(50);
        let mut surface = surface_for(&list);
        list.sync_scroll_from_native(&surface);
        assert!(list.scroll_link(ScrollAxis::Vertical).is_some_and(ScrollLink::is_visible));

        surface.scroll_by(ScrollAxis::Vertical, 200);
        assert!(list.sync_scroll_from_native(&surface));
        assert_eq!(list.scroll_offset(ScrollAxis::Vertical), 200);
        assert_eq!(list.item_at(5.0), Some(10));
    }

    #[test]
    fn test_bar_drag_scrolls_native() {
        let mut list = list(50);
        let mut surface = surface_for(&list);
        list.sync_scroll_from_native(&surface);

        let outcome = list.scroll_bar_moved(ScrollAxis::Vertical, 120, &mut surface);
        assert!(outcome.is_some_and(|o| o.moved()));
        assert_eq!(surface.offset(ScrollAxis::Vertical), 120);
        assert_eq!(
            surface.scroll_info(ScrollAxis::Vertical).map(|i| i.position),
            Some(120)
        );
    }

    #[test]
    fn test_theme_reaches_scroll_bar() {
        let mut list = list(50);
        let dark = Theme::dark();
        list.apply_theme(&dark);

        let bar = list.scroll_link(ScrollAxis::Vertical).map(ScrollLink::bar);
        assert_eq!(
            bar.map(|b| b.style().colors().fill.base),
            Some(dark.color_set(PaletteKind::ScrollBar).fill.base)
        );
    }

    #[test]
    fn test_click_selects_row() {
        let mut list = list(5);
        list.click_at(45.0);
        assert_eq!(list.current(), Some(2));
    }
}
