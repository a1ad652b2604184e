//! Pagination bar widget.
//!
//! [`Pagination`] splits a number of items into pages and draws a strip of
//! page buttons windowed by
//! [`PaginationWindow`](crate::widget::PaginationWindow), with previous and
//! next buttons at either end.
//!
//! # Example
//!
//! ```
//! use horizon_facet::style::theme::Theme;
//! use horizon_facet::widget::widgets::Pagination;
//!
//! let mut pager = Pagination::new(&Theme::light());
//! pager.set_page_size(25);
//! pager.set_total_items(1000);
//!
//! pager.page_changed.connect(|change| {
//!     println!("showing items {:?}", change.data_window);
//! });
//! pager.set_active_page(3);
//! assert_eq!(pager.data_window(), 50..75);
//! ```

use std::ops::Range;

use horizon_facet_core::logging::targets;
use horizon_facet_core::{Rect, Signal};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::resolve::WidgetVisualState;
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::pagination::{DEFAULT_WINDOW_SIZE, normalize_window_size};
use crate::widget::{InteractionEvent, PageSlot, PaginationWindow, PaintContext, Paintable, Widget, WidgetBase};

/// Items per page used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Payload of [`Pagination::page_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    /// Item indices shown on the active page.
    pub data_window: Range<usize>,
    /// The active page, starting at 1.
    pub active_page: usize,
    /// Number of items in `data_window`.
    pub item_count: usize,
}

/// A bar of page buttons.
///
/// # Signals
///
/// - `page_changed(PageChange)`: Emitted when the active page or the items
///   it covers change
pub struct Pagination {
    base: WidgetBase,
    style: StyleCascade,

    total_items: usize,
    page_size: usize,
    window_size: usize,
    window: PaginationWindow,

    /// Strip width of one slot.
    slot_width: f32,

    /// Strip index under the pointer.
    hovered_slot: Option<usize>,
    /// Strip index being pressed.
    pressed_slot: Option<usize>,

    last_change: Option<PageChange>,

    /// Signal emitted when the page changes.
    pub page_changed: Signal<PageChange>,
}

impl Pagination {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Pagination, theme),
            total_items: 0,
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            window: PaginationWindow::compute(0, 1, DEFAULT_WINDOW_SIZE as i64),
            slot_width: 32.0,
            hovered_slot: None,
            pressed_slot: None,
            last_change: None,
            page_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Paging
    // =========================================================================

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Set the number of items; the active page is re-clamped.
    pub fn set_total_items(&mut self, total: usize) {
        if self.total_items != total {
            self.total_items = total;
            self.recompute(self.window.active_page());
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the items per page. Zero is coerced to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.page_size != page_size {
            self.page_size = page_size;
            self.recompute(self.window.active_page());
        }
    }

    /// Builder form of [`set_page_size`](Self::set_page_size).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Number of pages needed for all items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Set the window size; see
    /// [`normalize_window_size`](crate::widget::normalize_window_size).
    pub fn set_window_size(&mut self, requested: i64) {
        let window_size = normalize_window_size(requested);
        if self.window_size != window_size {
            self.window_size = window_size;
            self.recompute(self.window.active_page());
        }
    }

    /// Builder form of [`set_window_size`](Self::set_window_size).
    pub fn with_window_size(mut self, requested: i64) -> Self {
        self.set_window_size(requested);
        self
    }

    /// The active page, starting at 1.
    pub fn active_page(&self) -> usize {
        self.window.active_page()
    }

    /// Go to `page`, clamped into range.
    pub fn set_active_page(&mut self, page: usize) {
        self.recompute(page);
    }

    /// The current window of slots, without the previous/next buttons.
    pub fn window(&self) -> &PaginationWindow {
        &self.window
    }

    /// Every slot the bar draws, in order.
    pub fn strip(&self) -> Vec<PageSlot> {
        let mut strip = Vec::with_capacity(self.window.slots().len() + 2);
        strip.push(PageSlot::Previous);
        strip.extend_from_slice(self.window.slots());
        strip.push(PageSlot::Next);
        strip
    }

    /// Item indices shown on the active page.
    pub fn data_window(&self) -> Range<usize> {
        let start = (self.active_page() - 1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Activate a slot as if clicked.
    pub fn activate(&mut self, slot: PageSlot) {
        if self.slot_enabled(slot) {
            let target = self.window.target(slot);
            self.recompute(target);
        }
    }

    fn slot_enabled(&self, slot: PageSlot) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match slot {
            PageSlot::Previous => self.active_page() > 1,
            PageSlot::Next => self.active_page() < self.total_pages(),
            _ => true,
        }
    }

    fn recompute(&mut self, active_page: usize) {
        self.window =
            PaginationWindow::compute(self.total_pages(), active_page, self.window_size as i64);
        self.hovered_slot = None;
        self.pressed_slot = None;
        self.base.update();

        let data_window = self.data_window();
        let change = PageChange {
            item_count: data_window.len(),
            data_window,
            active_page: self.window.active_page(),
        };
        if self.last_change.as_ref() != Some(&change) {
            tracing::debug!(
                target: targets::PAGINATION,
                active_page = change.active_page,
                total_pages = self.window.total_pages(),
                start = change.data_window.start,
                end = change.data_window.end,
                "page changed"
            );
            self.last_change = Some(change.clone());
            self.page_changed.emit(change);
        }
    }

    // =========================================================================
    // Pointer Interaction
    // =========================================================================

    fn slot_rect(&self, index: usize) -> Rect {
        Rect::new(
            index as f32 * self.slot_width,
            0.0,
            self.slot_width,
            self.base.rect().height(),
        )
    }

    /// Strip index at `x` in local coordinates.
    pub fn slot_at(&self, x: f32) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        let index = (x / self.slot_width) as usize;
        (index < self.window.slots().len() + 2).then_some(index)
    }

    /// Pointer moved to `x`.
    pub fn hover_at(&mut self, x: f32) {
        let slot = self.slot_at(x);
        if self.hovered_slot != slot {
            self.hovered_slot = slot;
            self.base.update();
        }
    }

    /// Pointer pressed at `x`.
    pub fn press_at(&mut self, x: f32) {
        self.hover_at(x);
        self.pressed_slot = self.slot_at(x);
        self.base.handle_interaction(InteractionEvent::MouseDown);
    }

    /// Pointer released at `x`; activates the slot if it is the one
    /// pressed.
    pub fn release_at(&mut self, x: f32) {
        let pressed = self.pressed_slot.take();
        self.base.handle_interaction(InteractionEvent::MouseUp);
        if let Some(index) = pressed
            && self.slot_at(x) == Some(index)
            && let Some(&slot) = self.strip().get(index)
        {
            self.activate(slot);
        }
    }

    fn slot_state(&self, index: usize, slot: PageSlot) -> WidgetVisualState {
        let state = self.base.visual_state();
        WidgetVisualState::new()
            .enabled(self.slot_enabled(slot))
            .hover(self.hovered_slot == Some(index))
            .press(self.pressed_slot == Some(index) && state.press)
            .selected(slot.is_active())
            .focused(state.focused && slot.is_active())
    }
}

impl Paintable for Pagination {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        for (index, slot) in self.strip().into_iter().enumerate() {
            let colors = self.style.resolve_all(&self.slot_state(index, slot));
            let rect = self.slot_rect(index);
            ctx.draw_box(rect, colors.fill, colors.border);
            ctx.draw_text(rect, slot.label(), colors.text);
        }
    }
}

impl ThemeResponsive for Pagination {
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

impl Widget for Pagination {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        if event == InteractionEvent::MouseLeave {
            self.hovered_slot = None;
            self.pressed_slot = None;
        }
        self.base.handle_interaction(event)
    }
}

impl std::fmt::Debug for Pagination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pagination")
            .field("id", &self.base.id())
            .field("total_items", &self.total_items)
            .field("page_size", &self.page_size)
            .field("window", &self.window)
            .finish()
    }
}

static_assertions::assert_impl_all!(Pagination: Send, Sync);
