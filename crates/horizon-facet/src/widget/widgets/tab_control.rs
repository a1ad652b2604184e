//! Tab control widget implementation.

use horizon_facet_core::{Rect, Signal};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::resolve::WidgetVisualState;
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{InteractionEvent, PaintContext, Paintable, Widget, WidgetBase};

const TAB_HEIGHT: f32 = 28.0;
const MIN_TAB_WIDTH: f32 = 60.0;
const CHAR_WIDTH: f32 = 7.0;
const TAB_PADDING: f32 = 24.0;

/// A strip of tabs over a page area.
///
/// Only the strip is drawn here; the owner shows the page for
/// [`current_index`](Self::current_index).
///
/// # Signals
///
/// - `current_changed(Option<usize>)`: Emitted when the active tab changes
pub struct TabControl {
    base: WidgetBase,
    style: StyleCascade,
    tabs: Vec<String>,
    current: Option<usize>,
    hovered_tab: Option<usize>,

    /// Signal emitted when the active tab changes.
    pub current_changed: Signal<Option<usize>>,
}

impl TabControl {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Tab, theme),
            tabs: Vec::new(),
            current: None,
            hovered_tab: None,
            current_changed: Signal::new(),
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    /// Append a tab; the first tab added becomes current.
    pub fn add_tab(&mut self, title: impl Into<String>) -> usize {
        self.tabs.push(title.into());
        self.base.update();
        let index = self.tabs.len() - 1;
        if self.current.is_none() {
            self.set_current_index(Some(index));
        }
        index
    }

    /// Remove a tab, moving the current index to a neighbour if needed.
    pub fn remove_tab(&mut self, index: usize) -> Option<String> {
        if index >= self.tabs.len() {
            return None;
        }
        let title = self.tabs.remove(index);
        self.hovered_tab = None;
        self.base.update();

        let next = match self.current {
            _ if self.tabs.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) if current == index => Some(current.min(self.tabs.len() - 1)),
            other => other,
        };
        if next != self.current {
            self.current = next;
            self.current_changed.emit(next);
        } else if self.current == Some(index) {
            // Same index, different tab.
            self.current_changed.emit(next);
        }
        Some(title)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_title(&self) -> Option<&str> {
        self.current.and_then(|i| self.tabs.get(i)).map(String::as_str)
    }

    pub fn set_current_index(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.tabs.len());
        if self.current != index {
            self.current = index;
            self.base.update();
            self.current_changed.emit(index);
        }
    }

    fn tab_width(title: &str) -> f32 {
        (title.chars().count() as f32 * CHAR_WIDTH + TAB_PADDING).max(MIN_TAB_WIDTH)
    }

    /// Header rectangle of each tab, in local coordinates.
    pub fn tab_rects(&self) -> Vec<Rect> {
        let mut x = 0.0;
        self.tabs
            .iter()
            .map(|title| {
                let width = Self::tab_width(title);
                let rect = Rect::new(x, 0.0, width, TAB_HEIGHT);
                x += width;
                rect
            })
            .collect()
    }

    /// Tab under local point.
    pub fn tab_at(&self, x: f32, y: f32) -> Option<usize> {
        if !(0.0..TAB_HEIGHT).contains(&y) {
            return None;
        }
        self.tab_rects()
            .iter()
            .position(|r| x >= r.x && x < r.x + r.width())
    }

    pub fn hover_at(&mut self, x: f32, y: f32) {
        let tab = self.tab_at(x, y);
        if self.hovered_tab != tab {
            self.hovered_tab = tab;
            self.base.update();
        }
    }

    pub fn click_at(&mut self, x: f32, y: f32) {
        if self.base.is_enabled()
            && let Some(tab) = self.tab_at(x, y)
        {
            self.set_current_index(Some(tab));
        }
    }

    /// The area below the strip where the current page goes.
    pub fn page_rect(&self) -> Rect {
        let size = self.base.size();
        Rect::new(0.0, TAB_HEIGHT, size.width, (size.height - TAB_HEIGHT).max(0.0))
    }

    fn tab_state(&self, index: usize) -> WidgetVisualState {
        let state = self.base.visual_state();
        WidgetVisualState::new()
            .enabled(state.enabled)
            .hover(self.hovered_tab == Some(index))
            .selected(self.current == Some(index))
    }
}

impl Paintable for TabControl {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        let page = self.page_rect();
        ctx.draw_box(page, colors.fill, colors.border);

        for (index, rect) in self.tab_rects().into_iter().enumerate() {
            let tab = self.style.resolve_all(&self.tab_state(index));
            ctx.draw_box(rect, tab.fill, tab.border);
            ctx.draw_text(rect, self.tabs[index].as_str(), tab.text);
        }

        if self.base.has_focus()
            && let Some(rect) = self.current.and_then(|i| self.tab_rects().get(i).copied())
        {
            ctx.stroke_rect(rect, colors.border, 2.0);
        }
    }
}

impl ThemeResponsive for TabControl {
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

impl Widget for TabControl {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_interaction(&mut self, event: InteractionEvent) -> bool {
        if event == InteractionEvent::MouseLeave && self.hovered_tab.take().is_some() {
            self.base.update();
        }
        self.base.handle_interaction(event)
    }
}

impl std::fmt::Debug for TabControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabControl")
            .field("id", &self.base.id())
            .field("tabs", &self.tabs)
            .field("current", &self.current)
            .finish()
    }
}

static_assertions::assert_impl_all!(TabControl: Send, Sync);
