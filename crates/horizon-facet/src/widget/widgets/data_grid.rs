//! Data grid widget implementation.
//!
//! [`DataGrid`] paints a header row and a block of text cells. The cells
//! scroll on both axes, each with its own custom bar and bridge; the header
//! follows the horizontal position only.

use horizon_facet_core::{Rect, Signal, Size};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::resolve::WidgetVisualState;
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{
    InteractionEvent, PaintContext, Paintable, ScrollAxis, ScrollLink, ScrollLinked, Widget,
    WidgetBase,
};

const DEFAULT_ROW_HEIGHT: f32 = 22.0;
const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// A grid column.
#[derive(Debug, Clone, PartialEq)]
pub struct GridColumn {
    pub title: String,
    pub width: f32,
}

impl GridColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(1.0);
        self
    }
}

/// A table of text cells with a header row and row selection.
///
/// # Signals
///
/// - `current_row_changed(Option<usize>)`: Emitted when the selected row changes
pub struct DataGrid {
    base: WidgetBase,
    style: StyleCascade,
    columns: Vec<GridColumn>,
    rows: Vec<Vec<String>>,
    current_row: Option<usize>,
    hovered_row: Option<usize>,
    row_height: f32,
    header_visible: bool,
    vertical: ScrollLink,
    horizontal: ScrollLink,

    /// Signal emitted when the selected row changes.
    pub current_row_changed: Signal<Option<usize>>,
}

impl DataGrid {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Grid, theme),
            columns: Vec::new(),
            rows: Vec::new(),
            current_row: None,
            hovered_row: None,
            row_height: DEFAULT_ROW_HEIGHT,
            header_visible: true,
            vertical: ScrollLink::new(ScrollAxis::Vertical, theme),
            horizontal: ScrollLink::new(ScrollAxis::Horizontal, theme),
            current_row_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Columns and Rows
    // =========================================================================

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<GridColumn>) {
        self.columns = columns;
        self.base.update();
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self.base.update();
    }

    /// Remove every row; the selection is cleared.
    pub fn clear_rows(&mut self) {
        self.rows.clear();
        self.hovered_row = None;
        self.set_current_row(None);
        self.base.update();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn current_row(&self) -> Option<usize> {
        self.current_row
    }

    pub fn set_current_row(&mut self, row: Option<usize>) {
        let row = row.filter(|&r| r < self.rows.len());
        if self.current_row != row {
            self.current_row = row;
            self.base.update();
            self.current_row_changed.emit(row);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn is_header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn set_header_visible(&mut self, visible: bool) {
        if self.header_visible != visible {
            self.header_visible = visible;
            self.base.update();
        }
    }

    fn header_height(&self) -> f32 {
        if self.header_visible { self.row_height } else { 0.0 }
    }

    /// Extent of all cells, excluding the header.
    pub fn content_size(&self) -> Size {
        let width = self.columns.iter().map(|c| c.width).sum();
        Size::new(width, self.rows.len() as f32 * self.row_height)
    }

    /// The area the cells scroll in, excluding the header.
    pub fn viewport_size(&self) -> Size {
        let size = self.base.size();
        Size::new(size.width, (size.height - self.header_height()).max(0.0))
    }

    /// Row at local `y`; `None` over the header or past the last row.
    pub fn row_at(&self, y: f32) -> Option<usize> {
        let header = self.header_height();
        if y < header || y >= self.base.size().height {
            return None;
        }
        let content_y = y - header + self.scroll_offset(ScrollAxis::Vertical) as f32;
        let row = (content_y / self.row_height) as usize;
        (row < self.rows.len()).then_some(row)
    }

    /// Column at local `x`.
    pub fn column_at(&self, x: f32) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        let mut content_x = x + self.scroll_offset(ScrollAxis::Horizontal) as f32;
        for (index, column) in self.columns.iter().enumerate() {
            if content_x < column.width {
                return Some(index);
            }
            content_x -= column.width;
        }
        None
    }

    pub fn hover_at(&mut self, y: f32) {
        let row = self.row_at(y);
        if self.hovered_row != row {
            self.hovered_row = row;
            self.base.update();
        }
    }

    pub fn click_at(&mut self, y: f32) {
        if self.base.is_enabled()
            && let Some(row) = self.row_at(y)
        {
            self.set_current_row(Some(row));
        }
    }

    fn row_state(&self, row: usize) -> WidgetVisualState {
        let state = self.base.visual_state();
        WidgetVisualState::new()
            .enabled(state.enabled)
            .read_only(state.read_only)
            .hover(self.hovered_row == Some(row))
            .selected(self.current_row == Some(row))
    }

    fn paint_row(&self, ctx: &mut PaintContext<'_>, y: f32, cells: &[String], row: Option<usize>) {
        let colors = match row {
            Some(index) => self.style.resolve_all(&self.row_state(index)),
            None => self.resolved_colors(),
        };
        let left = self.scroll_offset(ScrollAxis::Horizontal) as f32;
        let width = ctx.width();
        if row.is_some_and(|r| Some(r) == self.current_row || Some(r) == self.hovered_row) {
            ctx.fill_rect(Rect::new(0.0, y, width, self.row_height), colors.fill);
        }

        let mut x = -left;
        for (column, cell) in self.columns.iter().zip(cells) {
            if x + column.width > 0.0 && x < width {
                let rect = Rect::new(x, y, column.width, self.row_height);
                ctx.stroke_rect(rect, colors.border, 1.0);
                ctx.draw_text(rect, cell.as_str(), colors.text);
            }
            x += column.width;
        }
    }
}

impl Paintable for DataGrid {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        ctx.draw_box(ctx.rect(), colors.fill, colors.border);

        let header = self.header_height();
        if self.header_visible {
            let titles: Vec<String> = self.columns.iter().map(|c| c.title.clone()).collect();
            self.paint_row(ctx, 0.0, &titles, None);
        }

        let top = self.scroll_offset(ScrollAxis::Vertical) as f32;
        let height = ctx.height();
        let first = (top / self.row_height) as usize;
        for (index, cells) in self.rows.iter().enumerate().skip(first) {
            let y = header + index as f32 * self.row_height - top;
            if y >= height {
                break;
            }
            self.paint_row(ctx, y, cells, Some(index));
        }

        self.paint_scroll_bars(ctx);
    }
}

impl ThemeResponsive for DataGrid {
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
        visitor(self.horizontal.bar_mut());
    }
}

impl Widget for DataGrid {
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
        if event == InteractionEvent::MouseLeave && self.hovered_row.take().is_some() {
            self.base.update();
        }
        self.base.handle_interaction(event)
    }
}

impl ScrollLinked for DataGrid {
    fn scroll_link(&self, axis: ScrollAxis) -> Option<&ScrollLink> {
        Some(match axis {
            ScrollAxis::Vertical => &self.vertical,
            ScrollAxis::Horizontal => &self.horizontal,
        })
    }

    fn scroll_link_mut(&mut self, axis: ScrollAxis) -> Option<&mut ScrollLink> {
        Some(match axis {
            ScrollAxis::Vertical => &mut self.vertical,
            ScrollAxis::Horizontal => &mut self.horizontal,
        })
    }
}

impl std::fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("id", &self.base.id())
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("current_row", &self.current_row)
            .finish()
    }
}

static_assertions::assert_impl_all!(DataGrid: Send, Sync);
