//! Navigation menu widget implementation.
//!
//! A [`NavMenu`] shows a tree of [`NavNode`]s as an indented list. Nodes
//! with children expand and collapse in place; the visible rows are
//! flattened on demand.

use horizon_facet_core::{Rect, Signal, Size};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::resolve::WidgetVisualState;
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{
    InteractionEvent, PaintContext, Paintable, ScrollAxis, ScrollLink, ScrollLinked, Widget,
    WidgetBase,
};

const ROW_HEIGHT: f32 = 26.0;
const INDENT: f32 = 16.0;

/// One entry of a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub text: String,
    pub children: Vec<NavNode>,
    pub expanded: bool,
}

impl NavNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn with_child(mut self, child: NavNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Index path from the root list to a node.
pub type NavPath = Vec<usize>;

/// A visible row of the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow {
    pub path: NavPath,
    pub depth: usize,
}

/// A collapsible tree menu with a single selected entry.
///
/// # Signals
///
/// - `selection_changed(Option<NavPath>)`: Emitted when the selected entry changes
pub struct NavMenu {
    base: WidgetBase,
    style: StyleCascade,
    roots: Vec<NavNode>,
    selected: Option<NavPath>,
    hovered_row: Option<usize>,
    vertical: ScrollLink,

    /// Signal emitted when the selected entry changes.
    pub selection_changed: Signal<Option<NavPath>>,
}

impl NavMenu {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Menu, theme),
            roots: Vec::new(),
            selected: None,
            hovered_row: None,
            vertical: ScrollLink::new(ScrollAxis::Vertical, theme),
            selection_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Tree
    // =========================================================================

    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    pub fn add_root(&mut self, node: NavNode) {
        self.roots.push(node);
        self.base.update();
    }

    pub fn node(&self, path: &[usize]) -> Option<&NavNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, &i| node.children.get(i))
    }

    fn node_mut(&mut self, path: &[usize]) -> Option<&mut NavNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get_mut(*first)?, |node, &i| node.children.get_mut(i))
    }

    /// Expand or collapse a node.
    ///
    /// Collapsing an ancestor of the selection keeps the selection.
    pub fn set_expanded(&mut self, path: &[usize], expanded: bool) -> bool {
        match self.node_mut(path) {
            Some(node) if node.has_children() && node.expanded != expanded => {
                node.expanded = expanded;
                self.hovered_row = None;
                self.base.update();
                true
            }
            _ => false,
        }
    }

    pub fn toggle_expanded(&mut self, path: &[usize]) -> bool {
        let expanded = self.node(path).is_some_and(|n| n.expanded);
        self.set_expanded(path, !expanded)
    }

    /// The rows currently shown, depth first.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        fn walk(nodes: &[NavNode], prefix: &mut NavPath, rows: &mut Vec<NavRow>) {
            for (index, node) in nodes.iter().enumerate() {
                prefix.push(index);
                rows.push(NavRow {
                    path: prefix.clone(),
                    depth: prefix.len() - 1,
                });
                if node.expanded {
                    walk(&node.children, prefix, rows);
                }
                prefix.pop();
            }
        }

        let mut rows = Vec::new();
        walk(&self.roots, &mut Vec::new(), &mut rows);
        rows
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected(&self) -> Option<&[usize]> {
        self.selected.as_deref()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.node(self.selected.as_deref()?).map(|n| n.text.as_str())
    }

    /// Select an entry; paths that name no node clear the selection.
    pub fn set_selected(&mut self, path: Option<NavPath>) {
        let path = path.filter(|p| self.node(p).is_some());
        if self.selected != path {
            self.selected = path.clone();
            self.base.update();
            self.selection_changed.emit(path);
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    pub fn content_size(&self) -> Size {
        Size::new(
            self.base.size().width,
            self.visible_rows().len() as f32 * ROW_HEIGHT,
        )
    }

    /// Visible row index at local `y`.
    pub fn row_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 || y >= self.base.size().height {
            return None;
        }
        let content_y = y + self.scroll_offset(ScrollAxis::Vertical) as f32;
        let row = (content_y / ROW_HEIGHT) as usize;
        (row < self.visible_rows().len()).then_some(row)
    }

    pub fn hover_at(&mut self, y: f32) {
        let row = self.row_at(y);
        if self.hovered_row != row {
            self.hovered_row = row;
            self.base.update();
        }
    }

    /// Clicking a branch toggles it; clicking a leaf selects it.
    pub fn click_at(&mut self, y: f32) {
        if !self.base.is_enabled() {
            return;
        }
        let Some(row) = self.row_at(y) else {
            return;
        };
        let rows = self.visible_rows();
        let path = rows[row].path.clone();
        if self.node(&path).is_some_and(NavNode::has_children) {
            self.toggle_expanded(&path);
        } else {
            self.set_selected(Some(path));
        }
    }

    fn row_state(&self, index: usize, row: &NavRow) -> WidgetVisualState {
        WidgetVisualState::new()
            .enabled(self.base.is_enabled())
            .hover(self.hovered_row == Some(index))
            .selected(self.selected.as_ref() == Some(&row.path))
    }
}

impl Paintable for NavMenu {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        ctx.draw_box(ctx.rect(), colors.fill, colors.border);

        let top = self.scroll_offset(ScrollAxis::Vertical) as f32;
        let height = ctx.height();
        let width = ctx.width();
        for (index, row) in self.visible_rows().iter().enumerate() {
            let y = index as f32 * ROW_HEIGHT - top;
            if y + ROW_HEIGHT <= 0.0 {
                continue;
            }
            if y >= height {
                break;
            }
            let Some(node) = self.node(&row.path) else {
                continue;
            };
            let state = self.row_state(index, row);
            let row_colors = self.style.resolve_all(&state);
            let rect = Rect::new(0.0, y, width, ROW_HEIGHT);
            if state.hover || state.selected {
                ctx.fill_rect(rect, row_colors.fill);
            }

            let indent = row.depth as f32 * INDENT;
            if node.has_children() {
                let marker = if node.expanded { "-" } else { "+" };
                ctx.draw_text(Rect::new(indent, y, INDENT, ROW_HEIGHT), marker, row_colors.text);
            }
            ctx.draw_text(
                Rect::new(indent + INDENT, y, (width - indent - INDENT).max(0.0), ROW_HEIGHT),
                node.text.as_str(),
                row_colors.text,
            );
        }

        self.paint_scroll_bars(ctx);
    }
}

impl ThemeResponsive for NavMenu {
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

impl Widget for NavMenu {
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

impl ScrollLinked for NavMenu {
    fn scroll_link(&self, axis: ScrollAxis) -> Option<&ScrollLink> {
        (axis == ScrollAxis::Vertical).then_some(&self.vertical)
    }

    fn scroll_link_mut(&mut self, axis: ScrollAxis) -> Option<&mut ScrollLink> {
        (axis == ScrollAxis::Vertical).then_some(&mut self.vertical)
    }
}

impl std::fmt::Debug for NavMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavMenu")
            .field("id", &self.base.id())
            .field("roots", &self.roots.len())
            .field("selected", &self.selected)
            .finish()
    }
}

static_assertions::assert_impl_all!(NavMenu: Send, Sync);
