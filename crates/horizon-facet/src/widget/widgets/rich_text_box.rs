//! Rich text box widget implementation.
//!
//! The text itself lives in the host's native edit control; [`RichTextBox`]
//! draws the frame and the custom scroll bars around it and mirrors the
//! native scroll position on both axes.

use horizon_facet_core::{Rect, Signal, Size};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{
    PaintContext, Paintable, SCROLL_BAR_EXTENT, ScrollAxis, ScrollLink, ScrollLinked, Widget,
    WidgetBase,
};

/// Approximate metrics used to estimate the content extent.
const LINE_HEIGHT: f32 = 18.0;
const CHAR_WIDTH: f32 = 7.0;

/// A multi-line text editor frame with vertical and horizontal scroll bars.
///
/// # Signals
///
/// - `text_changed(())`: Emitted when the text is replaced or appended to
pub struct RichTextBox {
    base: WidgetBase,
    style: StyleCascade,
    text: String,
    word_wrap: bool,
    vertical: ScrollLink,
    horizontal: ScrollLink,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<()>,
}

impl RichTextBox {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base: WidgetBase::new(),
            style: StyleCascade::new(PaletteKind::Input, theme),
            text: String::new(),
            word_wrap: false,
            vertical: ScrollLink::new(ScrollAxis::Vertical, theme),
            horizontal: ScrollLink::new(ScrollAxis::Horizontal, theme),
            text_changed: Signal::new(),
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
            self.text_changed.emit(());
        }
    }

    pub fn append(&mut self, text: &str) {
        if !text.is_empty() {
            self.text.push_str(text);
            self.base.update();
            self.text_changed.emit(());
        }
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }

    // =========================================================================
    // Modes
    // =========================================================================

    pub fn is_read_only(&self) -> bool {
        self.base.is_read_only()
    }

    /// Read-only boxes draw with the read-only variants.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.base.set_read_only(read_only);
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// With word wrap on, content never overflows horizontally.
    pub fn set_word_wrap(&mut self, word_wrap: bool) {
        if self.word_wrap != word_wrap {
            self.word_wrap = word_wrap;
            self.base.update();
        }
    }

    /// Estimated extent of the text, for a software scroll surface.
    pub fn content_size(&self) -> Size {
        let widest = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = if self.word_wrap {
            self.base.size().width
        } else {
            widest as f32 * CHAR_WIDTH
        };
        Size::new(width, self.line_count() as f32 * LINE_HEIGHT)
    }

    fn text_rect(&self) -> Rect {
        let size = self.base.size();
        let right = if self.vertical.is_visible() { SCROLL_BAR_EXTENT } else { 0.0 };
        let bottom = if self.horizontal.is_visible() { SCROLL_BAR_EXTENT } else { 0.0 };
        Rect::new(
            2.0,
            2.0,
            (size.width - 4.0 - right).max(0.0),
            (size.height - 4.0 - bottom).max(0.0),
        )
    }
}

impl Paintable for RichTextBox {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = self.resolved_colors();
        ctx.draw_box(ctx.rect(), colors.fill, colors.border);

        let area = self.text_rect();
        let top = self.scroll_offset(ScrollAxis::Vertical) as f32;
        let left = self.scroll_offset(ScrollAxis::Horizontal) as f32;
        let first = (top / LINE_HEIGHT) as usize;
        for (index, line) in self.text.lines().enumerate().skip(first) {
            let y = area.y + index as f32 * LINE_HEIGHT - top;
            if y >= area.y + area.height() {
                break;
            }
            ctx.draw_text(
                Rect::new(area.x - left, y, area.width() + left, LINE_HEIGHT),
                line,
                colors.text,
            );
        }

        if self.base.has_focus() {
            ctx.draw_focus_indicator(1.0, colors.border);
        }
        self.paint_scroll_bars(ctx);
    }
}

impl ThemeResponsive for RichTextBox {
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

impl Widget for RichTextBox {
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
}

impl ScrollLinked for RichTextBox {
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

impl std::fmt::Debug for RichTextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichTextBox")
            .field("id", &self.base.id())
            .field("len", &self.text.len())
            .field("read_only", &self.is_read_only())
            .field("vertical", &self.vertical)
            .field("horizontal", &self.horizontal)
            .finish()
    }
}

static_assertions::assert_impl_all!(RichTextBox: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::ViewportSurface;

    fn long_text() -> String {
        (0..40)
            .map(|i| format!("line {i} {}", "x".repeat(i * 2)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn editor() -> RichTextBox {
        let mut editor = RichTextBox::new(&Theme::light());
        editor.set_geometry(Rect::new(0.0, 0.0, 200.0, 150.0));
        editor.set_text(long_text());
        editor
    }

    #[test]
    fn test_read_only_uses_read_only_fill() {
        let theme = Theme::light();
        let mut editor = editor();
        editor.set_read_only(true);
        assert_eq!(
            Some(editor.resolved_colors().fill),
            theme.color_set(PaletteKind::Input).fill.read_only
        );
    }

    #[test]
    fn test_axes_scroll_independently() {
        let mut editor = editor();
        let mut surface = ViewportSurface::with_viewport(editor.content_size(), editor.size());
        editor.sync_scroll_from_native(&surface);

        surface.scroll_by(ScrollAxis::Vertical, 90);
        editor.sync_scroll_from_native(&surface);
        assert_eq!(editor.scroll_offset(ScrollAxis::Vertical), 90);
        assert_eq!(editor.scroll_offset(ScrollAxis::Horizontal), 0);

        editor.scroll_bar_moved(ScrollAxis::Horizontal, 40, &mut surface);
        assert_eq!(surface.offset(ScrollAxis::Horizontal), 40);
        assert_eq!(surface.offset(ScrollAxis::Vertical), 90);
    }

    #[test]
    fn test_word_wrap_hides_horizontal_bar() {
        let mut editor = editor();
        editor.set_word_wrap(true);
        let surface = ViewportSurface::with_viewport(editor.content_size(), editor.size());
        editor.sync_scroll_from_native(&surface);

        assert!(editor.scroll_link(ScrollAxis::Vertical).is_some_and(ScrollLink::is_visible));
        assert!(!editor.scroll_link(ScrollAxis::Horizontal).is_some_and(ScrollLink::is_visible));
    }

    #[test]
    fn test_append_signals_change() {
        let mut editor = RichTextBox::new(&Theme::light());
        let count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let sink = count.clone();
        editor.text_changed.connect(move |_| {
            sink.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });
        editor.append("hello");
        editor.append("");
        assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(editor.line_count(), 1);
    }
}
