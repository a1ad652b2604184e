//! Paint output for owner-draw widgets.
//!
//! Widgets do not rasterize. Their `paint` routine resolves colors and
//! records [`DrawCommand`]s through a [`PaintContext`]; the host's renderer
//! replays the list with its own primitives.
//!
//! # Example
//!
//! ```
//! use horizon_facet::{Color, Rect};
//! use horizon_facet::widget::{DrawCommand, PaintContext};
//!
//! let mut commands = Vec::new();
//! let mut ctx = PaintContext::new(&mut commands, Rect::new(0.0, 0.0, 80.0, 24.0));
//! ctx.fill_rect(ctx.rect(), Color::WHITE);
//!
//! assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
//! ```

use horizon_facet_core::{Color, Rect};

/// A single drawing primitive in target coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle.
    FillRect { rect: Rect, color: Color },
    /// Stroke a rectangle's outline.
    StrokeRect { rect: Rect, color: Color, width: f32 },
    /// Draw a single line of text inside `rect`.
    Text { rect: Rect, text: String, color: Color },
}

impl DrawCommand {
    /// The color this command paints with.
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::StrokeRect { color, .. }
            | DrawCommand::Text { color, .. } => *color,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::FillRect { rect, .. }
            | DrawCommand::StrokeRect { rect, .. }
            | DrawCommand::Text { rect, .. } => *rect,
        }
    }
}

/// Context provided during widget painting.
///
/// Coordinates passed to the drawing methods are local to the widget; the
/// context translates them to the target and applies the DPI scale factor.
pub struct PaintContext<'a> {
    /// Output list.
    commands: &'a mut Vec<DrawCommand>,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
    /// Offset of the widget's origin in unscaled target coordinates.
    origin: (f32, f32),
    /// DPI scale factor.
    scale: f32,
    /// Whether to show focus indicator.
    show_focus: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context for a widget whose area is `widget_rect`
    /// in target coordinates.
    pub fn new(commands: &'a mut Vec<DrawCommand>, widget_rect: Rect) -> Self {
        Self {
            commands,
            widget_rect: Rect::new(0.0, 0.0, widget_rect.width(), widget_rect.height()),
            origin: (widget_rect.x, widget_rect.y),
            scale: 1.0,
            show_focus: false,
        }
    }

    /// Set the DPI scale factor using builder pattern.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = if scale > 0.0 { scale } else { 1.0 };
        self
    }

    /// Set whether focus indicators should be drawn.
    pub fn with_show_focus(mut self, show_focus: bool) -> Self {
        self.show_focus = show_focus;
        self
    }

    /// The widget's local rectangle.
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn should_show_focus(&self) -> bool {
        self.show_focus
    }

    fn map(&self, rect: Rect) -> Rect {
        Rect::new(rect.x + self.origin.0, rect.y + self.origin.1, rect.width(), rect.height())
            .scaled(self.scale)
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.map(rect);
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Stroke a rectangle's outline.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let rect = self.map(rect);
        let width = width * self.scale;
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    /// Draw a line of text.
    pub fn draw_text(&mut self, rect: Rect, text: impl Into<String>, color: Color) {
        let rect = self.map(rect);
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.into(),
            color,
        });
    }

    /// Fill and outline a box in one call.
    pub fn draw_box(&mut self, rect: Rect, fill: Color, border: Color) {
        self.fill_rect(rect, fill);
        self.stroke_rect(rect, border, 1.0);
    }

    /// Draw a focus rectangle inset from the widget bounds, if focus
    /// indicators are enabled.
    pub fn draw_focus_indicator(&mut self, inset: f32, color: Color) {
        if !self.show_focus {
            return;
        }
        let r = self.widget_rect;
        let rect = Rect::new(
            inset,
            inset,
            (r.width() - 2.0 * inset).max(0.0),
            (r.height() - 2.0 * inset).max(0.0),
        );
        self.stroke_rect(rect, color, 1.0);
    }

    /// A context for a child occupying `geometry` (in this widget's local
    /// coordinates).
    pub fn child(&mut self, geometry: Rect) -> PaintContext<'_> {
        PaintContext {
            commands: &mut *self.commands,
            widget_rect: Rect::new(0.0, 0.0, geometry.width(), geometry.height()),
            origin: (self.origin.0 + geometry.x, self.origin.1 + geometry.y),
            scale: self.scale,
            show_focus: self.show_focus,
        }
    }

    /// Number of commands recorded so far.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_contexts_translate() {
        let mut commands = Vec::new();
        let mut ctx = PaintContext::new(&mut commands, Rect::new(10.0, 10.0, 100.0, 100.0));
        {
            let mut child = ctx.child(Rect::new(5.0, 5.0, 20.0, 20.0));
            assert_eq!(child.rect(), Rect::new(0.0, 0.0, 20.0, 20.0));
            child.fill_rect(child.rect(), Color::RED);
        }
        assert_eq!(commands[0].rect(), Rect::new(15.0, 15.0, 20.0, 20.0));
    }

    #[test]
    fn scale_applies_to_geometry() {
        let mut commands = Vec::new();
        let mut ctx = PaintContext::new(&mut commands, Rect::new(0.0, 0.0, 10.0, 10.0)).with_scale(2.0);
        ctx.stroke_rect(Rect::new(1.0, 1.0, 4.0, 4.0), Color::BLACK, 1.0);
        assert_eq!(
            commands[0],
            DrawCommand::StrokeRect {
                rect: Rect::new(2.0, 2.0, 8.0, 8.0),
                color: Color::BLACK,
                width: 2.0,
            }
        );
    }

    #[test]
    fn focus_indicator_only_when_enabled() {
        let mut commands = Vec::new();
        let mut ctx = PaintContext::new(&mut commands, Rect::new(0.0, 0.0, 10.0, 10.0));
        ctx.draw_focus_indicator(1.0, Color::BLUE);
        let mut ctx = ctx.with_show_focus(true);
        ctx.draw_focus_indicator(1.0, Color::BLUE);
        assert_eq!(commands.len(), 1);
    }
}
