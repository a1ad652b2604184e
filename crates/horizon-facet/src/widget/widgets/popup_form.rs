//! Drop-down form used by composite widgets.

use horizon_facet_core::{Rect, Signal};
use horizon_facet_style::cascade::{StyleCascade, ThemeResponsive};
use horizon_facet_style::theme::{PaletteKind, Theme};

use crate::widget::{PaintContext, Paintable, Widget, WidgetBase};

/// A borderless surface that opens below its owner.
///
/// A combo box owns two: the drop-down itself and the shadow form drawn
/// offset behind it. Both start closed (hidden).
pub struct PopupForm {
    base: WidgetBase,
    style: StyleCascade,
    shadow: bool,

    /// Signal emitted when the form opens (`true`) or closes (`false`).
    pub open_changed: Signal<bool>,
}

impl PopupForm {
    /// A drop-down form.
    pub fn new(theme: &Theme) -> Self {
        let mut base = WidgetBase::new();
        base.set_visible(false);
        Self {
            base,
            style: StyleCascade::new(PaletteKind::Popup, theme),
            shadow: false,
            open_changed: Signal::new(),
        }
    }

    /// A shadow form, drawn in the border color.
    pub fn shadow(theme: &Theme) -> Self {
        Self {
            shadow: true,
            ..Self::new(theme)
        }
    }

    pub fn is_shadow(&self) -> bool {
        self.shadow
    }

    pub fn is_open(&self) -> bool {
        self.base.is_visible()
    }

    /// Open at `rect`, in the owner's coordinates.
    pub fn open_at(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        if !self.base.is_visible() {
            self.base.set_visible(true);
            self.open_changed.emit(true);
        }
    }

    pub fn close(&mut self) {
        if self.base.is_visible() {
            self.base.set_visible(false);
            self.open_changed.emit(false);
        }
    }
}

impl Paintable for PopupForm {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() {
            return;
        }
        let colors = self.resolved_colors();
        if self.shadow {
            ctx.fill_rect(ctx.rect(), colors.border.with_alpha(0.35));
        } else {
            ctx.draw_box(ctx.rect(), colors.fill, colors.border);
        }
    }
}

impl ThemeResponsive for PopupForm {
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

impl Widget for PopupForm {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl std::fmt::Debug for PopupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopupForm")
            .field("id", &self.base.id())
            .field("shadow", &self.shadow)
            .field("open", &self.is_open())
            .finish()
    }
}

static_assertions::assert_impl_all!(PopupForm: Send, Sync);
