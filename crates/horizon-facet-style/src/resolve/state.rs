//! Per-widget interaction state.

/// Interaction flags read by the color resolver.
///
/// The flags are independent; priority between them is defined by
/// [`resolve_color`](super::resolve_color), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetVisualState {
    /// Whether the widget accepts interaction.
    pub enabled: bool,
    /// Whether the widget's content is read-only.
    pub read_only: bool,
    /// Whether the mouse is over the widget.
    pub hover: bool,
    /// Whether a mouse button is held down on the widget.
    pub press: bool,
    /// Whether the widget is selected/checked.
    pub selected: bool,
    /// Whether the widget has keyboard focus.
    pub focused: bool,
    /// Whether the widget paints with its plain (light) fill and text.
    pub light_style: bool,
}

impl WidgetVisualState {
    /// An enabled widget with no other flag set.
    pub const fn new() -> Self {
        Self {
            enabled: true,
            read_only: false,
            hover: false,
            press: false,
            selected: false,
            focused: false,
            light_style: false,
        }
    }

    /// Set the enabled flag using builder pattern.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    pub fn press(mut self, press: bool) -> Self {
        self.press = press;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn light_style(mut self, light_style: bool) -> Self {
        self.light_style = light_style;
        self
    }
}

impl Default for WidgetVisualState {
    fn default() -> Self {
        Self::new()
    }
}
