//! Interaction notifications delivered by the host.
//!
//! The host's message loop translates its native input into these and hands
//! them to [`Widget::handle_interaction`](super::Widget::handle_interaction).
//! Hit testing stays with the host; the events carry no coordinates.

/// An interaction-state change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    /// The pointer entered the widget.
    MouseEnter,
    /// The pointer left the widget.
    MouseLeave,
    /// The primary button went down over the widget.
    MouseDown,
    /// The primary button was released.
    MouseUp,
    /// The widget gained keyboard focus.
    FocusIn,
    /// The widget lost keyboard focus.
    FocusOut,
}

impl InteractionEvent {
    /// Whether this is a pointer event (as opposed to focus).
    pub fn is_mouse(self) -> bool {
        matches!(
            self,
            InteractionEvent::MouseEnter
                | InteractionEvent::MouseLeave
                | InteractionEvent::MouseDown
                | InteractionEvent::MouseUp
        )
    }
}
