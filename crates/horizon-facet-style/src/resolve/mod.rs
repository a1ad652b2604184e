//! Color resolution from interaction state.

mod resolver;
mod state;

pub use resolver::{ResolvedColors, VisualStateResolver, resolve_color};
pub use state::WidgetVisualState;
