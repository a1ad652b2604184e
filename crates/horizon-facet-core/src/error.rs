//! Error types for Horizon Facet core.

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by core value types.
///
/// The widget algorithms themselves never fail; they clamp. Errors only
/// appear where text from outside the program is turned into values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A color literal could not be parsed.
    #[error("Invalid color '{value}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor { value: String },
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}
