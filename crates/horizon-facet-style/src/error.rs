//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
///
/// Only textual input (theme names, slot names and color literals coming
/// from configuration) can fail; typed APIs cannot name an unknown role.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No theme with this id has been registered.
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    /// A color slot name did not match any role/variant pair.
    #[error("Unknown color slot '{0}' (expected e.g. 'fill', 'border-hover', 'text-read-only')")]
    UnknownColorSlot(String),

    /// A palette kind name did not match any widget family.
    #[error("Unknown palette kind '{0}'")]
    UnknownPaletteKind(String),

    /// A color literal assigned to a slot was malformed.
    #[error("Invalid value for color slot '{slot}': {source}")]
    InvalidColor {
        slot: String,
        #[source]
        source: horizon_facet_core::Error,
    },
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(slot: impl Into<String>, source: horizon_facet_core::Error) -> Self {
        Self::InvalidColor {
            slot: slot.into(),
            source,
        }
    }
}
