//! Logging facilities for Horizon Facet.
//!
//! Horizon Facet uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in the host
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_facet::scroll=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_facet_core::signal";
    /// Redraw requests.
    pub const REDRAW: &str = "horizon_facet_core::redraw";
    /// Theme registration and lookup.
    pub const STYLE: &str = "horizon_facet::style";
    /// Theme propagation through widget trees.
    pub const CASCADE: &str = "horizon_facet::cascade";
    /// Custom scrollbar / native scroll synchronization.
    pub const SCROLL: &str = "horizon_facet::scroll";
    /// Pagination window computation and page changes.
    pub const PAGINATION: &str = "horizon_facet::pagination";
    /// Toolkit configuration loading.
    pub const CONFIG: &str = "horizon_facet::config";
}

/// Install a compact `tracing` subscriber for tests.
///
/// Safe to call repeatedly; only the first call installs anything.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
