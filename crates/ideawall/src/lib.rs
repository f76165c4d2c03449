//! Public SDK surface for the ideawall data layer.
//!
//! Re-exports the building blocks and provides a small initialization
//! helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use ideawall_archive as archive;
/// Re-export for convenience.
pub use ideawall_catalog as catalog;
/// Re-export for convenience.
pub use ideawall_config as config;
/// Re-export for convenience.
pub use ideawall_protocol as protocol;

#[inline]
/// Initialize logging using env_logger.
///
/// Safe to call more than once; binaries are expected to call this early
/// in startup to ensure log output is wired up.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}
