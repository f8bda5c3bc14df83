//! Diagnostic logging.
//!
//! Installs a `tracing` subscriber that writes to stderr, leaving stdout for
//! the JSON table. The level is `WARN` unless the crate is built with the
//! `debug-log` feature, which raises it to `DEBUG`.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[cfg(feature = "debug-log")]
const MAX_LEVEL: Level = Level::DEBUG;
#[cfg(not(feature = "debug-log"))]
const MAX_LEVEL: Level = Level::WARN;

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(MAX_LEVEL)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
