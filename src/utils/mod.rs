//! Utilities: logging setup for the binary.
//!
//! Key items:
//!   derive_level  (-v / -vv / -q -> level)
//!   init_logging  (tracing-subscriber on stderr, RUST_LOG wins)

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logging helpers.
pub mod logging {
    use super::*;

    pub fn derive_level(verbose: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::ERROR;
        }
        match verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the global subscriber. Safe to call more than once; later calls are no-ops.
    pub fn init_logging(level: LevelFilter) {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

pub use logging::{derive_level, init_logging};
