//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Safe to call more than once; later calls keep the first logger.
pub fn init() {
    let _ = env_logger::builder().format_timestamp(None).try_init();
}
