//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Intended for host applications that do not install their own `log`
/// backend. Panics if a logger is already set.
pub fn init() {
    env_logger::init();
}

/// Initialize logging for test runs, tolerating repeated calls
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
