#![deny(missing_docs)]
//! Shared logging utilities for the textstat workspace.
//!
//! The `textstat_*` macros forward to the `log` facade through this crate,
//! so callers do not need their own `log` dependency.

#[doc(hidden)]
pub use log as __log;

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! textstat_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! textstat_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_without_a_direct_log_dependency() {
        super::initialize_for_tests();
        crate::textstat_debug!("debug {}", 1);
        crate::textstat_info!("info {}", 2);
    }
}
