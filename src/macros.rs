//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes a logger expression first and a `format!`-style template
//! after it, and expands to the matching `*_fmt` method. The non-terminating
//! macros evaluate to the method's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::{info, warn};
//! use leveled_log::sinks::MemorySink;
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! let retries = 3;
//! warn!(logger, "Retry {} of {}", retries, 5).unwrap();
//! ```

/// Log a formatted message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder().sink(leveled_log::sinks::MemorySink::new()).build();
/// use leveled_log::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_fmt($severity, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message with a stack trace attached.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder().sink(leveled_log::sinks::MemorySink::new()).build();
/// use leveled_log::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_fmt(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder().sink(leveled_log::sinks::MemorySink::new()).build();
/// use leveled_log::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at DPANIC, then panic.
#[macro_export]
macro_rules! dpanic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.dpanic_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at PANIC, then panic.
///
/// # Examples
///
/// ```should_panic
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder().sink(leveled_log::sinks::MemorySink::new()).build();
/// use leveled_log::panic_log;
/// panic_log!(logger, "invariant broken: {}", "queue underflow");
/// ```
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at FATAL, then exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use leveled_log::prelude::*;
/// # let logger = Logger::default();
/// use leveled_log::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FormatConfig, FormatFlags, Logger, Severity};
    use crate::sinks::MemorySink;

    fn logger() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .format_config(FormatConfig::default().with_dev(FormatFlags::none().with_level(true)))
            .sink(sink.clone())
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger();
        log!(logger, Severity::Info, "Test message").unwrap();
        log!(logger, Severity::Warn, "Formatted: {}", 42).unwrap();
        assert_eq!(sink.lines(), vec!["INFO\t\tTest message", "WARN\t\tFormatted: 42"]);
    }

    #[test]
    fn test_severity_macros() {
        let (logger, sink) = logger();
        debug!(logger, "Count: {}", 5).unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        warn!(logger, "Retry {} of {}", 1, 3).unwrap();
        error!(logger, "Code: {}", 500).unwrap();

        assert_eq!(
            sink.lines(),
            vec!["DEBUG\t\tCount: 5", "INFO\t\tItems: 100", "WARN\t\tRetry 1 of 3", "ERROR\t\tCode: 500"]
        );
    }

    #[test]
    fn test_inline_captures() {
        let (logger, sink) = logger();
        let user = "ada";
        info!(logger, "hello {user}").unwrap();
        assert_eq!(sink.lines(), vec!["INFO\t\thello ada"]);
    }

    #[test]
    #[should_panic(expected = "Critical failure: system")]
    fn test_panic_log_macro() {
        let (logger, _sink) = logger();
        panic_log!(logger, "Critical failure: {}", "system");
    }

    #[test]
    #[should_panic(expected = "dev only")]
    fn test_dpanic_macro() {
        let (logger, _sink) = logger();
        dpanic!(logger, "dev {}", "only");
    }
}
