//! # Leveled Log
//!
//! A synchronous, leveled logging facade. Every call is enriched with its call
//! site (file, line, function and, for DEBUG, a stack trace), rendered as a
//! tab-separated terminal line or a single-line JSON object, and written to a
//! pluggable [`Sink`] under the logger's lock.
//!
//! ## Features
//!
//! - **Two modes**: development prints everything; production drops DEBUG and
//!   INFO before any work is done and defaults to JSON
//! - **Hand-rolled encoding**: lines are built directly in a reused buffer
//! - **Terminating severities**: PANIC and DPANIC panic after logging, FATAL
//!   exits the process
//! - **Thread safe**: concurrent calls never interleave their bytes
//!
//! ## Example
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::sinks::MemorySink;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .format_config(FormatConfig::default().with_dev(
//!         FormatFlags::none().with_level(true),
//!     ))
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.info(&[&"listening on", &8080]).unwrap();
//! assert_eq!(sink.contents(), "INFO\t\tlistening on 8080\n");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FormatConfig, FormatFlags, Formatter, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        Mode, Result, Severity, Shape, Sink, StandardFormatter,
    };
    pub use crate::global::standard;
    pub use crate::sinks::{StderrSink, StdoutSink};
}

pub use self::core::{
    Formatter, FormatConfig, FormatFlags, Frame, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Mode, Record, Result, Severity, Shape, Sink, StandardFormatter,
};
pub use global::standard;
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{MemorySink, StderrSink, StdoutSink, WriterSink};
