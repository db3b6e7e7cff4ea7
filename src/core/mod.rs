//! Core logger types and traits

pub mod encoder;
pub mod error;
pub mod format_config;
pub mod formatter;
pub mod frame;
pub mod logger;
pub mod metrics;
pub mod mode;
pub mod record;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use format_config::{FormatConfig, FormatFlags, Shape};
pub use formatter::{Formatter, StandardFormatter};
pub use frame::{Frame, DEFAULT_STACK_DEPTH};
pub use logger::{Logger, LoggerBuilder, DEFAULT_CALL_DEPTH};
pub use metrics::LoggerMetrics;
pub use mode::{Mode, MODE_ENV_VAR};
pub use record::Record;
pub use severity::Severity;
pub use sink::Sink;
