//! Main logger implementation

use super::{
    error::Result,
    format_config::FormatConfig,
    formatter::{Formatter, StandardFormatter},
    frame::{self, DEFAULT_STACK_DEPTH},
    metrics::LoggerMetrics,
    mode::Mode,
    record::Record,
    severity::Severity,
    sink::Sink,
};
use crate::sinks::StderrSink;
use chrono::Utc;
use parking_lot::Mutex;
use std::fmt::{self, Display, Write as _};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Frames skipped above the logger's caller unless configured otherwise
pub const DEFAULT_CALL_DEPTH: usize = 0;

/// State touched by a single log call, guarded by one lock.
struct Output {
    buf: Vec<u8>,
    formatter: Box<dyn Formatter>,
    sink: Box<dyn Sink>,
}

/// A synchronous leveled logger.
///
/// Each call resolves its call site, renders one line into a reused buffer and
/// hands it to the sink while holding the logger's lock, so concurrent calls
/// never interleave their bytes. In production mode DEBUG and INFO calls return
/// immediately without touching the stack, the formatter or the sink.
///
/// Sink failures are returned to the caller. The panic and fatal entry points
/// log first and then panic or exit the process, whatever the outcome of the
/// write.
///
/// # Example
///
/// ```
/// use leveled_log::prelude::*;
/// use leveled_log::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .mode(Mode::Production)
///     .sink(sink.clone())
///     .build();
///
/// logger.info(&[&"not shown"]).unwrap();
/// leveled_log::error!(logger, "x={}", 42).unwrap();
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].starts_with(r#"{"level":"error""#));
/// ```
pub struct Logger {
    output: Mutex<Output>,
    production: AtomicBool,
    call_depth: AtomicUsize,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a development-mode logger from its parts
    pub fn new<F, S>(formatter: F, sink: S, call_depth: usize) -> Self
    where
        F: Formatter + 'static,
        S: Sink + 'static,
    {
        Self::from_parts(Box::new(formatter), Box::new(sink), Mode::Development, call_depth)
    }

    fn from_parts(
        formatter: Box<dyn Formatter>,
        sink: Box<dyn Sink>,
        mode: Mode,
        call_depth: usize,
    ) -> Self {
        Self {
            output: Mutex::new(Output {
                buf: Vec::with_capacity(256),
                formatter,
                sink,
            }),
            production: AtomicBool::new(mode.is_production()),
            call_depth: AtomicUsize::new(call_depth),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Standard presets on stderr, mode taken from the `MODE` environment variable
    pub fn standard_from_env() -> Self {
        Logger::builder().mode(Mode::from_env()).build()
    }

    /// Whether a record at `severity` would be written in the current mode
    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        !self.production.load(Ordering::Relaxed) || severity.is_enabled_in_production()
    }

    /// Format and write one record whose message is already built.
    ///
    /// Production filtering applies as for every other entry point. PANIC,
    /// DPANIC and FATAL are written without their side effects.
    pub fn output(&self, severity: Severity, message: &str, with_stack: bool) -> Result<()> {
        match self.admit(severity) {
            Some(mode) => self.dispatch(mode, severity, message.to_owned(), with_stack),
            None => Ok(()),
        }
    }

    /// Production filtering; counts what it drops. The returned mode is the
    /// one the record is rendered in, even if the logger is switched meanwhile.
    #[inline]
    fn admit(&self, severity: Severity) -> Option<Mode> {
        let mode = self.mode();
        if !mode.is_production() || severity.is_enabled_in_production() {
            return Some(mode);
        }
        self.metrics.record_suppressed();
        None
    }

    fn dispatch(
        &self,
        mode: Mode,
        severity: Severity,
        message: String,
        with_stack: bool,
    ) -> Result<()> {
        let timestamp = Utc::now();
        let depth = self.call_depth();

        let stack = with_stack.then(|| frame::resolve_stack(depth, DEFAULT_STACK_DEPTH));
        let caller = match &stack {
            Some(frames) if !frames.is_empty() => frames[0].clone(),
            _ => frame::resolve_caller(depth),
        };

        let mut record = Record::new(severity, message, caller).with_timestamp(timestamp);
        if let Some(stack) = stack {
            record = record.with_stack(stack);
        }

        let mut guard = self.output.lock();
        let Output {
            buf,
            formatter,
            sink,
        } = &mut *guard;

        buf.clear();
        formatter.render(buf, &record, mode);
        if buf.is_empty() {
            // The formatter declined the record.
            self.metrics.record_suppressed();
            return Ok(());
        }
        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }

        match sink.write(buf) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_failure();
                Err(e)
            }
        }
    }

    fn log_values(
        &self,
        severity: Severity,
        values: &[&dyn Display],
        with_stack: bool,
    ) -> Result<()> {
        match self.admit(severity) {
            Some(mode) => self.dispatch(mode, severity, join_values(values), with_stack),
            None => Ok(()),
        }
    }

    fn log_args(
        &self,
        severity: Severity,
        args: fmt::Arguments<'_>,
        with_stack: bool,
    ) -> Result<()> {
        match self.admit(severity) {
            Some(mode) => self.dispatch(mode, severity, fmt::format(args), with_stack),
            None => Ok(()),
        }
    }

    /// Write, then panic or exit. Never returns.
    fn terminate(&self, severity: Severity, message: String) -> ! {
        if let Err(e) = self.dispatch(self.mode(), severity, message.clone(), false) {
            eprintln!(
                "[LOGGER ERROR] Failed to write {} record before terminating: {}",
                severity, e
            );
        }
        if severity == Severity::Fatal {
            std::process::exit(1);
        }
        panic!("{}", message);
    }

    /// Log space-joined values at `severity`.
    ///
    /// PANIC, DPANIC and FATAL keep their side effects when routed through here.
    pub fn log(&self, severity: Severity, values: &[&dyn Display]) -> Result<()> {
        match severity {
            Severity::DPanic | Severity::Panic | Severity::Fatal => {
                self.terminate(severity, join_values(values))
            }
            Severity::Debug => self.log_values(severity, values, true),
            _ => self.log_values(severity, values, false),
        }
    }

    /// Log a formatted message at `severity`; the `log!` macro expands to this.
    pub fn log_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        match severity {
            Severity::DPanic | Severity::Panic | Severity::Fatal => {
                self.terminate(severity, fmt::format(args))
            }
            Severity::Debug => self.log_args(severity, args, true),
            _ => self.log_args(severity, args, false),
        }
    }

    /// DEBUG records always carry a stack trace.
    #[inline]
    pub fn debug(&self, values: &[&dyn Display]) -> Result<()> {
        self.log_values(Severity::Debug, values, true)
    }

    #[inline]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Severity::Debug, args, true)
    }

    #[inline]
    pub fn info(&self, values: &[&dyn Display]) -> Result<()> {
        self.log_values(Severity::Info, values, false)
    }

    #[inline]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Severity::Info, args, false)
    }

    /// Same as [`info`](Self::info)
    #[inline]
    pub fn print(&self, values: &[&dyn Display]) -> Result<()> {
        self.log_values(Severity::Info, values, false)
    }

    /// Same as [`info_fmt`](Self::info_fmt)
    #[inline]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Severity::Info, args, false)
    }

    #[inline]
    pub fn warn(&self, values: &[&dyn Display]) -> Result<()> {
        self.log_values(Severity::Warn, values, false)
    }

    #[inline]
    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Severity::Warn, args, false)
    }

    #[inline]
    pub fn error(&self, values: &[&dyn Display]) -> Result<()> {
        self.log_values(Severity::Error, values, false)
    }

    #[inline]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Severity::Error, args, false)
    }

    /// Log at DPANIC, then panic with the message.
    pub fn dpanic(&self, values: &[&dyn Display]) -> ! {
        self.terminate(Severity::DPanic, join_values(values))
    }

    pub fn dpanic_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(Severity::DPanic, fmt::format(args))
    }

    /// Log at PANIC, then panic with the message.
    pub fn panic(&self, values: &[&dyn Display]) -> ! {
        self.terminate(Severity::Panic, join_values(values))
    }

    pub fn panic_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(Severity::Panic, fmt::format(args))
    }

    /// Log at FATAL, then exit the process with status 1.
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.terminate(Severity::Fatal, join_values(values))
    }

    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(Severity::Fatal, fmt::format(args))
    }

    /// Log `value` at INFO with a stack trace of up to ten frames.
    pub fn stack_trace(&self, value: &dyn Display) -> Result<()> {
        self.log_values(Severity::Info, &[value], true)
    }

    /// Log `err` at ERROR with a stack trace of up to ten frames.
    pub fn stack_trace_error(&self, err: &dyn std::error::Error) -> Result<()> {
        self.log_values(Severity::Error, &[&err as &dyn Display], true)
    }

    /// Replace the formatter
    pub fn set_formatter(&self, formatter: Box<dyn Formatter>) {
        self.output.lock().formatter = formatter;
    }

    /// Replace the formatter with a [`StandardFormatter`] for `config`
    pub fn set_format_config(&self, config: FormatConfig) {
        self.set_formatter(Box::new(StandardFormatter::new(config)));
    }

    /// Replace the sink, returning the previous one
    pub fn set_sink(&self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        std::mem::replace(&mut self.output.lock().sink, sink)
    }

    pub fn production_mode(&self) {
        self.set_mode(Mode::Production);
    }

    pub fn development_mode(&self) {
        self.set_mode(Mode::Development);
    }

    pub fn set_mode(&self, mode: Mode) {
        self.production.store(mode.is_production(), Ordering::Relaxed);
    }

    pub fn mode(&self) -> Mode {
        if self.production.load(Ordering::Relaxed) {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    /// `"PROD"` or `"DEV"`
    pub fn mode_str(&self) -> &'static str {
        self.mode().as_str()
    }

    /// Number of extra frames to skip above the logger's caller.
    ///
    /// Raise it by one for every helper function that wraps the logger so
    /// records point at the helper's caller instead.
    pub fn set_call_depth(&self, call_depth: usize) {
        self.call_depth.store(call_depth, Ordering::Relaxed);
    }

    pub fn call_depth(&self) -> usize {
        self.call_depth.load(Ordering::Relaxed)
    }

    /// Get the logger metrics for observability
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_log::prelude::*;
    /// use leveled_log::sinks::MemorySink;
    ///
    /// let logger = Logger::builder().mode(Mode::Production).sink(MemorySink::new()).build();
    /// logger.debug(&[&"filtered"]).unwrap();
    /// logger.warn(&[&"kept"]).unwrap();
    ///
    /// assert_eq!(logger.metrics().suppressed(), 1);
    /// assert_eq!(logger.metrics().written(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mode", &self.mode())
            .field("call_depth", &self.call_depth())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Join values with single spaces using their `Display` form.
fn join_values(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(message, "{}", value);
    }
    message
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_log::prelude::*;
/// use leveled_log::sinks::MemorySink;
///
/// let logger = Logger::builder()
///     .mode(Mode::Development)
///     .format_config(FormatConfig::default().with_dev(FormatFlags::none().with_level(true)))
///     .sink(MemorySink::new())
///     .call_depth(0)
///     .build();
/// assert_eq!(logger.mode_str(), "DEV");
/// ```
pub struct LoggerBuilder {
    mode: Mode,
    formatter: Option<Box<dyn Formatter>>,
    sink: Option<Box<dyn Sink>>,
    call_depth: usize,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            mode: Mode::Development,
            formatter: None,
            sink: None,
            call_depth: DEFAULT_CALL_DEPTH,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Use a custom formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Use the standard formatter with `config`
    #[must_use = "builder methods return a new value"]
    pub fn format_config(self, config: FormatConfig) -> Self {
        self.formatter(StandardFormatter::new(config))
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn call_depth(mut self, call_depth: usize) -> Self {
        self.call_depth = call_depth;
        self
    }

    /// Build the Logger; unset parts fall back to the standard formatter and stderr
    pub fn build(self) -> Logger {
        let formatter = self
            .formatter
            .unwrap_or_else(|| Box::new(StandardFormatter::default()));
        let sink = self.sink.unwrap_or_else(|| Box::new(StderrSink::new()));
        Logger::from_parts(formatter, sink, self.mode, self.call_depth)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
