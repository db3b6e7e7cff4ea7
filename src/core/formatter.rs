//! Record formatting
//!
//! A [`Formatter`] turns a [`Record`] into bytes for one mode. The
//! [`StandardFormatter`] produces two shapes:
//! - Terminal: `2025-01-08T10:30:45.123456\tERROR\tsrc/main.rs:42 (run)\tmessage`
//! - JSON: `{"level":"error","ts":"1736332245.123456","caller":"src/main.rs:42","msg":"message"}`
//!
//! Both are written straight into the caller's buffer with the helpers in
//! [`encoder`](super::encoder); no general serializer is involved.

use super::encoder::{write_json_escaped, write_uint};
use super::format_config::{FormatConfig, FormatFlags, Shape};
use super::frame::Frame;
use super::mode::Mode;
use super::record::Record;
use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Renders records for development and production output.
///
/// Implementations append to `buf` and never fail; the caller owns clearing
/// and reusing the buffer.
pub trait Formatter: Send + Sync {
    fn development(&self, buf: &mut Vec<u8>, record: &Record);

    /// Must append nothing for records below WARN.
    fn production(&self, buf: &mut Vec<u8>, record: &Record);

    fn render(&self, buf: &mut Vec<u8>, record: &Record, mode: Mode) {
        match mode {
            Mode::Development => self.development(buf, record),
            Mode::Production => self.production(buf, record),
        }
    }
}

/// Flag-driven formatter used by every logger unless replaced.
#[derive(Debug, Clone, Default)]
pub struct StandardFormatter {
    config: FormatConfig,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    colors: bool,
}

impl StandardFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            colors: false,
        }
    }

    /// Colour the severity label of terminal lines with ANSI escapes
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    fn shape(&self, buf: &mut Vec<u8>, record: &Record, flags: &FormatFlags) {
        match flags.shape {
            Shape::Terminal => self.terminal(buf, record, flags),
            Shape::Json => self.json(buf, record, flags),
        }
    }

    fn terminal(&self, buf: &mut Vec<u8>, record: &Record, flags: &FormatFlags) {
        if flags.has_timestamp() {
            write_clock(buf, record, flags);
            buf.push(b'\t');
        }

        if flags.level {
            self.write_label(buf, record);
            buf.push(b'\t');
        }

        let frame = &record.frame;
        if flags.caller {
            buf.extend_from_slice(frame.file.as_bytes());
            buf.push(b':');
            write_uint(buf, frame.line as u64, 1);
        } else if flags.file {
            buf.extend_from_slice(frame.short_path().as_bytes());
            if flags.line {
                buf.push(b':');
                write_uint(buf, frame.line as u64, 1);
            }
        }

        if flags.func {
            buf.extend_from_slice(b" (");
            buf.extend_from_slice(frame.function.as_bytes());
            buf.push(b')');
        }

        buf.push(b'\t');
        buf.extend_from_slice(record.message.as_bytes());

        if let (Some(stack), true) = (&record.stack, flags.stack) {
            buf.extend_from_slice(b"\n--- TRACE:");
            for frame in stack {
                buf.extend_from_slice(b"\n\t");
                write_frame(buf, frame);
            }
            buf.extend_from_slice(b"\n---");
        }
    }

    fn json(&self, buf: &mut Vec<u8>, record: &Record, flags: &FormatFlags) {
        buf.extend_from_slice(b"{\"level\":\"");
        buf.extend_from_slice(record.severity.label(true).as_bytes());

        buf.extend_from_slice(b"\",\"ts\":\"");
        write_uint(buf, record.timestamp.timestamp().max(0) as u64, 10);
        if flags.microseconds {
            buf.push(b'.');
            write_uint(buf, u64::from(record.timestamp.timestamp_subsec_micros() % 1_000_000), 6);
        }

        if flags.info {
            buf.extend_from_slice(b"\",\"flags\":\"");
            write_json_escaped(buf, &self.config.additional_info);
        }

        let frame = &record.frame;
        if flags.caller {
            buf.extend_from_slice(b"\",\"caller\":\"");
            write_json_escaped(buf, frame.short_path());
            buf.push(b':');
            write_uint(buf, frame.line as u64, 1);
        }
        if flags.file {
            buf.extend_from_slice(b"\",\"file\":\"");
            write_json_escaped(buf, frame.file_name());
        }
        if flags.line {
            buf.extend_from_slice(b"\",\"line\":\"");
            write_uint(buf, frame.line as u64, 1);
        }
        if flags.func {
            buf.extend_from_slice(b"\",\"func\":\"");
            write_json_escaped(buf, &frame.function);
        }

        buf.extend_from_slice(b"\",\"msg\":\"");
        write_json_escaped(buf, &record.message);
        buf.push(b'"');

        if let (Some(stack), true) = (&record.stack, flags.stack) {
            buf.extend_from_slice(b",\"stack\":[");
            for (i, frame) in stack.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                buf.extend_from_slice(b"{\"trace\":\"");
                write_json_escaped(buf, &frame.to_string());
                buf.extend_from_slice(b"\"}");
            }
            buf.push(b']');
        }

        buf.push(b'}');
    }

    fn write_label(&self, buf: &mut Vec<u8>, record: &Record) {
        let label = record.severity.label(false);
        #[cfg(feature = "console")]
        {
            if self.colors {
                use colored::Colorize;
                let painted = label.color(record.severity.color_code()).to_string();
                buf.extend_from_slice(painted.as_bytes());
                return;
            }
        }
        buf.extend_from_slice(label.as_bytes());
    }
}

impl Formatter for StandardFormatter {
    fn development(&self, buf: &mut Vec<u8>, record: &Record) {
        self.shape(buf, record, &self.config.dev);
    }

    fn production(&self, buf: &mut Vec<u8>, record: &Record) {
        if !record.severity.is_enabled_in_production() {
            return;
        }
        self.shape(buf, record, &self.config.prod);
    }
}

fn wall_clock(record: &Record, utc: bool) -> NaiveDateTime {
    if utc {
        record.timestamp.naive_utc()
    } else {
        record.timestamp.with_timezone(&Local).naive_local()
    }
}

/// `YYYY-MM-DD`, `THH:MM:SS` and `.uuuuuu`, each only when enabled.
fn write_clock(buf: &mut Vec<u8>, record: &Record, flags: &FormatFlags) {
    let t = wall_clock(record, flags.utc);
    if flags.date {
        write_uint(buf, t.year().max(0) as u64, 4);
        buf.push(b'-');
        write_uint(buf, u64::from(t.month()), 2);
        buf.push(b'-');
        write_uint(buf, u64::from(t.day()), 2);
    }
    if flags.time {
        buf.push(b'T');
        write_uint(buf, u64::from(t.hour()), 2);
        buf.push(b':');
        write_uint(buf, u64::from(t.minute()), 2);
        buf.push(b':');
        write_uint(buf, u64::from(t.second()), 2);
    }
    if flags.microseconds {
        buf.push(b'.');
        // Leap seconds push nanoseconds past 1e9.
        write_uint(buf, u64::from(t.nanosecond() / 1_000 % 1_000_000), 6);
    }
}

fn write_frame(buf: &mut Vec<u8>, frame: &Frame) {
    buf.extend_from_slice(frame.file.as_bytes());
    buf.push(b':');
    write_uint(buf, frame.line as u64, 1);
    buf.extend_from_slice(b" (");
    buf.extend_from_slice(frame.function.as_bytes());
    buf.push(b')');
}
