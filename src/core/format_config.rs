//! Output field selection for the standard formatter
//!
//! Each mode carries its own [`FormatFlags`]: a set of independent toggles for
//! the fields of a rendered line plus the overall [`Shape`]. The standard
//! presets match what the process-wide logger starts with.

use super::error::{LoggerError, Result};
use super::mode::Mode;
use serde::{Deserialize, Serialize};

/// Overall line shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Tab-separated, human-readable line
    #[default]
    Terminal,
    /// Single-line JSON object
    Json,
}

/// Which fields a rendered line contains
///
/// # Example
///
/// ```
/// use leveled_log::core::{FormatFlags, Shape};
///
/// let flags = FormatFlags::none()
///     .with_level(true)
///     .with_file(true)
///     .with_line(true)
///     .with_shape(Shape::Terminal);
/// assert!(flags.level && flags.file && flags.line);
/// assert!(!flags.date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "FormatFlags::none")]
pub struct FormatFlags {
    /// `YYYY-MM-DD`
    pub date: bool,
    /// `THH:MM:SS`
    pub time: bool,
    /// Six-digit fraction after the time (or after the Unix seconds in JSON)
    pub microseconds: bool,
    /// Severity label
    pub level: bool,
    /// Full `file:line` in the terminal shape, `dir/file:line` in JSON
    pub caller: bool,
    /// `dir/file` in the terminal shape, bare file name in JSON
    pub file: bool,
    /// Line number; in the terminal shape only together with `file`
    pub line: bool,
    /// Short function name
    pub func: bool,
    /// Attach stack traces when a record carries one
    pub stack: bool,
    /// Use UTC instead of the local clock for date and time
    pub utc: bool,
    /// Emit the additional info string as `flags` in JSON
    pub info: bool,
    pub shape: Shape,
}

impl FormatFlags {
    /// Every field off, terminal shape
    pub const fn none() -> Self {
        Self {
            date: false,
            time: false,
            microseconds: false,
            level: false,
            caller: false,
            file: false,
            line: false,
            func: false,
            stack: false,
            utc: false,
            info: false,
            shape: Shape::Terminal,
        }
    }

    /// Date, time, microseconds, level, file, line, function and stack in the terminal shape
    pub const fn development() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: true,
            level: true,
            file: true,
            line: true,
            func: true,
            stack: true,
            ..Self::none()
        }
    }

    /// Date, time, microseconds and caller path in the JSON shape
    pub const fn production() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: true,
            caller: true,
            shape: Shape::Json,
            ..Self::none()
        }
    }

    /// Preset for `mode`
    pub const fn standard(mode: Mode) -> Self {
        match mode {
            Mode::Development => Self::development(),
            Mode::Production => Self::production(),
        }
    }

    #[inline]
    pub fn is_json(&self) -> bool {
        self.shape == Shape::Json
    }

    #[inline]
    pub fn has_timestamp(&self) -> bool {
        self.date || self.time || self.microseconds
    }

    #[must_use]
    pub fn with_date(mut self, on: bool) -> Self {
        self.date = on;
        self
    }

    #[must_use]
    pub fn with_time(mut self, on: bool) -> Self {
        self.time = on;
        self
    }

    #[must_use]
    pub fn with_microseconds(mut self, on: bool) -> Self {
        self.microseconds = on;
        self
    }

    #[must_use]
    pub fn with_level(mut self, on: bool) -> Self {
        self.level = on;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, on: bool) -> Self {
        self.caller = on;
        self
    }

    #[must_use]
    pub fn with_file(mut self, on: bool) -> Self {
        self.file = on;
        self
    }

    #[must_use]
    pub fn with_line(mut self, on: bool) -> Self {
        self.line = on;
        self
    }

    #[must_use]
    pub fn with_func(mut self, on: bool) -> Self {
        self.func = on;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, on: bool) -> Self {
        self.stack = on;
        self
    }

    #[must_use]
    pub fn with_utc(mut self, on: bool) -> Self {
        self.utc = on;
        self
    }

    #[must_use]
    pub fn with_info(mut self, on: bool) -> Self {
        self.info = on;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self::development()
    }
}

/// Flags for both modes plus the free-form string injected as `flags` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub dev: FormatFlags,
    pub prod: FormatFlags,
    pub additional_info: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            dev: FormatFlags::development(),
            prod: FormatFlags::production(),
            additional_info: String::new(),
        }
    }
}

impl FormatConfig {
    pub fn new(dev: FormatFlags, prod: FormatFlags, additional_info: impl Into<String>) -> Self {
        Self {
            dev,
            prod,
            additional_info: additional_info.into(),
        }
    }

    /// Flags that apply while running in `mode`
    #[inline]
    pub fn flags(&self, mode: Mode) -> &FormatFlags {
        match mode {
            Mode::Development => &self.dev,
            Mode::Production => &self.prod,
        }
    }

    #[must_use]
    pub fn with_dev(mut self, flags: FormatFlags) -> Self {
        self.dev = flags;
        self
    }

    #[must_use]
    pub fn with_prod(mut self, flags: FormatFlags) -> Self {
        self.prod = flags;
        self
    }

    #[must_use]
    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = info.into();
        self
    }

    /// Load a configuration from JSON.
    ///
    /// A missing `dev` or `prod` section keeps its standard preset; within a
    /// section, fields that are not named are off.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_log::core::{FormatConfig, Shape};
    ///
    /// let config = FormatConfig::from_json(r#"{"prod":{"caller":true,"shape":"terminal"}}"#).unwrap();
    /// assert_eq!(config.prod.shape, Shape::Terminal);
    /// assert!(config.dev.stack);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FormatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The additional info string is written verbatim (escaped) into JSON;
    /// it must stay on one line.
    pub fn validate(&self) -> Result<()> {
        if self.additional_info.contains('\n') {
            return Err(LoggerError::config(
                "FormatConfig",
                "additional_info must not contain newlines",
            ));
        }
        Ok(())
    }
}
