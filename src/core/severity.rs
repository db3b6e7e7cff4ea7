//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity. The order drives production filtering and the
/// side effects of the panic and fatal entry points.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    DPanic = 4,
    Panic = 5,
    Fatal = 6,
}

impl Severity {
    pub const ALL: [Severity; 7] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::DPanic,
        Severity::Panic,
        Severity::Fatal,
    ];

    /// Upper-case label used by the terminal shape
    pub fn as_str(&self) -> &'static str {
        self.label(false)
    }

    /// Label for this severity; `lowercase` selects the JSON form.
    pub fn label(&self, lowercase: bool) -> &'static str {
        match (self, lowercase) {
            (Severity::Debug, false) => "DEBUG",
            (Severity::Info, false) => "INFO",
            (Severity::Warn, false) => "WARN",
            (Severity::Error, false) => "ERROR",
            (Severity::DPanic, false) => "DPANIC",
            (Severity::Panic, false) => "PANIC",
            (Severity::Fatal, false) => "FATAL",
            (Severity::Debug, true) => "debug",
            (Severity::Info, true) => "info",
            (Severity::Warn, true) => "warn",
            (Severity::Error, true) => "error",
            (Severity::DPanic, true) => "dpanic",
            (Severity::Panic, true) => "panic",
            (Severity::Fatal, true) => "fatal",
        }
    }

    /// Whether a record at this severity survives production filtering
    #[inline]
    pub fn is_enabled_in_production(&self) -> bool {
        *self >= Severity::Warn
    }

    /// DPANIC and PANIC raise a panic after logging
    #[inline]
    pub fn is_panic(&self) -> bool {
        matches!(self, Severity::DPanic | Severity::Panic)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
            Severity::DPanic | Severity::Panic => Magenta,
            Severity::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" | "PRINT" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "DPANIC" => Ok(Severity::DPanic),
            "PANIC" => Ok(Severity::Panic),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Error.label(false), "ERROR");
        assert_eq!(Severity::Error.label(true), "error");
        assert_eq!(Severity::DPanic.label(true), "dpanic");
        for severity in Severity::ALL {
            assert_eq!(severity.label(true), severity.label(false).to_lowercase());
        }
    }

    #[test]
    fn test_production_filter_boundary() {
        assert!(!Severity::Debug.is_enabled_in_production());
        assert!(!Severity::Info.is_enabled_in_production());
        assert!(Severity::Warn.is_enabled_in_production());
        assert!(Severity::Fatal.is_enabled_in_production());
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("Print".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("dpanic".parse::<Severity>(), Ok(Severity::DPanic));
        assert!("verbose".parse::<Severity>().is_err());
    }
}
