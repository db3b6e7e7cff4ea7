//! Operating mode selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`Mode::from_env`]
pub const MODE_ENV_VAR: &str = "MODE";

/// Development prints everything in the terminal shape by default;
/// production drops records below WARN and defaults to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Read the mode from the `MODE` environment variable.
    ///
    /// `PROD` selects production; any other value, or no value, selects development.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("PROD") => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "DEV",
            Mode::Production => "PROD",
        }
    }

    #[inline]
    pub fn is_production(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PROD" | "PRODUCTION" => Ok(Mode::Production),
            "DEV" | "DEVELOPMENT" => Ok(Mode::Development),
            _ => Err(format!("Invalid mode: '{}'", s)),
        }
    }
}
