//! Process-wide standard logger
//!
//! The standard logger is built on first use: standard format presets, stderr
//! output and the mode named by the `MODE` environment variable. It is an
//! ordinary [`Logger`], so every setter works on it, e.g.
//! `standard().set_sink(...)` to redirect the whole process.
//!
//! The free functions here report their own caller, not this module.

use crate::core::{Logger, Result};
use std::fmt::{self, Display};
use std::sync::OnceLock;

static STANDARD: OnceLock<Logger> = OnceLock::new();

/// The shared standard logger
pub fn standard() -> &'static Logger {
    STANDARD.get_or_init(Logger::standard_from_env)
}

pub fn debug(values: &[&dyn Display]) -> Result<()> {
    standard().debug(values)
}

pub fn debug_fmt(args: fmt::Arguments<'_>) -> Result<()> {
    standard().debug_fmt(args)
}

pub fn info(values: &[&dyn Display]) -> Result<()> {
    standard().info(values)
}

pub fn info_fmt(args: fmt::Arguments<'_>) -> Result<()> {
    standard().info_fmt(args)
}

pub fn print(values: &[&dyn Display]) -> Result<()> {
    standard().print(values)
}

pub fn print_fmt(args: fmt::Arguments<'_>) -> Result<()> {
    standard().print_fmt(args)
}

pub fn warn(values: &[&dyn Display]) -> Result<()> {
    standard().warn(values)
}

pub fn warn_fmt(args: fmt::Arguments<'_>) -> Result<()> {
    standard().warn_fmt(args)
}

pub fn error(values: &[&dyn Display]) -> Result<()> {
    standard().error(values)
}

pub fn error_fmt(args: fmt::Arguments<'_>) -> Result<()> {
    standard().error_fmt(args)
}

pub fn dpanic(values: &[&dyn Display]) -> ! {
    standard().dpanic(values)
}

pub fn dpanic_fmt(args: fmt::Arguments<'_>) -> ! {
    standard().dpanic_fmt(args)
}

pub fn panic(values: &[&dyn Display]) -> ! {
    standard().panic(values)
}

pub fn panic_fmt(args: fmt::Arguments<'_>) -> ! {
    standard().panic_fmt(args)
}

pub fn fatal(values: &[&dyn Display]) -> ! {
    standard().fatal(values)
}

pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    standard().fatal_fmt(args)
}

pub fn stack_trace(value: &dyn Display) -> Result<()> {
    standard().stack_trace(value)
}

pub fn stack_trace_error(err: &dyn std::error::Error) -> Result<()> {
    standard().stack_trace_error(err)
}

/// `"PROD"` or `"DEV"` for the standard logger
pub fn mode_str() -> &'static str {
    standard().mode_str()
}
