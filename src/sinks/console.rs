//! Standard stream sinks

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Writes each line to the process's standard error, the default destination.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        stderr
            .write_all(bytes)
            .and_then(|()| stderr.flush())
            .map_err(|e| LoggerError::write("stderr", e))
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

/// Writes each line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(bytes)
            .and_then(|()| stdout.flush())
            .map_err(|e| LoggerError::write("stdout", e))
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sinks_accept_lines() {
        assert!(StderrSink::new().write(b"stderr sink test\n").is_ok());
        assert!(StdoutSink::new().write(b"stdout sink test\n").is_ok());
        assert_eq!(StderrSink.name(), "stderr");
        assert_eq!(StdoutSink.name(), "stdout");
    }
}
