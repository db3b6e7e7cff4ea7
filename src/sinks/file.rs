//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to a file, creating it when missing.
///
/// Every record is handed to the OS in a single `write_all`; nothing is held
/// in user space, so a crash or a fatal exit loses no lines.
///
/// # Example
///
/// ```no_run
/// use leveled_log::prelude::*;
/// use leveled_log::sinks::FileSink;
///
/// let sink = FileSink::new("/var/log/app.log").unwrap();
/// let logger = Logger::builder().sink(sink).build();
/// logger.warn(&[&"disk usage at", &91, &"%"]).unwrap();
/// ```
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.file
            .write_all(bytes)
            .map_err(|e| LoggerError::write("file", e))
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut sink = FileSink::new(&path).unwrap();
        sink.write(b"first\n").unwrap();
        drop(sink);

        let mut sink = FileSink::new(&path).unwrap();
        sink.write(b"second\n").unwrap();
        assert_eq!(sink.path(), path.as_path());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = FileSink::new(dir.path().join("missing").join("app.log"));
        assert!(matches!(result, Err(LoggerError::IoError(_))));
    }
}
