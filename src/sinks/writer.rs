//! Adapter from any `io::Write` to a sink

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Wraps an arbitrary writer; each line is written and flushed.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    /// Name reported in write errors
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .and_then(|()| self.writer.flush())
            .map_err(|e| LoggerError::write(self.name.clone(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_collects() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(b"a\n").unwrap();
        sink.write(b"b\n").unwrap();
        assert_eq!(sink.into_inner(), b"a\nb\n");
    }

    #[test]
    fn test_writer_sink_reports_name() {
        let mut sink = WriterSink::new(Closed).with_name("pipe");
        let err = sink.write(b"x\n").unwrap_err();
        assert_eq!(err.to_string(), "Sink 'pipe' failed to write: closed");
    }
}
