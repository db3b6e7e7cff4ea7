//! Sink trait for log output destinations

use super::error::Result;

/// Anything that can accept a finished log line.
///
/// The logger calls `write` once per record, with the whole newline-terminated
/// line, while holding its lock. A sink reports failure and leaves retries,
/// buffering and batching to the transport.
pub trait Sink: Send {
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    fn name(&self) -> &str {
        "sink"
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
