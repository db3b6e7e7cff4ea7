//! Sink implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
#[cfg(feature = "network")]
pub mod network;
pub mod writer;

pub use console::{StderrSink, StdoutSink};
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
#[cfg(feature = "network")]
pub use network::NetworkSink;
pub use writer::WriterSink;

pub use crate::core::Sink;
