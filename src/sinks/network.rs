//! Network sink for remote logging
//!
//! Sends rendered lines to a remote collector over TCP. Useful when the
//! production JSON shape feeds a central log pipeline.

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Sink that streams lines to a TCP server
///
/// # Example
///
/// ```no_run
/// use leveled_log::prelude::*;
/// use leveled_log::sinks::NetworkSink;
///
/// let sink = NetworkSink::new("127.0.0.1:5170").unwrap();
/// let logger = Logger::builder().mode(Mode::Production).sink(sink).build();
/// logger.error(&[&"sent to the collector"]).unwrap();
/// ```
pub struct NetworkSink {
    stream: Option<TcpStream>,
    address: String,
    reconnect_on_error: bool,
}

impl NetworkSink {
    /// Connect to `addr`, e.g. `"localhost:5170"`.
    ///
    /// # Errors
    ///
    /// Returns error if the connection cannot be established
    pub fn new(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        let address = addr.to_string();
        let stream = connect(&address)?;

        Ok(Self {
            stream: Some(stream),
            address,
            reconnect_on_error: true,
        })
    }

    /// Reconnect once and resend when a write fails. Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn resend(&mut self, bytes: &[u8], original: std::io::Error) -> Result<()> {
        match connect(&self.address) {
            Ok(mut stream) => {
                stream
                    .write_all(bytes)
                    .map_err(|e| LoggerError::write("network", e))?;
                self.stream = Some(stream);
                Ok(())
            }
            Err(reconnect_err) => Err(LoggerError::writer(format!(
                "Failed to send log and reconnect to {}: {} (reconnect: {})",
                self.address, original, reconnect_err
            ))),
        }
    }
}

fn connect(address: &str) -> Result<TcpStream> {
    let stream = TcpStream::connect(address)?;
    stream.set_write_timeout(Some(IO_TIMEOUT))?;
    stream.set_read_timeout(Some(IO_TIMEOUT))?;
    // Each record is one small write.
    stream.set_nodelay(true)?;
    Ok(stream)
}

impl Sink for NetworkSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let result = match self.stream.as_mut() {
            Some(stream) => stream.write_all(bytes),
            None if self.reconnect_on_error => {
                let err = std::io::Error::new(std::io::ErrorKind::NotConnected, "not connected");
                return self.resend(bytes, err);
            }
            None => return Err(LoggerError::writer("Network stream not connected")),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                self.stream = None;
                if self.reconnect_on_error {
                    self.resend(bytes, e)
                } else {
                    Err(LoggerError::write("network", e))
                }
            }
        }
    }

    fn name(&self) -> &str {
        "network"
    }
}
