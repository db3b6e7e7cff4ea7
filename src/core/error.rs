//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A sink rejected or could not accept the rendered bytes
    #[error("Sink '{sink}' failed to write: {source}")]
    Write {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error while handling configuration
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sink write error carrying the underlying IO failure
    pub fn write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Write {
            sink: sink.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True when the error came from a sink refusing bytes
    pub fn is_write_failure(&self) -> bool {
        matches!(self, LoggerError::Write { .. } | LoggerError::WriterError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("Mode", "unknown value");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::write("stderr", io_err);
        assert!(matches!(err, LoggerError::Write { .. }));
        assert!(err.is_write_failure());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("FormatConfig", "missing dev flags");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for FormatConfig: missing dev flags"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::write("file", io_err);
        assert_eq!(err.to_string(), "Sink 'file' failed to write: access denied");

        let err = LoggerError::writer("stream not connected");
        assert_eq!(err.to_string(), "Writer error: stream not connected");
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err = LoggerError::write("file", io_err);
        let source = err.source().expect("write error has a source");
        assert_eq!(source.to_string(), "disk full");
        assert!(!LoggerError::other("x").is_write_failure());
    }
}
