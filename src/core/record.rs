//! Log record structure

use super::frame::Frame;
use super::severity::Severity;
use chrono::{DateTime, Utc};

/// One log call's worth of data: built, formatted once, discarded.
#[derive(Debug, Clone)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub frame: Frame,
    pub message: String,
    /// Ancestor frames, innermost first, when a trace was requested
    pub stack: Option<Vec<Frame>>,
}

impl Record {
    pub fn new(severity: Severity, message: impl Into<String>, frame: Frame) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            frame,
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_stack(mut self, stack: Vec<Frame>) -> Self {
        self.stack = Some(stack);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builders() {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let record = Record::new(Severity::Warn, "disk low", Frame::new("a/b.rs", 3, "check"))
            .with_timestamp(ts)
            .with_stack(vec![Frame::new("a/b.rs", 3, "check")]);

        assert_eq!(record.timestamp, ts);
        assert_eq!(record.message, "disk low");
        assert_eq!(record.stack.as_ref().map(Vec::len), Some(1));
    }
}
