//! Session diagnostic log.
//!
//! Every rejected keystroke and failed validation appends a record here.
//! The log is owned by whoever sets up the form (not a process-wide
//! global), lives for the page session, and exposes an explicit `clear`
//! so the host can reset it without a reload.

use crate::field::FieldId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One logged validation failure or rejected keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Field identifier, e.g. `email`.
    pub field: String,
    /// The offending value at the time of the event.
    pub value: String,
    pub message: String,
    /// ISO-8601 timestamp supplied by the platform layer.
    pub time: String,
}

/// Errors raised while serializing the diagnostic payload.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("failed to serialize diagnostics: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only sequence of [`ErrorRecord`]s for one page session.
///
/// No dedup, no cap: the serialized payload is a faithful history of
/// everything the user tripped over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    records: Vec<ErrorRecord>,
}

impl SessionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for a field event.
    pub fn record(&mut self, field: FieldId, value: &str, message: &str, time: &str) {
        self.records.push(ErrorRecord {
            field: field.as_str().to_string(),
            value: value.to_string(),
            message: message.to_string(),
            time: time.to_string(),
        });
    }

    #[must_use]
    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all accumulated records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Serialize the whole history for the hidden diagnostics field.
    ///
    /// # Errors
    /// Returns [`DiagnosticsError::Serialize`] if JSON encoding fails.
    pub fn to_json(&self) -> Result<String, DiagnosticsError> {
        Ok(serde_json::to_string(&self.records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate_in_order_without_dedup() {
        let mut log = SessionLog::new();
        log.record(FieldId::Name, "Ada9", "Illegal character typed", "t0");
        log.record(FieldId::Name, "Ada9", "Illegal character typed", "t1");
        log.record(FieldId::Email, "", "Email is required.", "t2");
        assert_eq!(log.len(), 3);
        assert_eq!(log.records()[0].time, "t0");
        assert_eq!(log.records()[2].field, "email");
    }

    #[test]
    fn clear_resets_the_session() {
        let mut log = SessionLog::new();
        log.record(FieldId::Message, "", "Please enter a message.", "t0");
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn json_payload_round_trips() {
        let mut log = SessionLog::new();
        log.record(FieldId::Name, "A!", "Illegal character typed", "2026-01-01T00:00:00Z");
        let payload = log.to_json().expect("serialize");
        let parsed: Vec<ErrorRecord> = serde_json::from_str(&payload).expect("parse");
        assert_eq!(parsed, log.records());
        assert!(payload.contains("\"field\":\"name\""));
    }
}
