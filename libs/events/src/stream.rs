//! Stream schemas and the positional analytics event.
//!
//! A stream is a named, versioned schema of positional fields. The field
//! count is part of the contract: [`AnalyticsEvent::new`] rejects payloads
//! whose length does not match the declared arity, so an index-drift bug
//! surfaces at the publish boundary instead of on the consuming side.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::EventError;

/// A single typed value in a positional field vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// UTF-8 string field.
    Str(String),
    /// Boolean flag field.
    Bool(bool),
    /// Integer field.
    Int(i64),
    /// Wall-clock instant as epoch milliseconds.
    Timestamp(i64),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{}", s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Timestamp(ms) => write!(f, "{}", ms),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

/// A named, versioned positional stream schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDef {
    /// Stream name, stable across versions.
    pub name: &'static str,
    /// Schema version. Any change to field order or count bumps this.
    pub version: &'static str,
    /// Number of fields in the positional payload.
    pub arity: usize,
}

impl StreamDef {
    /// Returns the wire identifier of this schema, `name:version`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

impl std::fmt::Display for StreamDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}

/// Stream schema definitions as constants.
pub mod streams {
    use super::StreamDef;

    /// Authentication step and overall-outcome records.
    pub const AUTHENTICATION: StreamDef = StreamDef {
        name: "OverallAuthentication",
        version: "1.0.0",
        arity: 20,
    };

    /// Session create/update/terminate records.
    pub const SESSION: StreamDef = StreamDef {
        name: "OverallSession",
        version: "1.0.0",
        arity: 11,
    };
}

/// One analytics record bound for the telemetry sink.
///
/// Carries the qualified stream id, the publish timestamp, optional
/// metadata/correlation attachments, and the positional payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    /// Qualified stream id (`name:version`).
    pub stream: String,

    /// Publish instant as epoch milliseconds.
    pub timestamp: i64,

    /// Sink-defined metadata attachment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Sink-defined correlation attachment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<serde_json::Value>,

    /// The positional field vector.
    pub payload: Vec<FieldValue>,
}

impl AnalyticsEvent {
    /// Creates an event for `stream`, validating the payload arity.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ArityMismatch`] if `payload` does not have
    /// exactly `stream.arity` fields.
    pub fn new(
        stream: StreamDef,
        occurred_at: DateTime<Utc>,
        payload: Vec<FieldValue>,
    ) -> Result<Self, EventError> {
        if payload.len() != stream.arity {
            return Err(EventError::ArityMismatch {
                stream: stream.name,
                expected: stream.arity,
                actual: payload.len(),
            });
        }

        Ok(Self {
            stream: stream.qualified_name(),
            timestamp: occurred_at.timestamp_millis(),
            metadata: None,
            correlation: None,
            payload,
        })
    }

    /// Serializes the event to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, EventError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_qualified_names() {
        assert_eq!(
            streams::AUTHENTICATION.qualified_name(),
            "OverallAuthentication:1.0.0"
        );
        assert_eq!(streams::SESSION.qualified_name(), "OverallSession:1.0.0");
    }

    #[test]
    fn test_field_value_serializes_flat() {
        let json = serde_json::to_string(&vec![
            FieldValue::Str("alice".to_string()),
            FieldValue::Bool(true),
            FieldValue::Int(2),
            FieldValue::Timestamp(1700000000000),
        ])
        .unwrap();
        assert_eq!(json, r#"["alice",true,2,1700000000000]"#);
    }

    #[test]
    fn test_event_rejects_wrong_arity() {
        let err = AnalyticsEvent::new(
            streams::SESSION,
            at_millis(1700000000000),
            vec![FieldValue::Str("sess".to_string())],
        )
        .unwrap_err();

        match err {
            EventError::ArityMismatch {
                stream,
                expected,
                actual,
            } => {
                assert_eq!(stream, "OverallSession");
                assert_eq!(expected, 11);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_event_accepts_exact_arity() {
        let payload = vec![FieldValue::Int(0); streams::SESSION.arity];
        let event =
            AnalyticsEvent::new(streams::SESSION, at_millis(1700000000000), payload).unwrap();

        assert_eq!(event.stream, "OverallSession:1.0.0");
        assert_eq!(event.timestamp, 1700000000000);
        assert_eq!(event.payload.len(), 11);
        assert!(event.metadata.is_none());
        assert!(event.correlation.is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let payload = vec![FieldValue::Str("s".to_string()); streams::SESSION.arity];
        let event = AnalyticsEvent::new(streams::SESSION, at_millis(42), payload).unwrap();
        let json: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

        assert_eq!(json["stream"], "OverallSession:1.0.0");
        assert_eq!(json["timestamp"], 42);
        assert_eq!(json["payload"].as_array().unwrap().len(), 11);
        // Absent attachments are omitted, not null.
        assert!(json.get("metadata").is_none());
    }
}
