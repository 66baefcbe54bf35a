//! Trigger event and invocation context types.
//!
//! The exporter is wired to an event-bus delivery mechanism (a Pub/Sub
//! subscription in the original deployment). The payload is opaque to this
//! program: it is accepted for signature compatibility and never inspected,
//! so a missing or malformed payload can never block an export.

use crate::domain::errors::{ExportError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// The message delivered by the event bus. Opaque; never inspected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriggerEvent {
    /// Base64 message body, if the bus attached one.
    pub data: Option<String>,
    pub attributes: HashMap<String, String>,
}

/// Metadata about the delivery itself, supplied alongside the event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriggerContext {
    pub event_id: Option<String>,
    pub timestamp: Option<String>,
    pub event_type: Option<String>,
    pub resource: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TriggerPayload {
    event: TriggerEvent,
    context: TriggerContext,
}

/// Loads the trigger payload from a JSON file of the shape
/// `{"event": {...}, "context": {...}}`.
///
/// No path yields default (empty) values, so the binary can always run
/// without a payload.
pub fn load_event(path: Option<&str>) -> Result<(TriggerEvent, TriggerContext)> {
    let Some(path) = path else {
        return Ok((TriggerEvent::default(), TriggerContext::default()));
    };

    let contents = fs::read_to_string(path)?;
    let payload: TriggerPayload = serde_json::from_str(&contents)
        .map_err(|e| ExportError::ParseError(format!("invalid trigger payload: {}", e)))?;
    Ok((payload.event, payload.context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_event_without_path() {
        let (event, context) = load_event(None).unwrap();
        assert!(event.data.is_none());
        assert!(context.event_id.is_none());
    }

    #[test]
    fn test_load_event_from_file() {
        let json = r#"
        {
            "event": {"data": "eyJrIjoidiJ9", "attributes": {"origin": "scheduler"}},
            "context": {"event_id": "1234", "event_type": "google.pubsub.topic.publish"}
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();

        let (event, context) = load_event(file.path().to_str()).unwrap();
        assert_eq!(event.data.as_deref(), Some("eyJrIjoidiJ9"));
        assert_eq!(event.attributes.get("origin").map(String::as_str), Some("scheduler"));
        assert_eq!(context.event_id.as_deref(), Some("1234"));
        assert!(context.timestamp.is_none());
    }

    #[test]
    fn test_load_event_rejects_malformed_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_event(file.path().to_str()).is_err());
    }

    #[test]
    fn test_load_event_missing_file() {
        assert!(load_event(Some("/nonexistent/event.json")).is_err());
    }
}
