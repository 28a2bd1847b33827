//! Report document shape shared across the client.
//!
//! A report travels as a JSON document: an envelope carrying the access
//! token and a `data` object whose `body` holds the diagnostic content.
//! The field paths below are a contract between the report builder, the
//! truncation engine, and the collector:
//!
//! - `data.body.trace` — a single trace: `frames` array plus `exception`
//! - `data.body.trace_chain` — array of traces, same shape each
//! - `data.body.telemetry` — array of breadcrumb events
//!
//! This module fixes those paths in one place and provides the envelope
//! constructor; building the body itself is the reporter's job.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// Envelope metadata attached to every outbound report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub id: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
}

impl ReportMeta {
    /// Create fresh metadata for a new report.
    pub fn new(environment: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: environment.to_string(),
        }
    }
}

/// Wrap a report body in the wire envelope.
///
/// Produces `{"access_token": ..., "data": {<meta fields>, "body": ...}}`.
pub fn envelope(meta: &ReportMeta, access_token: Option<&str>, body: Value) -> Value {
    json!({
        "access_token": access_token.unwrap_or(""),
        "data": {
            "id": meta.id,
            "timestamp": meta.timestamp,
            "notifier_version": meta.version,
            "environment": meta.environment,
            "body": body,
        }
    })
}

/// The `data.body` object of a report document, if present.
pub fn body(doc: &Value) -> Option<&Value> {
    doc.get("data")?.get("body")
}

/// Mutable access to the `data.body` object.
pub fn body_mut(doc: &mut Value) -> Option<&mut Value> {
    doc.get_mut("data")?.get_mut("body")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_meta_creation() {
        let meta = ReportMeta::new("production");
        assert!(!meta.id.is_empty());
        assert_eq!(meta.environment, "production");
    }

    #[test]
    fn test_envelope_shape() {
        let meta = ReportMeta::new("test");
        let doc = envelope(&meta, Some("tok"), json!({"message": {"body": "boom"}}));

        assert_eq!(doc["access_token"], "tok");
        assert_eq!(doc["data"]["environment"], "test");
        assert_eq!(doc["data"]["body"]["message"]["body"], "boom");
    }

    #[test]
    fn test_envelope_without_token() {
        let meta = ReportMeta::new("test");
        let doc = envelope(&meta, None, json!({}));
        assert_eq!(doc["access_token"], "");
    }

    #[test]
    fn test_body_accessors() {
        let meta = ReportMeta::new("test");
        let mut doc = envelope(&meta, None, json!({"trace": {"frames": []}}));

        assert!(body(&doc).is_some());
        assert!(body(&doc).unwrap().get("trace").is_some());

        body_mut(&mut doc).unwrap()["trace"]["frames"] = json!([{"filename": "a.rs"}]);
        assert_eq!(body(&doc).unwrap()["trace"]["frames"][0]["filename"], "a.rs");
    }

    #[test]
    fn test_body_absent() {
        assert!(body(&json!({"access_token": ""})).is_none());
        assert!(body(&json!("not an object")).is_none());
    }
}
