//! Integration tests: full truncation runs through the engine
//!
//! Exercises the default chain end to end on realistic report documents
//! and verifies custom-strategy ordering.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{json, Value};

use faultline_core::report::{envelope, ReportMeta};
use faultline_truncate::{
    EncodedPayload, TruncationContext, TruncationEngine, TruncationStrategy, MAX_PAYLOAD_SIZE,
};

fn frame(i: usize) -> Value {
    json!({
        "filename": format!("src/deep/module_{i}.rs"),
        "lineno": i,
        "method": "handle_request",
        "code": "x".repeat(600),
    })
}

fn trace_report(frame_count: usize) -> Value {
    let frames: Vec<Value> = (0..frame_count).map(frame).collect();
    let body = json!({"trace": {
        "frames": frames,
        "exception": {"class": "RequestError", "message": "boom"},
    }});
    envelope(&ReportMeta::new("test"), Some("tok"), body)
}

#[test]
fn test_oversize_trace_trimmed_to_budget() {
    let payload = EncodedPayload::new(trace_report(300));
    assert!(payload.size() > MAX_PAYLOAD_SIZE);

    let engine = TruncationEngine::new();
    let result = engine.truncate(payload);

    let frames = result.document()["data"]["body"]["trace"]["frames"]
        .as_array()
        .unwrap();
    assert_eq!(frames.len(), 150);
    assert!(result.size() <= MAX_PAYLOAD_SIZE);
    assert_eq!(result.size(), result.bytes().len());
}

#[test]
fn test_small_payload_byte_identical() {
    let payload = EncodedPayload::new(trace_report(10));
    assert!(payload.size() < MAX_PAYLOAD_SIZE);
    let before = payload.bytes().to_vec();

    let engine = TruncationEngine::new();
    let result = engine.truncate(payload);

    assert_eq!(
        result.document()["data"]["body"]["trace"]["frames"]
            .as_array()
            .unwrap()
            .len(),
        10
    );
    assert_eq!(result.bytes(), &before[..]);
}

#[test]
fn test_long_strings_reduced_by_ladder() {
    let entries: Vec<Value> = (0..150).map(|_| json!("y".repeat(2000))).collect();
    let body = json!({"message": {"body": "boom", "extra": entries}});
    let payload = EncodedPayload::new(envelope(&ReportMeta::new("test"), Some("tok"), body));
    assert!(payload.size() > MAX_PAYLOAD_SIZE);

    let engine = TruncationEngine::new();
    let result = engine.truncate(payload);

    assert!(result.size() <= MAX_PAYLOAD_SIZE);
    let extra = result.document()["data"]["body"]["message"]["extra"]
        .as_array()
        .unwrap();
    assert!(extra.iter().all(|v| v.as_str().unwrap().len() <= 512));
}

#[test]
fn test_best_effort_when_budget_unreachable() {
    // A tiny budget no strategy can reach; the engine must still return
    // the most-truncated version instead of erroring.
    let payload = EncodedPayload::new(trace_report(300));
    let engine = TruncationEngine::with_limit(16);
    let result = engine.truncate(payload);

    assert!(result.size() > 16);
    assert_eq!(
        result.document()["data"]["body"]["trace"]["frames"]
            .as_array()
            .unwrap()
            .len(),
        150
    );
}

static MARKER_RUNS: AtomicUsize = AtomicUsize::new(0);

struct MarkerStrategy;

impl TruncationStrategy for MarkerStrategy {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn applies(&self, _payload: &EncodedPayload) -> bool {
        true
    }

    fn execute(&self, payload: &mut EncodedPayload, _ctx: &TruncationContext) {
        MARKER_RUNS.fetch_add(1, Ordering::SeqCst);
        payload.replace(json!({"marker": true}));
    }
}

fn marker_factory() -> Box<dyn TruncationStrategy> {
    Box::new(MarkerStrategy)
}

#[test]
fn test_registered_strategy_runs_before_defaults() {
    let mut engine = TruncationEngine::new();
    engine.register_strategy(marker_factory).unwrap();

    let result = engine.truncate(EncodedPayload::new(trace_report(300)));

    // Had frame-range run first it would have brought the payload under
    // budget and the marker would never have executed.
    assert_eq!(MARKER_RUNS.load(Ordering::SeqCst), 1);
    assert_eq!(result.document(), &json!({"marker": true}));
}
