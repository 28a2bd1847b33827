//! Minimal body truncation
//!
//! Emergency reduction for payloads the regular chain could not shrink:
//! drops the exception description, caps the exception message, and cuts
//! every trace down to its first and last frame. Not part of the default
//! chain; callers escalate to it explicitly (for example after the
//! collector rejects a payload as too large).

use faultline_core::report;
use serde_json::Value;

use crate::payload::EncodedPayload;
use crate::strategies::frame_range::keep_ends;
use crate::strategies::string_length::find_char_boundary;
use crate::strategy::{TruncationContext, TruncationStrategy};

/// Maximum exception message length after reduction, in bytes.
const MESSAGE_LIMIT: usize = 256;

/// Reduces a report to the smallest still-useful form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalBodyStrategy;

impl TruncationStrategy for MinimalBodyStrategy {
    fn name(&self) -> &'static str {
        "minimal_body"
    }

    fn applies(&self, payload: &EncodedPayload) -> bool {
        report::body(payload.document()).is_some()
    }

    fn execute(&self, payload: &mut EncodedPayload, _ctx: &TruncationContext) {
        let mut changed = false;
        if let Some(body) = report::body_mut(payload.data()) {
            if let Some(trace) = body.get_mut("trace") {
                changed |= strip_trace(trace);
            }
            if let Some(chain) = body.get_mut("trace_chain").and_then(Value::as_array_mut) {
                for trace in chain {
                    changed |= strip_trace(trace);
                }
            }
        }
        if changed {
            payload.encode();
        }
    }
}

/// Strip one trace down to minimal form. Returns whether anything changed.
fn strip_trace(trace: &mut Value) -> bool {
    let mut changed = false;
    if let Some(exception) = trace.get_mut("exception").and_then(Value::as_object_mut) {
        changed |= exception.remove("description").is_some();
        if let Some(Value::String(message)) = exception.get_mut("message") {
            if message.len() > MESSAGE_LIMIT {
                message.truncate(find_char_boundary(message, MESSAGE_LIMIT));
                changed = true;
            }
        }
    }
    if let Some(frames) = trace.get_mut("frames") {
        changed |= keep_ends(frames, 1);
    }
    changed
}
