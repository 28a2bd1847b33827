//! Frame range truncation
//!
//! Long stack traces carry most of their diagnostic value at the ends:
//! the entry point and the crash site. This strategy keeps the first and
//! last `range` frames of every trace and drops the middle.

use faultline_core::report;
use serde_json::Value;

use crate::payload::EncodedPayload;
use crate::strategy::{TruncationContext, TruncationStrategy};

/// Default number of frames kept at each end of a trace.
pub const DEFAULT_FRAME_RANGE: usize = 75;

/// Trims stack traces to `range` frames at each end.
#[derive(Debug, Clone, Copy)]
pub struct FrameRangeStrategy {
    range: usize,
}

impl FrameRangeStrategy {
    /// Create a strategy keeping `range` frames at each end.
    pub fn new(range: usize) -> Self {
        Self { range }
    }
}

impl Default for FrameRangeStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RANGE)
    }
}

impl TruncationStrategy for FrameRangeStrategy {
    fn name(&self) -> &'static str {
        "frame_range"
    }

    fn applies(&self, payload: &EncodedPayload) -> bool {
        let Some(body) = report::body(payload.document()) else {
            return false;
        };
        if body.get("trace").and_then(|t| t.get("frames")).is_some() {
            return true;
        }
        body.get("trace_chain")
            .and_then(Value::as_array)
            .is_some_and(|chain| chain.iter().any(|t| t.get("frames").is_some()))
    }

    fn execute(&self, payload: &mut EncodedPayload, _ctx: &TruncationContext) {
        let mut changed = false;
        if let Some(body) = report::body_mut(payload.data()) {
            if let Some(frames) = body.get_mut("trace").and_then(|t| t.get_mut("frames")) {
                changed |= keep_ends(frames, self.range);
            }
            if let Some(chain) = body.get_mut("trace_chain").and_then(Value::as_array_mut) {
                for trace in chain {
                    if let Some(frames) = trace.get_mut("frames") {
                        changed |= keep_ends(frames, self.range);
                    }
                }
            }
        }
        if changed {
            payload.encode();
        }
    }
}

/// Keep the first and last `range` elements of a JSON array, preserving
/// order within the kept segments. Returns whether anything was removed.
pub(crate) fn keep_ends(value: &mut Value, range: usize) -> bool {
    let Some(items) = value.as_array_mut() else {
        return false;
    };
    if items.len() <= range * 2 {
        return false;
    }
    let tail = items.split_off(items.len() - range);
    items.truncate(range);
    items.extend(tail);
    true
}
