//! String length truncation
//!
//! Walks the whole document and caps string values on a descending
//! threshold ladder. Each pass accumulates the exact byte savings through
//! the payload's incremental size counter and re-encodes once, so budget
//! checks between passes stay accurate without per-edit re-serialization.

use serde_json::Value;

use crate::payload::EncodedPayload;
use crate::strategy::{TruncationContext, TruncationStrategy};

/// Descending ladder of maximum string lengths, in bytes.
pub const STRING_THRESHOLDS: [usize; 3] = [1024, 512, 256];

/// Traversal depth cap; values nested deeper are left untouched rather
/// than risking stack exhaustion on adversarial documents.
const MAX_DEPTH: usize = 128;

/// Caps every string value in the document, tightening threshold by
/// threshold until the payload fits the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLengthStrategy;

impl TruncationStrategy for StringLengthStrategy {
    fn name(&self) -> &'static str {
        "string_length"
    }

    fn applies(&self, _payload: &EncodedPayload) -> bool {
        true
    }

    fn execute(&self, payload: &mut EncodedPayload, ctx: &TruncationContext) {
        for &threshold in STRING_THRESHOLDS.iter() {
            if !ctx.over_budget(payload) {
                break;
            }
            let mut saved = 0;
            let changed = shrink_strings(payload.data(), threshold, 0, &mut saved);
            if changed {
                payload.decrease_size(saved);
                payload.encode();
            }
        }
    }
}

/// Recursively truncate strings longer than `threshold` bytes, adding the
/// exact serialized byte savings to `saved`. Returns whether anything changed.
fn shrink_strings(value: &mut Value, threshold: usize, depth: usize, saved: &mut usize) -> bool {
    if depth > MAX_DEPTH {
        return false;
    }
    match value {
        Value::String(s) => {
            if s.len() <= threshold {
                return false;
            }
            let encoded_before = encoded_len(s);
            s.truncate(find_char_boundary(s, threshold));
            *saved += encoded_before.saturating_sub(encoded_len(s));
            true
        }
        Value::Array(items) => {
            let mut changed = false;
            for item in items {
                changed |= shrink_strings(item, threshold, depth + 1, saved);
            }
            changed
        }
        Value::Object(map) => {
            let mut changed = false;
            for item in map.values_mut() {
                changed |= shrink_strings(item, threshold, depth + 1, saved);
            }
            changed
        }
        _ => false,
    }
}

/// Serialized length of a string value, including quotes and escapes.
fn encoded_len(s: &str) -> usize {
    serde_json::to_vec(s).map_or(s.len() + 2, |v| v.len())
}

/// Largest char boundary at or below `pos`.
pub(crate) fn find_char_boundary(s: &str, mut pos: usize) -> usize {
    pos = pos.min(s.len());
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
