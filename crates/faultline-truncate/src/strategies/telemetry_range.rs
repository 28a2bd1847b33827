//! Telemetry range truncation
//!
//! Breadcrumb history grows linearly with runtime before the error; it
//! rarely deserves 128 KiB of budget. This strategy keeps the oldest and
//! newest events, or removes the field entirely when telemetry capture is
//! switched off in configuration.

use faultline_core::report;
use serde_json::Value;

use crate::payload::EncodedPayload;
use crate::strategies::frame_range::keep_ends;
use crate::strategy::{TruncationContext, TruncationStrategy};

/// Default number of telemetry events kept at each end.
pub const DEFAULT_TELEMETRY_RANGE: usize = 5;

/// Trims the telemetry event history to `range` events at each end.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryRangeStrategy {
    range: usize,
}

impl TelemetryRangeStrategy {
    /// Create a strategy keeping `range` events at each end.
    pub fn new(range: usize) -> Self {
        Self { range }
    }
}

impl Default for TelemetryRangeStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_TELEMETRY_RANGE)
    }
}

impl TruncationStrategy for TelemetryRangeStrategy {
    fn name(&self) -> &'static str {
        "telemetry_range"
    }

    fn applies(&self, payload: &EncodedPayload) -> bool {
        report::body(payload.document()).is_some_and(|body| body.get("telemetry").is_some())
    }

    fn execute(&self, payload: &mut EncodedPayload, ctx: &TruncationContext) {
        let mut changed = false;
        if let Some(body) = report::body_mut(payload.data()).and_then(Value::as_object_mut) {
            if !ctx.capture_telemetry() {
                changed = body.remove("telemetry").is_some();
            } else if let Some(events) = body.get_mut("telemetry") {
                changed = keep_ends(events, self.range);
            }
        }
        if changed {
            payload.encode();
        }
    }
}
