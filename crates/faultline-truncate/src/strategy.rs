//! Truncation strategy contract
//!
//! A strategy exposes a cheap applicability check and a shrink operation.
//! Strategies are stateless; anything they need from the engine (the size
//! budget, the telemetry switch) travels in a [`TruncationContext`] built
//! fresh for each truncation run.

use crate::payload::EncodedPayload;

/// One unit of the truncation chain.
pub trait TruncationStrategy {
    /// Stable identifier used for registration and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this strategy has anything to do for `payload`.
    ///
    /// Must be cheap and must not mutate the payload.
    fn applies(&self, payload: &EncodedPayload) -> bool;

    /// Shrink the payload in place.
    ///
    /// Implementations mutate the document and re-encode before
    /// returning, at most once per pass that changed something.
    fn execute(&self, payload: &mut EncodedPayload, ctx: &TruncationContext);
}

/// Constructor for a strategy, stored in the engine's chain.
///
/// The engine creates a fresh instance per truncation run, so strategies
/// never share state across payloads.
pub type StrategyFactory = fn() -> Box<dyn TruncationStrategy>;

/// Per-run engine state handed to each strategy.
#[derive(Debug, Clone, Copy)]
pub struct TruncationContext {
    limit: usize,
    capture_telemetry: bool,
}

impl TruncationContext {
    pub(crate) fn new(limit: usize, capture_telemetry: bool) -> Self {
        Self {
            limit,
            capture_telemetry,
        }
    }

    /// The size budget in bytes.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether telemetry breadcrumbs are collected at all.
    pub fn capture_telemetry(&self) -> bool {
        self.capture_telemetry
    }

    /// The single budget predicate: is the payload still too large?
    pub fn over_budget(&self, payload: &EncodedPayload) -> bool {
        payload.size() > self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_over_budget_predicate() {
        let ctx = TruncationContext::new(10, true);
        let small = EncodedPayload::new(json!({}));
        let large = EncodedPayload::new(json!({"k": "a long enough value"}));

        assert!(!ctx.over_budget(&small));
        assert!(ctx.over_budget(&large));
    }

    #[test]
    fn test_exactly_at_limit_is_within_budget() {
        let payload = EncodedPayload::new(json!({}));
        let ctx = TruncationContext::new(payload.size(), true);
        assert!(!ctx.over_budget(&payload));
    }
}
