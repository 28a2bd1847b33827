//! Truncation engine
//!
//! Owns the ordered strategy chain and drives the shrink loop against the
//! size budget. The engine holds only immutable configuration and creates
//! a fresh strategy instance per run, so one engine can serve payloads
//! from many threads.

use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use faultline_core::TelemetryConfig;

use crate::error::TruncationError;
use crate::payload::EncodedPayload;
use crate::strategies::{FrameRangeStrategy, MinimalBodyStrategy, StringLengthStrategy};
use crate::strategy::{StrategyFactory, TruncationContext, TruncationStrategy};

/// Maximum serialized payload size accepted by the collector: 128 KiB.
pub const MAX_PAYLOAD_SIZE: usize = 131_072;

/// Drives the truncation strategy chain.
///
/// The default chain is frame-range trimming followed by the string
/// ladder; custom strategies registered with [`register_strategy`] run
/// before both. The budget is advisory: after the chain is exhausted the
/// engine returns its best effort even if the payload is still too large.
///
/// [`register_strategy`]: TruncationEngine::register_strategy
pub struct TruncationEngine {
    limit: usize,
    capture_telemetry: bool,
    chain: Vec<StrategyFactory>,
}

impl Default for TruncationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TruncationEngine {
    /// Engine with the standard 128 KiB budget.
    pub fn new() -> Self {
        Self::with_limit(MAX_PAYLOAD_SIZE)
    }

    /// Engine with a custom size budget in bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            capture_telemetry: true,
            chain: default_chain(),
        }
    }

    /// Engine configured from the client configuration.
    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self {
            capture_telemetry: config.capture_telemetry,
            ..Self::new()
        }
    }

    /// The size budget in bytes.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The single budget predicate: is the payload still too large?
    pub fn needs_truncating(&self, payload: &EncodedPayload) -> bool {
        payload.size() > self.limit
    }

    /// Register a custom strategy ahead of the defaults.
    ///
    /// The factory is probed once to validate the contract; on failure
    /// the existing chain is left untouched. Registered strategies get
    /// first refusal on every payload.
    pub fn register_strategy(&mut self, factory: StrategyFactory) -> Result<(), TruncationError> {
        let probe = factory();
        let name = probe.name();
        if name.trim().is_empty() {
            return Err(TruncationError::InvalidStrategy {
                name: "<unnamed>".to_string(),
                reason: "strategy name must not be empty".to_string(),
            });
        }
        if self.chain.iter().any(|f| f().name() == name) {
            return Err(TruncationError::InvalidStrategy {
                name: name.to_string(),
                reason: "a strategy with this name is already registered".to_string(),
            });
        }
        // The applicability check must be total over well-formed input;
        // probe it against an empty document.
        let empty = EncodedPayload::new(Value::Object(Map::new()));
        let _ = probe.applies(&empty);

        self.chain.insert(0, factory);
        debug!(strategy = name, "custom truncation strategy registered");
        Ok(())
    }

    /// Run the strategy chain until the payload fits the budget or the
    /// chain is exhausted.
    ///
    /// Best-effort: an oversize result is returned, not an error; the
    /// caller decides whether to drop, send anyway, or escalate to
    /// [`truncate_minimal`].
    ///
    /// [`truncate_minimal`]: TruncationEngine::truncate_minimal
    pub fn truncate(&self, mut payload: EncodedPayload) -> EncodedPayload {
        let ctx = self.context();
        for factory in &self.chain {
            if !self.needs_truncating(&payload) {
                break;
            }
            let strategy = factory();
            if !strategy.applies(&payload) {
                trace!(strategy = strategy.name(), "strategy not applicable, skipped");
                continue;
            }
            let before = payload.size();
            strategy.execute(&mut payload, &ctx);
            debug!(
                strategy = strategy.name(),
                before,
                after = payload.size(),
                "truncation strategy applied"
            );
        }
        if self.needs_truncating(&payload) {
            warn!(
                size = payload.size(),
                limit = self.limit,
                "payload still over budget after exhausting the chain"
            );
        }
        payload
    }

    /// Explicit last-resort reduction via the minimal-body strategy.
    ///
    /// Deliberately not part of [`truncate`]'s chain; escalation is a
    /// caller decision (for example after the collector rejects the
    /// payload as too large).
    ///
    /// [`truncate`]: TruncationEngine::truncate
    pub fn truncate_minimal(&self, mut payload: EncodedPayload) -> EncodedPayload {
        let ctx = self.context();
        let strategy = MinimalBodyStrategy;
        if strategy.applies(&payload) {
            let before = payload.size();
            strategy.execute(&mut payload, &ctx);
            debug!(
                before,
                after = payload.size(),
                "minimal-body reduction applied"
            );
        }
        payload
    }

    fn context(&self) -> TruncationContext {
        TruncationContext::new(self.limit, self.capture_telemetry)
    }
}

fn default_chain() -> Vec<StrategyFactory> {
    vec![frame_range_factory, string_length_factory]
}

fn frame_range_factory() -> Box<dyn TruncationStrategy> {
    Box::new(FrameRangeStrategy::default())
}

fn string_length_factory() -> Box<dyn TruncationStrategy> {
    Box::new(StringLengthStrategy)
}
