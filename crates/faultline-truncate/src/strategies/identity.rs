//! Identity (no-op) strategy
//!
//! Applies to everything and changes nothing. Useful as a disabled
//! placeholder in a custom chain.

use crate::payload::EncodedPayload;
use crate::strategy::{TruncationContext, TruncationStrategy};

/// A strategy that leaves the payload untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStrategy;

impl TruncationStrategy for IdentityStrategy {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn applies(&self, _payload: &EncodedPayload) -> bool {
        true
    }

    fn execute(&self, _payload: &mut EncodedPayload, _ctx: &TruncationContext) {}
}
