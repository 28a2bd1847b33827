//! Outbound transport port (driven/secondary port)
//!
//! Defines the interface for delivering an encoded payload to the remote
//! collector. The payload handed to the port is already serialized and
//! already truncated; the transport does not inspect or modify it.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because delivery errors are adapter-specific
//!   (HTTP status codes, DNS failures) and carry no domain meaning.
//! - Uses `#[async_trait]` for async trait methods.

use async_trait::async_trait;

/// Delivers encoded payloads to the collector.
#[async_trait]
pub trait Sender: Send + Sync {
    /// Send one serialized payload.
    ///
    /// The bytes are the final wire form; implementations must transmit
    /// them verbatim.
    async fn send(&self, payload: &[u8]) -> anyhow::Result<()>;
}
