//! Faultline Truncate - Payload size reduction
//!
//! Shrinks an already-encoded report below the collector's size budget
//! (128 KiB) via an ordered, extensible chain of strategies.
//!
//! Provides:
//! - `EncodedPayload`: Document plus cached serialization and byte size
//! - `TruncationStrategy`: The two-operation strategy contract
//! - `TruncationEngine`: Drives the strategy chain against the budget
//! - Built-in strategies: frame range, string length, telemetry range,
//!   minimal body, identity

pub mod engine;
pub mod error;
pub mod payload;
pub mod strategies;
pub mod strategy;

pub use engine::{TruncationEngine, MAX_PAYLOAD_SIZE};
pub use error::TruncationError;
pub use payload::EncodedPayload;
pub use strategies::{
    FrameRangeStrategy, IdentityStrategy, MinimalBodyStrategy, StringLengthStrategy,
    TelemetryRangeStrategy,
};
pub use strategy::{StrategyFactory, TruncationContext, TruncationStrategy};
