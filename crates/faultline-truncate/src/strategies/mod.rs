//! Built-in truncation strategies
//!
//! Each strategy shrinks one aspect of the report document:
//! - [`FrameRangeStrategy`] - keeps the ends of long stack traces
//! - [`StringLengthStrategy`] - caps string values on a descending ladder
//! - [`TelemetryRangeStrategy`] - trims or drops the breadcrumb history
//! - [`MinimalBodyStrategy`] - last-resort reduction to a minimal report
//! - [`IdentityStrategy`] - no-op placeholder

pub mod frame_range;
pub mod identity;
pub mod minimal_body;
pub mod string_length;
pub mod telemetry_range;

pub use frame_range::FrameRangeStrategy;
pub use identity::IdentityStrategy;
pub use minimal_body::MinimalBodyStrategy;
pub use string_length::StringLengthStrategy;
pub use telemetry_range::TelemetryRangeStrategy;
