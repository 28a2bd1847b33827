//! Faultline Core - Shared domain types and boundaries
//!
//! Provides:
//! - `TelemetryConfig`: Client configuration, including the telemetry switch
//! - `report`: The report document shape shared with the truncation engine
//! - `Sender`: Outbound transport port

pub mod config;
pub mod ports;
pub mod report;

pub use config::TelemetryConfig;
pub use ports::Sender;
