//! Faultline Transport - Outbound payload delivery
//!
//! Implements the [`Sender`] port over HTTP: encoded payloads are POSTed
//! to the collector endpoint with the project access token.
//!
//! [`Sender`]: faultline_core::Sender

pub mod sender;

pub use sender::HttpSender;
