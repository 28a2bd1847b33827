//! Port definitions (boundary interfaces)
//!
//! Ports are the interfaces the client core depends on, with
//! implementations living in adapter crates.
//!
//! - [`Sender`] - Outbound delivery of encoded payloads

pub mod transport;

pub use transport::Sender;
