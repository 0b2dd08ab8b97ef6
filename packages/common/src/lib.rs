//! Common - Shared Types for the Custom Token Gateway
//!
//! This package defines the message interface of the underlying bridge
//! protocol, so that the gateway and any protocol implementation agree on
//! the wire format without depending on each other.

pub mod protocol;

pub use protocol::ProtocolExecuteMsg;
