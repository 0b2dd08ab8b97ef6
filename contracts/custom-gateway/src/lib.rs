//! Custom Token Gateway - Single-Asset Pass-Through over a Generic Token Bridge
//!
//! One token pair moves between an origin domain (where the token is native)
//! and a destination domain (where its representation circulates). The same
//! contract is deployed on both sides; the instantiate message picks the
//! domain. Message passing and settlement are left to an underlying bridge
//! protocol contract, which this gateway initializes once and then forwards
//! validated transfers to.
//!
//! # Lifecycle
//! 1. Instantiate with owner, router, protocol and domain (inbox on origin)
//! 2. Owner calls `Configure` once: binds the token pair and counterpart,
//!    initializes the protocol, and enables transfers
//! 3. Owner toggles the gate with `Enable` / `Disable` as needed
//!
//! # Transfers
//! - `OutboundTransfer` requires an open gate and the allowed token. On the
//!   origin domain it runs under a reentrancy lock until the protocol replies.
//! - `FinalizeInboundTransfer` requires the allowed token; the protocol
//!   authenticates the counterpart.

pub mod contract;
pub mod error;
mod execute;
pub mod lock;
pub mod msg;
pub mod protocol;
mod query;
pub mod state;

pub use crate::error::ContractError;
