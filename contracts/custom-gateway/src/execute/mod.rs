//! Execute handlers for the custom token gateway.
//!
//! - `admin` - Configure, enable and disable (owner only)
//! - `transfer` - Outbound and inbound transfers and the outbound reply

mod admin;
mod transfer;

pub use admin::*;
pub use transfer::*;
