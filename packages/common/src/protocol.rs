//! Underlying bridge protocol interface.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Execute messages understood by the generic bridge protocol contract.
#[cw_serde]
pub enum ProtocolExecuteMsg {
    /// Bind the protocol to its counterpart on the other domain.
    ///
    /// Sent exactly once, by the gateway, while it is being configured.
    Initialize {
        counterpart: String,
        router: String,
        /// Inbox reference, present on the origin domain only
        inbox: Option<String>,
    },

    /// Start a transfer that leaves this domain.
    ///
    /// The response data is the protocol's receipt for the transfer.
    OutboundTransfer {
        token: String,
        refund_to: String,
        to: String,
        amount: Uint128,
        max_gas: u64,
        gas_price_bid: Uint128,
        data: Binary,
    },

    /// Complete a transfer that arrived at this domain.
    FinalizeInboundTransfer {
        token: String,
        from: String,
        to: String,
        amount: Uint128,
        data: Binary,
        /// Account that delivered the call to the gateway. The protocol
        /// authenticates it against the counterpart registered in `Initialize`.
        sender: String,
    },
}
