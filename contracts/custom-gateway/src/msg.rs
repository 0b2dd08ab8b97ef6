//! Message types for the custom token gateway
//!
//! This module defines all messages for instantiation, execution, queries and
//! migration.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{Domain, TokenBinding};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Domain selection at instantiation
#[cw_serde]
pub enum DomainMsg {
    /// Origin domain, where the custom token is native
    Origin { inbox: String },
    /// Destination domain, where its representation circulates
    Destination {},
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner allowed to configure and toggle the gateway
    pub owner: String,
    /// Cross-domain message router
    pub router: String,
    /// Underlying bridge protocol contract
    pub protocol: String,
    /// Deployment domain
    pub domain: DomainMsg,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Administration (owner only)
    // ========================================================================
    /// Bind the token pair and counterpart, initialize the protocol, and
    /// enable transfers. Allowed once.
    Configure {
        /// Token on the domain where it is native
        source_token: String,
        /// Token representation on the other domain
        destination_token: String,
        /// Mirrored gateway on the other domain
        counterpart: String,
    },

    /// Open the gate (deposits on origin, withdrawals on destination)
    Enable {},

    /// Close the gate. Always allowed.
    Disable {},

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Start a transfer of the allowed token to the other domain.
    ///
    /// Attached funds are forwarded to the protocol. On the destination
    /// domain `max_gas`, `gas_price_bid` and `refund_to` are not used and are
    /// normalized before delegation.
    OutboundTransfer {
        token: String,
        /// Recipient on the other domain
        to: String,
        amount: Uint128,
        #[serde(default)]
        max_gas: u64,
        #[serde(default)]
        gas_price_bid: Uint128,
        #[serde(default)]
        data: Binary,
        /// Refund recipient, defaults to `to`
        refund_to: Option<String>,
    },

    /// Complete a transfer delivered from the counterpart gateway.
    FinalizeInboundTransfer {
        token: String,
        /// Sender on the other domain
        from: String,
        /// Recipient on this domain
        to: String,
        amount: Uint128,
        #[serde(default)]
        data: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns construction-time configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns configuration and gate state
    #[returns(StatusResponse)]
    Status {},

    /// Returns the destination token for any input token
    #[returns(DestinationTokenResponse)]
    DestinationToken { token: String },

    /// Returns the counterpart gateway
    #[returns(CounterpartResponse)]
    Counterpart {},

    /// Returns whether an outbound transfer currently holds the lock
    #[returns(IsLockedResponse)]
    IsLocked {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub router: Addr,
    pub protocol: Addr,
    pub domain: Domain,
}

#[cw_serde]
pub struct StatusResponse {
    pub configured: bool,
    pub enabled: bool,
    /// "deposits" or "withdrawals"
    pub gate: String,
    pub binding: Option<TokenBinding>,
}

#[cw_serde]
pub struct DestinationTokenResponse {
    /// `None` until the gateway is configured
    pub destination_token: Option<String>,
}

#[cw_serde]
pub struct CounterpartResponse {
    pub counterpart: Option<String>,
}

#[cw_serde]
pub struct IsLockedResponse {
    pub locked: bool,
}
