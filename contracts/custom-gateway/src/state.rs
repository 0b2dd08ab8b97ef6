//! State definitions for the custom token gateway
//!
//! The configuration lifecycle and the operational gate live in a single
//! `GatewayState` enum so that an enabled gate without a token binding cannot
//! be stored.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Domain this instance is deployed on
#[cw_serde]
pub enum Domain {
    /// Domain where the custom token is natively held
    Origin {
        /// Inbox of the cross-domain messaging channel
        inbox: Addr,
    },
    /// Domain where the token's representation circulates
    Destination,
}

impl Domain {
    /// Name of the operational gate on this domain.
    pub fn gate_name(&self) -> &'static str {
        match self {
            Domain::Origin { .. } => "deposits",
            Domain::Destination => "withdrawals",
        }
    }

    /// Whether outbound transfers move value out of this contract's custody
    /// and therefore run under the outbound lock.
    pub fn holds_custody(&self) -> bool {
        matches!(self, Domain::Origin { .. })
    }

    pub fn inbox(&self) -> Option<&Addr> {
        match self {
            Domain::Origin { inbox } => Some(inbox),
            Domain::Destination => None,
        }
    }
}

/// Construction-time configuration (immutable)
#[cw_serde]
pub struct Config {
    /// Identity allowed to configure and toggle the gateway
    pub owner: Addr,
    /// Cross-domain message router
    pub router: Addr,
    /// Deployment domain
    pub domain: Domain,
    /// Underlying bridge protocol contract that transfers are delegated to
    pub protocol: Addr,
}

// ============================================================================
// Gateway Lifecycle
// ============================================================================

/// The single token pair served by this gateway and its counterpart.
///
/// Identities may belong to either domain, so they are kept as strings.
#[cw_serde]
pub struct TokenBinding {
    /// Token on the domain where it is native
    pub source_token: String,
    /// Token representation on the other domain
    pub destination_token: String,
    /// Mirrored gateway on the other domain
    pub counterpart: String,
}

#[cw_serde]
pub enum Gate {
    Enabled,
    Disabled,
}

#[cw_serde]
pub enum GatewayState {
    Unconfigured,
    Configured { binding: TokenBinding, gate: Gate },
}

impl GatewayState {
    /// `Unconfigured -> Configured { Enabled }`. Any other starting state is
    /// rejected, so the binding is written once.
    pub fn configure(&self, binding: TokenBinding) -> Result<GatewayState, ContractError> {
        match self {
            GatewayState::Unconfigured => Ok(GatewayState::Configured {
                binding,
                gate: Gate::Enabled,
            }),
            GatewayState::Configured { .. } => Err(ContractError::AlreadyConfigured),
        }
    }

    pub fn enable(&self) -> Result<GatewayState, ContractError> {
        match self {
            GatewayState::Unconfigured => Err(ContractError::NotConfigured),
            GatewayState::Configured { binding, .. } => Ok(GatewayState::Configured {
                binding: binding.clone(),
                gate: Gate::Enabled,
            }),
        }
    }

    /// Disabling never fails; an unconfigured gateway is already closed.
    pub fn disable(&self) -> GatewayState {
        match self {
            GatewayState::Unconfigured => GatewayState::Unconfigured,
            GatewayState::Configured { binding, .. } => GatewayState::Configured {
                binding: binding.clone(),
                gate: Gate::Disabled,
            },
        }
    }

    pub fn binding(&self) -> Option<&TokenBinding> {
        match self {
            GatewayState::Unconfigured => None,
            GatewayState::Configured { binding, .. } => Some(binding),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, GatewayState::Configured { .. })
    }

    pub fn is_enabled(&self) -> bool {
        matches!(
            self,
            GatewayState::Configured {
                gate: Gate::Enabled,
                ..
            }
        )
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custom-gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for delegated outbound transfers
pub const OUTBOUND_REPLY_ID: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const GATEWAY_STATE: Item<GatewayState> = Item::new("gateway_state");
