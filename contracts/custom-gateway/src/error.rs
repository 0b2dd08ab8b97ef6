//! Error types for the custom token gateway.

use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Gateway already configured")]
    AlreadyConfigured,

    #[error("Gateway not configured")]
    NotConfigured,

    #[error("Invalid identity: {reason}")]
    InvalidIdentity { reason: String },

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Transfers disabled: {gate} are not enabled")]
    TransfersDisabled { gate: String },

    #[error("Token not supported: {token}")]
    UnsupportedToken { token: String },

    #[error("Reentrant call blocked: outbound transfer already in progress")]
    ReentrancyBlocked,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
