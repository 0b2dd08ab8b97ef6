//! Owner operations.
//!
//! This module handles:
//! - One-time configuration of the token pair and counterpart
//! - Enabling and disabling the operational gate

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::protocol::initialize_msg;
use crate::state::{Config, TokenBinding, CONFIG, GATEWAY_STATE};

fn ensure_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Identities are matched byte for byte, so padding is rejected rather than stripped.
fn validate_identity(value: String, field: &str) -> Result<String, ContractError> {
    if value.trim().is_empty() {
        return Err(ContractError::InvalidIdentity {
            reason: format!("{} must not be empty", field),
        });
    }
    if value.trim() != value {
        return Err(ContractError::InvalidIdentity {
            reason: format!("{} must not have leading or trailing whitespace", field),
        });
    }
    Ok(value)
}

// ============================================================================
// Configuration
// ============================================================================

/// Bind the token pair and counterpart, initialize the protocol, and enable
/// transfers.
pub fn execute_configure(
    deps: DepsMut,
    info: MessageInfo,
    source_token: String,
    destination_token: String,
    counterpart: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    // A second configure fails the same way whatever its arguments are
    let current = GATEWAY_STATE.load(deps.storage)?;
    if current.is_configured() {
        return Err(ContractError::AlreadyConfigured);
    }

    let binding = TokenBinding {
        source_token: validate_identity(source_token, "source_token")?,
        destination_token: validate_identity(destination_token, "destination_token")?,
        counterpart: validate_identity(counterpart, "counterpart")?,
    };

    let state = current.configure(binding.clone())?;
    GATEWAY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_message(initialize_msg(&config, &binding.counterpart)?)
        .add_attribute("method", "configure")
        .add_attribute("source_token", binding.source_token)
        .add_attribute("destination_token", binding.destination_token)
        .add_attribute("counterpart", binding.counterpart)
        .add_attribute("gate", config.domain.gate_name())
        .add_attribute("enabled", "true"))
}

// ============================================================================
// Operational Gate
// ============================================================================

/// Open the gate. Requires a configured gateway.
pub fn execute_enable(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let state = GATEWAY_STATE.load(deps.storage)?.enable()?;
    GATEWAY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "enable")
        .add_attribute("gate", config.domain.gate_name())
        .add_attribute("enabled", "true"))
}

/// Close the gate (circuit breaker, always allowed).
pub fn execute_disable(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let state = GATEWAY_STATE.load(deps.storage)?.disable();
    GATEWAY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "disable")
        .add_attribute("gate", config.domain.gate_name())
        .add_attribute("enabled", "false"))
}
